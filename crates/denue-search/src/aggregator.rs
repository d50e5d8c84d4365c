use denue_client::DenueError;
use denue_core::{Company, SearchCriteria};
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::pipeline::{dedup_companies, filter_by_size};
use crate::plan::{plan_queries, Query};
use crate::source::EstablishmentSource;

/// Upper bound on simultaneous upstream requests for one search.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Runs one search end to end: plan, fan out, flatten, dedup, filter.
///
/// Each call to [`Aggregator::aggregate`] is independent; nothing is carried
/// between searches.
pub struct Aggregator<S> {
    source: S,
    max_concurrency: usize,
}

impl<S: EstablishmentSource> Aggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Caps simultaneous requests. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs every query derived from `criteria` and returns the merged,
    /// deduplicated, size-filtered companies.
    ///
    /// Queries run concurrently up to the configured cap. Results are
    /// flattened in query-issue order whatever order the queries finish in.
    ///
    /// # Errors
    ///
    /// Returns the first [`DenueError`] to complete. The remaining in-flight
    /// requests are dropped at that point and no partial result is returned.
    pub async fn aggregate(&self, criteria: &SearchCriteria) -> Result<Vec<Company>, DenueError> {
        let queries = plan_queries(criteria);
        if queries.is_empty() {
            tracing::warn!("search has no usable keywords; nothing to query");
            return Ok(Vec::new());
        }

        let query_count = queries.len();
        let token = criteria.token.as_str();
        tracing::debug!(
            query_count,
            max_concurrency = self.max_concurrency,
            "running DENUE queries"
        );

        // Dropping the stream on the first error cancels the pending futures.
        let mut batches: Vec<(usize, Vec<Company>)> = stream::iter(queries.iter().enumerate())
            .map(move |(index, query)| async move {
                let companies = self.run_query(token, query).await?;
                tracing::debug!(
                    index,
                    keyword = query.keyword(),
                    results = companies.len(),
                    "query finished"
                );
                Ok::<_, DenueError>((index, companies))
            })
            .buffer_unordered(self.max_concurrency)
            .try_collect()
            .await?;

        batches.sort_unstable_by_key(|(index, _)| *index);

        let fetched: usize = batches.iter().map(|(_, companies)| companies.len()).sum();
        let unique = dedup_companies(batches.into_iter().flat_map(|(_, companies)| companies));
        let unique_count = unique.len();
        let companies = filter_by_size(unique, &criteria.sizes);

        tracing::info!(
            query_count,
            fetched,
            unique = unique_count,
            returned = companies.len(),
            "search complete"
        );

        Ok(companies)
    }

    async fn run_query(&self, token: &str, query: &Query) -> Result<Vec<Company>, DenueError> {
        match query {
            Query::ByName { keyword, region } => {
                self.source.search_by_name(token, keyword, region).await
            }
            Query::ByRadius { keyword, geo } => {
                self.source
                    .search_by_radius(
                        token,
                        keyword,
                        geo.latitude,
                        geo.longitude,
                        geo.radius_meters,
                    )
                    .await
            }
        }
    }
}
