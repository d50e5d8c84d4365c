use denue_client::NATIONAL_REGION;
use denue_core::{GeoFilter, SearchCriteria};

/// One independent upstream request derived from a [`SearchCriteria`].
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    ByName { keyword: String, region: String },
    ByRadius { keyword: String, geo: GeoFilter },
}

impl Query {
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Query::ByName { keyword, .. } | Query::ByRadius { keyword, .. } => keyword,
        }
    }
}

/// Derives the queries for one search, in issue order.
///
/// With a geo filter, one radius query per keyword and the states are
/// ignored. Otherwise one by-name query per keyword and region pair,
/// keyword-major, where no usable state code means the national region.
/// Keywords and state codes are trimmed and blank entries dropped.
#[must_use]
pub fn plan_queries(criteria: &SearchCriteria) -> Vec<Query> {
    let keywords: Vec<&str> = non_blank(&criteria.keywords).collect();

    if let Some(geo) = criteria.geo {
        return keywords
            .into_iter()
            .map(|keyword| Query::ByRadius {
                keyword: keyword.to_string(),
                geo,
            })
            .collect();
    }

    let mut regions: Vec<&str> = non_blank(&criteria.states).collect();
    if regions.is_empty() {
        regions.push(NATIONAL_REGION);
    }

    keywords
        .iter()
        .flat_map(|keyword| {
            regions.iter().map(move |region| Query::ByName {
                keyword: (*keyword).to_string(),
                region: (*region).to_string(),
            })
        })
        .collect()
}

fn non_blank(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
}
