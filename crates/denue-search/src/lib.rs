//! Search aggregation over the DENUE API.
//!
//! One [`SearchCriteria`](denue_core::SearchCriteria) becomes a set of
//! independent queries ([`plan_queries`]), which run concurrently against an
//! [`EstablishmentSource`]. Their results are flattened in query order,
//! deduplicated ([`dedup_companies`]) and filtered by size
//! ([`filter_by_size`]).

mod aggregator;
mod pipeline;
mod plan;
mod source;

pub use aggregator::{Aggregator, DEFAULT_MAX_CONCURRENCY};
pub use pipeline::{dedup_companies, filter_by_size};
pub use plan::{plan_queries, Query};
pub use source::EstablishmentSource;
