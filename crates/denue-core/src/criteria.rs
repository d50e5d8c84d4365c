use std::collections::BTreeSet;

use crate::company::SizeCategory;

/// Geographic filter for radius searches. Only constructed when latitude,
/// longitude and radius were all supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
}

impl GeoFilter {
    /// Builds a filter when all three parts are present.
    #[must_use]
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_meters: Option<u32>,
    ) -> Option<Self> {
        Some(Self {
            latitude: latitude?,
            longitude: longitude?,
            radius_meters: radius_meters?,
        })
    }
}

/// Everything one search needs.
///
/// An empty `states` list means a national search, an empty `sizes` set means
/// no size filtering. When `geo` is set, `states` is ignored.
#[derive(Clone, PartialEq)]
pub struct SearchCriteria {
    pub token: String,
    pub keywords: Vec<String>,
    pub states: Vec<String>,
    pub sizes: BTreeSet<SizeCategory>,
    pub geo: Option<GeoFilter>,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(token: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            token: token.into(),
            keywords,
            states: Vec::new(),
            sizes: BTreeSet::new(),
            geo: None,
        }
    }

    #[must_use]
    pub fn with_states(mut self, states: Vec<String>) -> Self {
        self.states = states;
        self
    }

    #[must_use]
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = SizeCategory>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_geo(mut self, geo: Option<GeoFilter>) -> Self {
        self.geo = geo;
        self
    }
}

impl std::fmt::Debug for SearchCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCriteria")
            .field("token", &"[redacted]")
            .field("keywords", &self.keywords)
            .field("states", &self.states)
            .field("sizes", &self.sizes)
            .field("geo", &self.geo)
            .finish()
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
