//! Size classification from the registry's employee-count bracket text.
//!
//! The registry describes headcount with free Spanish phrasing such as
//! `"6 a 10 personas"` or `"251 y más personas"`. Classification is a
//! best-effort substring heuristic over that text, not a parse: patterns are
//! tried in table order and the first hit wins. Text that matches nothing is
//! [`SizeCategory::Unknown`], which is a normal outcome rather than an error.

use crate::company::SizeCategory;

/// Ordered pattern table: Micro, then Small, then Medium, then Large.
///
/// Patterns are lowercase and matched against the trimmed, lowercased input.
pub const DEFAULT_BRACKETS: &[(SizeCategory, &[&str])] = &[
    (SizeCategory::Micro, &["0 a 10", "6 a", "de 0", "0-5", "0 a 5"]),
    (
        SizeCategory::Small,
        &["11 a", "15 a", "20 a", "25 a", "31 a", "50 a"],
    ),
    (
        SizeCategory::Medium,
        &["51 a", "100 a", "101 a", "200 a", "251 a"],
    ),
    (SizeCategory::Large, &["251 y más", "+"]),
];

/// Classifier backed by a replaceable pattern table.
#[derive(Debug, Clone, Copy)]
pub struct SizeClassifier<'a> {
    brackets: &'a [(SizeCategory, &'a [&'a str])],
}

impl Default for SizeClassifier<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_BRACKETS)
    }
}

impl<'a> SizeClassifier<'a> {
    #[must_use]
    pub fn new(brackets: &'a [(SizeCategory, &'a [&'a str])]) -> Self {
        Self { brackets }
    }

    /// Returns the category of the first pattern contained in `bracket`.
    #[must_use]
    pub fn classify(&self, bracket: &str) -> SizeCategory {
        let lowered = bracket.trim().to_lowercase();
        if lowered.is_empty() {
            return SizeCategory::Unknown;
        }
        self.brackets
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| lowered.contains(p)))
            .map_or(SizeCategory::Unknown, |(category, _)| *category)
    }
}

/// Classifies `bracket` with [`DEFAULT_BRACKETS`].
#[must_use]
pub fn classify_size(bracket: &str) -> SizeCategory {
    SizeClassifier::default().classify(bracket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_brackets_map_to_categories() {
        assert_eq!(classify_size("0 a 5 personas"), SizeCategory::Micro);
        assert_eq!(classify_size("6 a 10 personas"), SizeCategory::Micro);
        assert_eq!(classify_size("11 a 30 personas"), SizeCategory::Small);
        assert_eq!(classify_size("31 a 50 personas"), SizeCategory::Small);
        assert_eq!(classify_size("51 a 100 personas"), SizeCategory::Medium);
        assert_eq!(classify_size("101 a 250 personas"), SizeCategory::Medium);
        assert_eq!(classify_size("251 y más personas"), SizeCategory::Large);
    }

    #[test]
    fn matching_ignores_case_and_surrounding_whitespace() {
        assert_eq!(classify_size("  251 Y MÁS PERSONAS "), SizeCategory::Large);
        assert_eq!(classify_size("De 0 A 10"), SizeCategory::Micro);
    }

    #[test]
    fn earlier_category_wins_when_several_match() {
        // "0 a 10" is a Micro pattern and "+" a Large one.
        assert_eq!(classify_size("0 a 10 +"), SizeCategory::Micro);
    }

    #[test]
    fn unmatched_or_empty_text_is_unknown() {
        assert_eq!(classify_size(""), SizeCategory::Unknown);
        assert_eq!(classify_size("   "), SizeCategory::Unknown);
        assert_eq!(classify_size("sin información"), SizeCategory::Unknown);
    }

    #[test]
    fn classification_is_deterministic() {
        for text in ["6 a 10 personas", "251 y más personas", "???"] {
            assert_eq!(classify_size(text), classify_size(text));
        }
    }

    #[test]
    fn custom_table_replaces_defaults() {
        const TABLE: &[(SizeCategory, &[&str])] = &[
            (SizeCategory::Small, &["small"]),
            (SizeCategory::Large, &["big"]),
        ];
        let classifier = SizeClassifier::new(TABLE);
        assert_eq!(classifier.classify("a BIG shop"), SizeCategory::Large);
        assert_eq!(classifier.classify("6 a 10 personas"), SizeCategory::Unknown);
    }
}
