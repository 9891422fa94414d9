/// Index name patterns accumulated from a descriptor.
///
/// Patterns keep their insertion order (irrelevant to matching, but it makes
/// resolution output deterministic) and resubmitting the same pattern is a
/// silent no-op. Submitting the pattern *field* twice is a descriptor error,
/// which the selector enforces separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPatternSet {
    patterns: Vec<String>,
}

impl IndexPatternSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }
}
