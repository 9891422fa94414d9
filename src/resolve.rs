use std::collections::BTreeMap;

use crate::types::simple_match;

/// Maps index name patterns to concrete index names.
///
/// Resolution may drop patterns that match nothing (missing names are not an
/// error) and may expand one pattern into many names (aliases, wildcards).
/// Implementations must be read-only with respect to concurrent selections;
/// the selector treats `resolve` as a synchronous call and imposes no retry
/// or timeout policy.
pub trait IndexResolver {
    fn resolve(&self, patterns: &[String]) -> Vec<String>;
}

/// An [`IndexResolver`] over a fixed snapshot of index topology.
///
/// Holds concrete index names plus alias entries pointing at their backing
/// indices. A literal pattern resolves to itself if it names a known index,
/// to its backing indices if it names an alias, and to nothing otherwise. A
/// wildcard pattern expands against both index and alias names.
///
/// # Example
///
/// ```
/// use selix::{IndexResolver, SnapshotResolver};
///
/// let snapshot = SnapshotResolver::new()
///     .index("logs-2024")
///     .index("logs-2025")
///     .alias("logs", &["logs-2024", "logs-2025"]);
///
/// let names = snapshot.resolve(&["logs".to_owned()]);
/// assert_eq!(names, ["logs-2024", "logs-2025"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotResolver {
    indices: Vec<String>,
    aliases: BTreeMap<String, Vec<String>>,
}

impl SnapshotResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concrete index to the snapshot.
    #[must_use]
    pub fn index(mut self, name: &str) -> Self {
        if !self.indices.iter().any(|n| n == name) {
            self.indices.push(name.to_owned());
        }
        self
    }

    /// Add an alias pointing at the given backing indices.
    #[must_use]
    pub fn alias(mut self, alias: &str, backing: &[&str]) -> Self {
        let entry = self.aliases.entry(alias.to_owned()).or_default();
        for name in backing {
            if !entry.iter().any(|n| n == name) {
                entry.push((*name).to_owned());
            }
        }
        self
    }
}

fn push_unique(out: &mut Vec<String>, name: &str) {
    if !out.iter().any(|n| n == name) {
        out.push(name.to_owned());
    }
}

impl IndexResolver for SnapshotResolver {
    fn resolve(&self, patterns: &[String]) -> Vec<String> {
        let mut out = Vec::new();
        for pattern in patterns {
            if pattern.contains('*') {
                for name in &self.indices {
                    if simple_match(pattern, name) {
                        push_unique(&mut out, name);
                    }
                }
                for (alias, backing) in &self.aliases {
                    if simple_match(pattern, alias) {
                        for name in backing {
                            push_unique(&mut out, name);
                        }
                    }
                }
            } else if let Some(backing) = self.aliases.get(pattern) {
                for name in backing {
                    push_unique(&mut out, name);
                }
            } else if self.indices.iter().any(|n| n == pattern) {
                push_unique(&mut out, pattern);
            }
            // Unknown literal: dropped silently (ignore-missing semantics).
        }
        out
    }
}
