/// Whether the context index is covered by the descriptor's pattern set.
///
/// `Unknown` only while the pattern field has not been consumed yet. Once
/// computed the decision is fixed for the remainder of the decode: the
/// context index does not change mid-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDecision {
    Unknown,
    Matches,
    NoMatches,
}

impl MatchDecision {
    #[must_use]
    pub fn is_known(self) -> bool {
        self != MatchDecision::Unknown
    }
}

/// Anchored wildcard match: `*` matches zero or more characters, everything
/// else matches literally and case-sensitively. The whole pattern must cover
/// the whole name.
#[must_use]
pub fn simple_match(pattern: &str, name: &str) -> bool {
    match pattern.find('*') {
        None => pattern == name,
        Some(0) => {
            let rest = &pattern[1..];
            if rest.is_empty() {
                return true;
            }
            let mut start = 0;
            loop {
                if simple_match(rest, &name[start..]) {
                    return true;
                }
                match name[start..].chars().next() {
                    Some(c) => start += c.len_utf8(),
                    None => return false,
                }
            }
        }
        Some(pos) => {
            let prefix = &pattern[..pos];
            name.strip_prefix(prefix)
                .is_some_and(|tail| simple_match(&pattern[pos..], tail))
        }
    }
}

/// True if any entry of the concrete-index list matches the context index
/// name. An empty list matches nothing.
#[must_use]
pub fn matches_any(names: &[String], context_index: &str) -> bool {
    names.iter().any(|name| simple_match(name, context_index))
}
