use super::error::SelectError;
use super::token::{Token, TokenSource};

/// Names of the two clause-bearing fields a descriptor may carry.
///
/// The selection logic is identical for the filter and query forms of the
/// descriptor; only the field names differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNames {
    pub primary: &'static str,
    pub fallback: &'static str,
}

impl FieldNames {
    /// `filter` / `no_match_filter`.
    pub const FILTER: FieldNames = FieldNames {
        primary: "filter",
        fallback: "no_match_filter",
    };

    /// `query` / `no_match_query`.
    pub const QUERY: FieldNames = FieldNames {
        primary: "query",
        fallback: "no_match_query",
    };
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames::FILTER
    }
}

/// The single clause chosen for the current index context.
///
/// The sentinels cover the `"all"` / `"none"` fallback shorthands and the
/// match-everything default applied when a descriptor omits the fallback
/// field entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum Selected<C> {
    /// A clause materialized from the descriptor.
    Clause(C),
    /// The match-everything sentinel.
    MatchAll,
    /// The match-nothing sentinel.
    MatchNone,
}

impl<C> Selected<C> {
    #[must_use]
    pub fn as_clause(&self) -> Option<&C> {
        match self {
            Selected::Clause(c) => Some(c),
            Selected::MatchAll | Selected::MatchNone => None,
        }
    }
}

/// Decoder for nested clause payloads.
///
/// `decode` is invoked with the stream positioned just past the clause
/// object's opening brace and must consume tokens through the matching close.
/// The selector never invokes the decoder for a clause it has ruled out; the
/// skipped payload is consumed structurally via
/// [`TokenSource::skip_value`] instead.
pub trait ClauseDecoder {
    type Clause;

    fn decode(&mut self, tokens: &mut dyn TokenSource) -> Result<Self::Clause, SelectError>;
}

/// A clause payload captured as its raw token stream, outer braces included.
#[derive(Debug, Clone, PartialEq)]
pub struct RawClause {
    tokens: Vec<Token>,
}

impl RawClause {
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Reference [`ClauseDecoder`] that buffers the payload verbatim.
///
/// Useful for deployments that forward the chosen clause unmodified, and as
/// the decoder in tests and benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDecoder;

impl ClauseDecoder for RawDecoder {
    type Clause = RawClause;

    fn decode(&mut self, tokens: &mut dyn TokenSource) -> Result<RawClause, SelectError> {
        let mut captured = vec![Token::BeginObject];
        let mut depth = 1_usize;
        while depth > 0 {
            let token = tokens.next_token()?;
            match token {
                Token::BeginObject | Token::BeginArray => depth += 1,
                Token::EndObject | Token::EndArray => depth -= 1,
                Token::FieldName(_) | Token::Scalar(_) => {}
            }
            captured.push(token);
        }
        Ok(RawClause { tokens: captured })
    }
}
