mod parse;
mod resolve;
mod select;
mod types;

pub use parse::{tokens, JsonTokens};
pub use resolve::{IndexResolver, SnapshotResolver};
pub use select::ClauseSelector;
pub use types::{
    matches_any, simple_match, ClauseDecoder, FieldNames, IndexPatternSet, MatchDecision,
    RawClause, RawDecoder, Scalar, SelectError, Selected, Token, TokenError, TokenSource,
};
