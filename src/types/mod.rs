mod clause;
mod error;
mod matching;
mod pattern;
mod token;

pub use clause::{ClauseDecoder, FieldNames, RawClause, RawDecoder, Selected};
pub use error::{SelectError, TokenError};
pub use matching::{matches_any, simple_match, MatchDecision};
pub use pattern::IndexPatternSet;
pub use token::{Scalar, Token, TokenSource};
