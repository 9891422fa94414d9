mod lexer;

pub use lexer::JsonTokens;

/// Tokenize a JSON document as a pull stream.
///
/// Produces tokens for exactly one top-level value; input past it is left
/// unconsumed.
#[must_use]
pub fn tokens(input: &str) -> JsonTokens<'_> {
    JsonTokens::new(input)
}
