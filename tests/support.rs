use std::fmt;

use selix::{ClauseDecoder, Scalar, SelectError, Selected, Token, TokenSource};

/// Error raised by [`KindDecoder`] for payloads it refuses.
#[derive(Debug)]
pub struct KindError(pub String);

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refusing clause kind '{}'", self.0)
    }
}

impl std::error::Error for KindError {}

/// Decoder for a tiny clause language: a clause is `{"kind": "<name>"}`.
///
/// Every successful materialization is recorded, so tests can assert which
/// payloads were decoded and which were only skipped. The kind `"boom"`
/// always fails to decode, which makes it possible to prove that a skipped
/// payload never reached the materializing path.
#[derive(Debug, Default)]
pub struct KindDecoder {
    pub materialized: Vec<String>,
}

impl KindDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClauseDecoder for KindDecoder {
    type Clause = String;

    fn decode(&mut self, tokens: &mut dyn TokenSource) -> Result<String, SelectError> {
        let kind = match tokens.next_token()? {
            Token::FieldName(name) if name == "kind" => match tokens.next_token()? {
                Token::Scalar(Scalar::Str(value)) => value,
                other => return Err(SelectError::clause(KindError(format!("{other:?}")))),
            },
            other => return Err(SelectError::clause(KindError(format!("{other:?}")))),
        };
        match tokens.next_token()? {
            Token::EndObject => {}
            other => return Err(SelectError::clause(KindError(format!("{other:?}")))),
        }
        if kind == "boom" {
            return Err(SelectError::clause(KindError(kind)));
        }
        self.materialized.push(kind.clone());
        Ok(kind)
    }
}

/// Run a selection over `doc` for `context` with a fresh [`KindDecoder`].
pub fn select(doc: &str, context: &str) -> Result<Selected<String>, SelectError> {
    selix::ClauseSelector::new(context).select(&mut selix::tokens(doc), &mut KindDecoder::new())
}
