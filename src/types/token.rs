use super::error::TokenError;

/// A scalar value carried by a [`Token::Scalar`] event.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A UTF-8 string.
    Str(String),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A null value.
    Null,
}

/// One event of a structured-document token stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    FieldName(String),
    Scalar(Scalar),
}

/// Pull-style source of document tokens.
///
/// The selector consumes tokens one at a time and never rewinds. Implementors
/// only provide [`next_token`](TokenSource::next_token); the structural skip
/// comes for free.
pub trait TokenSource {
    /// Produce the next token, or fail if the underlying document is
    /// malformed.
    fn next_token(&mut self) -> Result<Token, TokenError>;

    /// Consume the remainder of the nested value whose opening token
    /// (`BeginObject` or `BeginArray`) was just returned.
    ///
    /// This is a pure structural walk: it balances begin/end tokens and
    /// interprets nothing, so a payload that is meaningless for the current
    /// context can still be stepped over. Consumes exactly the sub-value's
    /// tokens, leaving the stream positioned at the next sibling field.
    fn skip_value(&mut self) -> Result<(), TokenError> {
        let mut depth = 1_usize;
        while depth > 0 {
            match self.next_token()? {
                Token::BeginObject | Token::BeginArray => depth += 1,
                Token::EndObject | Token::EndArray => depth -= 1,
                Token::FieldName(_) | Token::Scalar(_) => {}
            }
        }
        Ok(())
    }
}
