use winnow::combinator::{alt, opt};
use winnow::error::{ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::types::{Scalar, Token, TokenError, TokenSource};

// -- Scalar lexemes ---------------------------------------------------------

fn hex4(input: &mut &str) -> ModalResult<u32> {
    take_while(4..=4, |c: char| c.is_ascii_hexdigit())
        .try_map(|s: &str| u32::from_str_radix(s, 16))
        .parse_next(input)
}

fn json_string(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    '/' => s.push('/'),
                    'b' => s.push('\u{0008}'),
                    'f' => s.push('\u{000C}'),
                    'n' => s.push('\n'),
                    'r' => s.push('\r'),
                    't' => s.push('\t'),
                    'u' => {
                        let code = hex4(input)?;
                        let decoded = if (0xD800..=0xDBFF).contains(&code) {
                            // High surrogate: a \uXXXX low surrogate must follow.
                            "\\u".parse_next(input)?;
                            let low = hex4(input)?;
                            if !(0xDC00..=0xDFFF).contains(&low) {
                                return Err(ErrMode::from_input(input).cut());
                            }
                            char::from_u32(0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00))
                        } else {
                            char::from_u32(code)
                        };
                        match decoded {
                            Some(c) => s.push(c),
                            None => return Err(ErrMode::from_input(input).cut()),
                        }
                    }
                    _ => return Err(ErrMode::from_input(input).cut()),
                }
            }
            c if c < '\u{0020}' => return Err(ErrMode::from_input(input).cut()),
            c => s.push(c),
        }
    }
}

fn json_number(input: &mut &str) -> ModalResult<Scalar> {
    let literal = (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))),
        opt((
            alt(('e', 'E')),
            opt(alt(('+', '-'))),
            take_while(1.., |c: char| c.is_ascii_digit()),
        )),
    )
        .take()
        .parse_next(input)?;
    if literal.contains(['.', 'e', 'E']) {
        literal
            .parse::<f64>()
            .map(Scalar::Float)
            .map_err(|_| ErrMode::from_input(input).cut())
    } else {
        literal
            .parse::<i64>()
            .map(Scalar::Int)
            .map_err(|_| ErrMode::from_input(input).cut())
    }
}

fn keyword(input: &mut &str) -> ModalResult<Scalar> {
    alt((
        "true".value(Scalar::Bool(true)),
        "false".value(Scalar::Bool(false)),
        "null".value(Scalar::Null),
    ))
    .parse_next(input)
}

// -- Pull tokenizer ---------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// A value: document start, after a key's colon, or after a comma in an
    /// array.
    Value,
    /// Right after `{`: a key or the closing brace.
    KeyOrEnd,
    /// Right after `[`: a value or the closing bracket.
    FirstValueOrEnd,
    /// After a complete value inside a container.
    CommaOrEnd,
    /// One complete top-level value has been produced.
    Done,
}

/// Pull-based tokenizer over a JSON document.
///
/// Produces exactly one top-level value's tokens and then stops; trailing
/// input is left untouched, so a descriptor embedded in a larger document can
/// be tokenized in place.
#[derive(Debug)]
pub struct JsonTokens<'i> {
    rest: &'i str,
    len: usize,
    frames: Vec<Frame>,
    expect: Expect,
}

impl<'i> JsonTokens<'i> {
    #[must_use]
    pub fn new(input: &'i str) -> Self {
        Self {
            rest: input,
            len: input.len(),
            frames: Vec::new(),
            expect: Expect::Value,
        }
    }

    fn offset(&self) -> usize {
        self.len - self.rest.len()
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start_matches([' ', '\t', '\n', '\r']);
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(tail) => {
                self.rest = tail;
                true
            }
            None => false,
        }
    }

    fn unexpected(&self) -> TokenError {
        match self.rest.chars().next() {
            Some(found) => TokenError::UnexpectedChar {
                found,
                offset: self.offset(),
            },
            None => TokenError::UnexpectedEof,
        }
    }

    fn expect_char(&mut self, c: char) -> Result<(), TokenError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// State after a complete value has been produced.
    fn end_value(&mut self) {
        self.expect = if self.frames.is_empty() {
            Expect::Done
        } else {
            Expect::CommaOrEnd
        };
    }

    fn close(&mut self, token: Token) -> Token {
        self.frames.pop();
        self.end_value();
        token
    }

    fn key_token(&mut self) -> Result<Token, TokenError> {
        let offset = self.offset();
        if !self.rest.starts_with('"') {
            return Err(self.unexpected());
        }
        let key = json_string
            .parse_next(&mut self.rest)
            .map_err(|_| TokenError::InvalidString { offset })?;
        self.skip_ws();
        self.expect_char(':')?;
        self.expect = Expect::Value;
        Ok(Token::FieldName(key))
    }

    fn value_token(&mut self) -> Result<Token, TokenError> {
        let offset = self.offset();
        match self.rest.chars().next() {
            Some('{') => {
                self.eat('{');
                self.frames.push(Frame::Object);
                self.expect = Expect::KeyOrEnd;
                Ok(Token::BeginObject)
            }
            Some('[') => {
                self.eat('[');
                self.frames.push(Frame::Array);
                self.expect = Expect::FirstValueOrEnd;
                Ok(Token::BeginArray)
            }
            Some('"') => {
                let s = json_string
                    .parse_next(&mut self.rest)
                    .map_err(|_| TokenError::InvalidString { offset })?;
                self.end_value();
                Ok(Token::Scalar(Scalar::Str(s)))
            }
            Some(c) if c == '-' || c.is_ascii_digit() => {
                let n = json_number
                    .parse_next(&mut self.rest)
                    .map_err(|_| TokenError::InvalidNumber { offset })?;
                self.end_value();
                Ok(Token::Scalar(n))
            }
            Some('t' | 'f' | 'n') => {
                let s = keyword
                    .parse_next(&mut self.rest)
                    .map_err(|_| self.unexpected())?;
                self.end_value();
                Ok(Token::Scalar(s))
            }
            _ => Err(self.unexpected()),
        }
    }
}

impl TokenSource for JsonTokens<'_> {
    fn next_token(&mut self) -> Result<Token, TokenError> {
        self.skip_ws();
        match self.expect {
            Expect::Value => self.value_token(),
            Expect::KeyOrEnd => {
                if self.eat('}') {
                    Ok(self.close(Token::EndObject))
                } else {
                    self.key_token()
                }
            }
            Expect::FirstValueOrEnd => {
                if self.eat(']') {
                    Ok(self.close(Token::EndArray))
                } else {
                    self.value_token()
                }
            }
            Expect::CommaOrEnd => match self.frames.last() {
                Some(Frame::Object) => {
                    if self.eat('}') {
                        return Ok(self.close(Token::EndObject));
                    }
                    self.expect_char(',')?;
                    self.skip_ws();
                    self.key_token()
                }
                Some(Frame::Array) => {
                    if self.eat(']') {
                        return Ok(self.close(Token::EndArray));
                    }
                    self.expect_char(',')?;
                    self.skip_ws();
                    self.value_token()
                }
                None => Err(TokenError::UnexpectedEof),
            },
            Expect::Done => Err(TokenError::UnexpectedEof),
        }
    }
}
