use crate::resolve::IndexResolver;
use crate::types::{
    matches_any, ClauseDecoder, FieldNames, IndexPatternSet, MatchDecision, Scalar, SelectError,
    Selected, Token, TokenSource,
};

/// Which slot the selection landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Primary,
    Fallback,
}

/// Decodes a descriptor object and selects the one clause that applies to
/// the current index context.
///
/// The descriptor carries a primary clause, an optional fallback clause and
/// a set of index name patterns, in any field order. The selector streams
/// through the object in a single pass: once the pattern set is known, the
/// clause that cannot apply is skipped structurally instead of decoded.
/// When clause fields precede the pattern field, both clauses are
/// materialized and the decision falls to end-of-object; the returned clause
/// is the same either way.
///
/// # Example
///
/// ```
/// use selix::{tokens, ClauseSelector, RawDecoder, Selected};
///
/// let doc = r#"{
///     "indices": ["logs-*"],
///     "filter": { "term": { "level": "error" } },
///     "no_match_filter": "none"
/// }"#;
///
/// let chosen = ClauseSelector::new("logs-2024")
///     .select(&mut tokens(doc), &mut RawDecoder)
///     .unwrap();
/// assert!(chosen.as_clause().is_some());
///
/// let chosen = ClauseSelector::new("metrics")
///     .select(&mut tokens(doc), &mut RawDecoder)
///     .unwrap();
/// assert_eq!(chosen, Selected::MatchNone);
/// ```
#[derive(Clone, Copy)]
pub struct ClauseSelector<'a> {
    context_index: &'a str,
    fields: FieldNames,
    resolver: Option<&'a dyn IndexResolver>,
}

impl<'a> ClauseSelector<'a> {
    /// Selector for the given context index, recognizing the
    /// [`FieldNames::FILTER`] field pair, with no resolver attached.
    #[must_use]
    pub fn new(context_index: &'a str) -> Self {
        Self {
            context_index,
            fields: FieldNames::FILTER,
            resolver: None,
        }
    }

    /// Use a different clause field pair (e.g. [`FieldNames::QUERY`]).
    #[must_use]
    pub fn fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    /// Attach a resolver for alias and wildcard expansion. Without one,
    /// patterns are matched verbatim against the context index name.
    #[must_use]
    pub fn resolver(mut self, resolver: &'a dyn IndexResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Consume one descriptor object from `tokens` and return the clause
    /// that applies to this selector's context index.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] on any descriptor-format violation, on a
    /// malformed token stream, or on a failure of `decoder` while
    /// materializing a clause. Errors abort the decode; there is no partial
    /// result.
    pub fn select<C>(
        &self,
        tokens: &mut dyn TokenSource,
        decoder: &mut dyn ClauseDecoder<Clause = C>,
    ) -> Result<Selected<C>, SelectError> {
        match tokens.next_token()? {
            Token::BeginObject => {}
            _ => return Err(self.expected_descriptor()),
        }

        let mut primary: Option<C> = None;
        let mut primary_found = false;
        let mut fallback: Selected<C> = Selected::MatchAll;
        let mut patterns = IndexPatternSet::new();
        let mut indices_found = false;
        let mut decision = MatchDecision::Unknown;
        let mut chosen: Option<Choice> = None;

        loop {
            let field = match tokens.next_token()? {
                Token::EndObject => break,
                Token::FieldName(name) => name,
                _ => return Err(self.expected_descriptor()),
            };

            if field == self.fields.primary {
                match tokens.next_token()? {
                    Token::BeginObject => {}
                    _ => return Err(self.expected_clause(&field)),
                }
                primary_found = true;
                match decision {
                    // Ruled out: step over the payload without decoding it.
                    MatchDecision::NoMatches => tokens.skip_value()?,
                    MatchDecision::Matches => {
                        primary = Some(decoder.decode(tokens)?);
                        chosen = Some(Choice::Primary);
                    }
                    // Pattern set not seen yet: nothing to decide on, so
                    // materialize and defer.
                    MatchDecision::Unknown => primary = Some(decoder.decode(tokens)?),
                }
            } else if field == self.fields.fallback {
                match tokens.next_token()? {
                    Token::BeginObject => match decision {
                        MatchDecision::Matches => tokens.skip_value()?,
                        MatchDecision::NoMatches => {
                            fallback = Selected::Clause(decoder.decode(tokens)?);
                            chosen = Some(Choice::Fallback);
                        }
                        MatchDecision::Unknown => {
                            fallback = Selected::Clause(decoder.decode(tokens)?);
                        }
                    },
                    Token::Scalar(Scalar::Str(sentinel)) => {
                        fallback = match sentinel.as_str() {
                            "all" => Selected::MatchAll,
                            "none" => Selected::MatchNone,
                            _ => {
                                return Err(SelectError::UnknownSentinel {
                                    context: self.context_index.to_owned(),
                                    field,
                                    value: sentinel,
                                });
                            }
                        };
                        if decision == MatchDecision::NoMatches {
                            chosen = Some(Choice::Fallback);
                        }
                    }
                    _ => return Err(self.expected_clause(&field)),
                }
            } else if field == "indices" {
                if indices_found {
                    return Err(self.duplicate_indices());
                }
                indices_found = true;
                match tokens.next_token()? {
                    Token::BeginArray => {}
                    _ => return Err(self.invalid_pattern()),
                }
                loop {
                    match tokens.next_token()? {
                        Token::EndArray => break,
                        Token::Scalar(Scalar::Str(pattern)) => patterns.add(pattern),
                        _ => return Err(self.invalid_pattern()),
                    }
                }
                decision = self.decide(&patterns);
            } else if field == "index" {
                if indices_found {
                    return Err(self.duplicate_indices());
                }
                indices_found = true;
                match tokens.next_token()? {
                    Token::Scalar(Scalar::Str(pattern)) => patterns.add(pattern),
                    _ => return Err(self.invalid_pattern()),
                }
                decision = self.decide(&patterns);
            } else {
                return Err(SelectError::UnknownField {
                    context: self.context_index.to_owned(),
                    field,
                });
            }
        }

        if !primary_found {
            return Err(SelectError::MissingClause {
                context: self.context_index.to_owned(),
                field: self.fields.primary.to_owned(),
            });
        }
        if patterns.is_empty() {
            return Err(SelectError::MissingIndices {
                context: self.context_index.to_owned(),
            });
        }

        // No eager decision was possible (clause fields arrived before the
        // pattern field): resolve now. The pattern field was present, so the
        // decision is known by this point.
        let choice = chosen.unwrap_or(match decision {
            MatchDecision::Matches => Choice::Primary,
            MatchDecision::NoMatches | MatchDecision::Unknown => Choice::Fallback,
        });

        match choice {
            Choice::Primary => match primary {
                Some(clause) => Ok(Selected::Clause(clause)),
                // Unreachable: Primary is only chosen when the slot was
                // materialized.
                None => Err(SelectError::MissingClause {
                    context: self.context_index.to_owned(),
                    field: self.fields.primary.to_owned(),
                }),
            },
            Choice::Fallback => Ok(fallback),
        }
    }

    /// Recompute the concrete-index list for the accumulated patterns and
    /// evaluate it against the context index. Called once per
    /// pattern-contributing field, when that field closes.
    fn decide(&self, patterns: &IndexPatternSet) -> MatchDecision {
        let matched = match self.resolver {
            Some(resolver) => matches_any(&resolver.resolve(patterns.as_slice()), self.context_index),
            None => matches_any(patterns.as_slice(), self.context_index),
        };
        if matched {
            MatchDecision::Matches
        } else {
            MatchDecision::NoMatches
        }
    }

    fn expected_descriptor(&self) -> SelectError {
        SelectError::ExpectedDescriptor {
            context: self.context_index.to_owned(),
        }
    }

    fn expected_clause(&self, field: &str) -> SelectError {
        SelectError::ExpectedClause {
            context: self.context_index.to_owned(),
            field: field.to_owned(),
        }
    }

    fn duplicate_indices(&self) -> SelectError {
        SelectError::DuplicateIndices {
            context: self.context_index.to_owned(),
        }
    }

    fn invalid_pattern(&self) -> SelectError {
        SelectError::InvalidPattern {
            context: self.context_index.to_owned(),
        }
    }
}
