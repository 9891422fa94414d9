mod support;

use selix::{tokens, ClauseSelector, SelectError, Selected, TokenError};
use support::{select, KindDecoder};

#[test]
fn unknown_field_is_rejected_and_named() {
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"X"},"bogus":1}"#;
    let err = select(doc, "idxA").unwrap_err();
    match err {
        SelectError::UnknownField { context, field } => {
            assert_eq!(context, "idxA");
            assert_eq!(field, "bogus");
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn missing_primary_clause_fails() {
    let doc = r#"{"indices":["idxA"],"no_match_filter":{"kind":"Y"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::MissingClause { field, .. } if field == "filter"));
}

#[test]
fn missing_primary_reported_even_without_indices() {
    // The primary-clause check comes before any index bookkeeping.
    let doc = r#"{}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::MissingClause { .. }));
}

#[test]
fn missing_indices_fails() {
    let doc = r#"{"filter":{"kind":"X"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::MissingIndices { .. }));
}

#[test]
fn empty_indices_array_counts_as_missing() {
    let doc = r#"{"indices":[],"filter":{"kind":"X"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::MissingIndices { .. }));
}

#[test]
fn duplicate_indices_field_fails() {
    let doc = r#"{"indices":["a"],"indices":["b"],"filter":{"kind":"X"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::DuplicateIndices { .. }));
}

#[test]
fn index_after_indices_fails() {
    let doc = r#"{"indices":["a"],"index":"b","filter":{"kind":"X"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::DuplicateIndices { .. }));
}

#[test]
fn indices_after_index_fails() {
    let doc = r#"{"index":"a","indices":["b"],"filter":{"kind":"X"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::DuplicateIndices { .. }));
}

#[test]
fn non_string_pattern_element_fails() {
    for doc in [
        r#"{"indices":["a",1],"filter":{"kind":"X"}}"#,
        r#"{"indices":[null],"filter":{"kind":"X"}}"#,
        r#"{"indices":[{"x":1}],"filter":{"kind":"X"}}"#,
        r#"{"index":7,"filter":{"kind":"X"}}"#,
        r#"{"indices":"a","filter":{"kind":"X"}}"#,
    ] {
        let err = select(doc, "idxA").unwrap_err();
        assert!(
            matches!(err, SelectError::InvalidPattern { .. }),
            "expected InvalidPattern for {doc}, got {err:?}"
        );
    }
}

#[test]
fn primary_clause_must_be_an_object() {
    let doc = r#"{"indices":["idxA"],"filter":"all"}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::ExpectedClause { field, .. } if field == "filter"));
}

#[test]
fn unknown_fallback_sentinel_fails() {
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"X"},"no_match_filter":"some"}"#;
    let err = select(doc, "idxA").unwrap_err();
    match err {
        SelectError::UnknownSentinel { field, value, .. } => {
            assert_eq!(field, "no_match_filter");
            assert_eq!(value, "some");
        }
        other => panic!("expected UnknownSentinel, got {other:?}"),
    }
}

#[test]
fn fallback_must_be_object_or_sentinel() {
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"X"},"no_match_filter":[1]}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::ExpectedClause { field, .. } if field == "no_match_filter"));
}

#[test]
fn non_object_descriptor_fails() {
    for doc in ["[]", "\"x\"", "42"] {
        let err = select(doc, "idxA").unwrap_err();
        assert!(
            matches!(err, SelectError::ExpectedDescriptor { .. }),
            "expected ExpectedDescriptor for {doc}, got {err:?}"
        );
    }
}

#[test]
fn clause_decoder_error_propagates_unchanged() {
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"boom"}}"#;
    let err = select(doc, "idxA").unwrap_err();
    match err {
        SelectError::Clause(inner) => {
            assert_eq!(inner.to_string(), "refusing clause kind 'boom'");
        }
        other => panic!("expected Clause, got {other:?}"),
    }
}

#[test]
fn skipped_payload_is_never_validated() {
    // Either clause would fail to materialize; whichever is ruled out must
    // be stepped over without touching the decoder.
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"X"},"no_match_filter":{"kind":"boom"}}"#;
    let mut decoder = KindDecoder::new();
    let chosen = ClauseSelector::new("idxA")
        .select(&mut tokens(doc), &mut decoder)
        .unwrap();
    assert_eq!(chosen, Selected::Clause("X".to_owned()));
    assert_eq!(decoder.materialized, ["X"]);

    let doc = r#"{"indices":["idxA"],"filter":{"kind":"boom"},"no_match_filter":{"kind":"Y"}}"#;
    assert_eq!(select(doc, "idxB").unwrap(), Selected::Clause("Y".to_owned()));
}

#[test]
fn skipped_payload_may_be_structurally_arbitrary() {
    // Content the decoder could never interpret is fine in a skipped slot.
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"X"},"no_match_filter":{"a":[{"b":[[]]},null],"c":3.5}}"#;
    assert_eq!(select(doc, "idxA").unwrap(), Selected::Clause("X".to_owned()));
}

#[test]
fn malformed_document_surfaces_token_error() {
    let doc = r#"{"indices":["idxA"],"filter":{"kind":"X"}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(
        err,
        SelectError::Token(TokenError::UnexpectedEof)
    ));
}

#[test]
fn decode_error_aborts_whole_selection() {
    // The failing filter comes first; the rest of the descriptor is never
    // reached.
    let doc = r#"{"filter":{"kind":"boom"},"indices":["idxA"]}"#;
    let err = select(doc, "idxA").unwrap_err();
    assert!(matches!(err, SelectError::Clause(_)));
}
