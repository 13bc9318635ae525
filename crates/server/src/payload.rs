//! Request body decoding for `POST /similarity`
//!
//! Bodies are read as raw bytes and each document is decoded as UTF-8
//! explicitly, so undecodable input is rejected with the document it belongs
//! to instead of being replaced with U+FFFD.

use docsim_common::{DocSimError, Document, Result};
use docsim_similarity::decode;
use percent_encoding::percent_decode;
use std::fmt::Display;

use crate::types::SimilarityRequest;

pub const JSON: &str = "application/json";
pub const FORM: &str = "application/x-www-form-urlencoded";

/// Parse a similarity request according to its content type
pub fn parse_request(content_type: &str, body: &[u8]) -> Result<SimilarityRequest> {
    match content_type.to_ascii_lowercase().as_str() {
        JSON => parse_json(body),
        FORM => parse_form(body),
        "" => Err(DocSimError::invalid_input(format!(
            "missing content type, expected {} or {}",
            JSON, FORM
        ))),
        other => Err(DocSimError::invalid_input(format!(
            "unsupported content type '{}', expected {} or {}",
            other, JSON, FORM
        ))),
    }
}

/// JSON body `{"doc1": ..., "doc2": ...}`
pub fn parse_json(body: &[u8]) -> Result<SimilarityRequest> {
    if let Err(e) = std::str::from_utf8(body) {
        let document = document_before(&body[..e.valid_up_to()]);
        return Err(DocSimError::input_decode(document, e));
    }

    serde_json::from_slice(body).map_err(malformed)
}

/// Urlencoded form body `doc1=...&doc2=...`
pub fn parse_form(body: &[u8]) -> Result<SimilarityRequest> {
    let mut doc1 = None;
    let mut doc2 = None;

    for pair in body.split(|&b| b == b'&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.iter().position(|&b| b == b'=') {
            Some(i) => (&pair[..i], &pair[i + 1..]),
            None => (pair, &[][..]),
        };

        let (slot, document) = match form_decode(key).as_slice() {
            b"doc1" => (&mut doc1, Document::First),
            b"doc2" => (&mut doc2, Document::Second),
            _ => continue,
        };

        let text = decode(&form_decode(value), document)?.to_string();
        if slot.replace(text).is_some() {
            return Err(malformed(format!("duplicate field `doc{}`", document_number(document))));
        }
    }

    match (doc1, doc2) {
        (Some(doc1), Some(doc2)) => Ok(SimilarityRequest { doc1, doc2 }),
        (None, _) => Err(malformed("missing field `doc1`")),
        (_, None) => Err(malformed("missing field `doc2`")),
    }
}

/// `+` is a space, `%XX` is a raw byte
fn form_decode(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}

/// Which document's value a JSON decode failure falls in
fn document_before(valid_prefix: &[u8]) -> Document {
    let prefix = String::from_utf8_lossy(valid_prefix);
    if prefix.rfind("\"doc2\"") > prefix.rfind("\"doc1\"") {
        Document::Second
    } else {
        Document::First
    }
}

fn document_number(document: Document) -> u8 {
    match document {
        Document::First => 1,
        Document::Second => 2,
    }
}

fn malformed<E: Display>(err: E) -> DocSimError {
    DocSimError::invalid_input(format!("malformed payload: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_are_decoded() {
        let request = parse_form(b"doc1=caf%C3%A9+au+lait&doc2=a%2Bb%20c").unwrap();
        assert_eq!(request.doc1, "café au lait");
        assert_eq!(request.doc2, "a+b c");
    }

    #[test]
    fn test_form_ignores_unknown_and_empty_pairs() {
        let request = parse_form(b"&submit=go&doc2=&doc1=x&").unwrap();
        assert_eq!(request.doc1, "x");
        assert_eq!(request.doc2, "");

        let request = parse_form(b"doc1&doc2=y").unwrap();
        assert_eq!(request.doc1, "");
    }

    #[test]
    fn test_form_invalid_utf8_names_document() {
        let err = parse_form(b"doc1=caf%FF&doc2=caf").unwrap_err();
        assert!(matches!(
            err,
            DocSimError::InputDecode { document: Document::First, .. }
        ));

        let err = parse_form(b"doc1=ok&doc2=%C3%28").unwrap_err();
        assert!(matches!(
            err,
            DocSimError::InputDecode { document: Document::Second, .. }
        ));

        // raw, unescaped bytes are rejected the same way
        let err = parse_form(b"doc1=caf\xff&doc2=caf").unwrap_err();
        assert!(matches!(err, DocSimError::InputDecode { .. }));
    }

    #[test]
    fn test_form_missing_or_duplicate_field_is_malformed() {
        let err = parse_form(b"doc1=only").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: malformed payload: missing field `doc2`");

        let err = parse_form(b"doc1=a&doc2=b&doc1=c").unwrap_err();
        assert!(err.to_string().contains("duplicate field `doc1`"), "{}", err);
    }

    #[test]
    fn test_json_invalid_utf8_names_document() {
        let err = parse_json(b"{\"doc1\": \"fine\", \"doc2\": \"caf\xff\"}").unwrap_err();
        assert!(matches!(
            err,
            DocSimError::InputDecode { document: Document::Second, .. }
        ));

        let err = parse_json(b"{\"doc1\": \"\xc3\x28\", \"doc2\": \"x\"}").unwrap_err();
        assert!(matches!(
            err,
            DocSimError::InputDecode { document: Document::First, .. }
        ));
    }

    #[test]
    fn test_content_type_dispatch() {
        let request = parse_request("Application/JSON", br#"{"doc1": "a", "doc2": "b"}"#).unwrap();
        assert_eq!(request.doc2, "b");

        assert!(parse_request(FORM, b"doc1=a&doc2=b").is_ok());
        assert!(matches!(
            parse_request("", b"doc1=a&doc2=b"),
            Err(DocSimError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_request("text/plain", b"doc1=a&doc2=b"),
            Err(DocSimError::InvalidInput(_))
        ));
    }
}
