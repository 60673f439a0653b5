//! Document loading: serialized text to parsed JSON trees.

use serde_json::Value;

use crate::error::{DocumentSide, PayloadAssertError, Result};

/// Parse one serialized document.
///
/// Fails with [`PayloadAssertError::MalformedInput`] naming `side` when the
/// text is not valid JSON. No side effects beyond the returned value.
pub fn parse_document(text: &str, side: DocumentSide) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| PayloadAssertError::malformed_input(side, err))
}

/// Parse both input documents independently.
///
/// The actual/payload side is checked first, so when both are malformed the
/// error refers to the actual document.
pub fn parse_documents(actual: &str, expected: &str) -> Result<(Value, Value)> {
    let actual = parse_document(actual, DocumentSide::Actual)?;
    let expected = parse_document(expected, DocumentSide::Expected)?;
    Ok((actual, expected))
}
