//! Record encoding
//!
//! Serializes one record into a single compact JSON line. The compact
//! encoding never emits a raw newline (newlines inside string values are
//! escaped), so every record occupies exactly one line of the output file.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Convenience record type: an ordered mapping of string keys to JSON values
///
/// Built on serde_json's `preserve_order` map, so keys appear in the written
/// line in insertion order. Any other `Serialize` type works equally well as
/// a record.
pub type Record = Map<String, Value>;

/// Encode a record as a single JSON line, without the trailing newline
///
/// Values that cannot be represented in JSON (non-string map keys,
/// serializers that fail mid-stream) yield an encode error and nothing is
/// written.
pub fn encode<T: Serialize + ?Sized>(record: &T) -> Result<String> {
    let line = serde_json::to_string(record)?;
    debug_assert!(!line.contains('\n'));
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use serde_json::json;

    #[test]
    fn test_encode_compact_single_line() {
        let mut record = Record::new();
        record.insert("message".to_string(), json!("Hello, Logger!"));
        record.insert("detail".to_string(), json!("line one\nline two"));

        let line = encode(&record).unwrap();
        assert!(!line.contains('\n'));
        assert!(!line.contains(": ")); // compact, not pretty-printed

        // The line parses back as an independent JSON document
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["detail"], json!("line one\nline two"));
    }

    #[test]
    fn test_encode_preserves_key_order() {
        let mut record = Record::new();
        record.insert("zulu".to_string(), json!(1));
        record.insert("alpha".to_string(), json!(2));
        record.insert("mike".to_string(), json!(3));

        let line = encode(&record).unwrap();
        let zulu = line.find("\"zulu\"").unwrap();
        let alpha = line.find("\"alpha\"").unwrap();
        let mike = line.find("\"mike\"").unwrap();
        assert!(zulu < alpha && alpha < mike);
    }

    #[test]
    fn test_encode_arbitrary_serialize_types() {
        #[derive(serde::Serialize)]
        struct Event {
            id: u64,
            name: String,
        }

        let line = encode(&Event { id: 7, name: "startup".to_string() }).unwrap();
        assert_eq!(line, r#"{"id":7,"name":"startup"}"#);
    }

    #[test]
    fn test_encode_unrepresentable_record() {
        // Maps with non-string keys have no JSON representation
        let mut record = HashMap::new();
        record.insert((1u32, 2u32), "value");

        let err = encode(&record).unwrap_err();
        assert!(err.is_encode_error());
    }
}
