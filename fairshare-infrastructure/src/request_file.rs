//! JSON request files.
//!
//! ```json
//! {
//!   "total": "2000",
//!   "participants": [{ "name": "Alice", "paid": 800 }, { "name": "Bob", "paid": "1200" }]
//! }
//! ```
//!
//! Supplying `items` instead of `total` selects an itemized split.

use fairshare_application::{RawParticipant, SplitRequest, parse_participants, parse_total};
use fairshare_domain::{InvalidInputError, Item};
use serde::Deserialize;
use serde_json::Value;
use std::{borrow::Cow, fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestFileError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse split request: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("A split request may give a total or items, not both")]
    TotalWithItems,
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SplitFile {
    #[serde(default)]
    total: Option<Value>,
    participants: Vec<ParticipantEntry>,
    #[serde(default)]
    items: Vec<Item>,
}

/// Amounts stay raw JSON so that they get the same checks as command-line input.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParticipantEntry {
    name: String,
    paid: Value,
}

fn amount_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

pub fn parse_request(json: &str) -> Result<SplitRequest, RequestFileError> {
    let file: SplitFile = serde_json::from_str(json)?;

    let paid: Vec<Cow<str>> = file
        .participants
        .iter()
        .map(|entry| amount_text(&entry.paid))
        .collect();
    let raw: Vec<RawParticipant> = file
        .participants
        .iter()
        .zip(&paid)
        .map(|(entry, paid)| RawParticipant {
            name: entry.name.as_str(),
            paid: paid.as_ref(),
        })
        .collect();
    let participants = parse_participants(&raw)?;

    if file.items.is_empty() {
        let total = file
            .total
            .as_ref()
            .map(|total| parse_total(&amount_text(total)))
            .transpose()?;
        return Ok(SplitRequest::equal(participants, total));
    }
    if file.total.is_some() {
        return Err(RequestFileError::TotalWithItems);
    }
    Ok(SplitRequest::itemized(participants, file.items))
}

pub fn load_request(path: &Path) -> Result<SplitRequest, RequestFileError> {
    let json = fs::read_to_string(path).map_err(|source| RequestFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Loaded split request");
    parse_request(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairshare_application::SplitMode;
    use fairshare_domain::{Money, Participant};
    use std::io::Write as _;

    #[test]
    fn parses_equal_split() {
        let request = parse_request(
            r#"{
                "total": "2000",
                "participants": [
                    { "name": "Alice", "paid": 800 },
                    { "name": "Bob", "paid": "1200.50" }
                ]
            }"#,
        )
        .expect("valid request");

        assert_eq!(
            request.participants,
            vec![
                Participant::new("Alice", Money::from_i64(800)),
                Participant::new("Bob", Money::new(120050, 2)),
            ]
        );
        assert_eq!(
            request.mode,
            SplitMode::Equal {
                total: Money::from_i64(2000)
            }
        );
    }

    #[test]
    fn parses_itemized_split() {
        let request = parse_request(
            r#"{
                "participants": [{ "name": "Asha", "paid": "90" }],
                "items": [{ "name": "Lunch", "amount": "90", "participants": ["Asha"] }]
            }"#,
        )
        .expect("valid request");

        assert!(matches!(request.mode, SplitMode::Itemized { ref items } if items.len() == 1));
    }

    #[test]
    fn trims_names_like_command_line_input() {
        let request = parse_request(
            r#"{ "participants": [{ "name": " Alice ", "paid": 10 }, { "name": "Bob", "paid": "0" }] }"#,
        )
        .expect("valid request");

        assert_eq!(request.participants[0].name, "Alice");
    }

    #[test]
    fn reports_non_numeric_paid_as_invalid_input() {
        let err = parse_request(
            r#"{ "participants": [{ "name": "Alice", "paid": "ten" }] }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RequestFileError::InvalidInput(InvalidInputError::NonNumericAmount { ref name, ref raw })
                if name == "Alice" && raw == "ten"
        ));
    }

    #[test]
    fn reports_non_numeric_total_as_invalid_input() {
        let err = parse_request(
            r#"{ "total": true, "participants": [{ "name": "Alice", "paid": 1 }] }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RequestFileError::InvalidInput(InvalidInputError::NonNumericTotal { ref raw })
                if raw == "true"
        ));
    }

    #[test]
    fn rejects_total_alongside_items() {
        let err = parse_request(
            r#"{
                "total": "90",
                "participants": [{ "name": "Asha", "paid": "90" }],
                "items": [{ "name": "Lunch", "amount": "90", "participants": ["Asha"] }]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(err, RequestFileError::TotalWithItems));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_request(r#"{ "participants": [], "currency": "INR" }"#).unwrap_err();

        assert!(matches!(err, RequestFileError::Parse(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "participants": [{{ "name": "A", "paid": "10" }}, {{ "name": "B", "paid": "0" }}] }}"#
        )
        .expect("write request");

        let request = load_request(file.path()).expect("valid request");

        assert_eq!(
            request.mode,
            SplitMode::Equal {
                total: Money::from_i64(10)
            }
        );
    }

    #[test]
    fn reports_missing_file() {
        let err = load_request(Path::new("/nonexistent/split.json")).unwrap_err();

        assert!(matches!(err, RequestFileError::Io { .. }));
    }
}
