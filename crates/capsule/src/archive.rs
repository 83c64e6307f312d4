//! Archiving of a button's persistent properties.
//!
//! Four properties survive archiving: `title`, `subtitle`, `image` and
//! `borderColor`. Each is optional; absent properties are omitted from the
//! record, never written as `null`.
//!
//! Decoding is lenient. A key with an unexpected type, an image that fails to
//! decode or a malformed color is treated as absent and logged at `debug`.
//! Only the byte-level envelope ([`ArchiveRecord::from_bytes`]) can fail.
//!
//! ```
//! use capsule::archive::{self, ButtonArchive};
//! use capsule::render::Color;
//!
//! let record = archive::encode(Some("Save"), None, None, Some(Color::GREEN));
//! assert!(!record.contains_key("subtitle"));
//!
//! let decoded = archive::decode(&record);
//! assert_eq!(decoded.title.as_deref(), Some("Save"));
//! assert_eq!(decoded.border_color, Some(Color::GREEN));
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use capsule_render::{Color, IconImage};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::logging::targets;

/// Archive keys.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const IMAGE: &str = "image";
    pub const BORDER_COLOR: &str = "borderColor";
}

/// Errors reading or writing the archive envelope.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The bytes are not valid JSON.
    #[error("archive is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level JSON value is not an object.
    #[error("archive root must be an object")]
    NotAnObject,
}

/// Result alias for archive envelope operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// A keyed archive of button properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArchiveRecord {
    fields: Map<String, Value>,
}

impl ArchiveRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Store a raw value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize as JSON.
    pub fn to_bytes(&self) -> ArchiveResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.fields)?)
    }

    /// Parse a JSON object.
    pub fn from_bytes(bytes: &[u8]) -> ArchiveResult<Self> {
        match serde_json::from_slice(bytes)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ArchiveError::NotAnObject),
        }
    }
}

impl From<Map<String, Value>> for ArchiveRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// The archived properties of a button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonArchive {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<IconImage>,
    pub border_color: Option<Color>,
}

impl ButtonArchive {
    /// Encode into a record.
    pub fn encode(&self) -> ArchiveRecord {
        encode(
            self.title.as_deref(),
            self.subtitle.as_deref(),
            self.image.as_ref(),
            self.border_color,
        )
    }
}

/// Encode the archived properties. `None` values are omitted.
pub fn encode(
    title: Option<&str>,
    subtitle: Option<&str>,
    image: Option<&IconImage>,
    border_color: Option<Color>,
) -> ArchiveRecord {
    let mut record = ArchiveRecord::new();

    if let Some(title) = title {
        record.insert(keys::TITLE, Value::String(title.to_owned()));
    }
    if let Some(subtitle) = subtitle {
        record.insert(keys::SUBTITLE, Value::String(subtitle.to_owned()));
    }
    if let Some(image) = image {
        record.insert(keys::IMAGE, Value::String(STANDARD.encode(image.bytes())));
    }
    if let Some(color) = border_color {
        match serde_json::to_value(color) {
            Ok(value) => record.insert(keys::BORDER_COLOR, value),
            Err(err) => {
                tracing::debug!(target: targets::ARCHIVE, key = keys::BORDER_COLOR, %err, "skipping field")
            }
        }
    }

    tracing::trace!(target: targets::ARCHIVE, fields = record.len(), "encoded button");
    record
}

/// Decode the archived properties. Missing or malformed fields are `None`.
pub fn decode(record: &ArchiveRecord) -> ButtonArchive {
    ButtonArchive {
        title: decode_string(record, keys::TITLE),
        subtitle: decode_string(record, keys::SUBTITLE),
        image: decode_image(record),
        border_color: decode_color(record),
    }
}

fn decode_string(record: &ArchiveRecord, key: &'static str) -> Option<String> {
    match record.get(key)? {
        Value::String(text) => Some(text.clone()),
        other => {
            tracing::debug!(target: targets::ARCHIVE, key, found = %kind(other), "ignoring field");
            None
        }
    }
}

fn decode_image(record: &ArchiveRecord) -> Option<IconImage> {
    let key = keys::IMAGE;
    let Value::String(encoded) = record.get(key)? else {
        tracing::debug!(target: targets::ARCHIVE, key, "ignoring non-string image");
        return None;
    };

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|err| tracing::debug!(target: targets::ARCHIVE, key, %err, "ignoring undecodable image"))
        .ok()?;
    IconImage::from_bytes(bytes)
        .map_err(|err| tracing::debug!(target: targets::ARCHIVE, key, %err, "ignoring unreadable image"))
        .ok()
}

fn decode_color(record: &ArchiveRecord) -> Option<Color> {
    let key = keys::BORDER_COLOR;
    let value = record.get(key)?;
    serde_json::from_value(value.clone())
        .map_err(|err| tracing::debug!(target: targets::ARCHIVE, key, %err, "ignoring malformed color"))
        .ok()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_archive_has_no_keys() {
        let record = encode(None, None, None, None);
        assert!(record.is_empty());
        assert_eq!(decode(&record), ButtonArchive::default());
    }

    #[test]
    fn wrong_types_decode_as_absent() {
        let record = ArchiveRecord::from(
            json!({
                "title": 42,
                "subtitle": ["to", "Drive"],
                "image": "!!! not base64 !!!",
                "borderColor": "green",
            })
            .as_object()
            .cloned()
            .unwrap(),
        );

        assert_eq!(decode(&record), ButtonArchive::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record = ArchiveRecord::from(
            json!({ "title": "Save", "cornerStyle": "continuous" })
                .as_object()
                .cloned()
                .unwrap(),
        );
        let decoded = decode(&record);
        assert_eq!(decoded.title.as_deref(), Some("Save"));
        assert_eq!(decoded.subtitle, None);
    }

    #[test]
    fn envelope_must_be_an_object() {
        assert!(matches!(
            ArchiveRecord::from_bytes(b"[1, 2, 3]"),
            Err(ArchiveError::NotAnObject)
        ));
        assert!(matches!(
            ArchiveRecord::from_bytes(b"{ nope"),
            Err(ArchiveError::Json(_))
        ));
    }

    #[test]
    fn bytes_round_trip() {
        let record = encode(Some("Save"), Some("to Drive"), None, Some(Color::from_rgb8(12, 34, 56)));
        let restored = ArchiveRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(decode(&restored), decode(&record));
    }
}
