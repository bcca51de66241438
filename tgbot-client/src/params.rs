//! Request parameters and their form encoding.
//!
//! A [`Params`] set is an ordered list of name/value pairs. Absent values
//! are never stored, so a parameter set cannot carry an explicit null.
//! Structured values are converted through [`Sendable`] and travel as JSON
//! text in a single form field.

use serde_json::Value;
use tgbot_core::{ChatAction, ChatId, InputFile, ParseMode, Sendable, ValidationError};

use crate::error::TypeConstraintError;
use crate::file::FileInput;

// ============================================================================
// Param Value
// ============================================================================

/// One parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text, sent as-is.
    Str(String),
    /// Integer, sent in decimal.
    Int(i64),
    /// Float, sent in its shortest round-trip form.
    Float(f64),
    /// Boolean, sent as `true` or `false`.
    Bool(bool),
    /// Structured value, sent as JSON text.
    Json(Value),
    /// Local upload. Only valid in a file-bearing parameter.
    File(InputFile),
}

impl ParamValue {
    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Json(_) => "structured value",
            Self::File(_) => "file upload",
        }
    }

    /// Converts a structured value into its JSON primitive.
    pub fn structured<S: Sendable + ?Sized>(value: &S) -> Result<Self, ValidationError> {
        value.to_primitive().map(Self::Json)
    }

    /// Builds a value from arbitrary JSON.
    ///
    /// Scalars map onto the primitive variants; arrays and objects stay
    /// structured. Numbers that do not fit an `i64` keep their JSON text, so
    /// `1.0` and 20-digit ids reach the server unchanged. Returns `None` for
    /// `null`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::String(s) => Some(Self::Str(s)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Str(n.to_string()),
            }),
            other => Some(Self::Json(other)),
        }
    }

    /// Form-field text, or `None` for an upload.
    fn form_text(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Json(v) => Some(v.to_string()),
            Self::File(_) => None,
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<ChatId> for ParamValue {
    fn from(value: ChatId) -> Self {
        match value {
            ChatId::Id(id) => Self::Int(id),
            ChatId::Username(name) => Self::Str(name),
        }
    }
}

impl From<ParseMode> for ParamValue {
    fn from(value: ParseMode) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<ChatAction> for ParamValue {
    fn from(value: ChatAction) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<InputFile> for ParamValue {
    fn from(value: InputFile) -> Self {
        Self::File(value)
    }
}

impl From<FileInput> for ParamValue {
    fn from(value: FileInput) -> Self {
        match value {
            FileInput::Remote(reference) => Self::Str(reference),
            FileInput::Upload(file) => Self::File(file),
        }
    }
}

// ============================================================================
// Params
// ============================================================================

/// Ordered parameter set for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a parameter when the value is present, builder style.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    /// Adds a structured parameter when the value is present, builder style.
    pub fn with_structured<S: Sendable + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: Option<&S>,
    ) -> Result<Self, ValidationError> {
        if let Some(value) = value {
            let primitive = value.to_primitive()?;
            if !primitive.is_null() {
                self.insert(name, ParamValue::Json(primitive));
            }
        }
        Ok(self)
    }

    /// Sets a parameter. An existing entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes and returns a parameter.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Looks up a parameter.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Returns true if the parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Encodes every parameter as a form field, in insertion order.
    ///
    /// Uploads cannot travel as form fields; they must be resolved into an
    /// attachment first.
    pub fn encode_form(&self) -> Result<Vec<(String, String)>, TypeConstraintError> {
        self.entries
            .iter()
            .map(|(name, value)| {
                value
                    .form_text()
                    .map(|text| (name.clone(), text))
                    .ok_or_else(|| TypeConstraintError {
                        parameter: name.clone(),
                        expected: TypeConstraintError::FORM_KINDS,
                        actual: value.kind(),
                    })
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tgbot_core::{InlineKeyboardButton, InlineKeyboardMarkup, ReplyMarkup};

    use super::*;

    #[test]
    fn test_absent_values_are_omitted() {
        let params = Params::new()
            .with("chat_id", 42_i64)
            .with_opt("parse_mode", None::<ParseMode>)
            .with_opt("disable_notification", Some(true));

        assert_eq!(
            params.encode_form().unwrap(),
            vec![
                ("chat_id".to_string(), "42".to_string()),
                ("disable_notification".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_structured_value_is_json_text() {
        let markup: ReplyMarkup = InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::url("Docs", "https://example.com"),
        ]])
        .into();

        let params = Params::new()
            .with_structured("reply_markup", Some(&markup))
            .unwrap();
        let form = params.encode_form().unwrap();
        let decoded: Value = serde_json::from_str(&form[0].1).unwrap();
        assert_eq!(
            decoded,
            json!({"inline_keyboard": [[{"text": "Docs", "url": "https://example.com"}]]})
        );

        let none = Params::new()
            .with_structured::<ReplyMarkup>("reply_markup", None)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1_i64).with("b", 2_i64);
        params.insert("a", "one");
        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::Str("one".into())));
    }

    #[test]
    fn test_chat_id_conversion() {
        assert_eq!(ParamValue::from(ChatId::Id(-5)), ParamValue::Int(-5));
        assert_eq!(
            ParamValue::from(ChatId::username("@news").unwrap()),
            ParamValue::Str("@news".into())
        );
    }

    #[test]
    fn test_upload_cannot_be_form_encoded() {
        let file = InputFile::new("a.txt", b"hi".to_vec()).unwrap();
        let params = Params::new().with("document", file);
        let err = params.encode_form().unwrap_err();
        assert_eq!(err.parameter, "document");
        assert_eq!(err.actual, "file upload");
    }

    #[test]
    fn test_from_json_values() {
        assert_eq!(ParamValue::from_json(json!(null)), None);
        assert_eq!(ParamValue::from_json(json!(7)), Some(ParamValue::Int(7)));
        assert_eq!(ParamValue::from_json(json!(1.5)), Some(ParamValue::Str("1.5".into())));
        assert_eq!(
            ParamValue::from_json(serde_json::from_str("12345678901234567890").unwrap()),
            Some(ParamValue::Str("12345678901234567890".into()))
        );
        assert_eq!(ParamValue::from_json(json!("x")), Some(ParamValue::Str("x".into())));
        assert_eq!(
            ParamValue::from_json(json!([1, 2])),
            Some(ParamValue::Json(json!([1, 2])))
        );
    }

    #[test]
    fn test_collect_from_pairs() {
        let params: Params = vec![("chat_id", "42"), ("text", "hi")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert!(params.contains("text"));
    }
}
