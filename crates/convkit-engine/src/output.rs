//! Result types shared by every operation

use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

/// The result of a single operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Plain text produced by a codec or generator
    Text(String),

    /// Outcome of a validator or formatter
    Validation(Validation),

    /// Header and payload of a decoded JSON Web Token
    Jwt(JwtDecoding),
}

impl Output {
    /// Returns the text of an `Output::Text`, `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_validation(&self) -> Option<&Validation> {
        match self {
            Output::Validation(validation) => Some(validation),
            _ => None,
        }
    }

    pub fn as_jwt(&self) -> Option<&JwtDecoding> {
        match self {
            Output::Jwt(jwt) => Some(jwt),
            _ => None,
        }
    }

    /// False when the output carries an embedded failure.
    pub fn is_success(&self) -> bool {
        match self {
            Output::Text(_) => true,
            Output::Validation(validation) => validation.is_valid(),
            Output::Jwt(jwt) => jwt.error().is_none(),
        }
    }

    /// Renders the output the way a display layer shows it: text verbatim, everything
    /// else as 2-space indented JSON.
    pub fn to_display_string(&self) -> String {
        match self {
            Output::Text(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_default(),
        }
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

impl From<Validation> for Output {
    fn from(validation: Validation) -> Self {
        Output::Validation(validation)
    }
}

impl From<JwtDecoding> for Output {
    fn from(jwt: JwtDecoding) -> Self {
        Output::Jwt(jwt)
    }
}

/// Outcome of validating (and possibly re-formatting) an input.
///
/// A valid result never carries an error; an invalid result always carries a non-empty
/// error and never carries formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Validation {
    /// Valid input with its canonical re-serialization
    pub fn formatted(formatted: impl Into<String>) -> Self {
        Self {
            valid: true,
            formatted: Some(formatted.into()),
            error: None,
        }
    }

    /// Valid input for validators that do not re-format
    pub fn accepted() -> Self {
        Self {
            valid: true,
            formatted: None,
            error: None,
        }
    }

    pub fn invalid(error: impl Display) -> Self {
        let mut error = error.to_string();
        if error.is_empty() {
            error.push_str("invalid input");
        }

        Self {
            valid: false,
            formatted: None,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn formatted_text(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.formatted, &self.error) {
            (Some(formatted), _) => write!(f, "{formatted}"),
            (None, Some(error)) => write!(f, "{error}"),
            (None, None) => write!(f, "valid"),
        }
    }
}

/// Header and payload of a JSON Web Token. Both are `null` when decoding failed, in
/// which case `error` explains why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JwtDecoding {
    header: Option<Value>,
    payload: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JwtDecoding {
    pub fn decoded(header: Value, payload: Value) -> Self {
        Self {
            header: Some(header),
            payload: Some(payload),
            error: None,
        }
    }

    pub fn failed(error: impl Display) -> Self {
        Self {
            header: None,
            payload: None,
            error: Some(error.to_string()),
        }
    }

    pub fn header(&self) -> Option<&Value> {
        self.header.as_ref()
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
