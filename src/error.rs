// error.rs - Error taxonomy
//
// Everything that can fail is either page wiring (missing or mistyped
// elements) or input (config text, charge value text).

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("element '{0}' not found")]
    MissingElement(String),

    #[error("element '{0}' has the wrong type")]
    WrongElementType(String),

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("'{0}' is not a charge value")]
    InvalidChargeValue(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        let err = FieldError::MissingElement("historyList".into());
        assert_eq!(err.to_string(), "element 'historyList' not found");
    }

    #[test]
    fn invalid_value_quotes_input() {
        let err = FieldError::InvalidChargeValue("abc".into());
        assert_eq!(err.to_string(), "'abc' is not a charge value");
    }
}
