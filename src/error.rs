use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to get {0} context")]
    ContextUnavailable(&'static str),
    #[error("shader compile failed: {0}")]
    ShaderCompile(String),
    #[error("program link failed: {0}")]
    ProgramLink(String),
    #[error("failed to create {0}")]
    ResourceCreation(&'static str),
    #[error("uniform `{0}` not found")]
    MissingUniform(&'static str),
    #[error("attribute `{0}` not found")]
    MissingAttribute(&'static str),
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        RenderError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::InvalidOptions(err.to_string())
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
