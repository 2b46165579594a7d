use std::fmt;
use wasm_bindgen::JsValue;

/// Reasons the background cannot be attached to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    NoWindow,
    NoDocument,
    CanvasNotFound(String),
    NotACanvas(String),
    NoContext,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "no global `window` exists"),
            SetupError::NoDocument => write!(f, "window has no document"),
            SetupError::CanvasNotFound(id) => write!(f, "no element with id `{}`", id),
            SetupError::NotACanvas(id) => write!(f, "element `{}` is not a canvas", id),
            SetupError::NoContext => write!(f, "canvas has no 2d rendering context"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}
