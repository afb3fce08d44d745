// Errors raised while acquiring the drawing surface. All of them are fatal:
// the animation never starts and nothing retries.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NoWindow,
    NoDocument,
    CanvasNotFound(String),
    NotACanvas(String),
    SurfaceUnavailable,
    FrameRequest(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoWindow => write!(f, "no global window"),
            Error::NoDocument => write!(f, "window has no document"),
            Error::CanvasNotFound(id) => write!(f, "no element with id '{}'", id),
            Error::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            Error::SurfaceUnavailable => write!(f, "could not get canvas context"),
            Error::FrameRequest(msg) => write!(f, "requestAnimationFrame failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_canvas() {
        assert_eq!(
            Error::CanvasNotFound("boids".to_owned()).to_string(),
            "no element with id 'boids'"
        );
        assert_eq!(Error::SurfaceUnavailable.to_string(), "could not get canvas context");
    }
}
