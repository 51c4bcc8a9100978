use serde_json::Error as JsonError;

use std::error::Error;
use std::fmt;
use std::io::Error as IOError;

#[derive(Debug)]
pub struct PlateError(PlateErrorKind);

#[derive(Debug)]
pub enum PlateErrorKind {
    IOError(IOError),
    JsonError(JsonError),
    /// a detection that breaks the label/box/confidence rules
    InvalidDetection(String),
    InvalidConfig(String),
    InvalidFont,
}

impl PlateError {
    pub fn kind(&self) -> &PlateErrorKind {
        &self.0
    }

    pub fn invalid_detection(reason: impl Into<String>) -> Self {
        Self(PlateErrorKind::InvalidDetection(reason.into()))
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self(PlateErrorKind::InvalidConfig(reason.into()))
    }
}

impl<T> From<T> for PlateError
where T: Into<PlateErrorKind>
{
    fn from(e: T) -> Self {
        Self(e.into())
    }
}

impl fmt::Display for PlateError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PlateErrorKind::IOError(e) => e.fmt(f),
            PlateErrorKind::JsonError(e) => e.fmt(f),
            PlateErrorKind::InvalidDetection(reason) => write!(f, "invalid detection: {}", reason),
            PlateErrorKind::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            PlateErrorKind::InvalidFont => write!(f, "font data could not be parsed"),
        }
    }
}

impl Error for PlateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.kind() {
            PlateErrorKind::IOError(e) => Some(e),
            PlateErrorKind::JsonError(e) => Some(e),
            PlateErrorKind::InvalidDetection(_)
                | PlateErrorKind::InvalidConfig(_)
                | PlateErrorKind::InvalidFont => None,
        }
    }
}

impl From<IOError> for PlateErrorKind {
    fn from(e: IOError) -> Self {
        Self::IOError(e)
    }
}

impl From<JsonError> for PlateErrorKind {
    fn from(e: JsonError) -> Self {
        Self::JsonError(e)
    }
}
