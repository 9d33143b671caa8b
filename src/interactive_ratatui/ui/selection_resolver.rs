use crate::schemas::terminology::Terminology;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid terminology selected. Missing NAMASTE code.")]
    MissingCode,
}

/// What has to happen before a confirmed suggestion can be shown
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The suggestion already carries detail data
    Ready(Terminology),
    /// Detail must be fetched by this code
    Fetch(String),
}

pub fn resolve(suggestion: &Terminology) -> Result<Resolution, SelectionError> {
    let code = suggestion.code().ok_or(SelectionError::MissingCode)?;

    if suggestion.has_detail() {
        Ok(Resolution::Ready(suggestion.clone()))
    } else {
        Ok(Resolution::Fetch(code.to_string()))
    }
}
