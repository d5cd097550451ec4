//! Error types for request validation.

/// A request is missing a field the service requires.
///
/// Raised before any network IO takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("`pairs` requires at least one currency conversion")]
    EmptyPairs,

    #[error("`date` is required")]
    MissingDate,
}
