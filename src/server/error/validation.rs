use thiserror::Error;

/// Client-caused request errors.
///
/// Each variant renders as a short machine-readable code that is returned verbatim in the
/// response body. Field names are given in their wire form, e.g. `car-name` or `cars-id`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was omitted or left empty.
    #[error("missing-{0}")]
    Missing(&'static str),

    /// A field was present but had the wrong type, such as a non-numeric identifier.
    #[error("wrong-{0}-type")]
    WrongType(&'static str),

    /// A date field could not be parsed as `YYYY-MM-DD`.
    #[error("failed-parsing-{0}")]
    FailedParsing(&'static str),

    /// A field was present but outside its allowed range.
    #[error("invalid-{0}")]
    Invalid(&'static str),

    /// The body or query string could not be decoded into the request type.
    ///
    /// Carries the decoder's message, e.g. which field had an unexpected type.
    #[error("{0}")]
    Malformed(String),

    /// The requested car already has an order whose dropoff date is on or after the
    /// requested pickup date.
    #[error("car-already-occupied")]
    CarAlreadyOccupied,
}
