use http::uri::InvalidUri;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TetherError {
    #[error("include_data=True requires the type_ argument.")]
    TypeRequired,
    #[error("a relationship field needs a `self_view`, a `related_view` or `include_data`")]
    EmptyRelationship,
    #[error("`{0}_view_kwargs` configured without a matching `{0}_view`")]
    KwargsWithoutView(&'static str),
    #[error("cannot resolve `{segment}` while reading `{path}`")]
    MissingAttribute { path: String, segment: String },
    #[error("attribute `{0}` is not a sequence of related records")]
    ExpectedSequence(String),
    #[error("related record under `{0}` has no usable `id`")]
    MissingId(String),
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),
    #[error("route `{endpoint}` is missing the `{param}` parameter")]
    MissingRouteParam { endpoint: String, param: String },
    #[error("route `{endpoint}` parameter `{param}` rejected value `{value}`")]
    InvalidRouteParam { endpoint: String, param: String, value: String },
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidRoutePattern { pattern: String, reason: String },
    #[error("an external URL needs a resolver configured with a base URL")]
    NoExternalBase,
    #[error("Invalid URI")]
    InvalidUri(#[source] InvalidUri),
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error>),
}

impl From<InvalidUri> for TetherError {
    fn from(err: InvalidUri) -> Self { TetherError::InvalidUri(err) }
}

from_external_error!(url::ParseError, serde_json::Error);
