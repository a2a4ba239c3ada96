use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Errors raised by the typed conversion layer.
///
/// The fixture builder itself is total and never fails.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The built value does not deserialize into a provider descriptor.
    #[error("malformed provider descriptor: {0}")]
    MalformedDescriptor(#[source] serde_json::Error),
}
