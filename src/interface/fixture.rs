use serde_json::Value;

use crate::Overrides;

/// A trait for building provider descriptor fixtures.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderFixture: Sync + Send {
    /// Retrieves the stable slug of the provider being mocked.
    fn key(&self) -> &str;

    /// Builds a descriptor value with the given overrides shallow-applied
    /// on top of the baseline.
    fn build(&self, overrides: &Overrides) -> Value;
}
