use std::sync::Arc;

use crate::{Overrides, ProviderDescriptor, ProviderFixture, StdResult};

/// This struct wraps a fixture and exposes its built values as typed
/// provider descriptors.
pub struct TypedFixture {
    /// The fixture to be wrapped.
    fixture: Arc<dyn ProviderFixture>,
}

impl TypedFixture {
    /// Creates a new `TypedFixture` instance with the given fixture.
    pub fn new(fixture: Arc<dyn ProviderFixture>) -> Self {
        Self { fixture }
    }

    /// Builds a fixture value and converts it into a `ProviderDescriptor`.
    ///
    /// Fails when the overrides push the built value out of the descriptor
    /// shape, e.g. a `config` override that is not a field list.
    pub fn descriptor(&self, overrides: &Overrides) -> StdResult<ProviderDescriptor> {
        let descriptor = ProviderDescriptor::try_from(self.fixture.build(overrides))?;

        Ok(descriptor)
    }
}
