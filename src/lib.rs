//! Provider descriptor fixtures for test suites.
//!
//! The entry point is [`github_provider`] (or the [`GithubFixture`] it
//! delegates to), which builds a GitHub repository provider descriptor with
//! caller-supplied [`Overrides`] shallow-applied on top of the baseline.
//! [`TypedFixture`] converts built values into [`ProviderDescriptor`]s, and
//! [`has_shape`] checks built values against an expected structure.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
