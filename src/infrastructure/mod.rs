mod fixture_github;
mod fixture_typed;

pub use fixture_github::*;
pub use fixture_typed::*;
