use log::debug;
use serde_json::{Value, json};

use crate::{Overrides, ProviderFixture};

/// This struct builds GitHub repository provider descriptor fixtures.
///
/// Each call constructs the baseline descriptor anew and shallow-applies the
/// overrides on top: overrides win on key collision, keys absent from the
/// overrides keep their baseline values, and keys present only in the
/// overrides are added. Nested values such as `config` are replaced
/// wholesale, never deep-merged.
#[derive(Debug, Default)]
pub struct GithubFixture;

impl GithubFixture {
    /// Creates a new `GithubFixture` instance.
    pub fn new() -> Self {
        Self
    }

    /// The baseline GitHub provider descriptor as a JSON object.
    fn baseline() -> Value {
        json!({
            "key": "github",
            "name": "GitHub",
            "config": [{
                "name": "name",
                "label": "Repository Name",
                "type": "text",
                "placeholder": "e.g. octocat/hello-world",
                "help": "Enter your repository name, including the owner.",
                "required": true,
            }],
        })
    }
}

impl ProviderFixture for GithubFixture {
    fn key(&self) -> &str {
        "github"
    }

    fn build(&self, overrides: &Overrides) -> Value {
        debug!("Building github provider fixture, {overrides}");
        let mut descriptor = Self::baseline();
        if let Value::Object(merged) = &mut descriptor {
            for (key, value) in overrides.iter() {
                merged.insert(key.clone(), value.clone());
            }
        }

        descriptor
    }
}

/// Builds a GitHub provider descriptor fixture with the given overrides.
pub fn github_provider(overrides: &Overrides) -> Value {
    GithubFixture::new().build(overrides)
}
