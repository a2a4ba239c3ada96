use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FixtureError;

/// The stable slug identifying a provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProviderKey(pub String);

impl Deref for ProviderKey {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ProviderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The human-readable display name of a provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProviderName(pub String);

impl Deref for ProviderName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The semantic input kind of a configuration field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A single-line text input.
    #[default]
    Text,

    /// A masked secret input.
    Password,

    /// A URL input.
    Url,

    /// A multi-line text input.
    Textarea,

    /// A selection among fixed choices.
    Choice,
}

/// A single form field of a provider configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The form-field identifier.
    name: String,

    /// The human-readable label.
    label: String,

    /// The semantic input kind.
    #[serde(rename = "type")]
    kind: FieldKind,

    /// An example-value hint.
    placeholder: String,

    /// A descriptive help text.
    help: String,

    /// Whether the field must be filled in.
    required: bool,
}

impl FieldDescriptor {
    /// Creates a new `FieldDescriptor` instance.
    pub fn new(
        name: &str,
        label: &str,
        kind: FieldKind,
        placeholder: &str,
        help: &str,
        required: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            placeholder: placeholder.to_string(),
            help: help.to_string(),
            required,
        }
    }

    /// Retrieves the form-field identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Retrieves the semantic input kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Retrieves the example-value hint.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Retrieves the help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether the field must be filled in.
    pub fn required(&self) -> bool {
        self.required
    }
}

impl Display for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FieldDescriptor: name={}, label={}, required={}",
            self.name, self.label, self.required
        )
    }
}

/// The descriptor of a configurable repository provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    /// The stable slug of the provider.
    key: ProviderKey,

    /// The display name of the provider.
    name: ProviderName,

    /// The ordered configuration form fields.
    config: Vec<FieldDescriptor>,

    /// Additional top-level keys not part of the baseline shape.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ProviderDescriptor {
    /// Creates a new `ProviderDescriptor` instance.
    pub fn new(key: &str, name: &str, config: Vec<FieldDescriptor>) -> Self {
        Self {
            key: ProviderKey(key.to_string()),
            name: ProviderName(name.to_string()),
            config,
            extra: Map::new(),
        }
    }

    /// The baseline GitHub repository provider descriptor.
    pub fn github() -> Self {
        Self::new(
            "github",
            "GitHub",
            vec![FieldDescriptor::new(
                "name",
                "Repository Name",
                FieldKind::Text,
                "e.g. octocat/hello-world",
                "Enter your repository name, including the owner.",
                true,
            )],
        )
    }

    /// Retrieves the provider key.
    pub fn key(&self) -> &ProviderKey {
        &self.key
    }

    /// Retrieves the provider name.
    pub fn name(&self) -> &ProviderName {
        &self.name
    }

    /// Retrieves the configuration form fields.
    pub fn config(&self) -> &[FieldDescriptor] {
        &self.config
    }

    /// Retrieves the additional top-level keys.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl Display for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProviderDescriptor: key={}, name={}, fields={}",
            self.key,
            self.name,
            self.config.len()
        )
    }
}

impl TryFrom<Value> for ProviderDescriptor {
    type Error = FixtureError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(FixtureError::MalformedDescriptor)
    }
}
