//! Declaration files and the serialized form of a registry.
//!
//! A registry can be declared in TOML instead of code (feature `config`):
//!
//! ```toml
//! name = "Status"
//!
//! [[choice]]
//! key = "ON_HOLD"
//! display = "On Hold"
//! value = "custom_on_hold"
//! extra = { help_text = "Waiting on the customer" }
//!
//! [[choice]]
//! key = "VALID"
//! subset = ["CREATED", "ON_HOLD"]
//!
//! [[nested]]
//! name = "Priority"
//! [[nested.choice]]
//! key = "LOW"
//! display = "Low"
//! ```
//!
//! Values go through [`Declaration::raw_value`], so a float or a table in
//! `value` is reported as [`ChoicesError::UnsupportedValueType`]. A field
//! that no entry kind knows is a [`ChoicesError::Config`] error.
//!
//! [`Registry`] serializes to this same shape with every value spelled out,
//! and deserializes through it, so any serde format round-trips a registry.
//! Deferred labels are written as their rendered text.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::builder::RegistryBuilder;
use crate::declaration::Declaration;
#[cfg(feature = "config")]
use crate::error::ChoicesError;
use crate::error::Result;
use crate::registry::Registry;

/// Top-level table of a declaration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
	pub name: String,
	/// Name a nested registry is attached under, when it differs from `name`.
	/// Ignored at the top level.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	#[serde(default, rename = "choice", skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<EntryConfig>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub nested: Vec<RegistryConfig>,
}

/// One `[[choice]]` entry: either a value or a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryConfig {
	Subset(SubsetEntry),
	Value(ValueEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubsetEntry {
	pub key: String,
	pub subset: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueEntry {
	pub key: String,
	pub display: String,
	/// Omitted means derived from the key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<Value>,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub extra: IndexMap<String, Value>,
}

impl RegistryConfig {
	/// Parses a declaration file.
	#[cfg(feature = "config")]
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|err| ChoicesError::Config(err.to_string()))
	}

	/// Turns the declarations into a builder, nested registries first.
	pub fn into_builder(self) -> Result<RegistryBuilder> {
		let mut builder = RegistryBuilder::new(self.name);
		for nested in self.nested {
			let key = nested.key.clone().unwrap_or_else(|| nested.name.clone());
			builder = builder.nested(key, nested.build()?);
		}
		for entry in self.choices {
			builder = match entry {
				EntryConfig::Subset(entry) => builder.subset(entry.key, entry.subset),
				EntryConfig::Value(entry) => {
					let mut decl = Declaration::new(entry.key, entry.display);
					if let Some(value) = entry.value {
						decl = decl.raw_value(value);
					}
					for (name, value) in entry.extra {
						decl = decl.extra(name, value);
					}
					builder.choice(decl)
				}
			};
		}
		Ok(builder)
	}

	pub fn build(self) -> Result<Registry> {
		self.into_builder()?.build()
	}
}

impl From<&Registry> for RegistryConfig {
	fn from(registry: &Registry) -> Self {
		let values = registry.choices_iter().map(|choice| {
			EntryConfig::Value(ValueEntry {
				key: choice.key().to_owned(),
				display: choice.display().resolve().into_owned(),
				value: Some(choice.value().to_json()),
				extra: choice
					.extras()
					.iter()
					.map(|(name, value)| (name.to_string(), value.clone()))
					.collect(),
			})
		});
		let subsets = registry.subsets().map(|(name, subset)| {
			EntryConfig::Subset(SubsetEntry {
				key: name.to_owned(),
				subset: subset.keys().into_iter().map(str::to_owned).collect(),
			})
		});
		let nested = registry
			.nested_registries()
			.map(|(key, nested)| {
				let mut config = Self::from(nested);
				if config.name != key {
					config.key = Some(key.to_owned());
				}
				config
			})
			.collect();

		Self {
			name: registry.name().to_owned(),
			key: None,
			choices: values.chain(subsets).collect(),
			nested,
		}
	}
}

impl Registry {
	/// Builds a registry from a TOML declaration file.
	#[cfg(feature = "config")]
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config = RegistryConfig::from_toml_str(source)?;
		tracing::debug!(
			registry = %config.name,
			entries = config.choices.len(),
			nested = config.nested.len(),
			"loaded choices declaration"
		);
		config.build()
	}
}

impl Serialize for Registry {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		RegistryConfig::from(self).serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Registry {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		RegistryConfig::deserialize(deserializer)?
			.build()
			.map_err(D::Error::custom)
	}
}
