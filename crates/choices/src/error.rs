use crate::scalar::Scalar;

/// Errors raised while building or querying a choices registry.
///
/// Construction errors abort the build; no partially built registry is ever
/// returned. Query errors leave the registry untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChoicesError {
	/// Two choices in one registry resolved to the same scalar value.
	#[error("choices registry {registry:?} has a duplicated value {value} for key {key:?}")]
	DuplicateValue {
		registry: Box<str>,
		key: Box<str>,
		value: Scalar,
	},
	/// A name was declared twice on the same builder.
	#[error("choices registry {registry:?} declares {key:?} more than once")]
	DuplicateKey { registry: Box<str>, key: Box<str> },
	/// A declared name is not an identifier.
	#[error("choices registry {registry:?}: {key:?} is not a valid choice key")]
	InvalidKey { registry: Box<str>, key: Box<str> },
	/// A subset, `extract` or `exclude` referenced a key the registry lacks.
	#[error("choices registry {registry:?} has no choice {key:?}")]
	UnknownKey { registry: Box<str>, key: Box<str> },
	/// A raw declared value cannot be used as a lookup value.
	#[error("type {kind} is not acceptable for choices value {registry}.{key}")]
	UnsupportedValueType {
		registry: Box<str>,
		key: Box<str>,
		kind: &'static str,
	},
	/// Indexed lookup of an absent value or key.
	#[error("{needle} is not found in choices registry {registry:?}")]
	KeyNotFound { registry: Box<str>, needle: Box<str> },
	/// Access to an extra attribute the choice was not declared with.
	#[error("choice {key:?} has no attribute {name:?}")]
	AttributeNotFound { key: Box<str>, name: Box<str> },
	/// A declaration file could not be parsed.
	#[error("invalid choices declaration: {0}")]
	Config(String),
}

pub type Result<T, E = ChoicesError> = std::result::Result<T, E>;
