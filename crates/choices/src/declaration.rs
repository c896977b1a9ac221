use serde_json::Value;

use crate::choice::Extras;
use crate::label::Label;
use crate::registry::Registry;
use crate::scalar::Scalar;

/// Value as declared, before the builder resolves it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DeclaredValue {
	/// Derived from the key by the builder's value factory.
	Auto,
	Scalar(Scalar),
	/// Untyped input (declaration files); checked when the registry is built.
	Raw(Value),
}

/// Declaration of a single choice.
///
/// ```rust
/// use xeno_choices::Declaration;
///
/// let on_hold = Declaration::new("ON_HOLD", "On Hold")
///     .value("custom_on_hold")
///     .extra("help_text", "Waiting on the customer");
/// assert_eq!(on_hold.key(), "ON_HOLD");
/// ```
#[derive(Debug, Clone)]
pub struct Declaration {
	pub(crate) key: Box<str>,
	pub(crate) display: Label,
	pub(crate) value: DeclaredValue,
	pub(crate) extra: Extras,
}

impl Declaration {
	/// Declares a choice whose value is derived from its key.
	pub fn new(key: impl Into<Box<str>>, display: impl Into<Label>) -> Self {
		Self {
			key: key.into(),
			display: display.into(),
			value: DeclaredValue::Auto,
			extra: Extras::default(),
		}
	}

	/// Sets an explicit value.
	pub fn value(mut self, value: impl Into<Scalar>) -> Self {
		self.value = DeclaredValue::Scalar(value.into());
		self
	}

	/// Sets an explicit value from untyped input.
	///
	/// Values that cannot serve as lookup keys are reported by
	/// [`RegistryBuilder::build`](crate::RegistryBuilder::build).
	pub fn raw_value(mut self, value: Value) -> Self {
		self.value = DeclaredValue::Raw(value);
		self
	}

	/// Attaches an extra attribute, replacing any previous one of that name.
	pub fn extra(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.extra.insert(name.into(), value.into());
		self
	}

	pub fn key(&self) -> &str {
		&self.key
	}
}

/// Anything a registry name can be bound to.
#[derive(Debug, Clone)]
pub(crate) enum Decl {
	Choice(Declaration),
	Subset(Vec<Box<str>>),
	Nested(Registry),
}
