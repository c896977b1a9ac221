use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{ChoicesError, Result};
use crate::label::Label;
use crate::scalar::Scalar;

/// Extra attributes attached to a choice, in declaration order.
pub type Extras = IndexMap<Box<str>, Value>;

/// One named entry of a registry.
///
/// A choice stands in for its scalar value: equality, hashing, ordering,
/// formatting and serialization all go through [`Choice::value`].
#[derive(Debug, Clone)]
pub struct Choice {
	pub(crate) key: Box<str>,
	pub(crate) value: Scalar,
	pub(crate) display: Label,
	pub(crate) extra: Extras,
}

impl Choice {
	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value(&self) -> &Scalar {
		&self.value
	}

	pub fn display(&self) -> &Label {
		&self.display
	}

	/// Returns all extra attributes.
	pub fn extras(&self) -> &Extras {
		&self.extra
	}

	/// Looks up an extra attribute.
	pub fn extra(&self, name: &str) -> Option<&Value> {
		self.extra.get(name)
	}

	/// Looks up an extra attribute, failing if it was never declared.
	pub fn try_extra(&self, name: &str) -> Result<&Value> {
		self.extra(name)
			.ok_or_else(|| ChoicesError::AttributeNotFound {
				key: self.key.clone(),
				name: name.into(),
			})
	}

	/// Returns the `(value, display)` pair a form field expects.
	pub fn entry(&self) -> (&Scalar, &Label) {
		(&self.value, &self.display)
	}
}

impl PartialEq for Choice {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Eq for Choice {}

impl Hash for Choice {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl PartialOrd for Choice {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Choice {
	fn cmp(&self, other: &Self) -> Ordering {
		self.value.cmp(&other.value)
	}
}

impl PartialEq<Scalar> for Choice {
	fn eq(&self, other: &Scalar) -> bool {
		self.value == *other
	}
}

impl PartialEq<str> for Choice {
	fn eq(&self, other: &str) -> bool {
		self.value == *other
	}
}

impl PartialEq<&str> for Choice {
	fn eq(&self, other: &&str) -> bool {
		self.value == *other
	}
}

impl PartialEq<i64> for Choice {
	fn eq(&self, other: &i64) -> bool {
		self.value == *other
	}
}

impl PartialEq<bool> for Choice {
	fn eq(&self, other: &bool) -> bool {
		self.value == *other
	}
}

impl From<&Choice> for Scalar {
	fn from(choice: &Choice) -> Self {
		choice.value.clone()
	}
}

impl fmt::Display for Choice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.value, f)
	}
}

impl Serialize for Choice {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.value.serialize(serializer)
	}
}
