//! Scalar values carried by choices.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hashable, totally ordered value of a choice.
///
/// There is no float variant; lookup values are `Eq + Hash`. Serializes as
/// the bare JSON string, number, boolean or array.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Str(Box<str>),
	Int(i64),
	Bool(bool),
	Tuple(Vec<Scalar>),
}

impl Scalar {
	/// Returns the string slice if this is a string scalar.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the integer if this is an integer scalar.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(i) => Some(*i),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean scalar.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Converts a raw JSON value into a scalar.
	///
	/// On failure returns the JSON kind that was rejected.
	pub fn from_json(value: &Value) -> Result<Self, &'static str> {
		match value {
			Value::String(s) => Ok(Self::Str(s.as_str().into())),
			Value::Bool(b) => Ok(Self::Bool(*b)),
			Value::Number(n) => n.as_i64().map(Self::Int).ok_or(if n.is_f64() {
				"float"
			} else {
				"u64"
			}),
			Value::Array(items) => items
				.iter()
				.map(Self::from_json)
				.collect::<Result<Vec<_>, _>>()
				.map(Self::Tuple),
			Value::Null => Err("null"),
			Value::Object(_) => Err("object"),
		}
	}

	/// Converts the scalar back into a JSON value.
	pub fn to_json(&self) -> Value {
		match self {
			Self::Str(s) => Value::String(s.to_string()),
			Self::Int(i) => Value::from(*i),
			Self::Bool(b) => Value::Bool(*b),
			Self::Tuple(items) => Value::Array(items.iter().map(Self::to_json).collect()),
		}
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(s) => f.write_str(s),
			Self::Int(i) => write!(f, "{i}"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Tuple(items) => {
				f.write_str("(")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str(")")
			}
		}
	}
}

impl From<&Scalar> for Scalar {
	fn from(value: &Scalar) -> Self {
		value.clone()
	}
}

impl From<&str> for Scalar {
	fn from(value: &str) -> Self {
		Self::Str(value.into())
	}
}

impl From<String> for Scalar {
	fn from(value: String) -> Self {
		Self::Str(value.into_boxed_str())
	}
}

impl From<i32> for Scalar {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<i64> for Scalar {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for Scalar {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

impl From<bool> for Scalar {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Vec<Scalar>> for Scalar {
	fn from(value: Vec<Scalar>) -> Self {
		Self::Tuple(value)
	}
}

macro_rules! tuple_into_scalar {
	($($ty:ident => $var:ident),+) => {
		impl<$($ty: Into<Scalar>),+> From<($($ty,)+)> for Scalar {
			fn from(($($var,)+): ($($ty,)+)) -> Self {
				Self::Tuple(vec![$($var.into()),+])
			}
		}
	};
}

tuple_into_scalar!(A => a, B => b);
tuple_into_scalar!(A => a, B => b, C => c);
tuple_into_scalar!(A => a, B => b, C => c, D => d);

impl PartialEq<str> for Scalar {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == Some(other)
	}
}

impl PartialEq<&str> for Scalar {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == Some(*other)
	}
}

impl PartialEq<i64> for Scalar {
	fn eq(&self, other: &i64) -> bool {
		self.as_int() == Some(*other)
	}
}

impl PartialEq<bool> for Scalar {
	fn eq(&self, other: &bool) -> bool {
		self.as_bool() == Some(*other)
	}
}
