use serde_json::Value;

use crate::choice::Choice;

/// Conjunction of `attribute == value` conditions over a choice's extras.
///
/// A choice missing one of the attributes never matches. The empty filter
/// matches every choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
	conditions: Vec<(Box<str>, Value)>,
}

impl Filter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Requires the extra attribute `name` to equal `value`.
	pub fn with(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.conditions.push((name.into(), value.into()));
		self
	}

	pub fn matches(&self, choice: &Choice) -> bool {
		self.conditions
			.iter()
			.all(|(name, expected)| choice.extra(name) == Some(expected))
	}
}
