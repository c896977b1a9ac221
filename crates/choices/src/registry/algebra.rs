//! Set operations between registries.
//!
//! Membership is decided by key only. Choices always come from the operand
//! that contributed them, left before right.

use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Registry;
use crate::error::Result;

impl Registry {
	/// Choices of `self`, then choices of `other` whose key `self` lacks.
	///
	/// Fails with [`DuplicateValue`](crate::ChoicesError::DuplicateValue) when
	/// a right-hand choice reuses a left-hand value under another key.
	pub fn union(&self, other: &Registry) -> Result<Registry> {
		let right = other.shared_choices().filter(|choice| {
			let shadowed = self.has_key(choice.key());
			if shadowed {
				tracing::trace!(
					left = self.name(),
					right = other.name(),
					key = choice.key(),
					"union keeps left-hand choice"
				);
			}
			!shadowed
		});
		Registry::assemble(
			self.combined_name("|", other),
			self.shared_choices().chain(right).cloned(),
		)
	}

	/// Choices of `self` whose key `other` also has.
	pub fn intersection(&self, other: &Registry) -> Registry {
		Registry::restrict(
			self.combined_name("&", other),
			self.shared_choices()
				.filter(|choice| other.has_key(choice.key()))
				.cloned(),
		)
	}

	/// Choices of `self` whose key `other` lacks.
	pub fn difference(&self, other: &Registry) -> Registry {
		Registry::restrict(
			self.combined_name("-", other),
			self.shared_choices()
				.filter(|choice| !other.has_key(choice.key()))
				.cloned(),
		)
	}

	/// Choices whose key is in exactly one operand, left-only first.
	///
	/// Fails like [`union`](Self::union) on a value clash between the sides.
	pub fn symmetric_difference(&self, other: &Registry) -> Result<Registry> {
		let left = self
			.shared_choices()
			.filter(|choice| !other.has_key(choice.key()));
		let right = other
			.shared_choices()
			.filter(|choice| !self.has_key(choice.key()));
		Registry::assemble(self.combined_name("^", other), left.chain(right).cloned())
	}

	fn combined_name(&self, op: &str, other: &Registry) -> Box<str> {
		format!("{}{}{}", self.name(), op, other.name()).into_boxed_str()
	}
}

impl BitOr for &Registry {
	type Output = Result<Registry>;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.union(rhs)
	}
}

impl BitAnd for &Registry {
	type Output = Registry;

	fn bitand(self, rhs: Self) -> Self::Output {
		self.intersection(rhs)
	}
}

impl Sub for &Registry {
	type Output = Registry;

	fn sub(self, rhs: Self) -> Self::Output {
		self.difference(rhs)
	}
}

impl BitXor for &Registry {
	type Output = Result<Registry>;

	fn bitxor(self, rhs: Self) -> Self::Output {
		self.symmetric_difference(rhs)
	}
}
