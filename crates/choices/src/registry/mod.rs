//! Immutable choice registries.
//!
//! # Mental Model
//!
//! 1. **Build Phase:** [`RegistryBuilder`](crate::RegistryBuilder) resolves the declared values,
//!    rejects duplicates and resolves named subsets against the finished key set.
//! 2. **Consumption:** A [`Registry`] answers O(1) lookups by key or by value and iterates in
//!    declaration order. Cloning is cheap; all clones share one table.
//! 3. **Derivation:** [`Registry::extract`], [`Registry::exclude`] and the set operators build
//!    new registries that share [`Choice`] records with their source. The source is never
//!    touched.
//!
//! # Invariants
//!
//! - Keys are unique within a registry.
//!   - Enforced in: [`Registry::assemble`].
//! - Values are unique within a registry.
//!   - Enforced in: [`Registry::assemble`].
//!   - Tested by: `registry::invariants::value_lookup_round_trips`
//! - Iteration follows declaration order (or call order for `extract`).
//!   - Tested by: `registry::invariants::keys_and_values_align`

mod algebra;
mod derive;
mod filter;

#[cfg(test)]
mod invariants;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

pub use self::derive::DEFAULT_SUBSET_NAME;
pub use self::filter::Filter;
use crate::choice::Choice;
use crate::error::{ChoicesError, Result};
use crate::label::Label;
use crate::scalar::Scalar;

pub(crate) type Map<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Ordered, immutable collection of [`Choice`] records.
#[derive(Clone)]
pub struct Registry {
	inner: Arc<Inner>,
}

#[derive(Clone)]
struct Inner {
	name: Box<str>,
	choices: Map<Box<str>, Arc<Choice>>,
	by_value: FxHashMap<Scalar, usize>,
	subsets: Map<Box<str>, Registry>,
	nested: Map<Box<str>, Registry>,
}

impl Registry {
	/// Builds a registry from fully resolved choices, checking key and value uniqueness.
	pub(crate) fn assemble(
		name: Box<str>,
		choices: impl IntoIterator<Item = Arc<Choice>>,
	) -> Result<Self> {
		let choices = choices.into_iter();
		let mut table: Map<Box<str>, Arc<Choice>> =
			Map::with_capacity_and_hasher(choices.size_hint().0, FxBuildHasher);
		let mut by_value: FxHashMap<Scalar, usize> =
			FxHashMap::with_capacity_and_hasher(choices.size_hint().0, FxBuildHasher);

		for choice in choices {
			if table.contains_key(&choice.key) {
				return Err(ChoicesError::DuplicateKey {
					registry: name,
					key: choice.key.clone(),
				});
			}
			if by_value.contains_key(&choice.value) {
				return Err(ChoicesError::DuplicateValue {
					registry: name,
					key: choice.key.clone(),
					value: choice.value.clone(),
				});
			}
			by_value.insert(choice.value.clone(), table.len());
			table.insert(choice.key.clone(), choice);
		}

		Ok(Self::from_tables(name, table, by_value))
	}

	/// Builds a registry from choices already known to be unique, e.g. a
	/// restriction of another registry.
	pub(crate) fn restrict(name: Box<str>, choices: impl IntoIterator<Item = Arc<Choice>>) -> Self {
		let table: Map<Box<str>, Arc<Choice>> = choices
			.into_iter()
			.map(|choice| (choice.key.clone(), choice))
			.collect();
		let by_value = table
			.values()
			.enumerate()
			.map(|(idx, choice)| (choice.value.clone(), idx))
			.collect();

		Self::from_tables(name, table, by_value)
	}

	fn from_tables(
		name: Box<str>,
		choices: Map<Box<str>, Arc<Choice>>,
		by_value: FxHashMap<Scalar, usize>,
	) -> Self {
		tracing::trace!(registry = %name, choices = choices.len(), "assembled choices registry");
		Self {
			inner: Arc::new(Inner {
				name,
				choices,
				by_value,
				subsets: Map::default(),
				nested: Map::default(),
			}),
		}
	}

	/// Attaches named subsets and nested registries.
	pub(crate) fn with_children(
		self,
		subsets: Map<Box<str>, Registry>,
		nested: Map<Box<str>, Registry>,
	) -> Self {
		let mut inner = Arc::unwrap_or_clone(self.inner);
		inner.subsets = subsets;
		inner.nested = nested;
		Self {
			inner: Arc::new(inner),
		}
	}

	pub fn name(&self) -> &str {
		&self.inner.name
	}

	/// Returns the number of choices (subsets and nested registries excluded).
	#[inline]
	pub fn len(&self) -> usize {
		self.inner.choices.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.inner.choices.is_empty()
	}

	/// Looks up a choice by its value.
	#[inline]
	pub fn get(&self, value: impl Into<Scalar>) -> Option<&Choice> {
		self.find(&value.into())
	}

	fn find(&self, value: &Scalar) -> Option<&Choice> {
		let idx = *self.inner.by_value.get(value)?;
		self.inner.choices.get_index(idx).map(|(_, choice)| choice.as_ref())
	}

	/// Looks up a choice by its value, failing with [`ChoicesError::KeyNotFound`].
	pub fn try_get(&self, value: impl Into<Scalar>) -> Result<&Choice> {
		let value = value.into();
		self.find(&value).ok_or_else(|| ChoicesError::KeyNotFound {
			registry: self.inner.name.clone(),
			needle: value.to_string().into(),
		})
	}

	/// Returns the key of the choice holding `value`.
	#[inline]
	pub fn get_key(&self, value: impl Into<Scalar>) -> Option<&str> {
		self.get(value).map(Choice::key)
	}

	/// Returns true if a choice with this value exists.
	#[inline]
	pub fn contains(&self, value: impl Into<Scalar>) -> bool {
		self.inner.by_value.contains_key(&value.into())
	}

	/// Returns true if `key` names a choice of this registry.
	#[inline]
	pub fn has_key(&self, key: &str) -> bool {
		self.inner.choices.contains_key(key)
	}

	/// Looks up a choice by key.
	#[inline]
	pub fn by_key(&self, key: &str) -> Option<&Choice> {
		self.inner.choices.get(key).map(Arc::as_ref)
	}

	/// Looks up a choice by key, failing with [`ChoicesError::KeyNotFound`].
	pub fn choice(&self, key: &str) -> Result<&Choice> {
		self.by_key(key).ok_or_else(|| ChoicesError::KeyNotFound {
			registry: self.inner.name.clone(),
			needle: key.into(),
		})
	}

	/// Returns a named subset declared on this registry.
	pub fn subset(&self, name: &str) -> Option<&Registry> {
		self.inner.subsets.get(name)
	}

	pub fn subsets(&self) -> impl Iterator<Item = (&str, &Registry)> + '_ {
		self.inner.subsets.iter().map(|(name, sub)| (&**name, sub))
	}

	/// Returns a nested registry declared on this registry.
	pub fn nested(&self, name: &str) -> Option<&Registry> {
		self.inner.nested.get(name)
	}

	pub fn nested_registries(&self) -> impl Iterator<Item = (&str, &Registry)> + '_ {
		self.inner.nested.iter().map(|(name, reg)| (&**name, reg))
	}

	/// Iterates over `(value, display)` pairs in declaration order.
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			inner: self.inner.choices.values(),
		}
	}

	/// Iterates over the choices themselves.
	pub fn choices_iter(&self) -> impl DoubleEndedIterator<Item = &Choice> + ExactSizeIterator + '_ {
		self.inner.choices.values().map(Arc::as_ref)
	}

	/// Returns owned `(value, display)` pairs with resolved displays, the
	/// shape a form field expects for its options.
	pub fn choices(&self) -> Vec<(Scalar, String)> {
		self.iter()
			.map(|(value, display)| (value.clone(), display.resolve().into_owned()))
			.collect()
	}

	pub fn keys(&self) -> Vec<&str> {
		self.keys_where(&Filter::default())
	}

	pub fn values(&self) -> Vec<&Scalar> {
		self.values_where(&Filter::default())
	}

	pub fn items(&self) -> Vec<(&str, &Choice)> {
		self.items_where(&Filter::default())
	}

	pub fn displays(&self) -> Vec<&Label> {
		self.displays_where(&Filter::default())
	}

	/// Keys of the choices matching `filter`.
	pub fn keys_where(&self, filter: &Filter) -> Vec<&str> {
		self.matching(filter).map(Choice::key).collect()
	}

	/// Values of the choices matching `filter`.
	pub fn values_where(&self, filter: &Filter) -> Vec<&Scalar> {
		self.matching(filter).map(Choice::value).collect()
	}

	/// `(key, choice)` pairs of the choices matching `filter`.
	pub fn items_where(&self, filter: &Filter) -> Vec<(&str, &Choice)> {
		self.matching(filter)
			.map(|choice| (choice.key(), choice))
			.collect()
	}

	/// Displays of the choices matching `filter`.
	pub fn displays_where(&self, filter: &Filter) -> Vec<&Label> {
		self.matching(filter).map(Choice::display).collect()
	}

	fn matching<'a>(&'a self, filter: &Filter) -> impl Iterator<Item = &'a Choice> {
		self.choices_iter().filter(move |choice| filter.matches(choice))
	}

	pub(crate) fn shared_choices(&self) -> impl Iterator<Item = &Arc<Choice>> + '_ {
		self.inner.choices.values()
	}

	pub(crate) fn shared_choice(&self, key: &str) -> Option<&Arc<Choice>> {
		self.inner.choices.get(key)
	}
}

/// Iterator over the `(value, display)` pairs of a [`Registry`].
pub struct Iter<'a> {
	inner: indexmap::map::Values<'a, Box<str>, Arc<Choice>>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a Scalar, &'a Label);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|choice| choice.entry())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl DoubleEndedIterator for Iter<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(|choice| choice.entry())
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Registry {
	type Item = (&'a Scalar, &'a Label);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.inner.name)?;
		for (i, key) in self.inner.choices.keys().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			f.write_str(key)?;
		}
		f.write_str(")")
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("name", &self.inner.name)
			.field("choices", &self.inner.choices.values().collect::<Vec<_>>())
			.field("subsets", &self.inner.subsets.keys().collect::<Vec<_>>())
			.field("nested", &self.inner.nested.keys().collect::<Vec<_>>())
			.finish()
	}
}
