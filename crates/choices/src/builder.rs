use std::sync::Arc;

use crate::choice::Choice;
use crate::declaration::{Decl, DeclaredValue, Declaration};
use crate::error::{ChoicesError, Result};
use crate::label::Label;
use crate::registry::{Map, Registry};
use crate::scalar::Scalar;

/// Derives the value of a choice declared without one.
pub type ValueFactory = fn(key: &str, display: &Label) -> Scalar;

/// Lower-cases the key: `ON_HOLD` becomes `"on_hold"`.
pub fn default_value_factory(key: &str, _display: &Label) -> Scalar {
	Scalar::from(key.to_lowercase())
}

/// Builder for constructing a [`Registry`].
///
/// Declarations are recorded in order and resolved once by
/// [`build`](Self::build). Errors found while declaring are held back and
/// returned by `build`, so a builder chain never needs `?` midway.
///
/// ```rust
/// use xeno_choices::{Declaration, RegistryBuilder};
///
/// let status = RegistryBuilder::new("Status")
///     .choice(Declaration::new("CREATED", "Created"))
///     .choice(Declaration::new("ON_HOLD", "On Hold").value("custom_on_hold"))
///     .subset("VALID", ["CREATED", "ON_HOLD"])
///     .build()?;
///
/// let extended = RegistryBuilder::new("ExtendedStatus")
///     .inherit(&status)
///     .choice(Declaration::new("CLOSED", "Closed"))
///     .build()?;
/// assert_eq!(extended.keys(), ["CREATED", "ON_HOLD", "CLOSED"]);
/// assert_eq!(extended.subset("VALID").map(|valid| valid.len()), Some(2));
/// # Ok::<(), xeno_choices::ChoicesError>(())
/// ```
pub struct RegistryBuilder {
	name: Box<str>,
	decls: Map<Box<str>, Slot>,
	value_factory: ValueFactory,
	error: Option<ChoicesError>,
}

struct Slot {
	decl: Decl,
	inherited: bool,
}

impl RegistryBuilder {
	/// Creates a new builder for a registry called `name`.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			decls: Map::default(),
			value_factory: default_value_factory,
			error: None,
		}
	}

	/// Returns the number of names declared so far.
	pub fn len(&self) -> usize {
		self.decls.len()
	}

	/// Returns true if nothing has been declared so far.
	pub fn is_empty(&self) -> bool {
		self.decls.is_empty()
	}

	/// Sets the function deriving values for choices declared without one.
	pub fn value_factory(mut self, factory: ValueFactory) -> Self {
		self.value_factory = factory;
		self
	}

	/// Copies the choices, subsets and nested registries of `parent`.
	///
	/// Anything declared on this builder afterwards replaces an inherited
	/// name in place. Inherited subsets are resolved again against this
	/// registry's final choices. Names already declared directly on this
	/// builder are kept.
	pub fn inherit(mut self, parent: &Registry) -> Self {
		for choice in parent.choices_iter() {
			let decl = Declaration {
				key: choice.key.clone(),
				display: choice.display.clone(),
				value: DeclaredValue::Scalar(choice.value.clone()),
				extra: choice.extra.clone(),
			};
			self.inherit_slot(choice.key.clone(), Decl::Choice(decl));
		}
		for (name, subset) in parent.subsets() {
			let members = subset.keys().into_iter().map(Box::<str>::from).collect();
			self.inherit_slot(name.into(), Decl::Subset(members));
		}
		for (name, nested) in parent.nested_registries() {
			self.inherit_slot(name.into(), Decl::Nested(nested.clone()));
		}
		self
	}

	fn inherit_slot(&mut self, name: Box<str>, decl: Decl) {
		match self.decls.get_mut(&name) {
			Some(slot) if !slot.inherited => {}
			Some(slot) => slot.decl = decl,
			None => {
				self.decls.insert(
					name,
					Slot {
						decl,
						inherited: true,
					},
				);
			}
		}
	}

	/// Declares a choice.
	pub fn choice(self, decl: Declaration) -> Self {
		let key = decl.key.clone();
		self.declare(key, Decl::Choice(decl))
	}

	/// Declares a named subset of this registry's choices.
	///
	/// Members are resolved when the registry is built, so they may name
	/// choices declared later.
	pub fn subset<I, K>(self, name: impl Into<Box<str>>, members: I) -> Self
	where
		I: IntoIterator<Item = K>,
		K: Into<Box<str>>,
	{
		let members = members.into_iter().map(Into::into).collect();
		self.declare(name.into(), Decl::Subset(members))
	}

	/// Attaches an independent registry under `name`.
	pub fn nested(self, name: impl Into<Box<str>>, registry: Registry) -> Self {
		self.declare(name.into(), Decl::Nested(registry))
	}

	fn declare(mut self, name: Box<str>, decl: Decl) -> Self {
		if self.error.is_some() {
			return self;
		}
		if !is_identifier(&name) {
			self.error = Some(ChoicesError::InvalidKey {
				registry: self.name.clone(),
				key: name,
			});
			return self;
		}

		match self.decls.get_mut(&name) {
			Some(slot) if slot.inherited => {
				*slot = Slot {
					decl,
					inherited: false,
				};
			}
			Some(_) => {
				self.error = Some(ChoicesError::DuplicateKey {
					registry: self.name.clone(),
					key: name,
				});
			}
			None => {
				self.decls.insert(
					name,
					Slot {
						decl,
						inherited: false,
					},
				);
			}
		}
		self
	}

	/// Resolves every declaration and produces the registry.
	///
	/// Values are resolved in declaration order, then subsets are resolved
	/// against the complete set of choices. Any failure aborts the build.
	pub fn build(self) -> Result<Registry> {
		if let Some(err) = self.error {
			return Err(err);
		}

		let mut choices = Vec::with_capacity(self.decls.len());
		let mut subsets = Vec::new();
		let mut nested = Map::default();

		for (name, slot) in self.decls {
			match slot.decl {
				Decl::Choice(decl) => {
					let value = match decl.value {
						DeclaredValue::Auto => (self.value_factory)(&name, &decl.display),
						DeclaredValue::Scalar(value) => value,
						DeclaredValue::Raw(raw) => Scalar::from_json(&raw).map_err(|kind| {
							ChoicesError::UnsupportedValueType {
								registry: self.name.clone(),
								key: name.clone(),
								kind,
							}
						})?,
					};
					choices.push(Arc::new(Choice {
						key: name,
						value,
						display: decl.display,
						extra: decl.extra,
					}));
				}
				Decl::Subset(members) => subsets.push((name, members)),
				Decl::Nested(registry) => {
					nested.insert(name, registry);
				}
			}
		}

		let base = Registry::assemble(self.name, choices)?;

		let mut resolved = Map::default();
		for (name, members) in subsets {
			let subset = base.extract(&members, Some(&*name))?;
			resolved.insert(name, subset);
		}

		tracing::debug!(
			registry = base.name(),
			choices = base.len(),
			subsets = resolved.len(),
			nested = nested.len(),
			"built choices registry"
		);

		Ok(base.with_children(resolved, nested))
	}
}

/// ASCII identifier: letters, digits and underscores, not starting with a digit.
pub(crate) fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
		}
		_ => false,
	}
}
