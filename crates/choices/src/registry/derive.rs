use rustc_hash::FxHashSet;

use super::Registry;
use crate::error::{ChoicesError, Result};

/// Name used for derived registries when the caller gives none.
pub const DEFAULT_SUBSET_NAME: &str = "Subset";

impl Registry {
	/// Returns a new registry holding exactly the named choices, in the
	/// order given. Repeated keys keep their first position.
	///
	/// The result is named `<self>.<name>`, `name` defaulting to
	/// [`DEFAULT_SUBSET_NAME`]. Keys may be any string type, so a subset's
	/// keys can be spliced in with other names:
	///
	/// ```rust
	/// use xeno_choices::{Declaration, RegistryBuilder};
	///
	/// let status = RegistryBuilder::new("Status")
	///     .choice(Declaration::new("CREATED", "Created"))
	///     .choice(Declaration::new("PENDING", "Pending"))
	///     .choice(Declaration::new("CLOSED", "Closed"))
	///     .subset("OPEN", ["CREATED", "PENDING"])
	///     .build()?;
	///
	/// let open = status.subset("OPEN").map(|open| open.keys()).unwrap_or_default();
	/// let picked = status.extract(["CLOSED"].into_iter().chain(open), None)?;
	/// assert_eq!(picked.keys(), ["CLOSED", "CREATED", "PENDING"]);
	/// # Ok::<(), xeno_choices::ChoicesError>(())
	/// ```
	pub fn extract(
		&self,
		keys: impl IntoIterator<Item = impl AsRef<str>>,
		name: Option<&str>,
	) -> Result<Registry> {
		let mut seen = FxHashSet::default();
		let mut picked = Vec::new();
		for key in keys {
			let key = key.as_ref();
			let choice = self.shared_choice(key).ok_or_else(|| self.unknown_key(key))?;
			if seen.insert(choice.key()) {
				picked.push(choice.clone());
			}
		}

		Ok(Registry::restrict(self.derived_name(name), picked))
	}

	/// Returns a new registry holding every choice except the named ones, in
	/// declaration order.
	///
	/// Keys and naming follow [`extract`](Self::extract).
	pub fn exclude(
		&self,
		keys: impl IntoIterator<Item = impl AsRef<str>>,
		name: Option<&str>,
	) -> Result<Registry> {
		let excluded = keys
			.into_iter()
			.map(|key| {
				let key = key.as_ref();
				self.shared_choice(key)
					.map(|choice| choice.key())
					.ok_or_else(|| self.unknown_key(key))
			})
			.collect::<Result<FxHashSet<&str>>>()?;

		let kept = self
			.shared_choices()
			.filter(|choice| !excluded.contains(choice.key()))
			.cloned();

		Ok(Registry::restrict(self.derived_name(name), kept))
	}

	fn derived_name(&self, name: Option<&str>) -> Box<str> {
		format!("{}.{}", self.name(), name.unwrap_or(DEFAULT_SUBSET_NAME)).into_boxed_str()
	}

	pub(crate) fn unknown_key(&self, key: &str) -> ChoicesError {
		ChoicesError::UnknownKey {
			registry: self.name().into(),
			key: key.into(),
		}
	}
}
