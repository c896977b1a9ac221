//! Ordered choice registries.
//!
//! A [`Registry`] is a named, ordered set of [`Choice`] records, each holding
//! a key, a scalar value, a display label and free-form extra attributes.
//! Registries are built once and never mutated; narrowing
//! ([`Registry::extract`], [`Registry::exclude`]) and set algebra
//! (`|`, `&`, `-`, `^`) produce new registries sharing the same records.
//!
//! - [`RegistryBuilder`]: one-shot builder over ordered declarations
//! - [`Declaration`]: a single declared choice
//! - [`Scalar`]: hashable value type of a choice
//! - [`Label`] / [`Translate`]: display text, optionally rendered through a catalog
//! - [`Filter`]: extra-attribute conditions for the `*_where` accessors
//! - [`choices!`]: declarative shorthand for the builder
//! - [`config`]: declaration files and the serde form of a registry
//!   (TOML parsing behind feature `config`)
//!
//! ```rust
//! use xeno_choices::{Declaration, RegistryBuilder};
//!
//! let status = RegistryBuilder::new("Status")
//!     .choice(Declaration::new("CREATED", "Created"))
//!     .choice(Declaration::new("ON_HOLD", "On Hold").value("custom_on_hold"))
//!     .subset("VALID", ["CREATED", "ON_HOLD"])
//!     .build()?;
//!
//! assert!(status.contains("custom_on_hold"));
//! assert_eq!(status.get_key("created"), Some("CREATED"));
//! # Ok::<(), xeno_choices::ChoicesError>(())
//! ```

mod builder;
mod choice;
pub mod config;
mod declaration;
mod error;
mod label;
mod macros;
mod registry;
mod scalar;
#[cfg(test)]
mod test_fixtures;

pub use builder::{RegistryBuilder, ValueFactory, default_value_factory};
pub use choice::{Choice, Extras};
pub use declaration::Declaration;
pub use error::{ChoicesError, Result};
pub use label::{Label, Translate};
pub use registry::{DEFAULT_SUBSET_NAME, Filter, Iter, Registry};
pub use scalar::Scalar;
