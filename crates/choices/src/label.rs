//! Display text for choices.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Message catalog used to render deferred labels.
///
/// Implementations are looked up at render time, so a catalog can switch
/// its active language between two calls to [`Label::resolve`].
pub trait Translate: Send + Sync {
	/// Renders `msgid` in the catalog's current language.
	fn translate(&self, msgid: &str) -> String;
}

/// Human-readable text of a choice.
///
/// Equality, against another label or a plain string, compares the source
/// text (the message id of a deferred label), never the rendering.
#[derive(Clone)]
pub enum Label {
	/// Plain text, rendered as-is.
	Text(Box<str>),
	/// Message id rendered through a catalog on every [`resolve`](Self::resolve).
	Deferred {
		msgid: Box<str>,
		catalog: Arc<dyn Translate>,
	},
}

impl Label {
	/// Creates a deferred label.
	pub fn deferred(msgid: impl Into<Box<str>>, catalog: Arc<dyn Translate>) -> Self {
		Self::Deferred {
			msgid: msgid.into(),
			catalog,
		}
	}

	/// Returns the untranslated text or message id.
	pub fn source(&self) -> &str {
		match self {
			Self::Text(text) => text,
			Self::Deferred { msgid, .. } => msgid,
		}
	}

	/// Renders the label.
	pub fn resolve(&self) -> Cow<'_, str> {
		match self {
			Self::Text(text) => Cow::Borrowed(text),
			Self::Deferred { msgid, catalog } => Cow::Owned(catalog.translate(msgid)),
		}
	}

	pub fn is_deferred(&self) -> bool {
		matches!(self, Self::Deferred { .. })
	}
}

impl PartialEq for Label {
	fn eq(&self, other: &Self) -> bool {
		self.source() == other.source()
	}
}

impl Eq for Label {}

impl PartialEq<str> for Label {
	fn eq(&self, other: &str) -> bool {
		self.source() == other
	}
}

impl PartialEq<&str> for Label {
	fn eq(&self, other: &&str) -> bool {
		self.source() == *other
	}
}

impl fmt::Debug for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => fmt::Debug::fmt(text, f),
			Self::Deferred { msgid, .. } => f.debug_tuple("Deferred").field(msgid).finish(),
		}
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.resolve())
	}
}

impl Serialize for Label {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.resolve())
	}
}

impl From<&str> for Label {
	fn from(text: &str) -> Self {
		Self::Text(text.into())
	}
}

impl From<String> for Label {
	fn from(text: String) -> Self {
		Self::Text(text.into_boxed_str())
	}
}
