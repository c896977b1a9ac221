/// Declares a registry in one expression, evaluating to
/// `Result<Registry, ChoicesError>`.
///
/// ```rust
/// use xeno_choices::choices;
///
/// let status = choices! {
///     Status {
///         CREATED => "Created",
///         PENDING => "Pending",
///         ON_HOLD => "On Hold" as "custom_on_hold" { help_text: "Waiting on the customer" },
///         VALID = [CREATED, ON_HOLD],
///     }
/// }?;
///
/// assert_eq!(status.get_key("custom_on_hold"), Some("ON_HOLD"));
/// assert_eq!(status.subset("VALID").map(|valid| valid.len()), Some(2));
/// # Ok::<(), xeno_choices::ChoicesError>(())
/// ```
///
/// Entry forms:
/// - `KEY => display`: value derived from the key.
/// - `KEY => "display" as literal { attr: expr, .. }`: explicit value and/or
///   extra attributes, both optional. Requires a literal display.
/// - `NAME = [KEY, ..]`: named subset.
///
/// Anything else (tuple values, deferred labels with attributes, nested
/// registries, inheritance) goes through [`RegistryBuilder`](crate::RegistryBuilder).
#[macro_export]
macro_rules! choices {
	($name:ident { $($body:tt)* }) => {{
		let builder = $crate::RegistryBuilder::new(stringify!($name));
		$crate::choices!(@decl builder; $($body)*)
	}};

	(@decl $b:ident; ) => {
		$b.build()
	};

	(@decl $b:ident; $key:ident = [$($member:ident),* $(,)?] $(, $($rest:tt)*)?) => {{
		let members: &[&str] = &[$(stringify!($member)),*];
		let $b = $b.subset(stringify!($key), members.iter().copied());
		$crate::choices!(@decl $b; $($($rest)*)?)
	}};

	(@decl $b:ident;
		$key:ident => $display:literal
		$(as $value:literal)?
		$({ $($attr:ident : $val:expr),* $(,)? })?
		$(, $($rest:tt)*)?
	) => {{
		let $b = $b.choice(
			$crate::Declaration::new(stringify!($key), $display)
				$(.value($value))?
				$($(.extra(stringify!($attr), $val))*)?
		);
		$crate::choices!(@decl $b; $($($rest)*)?)
	}};

	(@decl $b:ident; $key:ident => $display:expr $(, $($rest:tt)*)?) => {{
		let $b = $b.choice($crate::Declaration::new(stringify!($key), $display));
		$crate::choices!(@decl $b; $($($rest)*)?)
	}};
}
