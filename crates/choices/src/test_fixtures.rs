use crate::{Declaration, Registry, RegistryBuilder};

/// Seven choices covering every declaration form, two subsets and a nested registry.
pub(crate) fn sample_builder() -> RegistryBuilder {
	let nested = RegistryBuilder::new("Nested")
		.choice(Declaration::new("VAL10", "Display 10"))
		.choice(Declaration::new("VAL20", "Display 20"))
		.build()
		.expect("nested registry builds");

	RegistryBuilder::new("TestChoices")
		.choice(Declaration::new("VAL1", "Display 1"))
		.choice(Declaration::new("VAL2", "Display 2"))
		.choice(Declaration::new("VAL3", "Display 3").value("value-3"))
		.choice(
			Declaration::new("VAL4", "Display 4")
				.extra("param1", "Param 4.1")
				.extra("strip", "Custom"),
		)
		.choice(
			Declaration::new("VAL5", "Display 5")
				.extra("param1", "Param 5.1")
				.extra("param2", "Param 5.2")
				.extra("strip", "Custom"),
		)
		.choice(
			Declaration::new("VAL6", "Display 6")
				.value((1, 2, 3))
				.extra("param3", "Param 6.1"),
		)
		.choice(Declaration::new("VAL7", "Display 7").value(7))
		.subset("SUBSET1", ["VAL1", "VAL2", "VAL3"])
		.subset("SUBSET2", ["VAL3", "VAL5"])
		.nested("Nested", nested)
}

pub(crate) fn sample() -> Registry {
	sample_builder().build().expect("sample registry builds")
}

/// The order-status registry used throughout the docs.
pub(crate) fn status() -> Registry {
	RegistryBuilder::new("Status")
		.choice(Declaration::new("CREATED", "Created"))
		.choice(Declaration::new("PENDING", "Pending"))
		.choice(Declaration::new("ON_HOLD", "On Hold").value("custom_on_hold"))
		.subset("VALID", ["CREATED", "ON_HOLD"])
		.build()
		.expect("status registry builds")
}
