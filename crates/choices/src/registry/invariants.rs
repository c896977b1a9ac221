use std::collections::BTreeSet;

use proptest::prelude::*;

use super::Registry;
use crate::{Declaration, RegistryBuilder};

/// Distinct identifier keys in arbitrary order.
fn arb_keys() -> impl Strategy<Value = Vec<String>> {
	prop::collection::btree_set("[A-Z][A-Z0-9_]{0,5}", 0..12)
		.prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
		.prop_shuffle()
}

/// Keys plus an ordered selection of them.
fn arb_keys_and_selection() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
	arb_keys().prop_flat_map(|keys| {
		let len = keys.len();
		(Just(keys.clone()), prop::sample::subsequence(keys, 0..=len))
	})
}

fn build(name: &str, keys: &[String]) -> Registry {
	keys.iter()
		.fold(RegistryBuilder::new(name), |builder, key| {
			builder.choice(Declaration::new(key.as_str(), key.as_str()))
		})
		.build()
		.expect("distinct identifier keys always build")
}

fn key_set(registry: &Registry) -> BTreeSet<&str> {
	registry.keys().into_iter().collect()
}

proptest! {
	/// Invariant: keys and values MUST iterate in declaration order, pairwise aligned.
	#[test]
	fn keys_and_values_align(keys in arb_keys()) {
		let registry = build("Props", &keys);

		prop_assert_eq!(registry.len(), keys.len());
		prop_assert_eq!(&registry.keys(), &keys);
		for (key, value) in registry.keys().into_iter().zip(registry.values()) {
			let lowered = key.to_lowercase();
			prop_assert_eq!(value.as_str(), Some(lowered.as_str()));
		}
	}

	/// Invariant: looking a choice up by its value MUST return that same choice.
	#[test]
	fn value_lookup_round_trips(keys in arb_keys()) {
		let registry = build("Props", &keys);

		for choice in registry.choices_iter() {
			prop_assert!(registry.contains(choice.value()));
			prop_assert_eq!(registry.get_key(choice.value()), Some(choice.key()));
			prop_assert_eq!(registry.get(choice).map(|found| found.key()), Some(choice.key()));
		}
	}

	/// Invariant: `extract` and `exclude` over the same keys MUST partition the registry.
	#[test]
	fn extract_and_exclude_partition((keys, selection) in arb_keys_and_selection()) {
		let registry = build("Props", &keys);
		let selected = selection.iter().map(String::as_str);

		let extracted = registry.extract(selected.clone(), None).unwrap();
		let excluded = registry.exclude(selected, None).unwrap();

		prop_assert_eq!(&extracted.keys(), &selection);
		prop_assert_eq!(extracted.len() + excluded.len(), registry.len());
		prop_assert!(key_set(&extracted).is_disjoint(&key_set(&excluded)));

		let expected: Vec<&str> = registry
			.keys()
			.into_iter()
			.filter(|key| !selection.iter().any(|picked| picked == key))
			.collect();
		prop_assert_eq!(excluded.keys(), expected);
	}

	/// Invariant: union MUST list the left keys, then the right keys the left lacks.
	#[test]
	fn union_orders_left_first(left in arb_keys(), right in arb_keys()) {
		let a = build("A", &left);
		let b = build("B", &right);

		let ab = a.union(&b).unwrap();
		let ba = b.union(&a).unwrap();

		let mut expected: Vec<&str> = left.iter().map(String::as_str).collect();
		expected.extend(right.iter().map(String::as_str).filter(|key| !a.has_key(key)));
		prop_assert_eq!(ab.keys(), expected);
		prop_assert_eq!(key_set(&ab), key_set(&ba));
	}

	/// Invariant: intersection and difference MUST split the left operand.
	#[test]
	fn intersection_and_difference_split_left(left in arb_keys(), right in arb_keys()) {
		let a = build("A", &left);
		let b = build("B", &right);

		let common = a.intersection(&b);
		let only_left = a.difference(&b);

		prop_assert_eq!(common.len() + only_left.len(), a.len());
		prop_assert!(common.keys().into_iter().all(|key| b.has_key(key)));
		prop_assert!(only_left.keys().into_iter().all(|key| !b.has_key(key)));

		let symmetric = a.symmetric_difference(&b).unwrap();
		let union = a.union(&b).unwrap();
		prop_assert_eq!(symmetric.len() + common.len(), union.len());
	}

	/// Invariant: a registry combined with itself MUST behave like a set.
	#[test]
	fn self_algebra(keys in arb_keys()) {
		let registry = build("Props", &keys);

		let intersection = registry.intersection(&registry);
		prop_assert_eq!(intersection.keys(), registry.keys());
		let union = registry.union(&registry).unwrap();
		prop_assert_eq!(union.keys(), registry.keys());
		prop_assert!(registry.difference(&registry).is_empty());
		prop_assert!(registry.symmetric_difference(&registry).unwrap().is_empty());
	}
}
