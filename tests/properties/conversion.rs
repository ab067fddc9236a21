//! Properties of the runtime conversion table.

use enumdex::{register_domain, ConversionError, ConversionTable, Domain};
use proptest::prelude::*;

register_domain! {
    pub enum Sensor: u8 {
        Temperature,
        Humidity,
        Pressure,
        Light,
        Motion,
    }
}

proptest! {
    /// PROPERTY: an injective assignment round-trips every member through
    /// the reverse lookup.
    #[test]
    fn property_injective_assignment_round_trips(
        codes in proptest::collection::hash_set(any::<u64>(), Sensor::SIZE)
    ) {
        let codes: Vec<u64> = codes.into_iter().collect();
        let table = ConversionTable::<Sensor, u64>::from_fn(|sensor| codes[sensor.index()]);
        for &sensor in Sensor::MEMBERS {
            let code = *table.to_value(sensor).unwrap();
            prop_assert_eq!(table.to_member(&code), Ok(sensor));
        }
    }

    /// PROPERTY: a value outside the assigned set never matches, and the
    /// fallback form returns the fallback for it.
    #[test]
    fn property_unassigned_values_miss(
        codes in proptest::collection::hash_set(0u64..1_000, Sensor::SIZE),
        probe in 1_000u64..,
    ) {
        let codes: Vec<u64> = codes.into_iter().collect();
        let table = ConversionTable::<Sensor, u64>::from_fn(|sensor| codes[sensor.index()]);
        prop_assert_eq!(table.to_member(&probe), Err(ConversionError::NoMatch));
        prop_assert_eq!(
            table.to_member_or(&probe, Sensor::Temperature),
            Sensor::Temperature
        );
    }

    /// PROPERTY: any duplicated assignment poisons the whole reverse
    /// direction, for colliding and non-colliding queries alike.
    #[test]
    fn property_duplicates_poison_every_reverse_lookup(
        codes in proptest::collection::vec(0u64..4, Sensor::SIZE),
        probe in any::<u64>(),
    ) {
        // Five slots drawn from four candidates always collide somewhere.
        let table = ConversionTable::<Sensor, u64>::from_fn(|sensor| codes[sensor.index()]);
        let outcome = table.to_member(&probe);
        let is_ambiguous = matches!(outcome, Err(ConversionError::Ambiguous { .. }));
        prop_assert!(is_ambiguous);
        // The cached failure keeps later queries identical.
        prop_assert_eq!(table.to_member(&codes[0]), outcome);
    }
}
