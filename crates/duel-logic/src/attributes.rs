//! Per-player attribute vector

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::record::Integral;

/// Number of slots in an attribute vector.
pub const ATTRIBUTE_COUNT: usize = 4;

/// Upper bound for every attribute (the lower bound is 0).
pub const ATTRIBUTE_LIMIT: i64 = 1024;

/// Vitality every player starts a match with.
pub const INITIAL_VITALITY: i64 = 32;

/// Named slots of an [`AttributeVector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Life total. A side is beaten once it reaches 0.
    Vitality = 0,
    Pool1 = 1,
    Pool2 = 2,
    Pool3 = 3,
}

impl Attribute {
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::Vitality,
        Attribute::Pool1,
        Attribute::Pool2,
        Attribute::Pool3,
    ];

    /// Resource pools, i.e. every slot except vitality
    pub const POOLS: [Attribute; 3] = [Attribute::Pool1, Attribute::Pool2, Attribute::Pool3];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Four attribute values, each kept within `[0, ATTRIBUTE_LIMIT]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "[Integral; ATTRIBUTE_COUNT]",
    into = "[i64; ATTRIBUTE_COUNT]"
)]
pub struct AttributeVector([i64; ATTRIBUTE_COUNT]);

impl AttributeVector {
    /// Build a vector from raw values, rejecting anything out of bounds
    pub fn new(values: [i64; ATTRIBUTE_COUNT]) -> Result<Self, RecordError> {
        if let Some(bad) = values.iter().find(|v| !(0..=ATTRIBUTE_LIMIT).contains(*v)) {
            return Err(RecordError::AttributeOutOfRange(*bad));
        }
        Ok(Self(values))
    }

    /// Attributes at the start of a match
    pub fn starting() -> Self {
        Self([INITIAL_VITALITY, 0, 0, 0])
    }

    pub fn get(&self, attribute: Attribute) -> i64 {
        self.0[attribute.index()]
    }

    pub fn values(&self) -> &[i64; ATTRIBUTE_COUNT] {
        &self.0
    }

    /// Add `offset` to one attribute and clamp the result into range.
    pub fn change(&mut self, attribute: Attribute, offset: i64) {
        let slot = &mut self.0[attribute.index()];
        *slot = slot.saturating_add(offset).clamp(0, ATTRIBUTE_LIMIT);
    }

    pub fn vitality(&self) -> i64 {
        self.get(Attribute::Vitality)
    }

    pub fn is_defeated(&self) -> bool {
        self.vitality() <= 0
    }

    /// Sum of the resource pools, used to break draws
    pub fn resource_total(&self) -> i64 {
        Attribute::POOLS.iter().map(|a| self.get(*a)).sum()
    }
}

impl TryFrom<[Integral; ATTRIBUTE_COUNT]> for AttributeVector {
    type Error = RecordError;

    fn try_from(raw: [Integral; ATTRIBUTE_COUNT]) -> Result<Self, Self::Error> {
        Self::new(raw.map(|v| v.0))
    }
}

impl From<AttributeVector> for [i64; ATTRIBUTE_COUNT] {
    fn from(v: AttributeVector) -> Self {
        v.0
    }
}

/// Absolute difference between two attribute values
pub fn distance(x: i64, y: i64) -> u64 {
    x.abs_diff(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starting_attributes() {
        let v = AttributeVector::starting();
        assert_eq!(v.values(), &[32, 0, 0, 0]);
        assert!(!v.is_defeated());
        assert_eq!(v.resource_total(), 0);
    }

    #[test]
    fn test_change_clamps_high_and_low() {
        let mut v = AttributeVector::starting();
        v.change(Attribute::Vitality, 5000);
        assert_eq!(v.vitality(), ATTRIBUTE_LIMIT);

        v.change(Attribute::Pool1, -16);
        assert_eq!(v.get(Attribute::Pool1), 0);

        v.change(Attribute::Vitality, i64::MIN);
        assert_eq!(v.vitality(), 0);
        assert!(v.is_defeated());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            AttributeVector::new([1025, 0, 0, 0]),
            Err(RecordError::AttributeOutOfRange(1025))
        );
        assert_eq!(
            AttributeVector::new([0, 0, -1, 0]),
            Err(RecordError::AttributeOutOfRange(-1))
        );
        assert!(AttributeVector::new([0, 1024, 3, 7]).is_ok());
    }

    #[test]
    fn test_distance_examples() {
        assert_eq!(distance(0, 1024), 1024);
        assert_eq!(distance(300, 288), 12);
        assert_eq!(distance(i64::MIN, i64::MAX), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_change_stays_in_bounds(
            start in 0i64..=ATTRIBUTE_LIMIT,
            offset in any::<i64>(),
            slot in 0usize..ATTRIBUTE_COUNT,
        ) {
            let mut values = [INITIAL_VITALITY, 0, 0, 0];
            values[slot] = start;
            let mut v = AttributeVector::new(values).unwrap();
            v.change(Attribute::ALL[slot], offset);
            for value in v.values() {
                prop_assert!((0..=ATTRIBUTE_LIMIT).contains(value));
            }
        }

        #[test]
        fn prop_distance_symmetric(x in any::<i64>(), y in any::<i64>()) {
            prop_assert_eq!(distance(x, y), distance(y, x));
            prop_assert_eq!(distance(x, x), 0);
        }
    }
}
