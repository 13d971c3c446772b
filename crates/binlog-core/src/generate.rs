//! Bulk record generation.
//!
//! The shape of generated data is fixed (sequential ids starting at 0) while
//! the text content comes from a pluggable [`ValuePolicy`], so different runs
//! can exercise different value-size distributions. Random policies are
//! seeded so a run can be reproduced.

use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::GenerationError;
use crate::record::Record;

/// Default upper bound (exclusive) for the number in `value_{k}`.
pub const DEFAULT_VALUE_RANGE: u32 = 1000;

/// Largest record count whose ids all fit in a non-negative `i32`.
const MAX_COUNT: usize = i32::MAX as usize + 1;

/// A source of record sequences, injected into the benchmark harness.
pub trait RecordSource {
    /// Produce exactly `count` records.
    fn generate(&mut self, count: usize) -> Result<Vec<Record>, GenerationError>;
}

/// Chooses the text content of each generated record.
pub trait ValuePolicy {
    /// Name for the record with the given id.
    fn name(&mut self, id: i32) -> String {
        format!("name_{id}")
    }

    /// Value for the record with the given id.
    fn value(&mut self, id: i32) -> String;
}

impl<P: ValuePolicy + ?Sized> ValuePolicy for Box<P> {
    fn name(&mut self, id: i32) -> String {
        (**self).name(id)
    }

    fn value(&mut self, id: i32) -> String {
        (**self).value(id)
    }
}

/// `value_{k}` with `k` drawn uniformly from `0..range`.
#[derive(Debug, Clone)]
pub struct RandomValues {
    rng: Pcg64,
    range: u32,
}

impl RandomValues {
    pub fn new(seed: u64, range: u32) -> Result<Self, GenerationError> {
        if range == 0 {
            return Err(GenerationError::InvalidPolicy {
                detail: "value range must be at least 1".into(),
            });
        }
        Ok(Self {
            rng: Pcg64::seed_from_u64(seed),
            range,
        })
    }
}

impl ValuePolicy for RandomValues {
    fn value(&mut self, _id: i32) -> String {
        let k = self.rng.random_range(0..self.range);
        format!("value_{k}")
    }
}

/// Empty values; only names carry content.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyValues;

impl ValuePolicy for EmptyValues {
    fn value(&mut self, _id: i32) -> String {
        String::new()
    }
}

/// Random alphanumeric values of a fixed byte length.
#[derive(Debug, Clone)]
pub struct PaddedValues {
    rng: Pcg64,
    len: usize,
}

impl PaddedValues {
    pub fn new(seed: u64, len: usize) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
            len,
        }
    }
}

impl ValuePolicy for PaddedValues {
    fn value(&mut self, _id: i32) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(self.len)
            .map(char::from)
            .collect()
    }
}

/// Named value policies, as selected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePolicyKind {
    Random,
    Empty,
    Padded,
}

impl ValuePolicyKind {
    /// Parse a policy name.
    pub fn parse(s: &str) -> Result<Self, GenerationError> {
        match s {
            "random" => Ok(ValuePolicyKind::Random),
            "empty" => Ok(ValuePolicyKind::Empty),
            "padded" | "fixed-width" => Ok(ValuePolicyKind::Padded),
            _ => Err(GenerationError::InvalidPolicy {
                detail: format!("unknown policy '{s}' (expected random, empty, padded)"),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValuePolicyKind::Random => "random",
            ValuePolicyKind::Empty => "empty",
            ValuePolicyKind::Padded => "padded",
        }
    }

    /// Build the policy. `value_range` applies to `random`, `value_len` to `padded`.
    pub fn build(
        self,
        seed: u64,
        value_range: u32,
        value_len: usize,
    ) -> Result<Box<dyn ValuePolicy>, GenerationError> {
        Ok(match self {
            ValuePolicyKind::Random => Box::new(RandomValues::new(seed, value_range)?),
            ValuePolicyKind::Empty => Box::new(EmptyValues),
            ValuePolicyKind::Padded => Box::new(PaddedValues::new(seed, value_len)),
        })
    }
}

/// Generates records with sequential ids `0..count`.
pub struct RecordGenerator<P> {
    policy: P,
}

impl<P: ValuePolicy> RecordGenerator<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }
}

impl<P: ValuePolicy> RecordSource for RecordGenerator<P> {
    fn generate(&mut self, count: usize) -> Result<Vec<Record>, GenerationError> {
        if count > MAX_COUNT {
            return Err(GenerationError::CountOutOfRange { count });
        }
        let mut records = Vec::with_capacity(count);
        for id in (0..count).map(|i| i as i32) {
            let name = self.policy.name(id);
            let value = self.policy.value(id);
            records.push(Record::new(id, name, value));
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_and_names() {
        let mut generator = RecordGenerator::new(EmptyValues);
        let records = generator.generate(5).unwrap();
        assert_eq!(records.len(), 5);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id(), i as i32);
            assert_eq!(r.name(), format!("name_{i}"));
            assert_eq!(r.value(), "");
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut generator = RecordGenerator::new(EmptyValues);
        assert!(generator.generate(0).unwrap().is_empty());
    }

    #[test]
    fn random_values_stay_in_range() {
        let policy = RandomValues::new(7, 10).unwrap();
        let mut generator = RecordGenerator::new(policy);
        for r in generator.generate(200).unwrap() {
            let k: u32 = r.value().strip_prefix("value_").unwrap().parse().unwrap();
            assert!(k < 10);
        }
    }

    #[test]
    fn same_seed_same_records() {
        let mut a = RecordGenerator::new(RandomValues::new(42, DEFAULT_VALUE_RANGE).unwrap());
        let mut b = RecordGenerator::new(RandomValues::new(42, DEFAULT_VALUE_RANGE).unwrap());
        assert_eq!(a.generate(50).unwrap(), b.generate(50).unwrap());
    }

    #[test]
    fn zero_range_rejected() {
        let err = RandomValues::new(0, 0).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidPolicy { .. }));
    }

    #[test]
    fn padded_values_have_fixed_length() {
        let mut generator = RecordGenerator::new(PaddedValues::new(1, 32));
        for r in generator.generate(10).unwrap() {
            assert_eq!(r.value().len(), 32);
            assert!(r.value().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn count_out_of_range() {
        let mut generator = RecordGenerator::new(EmptyValues);
        let err = generator.generate(MAX_COUNT + 1).unwrap_err();
        assert_eq!(err, GenerationError::CountOutOfRange { count: MAX_COUNT + 1 });
    }

    #[test]
    fn policy_kind_parse_and_build() {
        assert_eq!(ValuePolicyKind::parse("random").unwrap(), ValuePolicyKind::Random);
        assert_eq!(ValuePolicyKind::parse("empty").unwrap(), ValuePolicyKind::Empty);
        assert_eq!(ValuePolicyKind::parse("padded").unwrap(), ValuePolicyKind::Padded);
        assert!(ValuePolicyKind::parse("gaussian").is_err());

        let policy = ValuePolicyKind::Padded.build(3, DEFAULT_VALUE_RANGE, 4).unwrap();
        let mut generator = RecordGenerator::new(policy);
        let records = generator.generate(2).unwrap();
        assert_eq!(records[1].name(), "name_1");
        assert_eq!(records[1].value().len(), 4);
    }

    #[test]
    fn build_random_rejects_zero_range() {
        assert!(ValuePolicyKind::Random.build(0, 0, 0).is_err());
    }
}
