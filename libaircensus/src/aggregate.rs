use serde::Serialize;
use serde::de::DeserializeOwned;

use combiner::Combine;
use emitter::{EmitFinal, EmitIntermediate};
use errors::*;
use intermediate::IntermediateInputKV;
use reducer::Reduce;

/// An aggregation operator: an identity element plus an associative, commutative `combine`.
///
/// Expressing the operator once lets `Aggregator` derive both the reduce and the combine stage
/// from it, so a combiner can never be paired with an operator it is not equivalent to.
pub trait Aggregate {
    type Value: Default + Serialize + DeserializeOwned;

    fn identity(&self) -> Self::Value;
    fn combine(&self, acc: Self::Value, value: Self::Value) -> Self::Value;
}

/// Counting: the sum of `u64` values, with identity 0.
pub struct Count;

impl Aggregate for Count {
    type Value = u64;

    fn identity(&self) -> u64 {
        0
    }

    fn combine(&self, acc: u64, value: u64) -> u64 {
        acc + value
    }
}

/// `Aggregator` turns one `Aggregate` operator into both a `Reduce` and a `Combine`
/// implementation, folding a bucket down to a single value either way.
pub struct Aggregator<A: Aggregate> {
    operator: A,
}

impl<A: Aggregate> Aggregator<A> {
    pub fn new(operator: A) -> Self {
        Aggregator { operator }
    }

    fn fold(&self, values: Vec<A::Value>) -> A::Value {
        let mut acc = self.operator.identity();
        for value in values {
            acc = self.operator.combine(acc, value);
        }
        acc
    }
}

impl<A: Aggregate> Reduce for Aggregator<A> {
    type Value = A::Value;

    fn reduce<E>(&self, input: IntermediateInputKV<Self::Value>, mut emitter: E) -> Result<()>
    where
        E: EmitFinal<Self::Value>,
    {
        let IntermediateInputKV { key, values } = input;
        let total = self.fold(values);
        emitter.emit(total).chain_err(
            || format!("Error emitting total for key {}.", key),
        )?;
        Ok(())
    }
}

impl<A: Aggregate> Combine<A::Value> for Aggregator<A> {
    fn combine<E>(&self, input: IntermediateInputKV<A::Value>, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<String, A::Value>,
    {
        let IntermediateInputKV { key, values } = input;
        let partial = self.fold(values);
        emitter.emit(key, partial).chain_err(
            || "Error emitting combined pair.",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emitter::{FinalVecEmitter, IntermediateVecEmitter};

    fn reduce_bucket(values: Vec<u64>) -> u64 {
        let aggregator = Aggregator::new(Count);
        let mut sink: Vec<u64> = Vec::new();
        aggregator
            .reduce(
                IntermediateInputKV::new("bucket".to_owned(), values),
                FinalVecEmitter::new(&mut sink),
            )
            .unwrap();
        assert_eq!(1, sink.len());
        sink[0]
    }

    fn combine_bucket(values: Vec<u64>) -> (String, u64) {
        let aggregator = Aggregator::new(Count);
        let mut sink: Vec<(String, u64)> = Vec::new();
        aggregator
            .combine(
                IntermediateInputKV::new("bucket".to_owned(), values),
                IntermediateVecEmitter::new(&mut sink),
            )
            .unwrap();
        assert_eq!(1, sink.len());
        sink.remove(0)
    }

    #[test]
    fn count_reduces_bucket_to_sum() {
        assert_eq!(4, reduce_bucket(vec![1, 1, 1, 1]));
    }

    #[test]
    fn count_reduces_single_value_bucket() {
        assert_eq!(1, reduce_bucket(vec![1]));
    }

    #[test]
    fn count_reduces_empty_bucket_to_identity() {
        assert_eq!(0, reduce_bucket(vec![]));
    }

    #[test]
    fn combine_keeps_the_bucket_key() {
        let (key, partial) = combine_bucket(vec![1, 1]);

        assert_eq!("bucket", key);
        assert_eq!(2, partial);
    }

    #[test]
    fn tree_reduction_matches_flat_reduction() {
        let flat = reduce_bucket(vec![1, 1, 1, 1, 1]);

        let (_, left) = combine_bucket(vec![1, 1]);
        let (_, right) = combine_bucket(vec![1, 1, 1]);
        let tree = reduce_bucket(vec![left, right]);

        assert_eq!(flat, tree);
    }
}
