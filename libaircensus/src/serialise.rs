use std::collections::BTreeMap;

use serde::Serialize;

use emitter::{EmitFinal, EmitIntermediate};
use errors::*;

/// `IntermediateOutputPair` is a struct representing an intermediate key-value pair as outputted
/// from a map or combine operation.
#[derive(Debug, PartialEq, Serialize)]
pub struct IntermediateOutputPair<K: Serialize, V: Serialize> {
    pub key: K,
    pub value: V,
}

/// `IntermediateOutputObject` is a struct comprising the entire output of a map task, partition
/// by partition, ready to be serialised to JSON.
///
/// A `BTreeMap` keeps the partition table in a deterministic order, so two runs over the same
/// input serialise identically.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct IntermediateOutputObject<K: Serialize, V: Serialize> {
    pub partitions: BTreeMap<u64, Vec<IntermediateOutputPair<K, V>>>,
}

/// `FinalOutputObject` is a struct comprising the entire output of a reduce operation, ready to
/// be serialised to JSON.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct FinalOutputObject<V: Serialize> {
    pub values: Vec<V>,
}

/// A struct implementing `EmitIntermediate` which emits into one partition of an
/// `IntermediateOutputObject`.
pub struct IntermediateOutputObjectEmitter<'a, K: 'a, V: 'a>
where
    K: Serialize,
    V: Serialize,
{
    sink: &'a mut IntermediateOutputObject<K, V>,
    partition: u64,
}

impl<'a, K, V> IntermediateOutputObjectEmitter<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    pub fn new(sink: &'a mut IntermediateOutputObject<K, V>, partition: u64) -> Self {
        IntermediateOutputObjectEmitter { sink, partition }
    }
}

impl<'a, K, V> EmitIntermediate<K, V> for IntermediateOutputObjectEmitter<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn emit(&mut self, key: K, value: V) -> Result<()> {
        self.sink
            .partitions
            .entry(self.partition)
            .or_insert_with(Vec::new)
            .push(IntermediateOutputPair { key, value });
        Ok(())
    }
}

/// A struct implementing `EmitFinal` which emits into a `FinalOutputObject`.
pub struct FinalOutputObjectEmitter<'a, V: Serialize + 'a> {
    sink: &'a mut FinalOutputObject<V>,
}

impl<'a, V: Serialize + 'a> FinalOutputObjectEmitter<'a, V> {
    pub fn new(sink: &'a mut FinalOutputObject<V>) -> Self {
        FinalOutputObjectEmitter { sink }
    }
}

impl<'a, V: Serialize + 'a> EmitFinal<V> for FinalOutputObjectEmitter<'a, V> {
    fn emit(&mut self, value: V) -> Result<()> {
        self.sink.values.push(value);
        Ok(())
    }
}
