use emitter::EmitIntermediate;
use errors::*;
use intermediate::IntermediateInputKV;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The `Combine` trait defines a function for performing a combine operation.
///
/// A combine runs against the buckets of a single partition of a single map task, before any
/// pair crosses the task boundary. It is purely an optimisation: the final output of a job must
/// be identical whether the combiner runs zero times, once, or repeatedly.
///
/// # Arguments
///
/// * `input`   - A `IntermediateInputKV` containing the partition-local bucket for one key.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait,
///               provided by the combine runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the combine operation are sent out
/// through the `emitter`.
pub trait Combine<V>
where
    V: Default + Serialize + DeserializeOwned,
{
    fn combine<E>(&self, input: IntermediateInputKV<V>, emitter: E) -> Result<()>
    where
        E: EmitIntermediate<String, V>;
}

/// A null implementation for `Combine` as this is an optional component.
/// This should not be used by user code.
pub struct NullCombiner;
impl<V> Combine<V> for NullCombiner
where
    V: Default + Serialize + DeserializeOwned,
{
    fn combine<E>(&self, _input: IntermediateInputKV<V>, _emitter: E) -> Result<()>
    where
        E: EmitIntermediate<String, V>,
    {
        Err("This code should never run".into())
    }
}
