use emitter::EmitFinal;
use errors::*;
use intermediate::IntermediateInputKV;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The `Reduce` trait defines a function for performing a reduce operation.
///
/// The output types are decided by the implementation of this trait.
///
/// # Arguments
///
/// * `input` - A `IntermediateInputKV` containing the complete bucket of values for one key.
/// * `emitter` - A struct implementing the `EmitFinal` trait, provided by the reduce runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the reduce operation are sent out
/// through the `emitter`. The reduce runner requires exactly one emitted value per bucket.
pub trait Reduce {
    type Value: Default + Serialize + DeserializeOwned;

    fn reduce<E>(&self, input: IntermediateInputKV<Self::Value>, emitter: E) -> Result<()>
    where
        E: EmitFinal<Self::Value>;
}
