use emitter::EmitIntermediate;
use errors::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The `MapInputKV` is a struct for passing input data to a `Map`.
///
/// The key names the input chunk (usually the path of the file it was read from) and the value
/// is the chunk's text, one record per line.
#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MapInputKV {
    pub key: String,
    pub value: String,
}

/// The `Map` trait defines a function for performing a map operation.
///
/// The output types are decided by the implementation of this trait.
///
/// # Arguments
///
/// * `input` - The input data for the map operation.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait, provided by the map runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the map operation are sent out
/// through the `emitter`.
pub trait Map {
    type Key: Default + Serialize;
    type Value: Default + Serialize + DeserializeOwned;

    fn map<E>(&self, input: MapInputKV, emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>;
}
