use errors::*;
use serde::Serialize;

/// The `EmitIntermediate` trait specifies structs which can send intermediate key-value pairs
/// from a map or combine operation to an in-memory data structure.
///
/// Since these in-memory data structures will eventually be serialised to disk, the pairs must
/// implement the `serde::Serialize` trait.
pub trait EmitIntermediate<K: Serialize, V: Serialize> {
    /// Takes ownership of a key-value pair and moves it somewhere else.
    ///
    /// Returns an empty `Result` used for error handling.
    fn emit(&mut self, key: K, value: V) -> Result<()>;
}

/// The `EmitFinal` trait specifies structs which can sink the values emitted by a reduce
/// operation.
pub trait EmitFinal<V: Serialize> {
    fn emit(&mut self, value: V) -> Result<()>;
}

/// A struct implementing `EmitIntermediate` which emits to a `Vec` of pairs.
pub struct IntermediateVecEmitter<'a, K: 'a, V: 'a>
where
    K: Serialize,
    V: Serialize,
{
    sink: &'a mut Vec<(K, V)>,
}

impl<'a, K, V> IntermediateVecEmitter<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    /// Constructs a new `IntermediateVecEmitter` with a mutable reference to a given `Vec`.
    ///
    /// # Arguments
    ///
    /// * `sink` - A mutable reference to the `Vec` to receive the emitted pairs.
    pub fn new(sink: &'a mut Vec<(K, V)>) -> Self {
        IntermediateVecEmitter { sink }
    }
}

impl<'a, K, V> EmitIntermediate<K, V> for IntermediateVecEmitter<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn emit(&mut self, key: K, value: V) -> Result<()> {
        self.sink.push((key, value));
        Ok(())
    }
}

/// A struct implementing `EmitFinal` which emits to a `Vec`.
pub struct FinalVecEmitter<'a, V: 'a>
where
    V: Serialize,
{
    sink: &'a mut Vec<V>,
}

impl<'a, V> FinalVecEmitter<'a, V>
where
    V: Serialize,
{
    pub fn new(sink: &'a mut Vec<V>) -> Self {
        FinalVecEmitter { sink }
    }
}

impl<'a, V> EmitFinal<V> for FinalVecEmitter<'a, V>
where
    V: Serialize,
{
    fn emit(&mut self, value: V) -> Result<()> {
        self.sink.push(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intermediate_vec_emitter_with_string_u64() {
        let mut vec: Vec<(String, u64)> = Vec::new();

        {
            let mut emitter = IntermediateVecEmitter::new(&mut vec);
            emitter.emit("foo".to_owned(), 1).unwrap();
        }

        assert_eq!("foo", vec[0].0);
        assert_eq!(1, vec[0].1);
    }

    #[test]
    fn intermediate_vec_emitter_keeps_duplicate_keys() {
        let mut vec: Vec<(String, u64)> = Vec::new();

        {
            let mut emitter = IntermediateVecEmitter::new(&mut vec);
            emitter.emit("foo".to_owned(), 1).unwrap();
            emitter.emit("foo".to_owned(), 1).unwrap();
        }

        assert_eq!(2, vec.len());
        assert_eq!(vec[0], vec[1]);
    }

    #[test]
    fn final_vec_emitter_appends_values() {
        let mut vec: Vec<u64> = Vec::new();

        {
            let mut emitter = FinalVecEmitter::new(&mut vec);
            emitter.emit(0xDEAD).unwrap();
            emitter.emit(0xBEEF).unwrap();
        }

        assert_eq!(vec![0xDEAD, 0xBEEF], vec);
    }
}
