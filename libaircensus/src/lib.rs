#![recursion_limit = "1024"]

extern crate chrono;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate uuid;

pub mod errors {
    error_chain!{}
}

pub mod aggregate;
pub mod airport;
pub mod combiner;
pub mod emitter;
pub mod intermediate;
pub mod io;
pub mod job;
pub mod mapper;
pub mod record;
pub mod reducer;
pub mod registry;
pub mod serialise;
pub mod shuffle;

pub use aggregate::{Aggregate, Aggregator, Count};
pub use airport::AirportTypeMapper;
pub use combiner::{Combine, NullCombiner};
pub use emitter::{EmitFinal, EmitIntermediate, FinalVecEmitter, IntermediateVecEmitter};
pub use errors::*;
pub use intermediate::IntermediateInputKV;
pub use io::{read_map_input, write_final_output};
pub use job::run_job;
pub use mapper::{Map, MapInputKV};
pub use record::{MalformedRecordPolicy, RecordSchema};
pub use reducer::Reduce;
pub use registry::{UserImplRegistry, UserImplRegistryBuilder};
pub use serialise::{FinalOutputObject, FinalOutputObjectEmitter, IntermediateOutputObject,
                    IntermediateOutputObjectEmitter, IntermediateOutputPair};
pub use shuffle::{group_pairs, HashPartitioner, Partition, PartitionInputKV};

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
