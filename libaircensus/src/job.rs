use std::collections::HashMap;

use chrono::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use combiner::Combine;
use emitter::IntermediateVecEmitter;
use errors::*;
use intermediate::IntermediateInputKV;
use mapper::{Map, MapInputKV};
use reducer::Reduce;
use registry::UserImplRegistry;
use serialise::{FinalOutputObject, FinalOutputObjectEmitter, IntermediateOutputObject,
                IntermediateOutputObjectEmitter, IntermediateOutputPair};
use shuffle::{group_pairs, Partition, PartitionInputKV};
use super::VERSION;

/// `run_job` executes a census job in-process over a set of map inputs.
///
/// One map task runs per input chunk: the mapper's pairs are partitioned and, when a combiner
/// is registered, pre-summed per partition before leaving the task. The shuffle then merges
/// every task's partitions into per-key buckets and the reducer turns each bucket into one
/// final pair. The first stage error fails the whole job; no partial output is produced.
///
/// Final pairs are sorted by key, so reruns over the same input produce identical output.
pub fn run_job<M, R, P, C>(
    registry: &UserImplRegistry<M, R, P, C>,
    inputs: Vec<MapInputKV>,
) -> Result<Vec<(String, R::Value)>>
where
    M: Map<Key = String>,
    R: Reduce<Value = M::Value>,
    P: Partition<String, M::Value>,
    C: Combine<M::Value>,
{
    let job_id = new_job_id();
    info!(
        "aircensus {} starting job {} with {} map tasks.",
        VERSION.unwrap_or("unknown"),
        job_id,
        inputs.len()
    );

    let mut task_outputs = Vec::new();
    for input in inputs {
        let task_output = run_map_task(registry, input).chain_err(
            || "Error running map task.",
        )?;
        task_outputs.push(task_output);
    }

    let buckets = merge_task_outputs(task_outputs);
    info!("Job {}: shuffle produced {} keys.", job_id, buckets.len());

    let mut final_pairs = Vec::new();
    for (key, values) in buckets {
        let mut output = FinalOutputObject::default();
        registry
            .reducer
            .reduce(
                IntermediateInputKV::new(key.clone(), values),
                FinalOutputObjectEmitter::new(&mut output),
            )
            .chain_err(|| format!("Error running reduce operation for key {}.", key))?;

        match output.values.pop() {
            Some(total) => {
                if !output.values.is_empty() {
                    return Err(
                        format!("Reduce emitted more than one value for key {}.", key).into(),
                    );
                }
                final_pairs.push((key, total));
            }
            None => return Err(format!("Reduce emitted no value for key {}.", key).into()),
        }
    }

    final_pairs.sort_by(|a, b| a.0.cmp(&b.0));
    info!("Job {} complete: {} final pairs.", job_id, final_pairs.len());
    Ok(final_pairs)
}

fn new_job_id() -> String {
    let current_time = Utc::now();
    let id = Uuid::new_v4();
    format!("{}_{}", current_time.format("%+"), id)
}

fn run_map_task<M, R, P, C>(
    registry: &UserImplRegistry<M, R, P, C>,
    input: MapInputKV,
) -> Result<IntermediateOutputObject<String, M::Value>>
where
    M: Map<Key = String>,
    R: Reduce<Value = M::Value>,
    P: Partition<String, M::Value>,
    C: Combine<M::Value>,
{
    let mut pairs: Vec<(String, M::Value)> = Vec::new();
    registry
        .mapper
        .map(input, IntermediateVecEmitter::new(&mut pairs))
        .chain_err(|| "Error running map operation.")?;

    let mut output = IntermediateOutputObject::default();
    for (key, value) in pairs {
        let partition = registry
            .partitioner
            .partition(PartitionInputKV::new(&key, &value))
            .chain_err(|| "Error partitioning map output.")?;
        output
            .partitions
            .entry(partition)
            .or_insert_with(Vec::new)
            .push(IntermediateOutputPair { key, value });
    }

    match registry.combiner {
        Some(combiner) => combine_task_output(combiner, output),
        None => Ok(output),
    }
}

/// Applies the combiner to each partition of one map task's output.
///
/// Buckets holding a single value pass through verbatim.
fn combine_task_output<V, C>(
    combiner: &C,
    output: IntermediateOutputObject<String, V>,
) -> Result<IntermediateOutputObject<String, V>>
where
    V: Default + Serialize + DeserializeOwned,
    C: Combine<V>,
{
    let mut combined = IntermediateOutputObject::default();
    for (partition, pairs) in output.partitions {
        let buckets = group_pairs(pairs.into_iter().map(|pair| (pair.key, pair.value)).collect());
        for (key, mut values) in buckets {
            if values.len() > 1 {
                combiner
                    .combine(
                        IntermediateInputKV::new(key, values),
                        IntermediateOutputObjectEmitter::new(&mut combined, partition),
                    )
                    .chain_err(|| "Error running combine operation.")?;
            } else if let Some(value) = values.pop() {
                combined
                    .partitions
                    .entry(partition)
                    .or_insert_with(Vec::new)
                    .push(IntermediateOutputPair { key, value });
            }
        }
    }
    Ok(combined)
}

/// Merges the partition tables of all map tasks into per-key buckets for the reduce phase.
fn merge_task_outputs<V>(
    task_outputs: Vec<IntermediateOutputObject<String, V>>,
) -> HashMap<String, Vec<V>>
where
    V: Default + Serialize,
{
    let mut all_pairs = Vec::new();
    for task_output in task_outputs {
        for (_, pairs) in task_output.partitions {
            for pair in pairs {
                all_pairs.push((pair.key, pair.value));
            }
        }
    }
    group_pairs(all_pairs)
}
