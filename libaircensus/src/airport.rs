use std::sync::atomic::{AtomicUsize, Ordering};

use emitter::EmitIntermediate;
use errors::*;
use mapper::{Map, MapInputKV};
use record::{MalformedRecordPolicy, RecordSchema};

/// `AirportTypeMapper` is the census map operation.
///
/// Each line of the input chunk is one airport record. Records whose country field equals the
/// configured country code emit a `(classification, 1)` pair; all other records emit nothing.
/// The comparison is literal, quoting included: the source data stores country codes with
/// surrounding quotes, so the target for Spain is `"ES"` with the quotes.
pub struct AirportTypeMapper {
    country_code: String,
    schema: RecordSchema,
    policy: MalformedRecordPolicy,
    skipped_records: AtomicUsize,
}

impl AirportTypeMapper {
    pub fn new(country_code: &str, schema: RecordSchema, policy: MalformedRecordPolicy) -> Self {
        AirportTypeMapper {
            country_code: country_code.to_owned(),
            schema,
            policy,
            skipped_records: AtomicUsize::new(0),
        }
    }

    /// Number of records dropped so far under the `Skip` policy.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records.load(Ordering::Relaxed)
    }
}

impl Map for AirportTypeMapper {
    type Key = String;
    type Value = u64;

    fn map<E>(&self, input: MapInputKV, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>,
    {
        for line in input.value.lines() {
            match self.schema.project(line) {
                Ok(fields) => {
                    if fields.country == self.country_code {
                        emitter.emit(fields.airport_type.to_owned(), 1).chain_err(
                            || "Error emitting map key-value pair.",
                        )?;
                    }
                }
                Err(err) => {
                    match self.policy {
                        MalformedRecordPolicy::Fail => {
                            return Err(err).chain_err(
                                || format!("Error mapping record in chunk {}.", input.key),
                            );
                        }
                        MalformedRecordPolicy::Skip => {
                            self.skipped_records.fetch_add(1, Ordering::Relaxed);
                            warn!("Skipping malformed record in chunk {}: {}", input.key, err);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
