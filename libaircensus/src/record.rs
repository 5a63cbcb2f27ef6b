use std::cmp;

use errors::*;

/// `RecordSchema` describes the field layout of one airport record.
///
/// Records are lines of delimited text. The schema names the delimiter and the 0-indexed
/// positions of the two fields the census interprets: the airport classification and the
/// country code. The defaults match the public airport dataset (comma-delimited, type at
/// field 2, country at field 8).
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSchema {
    pub field_delimiter: char,
    pub airport_type_field: usize,
    pub country_field: usize,
}

impl Default for RecordSchema {
    fn default() -> RecordSchema {
        RecordSchema {
            field_delimiter: ',',
            airport_type_field: 2,
            country_field: 8,
        }
    }
}

/// The projection of one raw record: the two fields the census interprets.
///
/// Fields are borrowed verbatim from the record, surrounding quote characters included.
#[derive(Debug, PartialEq)]
pub struct RecordFields<'a> {
    pub airport_type: &'a str,
    pub country: &'a str,
}

impl RecordSchema {
    pub fn new(field_delimiter: char, airport_type_field: usize, country_field: usize) -> Self {
        RecordSchema {
            field_delimiter,
            airport_type_field,
            country_field,
        }
    }

    /// The smallest field count a well-formed record can have.
    pub fn min_fields(&self) -> usize {
        cmp::max(self.airport_type_field, self.country_field) + 1
    }

    /// Splits a raw line into fields and projects out the classification and country fields.
    ///
    /// Returns a malformed-record error when the line has too few fields to contain both.
    pub fn project<'a>(&self, line: &'a str) -> Result<RecordFields<'a>> {
        let fields: Vec<&str> = line.split(self.field_delimiter).collect();
        if fields.len() < self.min_fields() {
            return Err(
                format!(
                    "Malformed record: {} fields, expected at least {}.",
                    fields.len(),
                    self.min_fields()
                ).into(),
            );
        }
        Ok(RecordFields {
            airport_type: fields[self.airport_type_field],
            country: fields[self.country_field],
        })
    }
}

/// `MalformedRecordPolicy` selects what a map task does with a record that cannot be projected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MalformedRecordPolicy {
    /// Fail the map task on the first malformed record, aborting the job.
    Fail,
    /// Drop the record, log a warning and count the drop.
    Skip,
}

impl Default for MalformedRecordPolicy {
    fn default() -> MalformedRecordPolicy {
        MalformedRecordPolicy::Fail
    }
}
