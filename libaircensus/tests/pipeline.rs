//! Integration tests running census jobs through the public API, from raw record text to the
//! final rendered output lines.

extern crate aircensus;

use std::io::Cursor;

use aircensus::*;

const MAP_OUTPUT_PARTITIONS: u64 = 15;
const SPAIN: &str = "\"ES\"";

fn airport_rows() -> Vec<&'static str> {
    vec![
        "6523,\"00A\",\"heliport\",\"Total Rf Heliport\",40.07,-74.93,11,\"NA\",\"US\",\"US-PA\"",
        "2434,\"LEBL\",\"large_airport\",\"Barcelona Airport\",41.29,2.07,12,\"EU\",\"ES\",\"ES-CT\"",
        "2513,\"LEMD\",\"large_airport\",\"Madrid Barajas Airport\",40.47,-3.56,1998,\"EU\",\"ES\",\"ES-M\"",
        "2510,\"LELL\",\"small_airport\",\"Sabadell Airport\",41.52,2.10,485,\"EU\",\"ES\",\"ES-CT\"",
        "3127,\"KJFK\",\"large_airport\",\"John F Kennedy International Airport\",40.63,-73.77,13,\"NA\",\"US\",\"US-NY\"",
    ]
}

fn one_chunk(rows: &[&str]) -> Vec<MapInputKV> {
    vec![
        MapInputKV {
            key: "airports.csv".to_owned(),
            value: rows.join("\n"),
        },
    ]
}

fn chunk_per_row(rows: &[&str]) -> Vec<MapInputKV> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            MapInputKV {
                key: format!("chunk-{}", i),
                value: (*row).to_owned(),
            }
        })
        .collect()
}

fn run_census_with_mapper(
    mapper: &AirportTypeMapper,
    inputs: Vec<MapInputKV>,
    with_combiner: bool,
) -> Result<Vec<(String, u64)>> {
    let reducer = Aggregator::new(Count);
    let partitioner = HashPartitioner::new(MAP_OUTPUT_PARTITIONS);

    if with_combiner {
        let registry = UserImplRegistryBuilder::new()
            .mapper(mapper)
            .reducer(&reducer)
            .partitioner(&partitioner)
            .combiner(&reducer)
            .build()?;
        run_job(&registry, inputs)
    } else {
        let registry = UserImplRegistryBuilder::new_no_combiner()
            .mapper(mapper)
            .reducer(&reducer)
            .partitioner(&partitioner)
            .build()?;
        run_job(&registry, inputs)
    }
}

fn run_census(inputs: Vec<MapInputKV>, with_combiner: bool) -> Result<Vec<(String, u64)>> {
    let mapper = AirportTypeMapper::new(SPAIN, RecordSchema::default(), MalformedRecordPolicy::Fail);
    run_census_with_mapper(&mapper, inputs, with_combiner)
}

#[test]
fn counts_classifications_for_target_country() {
    let final_pairs = run_census(one_chunk(&airport_rows()), true).unwrap();

    let expected = vec![
        ("\"large_airport\"".to_owned(), 2),
        ("\"small_airport\"".to_owned(), 1),
    ];
    assert_eq!(expected, final_pairs);
}

#[test]
fn no_matching_records_produce_empty_output() {
    let mapper =
        AirportTypeMapper::new("\"FR\"", RecordSchema::default(), MalformedRecordPolicy::Fail);

    let final_pairs =
        run_census_with_mapper(&mapper, one_chunk(&airport_rows()), true).unwrap();

    assert!(final_pairs.is_empty());
}

#[test]
fn single_classification_totals_record_count() {
    let rows = vec![
        "2510,\"LELL\",\"small_airport\",\"Sabadell Airport\",41.52,2.10,485,\"EU\",\"ES\",\"ES-CT\"",
        "2511,\"LEGE\",\"small_airport\",\"Girona Airport\",41.90,2.76,468,\"EU\",\"ES\",\"ES-CT\"",
        "2512,\"LERS\",\"small_airport\",\"Reus Airport\",41.15,1.16,233,\"EU\",\"ES\",\"ES-CT\"",
        "2514,\"LEHC\",\"small_airport\",\"Huesca Airport\",42.08,-0.32,541,\"EU\",\"ES\",\"ES-AR\"",
    ];

    let final_pairs = run_census(one_chunk(&rows), true).unwrap();

    assert_eq!(vec![("\"small_airport\"".to_owned(), 4)], final_pairs);
}

#[test]
fn combiner_enabled_and_disabled_agree() {
    let with = run_census(chunk_per_row(&airport_rows()), true).unwrap();
    let without = run_census(chunk_per_row(&airport_rows()), false).unwrap();

    assert_eq!(with, without);
}

#[test]
fn output_identical_across_input_partitionings() {
    let rows = airport_rows();

    let whole = run_census(one_chunk(&rows), true).unwrap();
    let per_row = run_census(chunk_per_row(&rows), true).unwrap();
    let split = {
        let (head, tail) = rows.split_at(2);
        let mut inputs = one_chunk(head);
        inputs.extend(one_chunk(tail));
        run_census(inputs, true).unwrap()
    };

    assert_eq!(whole, per_row);
    assert_eq!(whole, split);
}

#[test]
fn rerun_produces_identical_output() {
    let first = run_census(one_chunk(&airport_rows()), true).unwrap();
    let second = run_census(one_chunk(&airport_rows()), true).unwrap();

    assert_eq!(first, second);
}

#[test]
fn malformed_record_aborts_job_by_default() {
    let mut rows = airport_rows();
    rows.push("1,2,3");

    let result = run_census(one_chunk(&rows), true);

    assert!(result.is_err());
}

#[test]
fn skip_policy_counts_malformed_records_and_completes() {
    let mut rows = airport_rows();
    rows.push("1,2,3");
    let mapper =
        AirportTypeMapper::new(SPAIN, RecordSchema::default(), MalformedRecordPolicy::Skip);

    let final_pairs = run_census_with_mapper(&mapper, one_chunk(&rows), true).unwrap();

    let expected = vec![
        ("\"large_airport\"".to_owned(), 2),
        ("\"small_airport\"".to_owned(), 1),
    ];
    assert_eq!(expected, final_pairs);
    assert_eq!(1, mapper.skipped_records());
}

#[test]
fn read_and_write_round_trip_through_the_engine() {
    let text = airport_rows().join("\n");
    let mut cursor = Cursor::new(text);
    let input = read_map_input("airports.csv", &mut cursor).unwrap();

    let final_pairs = run_census(vec![input], true).unwrap();

    let mut sink: Vec<u8> = Vec::new();
    write_final_output(&mut sink, &final_pairs).unwrap();

    let expected = "\"large_airport\"\t2\n\"small_airport\"\t1\n";
    assert_eq!(expected, String::from_utf8(sink).unwrap());
}
