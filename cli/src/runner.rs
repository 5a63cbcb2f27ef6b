use std::fs::File;
use std::io::{stdin, stdout};

use clap::ArgMatches;

use aircensus::{read_map_input, run_job, write_final_output, Aggregator, AirportTypeMapper,
                Count, HashPartitioner, MalformedRecordPolicy, MapInputKV, RecordSchema,
                UserImplRegistryBuilder};
use errors::*;

pub fn run(matches: &ArgMatches) -> Result<()> {
    let country = matches.value_of("country").chain_err(
        || "Country code must be specified.",
    )?;
    let delimiter_str = matches.value_of("delimiter").chain_err(
        || "Field delimiter must be specified.",
    )?;
    if delimiter_str.chars().count() != 1 {
        return Err("Field delimiter must be a single character.".into());
    }
    let delimiter = delimiter_str.chars().next().chain_err(
        || "Field delimiter must be a single character.",
    )?;
    let type_field = value_t!(matches, "type-field", usize)?;
    let country_field = value_t!(matches, "country-field", usize)?;
    let partitions = value_t!(matches, "partitions", u64)?;
    if partitions == 0 {
        return Err("Partition count must be at least 1.".into());
    }
    let policy = if matches.is_present("skip-malformed") {
        MalformedRecordPolicy::Skip
    } else {
        MalformedRecordPolicy::Fail
    };

    let schema = RecordSchema::new(delimiter, type_field, country_field);
    let mapper = AirportTypeMapper::new(country, schema, policy);
    let reducer = Aggregator::new(Count);
    let partitioner = HashPartitioner::new(partitions);

    let inputs = read_inputs(matches)?;

    let final_pairs = if matches.is_present("no-combine") {
        let registry = UserImplRegistryBuilder::new_no_combiner()
            .mapper(&mapper)
            .reducer(&reducer)
            .partitioner(&partitioner)
            .build()
            .chain_err(|| "Error building UserImplRegistry.")?;
        run_job(&registry, inputs).chain_err(|| "Error running census job.")?
    } else {
        let registry = UserImplRegistryBuilder::new()
            .mapper(&mapper)
            .reducer(&reducer)
            .partitioner(&partitioner)
            .combiner(&reducer)
            .build()
            .chain_err(|| "Error building UserImplRegistry.")?;
        run_job(&registry, inputs).chain_err(|| "Error running census job.")?
    };

    write_output(matches, &final_pairs)?;

    let airport_total: u64 = final_pairs.iter().map(|&(_, total)| total).sum();
    info!(
        "Counted {} airports across {} classifications for country {}.",
        airport_total,
        final_pairs.len(),
        country
    );
    let skipped = mapper.skipped_records();
    if skipped > 0 {
        warn!("Skipped {} malformed records.", skipped);
    }
    Ok(())
}

fn read_inputs(matches: &ArgMatches) -> Result<Vec<MapInputKV>> {
    match matches.values_of("input") {
        Some(paths) => {
            let mut inputs = Vec::new();
            for path in paths {
                let mut file = File::open(path).chain_err(
                    || format!("Error opening input file {}.", path),
                )?;
                let input = read_map_input(path, &mut file).chain_err(
                    || format!("Error reading input file {}.", path),
                )?;
                inputs.push(input);
            }
            Ok(inputs)
        }
        None => {
            let mut source = stdin();
            let input = read_map_input("stdin", &mut source).chain_err(
                || "Error reading records from stdin.",
            )?;
            Ok(vec![input])
        }
    }
}

fn write_output(matches: &ArgMatches, final_pairs: &[(String, u64)]) -> Result<()> {
    match matches.value_of("output") {
        Some(path) => {
            let mut sink = File::create(path).chain_err(
                || format!("Error creating output file {}.", path),
            )?;
            write_final_output(&mut sink, final_pairs).chain_err(
                || "Error writing output pairs.",
            )?;
        }
        None => {
            let mut sink = stdout();
            write_final_output(&mut sink, final_pairs).chain_err(
                || "Error writing output pairs.",
            )?;
        }
    }
    Ok(())
}
