use clap::{App, Arg, ArgMatches};

pub fn parse_command_line<'a>() -> ArgMatches<'a> {
    App::new("aircensus")
        .version(crate_version!())
        .author("Aircensus Authors <aircensus@airdata.net>")
        .about("Count airports of each classification within one country")
        .arg(
            Arg::with_name("input")
                .long("input")
                .short("i")
                .help("Input file of airport records, one per line. Repeatable; reads stdin when absent")
                .takes_value(true)
                .multiple(true)
                .required(false),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("Output file. Writes to stdout when absent")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("country")
                .long("country")
                .short("c")
                .help("Country code to count airports for, as it appears in the data (quotes included)")
                .takes_value(true)
                .default_value("\"ES\""),
        )
        .arg(
            Arg::with_name("delimiter")
                .long("delimiter")
                .short("d")
                .help("Field delimiter of the input records")
                .takes_value(true)
                .default_value(","),
        )
        .arg(
            Arg::with_name("type-field")
                .long("type-field")
                .help("0-indexed position of the airport classification field")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::with_name("country-field")
                .long("country-field")
                .help("0-indexed position of the country code field")
                .takes_value(true)
                .default_value("8"),
        )
        .arg(
            Arg::with_name("partitions")
                .long("partitions")
                .help("Number of map output partitions")
                .takes_value(true)
                .default_value("15"),
        )
        .arg(
            Arg::with_name("no-combine")
                .long("no-combine")
                .help("Disable the partition-local combine pass"),
        )
        .arg(
            Arg::with_name("skip-malformed")
                .long("skip-malformed")
                .help("Skip records with too few fields instead of failing the job"),
        )
        .get_matches()
}
