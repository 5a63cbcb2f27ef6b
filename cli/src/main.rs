extern crate aircensus;
#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

use errors::*;

mod errors {
    error_chain!{
        foreign_links {
            Clap(::clap::Error);
        }
    }
}

mod parser;
mod runner;

fn main() {
    let matches = parser::parse_command_line();

    if let Err(ref e) = run(&matches) {
        eprintln!("Error: {}", e);

        for e in e.iter().skip(1) {
            eprintln!("Caused by: {}", e);
        }

        if let Some(backtrace) = e.backtrace() {
            eprintln!("Backtrace: {:?}", backtrace);
        }

        ::std::process::exit(1);
    }

    ::std::process::exit(0);
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    env_logger::init().chain_err(|| "Failed to initialise logging.")?;
    runner::run(matches)
}
