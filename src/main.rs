//! # textflow
//!
//! Streaming corpus utilities: shuffle, sample, or tag-convert
//! line-oriented files (or stdin).
//!
//! ```sh
//! textflow 0.1.0
//! streaming corpus utilities.
//!
//! USAGE:
//!     textflow <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     convert    Convert NER tag sequences between BIO and BIOLU
//!     help       Prints this message or the help of the given subcommand(s)
//!     sample     Keep each line independently with probability p
//!     shuffle    Shuffle lines, optionally with a bounded reservoir
//! ```
//!
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use itertools::Itertools;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use textflow::error::Error;
use textflow::iter::sample;
use textflow::shuffling::{shuffle, shuffle_bounded};
use textflow::tagging::{bio_to_biolu, biolu_to_bio, parse_bio, parse_biolu};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Textflow::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Textflow::Convert(c) => convert(c)?,
        cli::Textflow::Shuffle(s) => run_shuffle(s)?,
        cli::Textflow::Sample(s) => run_sample(s)?,
    };
    Ok(())
}

/// Opens the given file for buffered reading, or stdin if absent.
fn open_reader(src: &Option<PathBuf>) -> Result<Box<dyn BufRead>, Error> {
    Ok(match src {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

/// Lazy non-empty trimmed lines. IO errors stay in the stream so the
/// consumer can propagate them.
fn lines_lazy(
    reader: Box<dyn BufRead>,
) -> impl Iterator<Item = Result<String, io::Error>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .filter(|line| !matches!(line, Ok(l) if l.is_empty()))
}

/// Reads non-empty trimmed lines from the given file, or stdin if absent.
fn read_lines(src: &Option<PathBuf>) -> Result<Vec<String>, Error> {
    let lines: Result<Vec<_>, _> = lines_lazy(open_reader(src)?).collect();
    Ok(lines?)
}

fn convert(c: cli::Convert) -> Result<(), Error> {
    let lines = read_lines(&c.src)?;
    info!("converting {} tags", lines.len());

    let symbols: Vec<String> = match c.direction {
        cli::Direction::BioToBiolu => {
            let tags = parse_bio(lines.iter().map(String::as_str))
                .collect::<Result<Vec<_>, Error>>()?;
            bio_to_biolu(tags)
                .map(|tag| tag.map(|t| t.to_string()))
                .collect::<Result<_, Error>>()?
        }
        cli::Direction::BioluToBio => {
            let tags = parse_biolu(lines.iter().map(String::as_str))
                .collect::<Result<Vec<_>, Error>>()?;
            biolu_to_bio(tags)
                .map(|tag| tag.map(|t| t.to_string()))
                .collect::<Result<_, Error>>()?
        }
    };

    if c.json {
        println!("{}", serde_json::to_string(&symbols)?);
    } else {
        println!("{}", symbols.iter().join("\n"));
    }
    Ok(())
}

fn run_shuffle(s: cli::Shuffle) -> Result<(), Error> {
    match s.capacity {
        // bounded mode streams: only `capacity` lines are in memory at once
        Some(capacity) => {
            info!("shuffling with a reservoir of {}", capacity);
            let lines = lines_lazy(open_reader(&s.src)?);
            for line in shuffle_bounded(lines, capacity)? {
                println!("{}", line?);
            }
        }
        None => {
            let lines = read_lines(&s.src)?;
            info!("shuffling {} lines in memory", lines.len());
            for line in shuffle(lines) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn run_sample(s: cli::Sample) -> Result<(), Error> {
    info!("sampling lines with keep probability {}", s.probability);

    let lines = lines_lazy(open_reader(&s.src)?);
    for line in sample(lines, s.probability)? {
        println!("{}", line?);
    }
    Ok(())
}
