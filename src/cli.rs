//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "textflow", about = "streaming corpus utilities.")]
/// Holds every command that is callable by the `textflow` command.
pub enum Textflow {
    #[structopt(about = "Convert NER tag sequences between BIO and BIOLU")]
    Convert(Convert),
    #[structopt(about = "Shuffle lines, optionally with a bounded reservoir")]
    Shuffle(Shuffle),
    #[structopt(about = "Keep each line independently with probability p")]
    Sample(Sample),
}

#[derive(Debug, StructOpt)]
pub struct Convert {
    #[structopt(
        possible_values = &["bio2biolu", "biolu2bio"],
        help = "conversion direction"
    )]
    pub direction: Direction,
    #[structopt(
        parse(from_os_str),
        help = "tag file, one tag per line (stdin if absent)"
    )]
    pub src: Option<PathBuf>,
    #[structopt(long, help = "emit the converted sequence as a JSON array")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct Shuffle {
    #[structopt(parse(from_os_str), help = "line file (stdin if absent)")]
    pub src: Option<PathBuf>,
    #[structopt(
        short = "n",
        long,
        help = "reservoir capacity; full in-memory shuffle if absent"
    )]
    pub capacity: Option<usize>,
}

#[derive(Debug, StructOpt)]
pub struct Sample {
    #[structopt(parse(from_os_str), help = "line file (stdin if absent)")]
    pub src: Option<PathBuf>,
    #[structopt(short, long, default_value = "0.5", help = "keep probability")]
    pub probability: f64,
}

#[derive(Debug)]
pub enum Direction {
    BioToBiolu,
    BioluToBio,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bio2biolu" => Ok(Self::BioToBiolu),
            "biolu2bio" => Ok(Self::BioluToBio),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}
