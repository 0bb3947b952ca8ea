//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use namhoa::io::Format;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "namhoa", about = "bilingual classical text structuring tool.")]
/// Holds every command that is callable by the `namhoa` command.
pub enum Namhoa {
    #[structopt(about = "Build a document from book pages")]
    Build(Build),
    #[structopt(about = "List detected sections")]
    Sections(Sections),
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
pub struct Build {
    #[structopt(
        parse(from_os_str),
        help = "page source: a form-feed separated text file, or a folder of .txt pages"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "config",
        short = "c",
        help = "JSON configuration (titles, entity types, book metadata...)"
    )]
    pub config: Option<PathBuf>,
    #[structopt(long = "code", help = "book code, overrides the configuration one")]
    pub code: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "entities",
        short = "e",
        help = "precomputed NER predictions (JSON lines of {text, entities})"
    )]
    pub entities: Option<PathBuf>,
    #[structopt(
        long = "format",
        short = "f",
        default_value = "xml",
        possible_values = &Format::NAMES,
        help = "output format"
    )]
    pub format: Format,
}

#[derive(Debug, StructOpt)]
/// Sections command and parameters.
pub struct Sections {
    #[structopt(parse(from_os_str), help = "page source")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), long = "config", short = "c", help = "JSON configuration")]
    pub config: Option<PathBuf>,
}
