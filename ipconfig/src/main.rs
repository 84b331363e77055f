mod commands;
mod error;

use structopt::clap::ArgGroup;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct ParseVersionError(String);

impl std::error::Error for ParseVersionError {}

impl std::fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Version must start with a decimal digit: {}", self.0)
    }
}

/// Only the first character counts, so `-p 2` and `-p 2x` both select version 2.
fn parse_version(src: &str) -> std::result::Result<u32, ParseVersionError> {
    src.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| ParseVersionError(src.to_string()))
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ipconfigstore",
    about = "Pack and unpack IP configuration records.",
    usage = "ipconfigstore (-p VERSION | -u) [FLAGS]",
    group = ArgGroup::with_name("mode").required(true)
)]
struct CliOpts {
    #[structopt(
        short,
        long,
        value_name = "VERSION",
        group = "mode",
        parse(try_from_str = parse_version),
        help = "Pack IP configuration read from stdin as the given version"
    )]
    pack: Option<u32>,

    #[structopt(
        short,
        long,
        group = "mode",
        help = "Unpack IP configuration read from stdin"
    )]
    unpack: bool,

    #[structopt(short, long, help = "Show verbose output")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Standard output carries the converted record.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let opts = CliOpts::from_iter(wild::args_os());
    init_logging(opts.verbose);

    let result = match opts.pack {
        Some(version) => commands::pack(version),
        None => commands::unpack(),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "conversion failed");
        eprintln!("{:?}", anyhow::Error::new(e));
        std::process::exit(1);
    }
}
