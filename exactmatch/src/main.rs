use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use exactmatch::{Alphabet, BitParallel, BoyerMoore, Naive, SearchConfig, StringSearch};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Algorithm {
    Bm,
    Bitvector,
    Naive,
}

/// Example:
/// RUST_LOG=info cargo run --release -- -a bm -t data/text.txt -p data/pattern.txt -o output.txt --measure-time
#[derive(Debug, clap::Parser)]
#[command(
    name = "exactmatch",
    about = "Report every position where a pattern occurs in a text"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "bm")]
    algo: Algorithm,

    /// Text file, or - for stdin
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    text: PathBuf,

    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern_string",
        required_unless_present = "pattern_string"
    )]
    pattern_file: Option<PathBuf>,

    #[arg(long = "pattern-string", conflicts_with = "pattern_file")]
    pattern_string: Option<String>,

    /// bytes, ascii, printable, or a decimal range FIRST-LAST
    #[arg(long, default_value = "bytes")]
    alphabet: Alphabet,

    /// Output file, one index per line; stdout if omitted
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Log the time spent preprocessing and scanning
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;
    let text = load_bytes(&cli.text)?;

    log::info!(
        "algorithm={:?} alphabet={} pattern-length={} text-length={}",
        cli.algo,
        cli.alphabet,
        pattern.len(),
        text.len()
    );

    let config = SearchConfig::new(pattern, cli.alphabet);
    let start = Instant::now();
    let matches = match cli.algo {
        Algorithm::Bm => run::<BoyerMoore>(config, &text)?,
        Algorithm::Bitvector => run::<BitParallel>(config, &text)?,
        Algorithm::Naive => run::<Naive>(config, &text)?,
    };
    if cli.measure_time {
        log::info!("execution_time: {}ns", start.elapsed().as_nanos());
    }

    let out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut out = BufWriter::new(out);
    for index in &matches {
        writeln!(out, "{index}")?;
    }
    out.flush()?;

    Ok(())
}

fn run<S>(config: SearchConfig, text: &[u8]) -> Result<Vec<usize>, exactmatch::SearchError>
where
    S: StringSearch<Config = SearchConfig>,
{
    let state = S::build(config)?;
    S::find_all_bytes(&state, text)
}

fn load_pattern(cli: &Cli) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern_string {
        Ok(pat.as_bytes().to_vec())
    } else if let Some(ref path) = cli.pattern_file {
        load_bytes(path)
    } else {
        Err("Either --pattern or --pattern-string must be provided".into())
    }
}

fn load_bytes(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}
