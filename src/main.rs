use clap::Parser;
use cluescan::config::{self, CliOverrides};
use cluescan::core::ClueAnalysis;
use cluescan::render::{OutputFormat, RenderOptions, write_analysis};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cluescan", about = "Find cross-references and enumerations in crossword clues")]
struct Args {
    /// Files with one clue per line (reads stdin when none are given)
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Don't report trailing enumerations
    #[arg(long)]
    no_enumeration: bool,

    /// Config file (defaults to ~/.cluescan/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            format: args.format,
            hide_enumeration: args.no_enumeration,
        },
    );

    // File logger; stdout is reserved for results
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("cluescan starting with {:?} output", resolved.format);

    let options = RenderOptions {
        format: resolved.format,
        show_enumeration: resolved.show_enumeration,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.files.is_empty() {
        scan_lines(io::stdin().lock(), &mut out, options)?;
    } else {
        for path in &args.files {
            scan_file(path, &mut out, options)?;
        }
    }

    out.flush()
}

fn scan_file<W: Write>(path: &Path, out: &mut W, options: RenderOptions) -> io::Result<()> {
    let file = File::open(path).map_err(|e| {
        log::error!("Failed to open {}: {}", path.display(), e);
        io::Error::new(e.kind(), format!("{}: {e}", path.display()))
    })?;
    log::debug!("Scanning {}", path.display());
    scan_lines(BufReader::new(file), out, options)
}

fn scan_lines<R: BufRead, W: Write>(input: R, out: &mut W, options: RenderOptions) -> io::Result<()> {
    let mut count = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let analysis = ClueAnalysis::of(&line);
        write_analysis(out, &analysis, options)?;
        count += 1;
    }
    log::info!("Scanned {} clue(s)", count);
    Ok(())
}
