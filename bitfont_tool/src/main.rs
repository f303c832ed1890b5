use anyhow::*;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode, result::Result::Ok};

/// Converts a text glyph bitmap into a packed font blob.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a font file (text format)
    font: PathBuf,
    /// Path to an output file
    #[arg(short = 'o', default_value = "font.out")]
    output: PathBuf,
    /// Print more detailed progress (may be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}
impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let font = bitfont::build_font(&cli.font, &cli.output).with_context(|| {
        format!("failed to build '{}' from '{}'", cli.output.display(), cli.font.display())
    })?;
    font.print_statistics();
    Ok(())
}
fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
