use std::io::Write;

use anyhow::{Context, Result};
use caesar_analysis::select::validate_tolerance;
use caesar_analysis::{normalize, shift, Engine, ReferenceTable, DEFAULT_TOLERANCE, ENGLISH, GERMAN};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments for the Caesar decipher program.
#[derive(Parser, Debug)]
#[command(name = "caesar_decipher", version, about)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    input: String,

    /// Optional path where the decrypted text is also written
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    /// Reference language for the letter frequencies
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Relative band around the expected MIC that the best key must fall into
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE, value_parser = parse_tolerance)]
    tolerance: f64,
}

/// Languages with a built-in frequency table.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Language {
    English,
    German,
}

impl Language {
    fn table(self) -> &'static ReferenceTable {
        match self {
            Language::English => &ENGLISH,
            Language::German => &GERMAN,
        }
    }
}

/// Parses `--tolerance`, rejecting values that would disable the confidence band.
fn parse_tolerance(value: &str) -> std::result::Result<f64, String> {
    let tolerance: f64 = value.parse().map_err(|e| format!("{}", e))?;
    validate_tolerance(tolerance).map_err(|e| e.to_string())?;
    Ok(tolerance)
}

/// Main entry point for the Caesar decipher.
fn main() -> Result<()> {
    // Log to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read the input file {}", cli.input))?;
    info!(path = %cli.input, bytes = content.len(), "read ciphertext");

    report(&cli, &content, &mut std::io::stdout().lock())
}

/// Writes the per-key diagnostics, the selected key and the plaintext to `out`.
///
/// The 26 diagnostic lines are written before key selection, so they are
/// still shown when no key passes the confidence band.
///
/// # Arguments
///
/// * `cli` - Parsed command-line options.
/// * `content` - The ciphertext read from the input file.
/// * `out` - Destination of the report.
///
/// # Returns
///
/// `Ok(())` once the report (and the optional output file) are written.
fn report(cli: &Cli, content: &str, out: &mut impl Write) -> Result<()> {
    let engine = Engine::new(cli.language.table()).with_tolerance(cli.tolerance)?;
    info!(language = engine.table().name, tolerance = engine.tolerance(), "analysing");

    // Score every key and print the diagnostics before selecting
    let buffer = normalize(content);
    let candidates = engine.scan(&buffer)?;
    for candidate in &candidates {
        writeln!(out, "{}", candidate)?;
    }

    let key = engine.select(&candidates)?;
    writeln!(out, "\nThe key for this cipher is {}\n", key)?;

    let decrypted: String = shift::decrypt(buffer.as_str(), key);
    writeln!(out, "Decrypted Text\n----------------\n")?;
    writeln!(out, "{}", decrypted)?;

    if let Some(output) = &cli.output {
        std::fs::write(output, &decrypted)
            .with_context(|| format!("Failed to write the output file {}", output))?;
        info!(path = %output, "wrote plaintext");
    }

    Ok(())
}
