use anyhow::{Context, Result};
use caesar_analysis::{shift, Key};
use clap::{Parser, ValueEnum};


// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short,long, help = "Path to the input file")]
    file: String,

    #[arg(short,long,help = "Key for the cipher (1-26)")]
    key: u8,

    #[arg(short,long,help = "Path to the output file")]
    output: Option<String>,

    #[arg(short,long,value_enum,default_value_t = OperationMode::Encrypt,help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();

    let key = Key::try_from(cli.key)?;
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read the input file {}", cli.file))?;

    let result = match cli.mode {
        OperationMode::Encrypt => shift::encrypt(&content, key),
        OperationMode::Decrypt => shift::decrypt(&content, key),
    };

    match &cli.output {
        Some(output) => std::fs::write(output, result)
            .with_context(|| format!("Failed to write the output file {}", output))?,
        None => println!("{}", result),
    }

    Ok(())
}
