use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use huffman_compression::{
    compress_file, decompress_file, encode_and_decode, stats::CompressionStats, FrequencyTable,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Encode { input, output } => {
            let stats = compress_file(&input, &output)?;
            report(stats, &input);
        }
        Command::Decode { input, output } => {
            let size = decompress_file(&input, &output)?;
            println!(
                "The decompression of {size} bytes was written to {}",
                output.display()
            );
        }
        Command::Roundtrip { input, output } => {
            let mut encoded = output.clone().into_os_string();
            encoded.push(".bin");
            let stats = encode_and_decode(&input, &encoded, &output)?;
            report(stats, &input);
        }
        Command::Frequencies { input } => {
            let content = fs::read(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let mut stdout = io::stdout().lock();
            FrequencyTable::new(&content).dump(&mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn report(stats: Option<CompressionStats>, input: &Path) {
    match stats {
        Some(stats) => println!("{stats}"),
        None => println!("The file {} is empty!", input.display()),
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a container
    Encode {
        input: PathBuf,
        #[arg(short, long, default_value = "compressed.bin")]
        output: PathBuf,
    },
    /// Restore the original file from a container
    Decode {
        input: PathBuf,
        #[arg(short, long, default_value = "decompressed.txt")]
        output: PathBuf,
    },
    /// Compress next to OUTPUT, then decompress into OUTPUT
    Roundtrip { input: PathBuf, output: PathBuf },
    /// Print how often every byte occurs
    Frequencies { input: PathBuf },
}
