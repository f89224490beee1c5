use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::{Builder, Env};
use log::error;
use sogou_dict_reader::{FrequencyStats, SogouReader, export};

/// Export a Sogou Pinyin user dictionary (.bin) to frequency-sorted text.
#[derive(Parser, Debug)]
#[command(name = "sogou-export", version, about)]
struct Cli {
    /// Sogou dictionary backup file
    input: PathBuf,
    /// Output text file (defaults to `<input stem>_带词频.txt` next to the input)
    output: Option<PathBuf>,
    /// Omit the pinyin column
    #[arg(long)]
    no_pinyin: bool,
    /// Also write a Rime custom_phrase.txt table
    #[arg(long)]
    rime: Option<PathBuf>,
    /// Weight written for every Rime phrase
    #[arg(long, default_value_t = export::DEFAULT_RIME_WEIGHT)]
    rime_weight: u32,
    /// Number of top entries to print
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn init_logger() {
    // Level from RUST_LOG, info otherwise.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dict".to_string());
    input.with_file_name(format!("{}_带词频.txt", stem))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    println!("Input:  {}", cli.input.display());
    println!("Output: {}", output.display());
    println!("{}", "=".repeat(60));

    let reader = SogouReader::new(&cli.input)?;
    let header = &reader.header;
    println!("Version: {}", header.version);
    println!("Date: {}", header.date);
    println!("Declared size: {} bytes", header.declared_file_size);
    println!("Declared words: {}", reader.word_count());

    let mut entries = reader.entries();
    export::sort_by_frequency(&mut entries);

    let mut writer = BufWriter::new(File::create(&output)?);
    let count = export::write_tsv(&mut writer, &entries, !cli.no_pinyin)?;
    println!("\nExported {} entries to {}", count, output.display());

    if let Some(stats) = FrequencyStats::from_entries(&entries) {
        println!("\nFrequency statistics:");
        println!("  Max: {}", stats.max);
        println!("  Min: {}", stats.min);
        println!("  Mean: {}", stats.mean);

        println!("\nTop {} entries:", cli.top.min(entries.len()));
        for (i, entry) in entries.iter().take(cli.top).enumerate() {
            if entry.has_pinyin() {
                println!("  {}. {}\t{}\t{}", i + 1, entry.word, entry.frequency, entry.pinyin);
            } else {
                println!("  {}. {}\t{}", i + 1, entry.word, entry.frequency);
            }
        }
    }

    if let Some(rime_path) = &cli.rime {
        let mut writer = BufWriter::new(File::create(rime_path)?);
        let summary = export::write_rime(&mut writer, &entries, None, cli.rime_weight)?;
        println!(
            "\nRime table: {} phrases written, {} without pinyin skipped -> {}",
            summary.written,
            summary.skipped,
            rime_path.display()
        );
    }

    Ok(())
}

fn main() {
    init_logger();

    if let Err(e) = run(Cli::parse()) {
        error!("Failed to export dictionary: {}", e);
        std::process::exit(1);
    }
}
