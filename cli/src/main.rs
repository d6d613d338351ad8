//! unchunk CLI - merge overlapping text chunks into one document

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unchunk::{
    read_fragments, DecodePolicy, MergeOptions, MergePipeline, MergeResult, OverlapSearch,
    SourceOptions, Stage,
};

#[derive(Parser)]
#[command(name = "unchunk")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Merge overlapping PDF/OCR text chunks into one clean document", long_about = None)]
struct Cli {
    /// Fragment files, merged in sorted order unless --keep-order is given
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Overlap window in characters
    #[arg(long, env = "UNCHUNK_MAX_CHECK", default_value_t = unchunk::merge::DEFAULT_MAX_CHECK)]
    max_check: usize,

    /// Wrap paragraphs to this many characters (unbounded if not specified)
    #[arg(long, env = "UNCHUNK_WIDTH")]
    width: Option<usize>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Merge files in the order given
    #[arg(long)]
    keep_order: bool,

    /// Handling of malformed UTF-8
    #[arg(long, value_enum, default_value = "ignore")]
    decode: DecodeMode,

    /// Overlap search algorithm
    #[arg(long, value_enum, default_value = "prefix-function")]
    search: SearchMode,

    /// NFC-normalize fragments before merging
    #[arg(long)]
    normalize: bool,

    /// Read fragments one at a time
    #[arg(long)]
    sequential: bool,

    /// Print merge statistics as JSON to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum DecodeMode {
    /// Drop malformed bytes (default)
    Ignore,
    /// Replace malformed bytes with U+FFFD
    Replace,
    /// Fail on malformed bytes
    Strict,
}

impl From<DecodeMode> for DecodePolicy {
    fn from(mode: DecodeMode) -> Self {
        match mode {
            DecodeMode::Ignore => DecodePolicy::Ignore,
            DecodeMode::Replace => DecodePolicy::Replace,
            DecodeMode::Strict => DecodePolicy::Strict,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SearchMode {
    /// Linear-time prefix-function search (default)
    PrefixFunction,
    /// Try every overlap length from longest to shortest
    Naive,
}

impl From<SearchMode> for OverlapSearch {
    fn from(mode: SearchMode) -> Self {
        match mode {
            SearchMode::PrefixFunction => OverlapSearch::PrefixFunction,
            SearchMode::Naive => OverlapSearch::Naive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source_options = SourceOptions::new()
        .with_decode(cli.decode.into())
        .with_parallel(!cli.sequential);
    let source_options = if cli.keep_order {
        source_options.keep_order()
    } else {
        source_options
    };

    let mut merge_options = MergeOptions::new()
        .with_max_check(cli.max_check)
        .with_search(cli.search.into())
        .with_unicode_normalization(cli.normalize);
    if let Some(width) = cli.width {
        merge_options = merge_options.with_width(width);
    }

    let pipeline = MergePipeline::new(merge_options);
    // Bad options fail before any file is read.
    pipeline.options().validate()?;

    let result = match &cli.output {
        Some(path) => cmd_merge_to_file(&pipeline, &cli.files, &source_options, path)?,
        None => cmd_merge_to_stdout(&pipeline, &cli.files, &source_options)?,
    };

    if cli.stats {
        eprintln!("{}", result.stats_json(true)?);
    }

    Ok(())
}

fn cmd_merge_to_stdout(
    pipeline: &MergePipeline,
    files: &[PathBuf],
    source_options: &SourceOptions,
) -> Result<MergeResult, Box<dyn std::error::Error>> {
    let fragments = read_fragments(files, source_options)?;
    let result = pipeline.process(&fragments)?;

    // Raw bytes, no trailing newline
    result.write_to(io::stdout().lock())?;

    Ok(result)
}

fn cmd_merge_to_file(
    pipeline: &MergePipeline,
    files: &[PathBuf],
    source_options: &SourceOptions,
    output: &Path,
) -> Result<MergeResult, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(Stage::ALL.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message(format!("Reading {} fragments...", files.len()));
    let fragments = read_fragments(files, source_options)?;
    pb.inc(1);

    let result = pipeline.process_with_progress(&fragments, |stage| {
        pb.set_message(stage.to_string());
        pb.inc(1);
    })?;

    result.save(output)?;
    pb.finish_with_message("Done!");

    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} fragments, {} paragraphs",
        "└─".dimmed(),
        result.stats.fragment_count,
        result.stats.paragraph_count
    );

    Ok(result)
}
