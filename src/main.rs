use clap::Parser;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use khmer_script_rs::classifier::ScriptClassifier;
use khmer_script_rs::segmenter::{ClassifiedRun, ScriptSegmenter};
use khmer_script_rs::{ScriptTables, ScriptTag};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file, one record per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (JSONL) - optional, skip to benchmark only
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Limit number of lines to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// JSON file with custom range tables
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Keep only runs with these tags (comma separated: khmer,latin,other)
    #[arg(long, value_delimiter = ',')]
    only: Vec<ScriptTag>,
}

#[derive(Serialize)]
struct Record<'a> {
    id: usize,
    input: &'a str,
    dominant: ScriptTag,
    boundaries: usize,
    runs: &'a [ClassifiedRun],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tables = match &args.tables {
        Some(path) => {
            info!("Loading range tables from {}", path.display());
            ScriptTables::from_json_file(path)?
        }
        None => ScriptTables::default(),
    };
    let segmenter = ScriptSegmenter::new(ScriptClassifier::new(tables));

    if let Some(tag) = args.only.iter().find(|t| !t.is_run_tag()) {
        anyhow::bail!("--only accepts khmer, latin or other, got {tag}");
    }

    info!("Reading source: {}", args.input.display());
    let reader = BufReader::new(File::open(&args.input)?);
    let mut lines: Vec<String> = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(limit) = args.limit {
        lines.truncate(limit);
    }

    info!("Processing {} lines...", lines.len());
    let start = Instant::now();

    let results: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| {
            let segmented = if args.only.is_empty() {
                segmenter.segment(line)
            } else {
                segmenter.filter_by_tags(line, &args.only)
            };
            let record = Record {
                id: i,
                input: line,
                dominant: segmenter.classifier().analyze_dominant(line),
                boundaries: segmenter.count_boundaries(line),
                runs: segmented.runs(),
            };
            serde_json::to_string(&record)
        })
        .collect::<Result<_, _>>()?;

    if let Some(ref output_path) = args.output {
        let mut writer = BufWriter::new(File::create(output_path)?);
        for result in &results {
            writeln!(writer, "{}", result)?;
        }
        writer.flush()?;
        debug!("Wrote {} records", results.len());
    }

    let duration = start.elapsed();
    if let Some(ref output_path) = args.output {
        println!("Done. Saved to {}", output_path.display());
    }
    println!("Time taken: {:.2}s", duration.as_secs_f32());
    println!("Speed: {:.2} lines/sec", lines.len() as f32 / duration.as_secs_f32());

    Ok(())
}
