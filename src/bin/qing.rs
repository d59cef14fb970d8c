//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Qing.
//! The Qing project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Command-line front end for the Qing pipeline. Everything in this file is
//! glue: argument parsing, logging setup, and console summaries. The
//! computation itself lives in the library.

use std::path::PathBuf;

use clap::Parser;

use qing::{
    QingLexicalResources, QingManifestBuilder, QingPipeline, QingPipelineConfig, QingRankerConfig,
    QingReportWriter, QingReviewReader,
};

#[derive(Debug, Parser)]
#[command(name = "qing", version, about = "Sentiment lexicon from star-rated reviews")]
struct Args {
    /// Review corpus (.json or .jsonl, optionally .gz)
    input: PathBuf,

    /// Directory holding stopwords.txt, names.txt, words.txt, lemmas.tsv
    #[arg(long, default_value = "resources")]
    resources: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Minimum times a lemma must appear to qualify
    #[arg(long, default_value_t = 10)]
    min_count: usize,

    /// Length of each of the top/bottom lists
    #[arg(long, default_value_t = 500)]
    list_size: usize,

    /// Also write a <output>.manifest.json run summary
    #[arg(long)]
    manifest: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let resources = QingLexicalResources::load_dir(&args.resources)?;

    let reader = QingReviewReader::new();
    let reviews = reader.read_path(&args.input)?;
    println!("{:<20} {:>10}", "Total items:", reviews.len());

    let total = reviews.len();
    let pipeline = QingPipeline::new(resources)
        .with_config(QingPipelineConfig {
            ranker: QingRankerConfig {
                min_count: args.min_count,
                list_size: args.list_size,
            },
            ..Default::default()
        })
        .with_progress(Box::new(move |p| {
            let percent = if p.total == 0 {
                100.0
            } else {
                p.processed as f64 / p.total as f64 * 100.0
            };
            log::info!("{}: {:>10.2}% ({}/{})", p.stage, percent, p.processed, p.total);
        }));

    let ranking = pipeline.run(&reviews)?;
    println!("{:<20} {:>10}", "Distinct lemmas:", ranking.lemma_count);
    println!("{:<20} {:>10}", "Qualifying lemmas:", ranking.qualifying_count);

    let writer = QingReportWriter::new();
    let stats = writer.write(&ranking, &args.output)?;
    println!(
        "{:<20} {:>10} rows -> {}",
        "Report:",
        stats.rows_written,
        args.output.display()
    );

    if args.manifest {
        let manifest = QingManifestBuilder::new()
            .source_records(total)
            .lemma_counts(ranking.lemma_count, ranking.qualifying_count)
            .list_lengths(ranking.top.len(), ranking.bottom.len())
            .metadata("input", &args.input.display().to_string())
            .build();
        let manifest_path = args.output.with_extension("manifest.json");
        writer.write_manifest(&manifest, &manifest_path)?;
        println!("{:<20} {:>10} -> {}", "Manifest:", "", manifest_path.display());
    }

    Ok(())
}
