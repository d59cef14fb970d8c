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

//! # Qing Core Library
//!
//! Qing computes a sentiment lexicon from a corpus of star-rated text
//! reviews: every English word encountered across reviews is assigned the
//! average star rating of the reviews mentioning it, and the 500 words with
//! the highest and 500 with the lowest averages are reported as a paired
//! positive/negative table.
//!
//! ## Module Overview
//!
//! - **record**: `QingReview` and `QingFilteredReview` data structures
//! - **resources**: stopwords, personal names, vocabulary, and the
//!   lemmatizer; external reference material loaded once at startup
//! - **normalize**: per-review tokenization and filtering
//! - **lexicon**: lemma-keyed rating accumulation
//! - **rank**: frequency thresholding, sorting, top/bottom slicing
//! - **pipeline**: orchestration of the single linear pass
//! - **ingest**: JSON/JSONL review corpus reading
//! - **export**: CSV report table and run manifest
//! - **errors**: `QingError` and the crate-wide `Result`
//!
//! ## Feature Flags
//!
//! - `parallel`: per-record normalization and sharded accumulation (Rayon)
//! - `compression`: gzip-compressed review files (flate2)
//! - `full`: everything above (default)
//!
//! ## Quick Start
//!
//! ```rust
//! use qing::{QingLexicalResources, QingPipeline, QingReview};
//!
//! let resources = QingLexicalResources::load_dir(Path::new("resources"))?;
//! let reviews = vec![
//!     QingReview::new(5, "Loved the food, loved the service."),
//!     QingReview::new(1, "Hated everything about this place."),
//! ];
//!
//! let ranking = QingPipeline::new(resources).run(&reviews)?;
//! for entry in &ranking.top {
//!     println!("{} {:.2}", entry.word, entry.weight);
//! }
//! ```
//!
//! ## Architecture
//!
//! Qing is a one-shot batch pipeline:
//! 1. **Ingest**: the corpus is read fully into memory as `QingReview`s
//! 2. **Normalize**: each review becomes a deduplicated, filtered token set
//! 3. **Accumulate**: tokens are lemmatized and folded into the lexicon
//! 4. **Rank**: qualifying lemmas are sorted and split into the extremes
//! 5. **Export**: the paired table is written atomically as CSV
//!
//! Stages 2 and 3 stream record by record; stages 4 and 5 operate on the
//! completed lexicon. Nothing persists between runs.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, QingError>`. A missing lexical
//! resource or an unreadable corpus aborts the run before any output is
//! produced; malformed individual records are skipped and logged up to a
//! configurable cap.

pub mod errors;
pub mod export;
pub mod ingest;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod record;
pub mod resources;

pub use errors::{QingError, Result};
pub use record::{QingFilteredBatch, QingFilteredReview, QingReview, QingReviewBatch};
pub use resources::{QingLemmatizer, QingLexicalResources};

pub use lexicon::{QingAccumulator, QingLemmaStat, QingLexicon};
pub use normalize::QingNormalizer;
pub use pipeline::{ProgressCallback, QingPipeline, QingPipelineConfig, QingProgress};
pub use rank::{QingRankedEntry, QingRanker, QingRankerConfig, QingRanking};

pub use export::{
    QingManifest, QingManifestBuilder, QingReportConfig, QingReportStats, QingReportWriter,
};
pub use ingest::{
    QingCompression, QingDataFormat, QingFormatDetector, QingFormatInfo, QingReaderConfig,
    QingReviewReader,
};
