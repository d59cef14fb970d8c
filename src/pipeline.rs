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

//! # Pipeline Module
//!
//! Wires the stages into the single linear run:
//! normalize → accumulate → rank. Records stream once through the
//! Normalizer and Accumulator; the completed lexicon then flows once
//! through the Ranker. No cycles, no re-entrancy, no state across runs.
//!
//! Progress reporting is a cross-cutting, optional observer invoked at
//! record-processing boundaries. It never influences the computed outputs:
//! two runs over the same input produce the same ranking with or without a
//! callback installed.

use crate::errors::{QingError, Result};
use crate::lexicon::QingAccumulator;
use crate::normalize::QingNormalizer;
use crate::rank::{QingRanker, QingRankerConfig, QingRanking};
use crate::record::QingReview;
use crate::resources::QingLexicalResources;

/// Observer invoked at record-processing boundaries.
pub type ProgressCallback = Box<dyn Fn(QingProgress) + Send + Sync>;

/// Snapshot handed to the progress observer.
#[derive(Clone, Debug)]
pub struct QingProgress {
    /// Stage currently running: "normalize" or "weigh".
    pub stage: &'static str,

    /// Records processed so far within the stage.
    pub processed: usize,

    /// Total records in the run.
    pub total: usize,
}

/// Pipeline configuration.
#[derive(Clone, Debug)]
pub struct QingPipelineConfig {
    /// Ranker thresholds and list sizes.
    pub ranker: QingRankerConfig,

    /// Records between progress callbacks.
    pub progress_interval: usize,
}

impl Default for QingPipelineConfig {
    fn default() -> Self {
        Self {
            ranker: QingRankerConfig::default(),
            progress_interval: 10_000,
        }
    }
}

/// The sentiment-lexicon pipeline.
///
/// Owns the lexical resources for the duration of the run and orchestrates
/// the three compute stages over a batch of reviews.
pub struct QingPipeline {
    resources: QingLexicalResources,
    config: QingPipelineConfig,
    progress: Option<ProgressCallback>,
}

impl QingPipeline {
    /// Creates a pipeline over loaded lexical resources.
    pub fn new(resources: QingLexicalResources) -> Self {
        QingPipeline {
            resources,
            config: QingPipelineConfig::default(),
            progress: None,
        }
    }

    /// Replaces the pipeline configuration.
    pub fn with_config(mut self, config: QingPipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs a progress observer.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Rejects configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.config.ranker.list_size == 0 {
            return Err(QingError::pipeline("rank", "list_size must be at least 1"));
        }
        if self.config.ranker.min_count == 0 {
            return Err(QingError::pipeline("rank", "min_count must be at least 1"));
        }
        if self.config.progress_interval == 0 {
            return Err(QingError::pipeline(
                "pipeline",
                "progress_interval must be at least 1",
            ));
        }
        Ok(())
    }

    /// Runs the full pipeline over a batch of reviews.
    ///
    /// Zero input records are not an error: the result is a ranking with
    /// two empty lists.
    pub fn run(&self, reviews: &[QingReview]) -> Result<QingRanking> {
        self.validate()?;

        let total = reviews.len();
        let normalizer = QingNormalizer::new(&self.resources);
        let mut accumulator = QingAccumulator::new(&self.resources);

        // Chunked so the observer fires at record boundaries even when a
        // chunk is processed in parallel internally.
        let interval = self.config.progress_interval;
        let mut filtered_total = 0;
        let mut filtered = Vec::with_capacity(total);
        for (idx, chunk) in reviews.chunks(interval).enumerate() {
            let batch = normalizer.apply(chunk);
            filtered_total += batch.iter().filter(|r| !r.is_empty()).count();
            filtered.extend(batch);
            self.report("normalize", (idx * interval + chunk.len()).min(total), total);
        }
        log::debug!(
            "normalized {} reviews ({} with surviving tokens)",
            total,
            filtered_total
        );

        for (idx, chunk) in filtered.chunks(interval).enumerate() {
            accumulator.fold_all(chunk);
            self.report("weigh", (idx * interval + chunk.len()).min(total), total);
        }
        let lexicon = accumulator.finish();
        log::debug!("accumulated {} distinct lemmas", lexicon.len());

        let ranker = QingRanker::new().with_config(self.config.ranker.clone());
        let ranking = ranker.rank(lexicon.into_stats());
        log::debug!(
            "ranked {} qualifying lemmas into {} top / {} bottom entries",
            ranking.qualifying_count,
            ranking.top.len(),
            ranking.bottom.len()
        );

        Ok(ranking)
    }

    fn report(&self, stage: &'static str, processed: usize, total: usize) {
        if let Some(ref callback) = self.progress {
            callback(QingProgress {
                stage,
                processed,
                total,
            });
        }
    }
}
