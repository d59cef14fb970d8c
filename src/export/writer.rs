//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Qing.
//! The Qing project belongs to the Dunimd project team.
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

//! # Report Writer Module
//!
//! Writes the ranked word table as CSV: one row per rank position, pairing
//! the i-th most positive word with the i-th most negative one. Weights are
//! rendered with exactly two decimals. Writes are atomic (the table is
//! produced in a temp file beside the target and renamed into place), so a
//! failed run never leaves a partially-written, readable report.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{QingError, Result};
use crate::export::manifest::QingManifest;
use crate::rank::QingRanking;

/// Report table header.
const HEADER: [&str; 5] = ["Positive Word", "Weight", "", "Negative Word", "Weight"];

/// Report writer configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QingReportConfig {
    /// Write to a temp file and rename into place.
    pub atomic_write: bool,
}

impl Default for QingReportConfig {
    fn default() -> Self {
        Self { atomic_write: true }
    }
}

/// Statistics about a completed report write.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QingReportStats {
    /// Data rows written (header excluded).
    pub rows_written: usize,
    /// Bytes of the final report file.
    pub bytes_written: usize,
}

/// CSV writer for the paired positive/negative word table.
#[derive(Clone, Debug, Default)]
pub struct QingReportWriter {
    config: QingReportConfig,
}

impl QingReportWriter {
    /// Creates a writer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with custom configuration.
    pub fn with_config(mut self, config: QingReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Writes the ranking table to `path`.
    pub fn write(&self, ranking: &QingRanking, path: &Path) -> Result<QingReportStats> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let rows_written = if self.config.atomic_write {
            let temp = temp_path(path);
            let rows = self.write_table(ranking, &temp).map_err(|err| {
                // Best effort cleanup; the original error wins.
                let _ = std::fs::remove_file(&temp);
                err
            })?;
            std::fs::rename(&temp, path)?;
            rows
        } else {
            self.write_table(ranking, path)?
        };

        let bytes_written = std::fs::metadata(path).map(|m| m.len() as usize).unwrap_or(0);
        log::info!(
            "wrote report: {} rows, {} bytes, {}",
            rows_written,
            bytes_written,
            path.display()
        );

        Ok(QingReportStats {
            rows_written,
            bytes_written,
        })
    }

    /// Writes the run manifest beside the report, honoring atomicity.
    pub fn write_manifest(&self, manifest: &QingManifest, path: &Path) -> Result<()> {
        let json = manifest.to_json()?;
        if self.config.atomic_write {
            let temp = temp_path(path);
            std::fs::write(&temp, &json)?;
            std::fs::rename(&temp, path)?;
        } else {
            std::fs::write(path, &json)?;
        }
        Ok(())
    }

    fn write_table(&self, ranking: &QingRanking, path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));

        writer.write_record(HEADER)?;

        let rows = ranking.top.len().max(ranking.bottom.len());
        for i in 0..rows {
            let (pos_word, pos_weight) = match ranking.top.get(i) {
                Some(entry) => (entry.word.as_str(), format!("{:.2}", entry.weight)),
                None => ("", String::new()),
            };
            let (neg_word, neg_weight) = match ranking.bottom.get(i) {
                Some(entry) => (entry.word.as_str(), format!("{:.2}", entry.weight)),
                None => ("", String::new()),
            };
            writer.write_record([pos_word, pos_weight.as_str(), "", neg_word, neg_weight.as_str()])?;
        }

        writer
            .flush()
            .map_err(|e| QingError::Csv(format!("flush failed: {}", e)))?;
        Ok(rows)
    }
}

/// Hidden temp path in the same directory, so the rename stays on one
/// filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(".{}.tmp", stem))
}
