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

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::errors::{QingError, Result};
use crate::ingest::format::{QingCompression, QingDataFormat, QingFormatDetector};
use crate::record::{QingReview, QingReviewBatch};

/// Reader configuration.
#[derive(Clone, Debug)]
pub struct QingReaderConfig {
    /// JSON field carrying the star rating.
    pub rating_field: String,
    /// JSON field carrying the review body.
    pub text_field: String,
    /// Skip malformed records instead of aborting on the first one.
    pub skip_errors: bool,
    /// Abort once this many records have been skipped.
    pub max_errors: usize,
}

impl Default for QingReaderConfig {
    fn default() -> Self {
        Self {
            rating_field: "stars".to_string(),
            text_field: "text".to_string(),
            skip_errors: true,
            max_errors: 100,
        }
    }
}

/// Reads a review corpus file into a `QingReviewBatch`.
///
/// An unreadable or unparseable file is fatal. Individual malformed
/// records follow the skip-and-log policy configured on the reader: each
/// skip is logged, and exceeding `max_errors` (or any error with
/// `skip_errors` off) aborts the whole read.
#[derive(Clone, Debug, Default)]
pub struct QingReviewReader {
    config: QingReaderConfig,
    detector: QingFormatDetector,
}

impl QingReviewReader {
    /// Creates a reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with custom configuration.
    pub fn with_config(mut self, config: QingReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads every review from the given path.
    pub fn read_path(&self, path: &Path) -> Result<QingReviewBatch> {
        let info = self.detector.detect_from_path(path);

        let format = match info.format {
            QingDataFormat::Unknown => {
                let content = self.read_to_string(path, info.compression)?;
                let sniffed = self.detector.detect_from_content(content.as_bytes());
                if sniffed == QingDataFormat::Unknown {
                    return Err(QingError::validation(format!(
                        "unrecognized review file format: {}",
                        path.display()
                    )));
                }
                sniffed
            }
            known => known,
        };

        match format {
            QingDataFormat::Json => self.read_json(path, info.compression),
            QingDataFormat::Jsonl => self.read_jsonl(path, info.compression),
            QingDataFormat::Unknown => unreachable!("unknown format resolved above"),
        }
    }

    fn read_json(&self, path: &Path, compression: QingCompression) -> Result<QingReviewBatch> {
        let content = self.read_to_string(path, compression)?;
        let value: Value = serde_json::from_str(&content)?;

        let items = match value {
            Value::Array(items) => items,
            Value::Object(_) => vec![value],
            _ => {
                return Err(QingError::validation(
                    "review JSON must be an array or object",
                ))
            }
        };

        let mut batch = Vec::with_capacity(items.len());
        let mut error_count = 0;
        for (idx, item) in items.iter().enumerate() {
            match self.extract_review(item, idx) {
                Ok(review) => batch.push(review),
                Err(err) => self.handle_record_error(&mut error_count, idx, err)?,
            }
        }

        Ok(batch)
    }

    fn read_jsonl(&self, path: &Path, compression: QingCompression) -> Result<QingReviewBatch> {
        let reader = self.open_reader(path, compression)?;

        let mut batch = Vec::new();
        let mut error_count = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let parsed = serde_json::from_str::<Value>(trimmed)
                .map_err(|e| QingError::validation(format!("record {}: invalid JSON: {}", idx, e)))
                .and_then(|value| self.extract_review(&value, idx));
            match parsed {
                Ok(review) => batch.push(review),
                Err(err) => self.handle_record_error(&mut error_count, idx, err)?,
            }
        }

        Ok(batch)
    }

    /// Pulls `(stars, text)` out of one review object.
    fn extract_review(&self, value: &Value, idx: usize) -> Result<QingReview> {
        let object = value
            .as_object()
            .ok_or_else(|| QingError::validation(format!("record {} is not an object", idx)))?;

        let raw = object
            .get(&self.config.rating_field)
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                QingError::validation(format!(
                    "record {}: missing or non-numeric '{}'",
                    idx, self.config.rating_field
                ))
            })?;

        // Yelp encodes star ratings as floats ("stars": 5.0); only integral
        // values inside 1-5 are valid.
        if raw.fract() != 0.0 || !(1.0..=5.0).contains(&raw) {
            return Err(QingError::validation(format!(
                "record {}: rating {} outside the 1-5 star range",
                idx, raw
            )));
        }

        let text = object
            .get(&self.config.text_field)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                QingError::validation(format!(
                    "record {}: missing or non-string '{}'",
                    idx, self.config.text_field
                ))
            })?;

        Ok(QingReview::new(raw as u8, text))
    }

    fn handle_record_error(
        &self,
        error_count: &mut usize,
        idx: usize,
        err: QingError,
    ) -> Result<()> {
        *error_count += 1;
        if !self.config.skip_errors || *error_count > self.config.max_errors {
            return Err(QingError::validation(format!(
                "too many invalid records ({}): last error at record {}: {}",
                error_count, idx, err
            )));
        }
        log::warn!("skipping invalid record {}: {}", idx, err);
        Ok(())
    }

    fn read_to_string(&self, path: &Path, compression: QingCompression) -> Result<String> {
        let mut reader = self.open_reader(path, compression)?;
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(content)
    }

    fn open_reader(&self, path: &Path, compression: QingCompression) -> Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        match compression {
            QingCompression::None => Ok(Box::new(BufReader::new(file))),
            QingCompression::Gzip => Self::open_gzip(file),
        }
    }

    fn open_gzip(_file: File) -> Result<Box<dyn BufRead>> {
        #[cfg(feature = "compression")]
        {
            return Ok(Box::new(BufReader::new(flate2::read::GzDecoder::new(
                _file,
            ))));
        }
        #[cfg(not(feature = "compression"))]
        {
            Err(QingError::validation(
                "gzip-compressed input requires the 'compression' feature",
            ))
        }
    }
}
