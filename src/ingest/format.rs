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

use std::path::Path;

/// Review corpus layouts the reader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QingDataFormat {
    /// One review object per line.
    Jsonl,
    /// A JSON array of review objects.
    Json,
    /// Could not be determined from the path.
    Unknown,
}

/// Compression wrapping the corpus file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QingCompression {
    None,
    Gzip,
}

/// Detected (format, compression) pair for a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QingFormatInfo {
    pub format: QingDataFormat,
    pub compression: QingCompression,
}

/// Extension- and content-based format detection.
#[derive(Clone, Debug, Default)]
pub struct QingFormatDetector;

impl QingFormatDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detects format and compression from a file path.
    ///
    /// A trailing `.gz` marks gzip and is stripped before the format
    /// extension is examined, so `reviews.json.gz` detects as gzipped JSON.
    pub fn detect_from_path(&self, path: &Path) -> QingFormatInfo {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_lowercase();

        let (stem, compression) = match name.strip_suffix(".gz") {
            Some(stem) => (stem.to_string(), QingCompression::Gzip),
            None => (name, QingCompression::None),
        };

        let format = match stem.rsplit('.').next().unwrap_or("") {
            "jsonl" | "ndjson" => QingDataFormat::Jsonl,
            "json" => QingDataFormat::Json,
            _ => QingDataFormat::Unknown,
        };

        QingFormatInfo {
            format,
            compression,
        }
    }

    /// Sniffs the format from the first bytes of (decompressed) content.
    ///
    /// Used as a fallback when the extension is uninformative.
    pub fn detect_from_content(&self, content: &[u8]) -> QingDataFormat {
        let text = String::from_utf8_lossy(content);
        let trimmed = text.trim_start();

        if trimmed.starts_with('[') {
            return QingDataFormat::Json;
        }
        if trimmed.starts_with('{') {
            // One or more top-level objects reads as line-delimited.
            return QingDataFormat::Jsonl;
        }

        QingDataFormat::Unknown
    }
}
