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

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{QingError, Result};

/// JSON run summary written beside the report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QingManifest {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub source_records: usize,
    pub lemma_count: usize,
    pub qualifying_count: usize,
    pub top_entries: usize,
    pub bottom_entries: usize,
    pub metadata: HashMap<String, String>,
}

impl Default for QingManifest {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            source_records: 0,
            lemma_count: 0,
            qualifying_count: 0,
            top_entries: 0,
            bottom_entries: 0,
            metadata: HashMap::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct QingManifestBuilder {
    manifest: QingManifest,
}

impl QingManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_records(mut self, count: usize) -> Self {
        self.manifest.source_records = count;
        self
    }

    pub fn lemma_counts(mut self, lemma_count: usize, qualifying_count: usize) -> Self {
        self.manifest.lemma_count = lemma_count;
        self.manifest.qualifying_count = qualifying_count;
        self
    }

    pub fn list_lengths(mut self, top: usize, bottom: usize) -> Self {
        self.manifest.top_entries = top;
        self.manifest.bottom_entries = bottom;
        self
    }

    pub fn metadata(mut self, key: &str, value: &str) -> Self {
        self.manifest
            .metadata
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> QingManifest {
        self.manifest
    }
}

impl QingManifest {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| QingError::internal(format!("failed to serialize manifest: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| QingError::validation(format!("invalid manifest JSON: {}", e)))
    }
}
