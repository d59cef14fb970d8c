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

//! # Review Ingestion Module
//!
//! Thin adapter between the review corpus on disk and the pipeline's
//! `QingReview` records. The core never touches files; it consumes the
//! batch this module produces.
//!
//! ## Module Components
//!
//! - **Format Detection** (`format`): JSON vs JSONL, gzip detection
//! - **Reader** (`reader`): record extraction with per-record error policy
//!
//! ## Supported Input
//!
//! - **JSON**: one array of review objects (the Yelp academic dump shape)
//! - **JSONL**: one review object per line
//! - **Gzip**: either of the above compressed (`compression` feature)

pub mod format;
pub mod reader;

pub use format::{QingCompression, QingDataFormat, QingFormatDetector, QingFormatInfo};
pub use reader::{QingReaderConfig, QingReviewReader};
