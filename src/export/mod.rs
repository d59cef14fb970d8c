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

//! # Report Export Module
//!
//! Renders the finished ranking for the analyst. The core hands this
//! module a `QingRanking` and never looks back; all presentation and
//! filesystem concerns live here.
//!
//! ## Module Components
//!
//! - **Writer** (`writer`): paired positive/negative CSV table with atomic
//!   temp-then-rename writes
//! - **Manifest** (`manifest`): optional JSON run summary next to the report

pub mod manifest;
pub mod writer;

pub use manifest::{QingManifest, QingManifestBuilder};
pub use writer::{QingReportConfig, QingReportStats, QingReportWriter};
