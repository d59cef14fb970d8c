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

//! # Qing Error Module
//!
//! This module defines the error types and utilities used throughout the
//! Qing pipeline for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Qing is a one-shot batch computation, and its error model reflects that:
//!
//! - **Fatal at startup**: an unreadable or unparseable review source and a
//!   missing lexical resource both abort the entire run with a single
//!   diagnostic; no partial output is produced
//! - **Per-record tolerance**: malformed individual records may be skipped
//!   and logged, bounded by a configurable cap
//! - **No retries**: every failure path surfaces immediately as a
//!   `QingError`; nothing is re-attempted
//!
//! ## Error Categories
//!
//! - **Io**: filesystem errors while reading reviews or writing the report
//! - **Resource**: a lexical resource (stopwords, names, vocabulary,
//!   lemmata) is unavailable at startup
//! - **Validation**: invalid records, parameters, or inputs
//! - **Csv**: report table serialization errors
//! - **Serde**: JSON serialization/deserialization errors
//! - **Pipeline**: failures while orchestrating a pipeline stage
//! - **Internal**: unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Qing.
pub type Result<T> = std::result::Result<T, QingError>;

/// Canonical error enumeration for Qing.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum QingError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// A lexical resource required at startup is missing or unreadable.
    #[error("lexical resource '{resource}' unavailable: {message}")]
    Resource { resource: String, message: String },

    /// Validation errors triggered by invalid records or parameters.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors raised while writing the CSV report.
    #[error("csv error: {0}")]
    Csv(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failures that occur while orchestrating the pipeline.
    #[error("pipeline error at stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for QingError {
    fn from(err: io::Error) -> Self {
        QingError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for QingError {
    fn from(err: serde_json::Error) -> Self {
        QingError::Serde(err.to_string())
    }
}

impl From<csv::Error> for QingError {
    fn from(err: csv::Error) -> Self {
        QingError::Csv(err.to_string())
    }
}

impl QingError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        QingError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct resource errors.
    pub fn resource(resource: impl Into<String>, message: impl Into<String>) -> Self {
        QingError::Resource {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Helper to construct pipeline errors.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        QingError::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        QingError::Internal(message.into())
    }
}
