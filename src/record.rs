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

//! # Qing Record Module
//!
//! This module provides the core data structures for representing individual
//! review records in the Qing pipeline. `QingReview` is the fundamental unit
//! of data that flows into the pipeline; `QingFilteredReview` is its
//! normalized form between the Normalizer and the Accumulator.
//!
//! ## Design Principles
//!
//! - **Immutability-friendly**: both record types are plain values; the
//!   pipeline never mutates a record after construction
//! - **Deterministic**: the filtered token set is a `BTreeSet`, so iteration
//!   order is stable across runs and platforms
//! - **Serde support**: records serialize for fixtures, debugging, and
//!   interoperability with the JSON review corpus

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single star-rated review as read from the corpus.
///
/// Every input record exposes exactly two things the pipeline cares about:
/// an integer star rating between 1 and 5, and the raw review text. Source
/// format concerns (JSON field names, compression) live in the ingest
/// adapter, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QingReview {
    /// Star rating, 1 (worst) through 5 (best).
    pub stars: u8,

    /// Raw review body.
    pub text: String,
}

impl QingReview {
    /// Constructs a review from a rating and its text.
    pub fn new(stars: u8, text: impl Into<String>) -> Self {
        QingReview {
            stars,
            text: text.into(),
        }
    }
}

/// Convenience alias for working on batches of reviews.
pub type QingReviewBatch = Vec<QingReview>;

/// A review after normalization: the rating plus the deduplicated set of
/// normalized tokens that survived stopword, name, and vocabulary filtering.
///
/// A word mentioned twice in one review appears once in `tokens`; each
/// review therefore contributes its rating at most once per word. This is a
/// deliberate choice to avoid over-weighting repetition within a single
/// review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QingFilteredReview {
    /// Star rating carried over from the source review.
    pub stars: u8,

    /// Case-folded, deduplicated, filtered tokens.
    pub tokens: BTreeSet<String>,
}

impl QingFilteredReview {
    /// Constructs a filtered review from a rating and a token set.
    pub fn new(stars: u8, tokens: BTreeSet<String>) -> Self {
        QingFilteredReview { stars, tokens }
    }

    /// True when no token survived filtering.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Convenience alias for batches of filtered reviews.
pub type QingFilteredBatch = Vec<QingFilteredReview>;
