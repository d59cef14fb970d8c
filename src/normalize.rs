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

//! # Review Normalizer Module
//!
//! Converts a raw `QingReview` into a `QingFilteredReview`. The steps run in
//! a fixed order; the order matters for correctness, not performance:
//!
//! 1. Lower-case the text
//! 2. Tokenize into words (Unicode word segmentation, UAX #29)
//! 3. Deduplicate into a set, so a word mentioned twice in one review
//!    counts once toward that review's weighing
//! 4. Remove stopwords
//! 5. Remove known personal names
//! 6. Intersect with the valid vocabulary
//!
//! Normalization is a pure function of the review and the lexical
//! resources: no side effects, and normalizing the same text twice yields
//! the identical token set.

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::record::{QingFilteredBatch, QingFilteredReview, QingReview};
use crate::resources::QingLexicalResources;

/// Per-record normalizer borrowing the run's lexical resources.
#[derive(Clone, Copy, Debug)]
pub struct QingNormalizer<'a> {
    resources: &'a QingLexicalResources,
}

impl<'a> QingNormalizer<'a> {
    /// Creates a normalizer over the given resources.
    pub fn new(resources: &'a QingLexicalResources) -> Self {
        QingNormalizer { resources }
    }

    /// Normalizes one review.
    pub fn normalize(&self, review: &QingReview) -> QingFilteredReview {
        let lowered = review.text.to_lowercase();

        // unicode_words drops punctuation-only segments; collecting into a
        // BTreeSet deduplicates per review and fixes iteration order.
        let tokens: BTreeSet<String> = lowered
            .unicode_words()
            .filter(|token| {
                !self.resources.is_stopword(token)
                    && !self.resources.is_name(token)
                    && self.resources.in_vocabulary(token)
            })
            .map(|token| token.to_string())
            .collect();

        QingFilteredReview::new(review.stars, tokens)
    }

    /// Normalizes a batch, preserving record order.
    ///
    /// With the `parallel` feature the records are processed concurrently;
    /// normalization is embarrassingly parallel per record and the collected
    /// output keeps the input order either way.
    #[cfg(feature = "parallel")]
    pub fn apply(&self, batch: &[QingReview]) -> QingFilteredBatch {
        use rayon::prelude::*;
        batch.par_iter().map(|review| self.normalize(review)).collect()
    }

    /// Normalizes a batch, preserving record order.
    #[cfg(not(feature = "parallel"))]
    pub fn apply(&self, batch: &[QingReview]) -> QingFilteredBatch {
        batch.iter().map(|review| self.normalize(review)).collect()
    }
}
