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

//! # Lexicon Accumulator Module
//!
//! Folds the stream of filtered reviews into the Lexicon: a mapping from
//! lemma to aggregate rating statistics. Each token of each filtered review
//! is lemmatized and upserted into a keyed map, never a linear scan, so
//! the whole pass stays near O(total tokens).
//!
//! ## Invariants
//!
//! After every update of a `QingLemmaStat`:
//!
//! - `count == ratings.len()`
//! - `mean_weight == average(ratings)`, recomputed from the full sequence
//!   rather than tracked incrementally, so the mean can never drift
//!
//! The lexicon grows monotonically during accumulation (entries are added,
//! never removed) and is exclusively owned by the accumulator for the
//! duration of its single pass. Afterwards it is only exposed as an
//! immutable, lemma-ordered snapshot.
//!
//! Per-lemma aggregation is a sum and a count, hence associative and
//! commutative: processing order does not affect the final means, which is
//! what makes the sharded parallel fold valid.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::QingFilteredReview;
use crate::resources::QingLexicalResources;

/// Aggregate rating statistics for one lemma.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QingLemmaStat {
    /// Canonical dictionary form, unique within the lexicon.
    pub lemma: String,

    /// Every star rating observed for this lemma, in observation order.
    pub ratings: Vec<u8>,

    /// Number of reviews that contributed a rating.
    pub count: usize,

    /// Arithmetic mean of `ratings`.
    pub mean_weight: f64,
}

impl QingLemmaStat {
    /// Creates a statistic from its first observation.
    pub fn new(lemma: impl Into<String>, stars: u8) -> Self {
        QingLemmaStat {
            lemma: lemma.into(),
            ratings: vec![stars],
            count: 1,
            mean_weight: f64::from(stars),
        }
    }

    /// Appends one rating and re-establishes the invariants.
    pub fn record(&mut self, stars: u8) {
        self.ratings.push(stars);
        self.recompute();
    }

    /// Folds another statistic for the same lemma into this one.
    fn absorb(&mut self, other: QingLemmaStat) {
        debug_assert_eq!(self.lemma, other.lemma);
        self.ratings.extend(other.ratings);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.count = self.ratings.len();
        let sum: u64 = self.ratings.iter().map(|&r| u64::from(r)).sum();
        self.mean_weight = sum as f64 / self.count as f64;
    }
}

/// The lexicon: lemma-keyed rating statistics for an entire run.
#[derive(Clone, Debug, Default)]
pub struct QingLexicon {
    entries: HashMap<String, QingLemmaStat>,
}

impl QingLexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        QingLexicon {
            entries: HashMap::new(),
        }
    }

    /// Records one (lemma, rating) observation.
    pub fn observe(&mut self, lemma: String, stars: u8) {
        match self.entries.entry(lemma) {
            Entry::Occupied(mut occupied) => occupied.get_mut().record(stars),
            Entry::Vacant(vacant) => {
                let lemma = vacant.key().clone();
                vacant.insert(QingLemmaStat::new(lemma, stars));
            }
        }
    }

    /// Merges another lexicon into this one.
    ///
    /// Valid in any merge order because per-lemma aggregation is associative
    /// and commutative.
    pub fn merge(&mut self, other: QingLexicon) {
        for (lemma, stat) in other.entries {
            match self.entries.entry(lemma) {
                Entry::Occupied(mut occupied) => occupied.get_mut().absorb(stat),
                Entry::Vacant(vacant) => {
                    vacant.insert(stat);
                }
            }
        }
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no lemma has been observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the statistic for a lemma.
    pub fn get(&self, lemma: &str) -> Option<&QingLemmaStat> {
        self.entries.get(lemma)
    }

    /// Consumes the lexicon into an immutable, lemma-ordered snapshot.
    ///
    /// Ordering by lemma makes downstream stable sorts deterministic across
    /// runs regardless of hash-map iteration order.
    pub fn into_stats(self) -> Vec<QingLemmaStat> {
        let mut stats: Vec<QingLemmaStat> = self.entries.into_values().collect();
        stats.sort_by(|a, b| a.lemma.cmp(&b.lemma));
        stats
    }
}

/// Single-pass accumulator owning the lexicon while it is mutable.
#[derive(Debug)]
pub struct QingAccumulator<'a> {
    resources: &'a QingLexicalResources,
    lexicon: QingLexicon,
}

impl<'a> QingAccumulator<'a> {
    /// Creates an accumulator over the given resources.
    pub fn new(resources: &'a QingLexicalResources) -> Self {
        QingAccumulator {
            resources,
            lexicon: QingLexicon::new(),
        }
    }

    /// Folds one filtered review into the lexicon.
    pub fn fold(&mut self, review: &QingFilteredReview) {
        for token in &review.tokens {
            let lemma = self.resources.lemma(token);
            self.lexicon.observe(lemma, review.stars);
        }
    }

    /// Folds a whole batch.
    ///
    /// With the `parallel` feature the batch is folded into per-shard
    /// lexicons and merged, which yields the same means as the sequential
    /// pass (ratings may concatenate in a different order; the mean is
    /// order-insensitive).
    #[cfg(feature = "parallel")]
    pub fn fold_all(&mut self, batch: &[QingFilteredReview]) {
        use rayon::prelude::*;

        let resources = self.resources;
        let merged = batch
            .par_iter()
            .fold(QingLexicon::new, |mut shard, review| {
                for token in &review.tokens {
                    shard.observe(resources.lemma(token), review.stars);
                }
                shard
            })
            .reduce(QingLexicon::new, |mut left, right| {
                left.merge(right);
                left
            });
        self.lexicon.merge(merged);
    }

    /// Folds a whole batch sequentially.
    #[cfg(not(feature = "parallel"))]
    pub fn fold_all(&mut self, batch: &[QingFilteredReview]) {
        for review in batch {
            self.fold(review);
        }
    }

    /// Number of distinct lemmas accumulated so far.
    pub fn lemma_count(&self) -> usize {
        self.lexicon.len()
    }

    /// Finishes accumulation, releasing the lexicon.
    pub fn finish(self) -> QingLexicon {
        self.lexicon
    }
}
