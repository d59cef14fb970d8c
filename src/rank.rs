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

//! # Ranker Module
//!
//! Turns the completed lexicon snapshot into the two ranked output lists:
//!
//! 1. Discard every lemma seen fewer than `min_count` times; rarely-seen
//!    words carry statistically unreliable means
//! 2. Stable-sort the survivors by mean weight ascending
//! 3. `bottom` = first `list_size` entries (most negative sentiment)
//! 4. `top` = first `list_size` of the reversed order (most positive)
//!
//! Entries with equal mean weight keep the relative order of the ascending
//! pass; since the snapshot arrives lemma-ordered, ties come out
//! alphabetically and the whole ranking is deterministic. Fewer qualifying
//! lemmas than `list_size` simply produce shorter lists.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::lexicon::QingLemmaStat;

/// One (word, weight) row of an output list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QingRankedEntry {
    /// The lemma.
    pub word: String,

    /// Its mean star rating.
    pub weight: f64,
}

impl QingRankedEntry {
    fn from_stat(stat: &QingLemmaStat) -> Self {
        QingRankedEntry {
            word: stat.lemma.clone(),
            weight: stat.mean_weight,
        }
    }
}

/// The two ranked lists plus the counts the report and manifest need.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QingRanking {
    /// Highest-weight entries, descending.
    pub top: Vec<QingRankedEntry>,

    /// Lowest-weight entries, ascending.
    pub bottom: Vec<QingRankedEntry>,

    /// Distinct lemmas in the lexicon before thresholding.
    pub lemma_count: usize,

    /// Lemmas that met the frequency threshold.
    pub qualifying_count: usize,
}

/// Ranker configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QingRankerConfig {
    /// Minimum observation count for a lemma to qualify.
    pub min_count: usize,

    /// Maximum length of each output list.
    pub list_size: usize,
}

impl Default for QingRankerConfig {
    fn default() -> Self {
        Self {
            min_count: 10,
            list_size: 500,
        }
    }
}

/// Ranker over a completed lexicon snapshot.
#[derive(Clone, Debug, Default)]
pub struct QingRanker {
    config: QingRankerConfig,
}

impl QingRanker {
    /// Creates a ranker with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ranker with custom configuration.
    pub fn with_config(mut self, config: QingRankerConfig) -> Self {
        self.config = config;
        self
    }

    /// Produces the ranking from a lemma-ordered snapshot.
    pub fn rank(&self, stats: Vec<QingLemmaStat>) -> QingRanking {
        let lemma_count = stats.len();

        let mut qualifying: Vec<QingLemmaStat> = stats
            .into_iter()
            .filter(|stat| stat.count >= self.config.min_count)
            .collect();
        let qualifying_count = qualifying.len();

        // Stable ascending sort; ties keep the lemma-ordered input order.
        qualifying.sort_by(|a, b| {
            a.mean_weight
                .partial_cmp(&b.mean_weight)
                .unwrap_or(Ordering::Equal)
        });

        let bottom: Vec<QingRankedEntry> = qualifying
            .iter()
            .take(self.config.list_size)
            .map(QingRankedEntry::from_stat)
            .collect();

        let top: Vec<QingRankedEntry> = qualifying
            .iter()
            .rev()
            .take(self.config.list_size)
            .map(QingRankedEntry::from_stat)
            .collect();

        QingRanking {
            top,
            bottom,
            lemma_count,
            qualifying_count,
        }
    }
}
