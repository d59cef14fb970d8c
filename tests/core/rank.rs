//! Copyright © 2025 Wenze Wei. All Rights Reserved.
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

use qing::{QingLemmaStat, QingRanker, QingRankerConfig};

fn stat(lemma: &str, ratings: &[u8]) -> QingLemmaStat {
    let mut stat = QingLemmaStat::new(lemma, ratings[0]);
    for &r in &ratings[1..] {
        stat.record(r);
    }
    stat
}

fn repeated(lemma: &str, rating: u8, count: usize) -> QingLemmaStat {
    stat(lemma, &vec![rating; count])
}

#[test]
fn discards_lemmas_below_the_frequency_threshold() {
    let ranker = QingRanker::new(); // min_count 10
    let ranking = ranker.rank(vec![
        repeated("rare", 5, 9),
        repeated("common", 4, 10),
    ]);
    assert_eq!(ranking.lemma_count, 2);
    assert_eq!(ranking.qualifying_count, 1);
    assert!(ranking.top.iter().all(|e| e.word != "rare"));
    assert!(ranking.bottom.iter().all(|e| e.word != "rare"));
    assert_eq!(ranking.top[0].word, "common");
}

#[test]
fn top_is_descending_and_bottom_is_ascending() {
    let ranker = QingRanker::new().with_config(QingRankerConfig {
        min_count: 1,
        list_size: 10,
    });
    let ranking = ranker.rank(vec![
        repeated("middling", 3, 2),
        repeated("awful", 1, 2),
        repeated("superb", 5, 2),
        repeated("fine", 4, 2),
        repeated("poor", 2, 2),
    ]);

    let top: Vec<&str> = ranking.top.iter().map(|e| e.word.as_str()).collect();
    let bottom: Vec<&str> = ranking.bottom.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(top, ["superb", "fine", "middling", "poor", "awful"]);
    assert_eq!(bottom, ["awful", "poor", "middling", "fine", "superb"]);

    assert!(ranking
        .top
        .windows(2)
        .all(|pair| pair[0].weight >= pair[1].weight));
    assert!(ranking
        .bottom
        .windows(2)
        .all(|pair| pair[0].weight <= pair[1].weight));
}

#[test]
fn lists_are_bounded_by_list_size() {
    let ranker = QingRanker::new().with_config(QingRankerConfig {
        min_count: 1,
        list_size: 3,
    });
    let stats: Vec<QingLemmaStat> = (0..20)
        .map(|i| repeated(&format!("word{:02}", i), (i % 5 + 1) as u8, 1))
        .collect();
    let ranking = ranker.rank(stats);
    assert_eq!(ranking.top.len(), 3);
    assert_eq!(ranking.bottom.len(), 3);
    assert_eq!(ranking.qualifying_count, 20);
}

#[test]
fn short_supply_returns_all_qualifying_entries() {
    let ranker = QingRanker::new().with_config(QingRankerConfig {
        min_count: 1,
        list_size: 500,
    });
    let ranking = ranker.rank(vec![repeated("only", 4, 2), repeated("other", 2, 2)]);
    assert_eq!(ranking.top.len(), 2);
    assert_eq!(ranking.bottom.len(), 2);
}

#[test]
fn empty_lexicon_ranks_to_empty_lists() {
    let ranker = QingRanker::new();
    let ranking = ranker.rank(Vec::new());
    assert!(ranking.top.is_empty());
    assert!(ranking.bottom.is_empty());
    assert_eq!(ranking.lemma_count, 0);
    assert_eq!(ranking.qualifying_count, 0);
}

#[test]
fn threshold_is_inclusive() {
    let ranker = QingRanker::new().with_config(QingRankerConfig {
        min_count: 10,
        list_size: 500,
    });
    let ranking = ranker.rank(vec![repeated("exactly", 3, 10)]);
    assert_eq!(ranking.qualifying_count, 1);
    assert_eq!(ranking.top[0].word, "exactly");
}
