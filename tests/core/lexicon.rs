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

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use qing::{
    QingAccumulator, QingFilteredReview, QingLemmatizer, QingLexicalResources, QingLexicon,
    QingNormalizer, QingReview,
};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn resources() -> QingLexicalResources {
    QingLexicalResources::from_parts(
        HashSet::new(),
        HashSet::new(),
        set(&["love", "hate", "food", "service", "place"]),
        QingLemmatizer::new(),
    )
}

fn filtered(stars: u8, tokens: &[&str]) -> QingFilteredReview {
    let tokens: BTreeSet<String> = tokens.iter().map(|t| t.to_string()).collect();
    QingFilteredReview::new(stars, tokens)
}

#[test]
fn mean_weight_is_exact() {
    let resources = resources();
    let mut acc = QingAccumulator::new(&resources);
    for stars in [5, 4, 1, 2, 3] {
        acc.fold(&filtered(stars, &["food"]));
    }
    let lexicon = acc.finish();
    let stat = lexicon.get("food").expect("food accumulated");
    assert_eq!(stat.count, 5);
    assert_eq!(stat.ratings.len(), 5);
    assert!((stat.mean_weight - 3.0).abs() < 1e-12);
}

#[test]
fn count_tracks_ratings_after_every_update() {
    let resources = resources();
    let mut acc = QingAccumulator::new(&resources);
    acc.fold(&filtered(5, &["love"]));
    acc.fold(&filtered(2, &["love"]));
    let lexicon = acc.finish();
    let stat = lexicon.get("love").unwrap();
    assert_eq!(stat.count, stat.ratings.len());
    assert!((stat.mean_weight - 3.5).abs() < 1e-12);
}

#[test]
fn inflected_forms_share_one_lemma() {
    // "loved" and "love" must combine under the dictionary form.
    let resources = resources();
    let mut acc = QingAccumulator::new(&resources);
    acc.fold(&filtered(5, &["loved"]));
    acc.fold(&filtered(3, &["love"]));
    let lexicon = acc.finish();
    let stat = lexicon.get("love").expect("lemma merged");
    assert_eq!(stat.count, 2);
    assert!((stat.mean_weight - 4.0).abs() < 1e-12);
    assert!(lexicon.get("loved").is_none());
}

#[test]
fn round_trip_scenario() {
    // Three synthetic reviews; "love love" counts once for its review.
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let reviews = vec![
        QingReview::new(5, "love love"),
        QingReview::new(5, "love"),
        QingReview::new(1, "hate"),
    ];
    let mut acc = QingAccumulator::new(&resources);
    acc.fold_all(&normalizer.apply(&reviews));
    let lexicon = acc.finish();

    let love = lexicon.get("love").unwrap();
    assert_eq!(love.count, 2);
    assert!((love.mean_weight - 5.0).abs() < 1e-12);

    let hate = lexicon.get("hate").unwrap();
    assert_eq!(hate.count, 1);
    assert!((hate.mean_weight - 1.0).abs() < 1e-12);
}

#[test]
fn merge_combines_per_lemma_statistics() {
    let mut left = QingLexicon::new();
    left.observe("food".to_string(), 5);
    left.observe("place".to_string(), 2);

    let mut right = QingLexicon::new();
    right.observe("food".to_string(), 1);

    left.merge(right);
    assert_eq!(left.len(), 2);
    let food = left.get("food").unwrap();
    assert_eq!(food.count, 2);
    assert!((food.mean_weight - 3.0).abs() < 1e-12);
}

#[test]
fn snapshot_is_lemma_ordered() {
    let mut lexicon = QingLexicon::new();
    for lemma in ["service", "food", "place", "hate", "love"] {
        lexicon.observe(lemma.to_string(), 3);
    }
    let stats = lexicon.into_stats();
    let lemmas: Vec<&str> = stats.iter().map(|s| s.lemma.as_str()).collect();
    assert_eq!(lemmas, ["food", "hate", "love", "place", "service"]);
}

#[test]
fn no_sentinel_entries_exist() {
    let lexicon = QingLexicon::new();
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.into_stats().len(), 0);
}

proptest! {
    // Accumulation is associative and commutative per lemma: any
    // permutation of the input yields identical statistics.
    #[test]
    fn accumulation_is_order_independent(
        pairs in prop::collection::vec((1u8..=5u8, 0usize..5usize), 1..50)
    ) {
        const WORDS: [&str; 5] = ["love", "hate", "food", "service", "place"];
        let resources = resources();

        let reviews: Vec<QingFilteredReview> = pairs
            .iter()
            .map(|(stars, idx)| filtered(*stars, &[WORDS[*idx]]))
            .collect();
        let mut reversed = reviews.clone();
        reversed.reverse();

        let mut forward = QingAccumulator::new(&resources);
        forward.fold_all(&reviews);
        let mut backward = QingAccumulator::new(&resources);
        backward.fold_all(&reversed);

        let lhs = forward.finish().into_stats();
        let rhs = backward.finish().into_stats();
        prop_assert_eq!(lhs.len(), rhs.len());
        for (a, b) in lhs.iter().zip(rhs.iter()) {
            prop_assert_eq!(&a.lemma, &b.lemma);
            prop_assert_eq!(a.count, b.count);
            prop_assert!((a.mean_weight - b.mean_weight).abs() < 1e-9);
        }
    }
}
