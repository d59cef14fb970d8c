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

use std::collections::HashSet;

use qing::{QingLemmatizer, QingLexicalResources, QingNormalizer, QingReview};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn resources() -> QingLexicalResources {
    QingLexicalResources::from_parts(
        set(&["the", "was", "a", "and"]),
        set(&["Tyler"]),
        set(&["food", "great", "love", "loved", "hate", "service", "place"]),
        QingLemmatizer::new(),
    )
}

#[test]
fn lowercases_and_deduplicates() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let filtered = normalizer.normalize(&QingReview::new(5, "Great GREAT great food"));
    let tokens: Vec<&str> = filtered.tokens.iter().map(String::as_str).collect();
    assert_eq!(tokens, ["food", "great"]);
    assert_eq!(filtered.stars, 5);
}

#[test]
fn removes_stopwords() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let filtered = normalizer.normalize(&QingReview::new(4, "the food was great"));
    assert!(filtered.tokens.contains("food"));
    assert!(filtered.tokens.contains("great"));
    assert!(!filtered.tokens.contains("the"));
    assert!(!filtered.tokens.contains("was"));
}

#[test]
fn removes_personal_names_case_insensitively() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let filtered = normalizer.normalize(&QingReview::new(5, "TYLER loved the food"));
    assert!(!filtered.tokens.contains("tyler"));
    assert!(filtered.tokens.contains("loved"));
}

#[test]
fn restricts_to_vocabulary() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let filtered = normalizer.normalize(&QingReview::new(3, "qwzx blargh food"));
    let tokens: Vec<&str> = filtered.tokens.iter().map(String::as_str).collect();
    assert_eq!(tokens, ["food"]);
}

#[test]
fn strips_punctuation_tokens() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let filtered = normalizer.normalize(&QingReview::new(5, "food, service!! ... (great)"));
    let tokens: Vec<&str> = filtered.tokens.iter().map(String::as_str).collect();
    assert_eq!(tokens, ["food", "great", "service"]);
}

#[test]
fn normalization_is_idempotent() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let review = QingReview::new(2, "The food AND the service: loved, hated?");
    let first = normalizer.normalize(&review);
    let second = normalizer.normalize(&review);
    assert_eq!(first, second);
}

#[test]
fn empty_text_yields_empty_token_set() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let filtered = normalizer.normalize(&QingReview::new(1, ""));
    assert!(filtered.is_empty());
}

#[test]
fn batch_apply_preserves_order() {
    let resources = resources();
    let normalizer = QingNormalizer::new(&resources);
    let reviews = vec![
        QingReview::new(5, "great food"),
        QingReview::new(1, "hate this place"),
        QingReview::new(3, "service"),
    ];
    let batch = normalizer.apply(&reviews);
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[0].stars, 5);
    assert!(batch[0].tokens.contains("great"));
    assert_eq!(batch[1].stars, 1);
    assert!(batch[1].tokens.contains("hate"));
    assert_eq!(batch[2].stars, 3);
    assert!(batch[2].tokens.contains("service"));
}
