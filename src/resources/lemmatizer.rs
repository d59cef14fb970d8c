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

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{QingError, Result};

/// Suffix-detachment rules tried in order: (suffix, replacement).
///
/// The first candidate found in the vocabulary wins. Ordering matters:
/// longer and more specific suffixes come before shorter ones so that
/// "ladies" tries "lady" before "ladie"/"ladi".
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ses", "s"),
    ("ied", "y"),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
    ("iest", "y"),
    ("est", "e"),
    ("est", ""),
    ("ier", "y"),
    ("er", "e"),
    ("er", ""),
    ("s", ""),
];

/// Dictionary-form lemmatizer: exception table first, then suffix rules
/// validated against the vocabulary.
///
/// Inflected forms reduce to their canonical entry ("loved", "loving" →
/// "love"; "cats" → "cat") so their ratings combine in the lexicon. A word
/// with no exception entry and no vocabulary-validated rule candidate is
/// returned unchanged.
#[derive(Clone, Debug, Default)]
pub struct QingLemmatizer {
    exceptions: HashMap<String, String>,
}

impl QingLemmatizer {
    /// Creates a lemmatizer with no exception table (rules only).
    pub fn new() -> Self {
        QingLemmatizer {
            exceptions: HashMap::new(),
        }
    }

    /// Loads the irregular-form exception table from a TSV file
    /// (`form<TAB>lemma` per line, `#` comments allowed).
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| QingError::resource("lemmata", format!("{}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);

        let mut exceptions = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|e| QingError::resource("lemmata", format!("{}: {}", path.display(), e)))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut parts = trimmed.splitn(2, '\t');
            let form = parts.next().unwrap_or_default().trim();
            let lemma = parts.next().unwrap_or_default().trim();
            if form.is_empty() || lemma.is_empty() {
                return Err(QingError::resource(
                    "lemmata",
                    format!("{}: malformed entry at line {}", path.display(), idx + 1),
                ));
            }
            exceptions.insert(form.to_lowercase(), lemma.to_lowercase());
        }

        Ok(QingLemmatizer { exceptions })
    }

    /// Builds a lemmatizer from (form, lemma) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let exceptions = pairs
            .into_iter()
            .map(|(form, lemma)| (form.into().to_lowercase(), lemma.into().to_lowercase()))
            .collect();
        QingLemmatizer { exceptions }
    }

    /// Number of irregular-form exceptions.
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Maps a word to its canonical dictionary form.
    ///
    /// Lookup order: exception table, then the suffix rules with each
    /// candidate checked against `vocabulary`. Falls back to the word
    /// itself.
    pub fn lemmatize(&self, word: &str, vocabulary: &HashSet<String>) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{}{}", stem, replacement);
                if vocabulary.contains(&candidate) {
                    return candidate;
                }
            }
        }

        word.to_string()
    }
}
