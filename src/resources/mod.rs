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

//! # Lexical Resource Module
//!
//! Fixed reference material the pipeline consults but never modifies: a
//! stopword set, a personal-name set, a valid-vocabulary set, and a
//! lemmatizer. All four are required at startup; any missing resource is a
//! fatal `QingError::Resource` reported once, before a single record is
//! processed. There is no degraded mode: running with partial resources
//! would produce a silently wrong lexicon.
//!
//! ## Resource Directory Layout
//!
//! `QingLexicalResources::load_dir` expects four files:
//!
//! - `stopwords.txt`: one stopword per line
//! - `names.txt`: one personal name per line (matched case-insensitively)
//! - `words.txt`: the valid vocabulary, one word per line
//! - `lemmas.tsv`: irregular-form exceptions, `form<TAB>lemma` per line
//!
//! Lines starting with `#` and blank lines are ignored in all four files.
//! Name and vocabulary entries are lowercased at load time so membership
//! tests line up with the Normalizer's case-folded tokens.

pub mod lemmatizer;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{QingError, Result};

pub use lemmatizer::QingLemmatizer;

/// File names expected inside a resource directory.
const STOPWORDS_FILE: &str = "stopwords.txt";
const NAMES_FILE: &str = "names.txt";
const VOCABULARY_FILE: &str = "words.txt";
const LEMMAS_FILE: &str = "lemmas.tsv";

/// Bundle of the four lexical capabilities the pipeline requires.
#[derive(Clone, Debug)]
pub struct QingLexicalResources {
    stopwords: HashSet<String>,
    names: HashSet<String>,
    vocabulary: HashSet<String>,
    lemmatizer: QingLemmatizer,
}

impl QingLexicalResources {
    /// Loads all four resources from a directory.
    ///
    /// Fails with `QingError::Resource` naming the first missing or
    /// unreadable file. Nothing is partially loaded: either the full bundle
    /// is available or the run aborts.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let stopwords = read_wordlist(&dir.join(STOPWORDS_FILE), "stopwords")?;
        let names = read_wordlist(&dir.join(NAMES_FILE), "names")?;
        let vocabulary = read_wordlist(&dir.join(VOCABULARY_FILE), "vocabulary")?;
        let lemmatizer = QingLemmatizer::load(&dir.join(LEMMAS_FILE))?;

        log::info!(
            "loaded lexical resources: {} stopwords, {} names, {} vocabulary entries, {} lemma exceptions",
            stopwords.len(),
            names.len(),
            vocabulary.len(),
            lemmatizer.exception_count()
        );

        Ok(QingLexicalResources {
            stopwords,
            names,
            vocabulary,
            lemmatizer,
        })
    }

    /// Constructs a resource bundle from in-memory sets.
    ///
    /// Used by tests and by embedders that ship their own word lists. Name
    /// and vocabulary entries are lowercased here as well, so callers do not
    /// have to pre-fold them.
    pub fn from_parts(
        stopwords: HashSet<String>,
        names: HashSet<String>,
        vocabulary: HashSet<String>,
        lemmatizer: QingLemmatizer,
    ) -> Self {
        QingLexicalResources {
            stopwords: lowercase_set(stopwords),
            names: lowercase_set(names),
            vocabulary: lowercase_set(vocabulary),
            lemmatizer,
        }
    }

    /// Membership test against the stopword set.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Case-insensitive membership test against the personal-name set.
    pub fn is_name(&self, token: &str) -> bool {
        self.names.contains(token)
    }

    /// Membership test against the valid vocabulary.
    pub fn in_vocabulary(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    /// Canonical dictionary form of a token.
    ///
    /// Delegates to the lemmatizer, which validates rule-derived candidates
    /// against this bundle's vocabulary.
    pub fn lemma(&self, token: &str) -> String {
        self.lemmatizer.lemmatize(token, &self.vocabulary)
    }

    /// Number of vocabulary entries.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Reads a one-entry-per-line word list, lowercasing every entry.
fn read_wordlist(path: &Path, resource: &str) -> Result<HashSet<String>> {
    let file = File::open(path)
        .map_err(|e| QingError::resource(resource, format!("{}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let mut entries = HashSet::new();
    for line in reader.lines() {
        let line =
            line.map_err(|e| QingError::resource(resource, format!("{}: {}", path.display(), e)))?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        entries.insert(entry.to_lowercase());
    }

    if entries.is_empty() {
        return Err(QingError::resource(
            resource,
            format!("{}: file contains no entries", path.display()),
        ));
    }

    Ok(entries)
}

fn lowercase_set(set: HashSet<String>) -> HashSet<String> {
    set.into_iter().map(|w| w.to_lowercase()).collect()
}
