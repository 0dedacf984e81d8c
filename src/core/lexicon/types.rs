//! Lexical entry data model.
//!
//! A [`LexicalEntry`] gathers everything contributed for one root word: the
//! inflected forms grouped by tense/mood/voice, the translations, and the root
//! spellings seen so far with how often each was used.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::LexiconError;
use crate::core::grammar::normalize::normalize;

// ============================================================================
// Identifiers
// ============================================================================

/// Store-assigned identifier of a lexical entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PartOfSpeech
// ============================================================================

/// Word class of a lexical entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Participle,
    Adjective,
    Article,
    Pronoun,
    Preposition,
    Adverb,
    Conjunction,
    Particle,
    Numeral,
    Interjection,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 12] = [
        Self::Noun,
        Self::Verb,
        Self::Participle,
        Self::Adjective,
        Self::Article,
        Self::Pronoun,
        Self::Preposition,
        Self::Adverb,
        Self::Conjunction,
        Self::Particle,
        Self::Numeral,
        Self::Interjection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Participle => "participle",
            Self::Adjective => "adjective",
            Self::Article => "article",
            Self::Pronoun => "pronoun",
            Self::Preposition => "preposition",
            Self::Adverb => "adverb",
            Self::Conjunction => "conjunction",
            Self::Particle => "particle",
            Self::Numeral => "numeral",
            Self::Interjection => "interjection",
        }
    }

    /// Word classes whose forms carry tense, mood and voice.
    pub fn is_verbal(self) -> bool {
        matches!(self, Self::Verb | Self::Participle)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|pos| pos.as_str() == wanted)
            .ok_or_else(|| LexiconError::invalid_part_of_speech(s))
    }
}

// ============================================================================
// Entry components
// ============================================================================

/// One inflected form and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub word: String,
    pub rule: String,
}

/// Tense/mood/voice triple; all `None` for non-verbal words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTags {
    pub tense: Option<String>,
    pub mood: Option<String>,
    pub aspect: Option<String>,
}

impl CategoryTags {
    pub fn is_empty(&self) -> bool {
        self.tense.is_none() && self.mood.is_none() && self.aspect.is_none()
    }
}

/// All forms sharing one tense/mood/voice triple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammaticalCategory {
    #[serde(flatten)]
    pub tags: CategoryTags,
    pub forms: Vec<FormEntry>,
}

impl GrammaticalCategory {
    pub fn new(tags: CategoryTags) -> Self {
        Self {
            tags,
            forms: Vec::new(),
        }
    }

    /// Append `form` unless a form with the same word is already present.
    pub fn add_form(&mut self, form: FormEntry) -> bool {
        if self.forms.iter().any(|f| f.word == form.word) {
            return false;
        }
        self.forms.push(form);
        true
    }
}

/// A root spelling and the number of contributions that used it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub search_term: String,
    pub score: u32,
}

// ============================================================================
// LexicalEntry
// ============================================================================

/// Everything known about one root word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalEntry {
    pub root_word: String,
    pub unaccented_word: String,
    pub part_of_speech: PartOfSpeech,
    pub translations: IndexSet<String>,
    pub categories: Vec<GrammaticalCategory>,
    pub variants: Vec<Variant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LexicalEntry {
    /// First contribution for a root: one form, one translation, one variant.
    pub fn new(
        root_word: &str,
        part_of_speech: PartOfSpeech,
        tags: CategoryTags,
        form: FormEntry,
        translation: &str,
    ) -> Self {
        let mut category = GrammaticalCategory::new(tags);
        category.add_form(form);

        let mut translations = IndexSet::new();
        if !translation.trim().is_empty() {
            translations.insert(translation.trim().to_string());
        }

        let now = Utc::now();
        Self {
            root_word: root_word.to_string(),
            unaccented_word: normalize(root_word),
            part_of_speech,
            translations,
            categories: vec![category],
            variants: vec![Variant {
                search_term: root_word.to_string(),
                score: 1,
            }],
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `root` names this entry: its root word, unaccented word or any
    /// variant, verbatim or accent-insensitively.
    pub fn matches_root(&self, root: &str) -> bool {
        let normalized = normalize(root);
        let names = std::iter::once(self.root_word.as_str())
            .chain(std::iter::once(self.unaccented_word.as_str()))
            .chain(self.variants.iter().map(|v| v.search_term.as_str()));
        for name in names {
            if name == root || normalize(name) == normalized {
                return true;
            }
        }
        false
    }

    /// The category for `tags`, created at the end if missing.
    pub fn category_mut(&mut self, tags: &CategoryTags) -> &mut GrammaticalCategory {
        let index = match self.categories.iter().position(|c| &c.tags == tags) {
            Some(index) => index,
            None => {
                self.categories.push(GrammaticalCategory::new(tags.clone()));
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }

    /// Add a translation unless already present.
    pub fn add_translation(&mut self, translation: &str) -> bool {
        let translation = translation.trim();
        if translation.is_empty() {
            return false;
        }
        self.translations.insert(translation.to_string())
    }

    /// Count one more use of `root` as the root spelling; returns its score.
    pub fn bump_variant(&mut self, root: &str) -> u32 {
        match self.variants.iter_mut().find(|v| v.search_term == root) {
            Some(variant) => {
                variant.score += 1;
                variant.score
            }
            None => {
                self.variants.push(Variant {
                    search_term: root.to_string(),
                    score: 1,
                });
                1
            }
        }
    }

    /// Make the highest-scoring variant the root word; the first seen wins
    /// ties.
    pub fn promote_root(&mut self) {
        let mut best: Option<&Variant> = None;
        for variant in &self.variants {
            if best.map_or(true, |b| variant.score > b.score) {
                best = Some(variant);
            }
        }
        if let Some(best) = best {
            if best.search_term != self.root_word {
                self.root_word = best.search_term.clone();
                self.unaccented_word = normalize(&self.root_word);
            }
        }
    }

    /// Number of forms across all categories.
    pub fn form_count(&self) -> usize {
        self.categories.iter().map(|c| c.forms.len()).sum()
    }
}

/// An entry as held by a store, with its optimistic-concurrency version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry {
    pub id: EntryId,
    pub version: u64,
    pub entry: LexicalEntry,
}

/// Result of merging one contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeOutcome {
    Created,
    Updated,
}
