//! Update-intent matching: negation veto, phrase containment, fuzzy verbs.


use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};
use ventas_core::config::IntentConfig;

use crate::keywords_data::*;
use crate::levenshtein::levenshtein;
use crate::normalize::{normalize, normalize_value};

/// Matcher built from the bundled dictionaries, shared by the free functions.
static DEFAULT_MATCHER: LazyLock<IntentMatcher> = LazyLock::new(IntentMatcher::new);

/// Why a message was, or was not, read as an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Detection {
    /// Nothing left after normalization.
    Empty,
    /// A negation phrase vetoed the message.
    Negated { phrase: String },
    /// An intent phrase appears verbatim.
    Phrase { phrase: String },
    /// A word is within edit distance of a short intent word (0 = exact).
    Fuzzy {
        word: String,
        target: String,
        distance: usize,
    },
    NoMatch,
}

impl Detection {
    /// Whether the caller should trigger the sales import.
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Phrase { .. } | Self::Fuzzy { .. })
    }
}

/// Normalized dictionaries plus the decision procedure.
///
/// Immutable once built, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    phrases: Vec<String>,
    negations: Vec<String>,
    short_words: Vec<String>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    /// Matcher over the bundled dictionaries only.
    pub fn new() -> Self {
        Self::with_extras(&IntentConfig::default())
    }

    /// Bundled dictionaries extended with configured entries.
    ///
    /// Extra short words are added to the phrase list too. Multi-word
    /// entries in `extra_short_words` are skipped, and phrases shorter than
    /// [`MIN_PHRASE_LENGTH`] are dropped.
    pub fn with_extras(extras: &IntentConfig) -> Self {
        let extra_short: Vec<&str> = extras
            .extra_short_words
            .iter()
            .map(String::as_str)
            .filter(|w| {
                let single = !normalize(w).contains(' ');
                if !single {
                    warn!("intent: ignoring multi-word short intent word {w:?}");
                }
                single
            })
            .collect();

        let short_words = normalized_list(
            SHORT_INTENT_WORDS
                .iter()
                .copied()
                .chain(extra_short.iter().copied()),
        );
        let mut phrases = normalized_list(
            INTENT_PHRASES
                .iter()
                .copied()
                .chain(extras.extra_phrases.iter().map(String::as_str))
                .chain(extra_short.iter().copied()),
        );
        phrases.retain(|p| p.chars().count() >= MIN_PHRASE_LENGTH);
        let negations = normalized_list(
            NEGATION_PHRASES
                .iter()
                .copied()
                .chain(extras.extra_negations.iter().map(String::as_str)),
        );

        if !extras.is_empty() {
            debug!(
                "intent: {} phrases, {} negations, {} short words after config extras",
                phrases.len(),
                negations.len(),
                short_words.len()
            );
        }

        Self {
            phrases,
            negations,
            short_words,
        }
    }

    /// Classify a raw chat message.
    pub fn detect(&self, message: &str) -> Detection {
        self.detect_normalized(&normalize(message))
    }

    /// Classify a JSON chat payload. Non-strings are [`Detection::Empty`].
    pub fn detect_value(&self, value: &Value) -> Detection {
        self.detect_normalized(&normalize_value(value))
    }

    /// True when the message asks to update the sales data.
    pub fn matches(&self, message: &str) -> bool {
        self.detect(message).is_update()
    }

    pub fn matches_value(&self, value: &Value) -> bool {
        self.detect_value(value).is_update()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn negations(&self) -> &[String] {
        &self.negations
    }

    pub fn short_words(&self) -> &[String] {
        &self.short_words
    }

    fn detect_normalized(&self, text: &str) -> Detection {
        if text.is_empty() {
            return Detection::Empty;
        }

        // Negation wins over everything else.
        if let Some(phrase) = self.negations.iter().find(|n| text.contains(n.as_str())) {
            return Detection::Negated {
                phrase: phrase.clone(),
            };
        }

        if let Some(phrase) = self.phrases.iter().find(|p| text.contains(p.as_str())) {
            return Detection::Phrase {
                phrase: phrase.clone(),
            };
        }

        for word in text.split_whitespace() {
            if word.chars().count() < MIN_WORD_LENGTH_FOR_FUZZY {
                continue;
            }
            if let Some(target) = self.short_words.iter().find(|w| w.as_str() == word) {
                return Detection::Fuzzy {
                    word: word.to_string(),
                    target: target.clone(),
                    distance: 0,
                };
            }
            let closest = self
                .short_words
                .iter()
                .map(|w| (w, levenshtein(word, w)))
                .min_by_key(|(_, d)| *d);
            if let Some((target, distance)) = closest {
                if distance <= MAX_LEVENSHTEIN_DISTANCE {
                    return Detection::Fuzzy {
                        word: word.to_string(),
                        target: target.clone(),
                        distance,
                    };
                }
            }
        }

        Detection::NoMatch
    }
}

/// Normalize entries, dropping blanks and duplicates while keeping order.
fn normalized_list<'a>(entries: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let normalized = normalize(entry);
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}

/// Explain the decision for `message` using the bundled dictionaries.
pub fn detect_update_intent(message: &str) -> Detection {
    DEFAULT_MATCHER.detect(message)
}

/// True when `message` asks to import/update the sales data.
pub fn matches_update_intent(message: &str) -> bool {
    DEFAULT_MATCHER.matches(message)
}

/// Like [`matches_update_intent`] for a JSON payload; non-strings are `false`.
pub fn matches_update_intent_value(value: &Value) -> bool {
    DEFAULT_MATCHER.matches_value(value)
}
