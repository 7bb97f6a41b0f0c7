//! # ventas-intent
//!
//! Decides whether a Spanish chat message asks to import/update the sales
//! data. Text is normalized (accents, casing, spacing), checked against a
//! negation list first, then against intent phrases, and finally
//! fuzzy-matched word by word against short action verbs to tolerate typos.

mod keywords_data;
pub mod levenshtein;
pub mod matcher;
pub mod normalize;

pub use keywords_data::{MAX_LEVENSHTEIN_DISTANCE, MIN_PHRASE_LENGTH, MIN_WORD_LENGTH_FOR_FUZZY};
pub use levenshtein::levenshtein;
pub use matcher::{
    detect_update_intent, matches_update_intent, matches_update_intent_value, Detection,
    IntentMatcher,
};
pub use normalize::{normalize, normalize_value};
