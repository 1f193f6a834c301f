// src/matcher.rs
//! Matcher: narrows the full card set down to the cards passing every
//! active selection.

use regex::{Regex, RegexBuilder};

use crate::card::AttributeSource;

/// One `(attribute, value)` pair read off the panel at search time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub attribute: String,
    pub value: String,
}

impl Selection {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self { attribute: attribute.into(), value: value.into() }
    }

    /// The placeholder value never narrows anything.
    pub fn is_active(&self) -> bool { !self.value.is_empty() }
}

/// `value` as a whole token of a comma/space separated list, any case.
/// "foo" matches "foo", "bar, foo" and "FOO bar" but not "foobar".
pub fn token_pattern(value: &str) -> Result<Regex, regex::Error> {
    let pattern = format!(r"(^|[, ]+){}([, ]|$)", regex::escape(value));
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Whether one card passes one compiled pattern. A card without the
/// attribute does not match.
pub fn card_matches<T: AttributeSource>(card: &T, attribute: &str, pattern: &Regex) -> bool {
    card.data(attribute).is_some_and(|raw| pattern.is_match(raw))
}

/// Indexes (into `cards`) of the cards passing every active selection,
/// in original order. Starts from the whole slice every call; selections
/// narrow the candidates one after another in the order given.
pub fn apply_filters<T: AttributeSource>(cards: &[T], selections: &[Selection]) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..cards.len()).collect();

    for sel in selections.iter().filter(|s| s.is_active()) {
        let pattern = match token_pattern(&sel.value) {
            Ok(p) => p,
            Err(e) => {
                // Escaped input should always compile; if not, nothing matches.
                loge!("Match: bad pattern for {}={:?}: {}", sel.attribute, sel.value, e);
                return Vec::new();
            }
        };
        candidates.retain(|&ix| card_matches(&cards[ix], &sel.attribute, &pattern));
        logd!("Match: {}={:?} → {} card(s)", sel.attribute, sel.value, candidates.len());
    }

    candidates
}
