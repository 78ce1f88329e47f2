//! Classifier for Yama's overhead dialogue.
//!
//! Maps a raw overhead line to the fight event it announces, if any.

use super::model::{DialogueEvent, MatchKind, DIALOGUE_RULES};

const SPEAKER_PREFIX: &str = "yama:";

/// Classify an optional overhead line. Absent text never matches.
pub fn classify(raw_text: Option<&str>) -> Option<DialogueEvent> {
    classify_line(raw_text?)
}

/// Classify a single overhead line against the dialogue table.
pub fn classify_line(raw_text: &str) -> Option<DialogueEvent> {
    let text = normalize(raw_text);
    if text.is_empty() {
        return None;
    }
    let bare = strip_trailing_punctuation(&text);

    DIALOGUE_RULES
        .iter()
        .find(|rule| match rule.kind {
            MatchKind::Substring => rule.phrases.iter().any(|p| text.contains(p)),
            MatchKind::Exact => rule.phrases.iter().any(|p| bare == *p),
        })
        .map(|rule| rule.event)
}

/// Trim, lowercase and drop a leading "Yama:" speaker tag.
fn normalize(raw_text: &str) -> String {
    let lower = raw_text.trim().to_lowercase();
    match lower.strip_prefix(SPEAKER_PREFIX) {
        Some(rest) => rest.trim().to_string(),
        None => lower,
    }
}

fn strip_trailing_punctuation(text: &str) -> &str {
    let mut bare = text;
    while let Some(rest) = bare.strip_suffix(['.', '!', '?']) {
        bare = rest.trim();
    }
    bare
}
