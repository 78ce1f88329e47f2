// Dialogue model types: events Yama can announce and the rule table that detects them.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Fight event announced by one of Yama's overhead lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueEvent {
    /// Yama switches target
    ChangingAggro,
    /// Fire rocks incoming
    InfernalRockfall,
    /// Shadow stomp incoming
    ShadowStomp,
    /// Fight moves into the next phase
    PhaseTransition,
    /// A player has died
    PlayerDies,
    /// Yama defeated
    Defeated,
    /// Yama defeated while the player was low on hitpoints
    DefeatedLowHp,
    /// Yama defeated without taking risks
    DefeatedPerfect,
}

impl DialogueEvent {
    /// Get the display name for this event
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ChangingAggro => "Changing Aggro",
            Self::InfernalRockfall => "Infernal Rockfall",
            Self::ShadowStomp => "Shadow Stomp",
            Self::PhaseTransition => "Phase Transition",
            Self::PlayerDies => "Player Dies",
            Self::Defeated => "Defeated",
            Self::DefeatedLowHp => "Defeated (Low HP)",
            Self::DefeatedPerfect => "Defeated (Perfect)",
        }
    }

    /// Get the bundled sound file played for this event
    pub fn sound_file(&self) -> &'static str {
        match self {
            Self::ChangingAggro => "yama_changing_aggro.wav",
            Self::InfernalRockfall => "yama_infernal_rockfall.wav",
            Self::ShadowStomp => "yama_shadow_stomp.wav",
            Self::PhaseTransition => "yama_phase_transition.wav",
            Self::PlayerDies => "yama_player_dies.wav",
            Self::Defeated => "yama_defeated.wav",
            Self::DefeatedLowHp => "yama_defeated_low_hp.wav",
            Self::DefeatedPerfect => "yama_defeated_perfect.wav",
        }
    }

    /// Get all dialogue events
    pub fn all() -> &'static [DialogueEvent] {
        &[
            Self::ChangingAggro,
            Self::InfernalRockfall,
            Self::ShadowStomp,
            Self::PhaseTransition,
            Self::PlayerDies,
            Self::Defeated,
            Self::DefeatedLowHp,
            Self::DefeatedPerfect,
        ]
    }
}

/// How a rule's phrases are compared against normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Text contains the phrase anywhere
    Substring,
    /// Text equals the phrase once trailing punctuation is stripped
    Exact,
}

/// One entry of the dialogue table. Phrases are stored lowercase.
#[derive(Debug, Clone)]
pub struct DialogueRule {
    pub event: DialogueEvent,
    pub kind: MatchKind,
    pub phrases: &'static [&'static str],
}

impl DialogueRule {
    const fn substring(event: DialogueEvent, phrases: &'static [&'static str]) -> Self {
        Self {
            event,
            kind: MatchKind::Substring,
            phrases,
        }
    }

    const fn exact(event: DialogueEvent, phrases: &'static [&'static str]) -> Self {
        Self {
            event,
            kind: MatchKind::Exact,
            phrases,
        }
    }
}

lazy_static! {
    /// Rule groups in priority order. The first matching rule wins.
    pub static ref DIALOGUE_RULES: Vec<DialogueRule> = vec![
        DialogueRule::substring(
            DialogueEvent::ChangingAggro,
            &["your strike lacks bite", "a change of pace"],
        ),
        DialogueRule::substring(
            DialogueEvent::InfernalRockfall,
            &["colabi, infernus", "ven, estella infernus", "colabesur infernus"],
        ),
        DialogueRule::substring(
            DialogueEvent::ShadowStomp,
            &["ven, umbra eclipta", "umbra, proriumpse", "umbra apprerendehe"],
        ),
        DialogueRule::exact(
            DialogueEvent::PhaseTransition,
            &["begone", "you bore me.", "you bore me", "enough.", "enough"],
        ),
        DialogueRule::substring(
            DialogueEvent::PlayerDies,
            &[
                "lacking.",
                "pathetic.",
                "the price is paid",
                "another day, perhaps",
                "another day, another soul",
                "your soul was always mine",
            ],
        ),
        DialogueRule::substring(
            DialogueEvent::Defeated,
            &[
                "fair is fair",
                "your reward, as agreed",
                "a satisfying warmup. collect your loot and let us continue",
                "a passing performance",
            ],
        ),
        DialogueRule::substring(
            DialogueEvent::DefeatedLowHp,
            &[
                "a close fight. your nerve was well held",
                "a good risk, adequately rewarded",
                "excellent performance. again",
            ],
        ),
        DialogueRule::substring(
            DialogueEvent::DefeatedPerfect,
            &["effective, if a bit cowardly", "risk averse, are we"],
        ),
    ];
}
