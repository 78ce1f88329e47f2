use serde::{Deserialize, Serialize};

pub type ActorName = String;

/// Kind of in-game actor whose overhead text changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Npc,
    Player,
}

/// Notification delivered by the host whenever an actor's overhead text changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverheadTextChanged {
    pub actor_kind: ActorKind,
    pub actor_name: Option<ActorName>,
    pub text: Option<String>,
}

impl OverheadTextChanged {
    pub fn npc(name: &str, text: &str) -> Self {
        Self {
            actor_kind: ActorKind::Npc,
            actor_name: Some(name.to_string()),
            text: Some(text.to_string()),
        }
    }
}
