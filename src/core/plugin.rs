//! Host-facing adapter.
//!
//! The host forwards overhead text notifications here; the plugin filters for
//! Yama, classifies the line and fires the matching sound.

use super::audio::backend::AudioBackend;
use super::audio::trigger;
use super::config::Settings;
use super::dialogue::classifier;
use super::dialogue::model::DialogueEvent;
use super::model::{ActorKind, OverheadTextChanged};

/// Name as it appears in-game
pub const YAMA_NAME: &str = "Yama";

/// Static description a host can show in its plugin list.
#[derive(Debug, Clone, Copy)]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PLUGIN_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    name: "Yama Overhead Audio",
    description: "Plays sounds when Yama says specific overhead lines",
    tags: &["yama", "boss", "audio"],
};

pub struct YamaPlugin<B: AudioBackend> {
    settings: Settings,
    backend: B,
}

impl<B: AudioBackend> YamaPlugin<B> {
    pub fn new(settings: Settings, backend: B) -> Self {
        Self { settings, backend }
    }

    pub fn start_up(&self) {
        log::info!("{} plugin started", PLUGIN_DESCRIPTOR.name);
    }

    pub fn shut_down(&self) {
        log::info!("{} plugin stopped", PLUGIN_DESCRIPTOR.name);
    }

    /// Update the settings (hot-reload friendly)
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Handle an overhead text change. Returns the event that was triggered, if any.
    pub fn on_overhead_text_changed(&self, event: &OverheadTextChanged) -> Option<DialogueEvent> {
        if event.actor_kind != ActorKind::Npc {
            return None;
        }

        let name = event.actor_name.as_deref()?;
        if !name.eq_ignore_ascii_case(YAMA_NAME) {
            return None;
        }

        let text = event.text.as_deref().filter(|t| !t.trim().is_empty())?;
        log::debug!("Yama said: {}", text);

        let dialogue = classifier::classify_line(text)?;
        trigger::trigger(
            &self.backend,
            &self.settings.sound_dir,
            dialogue,
            self.settings.volume,
        );
        Some(dialogue)
    }
}
