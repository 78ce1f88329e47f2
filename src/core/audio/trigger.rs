// Audio trigger - turns a dialogue event into a fire-and-forget playback request.
//
// Failures stop here: a sound that cannot be played is logged and skipped so the
// overhead text handling keeps running.

use std::path::Path;

use super::backend::{AudioBackend, PlaybackRequest};
use super::gain::GainRange;
use crate::core::dialogue::model::DialogueEvent;

/// Build the playback request for an event. None when the volume is muted.
pub fn playback_request(
    event: DialogueEvent,
    volume_percent: i32,
    sound_dir: &Path,
    range: GainRange,
) -> Option<PlaybackRequest> {
    let gain_db = range.gain_for(volume_percent)?;
    Some(PlaybackRequest {
        resource: sound_dir.join(event.sound_file()),
        gain_db,
    })
}

/// Play the sound for `event` at `volume_percent`. Never fails, never blocks on playback.
pub fn trigger(backend: &dyn AudioBackend, sound_dir: &Path, event: DialogueEvent, volume_percent: i32) {
    let Some(request) = playback_request(event, volume_percent, sound_dir, backend.gain_range()) else {
        log::debug!("Volume muted, skipping {}", event.sound_file());
        return;
    };

    match backend.play(&request) {
        Ok(()) => log::debug!(
            "Playing {} at {:.1} dB",
            request.resource.display(),
            request.gain_db
        ),
        Err(e) => log::warn!(
            "Failed to play {}: {}",
            request.resource.display(),
            e
        ),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::audio::backend::{AudioError, AudioResult};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::sync::Once;

    /// Backend that records requests instead of playing them
    #[derive(Default)]
    pub(crate) struct RecordingBackend {
        pub requests: RefCell<Vec<PlaybackRequest>>,
        pub fail: bool,
    }

    impl RecordingBackend {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl AudioBackend for RecordingBackend {
        fn play(&self, request: &PlaybackRequest) -> AudioResult<()> {
            self.requests.borrow_mut().push(request.clone());
            if self.fail {
                return Err(AudioError::Playback("device unplugged".to_string()));
            }
            Ok(())
        }
    }

    thread_local! {
        static CAPTURED: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
    }

    /// Collects records emitted on the current test thread
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    pub(crate) fn capture_logs() {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Trace);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
    }

    pub(crate) fn captured_warnings() -> Vec<String> {
        CAPTURED.with(|c| {
            c.borrow()
                .iter()
                .filter(|(level, _)| *level == log::Level::Warn)
                .map(|(_, msg)| msg.clone())
                .collect()
        })
    }

    #[test]
    fn test_trigger_plays_event_sound() {
        let backend = RecordingBackend::default();
        trigger(&backend, Path::new("sounds"), DialogueEvent::ShadowStomp, 100);

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].resource, PathBuf::from("sounds/yama_shadow_stomp.wav"));
        assert_eq!(requests[0].gain_db, GainRange::default().max_db);
    }

    #[test]
    fn test_trigger_muted_skips_backend() {
        let backend = RecordingBackend::default();
        trigger(&backend, Path::new("sounds"), DialogueEvent::Defeated, 0);
        assert_eq!(backend.count(), 0);
    }

    #[test]
    fn test_trigger_clamps_volume() {
        let backend = RecordingBackend::default();
        trigger(&backend, Path::new("sounds"), DialogueEvent::Defeated, 400);
        trigger(&backend, Path::new("sounds"), DialogueEvent::Defeated, -3);

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 1, "negative volume is muted");
        assert_eq!(requests[0].gain_db, GainRange::default().max_db);
    }

    #[test]
    fn test_trigger_does_not_deduplicate() {
        let backend = RecordingBackend::default();
        trigger(&backend, Path::new("sounds"), DialogueEvent::PlayerDies, 60);
        trigger(&backend, Path::new("sounds"), DialogueEvent::PlayerDies, 60);

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[test]
    fn test_failing_backend_is_swallowed_and_logged() {
        capture_logs();
        let backend = RecordingBackend::failing();

        trigger(&backend, Path::new("sounds"), DialogueEvent::InfernalRockfall, 80);

        assert_eq!(backend.count(), 1);
        let warnings = captured_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("yama_infernal_rockfall.wav"));
        assert!(warnings[0].contains("device unplugged"));
    }

    #[test]
    fn test_playback_request_uses_backend_range() {
        let range = GainRange {
            min_db: -60.0,
            max_db: 0.0,
        };
        let request =
            playback_request(DialogueEvent::ChangingAggro, 50, Path::new("/sfx"), range).unwrap();
        assert_eq!(request.resource, PathBuf::from("/sfx/yama_changing_aggro.wav"));
        assert!((request.gain_db - -30.0).abs() < 1e-4);
    }
}
