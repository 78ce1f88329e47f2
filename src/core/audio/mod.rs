// Audio trigger pipeline for classified dialogue events.
//
// Architecture:
// - gain.rs: Volume percentage to decibel gain mapping
// - backend.rs: Playback seam and the rodio implementation
// - trigger.rs: Resolves the sound file and dispatches playback, swallowing failures

pub mod backend;
pub mod gain;
pub mod trigger;
