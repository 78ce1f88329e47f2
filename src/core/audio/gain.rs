// Volume to gain mapping.
//
// Volume is a 0-100 percentage. It is mapped linearly onto the backend's native
// gain range; 0% means "do not play" rather than "play at the minimum gain".

use serde::{Deserialize, Serialize};

pub const MIN_VOLUME: i32 = 0;
pub const MAX_VOLUME: i32 = 100;

/// Gain range a backend can apply, in decibels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainRange {
    pub min_db: f32,
    pub max_db: f32,
}

impl Default for GainRange {
    fn default() -> Self {
        Self {
            min_db: -80.0,
            max_db: 6.0,
        }
    }
}

impl GainRange {
    /// Linear position of `volume_percent` within the range.
    /// Returns None when the clamped volume is muted.
    pub fn gain_for(&self, volume_percent: i32) -> Option<f32> {
        let percent = clamp_volume(volume_percent);
        if percent == MIN_VOLUME {
            return None;
        }
        let fraction = percent as f32 / MAX_VOLUME as f32;
        Some(self.min_db + (self.max_db - self.min_db) * fraction)
    }
}

pub fn clamp_volume(volume_percent: i32) -> i32 {
    volume_percent.clamp(MIN_VOLUME, MAX_VOLUME)
}

/// Convert a decibel gain to a linear amplitude factor
pub fn db_to_amplitude(gain_db: f32) -> f32 {
    10f32.powf(gain_db / 20.0)
}
