//! Audio playback seam.
//!
//! `AudioBackend` is what the trigger talks to; `RodioBackend` plays files on the
//! default output device without waiting for them to finish.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use thiserror::Error;

use super::gain::{db_to_amplitude, GainRange};

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("missing sound resource: {}", .0.display())]
    MissingResource(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("audio device unavailable: {0}")]
    Device(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

pub type AudioResult<T> = Result<T, AudioError>;

/// One sound to play: resource path and gain in decibels
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    pub resource: PathBuf,
    pub gain_db: f32,
}

/// Anything that can start playing a sound file and return immediately.
pub trait AudioBackend {
    /// Native gain range the backend supports
    fn gain_range(&self) -> GainRange {
        GainRange::default()
    }

    /// Start playback. Must not block until the sound finishes.
    fn play(&self, request: &PlaybackRequest) -> AudioResult<()>;
}

/// Plays sounds through rodio on the default output device.
pub struct RodioBackend {
    // Dropping the stream silences everything playing through it
    stream: OutputStream,
    range: GainRange,
}

impl RodioBackend {
    pub fn open_default() -> AudioResult<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Device(e.to_string()))?;
        Ok(Self {
            stream,
            range: GainRange::default(),
        })
    }

    fn decode(path: &Path) -> AudioResult<Decoder<BufReader<File>>> {
        if !path.is_file() {
            return Err(AudioError::MissingResource(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode(e.to_string()))
    }
}

impl AudioBackend for RodioBackend {
    fn gain_range(&self) -> GainRange {
        self.range
    }

    fn play(&self, request: &PlaybackRequest) -> AudioResult<()> {
        let source = Self::decode(&request.resource)?;
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(db_to_amplitude(request.gain_db));
        sink.append(source);
        // Keep playing after the handle goes out of scope
        sink.detach();
        Ok(())
    }
}
