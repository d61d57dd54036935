use std::time::Duration;

use log::{debug, warn};
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

const CHIME_BASE_HZ: f32 = 660.0;
const CHIME_STEP_HZ: f32 = 20.0;
const CHIME_MAX_HZ: f32 = 1320.0;

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    chime_length: Duration,
    chime_volume: f32,
}

impl AudioManager {
    /// `None` when there is no usable output device; the game runs silent.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("no audio output, running without sound: {}", e);
                return None;
            }
        };
        Some(Self {
            _stream,
            handle,
            chime_length: Duration::from_millis(180),
            chime_volume: 0.25,
        })
    }

    pub fn play_level_up(&self, level: u64) {
        // Each chime gets its own sink so back-to-back pickups don't queue up
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                let tone = SineWave::new(chime_frequency(level))
                    .take_duration(self.chime_length)
                    .fade_in(Duration::from_millis(10))
                    .amplify(self.chime_volume.clamp(0.0, 1.0));
                sink.append(tone);
                sink.detach();
            }
            Err(e) => debug!("skipping level-up chime: {}", e),
        }
    }
}

/// Pitch climbs a little each level, up to an octave above the base.
pub fn chime_frequency(level: u64) -> f32 {
    let steps = level.saturating_sub(1).min(1000) as f32;
    (CHIME_BASE_HZ + steps * CHIME_STEP_HZ).min(CHIME_MAX_HZ)
}
