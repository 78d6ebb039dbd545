//! Retro beeps for game events.
//!
//! [`Speaker`] owns the audio output stream for as long as it lives. Each
//! [`SoundEvent`] becomes a short sequence of sine tones appended to a
//! detached sink, so playback never blocks the game loop.
//!
//! | Event | Sequence |
//! |-------|----------|
//! | Jump | 440 Hz for 100 ms |
//! | Score | 523 Hz 80 ms, 20 ms rest, 659 Hz 80 ms |
//! | GameOver | 659, 523, 440 Hz for 150 ms each, 50 ms rests |

use std::time::Duration;

use anyhow::{Context, Result};
use rodio::source::{SineWave, Zero};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

use flappy_types::SoundEvent;

/// About -3 dB.
const VOLUME: f32 = 0.707;

/// Must match the rate `SineWave` produces so rests and tones share a sink.
const SAMPLE_RATE: u32 = 48_000;

/// One step of a beep sequence; a frequency of 0 is a rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration: Duration,
}

const fn tone(freq_hz: f32, millis: u64) -> Tone {
    Tone {
        freq_hz,
        duration: Duration::from_millis(millis),
    }
}

const fn rest(millis: u64) -> Tone {
    tone(0.0, millis)
}

const JUMP: [Tone; 1] = [tone(440.0, 100)];
const SCORE: [Tone; 3] = [tone(523.0, 80), rest(20), tone(659.0, 80)];
const GAME_OVER: [Tone; 5] = [
    tone(659.0, 150),
    rest(50),
    tone(523.0, 150),
    rest(50),
    tone(440.0, 150),
];

/// The tone sequence played for an event.
pub fn tones(sound: SoundEvent) -> &'static [Tone] {
    match sound {
        SoundEvent::Jump => &JUMP,
        SoundEvent::Score => &SCORE,
        SoundEvent::GameOver => &GAME_OVER,
    }
}

/// Total playback time of an event's sequence.
pub fn sequence_duration(sound: SoundEvent) -> Duration {
    tones(sound).iter().map(|t| t.duration).sum()
}

struct Output {
    // Dropping the stream stops all playback.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Audio output handle. A muted speaker accepts events and plays nothing.
pub struct Speaker {
    output: Option<Output>,
}

impl Speaker {
    /// Open the default output device, falling back to a muted speaker.
    pub fn open() -> Self {
        match Self::try_open() {
            Ok(speaker) => speaker,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "audio unavailable, continuing muted");
                Self::muted()
            }
        }
    }

    pub fn try_open() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("open default audio output")?;
        debug!("audio output opened");
        Ok(Self {
            output: Some(Output {
                _stream: stream,
                handle,
            }),
        })
    }

    pub fn muted() -> Self {
        Self { output: None }
    }

    pub fn is_muted(&self) -> bool {
        self.output.is_none()
    }

    /// Start playing the sequence for `sound` and return immediately.
    pub fn notify(&self, sound: SoundEvent) {
        let Some(output) = &self.output else {
            return;
        };

        let sink = match Sink::try_new(&output.handle) {
            Ok(sink) => sink,
            Err(err) => {
                debug!(sound = sound.as_str(), error = %err, "dropping sound");
                return;
            }
        };

        for step in tones(sound) {
            if step.freq_hz > 0.0 {
                sink.append(
                    SineWave::new(step.freq_hz)
                        .take_duration(step.duration)
                        .amplify(VOLUME),
                );
            } else {
                sink.append(Zero::<f32>::new(1, SAMPLE_RATE).take_duration(step.duration));
            }
        }
        sink.detach();
    }
}

impl Default for Speaker {
    fn default() -> Self {
        Self::muted()
    }
}
