//! Sound Cues
//!
//! The interaction core never plays audio itself; it emits fire-and-forget
//! cues on state transitions and a host-provided [`SoundSink`] does
//! whatever playback it likes. The core never waits on completion.

use log::info;

/// The cues this demo emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Level has initialized
    GameStart,
    /// Lever pulled with a wrong answer
    Wrong,
    /// Lever pulled with the puzzle solved
    GameOver,
}

/// Playback collaborator. Implementations must not block.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that discards every cue. Handy in tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that logs each cue instead of playing it; audio decoding and
/// output devices are outside this crate.
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::GameStart => info!("sound cue: start-game"),
            SoundCue::Wrong => info!("sound cue: wrong"),
            SoundCue::GameOver => info!("sound cue: game-over"),
        }
    }
}
