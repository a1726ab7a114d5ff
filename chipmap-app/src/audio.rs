use tracing::debug;

use chipmap_core::{AudioCue, CueSink};

/// Receives sound cues from the console.
///
/// No playback backend is wired in; cues are logged at the current volume.
#[derive(Debug, Default)]
pub(crate) struct CuePlayer {
    volume: u8,
}

impl CuePlayer {
    pub(crate) fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
}

impl CueSink for CuePlayer {
    fn cue(&mut self, cue: AudioCue) {
        debug!(cue = cue.name(), volume = self.volume, "cue");
    }
}
