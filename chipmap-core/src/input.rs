use std::fmt;

/// Discrete input events, independent of the host's key or button layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Activate the menu at this index.
    MenuSelect(usize),
    TabNext,
    TabPrev,
    Confirm,
    Cancel,
    DirUp,
    DirDown,
    DirLeft,
    DirRight,
    ZoomIn,
    ZoomOut,
}

/// Abstract sound cues emitted on state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Menu,
    Tab,
    Scroll,
    Confirm,
    Cancel,
}

impl AudioCue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Tab => "tab",
            Self::Scroll => "scroll",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for AudioCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receiver for audio cues. Playback is entirely up to the implementor.
pub trait CueSink {
    fn cue(&mut self, cue: AudioCue);
}

impl CueSink for Vec<AudioCue> {
    fn cue(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}

/// Discards every cue.
impl CueSink for () {
    fn cue(&mut self, _cue: AudioCue) {}
}
