use tracing::debug;

use crate::input::{AudioCue, CueSink, InputEvent};
use crate::menu::{Menu, MenuState, Tab};
use crate::navigation::NavigationState;
use crate::zoom::ZoomControl;

pub const VOLUME_MAX: u8 = 100;
const DEFAULT_VOLUME: u8 = 50;

/// Archive text size plus leading; one scroll step.
pub const ARCHIVE_LINE_PX: u32 = 12;

/// Latest environment sensor values. All zero until a source reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorReadings {
    pub temperature_f: f64,
    pub humidity: f64,
    pub co2_ppm: u32,
}

impl SensorReadings {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("TEMPERATURE: {:.1}\u{00b0}F", self.temperature_f),
            format!("HUMIDITY: {:.1}", self.humidity),
            format!("CO2: {}PPM", self.co2_ppm),
        ]
    }
}

/// All interactive panel state, created at startup and passed by
/// reference to the renderer each frame.
///
/// Events are applied strictly one at a time through [`Console::handle`];
/// hosts with several input sources must funnel them through one queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Console {
    pub menu: MenuState,
    pub nav: NavigationState,
    pub sensors: SensorReadings,
    volume: u8,
    archive_scroll: u32,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(NavigationState::default())
    }
}

impl Console {
    pub fn new(nav: NavigationState) -> Self {
        Self {
            menu: MenuState::default(),
            nav,
            sensors: SensorReadings::default(),
            volume: DEFAULT_VOLUME,
            archive_scroll: 0,
        }
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Archive scroll offset in pixels from the top of the document.
    pub fn archive_scroll(&self) -> u32 {
        self.archive_scroll
    }

    pub fn active_tab(&self) -> Tab {
        self.menu.tab()
    }

    /// Apply one input event.
    ///
    /// `zoom` receives zoom events while the map tab is active; `cues`
    /// receives the sound cue for every transition that has one.
    pub fn handle(
        &mut self,
        event: InputEvent,
        zoom: &mut dyn ZoomControl,
        cues: &mut dyn CueSink,
    ) {
        debug!(?event, tab = ?self.menu.tab(), mode = ?self.nav.mode(), "input");

        match event {
            InputEvent::MenuSelect(n) => {
                let Some(menu) = Menu::from_index(n) else {
                    return;
                };
                self.menu.select_menu(menu);
                self.nav.deselect();
                cues.cue(AudioCue::Menu);
                return;
            }
            InputEvent::TabNext | InputEvent::TabPrev => {
                if event == InputEvent::TabNext {
                    self.menu.next_tab();
                } else {
                    self.menu.prev_tab();
                }
                self.nav.deselect();
                cues.cue(AudioCue::Tab);
                return;
            }
            InputEvent::Cancel => {
                self.nav.deselect();
                cues.cue(AudioCue::Cancel);
                return;
            }
            InputEvent::Confirm => cues.cue(AudioCue::Confirm),
            InputEvent::DirUp | InputEvent::DirDown => cues.cue(AudioCue::Scroll),
            _ => {}
        }

        if !self.nav.is_selected() {
            match event {
                InputEvent::DirRight => {
                    self.menu.next_tab();
                    cues.cue(AudioCue::Tab);
                }
                InputEvent::DirLeft => {
                    self.menu.prev_tab();
                    cues.cue(AudioCue::Tab);
                }
                _ => {}
            }
        }

        match self.menu.tab() {
            Tab::Chipmap => self.handle_map(event, zoom, cues),
            Tab::Audio => self.handle_audio(event),
            Tab::Archives => self.handle_archives(event),
            Tab::About | Tab::Expansion | Tab::Environment => {}
        }
    }

    fn handle_map(
        &mut self,
        event: InputEvent,
        zoom: &mut dyn ZoomControl,
        cues: &mut dyn CueSink,
    ) {
        match event {
            InputEvent::ZoomIn | InputEvent::ZoomOut => {
                if event == InputEvent::ZoomIn {
                    zoom.zoom_in();
                } else {
                    zoom.zoom_out();
                }
                self.nav.set_zoom_index(zoom.zoom_index());
                cues.cue(AudioCue::Scroll);
            }
            _ => self.nav.handle(event, cues),
        }
    }

    fn handle_audio(&mut self, event: InputEvent) {
        match (self.nav.is_selected(), event) {
            (_, InputEvent::Confirm) => self.nav.select(),
            (true, InputEvent::DirUp) => self.volume = (self.volume + 1).min(VOLUME_MAX),
            (true, InputEvent::DirDown) => self.volume = self.volume.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_archives(&mut self, event: InputEvent) {
        match (self.nav.is_selected(), event) {
            (_, InputEvent::Confirm) => self.nav.select(),
            (true, InputEvent::DirUp) => {
                self.archive_scroll = self.archive_scroll.saturating_sub(ARCHIVE_LINE_PX);
            }
            (true, InputEvent::DirDown) => self.archive_scroll += ARCHIVE_LINE_PX,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoom::ZoomCursor;

    fn on_map() -> (Console, ZoomCursor) {
        let mut c = Console::default();
        c.menu.select_tab(Tab::Chipmap);
        (c, ZoomCursor::new(9))
    }

    #[test]
    fn menu_select_plays_menu_cue_and_resets_tab() {
        let mut c = Console::default();
        let mut z = ZoomCursor::new(9);
        let mut cues = Vec::new();
        c.handle(InputEvent::DirRight, &mut z, &mut cues);
        assert_eq!(c.active_tab(), Tab::Audio);
        c.handle(InputEvent::MenuSelect(2), &mut z, &mut cues);
        assert_eq!(c.active_tab(), Tab::Chipmap);
        assert_eq!(cues, vec![AudioCue::Tab, AudioCue::Menu]);
    }

    #[test]
    fn out_of_range_menu_is_ignored() {
        let mut c = Console::default();
        let mut cues = Vec::new();
        c.handle(InputEvent::MenuSelect(7), &mut ZoomCursor::new(9), &mut cues);
        assert_eq!(c.menu.menu(), Menu::System);
        assert!(cues.is_empty());
    }

    #[test]
    fn about_tab_is_not_selectable() {
        let mut c = Console::default();
        c.handle(InputEvent::Confirm, &mut ZoomCursor::new(9), &mut ());
        assert!(!c.nav.is_selected());
    }

    #[test]
    fn selected_map_arrows_move_reticle_not_tabs() {
        let (mut c, mut z) = on_map();
        c.handle(InputEvent::Confirm, &mut z, &mut ());
        let start = c.nav.reticle();
        c.handle(InputEvent::DirRight, &mut z, &mut ());
        assert_eq!(c.active_tab(), Tab::Chipmap);
        assert!(c.nav.reticle().lon > start.lon);
    }

    #[test]
    fn browsing_arrows_change_tab() {
        let (mut c, mut z) = on_map();
        c.handle(InputEvent::DirRight, &mut z, &mut ());
        assert_eq!(c.active_tab(), Tab::Archives);
        c.handle(InputEvent::DirLeft, &mut z, &mut ());
        assert_eq!(c.active_tab(), Tab::Chipmap);
    }

    #[test]
    fn cancel_returns_to_browsing_with_cue() {
        let (mut c, mut z) = on_map();
        let mut cues = Vec::new();
        c.handle(InputEvent::Confirm, &mut z, &mut cues);
        c.handle(InputEvent::Cancel, &mut z, &mut cues);
        assert!(!c.nav.is_selected());
        assert_eq!(cues, vec![AudioCue::Confirm, AudioCue::Cancel]);
    }

    #[test]
    fn tab_keys_leave_selection_with_tab_cue() {
        let (mut c, mut z) = on_map();
        let mut cues = Vec::new();
        c.handle(InputEvent::Confirm, &mut z, &mut cues);
        assert!(c.nav.is_selected());

        c.handle(InputEvent::TabNext, &mut z, &mut cues);
        assert_eq!(c.active_tab(), Tab::Archives);
        assert!(!c.nav.is_selected());
        assert_eq!(cues, vec![AudioCue::Confirm, AudioCue::Tab]);

        cues.clear();
        c.handle(InputEvent::Confirm, &mut z, &mut cues);
        assert!(c.nav.is_selected());
        c.handle(InputEvent::TabPrev, &mut z, &mut cues);
        assert_eq!(c.active_tab(), Tab::Chipmap);
        assert!(!c.nav.is_selected());
        assert_eq!(cues, vec![AudioCue::Confirm, AudioCue::Tab]);
    }

    #[test]
    fn menu_select_leaves_selection() {
        let (mut c, mut z) = on_map();
        let mut cues = Vec::new();
        c.handle(InputEvent::Confirm, &mut z, &mut cues);
        assert!(c.nav.is_selected());

        c.handle(InputEvent::MenuSelect(0), &mut z, &mut cues);
        assert_eq!(c.active_tab(), Tab::About);
        assert!(!c.nav.is_selected());
        assert_eq!(cues, vec![AudioCue::Confirm, AudioCue::Menu]);
    }

    #[test]
    fn zoom_routes_to_control_and_mirrors_index() {
        let (mut c, mut z) = on_map();
        let mut cues = Vec::new();
        c.handle(InputEvent::ZoomIn, &mut z, &mut cues);
        c.handle(InputEvent::ZoomIn, &mut z, &mut cues);
        c.handle(InputEvent::ZoomOut, &mut z, &mut cues);
        assert_eq!(z.index(), 1);
        assert_eq!(c.nav.zoom_index(), 1);
        assert_eq!(cues, vec![AudioCue::Scroll; 3]);
    }

    #[test]
    fn zoom_is_ignored_off_the_map() {
        let mut c = Console::default();
        let mut z = ZoomCursor::new(9);
        c.handle(InputEvent::ZoomIn, &mut z, &mut ());
        assert_eq!(z.index(), 0);
    }

    #[test]
    fn volume_saturates() {
        let mut c = Console::default();
        let mut z = ZoomCursor::new(9);
        c.menu.select_tab(Tab::Audio);
        c.handle(InputEvent::Confirm, &mut z, &mut ());
        for _ in 0..80 {
            c.handle(InputEvent::DirUp, &mut z, &mut ());
        }
        assert_eq!(c.volume(), VOLUME_MAX);
        for _ in 0..150 {
            c.handle(InputEvent::DirDown, &mut z, &mut ());
        }
        assert_eq!(c.volume(), 0);
    }

    #[test]
    fn archive_scroll_never_negative() {
        let mut c = Console::default();
        let mut z = ZoomCursor::new(9);
        c.menu.select_tab(Tab::Archives);
        c.handle(InputEvent::Confirm, &mut z, &mut ());
        c.handle(InputEvent::DirDown, &mut z, &mut ());
        c.handle(InputEvent::DirDown, &mut z, &mut ());
        assert_eq!(c.archive_scroll(), 2 * ARCHIVE_LINE_PX);
        for _ in 0..5 {
            c.handle(InputEvent::DirUp, &mut z, &mut ());
        }
        assert_eq!(c.archive_scroll(), 0);
    }

    #[test]
    fn vertical_input_always_cues_scroll() {
        let mut c = Console::default();
        let mut cues = Vec::new();
        c.handle(InputEvent::DirUp, &mut ZoomCursor::new(9), &mut cues);
        assert_eq!(cues, vec![AudioCue::Scroll]);
    }

    #[test]
    fn sensor_lines() {
        let s = SensorReadings {
            temperature_f: 71.34,
            humidity: 40.0,
            co2_ppm: 415,
        };
        assert_eq!(
            s.lines(),
            [
                "TEMPERATURE: 71.3\u{00b0}F".to_string(),
                "HUMIDITY: 40.0".to_string(),
                "CO2: 415PPM".to_string(),
            ]
        );
    }
}
