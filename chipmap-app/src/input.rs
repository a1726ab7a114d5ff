use eframe::egui;

use chipmap_core::InputEvent;

use crate::app::ChipMapApp;

/// Map a key press to a panel event.
///
/// `1`–`3` pick a menu, `Space`/`Enter` confirm, `4`/`Escape` cancel,
/// arrows move, `Page Up`/`Page Down` zoom and `Tab` cycles tabs.
pub(crate) fn event_for_key(key: egui::Key, shift: bool) -> Option<InputEvent> {
    use egui::Key;
    let event = match key {
        Key::Num1 => InputEvent::MenuSelect(0),
        Key::Num2 => InputEvent::MenuSelect(1),
        Key::Num3 => InputEvent::MenuSelect(2),
        Key::Num4 | Key::Escape => InputEvent::Cancel,
        Key::Space | Key::Enter => InputEvent::Confirm,
        Key::ArrowUp => InputEvent::DirUp,
        Key::ArrowDown => InputEvent::DirDown,
        Key::ArrowLeft => InputEvent::DirLeft,
        Key::ArrowRight => InputEvent::DirRight,
        Key::PageUp => InputEvent::ZoomIn,
        Key::PageDown => InputEvent::ZoomOut,
        Key::Tab if shift => InputEvent::TabPrev,
        Key::Tab => InputEvent::TabNext,
        _ => return None,
    };
    Some(event)
}

impl ChipMapApp {
    pub(crate) fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let events: Vec<InputEvent> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => event_for_key(*key, modifiers.shift),
                    _ => None,
                })
                .collect()
        });

        for event in events {
            self.console
                .handle(event, &mut self.map_view, &mut self.cues);
            self.cues.set_volume(self.console.volume());
        }
    }
}
