/// Top-level menus, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    System,
    Status,
    Data,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::System, Menu::Status, Menu::Data];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Status => "STATUS",
            Self::Data => "DATA",
        }
    }

    pub fn tabs(self) -> &'static [Tab] {
        match self {
            Self::System => &[Tab::About, Tab::Audio, Tab::Expansion],
            Self::Status => &[Tab::Environment],
            Self::Data => &[Tab::Chipmap, Tab::Archives],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    About,
    Audio,
    Expansion,
    Environment,
    Chipmap,
    Archives,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "ABOUT",
            Self::Audio => "AUDIO",
            Self::Expansion => "EXPANSION",
            Self::Environment => "ENVIRONMENT",
            Self::Chipmap => "CHIPMAP",
            Self::Archives => "ARCHIVES",
        }
    }

    /// Tabs that accept `Confirm` to enter selection mode.
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Audio | Self::Chipmap | Self::Archives)
    }
}

/// Active menu and tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    menu: Menu,
    tab_index: usize,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            menu: Menu::System,
            tab_index: 0,
        }
    }
}

impl MenuState {
    pub fn menu(&self) -> Menu {
        self.menu
    }

    pub fn tab_index(&self) -> usize {
        self.tab_index
    }

    pub fn tab(&self) -> Tab {
        self.menu.tabs()[self.tab_index]
    }

    /// Switch menu and reset to its first tab.
    pub fn select_menu(&mut self, menu: Menu) {
        self.menu = menu;
        self.tab_index = 0;
    }

    /// Jump directly to a tab, switching menus if needed.
    pub fn select_tab(&mut self, tab: Tab) {
        for menu in Menu::ALL {
            if let Some(i) = menu.tabs().iter().position(|&t| t == tab) {
                self.menu = menu;
                self.tab_index = i;
                return;
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % self.menu.tabs().len();
    }

    pub fn prev_tab(&mut self) {
        let n = self.menu.tabs().len();
        self.tab_index = (self.tab_index + n - 1) % n;
    }
}
