//! Local UI chrome state (active tab, theme, backend health).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of catalog state so panels can evolve
//! independently of the data they render. Exactly one tab is visible at a
//! time; selecting a tab reports which load, if any, it triggers.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::HealthStatus;
use crate::util::theme::ThemeState;

/// Panels reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    List,
    Search,
    Stats,
    Export,
    Import,
    Distribution,
}

impl Tab {
    pub const ALL: [Self; 6] = [
        Self::List,
        Self::Search,
        Self::Stats,
        Self::Export,
        Self::Import,
        Self::Distribution,
    ];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "Listar",
            Self::Search => "Buscar",
            Self::Stats => "Estadísticas",
            Self::Export => "Exportar",
            Self::Import => "Importar",
            Self::Distribution => "Distribución",
        }
    }

    /// Stable id, used for the panel element id (`{id}-tab`).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Search => "search",
            Self::Stats => "stats",
            Self::Export => "export",
            Self::Import => "import",
            Self::Distribution => "distribution",
        }
    }

    /// Data load fired as a side effect of showing this tab.
    #[must_use]
    pub fn load_on_show(self) -> Option<TabLoad> {
        match self {
            Self::List => Some(TabLoad::Problems),
            Self::Stats => Some(TabLoad::Stats),
            _ => None,
        }
    }
}

/// Loads triggered by tab selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabLoad {
    Problems,
    Stats,
}

/// Backend reachability shown in the status bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HealthView {
    #[default]
    Unknown,
    Reported(HealthStatus),
    Unreachable,
}

/// UI state for navigation, theme and status bar.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub theme: ThemeState,
    pub health: HealthView,
}

impl UiState {
    /// Show `tab` and hide every other panel. Returns the load to trigger;
    /// reselecting the current tab triggers it again.
    pub fn select_tab(&mut self, tab: Tab) -> Option<TabLoad> {
        self.active_tab = tab;
        tab.load_on_show()
    }

    #[must_use]
    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }
}
