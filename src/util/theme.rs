//! Light/dark theme preference, persistence and OS synchronization.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `dark-mode` class to `<body>`. Toggling writes back to `localStorage`.
//! While no preference has been stored, the OS `prefers-color-scheme`
//! setting decides and is followed live. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native
//! builds no-op so the state machine stays testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "darkMode";

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class applied to `<body>` while dark mode is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Persisted user choice. `Unset` means the key has never been written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Unset,
    Light,
    Dark,
}

impl ThemePreference {
    /// Interpret the raw stored value. Any present value other than
    /// `"true"` is an explicit light choice.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some("true") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Value to write to storage, or `None` to leave the key absent.
    #[must_use]
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Light => Some("false"),
            Self::Dark => Some("true"),
        }
    }
}

/// Effective theme: explicit preference first, OS setting otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub system_dark: bool,
}

impl ThemeState {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        match self.preference {
            ThemePreference::Unset => self.system_dark,
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
        }
    }

    /// Flip the effective mode and record it as an explicit preference.
    /// Returns the new dark flag.
    pub fn toggle(&mut self) -> bool {
        self.preference = if self.is_dark() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.is_dark()
    }

    /// Record an OS scheme change. Returns `true` when the change should be
    /// applied, which only happens while no explicit preference exists.
    pub fn system_changed(&mut self, dark: bool) -> bool {
        self.system_dark = dark;
        self.preference == ThemePreference::Unset
    }

    /// Icon for the toggle button, describing the next action.
    #[must_use]
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark() { "☀️" } else { "🌙" }
    }

    #[must_use]
    pub fn toggle_title(&self) -> &'static str {
        if self.is_dark() { "Modo Claro" } else { "Modo Oscuro" }
    }
}

/// Build the initial theme from storage and the OS preference.
pub fn read_initial() -> ThemeState {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeState::default();
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        ThemeState {
            preference: ThemePreference::from_stored(stored.as_deref()),
            system_dark,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeState::default()
    }
}

/// Toggle the `dark-mode` class on `<body>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, dark);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}

/// Write the preference to localStorage, removing the key for `Unset`.
pub fn persist(preference: ThemePreference) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = match preference.stored_value() {
            Some(value) => storage.set_item(STORAGE_KEY, value),
            None => storage.remove_item(STORAGE_KEY),
        };
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = preference;
    }
}

/// Toggle, apply and persist in one step. Returns the updated state.
pub fn toggle(mut state: ThemeState) -> ThemeState {
    let dark = state.toggle();
    apply(dark);
    persist(state.preference);
    state
}

/// Invoke `on_change` with the new dark flag whenever the OS scheme changes.
#[cfg(feature = "csr")]
pub fn watch_system(on_change: impl Fn(bool) + 'static) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
        return;
    };
    let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        on_change(ev.matches());
    });
    let _ = mq.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    // Lives for the whole page session.
    listener.forget();
}
