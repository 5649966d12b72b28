use storage::KeyValueStore;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact stored values count; anything else is no preference.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Toggle button text: names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Modo claro",
            Theme::Light => "Modo escuro",
        }
    }
}

/// Stored choice first, then the system color-scheme preference.
pub fn load_theme<S: KeyValueStore>(store: &S, key: &str, prefers_dark: bool) -> Theme {
    let stored = store.get(key).unwrap_or_else(|err| {
        log::debug!("theme preference unreadable: {err}");
        None
    });
    match stored.as_deref().and_then(Theme::from_stored) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn save_theme<S: KeyValueStore>(store: &mut S, key: &str, theme: Theme) {
    if let Err(err) = store.set(key, theme.as_str()) {
        log::warn!("could not persist theme: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryStore;

    #[test]
    fn stored_choice_beats_system_preference() {
        let store = InMemoryStore::with_entries([("lz-theme", "light")]);
        assert_eq!(load_theme(&store, "lz-theme", true), Theme::Light);
    }

    #[test]
    fn system_preference_applies_without_stored_choice() {
        let store = InMemoryStore::with_entries([("lz-theme", "sepia")]);
        assert_eq!(load_theme(&store, "lz-theme", true), Theme::Dark);
        assert_eq!(load_theme(&InMemoryStore::new(), "lz-theme", false), Theme::Light);
    }

    #[test]
    fn toggle_persists_and_relabels() {
        let mut store = InMemoryStore::new();
        let next = Theme::Light.toggled();
        save_theme(&mut store, "lz-theme", next);
        assert_eq!(store.get("lz-theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(next.toggle_label(), "Modo claro");
        assert_eq!(next.toggled().toggle_label(), "Modo escuro");
    }
}
