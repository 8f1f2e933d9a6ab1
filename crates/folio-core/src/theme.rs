//! Colour theme and its persistence.
//!
//! The theme is a single flag. It is resolved once at startup and handed to
//! the view layer explicitly; later changes go through a [`ThemeStore`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, TableDefinition};

use crate::error::{FolioError, FolioResult};

/// Key the dark-mode flag is stored under
pub const THEME_KEY: &str = "theme";

/// File name of the preferences database inside the data directory
pub const DATABASE_FILE: &str = "folio.redb";

const PREFERENCES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("preferences");

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Class applied to the page root
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Glyph for the toggle button (shows the theme you would switch to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FolioError::InvalidConfig(format!("unknown theme '{other}'"))),
        }
    }
}

/// Where the theme flag lives between runs
pub trait ThemeStore: Send + Sync {
    /// The stored theme, or `None` if nothing has been saved yet
    fn load(&self) -> FolioResult<Option<Theme>>;

    fn save(&self, theme: Theme) -> FolioResult<()>;
}

/// Theme flag persisted in a redb database
#[derive(Clone)]
pub struct RedbThemeStore {
    db: Arc<RwLock<Database>>,
}

impl RedbThemeStore {
    /// Open (or create) `folio.redb` inside `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> FolioResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let db = Database::create(data_dir.join(DATABASE_FILE))?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl ThemeStore for RedbThemeStore {
    fn load(&self) -> FolioResult<Option<Theme>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        match table.get(THEME_KEY)? {
            Some(v) => {
                let dark: bool = serde_json::from_slice(v.value())?;
                Ok(Some(Theme::from_dark(dark)))
            }
            None => Ok(None),
        }
    }

    fn save(&self, theme: Theme) -> FolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            let data = serde_json::to_vec(&theme.is_dark())?;
            table.insert(THEME_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(%theme, "theme persisted");
        Ok(())
    }
}

/// Theme flag kept only for the lifetime of the process
#[derive(Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> FolioResult<Option<Theme>> {
        Ok(*self.theme.lock())
    }

    fn save(&self, theme: Theme) -> FolioResult<()> {
        *self.theme.lock() = Some(theme);
        Ok(())
    }
}

/// Pick the startup theme: explicit override, then stored flag, then light.
///
/// A store that fails to load is logged and treated as empty.
pub fn resolve_initial_theme(override_theme: Option<Theme>, store: &dyn ThemeStore) -> Theme {
    if let Some(theme) = override_theme {
        return theme;
    }
    match store.load() {
        Ok(stored) => stored.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to load stored theme: {}", e);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn parse_theme() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(FolioError::InvalidConfig(_))
        ));
    }

    #[test]
    fn redb_store_starts_empty() {
        let dir = tempdir().unwrap();
        let store = RedbThemeStore::open(dir.path()).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn redb_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = RedbThemeStore::open(dir.path()).unwrap();
            store.save(Theme::Dark).unwrap();
        }

        let store = RedbThemeStore::open(dir.path()).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn redb_store_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = RedbThemeStore::open(&nested).unwrap();
        store.save(Theme::Dark).unwrap();
        assert!(nested.join(DATABASE_FILE).exists());
    }

    #[test]
    fn resolve_prefers_override() {
        let store = MemoryThemeStore::new();
        store.save(Theme::Dark).unwrap();

        assert_eq!(resolve_initial_theme(Some(Theme::Light), &store), Theme::Light);
        assert_eq!(resolve_initial_theme(None, &store), Theme::Dark);
        assert_eq!(
            resolve_initial_theme(None, &MemoryThemeStore::new()),
            Theme::Light
        );
    }
}
