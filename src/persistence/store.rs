//! File storage for saved games.
//!
//! A `SaveStore` reads and writes a single JSON save file. A missing or
//! unreadable file surfaces as `MatchError::Io`, a corrupt one as
//! `MatchError::Decode`; callers treat both as "no saved game".
//!
//! A store built with `from_config` restores games onto that config's
//! alphabet and seed. A store built with `new` uses the standard A-Z pool.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::codec::GameStateCodec;
use crate::core::GameConfig;
use crate::error::Result;
use crate::game::MatchingGame;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
    config: Option<GameConfig>,
}

impl SaveStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: None,
        }
    }

    /// Store at the config's `save_path`; `load` restores with that config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            path: config.save_path.clone(),
            config: Some(config.clone()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a save file is present.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `game` to the save file, creating its directory if needed.
    pub fn save(&self, game: &MatchingGame) -> Result<()> {
        let json = GameStateCodec::to_json(game)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), cards = game.card_count(), "game saved");
        Ok(())
    }

    /// Read the saved game, using the store's config if it has one.
    pub fn load(&self) -> Result<MatchingGame> {
        match &self.config {
            Some(config) => self.load_with(config),
            None => {
                let json = fs::read_to_string(&self.path)?;
                let game = GameStateCodec::from_json(&json)?;
                info!(path = %self.path.display(), cards = game.card_count(), "game loaded");
                Ok(game)
            }
        }
    }

    /// Read the saved game with `config`'s alphabet and seed.
    pub fn load_with(&self, config: &GameConfig) -> Result<MatchingGame> {
        let json = fs::read_to_string(&self.path)?;
        let game = GameStateCodec::from_json_with(&json, config)?;
        info!(path = %self.path.display(), cards = game.card_count(), "game loaded");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("nested").join("game.json"));
        assert!(!store.exists());

        let mut game = MatchingGame::with_seed(5);
        game.add_card_pair();
        store.save(&game).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(GameStateCodec::encode(&loaded), GameStateCodec::encode(&game));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("noFileExists.json"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
        assert!(err.is_unreadable_save());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        fs::write(&path, "{\"cardAmount\": 4}").unwrap();

        let err = SaveStore::new(&path).load().unwrap_err();
        assert!(matches!(err, MatchError::Decode { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig::new().with_save_path("saves/slot1.json");
        assert_eq!(SaveStore::from_config(&config).path(), Path::new("saves/slot1.json"));
    }

    #[test]
    fn test_from_config_restores_alphabet() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::new()
            .with_alphabet("ABC")
            .with_seed(6)
            .with_save_path(dir.path().join("abc.json"));
        let store = SaveStore::from_config(&config);

        let mut game = MatchingGame::with_config(&config).unwrap();
        game.add_card_pair();
        store.save(&game).unwrap();

        let mut loaded = store.load().unwrap();
        assert_eq!(loaded.identity_pool(), game.identity_pool());
        assert_eq!(loaded.find_unused_identity(), None);
        assert_eq!(loaded.add_card_pair(), game.add_card_pair());
        assert_eq!(loaded.card_count(), 6);
    }
}
