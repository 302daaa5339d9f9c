// SPDX-License-Identifier: MPL-2.0
//! Game catalog loading and platform grouping.
//!
//! The catalog is the static source data of the showcase. It is read from a
//! TOML document (`[[games]]` tables) either on disk or bundled into the
//! binary, and carries a revision number that downstream caches use to know
//! when to re-derive their sequences. Revisions are unique per process: two
//! catalogs only share one if one is an unmodified clone of the other.

use crate::config::defaults::BUNDLED_CATALOG_FILE;
use crate::domain::{Game, LaneSpec, Platform};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Revision 0 is reserved for `Catalog::default()`.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

#[derive(RustEmbed)]
#[folder = "data/"]
struct BundledData;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    games: Vec<Game>,
}

/// Ordered list of games plus a version counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    games: Vec<Game>,
    revision: u64,
}

/// Games of one platform lane, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformLane<'a> {
    pub spec: &'a LaneSpec,
    pub games: Vec<&'a Game>,
}

impl Catalog {
    #[must_use]
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            revision: next_revision(),
        }
    }

    /// Parses a TOML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the document is malformed or two games
    /// share an id.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
        ensure_unique_ids(&file.games)?;
        Ok(Self::new(file.games))
    }

    /// Reads a TOML catalog from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or the errors of
    /// [`Catalog::from_toml_str`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), games = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The catalog shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the embedded document is missing or invalid.
    pub fn bundled() -> Result<Self> {
        let file = BundledData::get(BUNDLED_CATALOG_FILE)
            .ok_or_else(|| Error::Catalog(format!("{BUNDLED_CATALOG_FILE} is not bundled")))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Catalog(err.to_string()))?;
        Self::from_toml_str(content)
    }

    /// Serializes the catalog back to a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            games: self.games.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Replaces every game and assigns a fresh revision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if two games share an id; the catalog is
    /// left unchanged in that case.
    pub fn replace_games(&mut self, games: Vec<Game>) -> Result<()> {
        ensure_unique_ids(&games)?;
        self.games = games;
        self.revision = next_revision();
        Ok(())
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games_for_platform<'a>(
        &'a self,
        platform: &'a Platform,
    ) -> impl Iterator<Item = &'a Game> + 'a {
        self.games.iter().filter(move |game| &game.platform == platform)
    }

    /// Groups games into lanes. Lanes without any game are skipped, and so is
    /// any lane repeating the platform of an earlier one, so every game ends
    /// up on at most one card.
    #[must_use]
    pub fn lanes<'a>(&'a self, specs: &'a [LaneSpec]) -> Vec<PlatformLane<'a>> {
        let mut platforms = HashSet::with_capacity(specs.len());
        specs
            .iter()
            .filter_map(|spec| {
                if !platforms.insert(&spec.platform) {
                    tracing::warn!(
                        lane = %spec.id,
                        platform = %spec.platform,
                        "skipping lane with a platform already listed"
                    );
                    return None;
                }
                let games: Vec<&Game> = self.games_for_platform(&spec.platform).collect();
                if games.is_empty() {
                    None
                } else {
                    Some(PlatformLane { spec, games })
                }
            })
            .collect()
    }
}

fn ensure_unique_ids(games: &[Game]) -> Result<()> {
    let mut seen = HashSet::with_capacity(games.len());
    for game in games {
        if !seen.insert(game.id) {
            return Err(Error::Catalog(format!("duplicate game id {}", game.id)));
        }
    }
    Ok(())
}
