// SPDX-License-Identifier: MPL-2.0
//! Flattening of per-game additional images into one cross-game sequence.

use crate::domain::{Game, GameId, Platform};

/// One image of the featured lane, tagged with the game it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneImage {
    pub url: String,
    pub game_title: String,
    pub game_platform: Platform,
    pub game_id: GameId,
    /// Position of the image within its game's own list.
    pub image_index: usize,
}

impl LaneImage {
    /// Alternative text, e.g. `"Neo Racer - Image 2"`.
    #[must_use]
    pub fn alt_text(&self) -> String {
        format!("{} - Image {}", self.game_title, self.image_index + 1)
    }
}

/// Flattens the additional images of `games` into a single ordered sequence.
///
/// Games are visited in slice order and each game's images in their own
/// order. Games without additional images contribute nothing.
#[must_use]
pub fn flatten_additional_images(games: &[Game]) -> Vec<LaneImage> {
    games
        .iter()
        .flat_map(|game| {
            game.additional_images()
                .iter()
                .enumerate()
                .map(move |(image_index, url)| LaneImage {
                    url: url.clone(),
                    game_title: game.name.clone(),
                    game_platform: game.platform.clone(),
                    game_id: game.id,
                    image_index,
                })
        })
        .collect()
}
