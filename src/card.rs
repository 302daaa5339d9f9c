// SPDX-License-Identifier: MPL-2.0
//! Game card with its own carousel over the game's additional images.

use crate::carousel::{Carousel, Message, NavigationInfo};
use crate::domain::Game;
use crate::error::NavigationError;

/// Display model of one game card.
///
/// Each card owns its carousel, so navigating one card never moves another.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    game: Game,
    carousel: Carousel<String>,
}

impl GameCard {
    #[must_use]
    pub fn new(game: Game) -> Self {
        let carousel = Carousel::new(game.additional_images().to_vec());
        Self { game, carousel }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Main card image, special image first.
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.game.display_image()
    }

    /// Platform icon name, or the platform label when there is no icon.
    #[must_use]
    pub fn badge(&self) -> &str {
        self.game.platform.badge()
    }

    /// The carousel section is rendered only when there is something in it.
    #[must_use]
    pub fn has_additional_images(&self) -> bool {
        !self.carousel.is_empty()
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.carousel.current().map(String::as_str)
    }

    /// Alternative text of a carousel slide, e.g. `"Neo Racer Image 1"`.
    #[must_use]
    pub fn image_alt(&self, index: usize) -> String {
        format!("{} Image {}", self.game.name, index + 1)
    }

    /// # Errors
    ///
    /// Propagates the carousel's navigation error.
    pub fn handle(&mut self, message: Message) -> Result<usize, NavigationError> {
        self.carousel.handle(message)
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<String> {
        &self.carousel
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.carousel.navigation_info()
    }
}
