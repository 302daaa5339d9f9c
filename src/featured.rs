// SPDX-License-Identifier: MPL-2.0
//! The featured lane: one carousel over every game's additional images.
//!
//! The flattened sequence is cached against the catalog revision and only
//! re-derived when the catalog changes.

use crate::carousel::{Carousel, Message, NavigationInfo};
use crate::catalog::Catalog;
use crate::error::NavigationError;
use crate::flatten::{flatten_additional_images, LaneImage};

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedLane {
    source_revision: u64,
    carousel: Carousel<LaneImage>,
}

impl FeaturedLane {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            source_revision: catalog.revision(),
            carousel: Carousel::new(flatten_additional_images(catalog.games())),
        }
    }

    /// Re-derives the sequence if `catalog` changed since the last build.
    ///
    /// Returns `true` when a rebuild happened; the cursor then restarts at
    /// the first image.
    pub fn sync(&mut self, catalog: &Catalog) -> bool {
        if catalog.revision() == self.source_revision {
            return false;
        }
        self.carousel
            .replace_items(flatten_additional_images(catalog.games()));
        self.source_revision = catalog.revision();
        tracing::debug!(
            revision = self.source_revision,
            images = self.carousel.len(),
            "featured lane rebuilt"
        );
        true
    }

    /// The lane renders nothing when no game has additional images.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.carousel.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&LaneImage> {
        self.carousel.current()
    }

    /// # Errors
    ///
    /// Propagates the carousel's navigation error.
    pub fn handle(&mut self, message: Message) -> Result<usize, NavigationError> {
        self.carousel.handle(message)
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<LaneImage> {
        &self.carousel
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.carousel.navigation_info()
    }

    #[must_use]
    pub fn source_revision(&self) -> u64 {
        self.source_revision
    }
}
