// SPDX-License-Identifier: MPL-2.0
//! Page model of the showcase: genre header, featured lane and one lane of
//! game cards per platform.
//!
//! The presentation layer renders from this model and routes click events
//! back through [`Showcase::card_mut`] or [`Showcase::featured_mut`].

use crate::card::GameCard;
use crate::catalog::Catalog;
use crate::domain::{default_genres, Game, GameId, Genre, LaneSpec};
use crate::error::Result;
use crate::featured::FeaturedLane;

/// One rendered platform lane.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneView {
    pub spec: LaneSpec,
    pub cards: Vec<GameCard>,
}

#[derive(Debug, Clone)]
pub struct Showcase {
    catalog: Catalog,
    lane_specs: Vec<LaneSpec>,
    genres: Vec<Genre>,
    lanes: Vec<LaneView>,
    featured: FeaturedLane,
}

impl Showcase {
    #[must_use]
    pub fn new(catalog: Catalog, lane_specs: Vec<LaneSpec>) -> Self {
        let lanes = build_lanes(&catalog, &lane_specs);
        let featured = FeaturedLane::from_catalog(&catalog);
        Self {
            catalog,
            lane_specs,
            genres: default_genres(),
            lanes,
            featured,
        }
    }

    /// Swaps the catalog contents, rebuilding cards and the featured lane.
    ///
    /// # Errors
    ///
    /// Returns the catalog's validation error; nothing changes in that case.
    pub fn replace_catalog(&mut self, games: Vec<Game>) -> Result<()> {
        self.catalog.replace_games(games)?;
        self.lanes = build_lanes(&self.catalog, &self.lane_specs);
        self.featured.sync(&self.catalog);
        tracing::info!(
            games = self.catalog.len(),
            lanes = self.lanes.len(),
            "showcase catalog replaced"
        );
        Ok(())
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Non-empty platform lanes in configured order.
    #[must_use]
    pub fn lanes(&self) -> &[LaneView] {
        &self.lanes
    }

    #[must_use]
    pub fn featured(&self) -> &FeaturedLane {
        &self.featured
    }

    pub fn featured_mut(&mut self) -> &mut FeaturedLane {
        &mut self.featured
    }

    /// Finds the card of `id` in whichever lane lists it.
    pub fn card_mut(&mut self, id: GameId) -> Option<&mut GameCard> {
        self.lanes
            .iter_mut()
            .flat_map(|lane| lane.cards.iter_mut())
            .find(|card| card.game().id == id)
    }

    #[must_use]
    pub fn card(&self, id: GameId) -> Option<&GameCard> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.cards.iter())
            .find(|card| card.game().id == id)
    }
}

fn build_lanes(catalog: &Catalog, specs: &[LaneSpec]) -> Vec<LaneView> {
    catalog
        .lanes(specs)
        .into_iter()
        .map(|lane| LaneView {
            spec: lane.spec.clone(),
            cards: lane
                .games
                .into_iter()
                .map(|game| GameCard::new(game.clone()))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Message;
    use crate::domain::{default_lanes, LaneSpeed, Platform};

    fn showcase() -> Showcase {
        let catalog = Catalog::new(vec![
            Game::new(1, "Starforge Alpha", "PC", "a.png").with_additional_images(["a1", "a2"]),
            Game::new(2, "Neo Racer", "PC", "b.png").with_additional_images(["b1", "b2"]),
            Game::new(3, "Battle Grid", "Xbox", "c.png").with_additional_images(["c1"]),
        ]);
        Showcase::new(catalog, default_lanes())
    }

    #[test]
    fn builds_only_populated_lanes() {
        let page = showcase();
        let labels: Vec<&str> = page.lanes().iter().map(|l| l.spec.label()).collect();
        assert_eq!(labels, vec!["PC", "Xbox"]);
        assert_eq!(page.lanes()[0].cards.len(), 2);
        assert_eq!(page.genres().len(), 10);
    }

    #[test]
    fn card_events_are_routed_to_one_card() {
        let mut page = showcase();
        let card = page.card_mut(GameId(2)).expect("card exists");
        assert_eq!(card.handle(Message::Next), Ok(1));

        assert_eq!(
            page.card(GameId(2)).and_then(GameCard::current_image),
            Some("b2")
        );
        assert_eq!(
            page.card(GameId(1)).and_then(GameCard::current_image),
            Some("a1")
        );
        assert_eq!(page.featured().carousel().current_index(), Some(0));
    }

    #[test]
    fn each_game_gets_a_single_card_despite_repeated_lanes() {
        let catalog = Catalog::new(vec![
            Game::new(1, "Starforge Alpha", "PC", "a.png").with_additional_images(["a1", "a2"]),
        ]);
        let specs = vec![
            LaneSpec::new("a", Platform::Pc, LaneSpeed::Slow),
            LaneSpec::new("b", Platform::Pc, LaneSpeed::Medium),
        ];
        let mut page = Showcase::new(catalog, specs);

        let cards: usize = page.lanes().iter().map(|lane| lane.cards.len()).sum();
        assert_eq!(cards, 1);

        page.card_mut(GameId(1))
            .expect("card exists")
            .handle(Message::Next)
            .expect("two images");
        let shown: Vec<Option<&str>> = page
            .lanes()
            .iter()
            .flat_map(|lane| lane.cards.iter())
            .map(GameCard::current_image)
            .collect();
        assert_eq!(shown, vec![Some("a2")]);
    }

    #[test]
    fn unknown_card_is_none() {
        let mut page = showcase();
        assert!(page.card_mut(GameId(99)).is_none());
    }

    #[test]
    fn featured_lane_is_independent_of_cards() {
        let mut page = showcase();
        page.featured_mut()
            .handle(Message::GoTo(4))
            .expect("five images in lane");
        assert_eq!(
            page.featured().current().map(|img| img.game_title.as_str()),
            Some("Battle Grid")
        );
        assert_eq!(
            page.card(GameId(3)).and_then(|c| c.carousel().current_index()),
            Some(0)
        );
    }

    #[test]
    fn replace_catalog_rebuilds_everything() {
        let mut page = showcase();
        let old_revision = page.catalog().revision();
        page.featured_mut().handle(Message::Next).expect("non-empty");
        page.replace_catalog(vec![
            Game::new(7, "Pocket Royale", "Mobile", "m.png").with_additional_images(["m1"]),
        ])
        .expect("unique ids");

        assert_ne!(page.catalog().revision(), old_revision);
        assert_eq!(page.featured().source_revision(), page.catalog().revision());
        assert_eq!(page.lanes().len(), 1);
        assert_eq!(page.lanes()[0].spec.label(), "Mobile");
        assert_eq!(page.featured().carousel().len(), 1);
        assert_eq!(page.featured().carousel().current_index(), Some(0));
    }
}
