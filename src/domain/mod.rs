// SPDX-License-Identifier: MPL-2.0
//! Domain layer - catalog records and page structure.
//!
//! These are plain value types describing what the showcase displays. They
//! carry serde derives so the catalog and configuration files can be read
//! directly into them; no navigation state lives here.
//!
//! # Modules
//!
//! - [`game`]: Catalog records ([`Game`](game::Game), [`GameId`](game::GameId),
//!   [`Platform`](game::Platform))
//! - [`lane`]: Page structure ([`LaneSpec`](lane::LaneSpec),
//!   [`LaneSpeed`](lane::LaneSpeed), [`Genre`](lane::Genre))

pub mod game;
pub mod lane;

pub use game::{Game, GameId, Platform, PlatformIcon};
pub use lane::{default_genres, default_lanes, Genre, LaneSpec, LaneSpeed};
