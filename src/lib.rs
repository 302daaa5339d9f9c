// SPDX-License-Identifier: MPL-2.0
//! `f2p_showcase` is the navigation core of a free-to-play game showcase.
//!
//! Games are grouped into platform lanes, each game card carries a carousel
//! over its additional images, and a featured lane walks through the images
//! of every game in catalog order. Rendering is left to the caller; this
//! crate owns the data model and the circular navigation state.
//!
//! ```
//! use f2p_showcase::carousel::{Carousel, Message};
//!
//! let mut carousel = Carousel::new(vec!["a", "b", "c"]);
//! carousel.handle(Message::Previous).unwrap();
//! assert_eq!(carousel.current(), Some(&"c"));
//! ```

pub mod card;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod featured;
pub mod flatten;
pub mod showcase;
