// SPDX-License-Identifier: MPL-2.0
//! Catalog records.
//!
//! A [`Game`] is the parent entity of the image flattener: it owns a main
//! image, an optional "special" replacement image and an ordered list of
//! additional images shown in its carousel.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// GameId
// =============================================================================

/// Stable identifier of a game within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl GameId {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Icon names for the platforms that have a dedicated glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformIcon {
    Windows,
    PlayStation,
    Xbox,
    Mobile,
}

impl PlatformIcon {
    /// Returns the icon identifier handed to the icon renderer.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PlatformIcon::Windows => "windows",
            PlatformIcon::PlayStation => "playstation",
            PlatformIcon::Xbox => "xbox",
            PlatformIcon::Mobile => "mobile",
        }
    }
}

/// Platform/category label a game is listed under.
///
/// Serialized as its display label; unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Pc,
    PlayStation,
    Xbox,
    Mobile,
    Other(String),
}

impl Platform {
    /// Returns the display label ("PC", "PlayStation", ...).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Platform::Pc => "PC",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Mobile => "Mobile",
            Platform::Other(label) => label,
        }
    }

    /// Returns the dedicated icon, if the platform has one.
    #[must_use]
    pub fn icon(&self) -> Option<PlatformIcon> {
        match self {
            Platform::Pc => Some(PlatformIcon::Windows),
            Platform::PlayStation => Some(PlatformIcon::PlayStation),
            Platform::Xbox => Some(PlatformIcon::Xbox),
            Platform::Mobile => Some(PlatformIcon::Mobile),
            Platform::Other(_) => None,
        }
    }

    /// Returns what the card badge shows: the icon name, or the label text
    /// for platforms without an icon.
    #[must_use]
    pub fn badge(&self) -> &str {
        match self.icon() {
            Some(icon) => icon.name(),
            None => self.label(),
        }
    }
}

impl From<String> for Platform {
    fn from(label: String) -> Self {
        match label.as_str() {
            "PC" => Platform::Pc,
            "PlayStation" => Platform::PlayStation,
            "Xbox" => Platform::Xbox,
            "Mobile" => Platform::Mobile,
            _ => Platform::Other(label),
        }
    }
}

impl From<&str> for Platform {
    fn from(label: &str) -> Self {
        Platform::from(label.to_string())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Game
// =============================================================================

/// One catalog entry. Image references are opaque strings (usually URLs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub platform: Platform,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_image: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
}

impl Game {
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        platform: impl Into<Platform>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: GameId(id),
            name: name.into(),
            platform: platform.into(),
            image: image.into(),
            special_image: None,
            additional_images: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_special_image(mut self, image: impl Into<String>) -> Self {
        self.special_image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_additional_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_images = images.into_iter().map(Into::into).collect();
        self
    }

    /// The image shown on the card: the special image when present,
    /// otherwise the main image.
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.special_image.as_deref().unwrap_or(&self.image)
    }

    #[must_use]
    pub fn has_special_image(&self) -> bool {
        self.special_image.is_some()
    }

    #[must_use]
    pub fn additional_images(&self) -> &[String] {
        &self.additional_images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse_to_known_platforms() {
        assert_eq!(Platform::from("PC"), Platform::Pc);
        assert_eq!(Platform::from("PlayStation"), Platform::PlayStation);
        assert_eq!(Platform::from("Xbox"), Platform::Xbox);
        assert_eq!(Platform::from("Mobile"), Platform::Mobile);
    }

    #[test]
    fn unknown_label_is_kept_verbatim() {
        let platform = Platform::from("Switch");
        assert_eq!(platform, Platform::Other("Switch".into()));
        assert_eq!(platform.label(), "Switch");
        assert_eq!(String::from(platform), "Switch");
    }

    #[test]
    fn badge_prefers_icon_and_falls_back_to_label() {
        assert_eq!(Platform::Pc.badge(), "windows");
        assert_eq!(Platform::Mobile.badge(), "mobile");
        assert_eq!(Platform::from("Switch").badge(), "Switch");
    }

    #[test]
    fn display_image_prefers_special_image() {
        let plain = Game::new(1, "Neo Racer", "PC", "main.png");
        assert_eq!(plain.display_image(), "main.png");
        assert!(!plain.has_special_image());

        let special = plain.with_special_image("special.png");
        assert_eq!(special.display_image(), "special.png");
        assert!(special.has_special_image());
    }

    #[test]
    fn game_deserializes_with_missing_optional_fields() {
        let game: Game = toml::from_str(
            r#"
                id = 4
                name = "Skyward Bound"
                platform = "PlayStation"
                image = "main.png"
            "#,
        )
        .expect("valid game record");
        assert_eq!(game.id, GameId(4));
        assert_eq!(game.platform, Platform::PlayStation);
        assert!(game.special_image.is_none());
        assert!(game.additional_images().is_empty());
    }

    #[test]
    fn game_id_displays_inner_value() {
        assert_eq!(GameId(42).to_string(), "42");
        assert_eq!(GameId(42).value(), 42);
    }
}
