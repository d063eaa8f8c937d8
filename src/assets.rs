//! Image handles and selectable characters
//!
//! The simulation only ever sees [`ImageKey`]; resolving a key to a loaded
//! raster is the renderer's job.

use serde::{Deserialize, Serialize};

/// Opaque handle to a raster asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageKey {
    Dragon,
    Horse,
    Pipe,
    FinishLine,
    Ground,
    Heart,
}

impl ImageKey {
    pub const ALL: [ImageKey; 6] = [
        ImageKey::Dragon,
        ImageKey::Horse,
        ImageKey::Pipe,
        ImageKey::FinishLine,
        ImageKey::Ground,
        ImageKey::Heart,
    ];

    /// Source URL handed to the browser image loader
    pub fn url(&self) -> &'static str {
        match self {
            ImageKey::Dragon => "https://cdn.shopify.com/s/files/1/0632/2939/5192/files/test2.png",
            ImageKey::Horse => "https://cdn.shopify.com/s/files/1/0632/2939/5192/files/wwwr.png",
            ImageKey::Pipe => "http://s2js.com/img/etc/flappypipe.png",
            ImageKey::FinishLine => "http://s2js.com/img/etc/flappyend.png",
            ImageKey::Ground => "http://s2js.com/img/etc/flappybottom.png",
            ImageKey::Heart => "https://cdn-icons-png.flaticon.com/512/833/833472.png",
        }
    }
}

/// Player character picked from the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Character {
    Dragon,
    Horse,
}

impl Character {
    pub fn image(&self) -> ImageKey {
        match self {
            Character::Dragon => ImageKey::Dragon,
            Character::Horse => ImageKey::Horse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Character::Dragon => "dragon",
            Character::Horse => "horse",
        }
    }

    /// Parse a DOM button id
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dragon" => Some(Character::Dragon),
            "horse" => Some(Character::Horse),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_round_trip_names() {
        for c in [Character::Dragon, Character::Horse] {
            assert_eq!(Character::from_str(c.as_str()), Some(c));
        }
        assert_eq!(Character::from_str("HORSE"), Some(Character::Horse));
        assert_eq!(Character::from_str("unicorn"), None);
    }

    #[test]
    fn test_characters_have_distinct_images() {
        assert_ne!(Character::Dragon.image(), Character::Horse.image());
        assert_ne!(
            Character::Dragon.image().url(),
            Character::Horse.image().url()
        );
    }
}
