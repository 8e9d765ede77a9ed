//! # Catalogs
//!
//! Static festival and tone lists. Both are fixed at compile time and never
//! edited by the user.

/// Catalog value that means "the user types the occasion themselves".
pub const OTHER_FESTIVAL: &str = "Other";

/// Tone used when the user doesn't pick one. Prompts omit the tone clause for it.
pub const DEFAULT_TONE: &str = "Warm & Personal";

/// Generic stock image shown when a festival's own image is unusable.
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1534081333815-ae5019106622?w=500&h=280&fit=crop&crop=center&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Festival {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

impl Festival {
    pub fn is_other(&self) -> bool {
        self.value == OTHER_FESTIVAL
    }

    /// The image reference to display, falling back to the stock image when
    /// the entry's own reference is empty or not something we can load.
    pub fn image_or_fallback(&self) -> &'static str {
        let url = self.image_url.trim();
        let loadable = url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/');
        if url.is_empty() || !loadable {
            FALLBACK_IMAGE_URL
        } else {
            self.image_url
        }
    }
}

pub const FESTIVALS: &[Festival] = &[
    Festival {
        value: "Diwali",
        label: "Diwali",
        icon: "🪔",
        description: "Festival of Lights",
        image_url: "/diwali.jpg",
    },
    Festival {
        value: "Christmas",
        label: "Christmas",
        icon: "🎄",
        description: "Season of Joy",
        image_url: "https://images.unsplash.com/photo-1482517967863-00e15c9b44be?w=500&h=280&fit=crop&crop=center&q=80",
    },
    Festival {
        value: "New Year",
        label: "New Year",
        icon: "🎊",
        description: "New Beginnings",
        image_url: "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=500&h=280&fit=crop&crop=center&q=80",
    },
    Festival {
        value: "Eid",
        label: "Eid",
        icon: "🌙",
        description: "Blessed Celebration",
        image_url: "https://images.unsplash.com/photo-1591604129939-f1efa4d9f7fa?w=500&h=280&fit=crop&crop=center&q=80",
    },
    Festival {
        value: "Holi",
        label: "Holi",
        icon: "🎨",
        description: "Festival of Colors",
        image_url: "/holi.jpg",
    },
    Festival {
        value: OTHER_FESTIVAL,
        label: "Other",
        icon: "🎉",
        description: "Special Occasion",
        image_url: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=500&h=280&fit=crop&crop=center&q=80",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub value: &'static str,
    pub icon: &'static str,
}

pub const TONES: &[Tone] = &[
    Tone { value: DEFAULT_TONE, icon: "💝" },
    Tone { value: "Formal & Professional", icon: "🏢" },
    Tone { value: "Fun & Lighthearted", icon: "😊" },
    Tone { value: "Spiritual & Reflective", icon: "🙏" },
];

/// Looks up a festival by its catalog value.
pub fn festival(value: &str) -> Option<&'static Festival> {
    FESTIVALS.iter().find(|f| f.value == value)
}

/// Position of a festival in the catalog (used by the picker row).
pub fn festival_index(value: &str) -> Option<usize> {
    FESTIVALS.iter().position(|f| f.value == value)
}

pub fn tone_index(value: &str) -> Option<usize> {
    TONES.iter().position(|t| t.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(FESTIVALS.len(), 6);
        assert_eq!(TONES.len(), 4);
    }

    #[test]
    fn test_other_is_last_and_flagged() {
        let last = FESTIVALS.last().unwrap();
        assert!(last.is_other());
        assert_eq!(FESTIVALS.iter().filter(|f| f.is_other()).count(), 1);
    }

    #[test]
    fn test_default_tone_is_first() {
        assert_eq!(TONES[0].value, DEFAULT_TONE);
        assert_eq!(tone_index(DEFAULT_TONE), Some(0));
    }

    #[test]
    fn test_festival_lookup() {
        assert_eq!(festival("Christmas").map(|f| f.description), Some("Season of Joy"));
        assert_eq!(festival_index("Holi"), Some(4));
        assert!(festival("Halloween").is_none());
    }

    #[test]
    fn test_image_fallback() {
        let diwali = festival("Diwali").unwrap();
        assert_eq!(diwali.image_or_fallback(), "/diwali.jpg");

        let broken = Festival { image_url: "", ..*diwali };
        assert_eq!(broken.image_or_fallback(), FALLBACK_IMAGE_URL);

        let weird = Festival { image_url: "data:garbage", ..*diwali };
        assert_eq!(weird.image_or_fallback(), FALLBACK_IMAGE_URL);
    }
}
