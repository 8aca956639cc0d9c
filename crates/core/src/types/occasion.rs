//! Occasion categories used to tag and filter bouquets.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown occasion slug.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown occasion: {0}")]
pub struct UnknownOccasion(pub String);

/// The fixed set of occasions a bouquet can be made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Birthday,
    Wedding,
    Anniversary,
    Sympathy,
    Romantic,
}

impl Occasion {
    /// Every occasion, in the order the catalog presents them.
    pub const ALL: [Self; 5] = [
        Self::Birthday,
        Self::Wedding,
        Self::Anniversary,
        Self::Sympathy,
        Self::Romantic,
    ];

    /// URL slug, also the serialized form.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Wedding => "wedding",
            Self::Anniversary => "anniversary",
            Self::Sympathy => "sympathy",
            Self::Romantic => "romantic",
        }
    }

    /// Human-readable label shown on the filter buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Birthday => "День рождения",
            Self::Wedding => "Свадьба",
            Self::Anniversary => "Годовщина",
            Self::Sympathy => "Соболезнования",
            Self::Romantic => "Романтика",
        }
    }

    /// Icon name for the filter button.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Birthday => "cake",
            Self::Wedding => "heart",
            Self::Anniversary => "gift",
            Self::Sympathy => "cloud-rain",
            Self::Romantic => "sparkles",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Occasion {
    type Err = UnknownOccasion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.slug() == s)
            .ok_or_else(|| UnknownOccasion(s.to_string()))
    }
}

/// The catalog's occasion selector: everything, or a single occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OccasionFilter {
    #[default]
    All,
    Only(Occasion),
}

impl OccasionFilter {
    /// Slug of the "everything" filter.
    pub const ALL_SLUG: &'static str = "all";

    /// Whether a product tagged with `occasion` passes this filter.
    #[must_use]
    pub fn matches(self, occasion: Occasion) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == occasion,
        }
    }

    /// URL slug for this filter.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => Self::ALL_SLUG,
            Self::Only(occasion) => occasion.slug(),
        }
    }

    /// Label shown on the filter button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Все букеты",
            Self::Only(occasion) => occasion.label(),
        }
    }

    /// Icon name shown on the filter button.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "flower",
            Self::Only(occasion) => occasion.icon(),
        }
    }

    /// The selector options: "all" first, then every occasion.
    pub fn options() -> impl Iterator<Item = Self> {
        core::iter::once(Self::All).chain(Occasion::ALL.into_iter().map(Self::Only))
    }
}

impl From<Occasion> for OccasionFilter {
    fn from(occasion: Occasion) -> Self {
        Self::Only(occasion)
    }
}

impl fmt::Display for OccasionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for OccasionFilter {
    type Err = UnknownOccasion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SLUG {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl Serialize for OccasionFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for OccasionFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        slug.parse().map_err(serde::de::Error::custom)
    }
}
