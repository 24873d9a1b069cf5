//! Record shapes mirroring the superhero API JSON schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hero as returned by both `all.json` and `id/<id>.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroRecord {
    /// Stable identifier shared by the list and by-id endpoints.
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub powerstats: PowerStats,
    pub appearance: Appearance,
    pub biography: Biography,
    pub work: Work,
    pub connections: Connections,
    pub images: Images,
}

/// Power statistics, nominally on a 0-100 scale.
///
/// The upstream data does not enforce the bound, so values are kept as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PowerStats {
    pub intelligence: i32,
    pub strength: i32,
    pub speed: i32,
    pub durability: i32,
    pub power: i32,
    pub combat: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub gender: String,
    /// `null` upstream for heroes with no recorded race.
    #[serde(default)]
    pub race: Option<String>,
    /// Imperial first, metric second (e.g. `["6'8", "203 cm"]`).
    pub height: Vec<String>,
    pub weight: Vec<String>,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub full_name: String,
    pub alter_egos: String,
    pub aliases: Vec<String>,
    pub place_of_birth: String,
    pub first_appearance: String,
    #[serde(default)]
    pub publisher: Option<String>,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Work {
    pub occupation: String,
    pub base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connections {
    pub group_affiliation: String,
    pub relatives: String,
}

/// Portrait URLs at increasing resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Images {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// Moral alignment of a hero.
///
/// The API sends free text: `"good"`, `"bad"`, and `"-"` for neutral or
/// unknown. Anything that is not good or bad is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Alignment {
    Good,
    Bad,
    Other(String),
}

impl Alignment {
    pub fn as_str(&self) -> &str {
        match self {
            Alignment::Good => "good",
            Alignment::Bad => "bad",
            Alignment::Other(text) => text,
        }
    }
}

impl From<String> for Alignment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "good" => Alignment::Good,
            "bad" => Alignment::Bad,
            _ => Alignment::Other(value),
        }
    }
}

impl From<&str> for Alignment {
    fn from(value: &str) -> Self {
        Alignment::from(value.to_string())
    }
}

impl From<Alignment> for String {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
