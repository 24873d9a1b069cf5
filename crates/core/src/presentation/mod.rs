//! View-facing projections of [`HeroRecord`].
//!
//! Both shapes are pure functions of a record: build them with `From`, never
//! mutate them afterwards.

use serde::Serialize;

use crate::hero::{Alignment, HeroRecord};

/// Race shown when the API has none on record.
pub const UNKNOWN_RACE: &str = "Unknown";

/// One row of the hero list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroListItem {
    pub id: u32,
    pub name: String,
    pub full_name: String,
    pub race: String,
    pub publisher: Option<String>,
    pub alignment: Alignment,
    /// Small (`sm`) portrait.
    pub image_url: String,
    pub intelligence: i32,
    pub strength: i32,
    pub speed: i32,
}

impl From<&HeroRecord> for HeroListItem {
    fn from(hero: &HeroRecord) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
            full_name: hero.biography.full_name.clone(),
            race: race_or_unknown(hero),
            publisher: hero.biography.publisher.clone(),
            alignment: hero.biography.alignment.clone(),
            image_url: hero.images.sm.clone(),
            intelligence: hero.powerstats.intelligence,
            strength: hero.powerstats.strength,
            speed: hero.powerstats.speed,
        }
    }
}

/// Everything the detail screen shows for one hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroDetailItem {
    pub id: u32,
    pub name: String,
    pub slug: String,

    pub full_name: String,
    pub alter_egos: String,
    pub aliases: Vec<String>,
    pub place_of_birth: String,
    pub first_appearance: String,
    pub publisher: Option<String>,
    pub alignment: Alignment,

    pub intelligence: i32,
    pub strength: i32,
    pub speed: i32,
    pub durability: i32,
    pub power: i32,
    pub combat: i32,

    pub gender: String,
    pub race: String,
    pub height: Vec<String>,
    pub weight: Vec<String>,
    pub eye_color: String,
    pub hair_color: String,

    pub occupation: String,
    pub base: String,

    pub group_affiliation: String,
    pub relatives: String,

    /// Small (`sm`) portrait.
    pub image_url: String,
    /// Displayed as the large portrait, but carries the medium (`md`) URL.
    pub large_image_url: String,
}

impl From<&HeroRecord> for HeroDetailItem {
    fn from(hero: &HeroRecord) -> Self {
        let bio = &hero.biography;
        let stats = &hero.powerstats;
        let looks = &hero.appearance;

        Self {
            id: hero.id,
            name: hero.name.clone(),
            slug: hero.slug.clone(),

            full_name: bio.full_name.clone(),
            alter_egos: bio.alter_egos.clone(),
            aliases: bio.aliases.clone(),
            place_of_birth: bio.place_of_birth.clone(),
            first_appearance: bio.first_appearance.clone(),
            publisher: bio.publisher.clone(),
            alignment: bio.alignment.clone(),

            intelligence: stats.intelligence,
            strength: stats.strength,
            speed: stats.speed,
            durability: stats.durability,
            power: stats.power,
            combat: stats.combat,

            gender: looks.gender.clone(),
            race: race_or_unknown(hero),
            height: looks.height.clone(),
            weight: looks.weight.clone(),
            eye_color: looks.eye_color.clone(),
            hair_color: looks.hair_color.clone(),

            occupation: hero.work.occupation.clone(),
            base: hero.work.base.clone(),

            group_affiliation: hero.connections.group_affiliation.clone(),
            relatives: hero.connections.relatives.clone(),

            image_url: hero.images.sm.clone(),
            large_image_url: hero.images.md.clone(),
        }
    }
}

fn race_or_unknown(hero: &HeroRecord) -> String {
    hero.appearance
        .race
        .clone()
        .unwrap_or_else(|| UNKNOWN_RACE.to_string())
}
