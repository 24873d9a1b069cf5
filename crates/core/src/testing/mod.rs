//! Testing utilities: a scriptable [`HeroSource`](crate::client::HeroSource)
//! and record fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use hero_browser_core::testing::{fixtures, MockHeroSource};
//!
//! let source = MockHeroSource::new();
//! source.set_heroes(vec![fixtures::hero_record(70, "Batman")]).await;
//!
//! let query = HeroListQuery::new(Arc::new(source), &SearchConfig::default());
//! query.fetch().await;
//! ```

mod mock_source;

pub use mock_source::{MockHeroSource, RecordedFetch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::hero::{
        Alignment, Appearance, Biography, Connections, HeroRecord, Images, PowerStats, Work,
    };

    /// Create a hero record with reasonable defaults.
    ///
    /// Power stats are derived from `id` so distinct heroes differ.
    pub fn hero_record(id: u32, name: &str) -> HeroRecord {
        hero_record_with(id, name, &format!("{} Civilian", name), Some("Marvel Comics"))
    }

    /// Create a hero record with an explicit full name and publisher.
    pub fn hero_record_with(
        id: u32,
        name: &str,
        full_name: &str,
        publisher: Option<&str>,
    ) -> HeroRecord {
        let slug = format!("{}-{}", id, name.to_lowercase().replace(' ', "-"));
        let stat = |offset: u32| ((id + offset) % 101) as i32;

        HeroRecord {
            id,
            name: name.to_string(),
            slug: slug.clone(),
            powerstats: PowerStats {
                intelligence: stat(0),
                strength: stat(11),
                speed: stat(23),
                durability: stat(37),
                power: stat(41),
                combat: stat(59),
            },
            appearance: Appearance {
                gender: "Male".to_string(),
                race: Some("Human".to_string()),
                height: vec!["6'2".to_string(), "188 cm".to_string()],
                weight: vec!["210 lb".to_string(), "95 kg".to_string()],
                eye_color: "Blue".to_string(),
                hair_color: "Black".to_string(),
            },
            biography: Biography {
                full_name: full_name.to_string(),
                alter_egos: "No alter egos found.".to_string(),
                aliases: vec![format!("The {}", name)],
                place_of_birth: "-".to_string(),
                first_appearance: format!("{} #1", name),
                publisher: publisher.map(str::to_string),
                alignment: Alignment::Good,
            },
            work: Work {
                occupation: "Adventurer".to_string(),
                base: "New York".to_string(),
            },
            connections: Connections {
                group_affiliation: "Avengers".to_string(),
                relatives: "-".to_string(),
            },
            images: Images {
                xs: image_url("xs", &slug),
                sm: image_url("sm", &slug),
                md: image_url("md", &slug),
                lg: image_url("lg", &slug),
            },
        }
    }

    /// The JSON object the API would serve for `hero`.
    pub fn hero_json(hero: &HeroRecord) -> serde_json::Value {
        serde_json::to_value(hero).unwrap_or(serde_json::Value::Null)
    }

    fn image_url(size: &str, slug: &str) -> String {
        format!("https://cdn.example.test/api/images/{}/{}.jpg", size, slug)
    }
}
