pub mod client;
pub mod config;
pub mod hero;
pub mod logging;
pub mod presentation;
pub mod query;
pub mod testing;

pub use client::{Endpoint, FetchError, HeroSource, HttpHeroClient, DEFAULT_BASE_URL};
pub use config::{
    load_config, load_config_from_str, validate_config, ApiConfig, Config, ConfigError,
    LogFormat, LoggingConfig, SearchConfig,
};
pub use hero::{
    Alignment, Appearance, Biography, Connections, HeroRecord, Images, PowerStats, Work,
};
pub use logging::init_logging;
pub use presentation::{HeroDetailItem, HeroListItem, UNKNOWN_RACE};
pub use query::{HeroDetailQuery, HeroDetailState, HeroListQuery, HeroListState, LoadState};
