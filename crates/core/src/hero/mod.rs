//! Hero records as served by the superhero API.

mod types;

pub use types::*;
