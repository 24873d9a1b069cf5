use reqwest::Url;

use super::FetchError;

/// Default API root (pinned CDN mirror of akabab/superhero-api).
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/akabab/superhero-api@0.3.0/api/";

/// The two resources served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `all.json`: every hero.
    All,
    /// `id/<id>.json`: a single hero.
    ById(u32),
}

impl Endpoint {
    /// Path relative to the API root.
    pub fn path(&self) -> String {
        match self {
            Endpoint::All => "all.json".to_string(),
            Endpoint::ById(id) => format!("id/{}.json", id),
        }
    }

    /// Absolute URL of this endpoint under `base`.
    pub fn url(&self, base: &Url) -> Result<Url, FetchError> {
        base.join(&self.path())
            .map_err(|e| FetchError::InvalidUrl(format!("{}{}: {}", base, self.path(), e)))
    }
}

/// Parse an API root, making sure it ends with `/` so that joining an
/// endpoint path appends to it instead of replacing the last segment.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    let url =
        Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(format!(
            "{}: cannot be used as a base URL",
            raw
        )));
    }

    Ok(url)
}
