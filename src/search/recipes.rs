//! Recipe API requests outside the search form
//!
//! The home page's random recipes, a recipe's details and its similar
//! recipes, plus turning the details' instruction markup into plain text.

use scraper::Html;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Shown when a recipe comes back without instructions.
pub const MISSING_INSTRUCTIONS: &str = "we couldn't find instructions for this recipe :(";

/// Endpoint under the API base, carrying the API key when one is configured.
pub(crate) fn api_endpoint(config: &SearchConfig, path: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(&config.api_base)?.join(path)?;
    if !config.api_key.is_empty() {
        url.query_pairs_mut().append_pair("apiKey", &config.api_key);
    }
    Ok(url)
}

/// Random recipes for the home page.
pub fn random_url(config: &SearchConfig) -> Result<Url, SearchError> {
    let mut url = api_endpoint(config, "random")?;
    url.query_pairs_mut()
        .append_pair("number", &config.random_count.to_string());
    Ok(url)
}

/// Full information for one recipe.
pub fn recipe_info_url(config: &SearchConfig, recipe_id: u64) -> Result<Url, SearchError> {
    api_endpoint(config, &format!("{}/information", recipe_id))
}

/// Recipes similar to one recipe.
pub fn similar_url(config: &SearchConfig, recipe_id: u64) -> Result<Url, SearchError> {
    let mut url = api_endpoint(config, &format!("{}/similar", recipe_id))?;
    url.query_pairs_mut()
        .append_pair("number", &config.similar_count.to_string());
    Ok(url)
}

/// Plain text of a recipe's instruction markup.
///
/// Each text node is trimmed and its line breaks become spaces; nodes are
/// joined with a single space. Missing or blank instructions give
/// [`MISSING_INSTRUCTIONS`].
pub fn clean_instructions(html: Option<&str>) -> String {
    let Some(html) = html.filter(|h| !h.trim().is_empty()) else {
        return MISSING_INSTRUCTIONS.to_string();
    };

    let fragment = Html::parse_fragment(html);
    let text = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.replace('\n', " "))
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        MISSING_INSTRUCTIONS.to_string()
    } else {
        text
    }
}
