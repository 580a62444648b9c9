//! Search query assembly
//!
//! Builds the results-page request a passing submission navigates to, and
//! the recipe API request the results page is served from.

use url::Url;

use super::form::SearchForm;
use super::recipes::api_endpoint;
use crate::config::SearchConfig;
use crate::error::SearchError;

/// Recipe API parameter for each form field.
const API_PARAMS: [(&str, &str); 7] = [
    ("need_to_have", "includeIngredients"),
    ("max_time", "maxReadyTime"),
    ("can_not_have", "excludeIngredients"),
    ("intolerances", "intolerances"),
    ("diet", "diet"),
    ("cuisine", "cuisine"),
    ("type_food", "type"),
];

/// A submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    form: SearchForm,
}

impl SearchQuery {
    pub fn from_form(form: &SearchForm) -> Self {
        Self { form: form.clone() }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    /// GET submission of the search form, with every field present.
    pub fn results_url(&self, config: &SearchConfig) -> Result<Url, SearchError> {
        let mut url = Url::parse(&config.site_url)?.join(&config.results_path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for name in SearchForm::FIELDS {
                pairs.append_pair(name, self.form.field(name).unwrap_or_default());
            }
        }
        Ok(url)
    }

    /// Recipe API complex search request. Empty fields are left out.
    pub fn upstream_url(&self, config: &SearchConfig) -> Result<Url, SearchError> {
        let mut url = api_endpoint(config, "complexSearch")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("number", &config.result_count.to_string());
            pairs.append_pair("instructionsRequired", "true");

            for (field, param) in API_PARAMS {
                match self.form.field(field) {
                    Some(value) if !value.is_empty() => {
                        pairs.append_pair(param, value);
                    }
                    _ => {}
                }
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(need_to_have: &str, max_time: &str) -> SearchQuery {
        SearchQuery::from_form(&SearchForm {
            need_to_have: need_to_have.to_string(),
            max_time: max_time.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_results_url_includes_every_field() {
        let url = query("chicken, rice", "").results_url(&SearchConfig::default()).unwrap();

        assert_eq!(url.path(), "/recipe/search/results");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 7);
        assert_eq!(pairs[0], ("need_to_have".to_string(), "chicken, rice".to_string()));
        assert_eq!(pairs[1], ("max_time".to_string(), String::new()));
    }

    #[test]
    fn test_upstream_url_skips_empty_fields() {
        let url = query("eggs", "30").upstream_url(&SearchConfig::default()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.spoonacular.com/recipes/complexSearch\
             ?number=21&instructionsRequired=true&includeIngredients=eggs&maxReadyTime=30"
        );
    }

    #[test]
    fn test_upstream_url_maps_type_and_api_key() {
        let config = SearchConfig {
            api_key: "k3y".to_string(),
            ..Default::default()
        };
        let form = SearchForm {
            type_food: "dessert".to_string(),
            can_not_have: "nuts".to_string(),
            ..Default::default()
        };
        let url = SearchQuery::from_form(&form).upstream_url(&config).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs[0], ("apiKey".to_string(), "k3y".to_string()));
        assert!(pairs.contains(&("excludeIngredients".to_string(), "nuts".to_string())));
        assert!(pairs.contains(&("type".to_string(), "dessert".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "includeIngredients"));
    }

    #[test]
    fn test_bad_site_url_is_an_error() {
        let config = SearchConfig {
            site_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = query("eggs", "").results_url(&config).unwrap_err();
        assert!(matches!(err, SearchError::InvalidUrl(_)));
    }
}
