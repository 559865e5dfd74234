//! Request construction for the Places web service
//!
//! Builds the autocomplete and details URLs: the settled input (or place
//! id), the API key, then every caller-supplied parameter merged in
//! verbatim, in caller order.

use url::Url;

use crate::error::GeocompleteError;

/// Places Autocomplete endpoint
const AUTOCOMPLETE_URL: &str = "https://maps.googleapis.com/maps/api/place/autocomplete/json";

/// Places Details endpoint
const DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Build the autocomplete request URL for a settled input value
pub fn autocomplete_url(
    input: &str,
    api_key: &str,
    extra_params: &[(String, String)],
) -> Result<Url, GeocompleteError> {
    build_url(AUTOCOMPLETE_URL, &[("input", input), ("key", api_key)], extra_params)
}

/// Build the details request URL for a selected place id
pub fn details_url(
    place_id: &str,
    api_key: &str,
    extra_params: &[(String, String)],
) -> Result<Url, GeocompleteError> {
    build_url(DETAILS_URL, &[("place_id", place_id), ("key", api_key)], extra_params)
}

fn build_url(
    endpoint: &str,
    required: &[(&str, &str)],
    extra_params: &[(String, String)],
) -> Result<Url, GeocompleteError> {
    let mut url =
        Url::parse(endpoint).map_err(|e| GeocompleteError::InvalidConfig(e.to_string()))?;

    {
        let mut query = url.query_pairs_mut();
        for (name, value) in required {
            query.append_pair(name, value);
        }
        // Caller parameters are appended verbatim, after the required pairs
        for (name, value) in extra_params {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
