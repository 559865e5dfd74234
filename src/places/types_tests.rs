//! Tests for Places API wire-format deserialization

use super::*;

const LAGOS_RESPONSE: &str = r#"{
    "predictions": [
        {
            "description": "Lagos, Nigeria",
            "place_id": "p1",
            "matched_substrings": [{"offset": 0, "length": 5}],
            "structured_formatting": {
                "main_text": "Lagos",
                "main_text_matched_substrings": [{"offset": 0, "length": 5}],
                "secondary_text": "Nigeria"
            },
            "types": ["locality", "political"]
        }
    ],
    "status": "OK"
}"#;

#[test]
fn test_parse_autocomplete_response() {
    let response: AutocompleteResponse = serde_json::from_str(LAGOS_RESPONSE).unwrap();
    assert_eq!(response.status, "OK");
    assert_eq!(response.predictions.len(), 1);

    let suggestion = &response.predictions[0];
    assert_eq!(suggestion.description, "Lagos, Nigeria");
    assert_eq!(suggestion.place_id, "p1");
    assert_eq!(
        suggestion.matched_substrings,
        vec![MatchedSubstring {
            offset: 0,
            length: 5
        }]
    );
}

#[test]
fn test_parse_minimal_prediction() {
    // A minimal prediction carries only description and place_id
    let json = r#"{"predictions":[{"description":"Lagos, Nigeria","place_id":"p1"}]}"#;
    let response: AutocompleteResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.predictions.len(), 1);
    assert_eq!(response.predictions[0].description, "Lagos, Nigeria");
    assert!(response.predictions[0].matched_substrings.is_empty());
    assert!(response.predictions[0].structured_formatting.is_none());
}

#[test]
fn test_parse_empty_predictions() {
    let json = r#"{"predictions": [], "status": "ZERO_RESULTS"}"#;
    let response: AutocompleteResponse = serde_json::from_str(json).unwrap();
    assert!(response.predictions.is_empty());
    assert_eq!(response.status, "ZERO_RESULTS");
}

#[test]
fn test_missing_predictions_defaults_to_empty() {
    let json = r#"{"status": "REQUEST_DENIED"}"#;
    let response: AutocompleteResponse = serde_json::from_str(json).unwrap();
    assert!(response.predictions.is_empty());
}

#[test]
fn test_unknown_fields_ignored() {
    let json = r#"{
        "predictions": [
            {"description": "Paris, France", "place_id": "p2", "reference": "legacy", "terms": []}
        ]
    }"#;
    let response: AutocompleteResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.predictions[0].description, "Paris, France");
}

#[test]
fn test_primary_text_prefers_structured_formatting() {
    let response: AutocompleteResponse = serde_json::from_str(LAGOS_RESPONSE).unwrap();
    let (text, spans) = response.predictions[0].primary_text();
    assert_eq!(text, "Lagos");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].length, 5);
}

#[test]
fn test_primary_text_falls_back_to_description() {
    let suggestion = PlaceSuggestion {
        description: "Lagos, Nigeria".to_string(),
        place_id: "p1".to_string(),
        matched_substrings: vec![MatchedSubstring {
            offset: 0,
            length: 5,
        }],
        structured_formatting: None,
        types: Vec::new(),
    };
    let (text, spans) = suggestion.primary_text();
    assert_eq!(text, "Lagos, Nigeria");
    assert_eq!(spans.len(), 1);
}

#[test]
fn test_predefined_has_no_match_data() {
    let home = PlaceSuggestion::predefined("Home", "predef-home");
    assert_eq!(home.description, "Home");
    assert_eq!(home.place_id, "predef-home");
    assert!(home.matched_substrings.is_empty());
    let (text, spans) = home.primary_text();
    assert_eq!(text, "Home");
    assert!(spans.is_empty());
}

#[test]
fn test_parse_place_detail() {
    let json = r#"{
        "result": {
            "place_id": "p1",
            "name": "Lagos",
            "formatted_address": "Lagos, Nigeria",
            "address_components": [
                {"long_name": "Lagos", "short_name": "Lagos", "types": ["locality"]},
                {"long_name": "Nigeria", "short_name": "NG", "types": ["country"]}
            ],
            "geometry": {"location": {"lat": 6.5243793, "lng": 3.3792057}},
            "vicinity": "Lagos",
            "utc_offset": 60
        },
        "status": "OK"
    }"#;
    let response: DetailsResponse = serde_json::from_str(json).unwrap();
    let detail = response.result.unwrap();
    assert_eq!(detail.name, "Lagos");
    assert_eq!(detail.formatted_address, "Lagos, Nigeria");
    assert_eq!(detail.address_components.len(), 2);
    assert_eq!(detail.address_components[1].short_name, "NG");
    assert!((detail.geometry.location.lat - 6.5243793).abs() < 1e-9);
    assert_eq!(detail.utc_offset, Some(60));
}

#[test]
fn test_parse_details_response_without_result() {
    let json = r#"{"status": "NOT_FOUND"}"#;
    let response: DetailsResponse = serde_json::from_str(json).unwrap();
    assert!(response.result.is_none());
    assert_eq!(response.status, "NOT_FOUND");
}
