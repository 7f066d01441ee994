//! Tests for Place

use super::*;
use crate::test_utils::test_helpers::{paris, place};

#[test]
fn test_label_with_region() {
    assert_eq!(paris().label(), "Paris, Île-de-France, France");
}

#[test]
fn test_label_without_region() {
    let place = place("Monaco", None, "Monaco");
    assert_eq!(place.label(), "Monaco, Monaco");
}

#[test]
fn test_label_skips_blank_region() {
    let place = place("Reykjavik", Some("   "), "Iceland");
    assert_eq!(place.label(), "Reykjavik, Iceland");
}

#[test]
fn test_deserialize_with_null_region() {
    let json = r#"{"city":"Singapore","region":null,"country":"Singapore","latitude":1.29,"longitude":103.85,"timezone":"Asia/Singapore"}"#;
    let place: Place = serde_json::from_str(json).unwrap();
    assert_eq!(place.region, None);
    assert_eq!(place.timezone, "Asia/Singapore");
}

#[test]
fn test_deserialize_with_missing_region() {
    let json = r#"{"city":"Lima","country":"Peru","latitude":-12.05,"longitude":-77.04,"timezone":"America/Lima"}"#;
    let place: Place = serde_json::from_str(json).unwrap();
    assert_eq!(place.region, None);
    assert_eq!(place.label(), "Lima, Peru");
}

#[test]
fn test_deserialize_rejects_missing_coordinates() {
    let json = r#"{"city":"Nowhere","country":"Atlantis","timezone":"UTC"}"#;
    assert!(serde_json::from_str::<Place>(json).is_err());
}

#[test]
fn test_coordinates_northern_eastern() {
    assert_eq!(paris().coordinates(), "48.8566°N, 2.3522°E");
}

#[test]
fn test_coordinates_southern_western() {
    let place = place("Lima", None, "Peru");
    let place = Place {
        latitude: -12.0464,
        longitude: -77.0428,
        ..place
    };
    assert_eq!(place.coordinates(), "12.0464°S, 77.0428°W");
}
