#![cfg(feature = "serde")]

use tabletop_core::{AbilityScores, Character, GridConfig, Point};

#[test]
fn point_serializes_as_coordinates() {
    let json = serde_json::to_string(&Point::new(3, -4)).unwrap();
    assert_eq!(json, r#"{"x":3,"y":-4}"#);
}

#[test]
fn ability_scores_fill_missing_modifiers() {
    let scores: AbilityScores = serde_json::from_str(r#"{"dexterity":3}"#).unwrap();
    assert_eq!(scores.dexterity, 3);
    assert_eq!(scores.strength, 0);
}

#[test]
fn character_keeps_its_position() {
    let mut hero = Character::new("Hero", 8);
    hero.place_at((2, 2));
    let json = serde_json::to_value(&hero).unwrap();
    assert_eq!(json["position"], serde_json::json!({"x": 2, "y": 2}));

    let back: Character = serde_json::from_value(json).unwrap();
    assert_eq!(back, hero);
}

#[test]
fn grid_config_from_json() {
    let config: GridConfig = serde_json::from_str(r#"{"feet_per_square":10}"#).unwrap();
    assert_eq!(config.to_feet(2), 20);
}
