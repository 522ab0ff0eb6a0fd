//! Unit tests for entity match

use crate::domain::entities::entity_match::{EntityMatch, EntityType};

#[test]
fn test_deserialize_wire_shape() {
    let json = r#"{"id":7,"type":"company","name":"Gold Fields Ghana Limited"}"#;
    let entity: EntityMatch = serde_json::from_str(json).unwrap();

    assert_eq!(entity.id, 7);
    assert_eq!(entity.entity_type, EntityType::Company);
    assert_eq!(entity.name, "Gold Fields Ghana Limited");
    assert!(entity.short_name.is_none());
}

#[test]
fn test_serialize_omits_missing_short_name() {
    let entity = EntityMatch::new(3, EntityType::Bank, "Ecobank Ghana");
    let json = serde_json::to_value(&entity).unwrap();

    assert_eq!(json["type"], "bank");
    assert!(json.get("short_name").is_none());
}

#[test]
fn test_unknown_type_is_rejected() {
    let json = r#"{"id":1,"type":"person","name":"Kwame Mensah"}"#;
    assert!(serde_json::from_str::<EntityMatch>(json).is_err());
    assert!("person".parse::<EntityType>().is_err());
}

#[test]
fn test_entity_type_parsing_is_case_insensitive() {
    assert_eq!(" Insurance ".parse::<EntityType>(), Ok(EntityType::Insurance));
    assert_eq!("BANK".parse::<EntityType>(), Ok(EntityType::Bank));
}

#[test]
fn test_label_includes_short_name() {
    let bank = EntityMatch::new(12, EntityType::Bank, "GCB Bank PLC").with_short_name("GCB");
    assert_eq!(bank.label(), "GCB Bank PLC (GCB)");

    let blank = EntityMatch::new(13, EntityType::Bank, "Fidelity Bank").with_short_name(" ");
    assert_eq!(blank.label(), "Fidelity Bank");
}
