use super::*;
use crate::data::{IDENTITY, LINKS};

#[test]
fn person_json_ld_has_schema_keys_and_profiles() {
    let raw = person_json_ld(&IDENTITY, &LINKS);
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["@context"], "https://schema.org");
    assert_eq!(value["@type"], "Person");
    assert_eq!(value["name"], "Tanmay Sharma");
    assert_eq!(value["email"], LINKS.email);
    assert_eq!(
        value["sameAs"],
        serde_json::json!([LINKS.profile, LINKS.professional_network, LINKS.coding_profile])
    );
}
