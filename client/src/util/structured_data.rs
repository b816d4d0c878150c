//! schema.org `Person` JSON-LD, emitted as an `application/ld+json` script
//! at the end of the page body.

#[cfg(test)]
#[path = "structured_data_test.rs"]
mod structured_data_test;

use serde::Serialize;

use crate::data::{Identity, LinkSet};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    job_title: &'a str,
    email: &'a str,
    same_as: [&'a str; 3],
}

/// Serialized JSON-LD describing `identity`, linked to its public profiles.
pub fn person_json_ld(identity: &Identity, links: &LinkSet) -> String {
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: identity.name,
        job_title: identity.headline,
        email: links.email,
        same_as: [links.profile, links.professional_network, links.coding_profile],
    };
    serde_json::to_string(&schema).unwrap_or_default()
}
