use super::*;
use crate::api::wire::{
    Artwork, DetailPayload, FlavorText, LocalizedName, NamedResource, OtherSprites, Sprites,
    TypeSlot,
};

const MISSING: &str = "No description available.";

fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
    }
}

fn detail_payload(types: &[&str]) -> DetailPayload {
    DetailPayload {
        id: 25,
        name: "pikachu".to_string(),
        sprites: Sprites {
            other: Some(OtherSprites {
                official_artwork: Some(Artwork {
                    front_default: Some("https://example.test/25.png".to_string()),
                }),
            }),
        },
        types: types
            .iter()
            .map(|t| TypeSlot { kind: named(t) })
            .collect(),
        height: 4,
        weight: 60,
    }
}

fn species_payload(names: &[(&str, &str)], flavors: &[(&str, &str)]) -> SpeciesPayload {
    SpeciesPayload {
        names: names
            .iter()
            .map(|(name, lang)| LocalizedName {
                name: name.to_string(),
                language: named(lang),
            })
            .collect(),
        flavor_text_entries: flavors
            .iter()
            .map(|(text, lang)| FlavorText {
                flavor_text: text.to_string(),
                language: named(lang),
            })
            .collect(),
    }
}

#[test]
fn test_localized_name_selected() {
    let species = species_payload(&[("Pikachu-EN", "en"), ("Pikachu-ES", "es")], &[]);
    let record =
        DetailRecord::from_payloads(detail_payload(&["electric"]), species, "es", MISSING).unwrap();

    assert_eq!(record.display_name, "Pikachu-ES");
}

#[test]
fn test_name_falls_back_to_canonical() {
    let species = species_payload(&[("Pikachu-EN", "en")], &[]);
    let record =
        DetailRecord::from_payloads(detail_payload(&["electric"]), species, "es", MISSING).unwrap();

    assert_eq!(record.display_name, "pikachu");
}

#[test]
fn test_first_matching_name_wins() {
    let species = species_payload(&[("Primero", "es"), ("Segundo", "es")], &[]);
    let record =
        DetailRecord::from_payloads(detail_payload(&["electric"]), species, "es", MISSING).unwrap();

    assert_eq!(record.display_name, "Primero");
}

#[test]
fn test_description_flattens_breaks() {
    let species = species_payload(&[], &[("line one\nline two\x0cline three", "es")]);
    let record =
        DetailRecord::from_payloads(detail_payload(&["electric"]), species, "es", MISSING).unwrap();

    assert_eq!(record.description, "line one line two line three");
}

#[test]
fn test_description_falls_back_to_placeholder() {
    let species = species_payload(&[], &[("english only", "en")]);
    let record =
        DetailRecord::from_payloads(detail_payload(&["electric"]), species, "es", MISSING).unwrap();

    assert_eq!(record.description, MISSING);
}

#[test]
fn test_type_list_joined_in_order() {
    let species = species_payload(&[], &[]);
    let record = DetailRecord::from_payloads(
        detail_payload(&["electric", "flying"]),
        species,
        "es",
        MISSING,
    )
    .unwrap();

    assert_eq!(record.type_list, "electric, flying");
}

#[test]
fn test_dimensions_converted_from_tenths() {
    let species = species_payload(&[], &[]);
    let record =
        DetailRecord::from_payloads(detail_payload(&["electric"]), species, "es", MISSING).unwrap();

    assert_eq!(record.height_m, 0.4);
    assert_eq!(record.weight_kg, 6.0);
}

#[test]
fn test_missing_artwork_is_an_error() {
    let mut detail = detail_payload(&["electric"]);
    detail.sprites = Sprites { other: None };

    let result = DetailRecord::from_payloads(detail, species_payload(&[], &[]), "es", MISSING);
    assert!(matches!(result, Err(ApiError::MissingField(_))));
}
