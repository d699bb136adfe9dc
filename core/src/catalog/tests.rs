use super::*;

fn entry(name: &str, url: &str) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn test_reference_id_with_trailing_slash() {
    let e = entry("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
    assert_eq!(e.reference_id(), Some("25"));
}

#[test]
fn test_reference_id_without_trailing_slash() {
    // Second-to-last segment, exactly; without a trailing slash the id is
    // the last segment and is not returned.
    let e = entry("pikachu", "https://pokeapi.co/api/v2/pokemon/25");
    assert_eq!(e.reference_id(), Some("pokemon"));
}

#[test]
fn test_reference_id_too_short() {
    let e = entry("odd", "25");
    assert_eq!(e.reference_id(), None);
}

#[test]
fn test_reference_id_preserves_leading_zeros() {
    let e = entry("padded", "https://pokeapi.co/api/v2/pokemon/025/");
    assert_eq!(e.reference_id(), Some("025"));
}

#[test]
fn test_catalog_preserves_order() {
    let catalog = Catalog::from_entries(vec![
        entry("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
        entry("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
        entry("venusaur", "https://pokeapi.co/api/v2/pokemon/3/"),
    ]);

    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "ivysaur", "venusaur"]);
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::empty();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}
