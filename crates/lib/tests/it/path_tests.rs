//! Path integration tests
//!
//! This module covers the Path/PathBuf pair, component validation, the
//! path! macro, and how every path spelling behaves when driving real map
//! operations.

use pathmap::{
    PathMap, path,
    path::{Component, Path, PathBuf, PathError, normalize_path},
};

// ===== EQUIVALENT SPELLINGS =====

#[test]
fn test_every_path_spelling_addresses_the_same_entry() {
    let map = PathMap::new().assoc_path("a.b.c", 42).unwrap();

    let dotted = "a.b.c";
    let messy = Path::new(".a..b..c.");
    let parsed: PathBuf = "a.b.c".parse().unwrap();
    let collected: PathBuf = ["a", "b", "c"].into_iter().collect();
    let macro_literal = path!("a.b.c");
    let macro_segments = path!("a", "b", "c");

    assert_eq!(map.get_as::<i64>(dotted), Some(42));
    assert_eq!(map.get_as::<i64>(messy), Some(42));
    assert_eq!(map.get_as::<i64>(&parsed), Some(42));
    assert_eq!(map.get_as::<i64>(collected), Some(42));
    assert_eq!(map.get_as::<i64>(macro_literal), Some(42));
    assert_eq!(map.get_as::<i64>(macro_segments), Some(42));
}

#[test]
fn test_writes_through_any_spelling_build_equal_maps() {
    let via_dotted = PathMap::new().assoc_path("x.y", 1).unwrap();
    let via_macro = PathMap::new().assoc_path(path!("x", "y"), 1).unwrap();
    let via_collected: PathBuf = ["x", "y"].into_iter().collect();
    let via_pathbuf = PathMap::new().assoc_path(via_collected, 1).unwrap();

    assert_eq!(via_dotted, via_macro);
    assert_eq!(via_macro, via_pathbuf);
}

#[test]
fn test_normalization_is_idempotent() {
    for input in ["", "a", ".a", "a.", "a..b", "...", ".a..b..c."] {
        let once = normalize_path(input);
        let twice = normalize_path(&once);
        assert_eq!(once, twice, "normalizing {input:?} twice");
    }
}

// ===== STRUCTURE =====

#[test]
fn test_parent_walks_toward_the_root() {
    let path = Path::new("user.profile.name");

    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "user.profile");

    let grandparent = parent.parent().unwrap();
    assert_eq!(grandparent.as_str(), "user");

    assert_eq!(grandparent.parent(), None);
    assert_eq!(Path::new("").parent(), None);
}

#[test]
fn test_leaf_and_len_reflect_components() {
    let path: PathBuf = "user.profile.name".parse().unwrap();

    assert_eq!(path.leaf(), Some("name"));
    assert_eq!(path.len(), 3);
    assert!(!path.is_empty());

    let empty = PathBuf::new();
    assert_eq!(empty.leaf(), None);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn test_parent_paths_resolve_against_maps() {
    let map = PathMap::new().assoc_path("user.profile.name", "Alice").unwrap();
    let leaf = Path::new("user.profile.name");

    // Every prefix of a written path is present
    let mut current = Some(leaf);
    while let Some(path) = current {
        assert!(map.contains_path(path), "expected {path} to be present");
        current = path.parent();
    }
}

// ===== COMPONENTS =====

#[test]
fn test_component_rejects_the_delimiter() {
    assert!(Component::new("user").is_ok());
    assert!(Component::new("weird chars are fine !@#").is_ok());

    let err = Component::new("a.b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid component 'a.b': components cannot contain dots"
    );

    // All fallible construction routes agree
    assert!("a.b".parse::<Component>().is_err());
    assert!(Component::try_from("a.b").is_err());
    assert!(Component::try_from(String::from("a.b")).is_err());
}

#[test]
fn test_components_build_paths() {
    let path = PathBuf::new()
        .push_component(Component::new("user").unwrap())
        .push_component(Component::new("profile").unwrap());

    assert_eq!(path.as_str(), "user.profile");

    let single = PathBuf::from_component(Component::new("user").unwrap());
    assert_eq!(single.as_str(), "user");
}

// ===== CONVERSIONS =====

#[test]
fn test_borrowed_paths_convert_to_owned() {
    let borrowed = Path::new(".a..b");

    // Conversion normalizes, the borrowed view does not
    assert_eq!(borrowed.as_str(), ".a..b");
    assert_eq!(borrowed.to_path_buf().as_str(), "a.b");
    assert_eq!(PathBuf::from(borrowed).as_str(), "a.b");
}

#[test]
fn test_join_concatenates_paths() {
    let base: PathBuf = "user".parse().unwrap();
    let joined = base.join(Path::new("profile.name"));

    assert_eq!(joined.as_str(), "user.profile.name");

    // Joining an empty path changes nothing
    let same = joined.clone().join(Path::new(""));
    assert_eq!(same, joined);
}

#[test]
fn test_path_error_wraps_into_crate_error() {
    let err = Component::new("a.b").unwrap_err();
    let PathError::InvalidComponent { ref component, .. } = err;
    assert_eq!(component, "a.b");

    let wrapped: pathmap::Error = err.into();
    assert!(wrapped.is_path_error());
    assert_eq!(wrapped.module(), "path");
    assert_eq!(
        wrapped.to_string(),
        "invalid component 'a.b': components cannot contain dots"
    );
}

// ===== MACRO =====

#[test]
fn test_macro_forms_for_reads_and_writes() {
    let empty = path!();
    assert!(empty.is_empty());

    let map = PathMap::new()
        .assoc_path(path!("settings", "theme"), "dark")
        .unwrap();

    assert_eq!(map.get_as::<&str>(path!("settings.theme")), Some("dark"));

    let section = "settings";
    let dynamic = path!(section, "theme");
    assert_eq!(map.get_as::<&str>(dynamic), Some("dark"));
}
