//! Tests for scrolling styles module

use super::*;
use crate::error::Error;
use crate::paginator::Paginator;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use test_case::test_case;

fn paginator(total: i64, current: i64, page_range: i64) -> Paginator {
    let mut paginator = Paginator::with_counts(total, 10, current);
    paginator.set_page_range(page_range);
    paginator
}

fn range(lower: u64, upper: u64) -> Vec<u64> {
    (lower..=upper).collect()
}

// ============================================================================
// All Tests
// ============================================================================

#[test]
fn test_all_returns_every_page() {
    let paginator = paginator(150, 7, 5);
    assert_eq!(All.pages(&paginator, None), range(1, 15));
    assert_eq!(All.pages(&paginator, Some(2)), range(1, 15));
}

#[test]
fn test_all_without_items() {
    assert_eq!(All.pages(&Paginator::new(), None), vec![1]);
}

// ============================================================================
// Jumping Tests
// ============================================================================

#[test_case(1, 1, 5 ; "first page")]
#[test_case(5, 1, 5 ; "end of first block")]
#[test_case(6, 6, 10 ; "start of second block")]
#[test_case(7, 6, 10 ; "inside second block")]
#[test_case(10, 6, 10 ; "end of second block")]
#[test_case(11, 11, 15 ; "last block")]
#[test_case(15, 11, 15 ; "last page")]
fn test_jumping_blocks(current: i64, lower: u64, upper: u64) {
    let paginator = paginator(150, current, 5);
    assert_eq!(Jumping.pages(&paginator, None), range(lower, upper));
}

#[test]
fn test_jumping_clamps_short_last_block() {
    let paginator = paginator(130, 12, 5);
    assert_eq!(Jumping.pages(&paginator, None), vec![11, 12, 13]);
}

#[test]
fn test_jumping_uses_paginator_range() {
    let paginator = paginator(150, 7, 5);
    assert_eq!(Jumping.pages(&paginator, Some(3)), range(6, 10));
}

#[test]
fn test_jumping_with_zero_range() {
    let paginator = paginator(150, 7, 0);
    assert_eq!(Jumping.pages(&paginator, None), vec![7]);
}

// ============================================================================
// Sliding Tests
// ============================================================================

#[test_case(1, 1, 5 ; "first page")]
#[test_case(2, 1, 5 ; "near start")]
#[test_case(3, 1, 5 ; "centred on third")]
#[test_case(4, 2, 6 ; "starts sliding")]
#[test_case(8, 6, 10 ; "middle")]
#[test_case(12, 10, 14 ; "approaching end")]
#[test_case(13, 11, 15 ; "pinned to end")]
#[test_case(15, 11, 15 ; "last page")]
fn test_sliding_window(current: i64, lower: u64, upper: u64) {
    let paginator = paginator(150, current, 5);
    assert_eq!(Sliding.pages(&paginator, None), range(lower, upper));
}

#[test]
fn test_sliding_range_wider_than_page_count() {
    let paginator = paginator(30, 2, 5);
    assert_eq!(Sliding.pages(&paginator, None), vec![1, 2, 3]);
}

#[test]
fn test_sliding_range_override() {
    let paginator = paginator(150, 8, 5);
    assert_eq!(Sliding.pages(&paginator, Some(3)), vec![7, 8, 9]);
}

#[test]
fn test_sliding_even_range() {
    let paginator = paginator(150, 8, 4);
    assert_eq!(Sliding.pages(&paginator, None), range(7, 10));
}

#[test]
fn test_sliding_without_items() {
    assert_eq!(Sliding.pages(&Paginator::new(), None), vec![1]);
}

// ============================================================================
// Elastic Tests
// ============================================================================

#[test_case(1, 1, 5 ; "first page keeps base width")]
#[test_case(2, 1, 6 ; "grows by one")]
#[test_case(3, 1, 7 ; "grows by two")]
#[test_case(5, 1, 9 ; "full width")]
#[test_case(8, 4, 12 ; "middle")]
#[test_case(12, 8, 15 ; "shrinking near end")]
#[test_case(15, 11, 15 ; "last page keeps base width")]
fn test_elastic_window(current: i64, lower: u64, upper: u64) {
    let paginator = paginator(150, current, 5);
    assert_eq!(Elastic.pages(&paginator, None), range(lower, upper));
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_builtin_names() {
    let registry = ScrollingStyleRegistry::with_builtins();
    assert_eq!(
        registry.names(),
        vec!["All", "Elastic", "Jumping", "Sliding"]
    );
    assert_eq!(registry.namespace(), DEFAULT_NAMESPACE);
}

#[test]
fn test_builtin_registry_is_shared() {
    assert!(Arc::ptr_eq(
        &ScrollingStyleRegistry::builtin(),
        &ScrollingStyleRegistry::builtin()
    ));
}

#[test]
fn test_resolve_by_name() {
    let registry = ScrollingStyleRegistry::with_builtins();
    assert_eq!(registry.resolve("Jumping").unwrap().name(), "Jumping");
    assert_eq!(
        registry.resolve("ScrollingStyle.Elastic").unwrap().name(),
        "Elastic"
    );
}

#[test]
fn test_resolve_is_case_sensitive() {
    let registry = ScrollingStyleRegistry::with_builtins();
    assert!(!registry.contains("jumping"));

    let err = registry.resolve("jumping").unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownScrollingStyle { ref available, .. } if available == "All, Elastic, Jumping, Sliding"
    ));
}

#[test]
fn test_resolve_foreign_namespace_fails() {
    let registry = ScrollingStyleRegistry::with_builtins();
    assert!(registry.resolve("Widgets.Jumping").is_err());
}

#[test]
fn test_custom_namespace() {
    let mut registry = ScrollingStyleRegistry::with_namespace("Nav");
    registry.register("Jumping", || Arc::new(Jumping));

    assert!(registry.contains("Nav.Jumping"));
    assert!(!registry.contains("ScrollingStyle.Jumping"));
}

#[test]
fn test_register_qualified_name() {
    let mut registry = ScrollingStyleRegistry::with_builtins();
    registry.register("ScrollingStyle.Everything", || Arc::new(All));

    assert!(registry.contains("Everything"));
    assert!(registry.contains("ScrollingStyle.Everything"));
    assert_eq!(registry.resolve("Everything").unwrap().name(), "All");
    assert_eq!(
        registry.resolve("ScrollingStyle.Everything").unwrap().name(),
        "All"
    );
    assert!(registry.names().contains(&"Everything".to_string()));
}

#[test]
fn test_register_custom_style() {
    #[derive(Debug)]
    struct Ends;

    impl ScrollingStyle for Ends {
        fn name(&self) -> &str {
            "Ends"
        }

        fn pages(&self, paginator: &Paginator, _page_range: Option<i64>) -> Vec<u64> {
            vec![1, paginator.count()]
        }
    }

    let mut registry = ScrollingStyleRegistry::with_builtins();
    registry.register_style(Arc::new(Ends));

    let style = registry.resolve("Ends").unwrap();
    assert_eq!(style.pages(&paginator(150, 7, 5), None), vec![1, 15]);
    assert_eq!(registry.names().len(), 5);
}

#[test]
fn test_register_replaces_existing() {
    let mut registry = ScrollingStyleRegistry::with_builtins();
    registry.register("Sliding", || Arc::new(All));

    let style = registry.resolve("Sliding").unwrap();
    assert_eq!(style.name(), "All");
    assert_eq!(registry.names().len(), 4);
}

#[test]
fn test_empty_registry() {
    let registry = ScrollingStyleRegistry::new();
    assert!(registry.names().is_empty());
    assert!(registry.resolve("All").unwrap_err().is_invalid_argument());
}

// ============================================================================
// Selector Tests
// ============================================================================

#[test]
fn test_selector_from_json() {
    assert!(matches!(
        ScrollingStyleSelector::try_from(&json!(null)).unwrap(),
        ScrollingStyleSelector::Default
    ));
    assert!(matches!(
        ScrollingStyleSelector::try_from(&json!("Jumping")).unwrap(),
        ScrollingStyleSelector::Named(ref name) if name == "Jumping"
    ));
}

#[test]
fn test_selector_from_json_rejects_other_types() {
    for value in [json!(42), json!(true), json!(["All"]), json!({"name": "All"})] {
        let err = ScrollingStyleSelector::try_from(&value).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }), "{value}");
    }
}

#[test]
fn test_selector_conversions() {
    assert!(matches!(
        ScrollingStyleSelector::from(None),
        ScrollingStyleSelector::Default
    ));
    assert!(matches!(
        ScrollingStyleSelector::from(Some("All")),
        ScrollingStyleSelector::Named(ref name) if name == "All"
    ));
    assert_eq!(
        format!("{:?}", ScrollingStyleSelector::instance(Elastic)),
        "Instance(\"Elastic\")"
    );
}
