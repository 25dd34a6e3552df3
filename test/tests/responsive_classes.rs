//! Tests for responsive class compilation.
//!
//! These tests verify that:
//! - A bare value produces exactly one unprefixed token
//! - Breakpoint maps emit tokens in `base, sm, md, lg, xl, 2xl` order
//! - Undefined breakpoints emit nothing
//! - Compilation is deterministic

use gridline_test::prelude::*;

const PREFIXES: [&str; 5] = ["gd-cols", "gd-rows", "gd-gap", "gd-gap-x", "gd-gap-y"];

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_scalar_for_every_prefix() {
    for prefix in PREFIXES {
        for v in [0, 1, 7, 12, 40] {
            let value = Responsive::Value(v);
            assert_eq!(
                responsive_classes(prefix, Some(&value)).to_string(),
                format!("{prefix}-{v}")
            );
        }
    }
}

#[test]
fn test_string_scalar() {
    let value: Responsive<ClassValue> = "px".into();
    assert_eq!(responsive_classes("gd-gap", Some(&value)).to_string(), "gd-gap-px");
}

#[test]
fn test_undefined_value_is_empty() {
    for prefix in PREFIXES {
        assert_eq!(responsive_classes::<ClassValue>(prefix, None).to_string(), "");
    }
}

// ============================================================================
// Breakpoint maps
// ============================================================================

#[test]
fn test_container_cols_base_and_lg() {
    let cols = Responsive::from(
        BreakpointMap::<GridSize>::new()
            .with_base(size(2))
            .with_lg(size(4)),
    );
    assert_eq!(
        responsive_classes("gd-cols", Some(&cols)).to_string(),
        "gd-cols-2 lg:gd-cols-4"
    );
}

#[test]
fn test_order_for_every_subset() {
    let all = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    // Every subset of breakpoints, inserted largest first.
    for mask in 0u32..(1 << all.len()) {
        let chosen: Vec<Breakpoint> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, bp)| *bp)
            .collect();

        let map: BreakpointMap<u32> = chosen.iter().rev().map(|bp| (*bp, mask)).collect();
        let value = Responsive::from(map.with_base(0u32));

        let mut expected = vec!["gd-rows-0".to_string()];
        expected.extend(chosen.iter().map(|bp| format!("{bp}:gd-rows-{mask}")));

        assert_eq!(
            responsive_classes("gd-rows", Some(&value)).to_string(),
            expected.join(" ")
        );
    }
}

#[test]
fn test_base_only_equals_scalar() {
    for v in 1..=12 {
        let map = Responsive::from(BreakpointMap::<GridSize>::new().with_base(size(v)));
        let scalar = Responsive::Value(size(v));
        assert_eq!(
            responsive_classes("gd-cols", Some(&map)).to_string(),
            responsive_classes("gd-cols", Some(&scalar)).to_string()
        );
    }
}

#[test]
fn test_no_base_no_unprefixed_token() {
    let value = Responsive::from(BreakpointMap::<ClassValue>::new().with_sm(2).with_xxl(8));
    let classes = responsive_classes("gd-gap", Some(&value)).to_string();
    assert_eq!(classes, "sm:gd-gap-2 2xl:gd-gap-8");
    assert!(tokens(&classes).iter().all(|t| t.contains(':')));
}

#[test]
fn test_compiling_twice_is_identical() {
    let value = Responsive::from(
        BreakpointMap::<ClassValue>::new()
            .with_base(1)
            .with_md("1.5")
            .with_xl(3),
    );
    let first = responsive_classes("gd-gap-y", Some(&value));
    let second = responsive_classes("gd-gap-y", Some(&value));
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "gd-gap-y-1 md:gd-gap-y-1.5 xl:gd-gap-y-3");
}
