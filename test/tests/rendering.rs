//! Tests for component rendering.
//!
//! These tests verify that:
//! - Grid containers always carry `relative grid` unless a caller class replaces it
//! - Dividers are always hidden from assistive technology
//! - Caller classes and attributes reach the rendered element
//! - Children render in order inside the container

use gridline_test::prelude::*;

// ============================================================================
// Grid container
// ============================================================================

#[test]
fn test_empty_grid() {
    let harness = RenderHarness::new(grid());
    harness.assert_class_tokens(&["relative", "grid"]);
    assert_eq!(harness.html(), r#"<div class="relative grid"></div>"#);
}

#[test]
fn test_grid_with_caller_class() {
    let harness = RenderHarness::new(grid().class("mx-auto max-w-4xl"));
    harness.assert_class_tokens(&["relative", "grid", "mx-auto", "max-w-4xl"]);
}

#[test]
fn test_grid_classes_follow_base() {
    let harness = RenderHarness::new(
        grid()
            .cols(BreakpointMap::<GridSize>::new().with_base(size(1)).with_sm(size(2)))
            .gap_x(4)
            .class("p-2"),
    );
    let class = harness.class();
    assert_before(class, "grid", "gd-cols-1");
    assert_before(class, "sm:gd-cols-2", "gd-gap-x-4");
    assert_before(class, "gd-gap-x-4", "p-2");
}

#[test]
fn test_caller_overrides_generated_class() {
    let harness = RenderHarness::new(grid().cols(size(3)).class("inline-grid gd-cols-5"));
    harness.assert_class_tokens(&["relative", "inline-grid", "gd-cols-5"]);
    assert!(!harness.has_class("gd-cols-3"));
}

#[test]
fn test_grid_attributes() {
    let harness = RenderHarness::new(
        grid()
            .id("layout")
            .style("min-height: 100vh")
            .attr("data-testid", "page-grid"),
    );
    assert_eq!(harness.attr("id"), Some("layout"));
    assert_eq!(harness.attr("style"), Some("min-height: 100vh"));
    assert_eq!(harness.attr("data-testid"), Some("page-grid"));
}

#[test]
fn test_class_attr_is_merged_not_replaced() {
    let harness = RenderHarness::new(grid().class("a").attr("class", "b"));
    harness.assert_class_tokens(&["relative", "grid", "a", "b"]);
}

#[test]
fn test_children_in_order() {
    let view = grid()
        .cols(size(2))
        .child(divider_with(VerticalDivider::after_col(1)))
        .children(["<a>", "b"]);
    let harness = RenderHarness::new(view);

    assert_eq!(harness.element().children().len(), 3);
    assert_eq!(
        harness.html(),
        concat!(
            r#"<div class="relative grid gd-cols-2">"#,
            r#"<div class="grid-divider grid-divider-v-1" aria-hidden="true"></div>"#,
            "&lt;a&gt;b</div>"
        )
    );
}

#[test]
fn test_render_is_repeatable() {
    let view = grid().rows(size(6)).gap("px");
    assert_eq!(view.to_html(), view.to_html());
    assert_eq!(view.grid_classes(), "gd-rows-6 gd-gap-px");
}

// ============================================================================
// Divider
// ============================================================================

#[test]
fn test_divider_is_aria_hidden() {
    for view in [
        divider(),
        divider_with(HorizontalDivider::after_row(2)),
        divider().attr("aria-hidden", "false"),
    ] {
        let harness = RenderHarness::new(view);
        assert_eq!(harness.attr("aria-hidden"), Some("true"), "{}", harness.html());
    }
}

#[test]
fn test_unconfigured_divider_keeps_caller_class() {
    let harness = RenderHarness::new(divider().class("bg-gray-200"));
    harness.assert_class_tokens(&["grid-divider", "bg-gray-200"]);
}

#[test]
fn test_caller_class_shows_hidden_divider() {
    let harness =
        RenderHarness::new(divider_with(VerticalDivider::after_col(2).hidden(true)).class("flex"));
    harness.assert_class_tokens(&["grid-divider", "grid-divider-v-2", "flex"]);
}

#[test]
fn test_responsive_divider_markup() {
    let harness = RenderHarness::new(
        divider_with(
            BreakpointMap::<GridDividerConfig>::new()
                .with_base(HorizontalDivider::after_row(1).hidden(true))
                .with_lg(HorizontalDivider::after_row(1).col_span(3)),
        )
        .id("rule"),
    );
    assert_eq!(
        harness.html(),
        concat!(
            r#"<div class="grid-divider hidden grid-divider-h-1 lg:block "#,
            r#"lg:grid-divider-h-1 lg:grid-divider-col-span-3" id="rule" aria-hidden="true"></div>"#
        )
    );
}

#[test]
fn test_divider_restore_token() {
    let view = divider_with(
        BreakpointMap::<GridDividerConfig>::new()
            .with_base(VerticalDivider::after_col(1).hidden(true))
            .with_md(VerticalDivider::after_col(1)),
    )
    .restore_token("flex");
    let harness = RenderHarness::new(view);
    assert!(harness.has_class("md:flex"));
    assert!(!harness.has_class("md:block"));
}
