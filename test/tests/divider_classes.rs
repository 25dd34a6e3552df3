//! Tests for divider class compilation.
//!
//! These tests verify that:
//! - A single config emits `hidden` first and geometry in a fixed order
//! - Start offsets are only emitted together with a span
//! - A breakpoint map restores visibility exactly where a hidden divider is shown again
//! - Breakpoint-level geometry tokens carry their breakpoint prefix

use gridline_test::prelude::*;

fn compile(config: impl Into<Responsive<GridDividerConfig>>) -> String {
    divider_classes(Some(&config.into())).to_string()
}

// ============================================================================
// Single configurations
// ============================================================================

#[test]
fn test_vertical_geometry() {
    assert_eq!(compile(VerticalDivider::after_col(1)), "grid-divider-v-1");
    assert_eq!(
        compile(VerticalDivider::after_col(3).row_span(2).row_start(1)),
        "grid-divider-v-3 grid-divider-row-span-2 grid-divider-row-start-1"
    );
}

#[test]
fn test_horizontal_geometry() {
    assert_eq!(compile(HorizontalDivider::after_row(4)), "grid-divider-h-4");
    assert_eq!(
        compile(HorizontalDivider::after_row(2).col_span(6).col_start(3)),
        "grid-divider-h-2 grid-divider-col-span-6 grid-divider-col-start-3"
    );
}

#[test]
fn test_start_without_span_is_dropped() {
    assert_eq!(compile(VerticalDivider::after_col(2).row_start(5)), "grid-divider-v-2");
    assert_eq!(compile(HorizontalDivider::after_row(2).col_start(5)), "grid-divider-h-2");
}

#[test]
fn test_hidden_comes_first() {
    let classes = compile(HorizontalDivider::after_row(1).col_span(2).hidden(true));
    assert_eq!(tokens(&classes)[0], "hidden");
    assert_immediately_before(&classes, "hidden", "grid-divider-h-1");
}

#[test]
fn test_visibility_can_be_left_out() {
    let config = GridDividerConfig::from(VerticalDivider::after_col(2).hidden(true));
    assert_eq!(single_divider_classes(&config, true).to_string(), "hidden grid-divider-v-2");
    assert_eq!(single_divider_classes(&config, false).to_string(), "grid-divider-v-2");
}

#[test]
fn test_no_config() {
    assert_eq!(divider_classes(None).to_string(), "");
    assert!(DividerCompiler::new().compile(None).is_empty());
}

// ============================================================================
// Breakpoint maps
// ============================================================================

#[test]
fn test_hidden_on_mobile_vertical_from_md() {
    let classes = compile(
        BreakpointMap::<GridDividerConfig>::new()
            .with_base(VerticalDivider::after_col(1).hidden(true))
            .with_md(VerticalDivider::after_col(1)),
    );
    assert_eq!(classes, "hidden grid-divider-v-1 md:block md:grid-divider-v-1");
    assert_immediately_before(&classes, "md:block", "md:grid-divider-v-1");
}

#[test]
fn test_orientation_switch() {
    let classes = compile(
        BreakpointMap::<GridDividerConfig>::new()
            .with_lg(VerticalDivider::after_col(2).row_span(3))
            .with_base(HorizontalDivider::after_row(1)),
    );
    assert_eq!(
        classes,
        "grid-divider-h-1 lg:grid-divider-v-2 lg:grid-divider-row-span-3"
    );
}

#[test]
fn test_visibility_carries_across_gaps() {
    // Hidden at base, nothing at sm/md, still hidden at lg, shown at 2xl.
    let classes = compile(
        BreakpointMap::<GridDividerConfig>::new()
            .with_base(VerticalDivider::after_col(1).hidden(true))
            .with_lg(VerticalDivider::after_col(2).hidden(true))
            .with_xxl(VerticalDivider::after_col(3)),
    );
    assert_eq!(
        classes,
        "hidden grid-divider-v-1 lg:grid-divider-v-2 2xl:block 2xl:grid-divider-v-3"
    );
}

#[test]
fn test_restore_only_after_hidden() {
    let classes = compile(
        BreakpointMap::<GridDividerConfig>::new()
            .with_base(VerticalDivider::after_col(1))
            .with_md(VerticalDivider::after_col(1))
            .with_xl(VerticalDivider::after_col(1)),
    );
    assert!(!classes.contains(":block"));
}

#[test]
fn test_hide_show_hide_show() {
    let classes = compile(
        BreakpointMap::<GridDividerConfig>::new()
            .with_base(HorizontalDivider::after_row(1).hidden(true))
            .with_sm(HorizontalDivider::after_row(1))
            .with_md(HorizontalDivider::after_row(1).hidden(true))
            .with_lg(HorizontalDivider::after_row(1)),
    );
    assert_eq!(
        classes,
        concat!(
            "hidden grid-divider-h-1 ",
            "sm:block sm:grid-divider-h-1 ",
            "md:grid-divider-h-1 ",
            "lg:block lg:grid-divider-h-1"
        )
    );
}

#[test]
fn test_breakpoint_without_base_never_restores() {
    let classes = compile(
        BreakpointMap::<GridDividerConfig>::new().with_md(VerticalDivider::after_col(4)),
    );
    assert_eq!(classes, "md:grid-divider-v-4");
}

#[test]
fn test_every_breakpoint_token_is_prefixed() {
    let config = BreakpointMap::<GridDividerConfig>::new()
        .with_base(VerticalDivider::after_col(1))
        .with_sm(VerticalDivider::after_col(2).row_span(2).row_start(1))
        .with_xl(HorizontalDivider::after_row(3).col_span(4).col_start(2));
    let classes = compile(config);

    for token in tokens(&classes).into_iter().skip(1) {
        assert!(
            token.starts_with("sm:") || token.starts_with("xl:"),
            "unexpected `{token}`"
        );
    }
    assert_before(&classes, "sm:grid-divider-row-start-1", "xl:grid-divider-h-3");
}

#[test]
fn test_custom_restore_token() {
    let config: Responsive<GridDividerConfig> = BreakpointMap::<GridDividerConfig>::new()
        .with_base(VerticalDivider::after_col(1).hidden(true))
        .with_sm(VerticalDivider::after_col(1))
        .into();
    let compiler = DividerCompiler::new().with_restore_token("contents");
    assert_eq!(compiler.restore_token(), "contents");
    assert_eq!(
        compiler.compile(Some(&config)).to_string(),
        "hidden grid-divider-v-1 sm:contents sm:grid-divider-v-1"
    );
}
