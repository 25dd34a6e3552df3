//! Class names for grid dividers.
//!
//! A divider is a line drawn after a column (vertical) or after a row
//! (horizontal). Its configuration may itself be responsive, in which case
//! every breakpoint entry is compiled separately and prefixed with `{bp}:`.
//!
//! Visibility needs care across breakpoints. `hidden` applied at a smaller
//! breakpoint keeps applying at larger ones, so when an entry is visible after
//! a hidden one an explicit restore token (`{bp}:block` by default) is emitted
//! before that entry's geometry.

use std::borrow::Cow;

use super::ClassList;
use crate::layout::Responsive;

pub const HIDDEN_CLASS: &str = "hidden";
pub const DEFAULT_RESTORE_TOKEN: &str = "block";

/// A divider between two columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VerticalDivider {
    pub after_col: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub row_start: Option<i32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub row_span: Option<i32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub hidden: bool,
}

/// A divider between two rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HorizontalDivider {
    pub after_row: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub col_start: Option<i32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub col_span: Option<i32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub hidden: bool,
}

impl VerticalDivider {
    pub fn after_col(col: i32) -> Self {
        Self {
            after_col: col,
            ..Self::default()
        }
    }

    /// Span `span` rows. A start row is only emitted together with a span.
    pub fn row_span(mut self, span: i32) -> Self {
        self.row_span = Some(span);
        self
    }

    pub fn row_start(mut self, start: i32) -> Self {
        self.row_start = Some(start);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl HorizontalDivider {
    pub fn after_row(row: i32) -> Self {
        Self {
            after_row: row,
            ..Self::default()
        }
    }

    /// Span `span` columns. A start column is only emitted together with a span.
    pub fn col_span(mut self, span: i32) -> Self {
        self.col_span = Some(span);
        self
    }

    pub fn col_start(mut self, start: i32) -> Self {
        self.col_start = Some(start);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "orientation", rename_all = "lowercase")
)]
pub enum GridDividerConfig {
    Vertical(VerticalDivider),
    Horizontal(HorizontalDivider),
}

impl GridDividerConfig {
    pub fn is_hidden(&self) -> bool {
        match self {
            GridDividerConfig::Vertical(v) => v.hidden,
            GridDividerConfig::Horizontal(h) => h.hidden,
        }
    }
}

impl From<VerticalDivider> for GridDividerConfig {
    fn from(value: VerticalDivider) -> Self {
        GridDividerConfig::Vertical(value)
    }
}

impl From<HorizontalDivider> for GridDividerConfig {
    fn from(value: HorizontalDivider) -> Self {
        GridDividerConfig::Horizontal(value)
    }
}

impl From<GridDividerConfig> for Responsive<GridDividerConfig> {
    fn from(value: GridDividerConfig) -> Self {
        Responsive::Value(value)
    }
}

impl From<VerticalDivider> for Responsive<GridDividerConfig> {
    fn from(value: VerticalDivider) -> Self {
        Responsive::Value(value.into())
    }
}

impl From<HorizontalDivider> for Responsive<GridDividerConfig> {
    fn from(value: HorizontalDivider) -> Self {
        Responsive::Value(value.into())
    }
}

/// Tokens for one divider configuration.
///
/// With `include_visibility`, a hidden divider starts with `hidden`.
pub fn single_divider_classes(config: &GridDividerConfig, include_visibility: bool) -> ClassList {
    let mut classes = ClassList::new();

    if include_visibility && config.is_hidden() {
        classes.push(HIDDEN_CLASS);
    }

    match config {
        GridDividerConfig::Vertical(v) => {
            classes.push(format!("grid-divider-v-{}", v.after_col));
            if let Some(span) = v.row_span {
                classes.push(format!("grid-divider-row-span-{span}"));
                if let Some(start) = v.row_start {
                    classes.push(format!("grid-divider-row-start-{start}"));
                }
            }
        }
        GridDividerConfig::Horizontal(h) => {
            classes.push(format!("grid-divider-h-{}", h.after_row));
            if let Some(span) = h.col_span {
                classes.push(format!("grid-divider-col-span-{span}"));
                if let Some(start) = h.col_start {
                    classes.push(format!("grid-divider-col-start-{start}"));
                }
            }
        }
    }

    classes
}

/// Compiles divider configurations, with a configurable token for undoing an
/// earlier `hidden`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DividerCompiler {
    restore_token: Cow<'static, str>,
}

impl Default for DividerCompiler {
    fn default() -> Self {
        Self {
            restore_token: Cow::Borrowed(DEFAULT_RESTORE_TOKEN),
        }
    }
}

impl DividerCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `token` (e.g. `flex` or `contents`) instead of `block` when a
    /// breakpoint shows a divider that a smaller breakpoint hid.
    pub fn with_restore_token(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        self.restore_token = token.into();
        self
    }

    pub fn restore_token(&self) -> &str {
        &self.restore_token
    }

    pub fn compile(&self, config: Option<&Responsive<GridDividerConfig>>) -> ClassList {
        let map = match config {
            None => return ClassList::new(),
            Some(Responsive::Value(config)) => return single_divider_classes(config, true),
            Some(Responsive::Breakpoints(map)) => map,
        };

        let mut classes = ClassList::new();
        let mut was_hidden = false;

        if let Some(base) = &map.base {
            classes.append(single_divider_classes(base, true));
            was_hidden = base.is_hidden();
        }

        for (bp, config) in map.breakpoints() {
            let is_hidden = config.is_hidden();
            if was_hidden && !is_hidden {
                classes.push(format!("{bp}:{}", self.restore_token));
            }
            classes.append(single_divider_classes(config, false).prefixed(bp));
            was_hidden = is_hidden;
        }

        classes
    }
}

/// [`DividerCompiler::compile`] with the default `block` restore token.
pub fn divider_classes(config: Option<&Responsive<GridDividerConfig>>) -> ClassList {
    DividerCompiler::default().compile(config)
}
