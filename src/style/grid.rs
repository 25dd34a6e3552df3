//! Class names for the grid container.

use std::fmt::Display;

use super::ClassList;
use crate::{
    layout::Responsive,
    unit::{ClassValue, GridColSize, GridRowSize},
};

pub const COLS_PREFIX: &str = "gd-cols";
pub const ROWS_PREFIX: &str = "gd-rows";
pub const GAP_PREFIX: &str = "gd-gap";
pub const GAP_X_PREFIX: &str = "gd-gap-x";
pub const GAP_Y_PREFIX: &str = "gd-gap-y";

/// Compiles a responsive value into `{prefix}-{value}` tokens.
///
/// A bare value yields one unprefixed token. A breakpoint map yields `base`
/// unprefixed, then `{bp}:{prefix}-{value}` for each defined breakpoint from
/// `sm` to `2xl`. Values are interpolated as they are, without validation.
pub fn responsive_classes<T: Display>(prefix: &str, value: Option<&Responsive<T>>) -> ClassList {
    let mut classes = ClassList::new();
    match value {
        None => {}
        Some(Responsive::Value(value)) => classes.push(format!("{prefix}-{value}")),
        Some(Responsive::Breakpoints(map)) => {
            if let Some(base) = &map.base {
                classes.push(format!("{prefix}-{base}"));
            }
            for (bp, value) in map.breakpoints() {
                classes.push(format!("{bp}:{prefix}-{value}"));
            }
        }
    }
    classes
}

/// Container-level grid configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GridLayout {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cols: Option<Responsive<GridColSize>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rows: Option<Responsive<GridRowSize>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gap: Option<Responsive<ClassValue>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gap_x: Option<Responsive<ClassValue>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gap_y: Option<Responsive<ClassValue>>,
}

impl GridLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns, rows, gap, horizontal gap, then vertical gap.
    pub fn classes(&self) -> ClassList {
        let mut classes = responsive_classes(COLS_PREFIX, self.cols.as_ref());
        classes.append(responsive_classes(ROWS_PREFIX, self.rows.as_ref()));
        classes.append(responsive_classes(GAP_PREFIX, self.gap.as_ref()));
        classes.append(responsive_classes(GAP_X_PREFIX, self.gap_x.as_ref()));
        classes.append(responsive_classes(GAP_Y_PREFIX, self.gap_y.as_ref()));
        classes
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_none()
            && self.rows.is_none()
            && self.gap.is_none()
            && self.gap_x.is_none()
            && self.gap_y.is_none()
    }
}
