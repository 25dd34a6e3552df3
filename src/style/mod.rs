//! # Style
//! Compilers that turn grid configuration into utility class names.
//!
//! Nothing here produces CSS. Every function maps plain configuration to an
//! ordered [ClassList] whose tokens are resolved later by an external
//! stylesheet, so spelling and order of the tokens are part of the contract.
//!
//! ## Responsive classes
//!
//! [responsive_classes] turns a [Responsive](crate::layout::Responsive) value
//! into `{prefix}-{value}` tokens. A bare value gives a single token. A
//! breakpoint map gives its `base` value unprefixed and then one
//! `{bp}:{prefix}-{value}` token per defined breakpoint, always in
//! `sm, md, lg, xl, 2xl` order:
//!
//! ```rust
//! use gridline::layout::{BreakpointMap, Responsive};
//! use gridline::style::responsive_classes;
//!
//! let cols = Responsive::from(BreakpointMap::<u32>::new().with_lg(4u32).with_base(2u32));
//! assert_eq!(
//!     responsive_classes("gd-cols", Some(&cols)).to_string(),
//!     "gd-cols-2 lg:gd-cols-4"
//! );
//! ```
//!
//! [GridLayout] bundles the five container-level values.
//!
//! ## Dividers
//!
//! [divider_classes] compiles a [GridDividerConfig], or a breakpoint map of
//! them, into geometry and visibility tokens. See the [divider] module for the
//! visibility rules across breakpoints.
//!
//! ## Merging
//!
//! Generated classes are combined with a component's base class and the
//! caller's classes by a [ClassMerger], which lets later classes override
//! earlier classes of the same utility group.

mod class_list;
pub mod divider;
mod grid;
mod merge;

pub use class_list::ClassList;
pub use divider::{
    DividerCompiler, GridDividerConfig, HorizontalDivider, VerticalDivider, divider_classes,
    single_divider_classes,
};
pub use grid::{
    COLS_PREFIX, GAP_PREFIX, GAP_X_PREFIX, GAP_Y_PREFIX, GridLayout, ROWS_PREFIX,
    responsive_classes,
};
pub use merge::{ClassGroup, ClassMerger, merge_classes};
