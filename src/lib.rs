//! # Gridline
//! Gridline provides responsive CSS grid components whose layout is expressed
//! entirely through utility class names.
//!
//! There are two components:
//! - [`grid`](views::grid) renders a grid container configured with `cols`,
//!   `rows`, `gap`, `gap_x` and `gap_y`.
//! - [`divider`](views::divider) renders a decorative line after a column or
//!   after a row, hidden from assistive technology.
//!
//! Every setting can be a single value or a [`BreakpointMap`](layout::BreakpointMap)
//! keyed by `base, sm, md, lg, xl, 2xl`.
//!
//! ## Example
//! ```rust
//! use gridline::prelude::*;
//!
//! # fn main() -> Result<(), GridSizeError> {
//! let view = grid()
//!     .cols(
//!         BreakpointMap::<GridSize>::new()
//!             .with_base(GridSize::new(1)?)
//!             .with_md(GridSize::new(2)?),
//!     )
//!     .gap(6)
//!     .child(divider_with(
//!         BreakpointMap::<GridDividerConfig>::new()
//!             .with_base(HorizontalDivider::after_row(1))
//!             .with_md(VerticalDivider::after_col(1)),
//!     ));
//!
//! assert_eq!(
//!     view.to_html(),
//!     concat!(
//!         r#"<div class="relative grid gd-cols-1 md:gd-cols-2 gd-gap-6">"#,
//!         r#"<div class="grid-divider grid-divider-h-1 md:grid-divider-v-1" aria-hidden="true"></div>"#,
//!         "</div>",
//!     )
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Class names
//!
//! The components never produce CSS. They emit class names such as
//! `gd-cols-2`, `md:gd-cols-4` or `grid-divider-v-3` that an external
//! stylesheet defines. The compilers behind them live in [`style`] and can be
//! used on their own, for instance from another view layer.
//!
//! Generated classes are merged with each component's base class and the
//! caller's classes so that a caller class of the same utility group, such as
//! `absolute` against the base `relative`, replaces the generated one.
//!
//! ## Configuration
//!
//! With the `serde` feature (on by default) the [`config`] module reads
//! component props from JSON in the same shape a web frontend uses.

#[cfg(feature = "serde")]
pub mod config;
pub mod element;
pub mod layout;
pub mod style;
pub mod unit;
mod view;
pub mod views;

pub use element::{Element, Node};
pub use view::{IntoView, View};

pub mod prelude {
    pub use crate::layout::{Breakpoint, BreakpointMap, Responsive};
    pub use crate::style::{GridDividerConfig, HorizontalDivider, VerticalDivider};
    pub use crate::unit::{ClassValue, GridSize, GridSizeError};
    pub use crate::views::*;
    pub use crate::{IntoView, View};
}
