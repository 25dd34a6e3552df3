//! # Gridline builtin Views
//!
//! [`grid`] renders a grid container and [`divider`] / [`divider_with`]
//! render a divider placed inside one. Both accept caller classes and
//! attributes through the [`Decorators`] trait.

mod decorator;
pub use decorator::*;

mod grid;
pub use grid::*;

mod divider;
pub use divider::*;
