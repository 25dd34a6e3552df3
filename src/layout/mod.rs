//! Responsive breakpoints and breakpoint-keyed values.
//!
//! This module provides:
//! - [`Breakpoint`] - The fixed, ordered set of named screen widths
//! - [`BreakpointMap`] - One optional value per breakpoint plus `base`
//! - [`Responsive`] - A value that is either unconditional or a [`BreakpointMap`]
//! - [`GridBreakpoints`] - Minimum widths used to resolve a value at a viewport width

pub mod responsive;

pub use responsive::{Breakpoint, BreakpointMap, GridBreakpoints, Responsive};
