//! Value types that end up interpolated into class names.

use std::fmt;

use thiserror::Error;

use crate::layout::Responsive;

/// Number of tracks in the grid utilities.
pub const MAX_GRID_SIZE: u8 = 12;

/// A column or row count between 1 and 12.
///
/// The compilers never check the range themselves; this type is where the
/// constraint lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct GridSize(u8);

pub type GridColSize = GridSize;
pub type GridRowSize = GridSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grid size must be between 1 and 12, got {0}")]
pub struct GridSizeError(pub u8);

impl GridSize {
    pub const fn new(size: u8) -> Result<Self, GridSizeError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GridSizeError(size));
        }
        Ok(GridSize(size))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GridSizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GridSize::new(value)
    }
}

impl From<GridSize> for u8 {
    fn from(value: GridSize) -> Self {
        value.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A number or a string, used for gap sizes such as `4` or `"px"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ClassValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassValue::Int(v) => v.fmt(f),
            // `1.0` prints as `1`, `0.5` as `0.5`
            ClassValue::Float(v) => v.fmt(f),
            ClassValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        ClassValue::Int(value)
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        ClassValue::Int(i64::from(value))
    }
}

impl From<u32> for ClassValue {
    fn from(value: u32) -> Self {
        ClassValue::Int(i64::from(value))
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        ClassValue::Float(value)
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Text(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Text(value)
    }
}

impl From<GridSize> for Responsive<GridSize> {
    fn from(value: GridSize) -> Self {
        Responsive::Value(value)
    }
}

macro_rules! responsive_class_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Responsive<ClassValue> {
                fn from(value: $ty) -> Self {
                    Responsive::Value(value.into())
                }
            }
        )*
    };
}

responsive_class_value_from!(ClassValue, i64, i32, u32, f64, &str, String);
