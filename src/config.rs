//! Component configuration as plain data.
//!
//! [GridProps] and [DividerProps] mirror the props a web frontend passes to
//! the components, so the same JSON can drive server-rendered markup:
//!
//! ```rust
//! use gridline::config::GridProps;
//! use gridline::View;
//!
//! # fn main() -> Result<(), gridline::config::ConfigError> {
//! let props = GridProps::from_json(r#"{ "cols": { "base": 2, "lg": 4 }, "className": "mt-4" }"#)?;
//! assert_eq!(
//!     props.into_view().to_html(),
//!     r#"<div class="relative grid gd-cols-2 lg:gd-cols-4 mt-4"></div>"#
//! );
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use thiserror::Error;

use crate::{
    layout::{BreakpointMap, Responsive},
    style::{GridDividerConfig, GridLayout},
    views::{Decorators, GridDivider, GridParent, divider},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid component configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Props of a grid container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridProps {
    #[serde(flatten)]
    pub layout: GridLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl GridProps {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn into_view(self) -> GridParent {
        let view = GridParent::new(self.layout);
        match self.class_name {
            Some(class) => view.class(class),
            None => view,
        }
    }
}

/// Props of a grid divider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerProps {
    #[serde(
        deserialize_with = "deserialize_divider_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub config: Option<Responsive<GridDividerConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl DividerProps {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn into_view(self) -> GridDivider {
        let mut view = divider();
        if let Some(config) = self.config {
            view = view.config(config);
        }
        match self.class_name {
            Some(class) => view.class(class),
            None => view,
        }
    }
}

/// Key whose presence marks an object as a single divider rather than a
/// breakpoint map.
const ORIENTATION_KEY: &str = "orientation";

/// A divider config is a single [GridDividerConfig] whenever `orientation` is
/// present at the top level, so its errors surface instead of the object
/// falling back to an empty breakpoint map.
fn deserialize_divider_config<'de, D>(
    deserializer: D,
) -> Result<Option<Responsive<GridDividerConfig>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let config = if value.get(ORIENTATION_KEY).is_some() {
        serde_json::from_value::<GridDividerConfig>(value).map(Responsive::Value)
    } else {
        serde_json::from_value::<BreakpointMap<GridDividerConfig>>(value)
            .map(Responsive::Breakpoints)
    };
    config.map(Some).map_err(D::Error::custom)
}
