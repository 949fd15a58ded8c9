//! Tab configuration: the data half of a tab's props.
//!
//! Callbacks and surface replacements cannot be expressed as data; attach
//! them to the [`TabProps`] produced by [`TabConfig::into_props`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, TabError};
use crate::overrides::{Override, OverrideProps, Overrides};
use crate::tab::TabProps;

/// Direction the owning tab-list lays its tabs out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(TabError::InvalidOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// How wide a tab draws itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    /// As wide as its label.
    #[default]
    Auto,
    /// Every tab gets the same slot width.
    Equal,
    /// Stretch to the slot the tab-list assigns.
    Fill,
}

impl FromStr for WidthMode {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "equal" => Ok(Self::Equal),
            "fill" => Ok(Self::Fill),
            other => Err(TabError::InvalidWidthMode(other.to_string())),
        }
    }
}

impl fmt::Display for WidthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Equal => write!(f, "equal"),
            Self::Fill => write!(f, "fill"),
        }
    }
}

/// Serializable tab configuration.
///
/// ```json
/// { "id": "tab-1", "active": true, "widthMode": "fill", "title": "Logs",
///   "overrides": { "tab": { "attrs": { "data-testid": "logs" } } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabConfig {
    pub id: String,
    pub active: bool,
    pub disabled: bool,
    pub orientation: Orientation,
    #[serde(alias = "width_mode")]
    pub width_mode: WidthMode,
    pub title: String,
    pub overrides: OverridesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverridesConfig {
    pub tab: Option<OverrideConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Extra attributes passed through to the presentation surface.
    pub attrs: BTreeMap<String, String>,
}

impl TabConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TabError::EmptyId);
        }
        Ok(())
    }

    pub fn into_props(self) -> TabProps {
        let overrides = Overrides {
            tab: self.overrides.tab.map(|tab| Override {
                component: None,
                props: OverrideProps {
                    attrs: tab.attrs,
                    ..Default::default()
                },
            }),
        };

        TabProps::new(self.id)
            .active(self.active)
            .disabled(self.disabled)
            .orientation(self.orientation)
            .width_mode(self.width_mode)
            .title(self.title)
            .overrides(overrides)
    }
}
