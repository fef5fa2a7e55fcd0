use crate::error::ConfigError;
use crate::limits::DEFAULT_STEP_BUDGET;
use crate::model::{ColorIndex, Palette, PaletteEntry};
use serde::{Deserialize, Serialize};

pub use crate::algorithms::assign::Strategy;

/// Engine settings. Every field has a default, so `{}` is a complete document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub palette: Vec<PaletteEntry>,
    pub strategy: Strategy,
    /// `None` disables the limit.
    pub step_budget: Option<u64>,
    pub seed: u64,
    /// Vertex pinned when the board is (re)built.
    pub anchor_vertex: String,
    /// Color for the anchor; the first palette entry when absent.
    pub anchor_color: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            palette: Palette::default_entries(),
            strategy: Strategy::default(),
            step_budget: Some(DEFAULT_STEP_BUDGET),
            seed: 0,
            anchor_vertex: "A1-Top".to_string(),
            anchor_color: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_value(v)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::new(self.palette.clone())
    }

    /// Resolves `anchor_color` against `palette`.
    pub fn anchor_color_index(&self, palette: &Palette) -> Result<ColorIndex, ConfigError> {
        match &self.anchor_color {
            None => Ok(0),
            Some(name) => palette
                .index_of(name)
                .ok_or_else(|| ConfigError::UnknownAnchorColor(name.clone())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let palette = self.palette()?;
        self.anchor_color_index(&palette)?;
        Ok(())
    }
}
