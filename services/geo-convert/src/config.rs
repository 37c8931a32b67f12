//! Pipeline configuration.
//!
//! A pipeline is a registered projection, an orientation and a per-axis
//! scale. Values come from an optional YAML file and are then overridden by
//! whatever was given on the command line or in the environment.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use geo_common::{GeoError, GeoResult, Orientation};
use geo_projection::world::BTE_SCALE;
use geo_projection::{orient_projection, registry, ProjectionRef, ScaleProjection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Projection pipeline description, as stored in a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_projection")]
    pub projection: String,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

fn default_projection() -> String {
    "bteairocean".to_string()
}

fn default_scale() -> f64 {
    BTE_SCALE
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            projection: default_projection(),
            orientation: Orientation::default(),
            scale_x: default_scale(),
            scale_y: default_scale(),
        }
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub projection: Option<String>,
    pub orientation: Option<Orientation>,
    pub scale: Option<f64>,
}

impl PipelineConfig {
    /// Load a pipeline from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PipelineConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(projection = %config.projection, path = %path.display(), "Loaded pipeline config");
        Ok(config)
    }

    /// Start from `path` if given, otherwise the defaults, then apply `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(projection) = overrides.projection {
            self.projection = projection;
        }
        if let Some(orientation) = overrides.orientation {
            self.orientation = orientation;
        }
        if let Some(scale) = overrides.scale {
            self.scale_x = scale;
            self.scale_y = scale;
        }
        self
    }

    /// Assemble the projection pipeline. Fails on an unknown projection name
    /// or a scale that would make conversion meaningless.
    pub fn build(&self) -> GeoResult<ProjectionRef> {
        for (param, value) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
            if !value.is_finite() || value == 0.0 {
                return Err(GeoError::invalid_parameter(
                    param,
                    format!("must be finite and non-zero, got {}", value),
                ));
            }
        }

        let base = registry::require(&self.projection)?;
        let oriented = orient_projection(base, self.orientation);

        debug!(
            projection = %self.projection,
            orientation = %self.orientation,
            scale_x = self.scale_x,
            scale_y = self.scale_y,
            "Built projection pipeline"
        );

        Ok(Arc::new(ScaleProjection::new(
            oriented,
            self.scale_x,
            self.scale_y,
        )))
    }
}
