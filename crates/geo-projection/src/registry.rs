//! Named projection singletons.

use std::collections::HashMap;
use std::sync::Arc;

use geo_common::{GeoError, GeoResult};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::airocean::Airocean;
use crate::conformal::ConformalEstimate;
use crate::modified_airocean::ModifiedAirocean;
use crate::projection::{Equirectangular, ProjectionRef};

static PROJECTIONS: Lazy<HashMap<&'static str, ProjectionRef>> = Lazy::new(|| {
    let mut projections: HashMap<&'static str, ProjectionRef> = HashMap::new();
    projections.insert("equirectangular", Arc::new(Equirectangular));
    projections.insert("airocean", Arc::new(Airocean::new()));
    projections.insert("conformal", Arc::new(ConformalEstimate::new()));
    projections.insert("bteairocean", Arc::new(ModifiedAirocean::new()));

    debug!(count = projections.len(), "Initialized projection registry");
    projections
});

/// The shared instance registered under `name`. Names are case-sensitive.
pub fn lookup(name: &str) -> Option<ProjectionRef> {
    PROJECTIONS.get(name).cloned()
}

/// Like [`lookup`], but an unknown name is an error.
pub fn require(name: &str) -> GeoResult<ProjectionRef> {
    lookup(name).ok_or_else(|| GeoError::UnknownProjection(name.to_string()))
}

/// Registered names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = PROJECTIONS.keys().copied().collect();
    names.sort_unstable();
    names
}
