//! Layer-shell surface lookup from `j/layers`.
//!
//! The reply maps each monitor name to its four layer levels
//! (background, bottom, top, overlay). A bar is on screen when a surface
//! with its namespace sits on the top level of any monitor.

use std::collections::HashMap;

use serde::Deserialize;

use hotspots_core::HotspotsResult;

use crate::hyprctl;

/// Index of the top layer in the `levels` map.
const TOP_LEVEL: &str = "2";

#[derive(Debug, Deserialize)]
struct MonitorLayers {
    #[serde(default)]
    levels: HashMap<String, Vec<LayerSurface>>,
}

#[derive(Debug, Deserialize)]
struct LayerSurface {
    namespace: String,
}

type Layers = HashMap<String, MonitorLayers>;

/// Returns whether `namespace` has a surface on the top layer.
fn has_top_layer_surface(layers: &Layers, namespace: &str) -> bool {
    layers.values().any(|monitor| {
        monitor
            .levels
            .get(TOP_LEVEL)
            .is_some_and(|surfaces| surfaces.iter().any(|s| s.namespace == namespace))
    })
}

/// Asks the compositor whether a bar with this namespace is visible.
pub fn is_visible(namespace: &str) -> HotspotsResult<bool> {
    let layers: Layers = hyprctl::request_json("layers")?;
    Ok(has_top_layer_surface(&layers, namespace))
}
