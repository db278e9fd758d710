//! Landslide area, volume and mass derived from catchment geometry.
use serde::Serialize;

use crate::error::{CrnError, CrnResult};
use crate::params::InputParameters;
use crate::units::{km2_to_m2, megatonnes, percent_to_fraction};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandslideGeometry {
    /// m².
    pub area_m2: f64,
    /// m³.
    pub volume_m3: f64,
    /// Mass of the displaced material, Mt.
    pub flux_mt: f64,
}

/// Derive landslide area, volume and mass flux.
///
/// Fails on an area share outside [0, 100] % or a non-positive depth, where the
/// volume has no physical meaning.
pub fn landslide_geometry(p: &InputParameters) -> CrnResult<LandslideGeometry> {
    if !(0.0..=100.0).contains(&p.landslide_area_percent) {
        return Err(CrnError::invalid(
            "landslide_area_percent",
            p.landslide_area_percent,
            "must lie within [0, 100] percent",
        ));
    }
    if p.landslide_depth_m <= 0.0 {
        return Err(CrnError::invalid(
            "landslide_depth_m",
            p.landslide_depth_m,
            "must be > 0",
        ));
    }

    let area_m2 = percent_to_fraction(p.landslide_area_percent) * km2_to_m2(p.catchment_area_km2);
    let volume_m3 = area_m2 * p.landslide_depth_m;
    let flux_mt = megatonnes(volume_m3, p.rock_density);

    tracing::debug!(area_m2, volume_m3, flux_mt, "landslide geometry");
    Ok(LandslideGeometry { area_m2, volume_m3, flux_mt })
}
