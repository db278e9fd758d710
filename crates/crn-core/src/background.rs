//! Steady background erosion over the part of the catchment without landslides.
use serde::Serialize;

use crate::error::CrnResult;
use crate::geometry::LandslideGeometry;
use crate::params::InputParameters;
use crate::production::Material;
use crate::units::{km2_to_m2, megatonnes, mm_to_m};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundErosion {
    /// Mt/yr.
    pub flux_mt: f64,
    /// atoms/g.
    pub concentration: f64,
}

/// Flux and concentration of the non-landslide area.
///
/// The concentration is the steady-state value for the regional production
/// rate; no depth profile is integrated.
pub fn background_erosion(
    p: &InputParameters,
    geometry: &LandslideGeometry,
) -> CrnResult<BackgroundErosion> {
    let concentration = Material::from_params(p).steady_state_concentration(
        p.regional_production,
        p.background_erosion_rate,
        "background concentration",
    )?;

    let area_m2 = km2_to_m2(p.catchment_area_km2) - geometry.area_m2;
    let flux_mt = megatonnes(mm_to_m(p.background_erosion_rate) * area_m2, p.rock_density);

    tracing::debug!(flux_mt, concentration, "background erosion");
    Ok(BackgroundErosion { flux_mt, concentration })
}
