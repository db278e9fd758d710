//! Flux-weighted mixing of landslide and background sediment at the outlet.
use crate::error::{CrnError, CrnResult};

/// One sediment source entering the outlet mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Source {
    /// atoms/g.
    pub concentration: f64,
    /// Mt/yr.
    pub flux_mt: f64,
}

/// Outlet concentration of the landslide and background mixture.
///
/// `delay` scales the landslide flux to represent evacuation spread over
/// 1/`delay` years.  A source with zero weight contributes nothing and the
/// other source's concentration is returned unchanged.
pub fn outlet_concentration(landslide: Source, background: Source, delay: f64) -> CrnResult<f64> {
    let landslide_weight = landslide.flux_mt * delay;
    let total = background.flux_mt + landslide_weight;
    if total == 0.0 {
        return Err(CrnError::div_zero("outlet concentration"));
    }
    if landslide_weight == 0.0 {
        return Ok(background.concentration);
    }
    if background.flux_mt == 0.0 {
        return Ok(landslide.concentration);
    }

    Ok((landslide.concentration * landslide_weight
        + background.concentration * background.flux_mt)
        / total)
}
