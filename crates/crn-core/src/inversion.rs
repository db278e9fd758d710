//! Back-conversion of the outlet concentration into a catchment-wide
//! erosion rate, as a basin-average CRN study would report it.
//!
//! The rate assumes uniform steady erosion under the regional production
//! rate.  Its implied flux (`average_cosmo_flux_mt`) is set against the flux
//! the model actually moved (`actual_flux_mt`); with landsliding the two part
//! ways, and that gap is the quantity of interest.
use serde::Serialize;

use crate::error::CrnResult;
use crate::params::InputParameters;
use crate::production::Material;
use crate::units::{km2_to_m2, megatonnes, mm_to_m};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvertedErosion {
    /// mm/yr.
    pub erosion_rate: f64,
    /// Mt/yr implied by `erosion_rate` over the whole catchment.
    pub average_cosmo_flux_mt: f64,
    /// Mt/yr: background flux plus delayed landslide flux.
    pub actual_flux_mt: f64,
    /// `actual_flux_mt / average_cosmo_flux_mt`; 1 when the two agree.
    pub flux_bias: f64,
}

pub fn invert_erosion_rate(
    p: &InputParameters,
    outlet_concentration: f64,
    background_flux_mt: f64,
    landslide_flux_mt: f64,
) -> CrnResult<InvertedErosion> {
    let erosion_rate = Material::from_params(p)
        .erosion_rate_for(p.regional_production, outlet_concentration)?;

    let average_cosmo_flux_mt = megatonnes(
        mm_to_m(erosion_rate) * km2_to_m2(p.catchment_area_km2),
        p.rock_density,
    );
    let actual_flux_mt = background_flux_mt + landslide_flux_mt * p.flux_delay_factor;
    let flux_bias = if average_cosmo_flux_mt > 0.0 {
        actual_flux_mt / average_cosmo_flux_mt
    } else {
        f64::INFINITY
    };

    tracing::debug!(erosion_rate, average_cosmo_flux_mt, actual_flux_mt, "inverted erosion");
    Ok(InvertedErosion { erosion_rate, average_cosmo_flux_mt, actual_flux_mt, flux_bias })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrnError;
    use approx::assert_relative_eq;

    #[test]
    fn paper_scenario_inversion() {
        let p = InputParameters::default();
        let inv = invert_erosion_rate(&p, 4625.735_162_296_162, 37.0737, 621.0).unwrap();
        assert_relative_eq!(inv.erosion_rate, 4.483_771_770_981_646_5, max_relative = 1e-12);
        assert_relative_eq!(inv.average_cosmo_flux_mt, 278.442_226_977_960_3, max_relative = 1e-12);
        assert_relative_eq!(inv.actual_flux_mt, 658.0737, max_relative = 1e-14);
        assert!(inv.flux_bias > 2.0);
    }

    #[test]
    fn background_only_catchment_inverts_to_its_own_rate() {
        // With no landslides the outlet carries the background concentration,
        // and inverting it must give back the background rate and flux.
        let p = InputParameters { landslide_area_percent: 0.0, ..Default::default() };
        let c_bg = Material::from_params(&p)
            .steady_state_concentration(p.regional_production, p.background_erosion_rate, "c")
            .unwrap();
        let bg_flux = 0.6 / 1000.0 * 23_000.0e6 * 2.7 / 1.0e6;
        let inv = invert_erosion_rate(&p, c_bg, bg_flux, 0.0).unwrap();
        assert_relative_eq!(inv.erosion_rate, 0.6, max_relative = 1e-12);
        assert_relative_eq!(inv.average_cosmo_flux_mt, inv.actual_flux_mt, max_relative = 1e-12);
        assert_relative_eq!(inv.flux_bias, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn delay_discounts_landslide_flux() {
        let p = InputParameters { flux_delay_factor: 0.25, ..Default::default() };
        let inv = invert_erosion_rate(&p, 5000.0, 37.0737, 621.0).unwrap();
        assert_relative_eq!(inv.actual_flux_mt, 37.0737 + 155.25, max_relative = 1e-14);
    }

    #[test]
    fn zero_outlet_concentration_is_division_by_zero() {
        let p = InputParameters::default();
        assert_eq!(
            invert_erosion_rate(&p, 0.0, 37.0, 621.0),
            Err(CrnError::div_zero("inverted erosion rate"))
        );
    }
}
