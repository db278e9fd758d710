use serde::{Deserialize, Serialize};

use crate::error::{CrnError, CrnResult};

/// Full input vector for one catchment run.
/// Defaults reproduce the Ganga scenario of Dingle et al. (2018).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputParameters {
    /// Drainage basin area in km².
    pub catchment_area_km2: f64,
    /// Bulk rock density in t/m³ (numerically equal to g/cm³).
    pub rock_density: f64,
    /// Cosmic-ray attenuation length in g/cm².
    pub attenuation_length: f64,
    /// Erosion rate outside the landslide area, mm/yr.
    pub background_erosion_rate: f64,
    /// Background erosion rate inside the landslide area, mm/yr.
    /// Usually kept equal to `background_erosion_rate`.
    pub landslide_erosion_rate: f64,
    /// Share of the catchment affected by landsliding, in percent (0-100).
    pub landslide_area_percent: f64,
    /// Mean landslide scar depth in metres.
    pub landslide_depth_m: f64,
    /// Catchment-average surface production rate, atoms/g/yr.
    pub regional_production: f64,
    /// Surface production rate over the landslide area, atoms/g/yr.
    pub landslide_production: f64,
    /// Inverse evacuation time of landslide sediment, 1/yr.  1 = flushed in a year.
    pub flux_delay_factor: f64,
    /// Radioactive decay constant, 1/yr.  0 treats the nuclide as stable.
    pub decay_constant: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            catchment_area_km2: 23_000.0,
            rock_density: 2.7,
            attenuation_length: 160.0,
            background_erosion_rate: 0.6,
            landslide_erosion_rate: 0.6,
            landslide_area_percent: 0.5,
            landslide_depth_m: 2.0,
            regional_production: 35.0,
            landslide_production: 10.0,
            flux_delay_factor: 1.0,
            decay_constant: 0.0,
        }
    }
}

impl InputParameters {
    /// Check every input against its physical domain.
    ///
    /// Returns the first offending parameter.  Zero erosion rates pass here;
    /// they surface as `DivisionByZero` where the rate becomes a divisor.
    pub fn validate(&self) -> CrnResult<()> {
        let fields = [
            ("catchment_area_km2", self.catchment_area_km2),
            ("rock_density", self.rock_density),
            ("attenuation_length", self.attenuation_length),
            ("background_erosion_rate", self.background_erosion_rate),
            ("landslide_erosion_rate", self.landslide_erosion_rate),
            ("landslide_area_percent", self.landslide_area_percent),
            ("landslide_depth_m", self.landslide_depth_m),
            ("regional_production", self.regional_production),
            ("landslide_production", self.landslide_production),
            ("flux_delay_factor", self.flux_delay_factor),
            ("decay_constant", self.decay_constant),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CrnError::invalid(name, value, "must be finite"));
            }
        }

        positive("catchment_area_km2", self.catchment_area_km2)?;
        positive("rock_density", self.rock_density)?;
        positive("attenuation_length", self.attenuation_length)?;
        positive("landslide_depth_m", self.landslide_depth_m)?;

        if !(0.0..=100.0).contains(&self.landslide_area_percent) {
            return Err(CrnError::invalid(
                "landslide_area_percent",
                self.landslide_area_percent,
                "must lie within [0, 100] percent",
            ));
        }

        non_negative("background_erosion_rate", self.background_erosion_rate)?;
        non_negative("landslide_erosion_rate", self.landslide_erosion_rate)?;
        non_negative("regional_production", self.regional_production)?;
        non_negative("landslide_production", self.landslide_production)?;
        non_negative("flux_delay_factor", self.flux_delay_factor)?;
        non_negative("decay_constant", self.decay_constant)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> CrnResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CrnError::invalid(name, value, "must be > 0"))
    }
}

fn non_negative(name: &'static str, value: f64) -> CrnResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CrnError::invalid(name, value, "must be >= 0"))
    }
}
