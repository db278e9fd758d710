//! Production-rate and concentration relations from Niedermann (2002).
//!
//! * eq. 20, production at mass depth: P(z) = P₀ · exp(−ρ·z / Λ)
//! * eq. 33, steady-state concentration under erosion:
//!   C = P·Λ / (ρ·ε + Λ·λ)
//!
//! z and ε are in cm and cm/yr, ρ in g/cm³, Λ in g/cm².  Erosion rates cross
//! this boundary in mm/yr and are converted here.
use crate::error::{CrnError, CrnResult};
use crate::params::InputParameters;
use crate::units::{cm_to_mm, mm_to_cm};

/// Material constants shared by every concentration evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// g/cm³.
    pub density: f64,
    /// g/cm².
    pub attenuation: f64,
    /// 1/yr.
    pub decay: f64,
}

impl Material {
    pub fn from_params(p: &InputParameters) -> Self {
        Self {
            density: p.rock_density,
            attenuation: p.attenuation_length,
            decay: p.decay_constant,
        }
    }

    /// Production rate at `depth_cm` below the surface (eq. 20).
    pub fn production_at_depth(&self, surface_production: f64, depth_cm: f64) -> f64 {
        surface_production * (-self.density * depth_cm / self.attenuation).exp()
    }

    /// Steady-state concentration in atoms/g for a production rate and an
    /// erosion rate in mm/yr (eq. 33).
    pub fn steady_state_concentration(
        &self,
        production: f64,
        erosion_mm_yr: f64,
        quantity: &'static str,
    ) -> CrnResult<f64> {
        let denom = self.density * mm_to_cm(erosion_mm_yr) + self.attenuation * self.decay;
        if denom == 0.0 {
            return Err(CrnError::div_zero(quantity));
        }
        Ok(production * self.attenuation / denom)
    }

    /// Erosion rate in mm/yr that yields `concentration` under `production`
    /// (eq. 33 solved for ε).
    pub fn erosion_rate_for(&self, production: f64, concentration: f64) -> CrnResult<f64> {
        if concentration == 0.0 {
            return Err(CrnError::div_zero("inverted erosion rate"));
        }
        let cm_yr = (self.attenuation * production / concentration
            - self.attenuation * self.decay)
            / self.density;
        if cm_yr < 0.0 {
            return Err(CrnError::invalid(
                "decay_constant",
                self.decay,
                "outlet concentration exceeds the secular-equilibrium limit of regional production",
            ));
        }
        Ok(cm_to_mm(cm_yr))
    }
}
