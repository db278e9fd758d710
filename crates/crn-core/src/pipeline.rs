//! Pipeline orchestrator: runs the model stages in order.
//!
//!   1. Parameter validation
//!   2. Landslide geometry
//!   3. Landslide concentration
//!   4. Background erosion
//!   5. Outlet mixing
//!   6. Erosion-rate inversion
//!
//! Nothing is reported until every stage has succeeded.

use std::fmt;

use serde::Serialize;

use crate::background::{background_erosion, BackgroundErosion};
use crate::error::CrnResult;
use crate::geometry::{landslide_geometry, LandslideGeometry};
use crate::inversion::{invert_erosion_rate, InvertedErosion};
use crate::landslide::{landslide_concentration, LandslideConcentration};
use crate::mixing::{outlet_concentration, Source};
use crate::params::InputParameters;

/// Full output of one model run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchmentReport {
    pub inputs: InputParameters,
    pub geometry: LandslideGeometry,
    pub landslide: LandslideConcentration,
    pub background: BackgroundErosion,
    /// atoms/g.
    pub outlet_concentration: f64,
    pub inversion: InvertedErosion,
}

/// One labeled scalar of the printed summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.value, self.unit)
    }
}

impl CatchmentReport {
    /// The ten headline results, in pipeline order.
    pub fn summary_lines(&self) -> [ReportLine; 10] {
        let line = |label, value, unit| ReportLine { label, value, unit };
        [
            line("Landslide area", self.geometry.area_m2, "m2"),
            line("Landslide volume", self.geometry.volume_m3, "m3"),
            line("Landslide flux", self.geometry.flux_mt, "Mt"),
            line("Landslide concentration", self.landslide.concentration, "atoms/g"),
            line("Background flux", self.background.flux_mt, "Mt"),
            line("Background concentration", self.background.concentration, "atoms/g"),
            line("Outlet concentration", self.outlet_concentration, "atoms/g"),
            line("Catchment erosion rate", self.inversion.erosion_rate, "mm/yr"),
            line("Average Cosmo Flux", self.inversion.average_cosmo_flux_mt, "Mt/yr"),
            line("Actual Volumetric Flux", self.inversion.actual_flux_mt, "Mt/yr"),
        ]
    }
}

/// Run the full model for the given parameters.
pub fn run(params: &InputParameters) -> CrnResult<CatchmentReport> {
    // ── 1. Validation ───────────────────────────────────────────────────────
    params.validate()?;

    // ── 2. Landslide geometry ───────────────────────────────────────────────
    let geometry = landslide_geometry(params)?;

    // ── 3. Landslide concentration ──────────────────────────────────────────
    let landslide = landslide_concentration(params)?;

    // ── 4. Background erosion ───────────────────────────────────────────────
    let background = background_erosion(params, &geometry)?;

    // ── 5. Outlet mixing ────────────────────────────────────────────────────
    let outlet = outlet_concentration(
        Source { concentration: landslide.concentration, flux_mt: geometry.flux_mt },
        Source { concentration: background.concentration, flux_mt: background.flux_mt },
        params.flux_delay_factor,
    )?;
    tracing::debug!(outlet, "outlet concentration");

    // ── 6. Inversion ────────────────────────────────────────────────────────
    let inversion = invert_erosion_rate(params, outlet, background.flux_mt, geometry.flux_mt)?;

    tracing::info!(
        outlet_concentration = outlet,
        erosion_rate = inversion.erosion_rate,
        flux_bias = inversion.flux_bias,
        "model run complete"
    );

    Ok(CatchmentReport {
        inputs: params.clone(),
        geometry,
        landslide,
        background,
        outlet_concentration: outlet,
        inversion,
    })
}
