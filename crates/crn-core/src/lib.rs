//! Outlet cosmogenic-nuclide concentration of a catchment that erodes by both
//! steady background lowering and episodic landsliding, after Dingle et al.
//! (2018), and the basin-average erosion rate that concentration implies.
pub mod background;
pub mod error;
pub mod geometry;
pub mod inversion;
pub mod landslide;
pub mod mixing;
pub mod params;
pub mod pipeline;
pub mod production;
pub mod units;

pub use error::{CrnError, CrnResult};
pub use params::InputParameters;
pub use pipeline::{run, CatchmentReport, ReportLine};
