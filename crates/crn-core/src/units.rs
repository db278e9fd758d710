//! Unit conversions used throughout the model.
//!
//! Inputs arrive in field units (km², mm/yr, t/m³); the production equations
//! work in cm and g/cm³, the reported fluxes in megatonnes.  Every conversion
//! lives here so no formula carries a bare power of ten.

/// m² per km².
pub const M2_PER_KM2: f64 = 1.0e6;
/// cm per m.
pub const CM_PER_M: f64 = 100.0;
/// mm per m.
pub const MM_PER_M: f64 = 1000.0;
/// mm per cm.
pub const MM_PER_CM: f64 = 10.0;
/// tonnes per megatonne.
pub const T_PER_MT: f64 = 1.0e6;

#[inline]
pub fn km2_to_m2(km2: f64) -> f64 {
    km2 * M2_PER_KM2
}

#[inline]
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

#[inline]
pub fn m_to_cm(m: f64) -> f64 {
    m * CM_PER_M
}

/// mm/yr → m/yr.
#[inline]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / MM_PER_M
}

/// mm/yr → cm/yr, the erosion unit of the concentration equation.
#[inline]
pub fn mm_to_cm(mm: f64) -> f64 {
    mm / MM_PER_CM
}

/// cm/yr → mm/yr.
#[inline]
pub fn cm_to_mm(cm: f64) -> f64 {
    cm * MM_PER_CM
}

/// Rock mass in megatonnes from a volume in m³ and a density in t/m³.
#[inline]
pub fn megatonnes(volume_m3: f64, density_t_m3: f64) -> f64 {
    volume_m3 * density_t_m3 / T_PER_MT
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions_invert() {
        assert_relative_eq!(cm_to_mm(mm_to_cm(0.6)), 0.6, epsilon = 1e-15);
        assert_eq!(km2_to_m2(1.0), 1.0e6);
        assert_eq!(m_to_cm(2.0), 200.0);
        assert_relative_eq!(mm_to_m(0.6), 0.0006, epsilon = 1e-18);
    }

    #[test]
    fn megatonnes_of_a_cubic_kilometre() {
        // 1 km³ of 2.7 t/m³ rock is 2700 Mt.
        assert_relative_eq!(megatonnes(1.0e9, 2.7), 2700.0, epsilon = 1e-9);
    }
}
