//! Per-row field derivation: orbital altitude and the validity window.

/// Mean Earth radius in km, used to convert a semimajor axis (measured
/// from the Earth's center) to an altitude above the surface.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Altitudes outside this open interval are treated as unusable.
pub const MIN_ALTITUDE_KM: f64 = 0.0;
pub const MAX_ALTITUDE_KM: f64 = 50_000.0;

/// Derive the orbital altitude in km from the available elements.
///
/// Ordered two-step rule:
/// 1. both apsides present → their mean;
/// 2. semimajor axis present → semimajor axis minus the Earth radius;
///
/// otherwise the altitude is unknown.
pub fn altitude_km(
    semimajor_axis: Option<f64>,
    apoapsis: Option<f64>,
    periapsis: Option<f64>,
) -> Option<f64> {
    match (apoapsis, periapsis) {
        (Some(apo), Some(peri)) => Some((apo + peri) / 2.0),
        _ => semimajor_axis.map(|sma| sma - EARTH_RADIUS_KM),
    }
}

/// Whether a derived altitude is worth keeping.  Both window bounds are
/// exclusive.
pub fn plausible_altitude(altitude_km: f64) -> bool {
    altitude_km.is_finite() && altitude_km > MIN_ALTITUDE_KM && altitude_km < MAX_ALTITUDE_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apsides_average_preferred() {
        assert_eq!(altitude_km(None, Some(400.0), Some(400.0)), Some(400.0));
        assert_eq!(altitude_km(None, Some(500.0), Some(300.0)), Some(400.0));
        // the semimajor axis is ignored when both apsides are present
        assert_eq!(
            altitude_km(Some(9000.0), Some(500.0), Some(300.0)),
            Some(400.0)
        );
    }

    #[test]
    fn semimajor_axis_fallback() {
        assert_eq!(altitude_km(Some(7000.0), None, None), Some(629.0));
        // a single apsis is not enough, fall back to the semimajor axis
        assert_eq!(altitude_km(Some(7000.0), Some(650.0), None), Some(629.0));
        assert_eq!(altitude_km(Some(7000.0), None, Some(610.0)), Some(629.0));
    }

    #[test]
    fn no_elements_means_no_altitude() {
        assert_eq!(altitude_km(None, None, None), None);
        assert_eq!(altitude_km(None, Some(400.0), None), None);
    }

    #[test]
    fn window_bounds_are_exclusive() {
        assert!(!plausible_altitude(0.0));
        assert!(plausible_altitude(0.001));
        assert!(plausible_altitude(49_999.999));
        assert!(!plausible_altitude(50_000.0));
        assert!(!plausible_altitude(-100.0));
        assert!(!plausible_altitude(f64::NAN));
        assert!(!plausible_altitude(f64::INFINITY));
    }
}
