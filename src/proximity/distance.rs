use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::constants::{
    MEAN_EARTH_RADIUS_KM, VINCENTY_CONVERGENCE_THRESHOLD, VINCENTY_MAX_ITERATIONS, WGS84_FLATTENING,
    WGS84_SEMI_MAJOR_AXIS_KM, WGS84_SEMI_MINOR_AXIS_KM,
};
use crate::data::poi::Location;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Ellipsoidal distance on WGS-84 (Vincenty inverse formula).
    #[default]
    Geodesic,
    /// Haversine distance on a sphere of mean earth radius.
    GreatCircle,
}

/// Distance in kilometres between two locations.
pub fn distance_km(a: &Location, b: &Location, metric: DistanceMetric) -> CoreResult<f64> {
    if !a.is_finite() || !b.is_finite() {
        return Err(CoreError::computation(format!(
            "non-finite coordinates ({}, {}) -> ({}, {})",
            a.latitude, a.longitude, b.latitude, b.longitude
        )));
    }

    // Evaluate in a fixed argument order so the result is bit-for-bit symmetric.
    let (first, second) = if (a.latitude, a.longitude) <= (b.latitude, b.longitude) {
        (a, b)
    } else {
        (b, a)
    };

    let km = match metric {
        DistanceMetric::GreatCircle => haversine_km(first, second),
        DistanceMetric::Geodesic => vincenty_km(first, second).unwrap_or_else(|| {
            trace!("vincenty did not converge, using haversine");
            haversine_km(first, second)
        }),
    };

    if km.is_finite() {
        Ok(km)
    } else {
        Err(CoreError::computation("distance evaluated to a non-finite value"))
    }
}

pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let (phi1, phi2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let (delta_phi, delta_lambda) = (
        (b.latitude - a.latitude).to_radians(),
        (b.longitude - a.longitude).to_radians(),
    );
    let h = (delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    2.0 * MEAN_EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Vincenty's inverse formula. `None` when the iteration fails to converge,
/// which happens for nearly antipodal points.
pub fn vincenty_km(a: &Location, b: &Location) -> Option<f64> {
    let f = WGS84_FLATTENING;
    let major = WGS84_SEMI_MAJOR_AXIS_KM;
    let minor = WGS84_SEMI_MINOR_AXIS_KM;

    let l = (b.longitude - a.longitude).to_radians();
    let u1 = ((1.0 - f) * a.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * b.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line: cos_sq_alpha == 0
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - previous).abs() < VINCENTY_CONVERGENCE_THRESHOLD {
            let u_sq = cos_sq_alpha * (major * major - minor * minor) / (minor * minor);
            let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            return Some(minor * big_a * (sigma - delta_sigma));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mumbai() -> Location {
        Location::new(19.07, 72.87)
    }

    fn delhi() -> Location {
        Location::new(28.61, 77.20)
    }

    #[test]
    fn identical_points_are_zero() {
        for metric in [DistanceMetric::Geodesic, DistanceMetric::GreatCircle] {
            assert_eq!(distance_km(&mumbai(), &mumbai(), metric).unwrap(), 0.0);
        }
    }

    #[test]
    fn symmetric_for_both_metrics() {
        for metric in [DistanceMetric::Geodesic, DistanceMetric::GreatCircle] {
            let ab = distance_km(&mumbai(), &delhi(), metric).unwrap();
            let ba = distance_km(&delhi(), &mumbai(), metric).unwrap();
            assert_eq!(ab, ba);
        }
    }

    #[test]
    fn mumbai_delhi_is_about_1150_km() {
        let geodesic = distance_km(&mumbai(), &delhi(), DistanceMetric::Geodesic).unwrap();
        let spherical = distance_km(&mumbai(), &delhi(), DistanceMetric::GreatCircle).unwrap();
        assert!((geodesic - 1150.0).abs() < 15.0, "geodesic = {}", geodesic);
        // the two models agree to within half a percent at this latitude
        assert!((geodesic - spherical).abs() / geodesic < 0.005);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let km = distance_km(
            &Location::new(0.0, 0.0),
            &Location::new(0.0, 1.0),
            DistanceMetric::Geodesic,
        )
        .unwrap();
        // 2 * pi * 6378.137 / 360
        assert!((km - 111.319_490_8).abs() < 1e-3, "km = {}", km);
    }

    #[test]
    fn antipodal_points_fall_back_to_haversine() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(0.5, 179.7);
        assert!(vincenty_km(&a, &b).is_none());
        let km = distance_km(&a, &b, DistanceMetric::Geodesic).unwrap();
        assert!((km - haversine_km(&a, &b)).abs() < 1e-9);

        // Shortest WGS-84 geodesic for this pair is 19944.13 km; the spherical
        // fallback overshoots by about 6 km.
        assert!((km - 19_950.28).abs() < 0.01, "km = {}", km);
        assert!((km - 19_944.13).abs() < 10.0);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let bad = Location::new(f64::NAN, 72.0);
        assert!(matches!(
            distance_km(&bad, &mumbai(), DistanceMetric::Geodesic),
            Err(CoreError::Computation(_))
        ));
    }
}
