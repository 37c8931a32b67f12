//! Deterministic samplers over the globe.
//!
//! These produce the same points on every run so failures reproduce, and
//! they deliberately include the awkward places: the poles, the
//! antimeridian and the prime meridian.

/// Mean earth radius in meters used by [`haversine_meters`].
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// A regular `(lon, lat)` grid in degrees with `lon_steps` columns from -180
/// to 180 and `lat_steps` rows from -90 to 90, both ends included.
///
/// # Example
///
/// ```
/// use test_utils::globe_grid;
///
/// let grid = globe_grid(5, 3);
/// assert_eq!(grid.len(), 15);
/// assert_eq!(grid[0], (-180.0, -90.0));
/// assert_eq!(grid[14], (180.0, 90.0));
/// ```
pub fn globe_grid(lon_steps: usize, lat_steps: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(lon_steps * lat_steps);
    for row in 0..lat_steps {
        let lat = -90.0 + 180.0 * row as f64 / (lat_steps.max(2) - 1) as f64;
        for col in 0..lon_steps {
            let lon = -180.0 + 360.0 * col as f64 / (lon_steps.max(2) - 1) as f64;
            points.push((lon, lat));
        }
    }
    points
}

/// Like [`globe_grid`] but pulled `margin` degrees inside the poles and the
/// antimeridian, for checks that are only meaningful away from singularities.
pub fn interior_grid(lon_steps: usize, lat_steps: usize, margin: f64) -> Vec<(f64, f64)> {
    globe_grid(lon_steps, lat_steps)
        .into_iter()
        .map(|(lon, lat)| {
            (
                lon * (180.0 - margin) / 180.0,
                lat * (90.0 - margin) / 90.0,
            )
        })
        .collect()
}

/// `n` nearly evenly spaced `(lon, lat)` points on the sphere, laid out on a
/// Fibonacci spiral from south to north.
///
/// # Example
///
/// ```
/// use test_utils::fibonacci_sphere;
///
/// let points = fibonacci_sphere(100);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|&(lon, lat)| lon.abs() <= 180.0 && lat.abs() < 90.0));
/// ```
pub fn fibonacci_sphere(n: usize) -> Vec<(f64, f64)> {
    let golden_angle = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let z = -1.0 + (2.0 * i as f64 + 1.0) / n as f64;
            let theta = golden_angle * i as f64;
            let lon = theta.sin().atan2(theta.cos()).to_degrees();
            (lon, z.asin().to_degrees())
        })
        .collect()
}

/// Points close to the poles and on either side of the antimeridian, where
/// projections are most likely to lose precision.
pub fn pole_and_antimeridian_points() -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for lat in [-89.999, -89.9, -89.0, 89.0, 89.9, 89.999] {
        for lon in [-179.0, -90.0, 0.0, 45.0, 179.0] {
            points.push((lon, lat));
        }
    }
    for lon in [-179.999, -179.9, 179.9, 179.999] {
        for lat in [-60.0, -10.0, 0.0, 10.0, 60.0] {
            points.push((lon, lat));
        }
    }
    points
}

/// Great-circle distance in meters between two `(lon, lat)` positions in degrees.
///
/// # Example
///
/// ```
/// use test_utils::haversine_meters;
///
/// let d = haversine_meters((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 111_195.0).abs() < 1.0);
/// ```
pub fn haversine_meters(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lon1, lat1) = (a.0.to_radians(), a.1.to_radians());
    let (lon2, lat2) = (b.0.to_radians(), b.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * MEAN_EARTH_RADIUS * h.sqrt().min(1.0).asin()
}
