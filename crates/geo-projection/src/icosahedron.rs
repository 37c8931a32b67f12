//! Icosahedron geometry shared by the Airocean family of projections.
//!
//! The twelve vertices sit at the classic Dymaxion orientation. Each face
//! carries a local frame with +z through the face center and +y toward the
//! face's first vertex. Inside that frame a point is carried between the
//! sphere and a planar equilateral triangle by a three-angle transform:
//! each angle measures the point's position across one edge, as seen from
//! the center of the sphere, so the planar triangle has a side of exactly
//! one edge arc (in radians).

use nalgebra::{Matrix3, Vector3};
use once_cell::sync::Lazy;

pub const VERTEX_COUNT: usize = 12;
pub const FACE_COUNT: usize = 20;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Vertex positions as (lon, lat) in degrees. Vertex `i` and the vertex at
/// the matching antipodal slot (0/11, 1/8, 2/9, 3/10, 4/6, 5/7) are opposite.
const VERTICES: [(f64, f64); VERTEX_COUNT] = [
    (10.536199, 64.700000),
    (-5.245390, 2.300882),
    (58.157706, 10.447378),
    (122.300000, 39.100000),
    (-143.478490, 50.103201),
    (-67.132330, 23.717925),
    (36.521510, -50.103200),
    (112.867673, -23.717930),
    (174.754610, -2.300882),
    (-121.842290, -10.447350),
    (-57.700000, -39.100000),
    (-169.463800, -64.700000),
];

/// Faces as vertex indices. The first index of each face is the apex of its
/// local frame.
pub const FACES: [[usize; 3]; FACE_COUNT] = [
    [2, 1, 6],
    [1, 0, 2],
    [0, 1, 5],
    [1, 5, 10],
    [1, 6, 10],
    [7, 2, 6],
    [2, 3, 7],
    [3, 0, 2],
    [0, 3, 4],
    [4, 0, 5],
    [5, 4, 9],
    [9, 5, 10],
    [10, 9, 11],
    [11, 6, 10],
    [6, 7, 11],
    [8, 11, 7],
    [3, 8, 7],
    [8, 3, 4],
    [8, 4, 9],
    [9, 8, 11],
];

const NEWTON_MAX_ITERATIONS: usize = 16;
const NEWTON_TOLERANCE: f64 = 1e-15;

/// The process-wide icosahedron, built on first use.
pub static ICOSAHEDRON: Lazy<Icosahedron> = Lazy::new(Icosahedron::new);

/// Unit vector for a geographic position in degrees.
pub fn geo_to_cartesian(lon: f64, lat: f64) -> Vector3<f64> {
    let lon = lon.to_radians();
    let lat = lat.to_radians();
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Geographic (lon, lat) in degrees for a vector. The vector does not need
/// to be normalized.
pub fn cartesian_to_geo(p: &Vector3<f64>) -> (f64, f64) {
    let lon = p.y.atan2(p.x);
    let lat = p.z.atan2(p.x.hypot(p.y));
    (lon.to_degrees(), lat.to_degrees())
}

/// One triangular face and its local frame.
#[derive(Debug, Clone)]
pub struct Face {
    pub vertices: [usize; 3],
    /// Unit vector through the face center.
    pub center: Vector3<f64>,
    /// Rows are the local x, y and z axes.
    frame: Matrix3<f64>,
}

impl Face {
    fn new(vertices: [usize; 3], points: &[Vector3<f64>]) -> Self {
        let apex = points[vertices[0]];
        let center = (apex + points[vertices[1]] + points[vertices[2]]).normalize();
        let up = (apex - center * apex.dot(&center)).normalize();
        let right = up.cross(&center);

        Self {
            vertices,
            center,
            frame: Matrix3::from_rows(&[right.transpose(), up.transpose(), center.transpose()]),
        }
    }

    /// Rotate a sphere vector into this face's local frame.
    #[inline]
    pub fn to_local(&self, p: &Vector3<f64>) -> Vector3<f64> {
        self.frame * p
    }

    /// Rotate a local-frame vector back onto the sphere.
    #[inline]
    pub fn to_sphere(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.frame.transpose() * local
    }

    /// The two vertices this face shares with `other`, if they are adjacent.
    pub fn shared_edge(&self, other: &Face) -> Option<(usize, usize)> {
        let mut shared = self.vertices.iter().filter(|v| other.vertices.contains(v));
        match (shared.next(), shared.next(), shared.next()) {
            (Some(&a), Some(&b), None) => Some((a, b)),
            _ => None,
        }
    }
}

/// Vertices, faces and the constants of the in-face transform.
#[derive(Debug)]
pub struct Icosahedron {
    vertices: [Vector3<f64>; VERTEX_COUNT],
    faces: Vec<Face>,
    /// Angle subtended by one edge at the sphere center.
    edge_arc: f64,
    /// Distance from the sphere center to a face plane.
    plane_distance: f64,
    /// One sixth of the chord length of an edge.
    edge_sixth: f64,
    /// Distance from the sphere center to an edge midpoint.
    midradius: f64,
    /// tan(a) + tan(b) + tan(c), which is the same for every point.
    tan_sum: f64,
}

impl Icosahedron {
    fn new() -> Self {
        let sqrt5 = 5f64.sqrt();
        let edge_length = 8f64.sqrt() / (5.0 + sqrt5).sqrt();
        let edge_sixth = edge_length / 6.0;
        let midradius = (3.0 + sqrt5).sqrt() / (5.0 + sqrt5).sqrt();

        let vertices = VERTICES.map(|(lon, lat)| geo_to_cartesian(lon, lat));
        let faces = FACES
            .iter()
            .map(|&indices| Face::new(indices, &vertices))
            .collect();

        Self {
            vertices,
            faces,
            edge_arc: 2.0 * ((5.0 - sqrt5).sqrt() / 10f64.sqrt()).asin(),
            plane_distance: (5.0 + 2.0 * sqrt5).sqrt() / 15f64.sqrt(),
            edge_sixth,
            midradius,
            tan_sum: -3.0 * edge_sixth / midradius,
        }
    }

    pub fn vertex(&self, index: usize) -> &Vector3<f64> {
        &self.vertices[index]
    }

    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Angle in radians subtended by one edge; also the side length of the
    /// planar triangle produced by [`triangle_transform`](Self::triangle_transform).
    pub fn edge_arc(&self) -> f64 {
        self.edge_arc
    }

    /// Area of one planar triangle in local units.
    pub fn triangle_area(&self) -> f64 {
        SQRT_3 / 4.0 * self.edge_arc * self.edge_arc
    }

    /// Index of the face whose center is closest to `p`. On an exact tie the
    /// lower index wins.
    pub fn face_for(&self, p: &Vector3<f64>) -> usize {
        let mut best = 0;
        let mut best_dot = f64::NEG_INFINITY;
        for (index, face) in self.faces.iter().enumerate() {
            let dot = face.center.dot(p);
            if dot > best_dot {
                best = index;
                best_dot = dot;
            }
        }
        best
    }

    /// Map a local-frame sphere point onto the planar triangle. The triangle
    /// is centered on the origin with its apex on +y.
    pub fn triangle_transform(&self, local: &Vector3<f64>) -> (f64, f64) {
        // gnomonic projection onto the face plane
        let s = self.plane_distance / local.z;
        let xp = s * local.x;
        let yp = s * local.y;

        let a = ((2.0 * yp / SQRT_3 - self.edge_sixth) / self.midradius).atan();
        let b = ((xp - yp / SQRT_3 - self.edge_sixth) / self.midradius).atan();
        let c = ((-xp - yp / SQRT_3 - self.edge_sixth) / self.midradius).atan();

        (0.5 * (b - c), (2.0 * a - b - c) / (2.0 * SQRT_3))
    }

    /// Inverse of [`triangle_transform`](Self::triangle_transform), returning
    /// a unit vector in the local frame.
    ///
    /// The planar point fixes a and b relative to c (a = c + √3·y + x,
    /// b = c + 2x), and the three tangents always sum to the same constant,
    /// so tan(c) is found by Newton iteration using the tangent addition rule.
    pub fn inverse_triangle_transform(&self, x: f64, y: f64) -> Vector3<f64> {
        let tan_a_off = (SQRT_3 * y + x).tan();
        let tan_b_off = (2.0 * x).tan();
        let a_numer = tan_a_off * tan_a_off + 1.0;
        let b_numer = tan_b_off * tan_b_off + 1.0;

        let mut tan_a = tan_a_off;
        let mut tan_b = tan_b_off;
        let mut tan_c = 0.0;
        let mut a_denom = 1.0;
        let mut b_denom = 1.0;

        for _ in 0..NEWTON_MAX_ITERATIONS {
            let f = tan_a + tan_b + tan_c - self.tan_sum;
            let fp = a_numer * a_denom * a_denom + b_numer * b_denom * b_denom + 1.0;
            let step = f / fp;

            tan_c -= step;
            a_denom = 1.0 / (1.0 - tan_c * tan_a_off);
            b_denom = 1.0 / (1.0 - tan_c * tan_b_off);
            tan_a = (tan_c + tan_a_off) * a_denom;
            tan_b = (tan_c + tan_b_off) * b_denom;

            if !(step.abs() > NEWTON_TOLERANCE) {
                break;
            }
        }

        let yp = SQRT_3 * (self.midradius * tan_a + self.edge_sixth) / 2.0;
        let xp = self.midradius * tan_b + yp / SQRT_3 + self.edge_sixth;

        // back off the face plane onto the unit sphere
        let x_over_z = xp / self.plane_distance;
        let y_over_z = yp / self.plane_distance;
        let z = 1.0 / (1.0 + x_over_z * x_over_z + y_over_z * y_over_z).sqrt();

        Vector3::new(z * x_over_z, z * y_over_z, z)
    }

    /// True when the planar point lies inside the triangle produced by
    /// [`triangle_transform`](Self::triangle_transform), allowing `tolerance`
    /// of slack on each edge.
    pub fn triangle_contains(&self, x: f64, y: f64, tolerance: f64) -> bool {
        let apex = self.edge_arc / SQRT_3;
        let base = y + apex / 2.0;
        let right = apex - SQRT_3 * x - y;
        let left = apex + SQRT_3 * x - y;
        base.min(right).min(left) >= -tolerance
    }
}
