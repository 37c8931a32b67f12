//! Laying the icosahedron's faces flat.
//!
//! A [`NetLayout`] is a spanning tree over the face adjacency graph: one
//! root face plus nineteen hinges. Unfolding places the root with its local
//! frame unrotated, then swings each child about the edge it shares with its
//! already-placed parent. Because every face is the same equilateral
//! triangle, the result is a connected net whose placements are rotations
//! and translations only.

use std::f64::consts::FRAC_PI_2;

use geo_common::{BoundingBox, GeoError, GeoResult};
use tracing::debug;

use crate::icosahedron::{Icosahedron, FACE_COUNT, ICOSAHEDRON};

/// Slack, in local triangle units, when testing whether a point is on a face.
const CONTAINS_TOLERANCE: f64 = 1e-9;

/// How the twenty faces are arranged in the plane.
#[derive(Debug, Clone, Copy)]
pub struct NetLayout {
    pub name: &'static str,
    /// Face placed first, with its local frame unrotated.
    pub root: usize,
    /// `(child, parent)` pairs. Each child is hinged to its parent along
    /// their shared edge; a parent must be placed before its children.
    pub hinges: &'static [(usize, usize)],
    /// Net units per local triangle unit (radians of arc).
    pub scale: f64,
    /// Rotate the finished net so the south pole to north pole direction is +y.
    pub align_north: bool,
}

/// Rotation plus translation taking local triangle coordinates into the net.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    cos: f64,
    sin: f64,
    tx: f64,
    ty: f64,
}

impl Placement {
    const IDENTITY: Placement = Placement {
        cos: 1.0,
        sin: 0.0,
        tx: 0.0,
        ty: 0.0,
    };

    fn from_angle(angle: f64, tx: f64, ty: f64) -> Self {
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
            tx,
            ty,
        }
    }

    #[inline]
    fn apply(&self, scale: f64, x: f64, y: f64) -> (f64, f64) {
        (
            scale * (self.cos * x - self.sin * y) + self.tx,
            scale * (self.sin * x + self.cos * y) + self.ty,
        )
    }

    #[inline]
    fn invert(&self, scale: f64, x: f64, y: f64) -> (f64, f64) {
        let dx = (x - self.tx) / scale;
        let dy = (y - self.ty) / scale;
        (self.cos * dx + self.sin * dy, self.cos * dy - self.sin * dx)
    }

    /// This placement followed by a rotation of the whole plane about the origin.
    fn rotated(&self, cos: f64, sin: f64) -> Self {
        Self {
            cos: cos * self.cos - sin * self.sin,
            sin: sin * self.cos + cos * self.sin,
            tx: cos * self.tx - sin * self.ty,
            ty: sin * self.tx + cos * self.ty,
        }
    }
}

/// An unfolded icosahedron: one placement per face.
#[derive(Debug, Clone)]
pub struct Net {
    scale: f64,
    placements: [Placement; FACE_COUNT],
    extent: BoundingBox,
}

impl Net {
    /// Unfold the icosahedron according to `layout`.
    ///
    /// Fails if the hinges do not form a spanning tree that can be placed in
    /// order. Pole alignment is left to the caller, who owns the sphere-to-face
    /// mapping; see [`Net::rotate`].
    pub fn unfold(layout: &NetLayout) -> GeoResult<Self> {
        let ico = &*ICOSAHEDRON;

        if !(layout.scale.is_finite() && layout.scale > 0.0) {
            return Err(GeoError::InvalidLayout(format!(
                "{}: scale must be positive, got {}",
                layout.name, layout.scale
            )));
        }
        if layout.root >= FACE_COUNT {
            return Err(GeoError::InvalidLayout(format!(
                "{}: root face {} does not exist",
                layout.name, layout.root
            )));
        }
        if layout.hinges.len() != FACE_COUNT - 1 {
            return Err(GeoError::InvalidLayout(format!(
                "{}: expected {} hinges, got {}",
                layout.name,
                FACE_COUNT - 1,
                layout.hinges.len()
            )));
        }

        let mut placed: [Option<Placement>; FACE_COUNT] = [None; FACE_COUNT];
        placed[layout.root] = Some(Placement::IDENTITY);

        for &(child, parent) in layout.hinges {
            if child >= FACE_COUNT || parent >= FACE_COUNT {
                return Err(GeoError::InvalidLayout(format!(
                    "{}: hinge ({}, {}) names a face that does not exist",
                    layout.name, child, parent
                )));
            }
            if placed[child].is_some() {
                return Err(GeoError::InvalidLayout(format!(
                    "{}: face {} is placed twice",
                    layout.name, child
                )));
            }
            let parent_placement = placed[parent].ok_or_else(|| {
                GeoError::InvalidLayout(format!(
                    "{}: face {} is hinged to face {} before it is placed",
                    layout.name, child, parent
                ))
            })?;
            let (u, v) = ico
                .face(child)
                .shared_edge(ico.face(parent))
                .ok_or_else(|| {
                    GeoError::InvalidLayout(format!(
                        "{}: faces {} and {} do not share an edge",
                        layout.name, child, parent
                    ))
                })?;

            // the hinge sits where the parent already put it
            let (pu, pv) = (local_vertex(ico, parent, u), local_vertex(ico, parent, v));
            let net_u = parent_placement.apply(layout.scale, pu.0, pu.1);
            let net_v = parent_placement.apply(layout.scale, pv.0, pv.1);

            let (cu, cv) = (local_vertex(ico, child, u), local_vertex(ico, child, v));
            let angle = (net_v.1 - net_u.1).atan2(net_v.0 - net_u.0)
                - (cv.1 - cu.1).atan2(cv.0 - cu.0);

            let turned = Placement::from_angle(angle, 0.0, 0.0).apply(layout.scale, cu.0, cu.1);
            placed[child] = Some(Placement::from_angle(
                angle,
                net_u.0 - turned.0,
                net_u.1 - turned.1,
            ));
        }

        let mut placements = [Placement::IDENTITY; FACE_COUNT];
        for (face, placement) in placed.iter().enumerate() {
            placements[face] = placement.ok_or_else(|| {
                GeoError::InvalidLayout(format!("{}: face {} is never placed", layout.name, face))
            })?;
        }

        let mut net = Self {
            scale: layout.scale,
            placements,
            extent: BoundingBox::default(),
        };
        net.recenter();

        debug!(
            layout = layout.name,
            faces = FACE_COUNT,
            width = net.extent.width(),
            height = net.extent.height(),
            "Unfolded icosahedral net"
        );

        Ok(net)
    }

    /// Bounding box of all placed face vertices.
    pub fn extent(&self) -> BoundingBox {
        self.extent
    }

    /// Total planar area covered by the net.
    pub fn area(&self) -> f64 {
        FACE_COUNT as f64 * ICOSAHEDRON.triangle_area() * self.scale * self.scale
    }

    /// Net position of the center of `face`.
    pub fn face_center(&self, face: usize) -> (f64, f64) {
        let p = &self.placements[face];
        (p.tx, p.ty)
    }

    /// Local triangle coordinates on `face` to net coordinates.
    #[inline]
    pub fn place(&self, face: usize, x: f64, y: f64) -> (f64, f64) {
        self.placements[face].apply(self.scale, x, y)
    }

    /// Net coordinates to local triangle coordinates on `face`.
    #[inline]
    pub fn unplace(&self, face: usize, x: f64, y: f64) -> (f64, f64) {
        self.placements[face].invert(self.scale, x, y)
    }

    /// The lowest-indexed face whose placed triangle contains `(x, y)`, or
    /// the face with the nearest center when the point is off the net.
    pub fn locate(&self, x: f64, y: f64) -> usize {
        self.containing_face(x, y)
            .unwrap_or_else(|| self.nearest_face(x, y))
    }

    /// The lowest-indexed face whose placed triangle contains `(x, y)`.
    pub fn containing_face(&self, x: f64, y: f64) -> Option<usize> {
        let ico = &*ICOSAHEDRON;
        (0..FACE_COUNT).find(|&face| {
            let (lx, ly) = self.unplace(face, x, y);
            ico.triangle_contains(lx, ly, CONTAINS_TOLERANCE)
        })
    }

    fn nearest_face(&self, x: f64, y: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for face in 0..FACE_COUNT {
            let (cx, cy) = self.face_center(face);
            let distance = (cx - x).hypot(cy - y);
            if distance < best_distance {
                best = face;
                best_distance = distance;
            }
        }
        best
    }

    /// Rotate the whole net about the origin, then re-center it.
    pub(crate) fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        for placement in &mut self.placements {
            *placement = placement.rotated(cos, sin);
        }
        self.recenter();
    }

    /// Rotate the net so the vector from `south` to `north` points along +y.
    pub(crate) fn align(&mut self, north: (f64, f64), south: (f64, f64)) {
        let heading = (north.1 - south.1).atan2(north.0 - south.0);
        self.rotate(FRAC_PI_2 - heading);
    }

    /// Translate so the vertex bounding box is centered on the origin.
    fn recenter(&mut self) {
        let (cx, cy) = self.vertex_extent().center();
        for placement in &mut self.placements {
            placement.tx -= cx;
            placement.ty -= cy;
        }
        self.extent = self.vertex_extent();
    }

    fn vertex_extent(&self) -> BoundingBox {
        let ico = &*ICOSAHEDRON;
        let mut extent = BoundingBox::default();
        for (index, face) in ico.faces().iter().enumerate() {
            for &vertex in &face.vertices {
                let (lx, ly) = local_vertex(ico, index, vertex);
                let (x, y) = self.place(index, lx, ly);
                extent.include(x, y);
            }
        }
        extent
    }
}

/// Local triangle coordinates of an icosahedron vertex on one of its faces.
fn local_vertex(ico: &Icosahedron, face: usize, vertex: usize) -> (f64, f64) {
    let face = ico.face(face);
    ico.triangle_transform(&face.to_local(ico.vertex(vertex)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airocean::AIROCEAN_LAYOUT;
    use crate::modified_airocean::MODIFIED_AIROCEAN_LAYOUT;

    fn assert_hinges_line_up(layout: &NetLayout) {
        let ico = &*ICOSAHEDRON;
        let net = Net::unfold(layout).unwrap();

        for &(child, parent) in layout.hinges {
            let (u, v) = ico.face(child).shared_edge(ico.face(parent)).unwrap();
            for vertex in [u, v] {
                let c = local_vertex(ico, child, vertex);
                let p = local_vertex(ico, parent, vertex);
                let (cx, cy) = net.place(child, c.0, c.1);
                let (px, py) = net.place(parent, p.0, p.1);
                // the vertex table is rounded to 1e-6 degrees, so hinges
                // agree to about that precision rather than to the last bit
                assert!(
                    (cx - px).hypot(cy - py) < 1e-5,
                    "{}: hinge ({}, {}) vertex {} is split",
                    layout.name,
                    child,
                    parent,
                    vertex
                );
            }
        }
    }

    fn assert_no_overlap(layout: &NetLayout) {
        let net = Net::unfold(layout).unwrap();
        for face in 0..FACE_COUNT {
            let (cx, cy) = net.face_center(face);
            assert_eq!(
                net.containing_face(cx, cy),
                Some(face),
                "{}: center of face {} is covered by another face",
                layout.name,
                face
            );
        }
    }

    #[test]
    fn test_builtin_layouts_unfold() {
        for layout in [&AIROCEAN_LAYOUT, &MODIFIED_AIROCEAN_LAYOUT] {
            assert_hinges_line_up(layout);
            assert_no_overlap(layout);
        }
    }

    #[test]
    fn test_net_is_centered() {
        let net = Net::unfold(&AIROCEAN_LAYOUT).unwrap();
        let (cx, cy) = net.extent().center();
        assert!(cx.abs() < 1e-12 && cy.abs() < 1e-12);
    }

    #[test]
    fn test_place_unplace_roundtrip() {
        let net = Net::unfold(&MODIFIED_AIROCEAN_LAYOUT).unwrap();
        for face in [0, 7, 19] {
            let (x, y) = net.place(face, 0.1, -0.2);
            let (lx, ly) = net.unplace(face, x, y);
            assert!((lx - 0.1).abs() < 1e-12 && (ly + 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_locate_off_net_picks_nearest_face() {
        let net = Net::unfold(&AIROCEAN_LAYOUT).unwrap();
        let (x, y) = (net.extent().max_x + 10.0, 0.0);
        assert_eq!(net.containing_face(x, y), None);

        let face = net.locate(x, y);
        let distance = |f: usize| {
            let (cx, cy) = net.face_center(f);
            (cx - x).hypot(cy - y)
        };
        for other in 0..FACE_COUNT {
            assert!(distance(face) <= distance(other));
        }
    }

    #[test]
    fn test_rejects_bad_layouts() {
        static TOO_FEW: [(usize, usize); 1] = [(1, 7)];
        let layout = NetLayout {
            hinges: &TOO_FEW,
            ..AIROCEAN_LAYOUT
        };
        assert!(matches!(Net::unfold(&layout), Err(GeoError::InvalidLayout(_))));

        // faces 12 and 10 only meet at vertex 9
        static NOT_ADJACENT: [(usize, usize); 19] = [
            (12, 10),
            (3, 11),
            (4, 3),
            (0, 4),
            (5, 0),
            (6, 5),
            (16, 6),
            (17, 16),
            (18, 17),
            (9, 10),
            (2, 3),
            (1, 0),
            (7, 6),
            (8, 17),
            (11, 10),
            (13, 4),
            (14, 5),
            (15, 16),
            (19, 18),
        ];
        let layout = NetLayout {
            hinges: &NOT_ADJACENT,
            ..AIROCEAN_LAYOUT
        };
        assert!(matches!(
            Net::unfold(&layout),
            Err(GeoError::InvalidLayout(msg)) if msg.contains("share")
        ));

        let layout = NetLayout {
            scale: 0.0,
            ..AIROCEAN_LAYOUT
        };
        assert!(Net::unfold(&layout).is_err());
    }
}
