use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Indexed triangle mesh: positions, unit normals, uvs and CCW triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Largest distance of any vertex from the local origin.
    pub fn bounding_radius(&self) -> f32 {
        self.positions.iter().map(|p| p.length()).fold(0.0, f32::max)
    }

    fn push(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal.normalize_or_zero());
        self.uvs.push(uv);
        index
    }
}

/// Parametric shape of a section mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Torus { .. } => "torus",
            Shape::Cone { .. } => "cone",
            Shape::TorusKnot { .. } => "torus_knot",
        }
    }

    pub fn build(&self) -> MeshData {
        match *self {
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => cone(radius, height, radial_segments),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=radial {
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let v = j as f32 / radial as f32 * TAU;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(
                position,
                position - center,
                Vec2::new(i as f32 / tubular as f32, j as f32 / radial as f32),
            );
        }
    }

    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Closed cone centered on the origin, apex at `+height / 2` on Y.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let half = height / 2.0;
    let slope = if height != 0.0 { radius / height } else { 0.0 };
    let mut mesh = MeshData::default();

    // Side: an apex row and a base row, one vertex per seam column.
    let mut apex_row = Vec::with_capacity(radial as usize + 1);
    let mut base_row = Vec::with_capacity(radial as usize + 1);
    for x in 0..=radial {
        let u = x as f32 / radial as f32;
        let theta = u * TAU;
        let normal = Vec3::new(theta.sin(), slope, theta.cos());
        apex_row.push(mesh.push(Vec3::new(0.0, half, 0.0), normal, Vec2::new(u, 1.0)));
    }
    for x in 0..=radial {
        let u = x as f32 / radial as f32;
        let theta = u * TAU;
        let normal = Vec3::new(theta.sin(), slope, theta.cos());
        base_row.push(mesh.push(
            Vec3::new(radius * theta.sin(), -half, radius * theta.cos()),
            normal,
            Vec2::new(u, 0.0),
        ));
    }
    for x in 0..radial as usize {
        mesh.indices
            .extend_from_slice(&[base_row[x], base_row[x + 1], apex_row[x + 1]]);
    }

    // Base cap facing -Y.
    let down = Vec3::NEG_Y;
    let centers: Vec<u32> = (0..radial)
        .map(|_| mesh.push(Vec3::new(0.0, -half, 0.0), down, Vec2::splat(0.5)))
        .collect();
    let mut rim = Vec::with_capacity(radial as usize + 1);
    for x in 0..=radial {
        let theta = x as f32 / radial as f32 * TAU;
        let (s, c) = theta.sin_cos();
        rim.push(mesh.push(
            Vec3::new(radius * s, -half, radius * c),
            down,
            // Seen from below, so v runs opposite to the top cap's.
            Vec2::new(c * 0.5 + 0.5, -s * 0.5 + 0.5),
        ));
    }
    for x in 0..radial as usize {
        mesh.indices
            .extend_from_slice(&[rim[x + 1], rim[x], centers[x]]);
    }
    mesh
}

/// (p, q) torus knot swept with a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let p = p.max(1) as f32;
    let q = q as f32;
    let curve = |u: f32| {
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu_over_p.sin() * 0.5,
        )
    };
    let mut mesh = MeshData::default();

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize_or_zero();
        normal = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.push(
                position,
                position - p1,
                Vec2::new(i as f32 / tubular as f32, j as f32 / radial as f32),
            );
        }
    }

    let row = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &MeshData) {
        let n = mesh.vertex_count();
        assert_eq!(mesh.normals.len(), n);
        assert_eq!(mesh.uvs.len(), n);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < n));
        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-4, "normal {normal}");
        }
    }

    #[test]
    fn torus_counts_and_shape() {
        let mesh = torus(1.0, 0.4, 16, 60);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 17 * 61);
        assert_eq!(mesh.indices.len(), 16 * 60 * 6);
        assert!((mesh.bounding_radius() - 1.4).abs() < 1e-4);
        // Every vertex lies on the tube surface.
        for p in &mesh.positions {
            let ring = Vec3::new(p.x, p.y, 0.0).normalize_or_zero();
            assert!(((*p - ring).length() - 0.4).abs() < 1e-4);
        }
    }

    #[test]
    fn cone_counts_and_apex() {
        let mesh = cone(1.0, 2.0, 32);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 2 * 33 + 32 + 33);
        assert_eq!(mesh.triangle_count(), 32 * 2);
        let top = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let bottom = mesh.positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert_eq!(top, 1.0);
        assert_eq!(bottom, -1.0);
    }

    #[test]
    fn cone_side_normals_point_outward() {
        let mesh = cone(1.0, 2.0, 8);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals).take(18) {
            if p.y < 0.0 {
                assert!(Vec3::new(p.x, 0.0, p.z).dot(*n) > 0.0);
            }
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn cone_triangles_wind_outward() {
        let mesh = cone(1.0, 2.0, 16);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
            let face = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            let outward = if centroid.y <= -0.999 {
                Vec3::NEG_Y
            } else {
                Vec3::new(centroid.x, 0.0, centroid.z)
            };
            assert!(face.dot(outward) > 0.0);
        }
    }

    #[test]
    fn cone_base_uvs_mirror_v() {
        let mesh = cone(1.0, 2.0, 32);
        let base_uv = |at: Vec3| {
            let i = mesh
                .positions
                .iter()
                .zip(&mesh.normals)
                .position(|(p, n)| *n == Vec3::NEG_Y && p.distance(at) < 1e-4)
                .unwrap();
            mesh.uvs[i]
        };
        assert!(base_uv(Vec3::new(1.0, -1.0, 0.0)).distance(Vec2::new(0.5, 0.0)) < 1e-4);
        assert!(base_uv(Vec3::new(0.0, -1.0, 1.0)).distance(Vec2::new(1.0, 0.5)) < 1e-4);
        assert!(base_uv(Vec3::new(-1.0, -1.0, 0.0)).distance(Vec2::new(0.5, 1.0)) < 1e-4);
    }

    #[test]
    fn torus_knot_counts_and_closure() {
        let mesh = torus_knot(0.8, 0.35, 100, 15, 2, 3);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 101 * 16);
        assert_eq!(mesh.indices.len(), 100 * 15 * 6);
        // The first and last rings coincide: the knot is closed.
        let first = mesh.positions[0];
        let last = mesh.positions[100 * 16];
        assert!((first - last).length() < 1e-3);
    }

    #[test]
    fn degenerate_segment_counts_are_raised() {
        let mesh = torus(1.0, 0.2, 0, 0);
        assert_well_formed(&mesh);
        assert!(mesh.triangle_count() > 0);
        assert!(cone(1.0, 1.0, 1).triangle_count() >= 6);
    }

    #[test]
    fn shape_builds_named_meshes() {
        let shape = Shape::Cone {
            radius: 1.0,
            height: 2.0,
            radial_segments: 32,
        };
        assert_eq!(shape.name(), "cone");
        assert_eq!(shape.build(), cone(1.0, 2.0, 32));
    }
}
