//! Iso-surface extraction driver
//!
//! A [`MarchingCubes`] value is the working state of exactly one extraction
//! run: the three per-axis edge-vertex caches, the in-flight mesh and the
//! iso-level.  [`run`](MarchingCubes::run) consumes it, so caches can never
//! leak between runs.
//!
//! The run makes two passes over the grid.  Pass one visits every grid
//! point once and, for each of the three positive axis directions whose
//! forward difference changes sign, creates the single vertex shared by
//! every cell around that grid edge.  Pass two visits every cell, builds
//! its corner sign mask and triangulates it through the static case
//! tables, resolving ambiguous masks with the face and interior tests.
pub mod types;

mod cube;
mod dispatch;
mod tables;

use crate::{mesh::Mesh, Error, ScalarField};
use cube::{clamp_sample, Cube};
use dispatch::EDGE_SLOTS;
use types::Corner;

use nalgebra::Vector3;

/// Triangulation mode, fixed for a whole run
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Disambiguated 33-case triangulation (the default)
    ///
    /// Ambiguous sign masks are resolved with the bilinear face test and
    /// the trilinear interior test, guaranteeing a crack-free mesh that is
    /// manifold-consistent across cell boundaries.
    #[default]
    Topological,

    /// Historical single-table triangulation
    ///
    /// Always applies the non-disambiguated 256-entry template table.
    /// Faster, but ambiguous cells may triangulate inconsistently with
    /// their neighbours and leave cracks.
    Classic,
}

/// Extraction settings
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Settings {
    /// The surface is the zero set of `sample - iso`
    pub iso: f32,
    /// Triangulation mode
    pub mode: Mode,
}

/// Cache entry meaning "no crossing on this edge yet"
const NO_VERT: u32 = u32::MAX;

/// One iso-surface extraction over a scalar field
///
/// ```
/// use mc33::{DenseField, MarchingCubes, Settings};
///
/// let field = DenseField::from_fn(8, 8, 8, |i, _, _| i as f32 - 3.5);
/// let mesh = MarchingCubes::new(&field).run(Settings::default())?;
/// assert_eq!(mesh.vertex_count(), 64); // one crossing per x row
/// # Ok::<(), mc33::Error>(())
/// ```
pub struct MarchingCubes<'a, F> {
    field: &'a F,
    nx: usize,
    ny: usize,
    nz: usize,
    iso: f32,

    /// Edge-vertex caches, one per axis, indexed like the sample grid
    ///
    /// `x_verts[i + nx * (j + ny * k)]` is the mesh vertex on the edge
    /// from `(i, j, k)` towards `(i + 1, j, k)`, or [`NO_VERT`].
    x_verts: Vec<u32>,
    y_verts: Vec<u32>,
    z_verts: Vec<u32>,

    mesh: Mesh,
}

impl<'a, F: ScalarField> MarchingCubes<'a, F> {
    /// Builds the run context for the given field
    pub fn new(field: &'a F) -> Self {
        let [nx, ny, nz] = field.dimensions();
        let n = nx * ny * nz;
        Self {
            field,
            nx,
            ny,
            nz,
            iso: 0.0,
            x_verts: vec![NO_VERT; n],
            y_verts: vec![NO_VERT; n],
            z_verts: vec![NO_VERT; n],
            mesh: Mesh::new(),
        }
    }

    /// Runs the two-pass extraction and returns the indexed mesh
    ///
    /// Running twice on the same field and settings yields bit-identical
    /// meshes.  Positions are in grid-index space.
    pub fn run(mut self, settings: Settings) -> Result<Mesh, Error> {
        let start = std::time::Instant::now();
        self.iso = settings.iso;
        self.compute_intersection_points();
        for k in 0..self.nz.saturating_sub(1) {
            for j in 0..self.ny.saturating_sub(1) {
                for i in 0..self.nx.saturating_sub(1) {
                    let cube = self.load_cube(i, j, k);
                    match settings.mode {
                        Mode::Classic => {
                            self.process_classic(&cube, i, j, k)?
                        }
                        Mode::Topological => {
                            self.process_cube(&cube, i, j, k)?
                        }
                    }
                }
            }
        }
        log::debug!(
            "extracted {} vertices, {} triangles in {:?}",
            self.mesh.vertex_count(),
            self.mesh.triangle_count(),
            start.elapsed(),
        );
        Ok(self.mesh)
    }

    fn slot(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.nx * (j + self.ny * k)
    }

    /// Iso-shifted, zero-clamped sample
    fn shifted(&self, i: usize, j: usize, k: usize) -> f32 {
        clamp_sample(self.field.sample(i, j, k) - self.iso)
    }

    fn load_cube(&self, i: usize, j: usize, k: usize) -> Cube {
        let mut raw = [0.0; 8];
        for c in Corner::iter() {
            let [oi, oj, ok] = c.offset();
            raw[c.index()] = self.shifted(i + oi, j + oj, k + ok);
        }
        Cube::new(raw)
    }

    /// Pass one: places one vertex on every sign-crossing grid edge
    ///
    /// The forward difference degenerates to the base sample at the far
    /// grid boundary, so boundary points never create phantom crossings.
    fn compute_intersection_points(&mut self) {
        for k in 0..self.nz {
            for j in 0..self.ny {
                for i in 0..self.nx {
                    let v0 = self.shifted(i, j, k);
                    let vx = if i < self.nx - 1 {
                        self.shifted(i + 1, j, k)
                    } else {
                        v0
                    };
                    let vy = if j < self.ny - 1 {
                        self.shifted(i, j + 1, k)
                    } else {
                        v0
                    };
                    let vz = if k < self.nz - 1 {
                        self.shifted(i, j, k + 1)
                    } else {
                        v0
                    };
                    let slot = self.slot(i, j, k);
                    if (v0 > 0.0) != (vx > 0.0) {
                        self.x_verts[slot] =
                            self.add_edge_vertex(i, j, k, 0, v0, vx);
                    }
                    if (v0 > 0.0) != (vy > 0.0) {
                        self.y_verts[slot] =
                            self.add_edge_vertex(i, j, k, 1, v0, vy);
                    }
                    if (v0 > 0.0) != (vz > 0.0) {
                        self.z_verts[slot] =
                            self.add_edge_vertex(i, j, k, 2, v0, vz);
                    }
                }
            }
        }
    }

    /// Creates the vertex for one crossing edge
    ///
    /// Position is the linear-interpolation root along the edge; the
    /// normal blends the endpoint gradients by `(1-u, u)` and is left
    /// unnormalized when the blend cancels to zero length.
    fn add_edge_vertex(
        &mut self,
        i: usize,
        j: usize,
        k: usize,
        axis: usize,
        v0: f32,
        v1: f32,
    ) -> u32 {
        let u = v0 / (v0 - v1);
        let mut pos = Vector3::new(i as f32, j as f32, k as f32);
        pos[axis] += u;

        let mut far = [i, j, k];
        far[axis] += 1;
        let mut normal = self.gradient(i, j, k) * (1.0 - u)
            + self.gradient(far[0], far[1], far[2]) * u;
        let len = normal.norm();
        if len > 0.0 {
            normal /= len;
        }
        self.mesh.push_vertex(pos, normal) as u32
    }

    /// Central-difference field gradient, one-sided at the grid boundary
    fn gradient(&self, i: usize, j: usize, k: usize) -> Vector3<f32> {
        let diff = |axis: usize| {
            let c = [i, j, k][axis];
            let n = [self.nx, self.ny, self.nz][axis];
            let at = |v: usize| {
                let mut p = [i, j, k];
                p[axis] = v;
                self.field.sample(p[0], p[1], p[2])
            };
            if c > 0 {
                if c < n - 1 {
                    (at(c + 1) - at(c - 1)) / 2.0
                } else {
                    at(c) - at(c - 1)
                }
            } else if n > 1 {
                at(c + 1) - at(c)
            } else {
                0.0
            }
        };
        Vector3::new(diff(0), diff(1), diff(2))
    }

    /// Cached vertex id for a cube-local edge, if pass one created one
    fn edge_vertex(
        &self,
        e: u8,
        i: usize,
        j: usize,
        k: usize,
    ) -> Option<usize> {
        let (axis, di, dj, dk) = EDGE_SLOTS[e as usize];
        let cache = [&self.x_verts, &self.y_verts, &self.z_verts][axis];
        match cache[self.slot(i + di, j + dj, k + dk)] {
            NO_VERT => None,
            v => Some(v as usize),
        }
    }

    /// Builds the centroid vertex for one cube (template edge id 12)
    ///
    /// Averages position and normal over the cube's cached edge vertices,
    /// then renormalizes.  Zero contributing edges leaves the vertex at
    /// its zero default instead of dividing by zero.
    fn add_c_vertex(&mut self, i: usize, j: usize, k: usize) -> usize {
        let mut pos = Vector3::zeros();
        let mut normal = Vector3::zeros();
        let mut count = 0u32;
        for e in 0..12u8 {
            if let Some(v) = self.edge_vertex(e, i, j, k) {
                pos += self.mesh.vertices[v];
                normal += self.mesh.normals[v];
                count += 1;
            }
        }
        if count > 0 {
            pos /= count as f32;
        }
        let len = normal.norm();
        if len > 0.0 {
            normal /= len;
        }
        self.mesh.push_vertex(pos, normal)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DenseField;

    fn plane_x(cut: f32) -> DenseField {
        DenseField::from_fn(4, 3, 3, move |i, _, _| i as f32 - cut)
    }

    #[test]
    fn test_pass_one_populates_caches() {
        let field = plane_x(1.5);
        let mut mc = MarchingCubes::new(&field);
        mc.compute_intersection_points();
        // every x edge from i=1 crosses; no y or z edge does
        for k in 0..3 {
            for j in 0..3 {
                for i in 0..4 {
                    let s = mc.slot(i, j, k);
                    assert_eq!(mc.x_verts[s] != NO_VERT, i == 1);
                    assert_eq!(mc.y_verts[s], NO_VERT);
                    assert_eq!(mc.z_verts[s], NO_VERT);
                }
            }
        }
        assert_eq!(mc.mesh.vertex_count(), 9);
    }

    #[test]
    fn test_edge_vertex_interpolation() {
        let field = plane_x(1.25);
        let mut mc = MarchingCubes::new(&field);
        mc.compute_intersection_points();
        let v = mc.edge_vertex(0, 1, 0, 0).unwrap();
        let p = mc.mesh.vertices[v];
        assert_eq!(p, Vector3::new(1.25, 0.0, 0.0));
        // gradient points towards increasing field values
        assert_eq!(mc.mesh.normals[v], Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_single_point_grid_is_empty() {
        let field = DenseField::from_fn(1, 1, 1, |_, _, _| 1.0);
        let mesh = MarchingCubes::new(&field).run(Settings::default());
        let mesh = mesh.unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }
}
