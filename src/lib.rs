//! `mc33` extracts triangulated iso-surfaces from scalar fields sampled on
//! regular 3D grids, using the topologically consistent 33-case Marching
//! Cubes analysis.
//!
//! An **iso-surface** is the zero set of `sample(i, j, k) - iso`.  By
//! convention, a sample above the iso-level is **outside** the surface and a
//! sample below it is **inside**; extracted triangles wind so that their
//! geometric normals point at the outside.
//!
//! The classic Marching Cubes table maps each cell's 8-bit corner sign mask
//! directly to a triangle template.  That table is ambiguous: several masks
//! admit more than one topologically valid triangulation, and picking the
//! wrong one produces cracks and non-manifold edges between neighbouring
//! cells.  This crate resolves those ambiguities with the bilinear face test
//! and the trilinear interior test (the *asymptotic decider*), so the output
//! mesh is manifold-consistent across cell boundaries.
//!
//! # Sampling
//! Fields implement the [`ScalarField`](crate::field::ScalarField) trait,
//! which exposes grid dimensions and per-point samples.  A dense row-major
//! buffer is provided as [`DenseField`](crate::field::DenseField):
//!
//! ```
//! use mc33::DenseField;
//!
//! // 16^3 samples of a sphere of radius 0.4 centred in [0, 1]^3
//! let field = DenseField::from_fn(16, 16, 16, |i, j, k| {
//!     let p = |v: usize| v as f32 / 15.0 - 0.5;
//!     (p(i).powi(2) + p(j).powi(2) + p(k).powi(2)).sqrt() - 0.4
//! });
//! ```
//!
//! # Extraction
//! A [`MarchingCubes`](crate::mc::MarchingCubes) run scans the grid twice:
//! the first pass finds every sign-crossing grid edge and places one vertex
//! on it (shared by all cells touching that edge, which makes the mesh
//! watertight); the second pass classifies each cell and emits indexed
//! triangles.
//!
//! ```
//! # use mc33::DenseField;
//! use mc33::{MarchingCubes, Settings};
//!
//! # let field = DenseField::from_fn(16, 16, 16, |i, j, k| {
//! #     let p = |v: usize| v as f32 / 15.0 - 0.5;
//! #     (p(i).powi(2) + p(j).powi(2) + p(k).powi(2)).sqrt() - 0.4
//! # });
//! let mesh = MarchingCubes::new(&field).run(Settings::default())?;
//! assert!(mesh.triangle_count() > 0);
//! # Ok::<(), mc33::Error>(())
//! ```
//!
//! Vertex positions are emitted in grid-index space (a vertex on the edge
//! between samples `(1, 0, 0)` and `(2, 0, 0)` has `x` in `1.0..=2.0`);
//! callers rescale into world space.
//!
//! [`Settings`](crate::mc::Settings) selects between the default
//! [`Mode::Topological`](crate::mc::Mode) and the historical
//! [`Mode::Classic`](crate::mc::Mode), which runs the single
//! non-disambiguated 256-entry table.  Classic mode is faster and matches
//! the original 1987 algorithm, but may leave cracks on ambiguous cells;
//! it is kept for compatibility with data pipelines that expect it.
mod error;
pub use error::Error;

pub mod field;
pub mod mc;
pub mod mesh;

pub use field::{DenseField, ScalarField};
pub use mc::{MarchingCubes, Mode, Settings};
pub use mesh::Mesh;
