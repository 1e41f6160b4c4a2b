//! Module containing the crate's universal error type
use thiserror::Error;

/// Universal error type for iso-surface extraction
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Field data length does not match the grid dimensions
    #[error("field data length ({0}) does not match grid dimensions ({1})")]
    BadFieldSize(usize, usize),

    /// An ambiguity-resolution lookup fell outside the static dataset
    ///
    /// This indicates a corrupted or incompatible lookup table, not a
    /// property of the input field.
    #[error(
        "invalid topological case {case}:{subcase} at cell \
         ({i}, {j}, {k}), mask {mask:#04x}"
    )]
    InvalidTopology {
        /// Canonical case of the offending cell
        case: i8,
        /// Sub-case or reference-edge value that fell out of range
        subcase: i8,
        /// Cell coordinates
        i: usize,
        /// Cell coordinates
        j: usize,
        /// Cell coordinates
        k: usize,
        /// Raw 8-bit corner sign mask
        mask: u8,
    },

    /// A triangle template referenced an edge with no intersection vertex
    ///
    /// The intersection pass and the cube-processing pass disagree about
    /// which edges cross the surface; a triangle with a dangling index is
    /// never emitted.
    #[error(
        "unresolved vertex on edge {edge} at cell ({i}, {j}, {k}), \
         mask {mask:#04x}"
    )]
    UnresolvedVertex {
        /// Local edge id (0-12) that failed to resolve
        edge: i8,
        /// Cell coordinates
        i: usize,
        /// Cell coordinates
        j: usize,
        /// Cell coordinates
        k: usize,
        /// Raw 8-bit corner sign mask
        mask: u8,
    },
}
