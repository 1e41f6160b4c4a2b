//! Static lookup dataset for the 33-case Marching Cubes analysis
//!
//! The 256 corner sign masks collapse into 15 canonical topological cases
//! under the cube's symmetry group; [`CASES`] maps every mask to its
//! `(case, config)` pair, the `TILING*` tables hold the per-configuration
//! triangle templates (ordered edge ids, 12 meaning the cube's centroid
//! vertex), and the `TEST*` tables drive the face and interior tests for
//! the ambiguous cases.  [`SUBCONFIG13`] folds the 64 possible face-test
//! outcomes of case 13 onto its 46 realizable sub-cases; `-1` marks
//! outcomes no trilinear field can produce, which the dispatcher reports
//! as dataset corruption.
//!
//! The case analysis follows Chernyaev's 33-configuration refinement of
//! Marching Cubes in the tabulated form introduced by Lewiner, Lopes,
//! Vieira and Tavares ("Efficient implementation of Marching Cubes' cases
//! with topological guarantees", JGT 2003).  [`CASES_CLASSIC`] is the
//! historical single-table triangulation used by `Mode::Classic`.
//!
//! Everything here is immutable, loaded-once constant data, shared
//! read-only by concurrent runs.

/// Sign mask to `(case, config)`; case 0 covers the two trivial masks
pub(crate) static CASES: [[i8; 2]; 256] = [
    [0, 0],
    [1, 0],
    [1, 1],
    [2, 0],
    [1, 2],
    [3, 0],
    [2, 1],
    [5, 0],
    [1, 3],
    [2, 2],
    [3, 1],
    [5, 1],
    [2, 3],
    [5, 2],
    [5, 3],
    [8, 0],
    [1, 4],
    [2, 4],
    [3, 2],
    [5, 4],
    [4, 0],
    [6, 0],
    [6, 1],
    [14, 0],
    [3, 3],
    [5, 5],
    [7, 0],
    [9, 0],
    [6, 2],
    [11, 0],
    [12, 0],
    [5, 6],
    [1, 5],
    [3, 4],
    [2, 5],
    [5, 7],
    [3, 5],
    [7, 1],
    [5, 8],
    [9, 1],
    [4, 1],
    [6, 3],
    [6, 4],
    [11, 1],
    [6, 5],
    [12, 1],
    [14, 1],
    [5, 9],
    [2, 6],
    [5, 10],
    [5, 11],
    [8, 1],
    [6, 6],
    [12, 2],
    [11, 2],
    [5, 12],
    [6, 7],
    [14, 2],
    [12, 3],
    [5, 13],
    [10, 0],
    [6, 8],
    [6, 9],
    [2, 7],
    [1, 6],
    [4, 2],
    [3, 6],
    [6, 10],
    [2, 8],
    [6, 11],
    [5, 14],
    [11, 3],
    [3, 7],
    [6, 12],
    [7, 2],
    [12, 4],
    [5, 15],
    [14, 3],
    [9, 2],
    [5, 16],
    [3, 8],
    [6, 13],
    [7, 3],
    [12, 5],
    [6, 14],
    [10, 1],
    [12, 6],
    [6, 15],
    [7, 4],
    [12, 7],
    [13, 0],
    [7, 5],
    [12, 8],
    [6, 16],
    [7, 6],
    [3, 9],
    [2, 9],
    [6, 17],
    [5, 17],
    [14, 4],
    [5, 18],
    [12, 9],
    [8, 2],
    [5, 19],
    [6, 18],
    [10, 2],
    [12, 10],
    [6, 19],
    [11, 4],
    [6, 20],
    [5, 20],
    [2, 10],
    [5, 21],
    [11, 5],
    [9, 3],
    [5, 22],
    [14, 5],
    [6, 21],
    [5, 23],
    [2, 11],
    [12, 11],
    [6, 22],
    [7, 7],
    [3, 10],
    [6, 23],
    [4, 3],
    [3, 11],
    [1, 7],
    [1, 8],
    [3, 12],
    [4, 4],
    [6, 24],
    [3, 13],
    [7, 8],
    [6, 25],
    [12, 12],
    [2, 12],
    [5, 24],
    [6, 26],
    [14, 6],
    [5, 25],
    [9, 4],
    [11, 6],
    [5, 26],
    [2, 13],
    [5, 27],
    [6, 27],
    [11, 7],
    [6, 28],
    [12, 13],
    [10, 3],
    [6, 29],
    [5, 28],
    [8, 3],
    [12, 14],
    [5, 29],
    [14, 7],
    [5, 30],
    [6, 30],
    [2, 14],
    [3, 14],
    [7, 9],
    [6, 31],
    [12, 15],
    [7, 10],
    [13, 1],
    [12, 16],
    [7, 11],
    [6, 32],
    [12, 17],
    [10, 4],
    [6, 33],
    [12, 18],
    [7, 12],
    [6, 34],
    [3, 15],
    [5, 31],
    [9, 5],
    [14, 8],
    [5, 32],
    [12, 19],
    [7, 13],
    [6, 35],
    [3, 16],
    [11, 8],
    [5, 33],
    [6, 36],
    [2, 15],
    [6, 37],
    [3, 17],
    [4, 5],
    [1, 9],
    [2, 16],
    [6, 38],
    [6, 39],
    [10, 5],
    [5, 34],
    [12, 20],
    [14, 9],
    [6, 40],
    [5, 35],
    [11, 9],
    [12, 21],
    [6, 41],
    [8, 4],
    [5, 36],
    [5, 37],
    [2, 17],
    [5, 38],
    [14, 10],
    [12, 22],
    [6, 42],
    [11, 10],
    [6, 43],
    [6, 44],
    [4, 6],
    [9, 6],
    [5, 39],
    [7, 14],
    [3, 18],
    [5, 40],
    [2, 18],
    [3, 19],
    [1, 10],
    [5, 41],
    [12, 23],
    [11, 11],
    [6, 45],
    [9, 7],
    [7, 15],
    [5, 42],
    [3, 20],
    [14, 11],
    [6, 46],
    [6, 47],
    [4, 7],
    [5, 43],
    [3, 21],
    [2, 19],
    [1, 11],
    [8, 5],
    [5, 44],
    [5, 45],
    [2, 20],
    [5, 46],
    [3, 22],
    [2, 21],
    [1, 12],
    [5, 47],
    [2, 22],
    [3, 23],
    [1, 13],
    [2, 23],
    [1, 14],
    [1, 15],
    [0, 1],
];

/// Case 1: one corner, one triangle
pub(crate) static TILING1: [[i8; 3]; 16] = [
    [0, 8, 3],
    [0, 1, 9],
    [1, 2, 10],
    [2, 3, 11],
    [4, 7, 8],
    [4, 9, 5],
    [5, 10, 6],
    [6, 7, 11],
    [6, 11, 7],
    [5, 6, 10],
    [4, 5, 9],
    [4, 8, 7],
    [2, 11, 3],
    [1, 10, 2],
    [0, 9, 1],
    [0, 3, 8],
];

/// Case 2: one edge, two triangles
pub(crate) static TILING2: [[i8; 6]; 24] = [
    [1, 9, 3, 9, 8, 3],
    [0, 2, 9, 9, 2, 10],
    [0, 8, 2, 8, 11, 2],
    [1, 3, 10, 10, 3, 11],
    [0, 4, 3, 4, 7, 3],
    [0, 1, 4, 4, 1, 5],
    [5, 7, 9, 9, 7, 8],
    [5, 7, 10, 10, 7, 11],
    [1, 2, 5, 5, 2, 6],
    [4, 9, 6, 9, 10, 6],
    [4, 8, 6, 8, 11, 6],
    [2, 6, 3, 6, 7, 3],
    [2, 3, 6, 6, 3, 7],
    [4, 6, 8, 8, 6, 11],
    [4, 6, 9, 9, 6, 10],
    [1, 5, 2, 5, 6, 2],
    [5, 10, 7, 10, 11, 7],
    [5, 9, 7, 9, 8, 7],
    [0, 4, 1, 4, 5, 1],
    [0, 3, 4, 4, 3, 7],
    [1, 10, 3, 10, 11, 3],
    [0, 2, 8, 8, 2, 11],
    [0, 9, 2, 9, 10, 2],
    [1, 3, 9, 9, 3, 8],
];

/// Case 3.1: separated face diagonal
pub(crate) static TILING3_1: [[i8; 6]; 24] = [
    [0, 8, 3, 1, 2, 10],
    [0, 1, 9, 2, 3, 11],
    [0, 1, 9, 4, 7, 8],
    [2, 3, 11, 4, 7, 8],
    [0, 8, 3, 4, 9, 5],
    [1, 2, 10, 4, 9, 5],
    [0, 1, 9, 5, 10, 6],
    [2, 3, 11, 5, 10, 6],
    [4, 7, 8, 5, 10, 6],
    [4, 5, 9, 6, 7, 11],
    [1, 10, 2, 6, 7, 11],
    [0, 3, 8, 6, 7, 11],
    [0, 8, 3, 6, 11, 7],
    [1, 2, 10, 6, 11, 7],
    [4, 9, 5, 6, 11, 7],
    [4, 8, 7, 5, 6, 10],
    [2, 11, 3, 5, 6, 10],
    [0, 9, 1, 5, 6, 10],
    [1, 10, 2, 4, 5, 9],
    [0, 3, 8, 4, 5, 9],
    [2, 11, 3, 4, 8, 7],
    [0, 9, 1, 4, 8, 7],
    [0, 9, 1, 2, 11, 3],
    [0, 3, 8, 1, 10, 2],
];

/// Case 3.2: joined face diagonal
pub(crate) static TILING3_2: [[i8; 12]; 24] = [
    [0, 8, 1, 8, 3, 1, 3, 2, 10, 3, 10, 1],
    [0, 3, 9, 9, 3, 1, 1, 11, 2, 1, 3, 11],
    [0, 1, 8, 8, 1, 7, 7, 1, 4, 4, 1, 9],
    [2, 3, 11, 11, 4, 7, 11, 3, 4, 4, 3, 8],
    [0, 9, 3, 9, 5, 3, 5, 4, 3, 4, 8, 3],
    [1, 2, 9, 9, 2, 4, 4, 2, 5, 5, 2, 10],
    [0, 6, 9, 9, 6, 5, 0, 1, 6, 6, 1, 10],
    [2, 3, 10, 10, 3, 5, 5, 3, 6, 6, 3, 11],
    [4, 5, 8, 8, 10, 7, 7, 10, 6, 8, 5, 10],
    [4, 7, 9, 9, 11, 5, 5, 11, 6, 9, 7, 11],
    [1, 10, 7, 10, 6, 7, 1, 7, 2, 7, 11, 2],
    [0, 3, 8, 8, 6, 7, 8, 3, 6, 6, 3, 11],
    [0, 8, 3, 8, 7, 6, 8, 6, 3, 6, 11, 3],
    [1, 7, 10, 10, 7, 6, 1, 2, 7, 7, 2, 11],
    [4, 9, 7, 9, 5, 11, 5, 6, 11, 9, 11, 7],
    [4, 8, 5, 8, 7, 10, 7, 6, 10, 8, 10, 5],
    [2, 10, 3, 10, 5, 3, 5, 6, 3, 6, 11, 3],
    [0, 9, 6, 9, 5, 6, 0, 6, 1, 6, 10, 1],
    [1, 9, 2, 9, 4, 2, 4, 5, 2, 5, 10, 2],
    [0, 3, 9, 9, 3, 5, 5, 3, 4, 4, 3, 8],
    [2, 11, 3, 11, 7, 4, 11, 4, 3, 4, 8, 3],
    [0, 8, 1, 8, 7, 1, 7, 4, 1, 4, 9, 1],
    [0, 9, 3, 9, 1, 3, 1, 2, 11, 1, 11, 3],
    [0, 1, 8, 8, 1, 3, 3, 10, 2, 3, 1, 10],
];

/// Case 4.1.1: separated body diagonal
pub(crate) static TILING4_1: [[i8; 6]; 8] = [
    [1, 2, 10, 4, 7, 8],
    [2, 3, 11, 4, 9, 5],
    [0, 8, 3, 5, 10, 6],
    [0, 9, 1, 6, 7, 11],
    [0, 1, 9, 6, 11, 7],
    [0, 3, 8, 5, 6, 10],
    [2, 11, 3, 4, 5, 9],
    [1, 10, 2, 4, 8, 7],
];

/// Case 4.1.2: body diagonal joined through the interior
pub(crate) static TILING4_2: [[i8; 18]; 8] = [
    [1, 7, 10, 10, 7, 2, 2, 8, 1, 1, 4, 7, 1, 8, 4, 2, 7, 8],
    [2, 4, 11, 11, 4, 3, 3, 9, 2, 2, 5, 4, 2, 9, 5, 3, 4, 9],
    [0, 8, 6, 8, 3, 6, 3, 0, 10, 0, 6, 5, 0, 5, 10, 3, 10, 6],
    [0, 9, 6, 9, 1, 6, 1, 0, 11, 0, 6, 7, 0, 7, 11, 1, 11, 6],
    [0, 6, 9, 9, 6, 1, 1, 11, 0, 0, 7, 6, 0, 11, 7, 1, 6, 11],
    [0, 6, 8, 8, 6, 3, 3, 10, 0, 0, 5, 6, 0, 10, 5, 3, 6, 10],
    [2, 11, 4, 11, 3, 4, 3, 2, 9, 2, 4, 5, 2, 5, 9, 3, 9, 4],
    [1, 10, 7, 10, 2, 7, 2, 1, 8, 1, 7, 4, 1, 4, 8, 2, 8, 7],
];

/// Case 5: three corners, three triangles
pub(crate) static TILING5: [[i8; 9]; 48] = [
    [2, 10, 3, 10, 9, 3, 9, 8, 3],
    [1, 9, 2, 9, 8, 2, 8, 11, 2],
    [0, 8, 1, 8, 11, 1, 11, 10, 1],
    [0, 3, 9, 9, 3, 10, 10, 3, 11],
    [1, 9, 3, 9, 4, 3, 4, 7, 3],
    [0, 4, 2, 4, 7, 2, 7, 11, 2],
    [4, 7, 9, 9, 7, 10, 10, 7, 11],
    [1, 5, 3, 5, 4, 3, 4, 8, 3],
    [0, 2, 4, 4, 2, 5, 5, 2, 10],
    [4, 8, 5, 8, 11, 5, 11, 10, 5],
    [0, 9, 3, 9, 5, 3, 5, 7, 3],
    [0, 1, 8, 8, 1, 7, 7, 1, 5],
    [2, 10, 3, 10, 5, 3, 5, 7, 3],
    [1, 5, 2, 5, 7, 2, 7, 11, 2],
    [0, 2, 9, 9, 2, 5, 5, 2, 6],
    [1, 3, 5, 5, 3, 6, 6, 3, 11],
    [5, 9, 6, 9, 8, 6, 8, 11, 6],
    [0, 1, 4, 4, 1, 6, 6, 1, 10],
    [1, 2, 9, 9, 2, 4, 4, 2, 6],
    [2, 6, 3, 6, 4, 3, 4, 8, 3],
    [0, 3, 4, 4, 3, 6, 6, 3, 11],
    [6, 7, 10, 10, 7, 9, 9, 7, 8],
    [1, 10, 3, 10, 6, 3, 6, 7, 3],
    [0, 2, 8, 8, 2, 7, 7, 2, 6],
    [0, 8, 2, 8, 7, 2, 7, 6, 2],
    [1, 3, 10, 10, 3, 6, 6, 3, 7],
    [6, 10, 7, 10, 9, 7, 9, 8, 7],
    [0, 4, 3, 4, 6, 3, 6, 11, 3],
    [2, 3, 6, 6, 3, 4, 4, 3, 8],
    [1, 9, 2, 9, 4, 2, 4, 6, 2],
    [0, 4, 1, 4, 6, 1, 6, 10, 1],
    [5, 6, 9, 9, 6, 8, 8, 6, 11],
    [1, 5, 3, 5, 6, 3, 6, 11, 3],
    [0, 9, 2, 9, 5, 2, 5, 6, 2],
    [1, 2, 5, 5, 2, 7, 7, 2, 11],
    [2, 3, 10, 10, 3, 5, 5, 3, 7],
    [0, 8, 1, 8, 7, 1, 7, 5, 1],
    [0, 3, 9, 9, 3, 5, 5, 3, 7],
    [4, 5, 8, 8, 5, 11, 11, 5, 10],
    [0, 4, 2, 4, 5, 2, 5, 10, 2],
    [1, 3, 5, 5, 3, 4, 4, 3, 8],
    [4, 9, 7, 9, 10, 7, 10, 11, 7],
    [0, 2, 4, 4, 2, 7, 7, 2, 11],
    [1, 3, 9, 9, 3, 4, 4, 3, 7],
    [0, 9, 3, 9, 10, 3, 10, 11, 3],
    [0, 1, 8, 8, 1, 11, 11, 1, 10],
    [1, 2, 9, 9, 2, 8, 8, 2, 11],
    [2, 3, 10, 10, 3, 9, 9, 3, 8],
];

/// Case 6.1.1: edge plus corner, separated
pub(crate) static TILING6_1_1: [[i8; 9]; 48] = [
    [0, 4, 3, 4, 7, 3, 1, 2, 10],
    [0, 2, 9, 9, 2, 10, 4, 7, 8],
    [1, 3, 10, 10, 3, 11, 4, 7, 8],
    [0, 8, 2, 8, 11, 2, 4, 9, 5],
    [0, 1, 4, 4, 1, 5, 2, 3, 11],
    [1, 3, 10, 10, 3, 11, 4, 9, 5],
    [1, 2, 10, 5, 7, 9, 9, 7, 8],
    [2, 3, 11, 5, 7, 9, 9, 7, 8],
    [0, 9, 1, 5, 7, 10, 10, 7, 11],
    [0, 3, 8, 5, 7, 10, 10, 7, 11],
    [1, 9, 3, 9, 8, 3, 5, 10, 6],
    [0, 8, 3, 1, 2, 5, 5, 2, 6],
    [0, 8, 2, 8, 11, 2, 5, 10, 6],
    [0, 4, 3, 4, 7, 3, 5, 10, 6],
    [1, 2, 5, 5, 2, 6, 4, 7, 8],
    [2, 6, 3, 6, 7, 3, 4, 5, 9],
    [0, 4, 1, 4, 5, 1, 6, 7, 11],
    [0, 8, 3, 4, 9, 6, 9, 10, 6],
    [2, 3, 11, 4, 9, 6, 9, 10, 6],
    [1, 10, 2, 4, 8, 6, 8, 11, 6],
    [0, 9, 1, 4, 8, 6, 8, 11, 6],
    [0, 9, 1, 2, 6, 3, 6, 7, 3],
    [0, 9, 2, 9, 10, 2, 6, 7, 11],
    [1, 3, 9, 9, 3, 8, 6, 7, 11],
    [1, 9, 3, 9, 8, 3, 6, 11, 7],
    [0, 2, 9, 9, 2, 10, 6, 11, 7],
    [0, 1, 9, 2, 3, 6, 6, 3, 7],
    [0, 1, 9, 4, 6, 8, 8, 6, 11],
    [1, 2, 10, 4, 6, 8, 8, 6, 11],
    [2, 11, 3, 4, 6, 9, 9, 6, 10],
    [0, 3, 8, 4, 6, 9, 9, 6, 10],
    [0, 1, 4, 4, 1, 5, 6, 11, 7],
    [2, 3, 6, 6, 3, 7, 4, 9, 5],
    [1, 5, 2, 5, 6, 2, 4, 8, 7],
    [0, 3, 4, 4, 3, 7, 5, 6, 10],
    [0, 2, 8, 8, 2, 11, 5, 6, 10],
    [0, 3, 8, 1, 5, 2, 5, 6, 2],
    [1, 3, 9, 9, 3, 8, 5, 6, 10],
    [0, 8, 3, 5, 10, 7, 10, 11, 7],
    [0, 1, 9, 5, 10, 7, 10, 11, 7],
    [2, 11, 3, 5, 9, 7, 9, 8, 7],
    [1, 10, 2, 5, 9, 7, 9, 8, 7],
    [1, 10, 3, 10, 11, 3, 4, 5, 9],
    [0, 4, 1, 4, 5, 1, 2, 11, 3],
    [0, 2, 8, 8, 2, 11, 4, 5, 9],
    [1, 10, 3, 10, 11, 3, 4, 8, 7],
    [0, 9, 2, 9, 10, 2, 4, 8, 7],
    [0, 3, 4, 4, 3, 7, 1, 10, 2],
];

/// Case 6.1.2: edge plus corner joined through the interior
pub(crate) static TILING6_1_2: [[i8; 27]; 48] = [
    [
        0, 4, 1, 4, 7, 10, 7, 3, 0, 7, 0, 12, 0, 1, 12, 1, 7, 12, 7, 1, 2,
        7, 2, 10, 4, 10, 1,
    ],
    [
        0, 7, 9, 9, 7, 12, 7, 10, 12, 10, 9, 12, 10, 7, 2, 2, 4, 0, 0, 4, 7,
        2, 8, 4, 2, 7, 8,
    ],
    [
        1, 7, 10, 10, 8, 11, 11, 1, 12, 1, 3, 12, 3, 11, 12, 11, 8, 1, 1, 4,
        7, 1, 8, 4, 10, 7, 8,
    ],
    [
        0, 8, 5, 8, 11, 5, 11, 2, 12, 2, 5, 12, 5, 11, 12, 2, 0, 4, 0, 5, 4,
        2, 4, 9, 2, 9, 5,
    ],
    [
        0, 3, 4, 4, 11, 5, 5, 0, 1, 5, 3, 12, 3, 0, 12, 0, 5, 12, 5, 2, 3,
        5, 11, 2, 4, 3, 11,
    ],
    [
        1, 4, 10, 10, 4, 12, 4, 11, 12, 11, 10, 12, 11, 9, 3, 3, 4, 1, 3, 5,
        4, 3, 9, 5, 11, 4, 9,
    ],
    [
        1, 7, 10, 10, 8, 2, 2, 7, 1, 2, 5, 7, 2, 8, 12, 8, 5, 12, 5, 2, 12,
        5, 8, 9, 10, 7, 8,
    ],
    [
        2, 7, 12, 7, 11, 12, 11, 2, 12, 11, 9, 3, 3, 9, 2, 2, 5, 7, 2, 9, 5,
        11, 7, 9, 9, 7, 8,
    ],
    [
        0, 9, 11, 9, 1, 11, 1, 0, 7, 0, 5, 7, 1, 7, 11, 0, 11, 12, 11, 5,
        12, 5, 0, 12, 11, 10, 5,
    ],
    [
        0, 7, 12, 7, 8, 12, 8, 0, 12, 8, 10, 3, 3, 10, 0, 0, 5, 7, 0, 10, 5,
        8, 7, 10, 10, 7, 11,
    ],
    [
        1, 9, 6, 9, 8, 12, 8, 6, 12, 6, 9, 12, 8, 3, 10, 3, 1, 6, 3, 6, 5,
        3, 5, 10, 8, 10, 6,
    ],
    [
        0, 8, 1, 8, 3, 1, 3, 0, 5, 0, 1, 12, 1, 6, 12, 6, 0, 12, 1, 2, 6, 0,
        6, 5, 3, 5, 1,
    ],
    [
        0, 8, 6, 8, 11, 12, 11, 5, 12, 5, 8, 12, 11, 2, 5, 2, 0, 5, 0, 6, 5,
        8, 5, 10, 8, 10, 6,
    ],
    [
        0, 4, 12, 4, 10, 12, 10, 0, 12, 4, 7, 10, 7, 3, 10, 3, 0, 5, 0, 6,
        5, 3, 5, 10, 0, 10, 6,
    ],
    [
        1, 8, 12, 8, 5, 12, 5, 1, 12, 5, 8, 6, 6, 8, 2, 2, 4, 1, 1, 4, 7, 2,
        8, 4, 1, 7, 8,
    ],
    [
        2, 6, 12, 6, 9, 12, 9, 2, 12, 6, 7, 9, 7, 3, 9, 3, 2, 5, 2, 4, 5, 3,
        5, 9, 2, 9, 4,
    ],
    [
        0, 4, 12, 4, 11, 12, 11, 0, 12, 4, 5, 11, 5, 1, 11, 1, 0, 7, 0, 6,
        7, 1, 7, 11, 0, 11, 6,
    ],
    [
        0, 8, 12, 8, 6, 12, 6, 0, 12, 8, 3, 6, 3, 0, 4, 0, 6, 4, 3, 4, 9, 3,
        9, 6, 9, 10, 6,
    ],
    [
        2, 4, 11, 11, 9, 3, 3, 4, 2, 3, 6, 4, 3, 9, 12, 9, 6, 12, 6, 3, 12,
        6, 9, 10, 11, 4, 9,
    ],
    [
        1, 10, 8, 10, 2, 8, 2, 1, 4, 1, 6, 4, 2, 4, 8, 1, 8, 12, 8, 6, 12,
        6, 1, 12, 8, 11, 6,
    ],
    [
        0, 9, 12, 9, 6, 12, 6, 0, 12, 9, 1, 6, 1, 0, 4, 0, 6, 4, 1, 4, 8, 1,
        8, 6, 8, 11, 6,
    ],
    [
        0, 9, 12, 9, 3, 12, 3, 0, 12, 9, 1, 3, 1, 0, 7, 0, 3, 6, 3, 2, 6, 0,
        6, 7, 1, 7, 3,
    ],
    [
        0, 9, 6, 9, 10, 12, 10, 7, 12, 7, 9, 12, 10, 2, 7, 2, 0, 7, 0, 6, 7,
        9, 7, 11, 9, 11, 6,
    ],
    [
        1, 7, 9, 9, 11, 8, 8, 1, 12, 1, 3, 12, 3, 8, 12, 8, 11, 1, 1, 6, 7,
        1, 11, 6, 9, 7, 11,
    ],
    [
        1, 9, 7, 9, 8, 12, 8, 11, 12, 11, 9, 12, 8, 3, 1, 8, 1, 11, 1, 7, 6,
        1, 6, 11, 9, 11, 7,
    ],
    [
        0, 6, 12, 6, 9, 12, 9, 0, 12, 9, 7, 10, 10, 7, 2, 2, 7, 0, 0, 7, 6,
        9, 11, 7, 9, 6, 11,
    ],
    [
        0, 3, 9, 9, 3, 12, 3, 1, 12, 1, 9, 12, 1, 7, 0, 0, 6, 3, 3, 6, 2, 0,
        7, 6, 1, 3, 7,
    ],
    [
        0, 6, 12, 6, 9, 12, 9, 0, 12, 9, 6, 1, 1, 4, 0, 0, 4, 6, 1, 8, 4, 1,
        6, 8, 8, 6, 11,
    ],
    [
        1, 8, 10, 10, 8, 2, 2, 4, 1, 1, 4, 6, 2, 8, 4, 1, 6, 12, 6, 8, 12,
        8, 1, 12, 8, 6, 11,
    ],
    [
        2, 11, 4, 11, 3, 9, 3, 2, 4, 3, 4, 6, 3, 6, 12, 6, 9, 12, 9, 3, 12,
        6, 10, 9, 11, 9, 4,
    ],
    [
        0, 6, 12, 6, 8, 12, 8, 0, 12, 8, 6, 3, 3, 4, 0, 0, 4, 6, 3, 9, 4, 3,
        6, 9, 9, 6, 10,
    ],
    [
        0, 11, 12, 11, 4, 12, 4, 0, 12, 4, 11, 5, 5, 11, 1, 1, 7, 0, 0, 7,
        6, 1, 11, 7, 0, 6, 11,
    ],
    [
        2, 9, 12, 9, 6, 12, 6, 2, 12, 6, 9, 7, 7, 9, 3, 3, 5, 2, 2, 5, 4, 3,
        9, 5, 2, 4, 9,
    ],
    [
        1, 5, 12, 5, 8, 12, 8, 1, 12, 5, 6, 8, 6, 2, 8, 2, 1, 4, 1, 7, 4, 2,
        4, 8, 1, 8, 7,
    ],
    [
        0, 10, 12, 10, 4, 12, 4, 0, 12, 4, 10, 7, 7, 10, 3, 3, 5, 0, 0, 5,
        6, 3, 10, 5, 0, 6, 10,
    ],
    [
        0, 6, 8, 8, 5, 12, 5, 11, 12, 11, 8, 12, 11, 5, 2, 2, 5, 0, 0, 5, 6,
        8, 10, 5, 8, 6, 10,
    ],
    [
        0, 1, 8, 8, 1, 12, 1, 3, 12, 3, 8, 12, 3, 5, 0, 0, 6, 1, 1, 6, 2, 0,
        5, 6, 3, 1, 5,
    ],
    [
        1, 6, 9, 9, 6, 12, 6, 8, 12, 8, 9, 12, 8, 10, 3, 3, 6, 1, 3, 5, 6,
        3, 10, 5, 8, 6, 10,
    ],
    [
        0, 8, 7, 8, 3, 10, 3, 0, 10, 0, 7, 5, 0, 5, 10, 8, 10, 12, 10, 7,
        12, 7, 8, 12, 10, 11, 7,
    ],
    [
        0, 11, 9, 9, 11, 1, 1, 7, 0, 0, 7, 5, 1, 11, 7, 0, 5, 12, 5, 11, 12,
        11, 0, 12, 11, 5, 10,
    ],
    [
        2, 11, 7, 11, 3, 9, 3, 2, 9, 2, 7, 5, 2, 5, 9, 11, 9, 12, 9, 7, 12,
        7, 11, 12, 9, 8, 7,
    ],
    [
        1, 10, 7, 10, 2, 8, 2, 1, 7, 2, 7, 5, 2, 5, 12, 5, 8, 12, 8, 2, 12,
        5, 9, 8, 10, 8, 7,
    ],
    [
        1, 10, 4, 10, 11, 12, 11, 4, 12, 4, 10, 12, 11, 3, 9, 3, 1, 4, 3, 4,
        5, 3, 5, 9, 11, 9, 4,
    ],
    [
        0, 4, 3, 4, 5, 11, 5, 1, 0, 5, 0, 12, 0, 3, 12, 3, 5, 12, 5, 3, 2,
        5, 2, 11, 4, 11, 3,
    ],
    [
        0, 5, 8, 8, 5, 12, 5, 11, 12, 11, 8, 12, 11, 5, 2, 2, 4, 0, 0, 4, 5,
        2, 9, 4, 2, 5, 9,
    ],
    [
        1, 10, 7, 10, 11, 8, 11, 3, 12, 3, 1, 12, 1, 11, 12, 11, 1, 8, 1, 7,
        4, 1, 4, 8, 10, 8, 7,
    ],
    [
        0, 9, 7, 9, 10, 12, 10, 7, 12, 7, 9, 12, 10, 2, 7, 2, 0, 4, 0, 7, 4,
        2, 4, 8, 2, 8, 7,
    ],
    [
        0, 1, 12, 1, 4, 12, 4, 0, 12, 4, 10, 7, 7, 0, 3, 7, 1, 0, 7, 2, 1,
        7, 10, 2, 4, 1, 10,
    ],
];

/// Case 6.2: edge plus corner joined across the face
pub(crate) static TILING6_2: [[i8; 15]; 48] = [
    [0, 4, 1, 4, 7, 1, 7, 3, 1, 3, 2, 10, 3, 10, 1],
    [0, 2, 8, 8, 2, 7, 7, 2, 4, 4, 2, 9, 9, 2, 10],
    [1, 3, 10, 10, 3, 11, 11, 4, 7, 11, 3, 4, 4, 3, 8],
    [0, 9, 2, 9, 5, 2, 5, 4, 2, 4, 8, 2, 8, 11, 2],
    [0, 3, 4, 4, 3, 5, 5, 3, 1, 1, 11, 2, 1, 3, 11],
    [1, 3, 9, 9, 3, 4, 4, 3, 5, 5, 3, 10, 10, 3, 11],
    [1, 2, 9, 9, 2, 8, 8, 2, 7, 7, 2, 5, 5, 2, 10],
    [2, 3, 11, 11, 5, 7, 11, 3, 5, 5, 3, 9, 9, 3, 8],
    [0, 9, 7, 9, 5, 7, 0, 7, 1, 7, 11, 1, 11, 10, 1],
    [0, 3, 8, 8, 5, 7, 8, 3, 5, 5, 3, 10, 10, 3, 11],
    [1, 10, 3, 10, 6, 3, 6, 5, 3, 5, 9, 3, 9, 8, 3],
    [0, 8, 1, 8, 3, 1, 3, 2, 6, 3, 6, 1, 6, 5, 1],
    [0, 8, 2, 8, 11, 5, 11, 6, 5, 8, 5, 2, 5, 10, 2],
    [0, 4, 3, 4, 5, 3, 5, 10, 3, 10, 6, 3, 6, 7, 3],
    [1, 2, 5, 5, 2, 4, 4, 2, 8, 8, 2, 7, 7, 2, 6],
    [2, 6, 3, 6, 5, 3, 5, 9, 3, 9, 4, 3, 4, 7, 3],
    [0, 4, 1, 4, 7, 1, 7, 11, 1, 11, 6, 1, 6, 5, 1],
    [0, 9, 3, 9, 10, 3, 10, 6, 3, 6, 4, 3, 4, 8, 3],
    [2, 3, 10, 10, 3, 9, 9, 3, 4, 4, 3, 6, 6, 3, 11],
    [1, 10, 4, 10, 6, 4, 1, 4, 2, 4, 8, 2, 8, 11, 2],
    [0, 8, 1, 8, 11, 1, 11, 6, 1, 6, 4, 1, 4, 9, 1],
    [0, 9, 3, 9, 1, 3, 1, 2, 6, 1, 6, 3, 6, 7, 3],
    [0, 9, 2, 9, 10, 7, 10, 6, 7, 9, 7, 2, 7, 11, 2],
    [1, 3, 9, 9, 3, 8, 8, 6, 7, 8, 3, 6, 6, 3, 11],
    [1, 9, 3, 9, 8, 3, 8, 7, 6, 8, 6, 3, 6, 11, 3],
    [0, 2, 9, 9, 7, 10, 10, 7, 6, 9, 2, 7, 7, 2, 11],
    [0, 3, 9, 9, 3, 1, 1, 6, 2, 1, 3, 6, 6, 3, 7],
    [0, 1, 8, 8, 1, 11, 11, 1, 6, 6, 1, 4, 4, 1, 9],
    [1, 4, 10, 10, 4, 6, 1, 2, 4, 4, 2, 8, 8, 2, 11],
    [2, 10, 3, 10, 9, 3, 9, 4, 3, 4, 6, 3, 6, 11, 3],
    [0, 3, 9, 9, 3, 10, 10, 3, 6, 6, 3, 4, 4, 3, 8],
    [0, 1, 4, 4, 1, 7, 7, 1, 11, 11, 1, 6, 6, 1, 5],
    [2, 3, 6, 6, 3, 5, 5, 3, 9, 9, 3, 4, 4, 3, 7],
    [1, 5, 2, 5, 4, 2, 4, 8, 2, 8, 7, 2, 7, 6, 2],
    [0, 3, 4, 4, 3, 5, 5, 3, 10, 10, 3, 6, 6, 3, 7],
    [0, 2, 8, 8, 5, 11, 11, 5, 6, 8, 2, 5, 5, 2, 10],
    [0, 1, 8, 8, 1, 3, 3, 6, 2, 3, 1, 6, 6, 1, 5],
    [1, 3, 10, 10, 3, 6, 6, 3, 5, 5, 3, 9, 9, 3, 8],
    [0, 8, 3, 8, 7, 5, 8, 5, 3, 5, 10, 3, 10, 11, 3],
    [0, 7, 9, 9, 7, 5, 0, 1, 7, 7, 1, 11, 11, 1, 10],
    [2, 11, 3, 11, 7, 5, 11, 5, 3, 5, 9, 3, 9, 8, 3],
    [1, 9, 2, 9, 8, 2, 8, 7, 2, 7, 5, 2, 5, 10, 2],
    [1, 9, 3, 9, 4, 3, 4, 5, 3, 5, 10, 3, 10, 11, 3],
    [0, 4, 3, 4, 5, 3, 5, 1, 3, 1, 2, 11, 1, 11, 3],
    [0, 2, 9, 9, 2, 5, 5, 2, 4, 4, 2, 8, 8, 2, 11],
    [1, 10, 3, 10, 11, 3, 11, 7, 4, 11, 4, 3, 4, 8, 3],
    [0, 8, 2, 8, 7, 2, 7, 4, 2, 4, 9, 2, 9, 10, 2],
    [0, 1, 4, 4, 1, 7, 7, 1, 3, 3, 10, 2, 3, 1, 10],
];

/// Case 7.1: three diagonal corners, all separated
pub(crate) static TILING7_1: [[i8; 9]; 16] = [
    [0, 1, 9, 2, 3, 11, 4, 7, 8],
    [0, 8, 3, 1, 2, 10, 4, 9, 5],
    [0, 1, 9, 2, 3, 11, 5, 10, 6],
    [0, 1, 9, 4, 7, 8, 5, 10, 6],
    [2, 3, 11, 4, 7, 8, 5, 10, 6],
    [1, 10, 2, 4, 5, 9, 6, 7, 11],
    [0, 3, 8, 4, 5, 9, 6, 7, 11],
    [0, 3, 8, 1, 10, 2, 6, 7, 11],
    [0, 8, 3, 1, 2, 10, 6, 11, 7],
    [0, 8, 3, 4, 9, 5, 6, 11, 7],
    [1, 2, 10, 4, 9, 5, 6, 11, 7],
    [2, 11, 3, 4, 8, 7, 5, 6, 10],
    [0, 9, 1, 4, 8, 7, 5, 6, 10],
    [0, 9, 1, 2, 11, 3, 5, 6, 10],
    [0, 3, 8, 1, 10, 2, 4, 5, 9],
    [0, 9, 1, 2, 11, 3, 4, 8, 7],
];

/// Case 7.4.1: all three faces joined, empty interior
pub(crate) static TILING7_4_1: [[i8; 15]; 16] = [
    [0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2],
    [0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3],
    [0, 3, 9, 9, 3, 5, 5, 3, 6, 6, 3, 11, 1, 10, 2],
    [0, 1, 8, 8, 1, 7, 7, 1, 6, 6, 1, 10, 4, 5, 9],
    [2, 3, 10, 10, 3, 5, 5, 3, 4, 4, 3, 8, 6, 7, 11],
    [1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2, 5, 10, 6],
    [0, 3, 9, 9, 3, 5, 5, 3, 6, 6, 3, 11, 4, 7, 8],
    [0, 1, 8, 8, 1, 7, 7, 1, 6, 6, 1, 10, 2, 3, 11],
    [0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1, 2, 11, 3],
    [0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7],
    [1, 2, 9, 9, 2, 4, 4, 2, 7, 7, 2, 11, 5, 6, 10],
    [2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3, 6, 11, 7],
    [0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1, 4, 9, 5],
    [0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3, 1, 2, 10],
    [0, 1, 9, 2, 3, 10, 10, 3, 5, 5, 3, 4, 4, 3, 8],
    [0, 8, 3, 1, 2, 9, 9, 2, 4, 4, 2, 7, 7, 2, 11],
];

/// Case 7.4.2: all three faces joined, interior tunnel
pub(crate) static TILING7_4_2: [[i8; 27]; 16] = [
    [
        0, 1, 8, 8, 1, 3, 3, 7, 0, 0, 11, 1, 1, 11, 2, 0, 7, 11, 3, 1, 7, 7,
        1, 4, 4, 1, 9,
    ],
    [
        0, 9, 3, 9, 1, 3, 1, 0, 4, 0, 3, 10, 3, 2, 10, 0, 10, 4, 10, 5, 4,
        1, 4, 3, 4, 8, 3,
    ],
    [
        3, 11, 12, 11, 6, 12, 6, 5, 12, 5, 9, 12, 9, 0, 12, 0, 3, 12, 1, 10,
        12, 10, 2, 12, 2, 1, 12,
    ],
    [
        1, 10, 12, 10, 6, 12, 6, 7, 12, 7, 8, 12, 8, 0, 12, 0, 1, 12, 5, 9,
        12, 9, 4, 12, 4, 5, 12,
    ],
    [
        3, 8, 12, 8, 4, 12, 4, 5, 12, 5, 10, 12, 10, 2, 12, 2, 3, 12, 7, 11,
        12, 11, 6, 12, 6, 7, 12,
    ],
    [
        1, 9, 12, 9, 4, 12, 4, 7, 12, 7, 11, 12, 11, 2, 12, 2, 1, 12, 5, 10,
        12, 10, 6, 12, 6, 5, 12,
    ],
    [
        0, 7, 9, 9, 8, 5, 5, 8, 6, 6, 8, 11, 11, 4, 3, 3, 4, 0, 0, 4, 7, 11,
        8, 4, 9, 7, 8,
    ],
    [
        0, 11, 8, 8, 2, 7, 7, 3, 6, 6, 3, 10, 10, 0, 1, 10, 3, 0, 7, 2, 3,
        8, 11, 2, 0, 3, 11,
    ],
    [
        0, 8, 11, 8, 7, 2, 7, 6, 3, 6, 10, 3, 10, 1, 0, 10, 0, 3, 7, 3, 2,
        8, 2, 11, 0, 11, 3,
    ],
    [
        0, 9, 7, 9, 5, 8, 5, 6, 8, 6, 11, 8, 11, 3, 4, 3, 0, 4, 0, 7, 4, 11,
        4, 8, 9, 8, 7,
    ],
    [
        2, 11, 12, 11, 7, 12, 7, 4, 12, 4, 9, 12, 9, 1, 12, 1, 2, 12, 6, 10,
        12, 10, 5, 12, 5, 6, 12,
    ],
    [
        2, 10, 12, 10, 5, 12, 5, 4, 12, 4, 8, 12, 8, 3, 12, 3, 2, 12, 6, 11,
        12, 11, 7, 12, 7, 6, 12,
    ],
    [
        0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 10, 12, 10, 1, 12, 1, 0, 12, 4, 9,
        12, 9, 5, 12, 5, 4, 12,
    ],
    [
        0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 11, 12, 11, 3, 12, 3, 0, 12, 2, 10,
        12, 10, 1, 12, 1, 2, 12,
    ],
    [
        0, 3, 9, 9, 3, 1, 1, 4, 0, 0, 10, 3, 3, 10, 2, 0, 4, 10, 10, 4, 5,
        1, 3, 4, 4, 3, 8,
    ],
    [
        0, 8, 1, 8, 3, 1, 3, 0, 7, 0, 1, 11, 1, 2, 11, 0, 11, 7, 3, 7, 1, 7,
        4, 1, 4, 9, 1,
    ],
];

/// Case 8: full face
pub(crate) static TILING8: [[i8; 6]; 6] = [
    [8, 11, 9, 9, 11, 10],
    [1, 5, 3, 5, 7, 3],
    [0, 2, 4, 4, 2, 6],
    [0, 4, 2, 4, 6, 2],
    [1, 3, 5, 5, 3, 7],
    [8, 9, 11, 9, 10, 11],
];

/// Case 9: corner claw
pub(crate) static TILING9: [[i8; 12]; 8] = [
    [1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2],
    [2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3],
    [0, 3, 9, 9, 3, 5, 5, 3, 6, 6, 3, 11],
    [0, 1, 8, 8, 1, 7, 7, 1, 6, 6, 1, 10],
    [0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1],
    [0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3],
    [2, 3, 10, 10, 3, 5, 5, 3, 4, 4, 3, 8],
    [1, 2, 9, 9, 2, 4, 4, 2, 7, 7, 2, 11],
];

/// Case 10.1.1: both faces separated
pub(crate) static TILING10_1_1: [[i8; 12]; 6] = [
    [1, 3, 10, 10, 3, 11, 5, 7, 9, 9, 7, 8],
    [0, 4, 3, 4, 7, 3, 1, 2, 5, 5, 2, 6],
    [0, 8, 2, 8, 11, 2, 4, 9, 6, 9, 10, 6],
    [0, 2, 9, 9, 2, 10, 4, 6, 8, 8, 6, 11],
    [0, 1, 4, 4, 1, 5, 2, 3, 6, 6, 3, 7],
    [1, 9, 3, 9, 8, 3, 5, 10, 7, 10, 11, 7],
];

/// Case 10.1.1 mirrored: both faces joined
pub(crate) static TILING10_1_1_: [[i8; 12]; 6] = [
    [1, 3, 9, 9, 3, 8, 5, 7, 10, 10, 7, 11],
    [0, 4, 1, 4, 5, 1, 2, 6, 3, 6, 7, 3],
    [0, 9, 2, 9, 10, 2, 4, 8, 6, 8, 11, 6],
    [0, 2, 8, 8, 2, 11, 4, 6, 9, 9, 6, 10],
    [0, 3, 4, 4, 3, 7, 1, 5, 2, 5, 6, 2],
    [1, 10, 3, 10, 11, 3, 5, 9, 7, 9, 8, 7],
];

/// Case 10.1.2: interior tunnel
pub(crate) static TILING10_1_2: [[i8; 24]; 6] = [
    [
        1, 7, 10, 10, 7, 11, 11, 9, 3, 3, 7, 1, 3, 5, 7, 3, 9, 5, 11, 7, 9,
        9, 7, 8,
    ],
    [0, 4, 1, 4, 7, 1, 7, 3, 1, 3, 0, 5, 0, 1, 6, 1, 2, 6, 0, 6, 5, 3, 5, 1],
    [
        0, 8, 6, 8, 11, 9, 11, 2, 9, 2, 0, 4, 0, 6, 4, 2, 4, 9, 8, 9, 6, 9,
        10, 6,
    ],
    [
        0, 6, 9, 9, 8, 10, 10, 8, 2, 2, 4, 0, 0, 4, 6, 2, 8, 4, 9, 6, 8, 8,
        6, 11,
    ],
    [0, 3, 4, 4, 3, 5, 5, 3, 1, 1, 7, 0, 0, 6, 3, 3, 6, 2, 0, 7, 6, 1, 3, 7],
    [
        1, 9, 7, 9, 8, 7, 8, 3, 10, 3, 1, 7, 3, 7, 5, 3, 5, 10, 8, 10, 7,
        10, 11, 7,
    ],
];

/// Case 10.2: first face joined
pub(crate) static TILING10_2: [[i8; 24]; 6] = [
    [
        1, 12, 9, 9, 12, 8, 8, 12, 7, 7, 12, 5, 5, 12, 10, 10, 12, 11, 11,
        12, 3, 3, 12, 1,
    ],
    [
        0, 4, 12, 4, 7, 12, 7, 3, 12, 3, 2, 12, 2, 6, 12, 6, 5, 12, 5, 1,
        12, 1, 0, 12,
    ],
    [
        0, 9, 12, 9, 10, 12, 10, 6, 12, 6, 4, 12, 4, 8, 12, 8, 11, 12, 11,
        2, 12, 2, 0, 12,
    ],
    [
        0, 12, 8, 8, 12, 11, 11, 12, 6, 6, 12, 4, 4, 12, 9, 9, 12, 10, 10,
        12, 2, 2, 12, 0,
    ],
    [
        0, 12, 4, 4, 12, 5, 5, 12, 1, 1, 12, 2, 2, 12, 6, 6, 12, 7, 7, 12,
        3, 3, 12, 0,
    ],
    [
        1, 10, 12, 10, 11, 12, 11, 7, 12, 7, 5, 12, 5, 9, 12, 9, 8, 12, 8,
        3, 12, 3, 1, 12,
    ],
];

/// Case 10.2 mirrored: second face joined
pub(crate) static TILING10_2_: [[i8; 24]; 6] = [
    [
        1, 12, 10, 10, 12, 11, 11, 12, 7, 7, 12, 5, 5, 12, 9, 9, 12, 8, 8,
        12, 3, 3, 12, 1,
    ],
    [
        0, 4, 12, 4, 5, 12, 5, 1, 12, 1, 2, 12, 2, 6, 12, 6, 7, 12, 7, 3,
        12, 3, 0, 12,
    ],
    [
        0, 8, 12, 8, 11, 12, 11, 6, 12, 6, 4, 12, 4, 9, 12, 9, 10, 12, 10,
        2, 12, 2, 0, 12,
    ],
    [
        0, 12, 9, 9, 12, 10, 10, 12, 6, 6, 12, 4, 4, 12, 8, 8, 12, 11, 11,
        12, 2, 2, 12, 0,
    ],
    [
        0, 12, 4, 4, 12, 7, 7, 12, 3, 3, 12, 2, 2, 12, 6, 6, 12, 5, 5, 12,
        1, 1, 12, 0,
    ],
    [
        1, 9, 12, 9, 8, 12, 8, 7, 12, 7, 5, 12, 5, 10, 12, 10, 11, 12, 11,
        3, 12, 3, 1, 12,
    ],
];

/// Case 11: four-corner zig-zag
pub(crate) static TILING11: [[i8; 12]; 12] = [
    [0, 4, 1, 4, 7, 1, 7, 11, 1, 11, 10, 1],
    [1, 5, 2, 5, 4, 2, 4, 8, 2, 8, 11, 2],
    [0, 2, 8, 8, 2, 7, 7, 2, 5, 5, 2, 10],
    [2, 6, 3, 6, 5, 3, 5, 9, 3, 9, 8, 3],
    [1, 3, 9, 9, 3, 4, 4, 3, 6, 6, 3, 11],
    [0, 9, 3, 9, 10, 3, 10, 6, 3, 6, 7, 3],
    [0, 3, 9, 9, 3, 10, 10, 3, 6, 6, 3, 7],
    [1, 9, 3, 9, 4, 3, 4, 6, 3, 6, 11, 3],
    [2, 3, 6, 6, 3, 5, 5, 3, 9, 9, 3, 8],
    [0, 8, 2, 8, 7, 2, 7, 5, 2, 5, 10, 2],
    [1, 2, 5, 5, 2, 4, 4, 2, 8, 8, 2, 11],
    [0, 1, 4, 4, 1, 7, 7, 1, 11, 11, 1, 10],
];

/// Case 12.1.1: both faces separated
pub(crate) static TILING12_1_1: [[i8; 12]; 24] = [
    [0, 3, 9, 9, 3, 10, 10, 3, 11, 4, 7, 8],
    [0, 8, 1, 8, 11, 1, 11, 10, 1, 4, 9, 5],
    [0, 9, 3, 9, 5, 3, 5, 7, 3, 1, 2, 10],
    [0, 1, 8, 8, 1, 7, 7, 1, 5, 2, 3, 11],
    [1, 9, 2, 9, 8, 2, 8, 11, 2, 5, 10, 6],
    [1, 9, 3, 9, 4, 3, 4, 7, 3, 5, 10, 6],
    [0, 2, 9, 9, 2, 5, 5, 2, 6, 4, 7, 8],
    [0, 4, 2, 4, 7, 2, 7, 11, 2, 5, 10, 6],
    [1, 3, 5, 5, 3, 6, 6, 3, 11, 4, 7, 8],
    [0, 8, 3, 1, 2, 9, 9, 2, 4, 4, 2, 6],
    [0, 1, 4, 4, 1, 6, 6, 1, 10, 2, 3, 11],
    [2, 3, 11, 6, 7, 10, 10, 7, 9, 9, 7, 8],
    [2, 10, 3, 10, 9, 3, 9, 8, 3, 6, 11, 7],
    [0, 4, 3, 4, 6, 3, 6, 11, 3, 1, 2, 10],
    [0, 1, 9, 2, 3, 6, 6, 3, 4, 4, 3, 8],
    [1, 5, 3, 5, 4, 3, 4, 8, 3, 6, 11, 7],
    [0, 2, 4, 4, 2, 5, 5, 2, 10, 6, 11, 7],
    [0, 8, 2, 8, 7, 2, 7, 6, 2, 4, 9, 5],
    [1, 3, 10, 10, 3, 6, 6, 3, 7, 4, 9, 5],
    [1, 2, 10, 5, 6, 9, 9, 6, 8, 8, 6, 11],
    [0, 8, 3, 1, 2, 5, 5, 2, 7, 7, 2, 11],
    [0, 1, 9, 2, 3, 10, 10, 3, 5, 5, 3, 7],
    [0, 1, 9, 4, 5, 8, 8, 5, 11, 11, 5, 10],
    [0, 8, 3, 4, 9, 7, 9, 10, 7, 10, 11, 7],
];

/// Case 12.1.1 mirrored: both faces joined
pub(crate) static TILING12_1_1_: [[i8; 12]; 24] = [
    [0, 3, 8, 4, 7, 9, 9, 7, 10, 10, 7, 11],
    [0, 9, 1, 4, 8, 5, 8, 11, 5, 11, 10, 5],
    [0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 7, 3],
    [0, 3, 8, 1, 5, 2, 5, 7, 2, 7, 11, 2],
    [1, 10, 2, 5, 9, 6, 9, 8, 6, 8, 11, 6],
    [1, 10, 3, 10, 6, 3, 6, 7, 3, 4, 5, 9],
    [0, 2, 8, 8, 2, 7, 7, 2, 6, 4, 5, 9],
    [0, 4, 2, 4, 5, 2, 5, 10, 2, 6, 7, 11],
    [1, 3, 5, 5, 3, 4, 4, 3, 8, 6, 7, 11],
    [0, 9, 1, 2, 6, 3, 6, 4, 3, 4, 8, 3],
    [0, 3, 4, 4, 3, 6, 6, 3, 11, 1, 10, 2],
    [2, 3, 10, 10, 3, 9, 9, 3, 8, 6, 7, 11],
    [2, 11, 3, 6, 10, 7, 10, 9, 7, 9, 8, 7],
    [0, 4, 1, 4, 6, 1, 6, 10, 1, 2, 11, 3],
    [0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 6, 2],
    [1, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7],
    [0, 2, 4, 4, 2, 7, 7, 2, 11, 5, 6, 10],
    [0, 9, 2, 9, 5, 2, 5, 6, 2, 4, 8, 7],
    [1, 3, 9, 9, 3, 4, 4, 3, 7, 5, 6, 10],
    [1, 2, 9, 9, 2, 8, 8, 2, 11, 5, 6, 10],
    [0, 8, 1, 8, 7, 1, 7, 5, 1, 2, 11, 3],
    [0, 3, 9, 9, 3, 5, 5, 3, 7, 1, 10, 2],
    [0, 1, 8, 8, 1, 11, 11, 1, 10, 4, 5, 9],
    [0, 9, 3, 9, 10, 3, 10, 11, 3, 4, 8, 7],
];

/// Case 12.1.2: interior tunnel
pub(crate) static TILING12_1_2: [[i8; 24]; 24] = [
    [
        0, 7, 9, 9, 7, 10, 10, 8, 11, 11, 4, 3, 3, 4, 0, 0, 4, 7, 11, 8, 4,
        10, 7, 8,
    ],
    [
        0, 8, 5, 8, 11, 5, 11, 10, 4, 10, 1, 4, 1, 0, 4, 0, 5, 4, 11, 4, 9,
        11, 9, 5,
    ],
    [
        0, 9, 2, 9, 5, 2, 5, 7, 2, 7, 3, 0, 7, 0, 1, 7, 1, 2, 0, 2, 10, 0,
        10, 1,
    ],
    [
        0, 11, 8, 8, 5, 7, 8, 11, 5, 5, 0, 1, 5, 3, 0, 5, 2, 3, 5, 11, 2, 0,
        3, 11,
    ],
    [
        1, 9, 12, 9, 8, 12, 8, 11, 12, 11, 2, 12, 2, 1, 12, 5, 10, 12, 10,
        6, 12, 6, 5, 12,
    ],
    [
        1, 9, 12, 9, 4, 12, 4, 7, 12, 7, 3, 12, 3, 1, 12, 5, 10, 12, 10, 6,
        12, 6, 5, 12,
    ],
    [0, 7, 9, 9, 2, 5, 5, 2, 6, 9, 7, 2, 2, 4, 0, 0, 4, 7, 2, 8, 4, 2, 7, 8],
    [
        0, 4, 12, 4, 7, 12, 7, 11, 12, 11, 2, 12, 2, 0, 12, 5, 10, 12, 10,
        6, 12, 6, 5, 12,
    ],
    [
        1, 8, 5, 5, 8, 6, 6, 8, 11, 11, 4, 3, 3, 4, 1, 1, 4, 7, 11, 8, 4, 1,
        7, 8,
    ],
    [0, 8, 1, 8, 3, 1, 3, 0, 4, 0, 1, 6, 1, 2, 6, 0, 6, 4, 3, 4, 1, 4, 9, 1],
    [
        0, 11, 4, 4, 3, 6, 6, 3, 10, 10, 0, 1, 10, 3, 0, 4, 2, 3, 4, 11, 2,
        0, 3, 11,
    ],
    [
        2, 7, 11, 11, 9, 3, 3, 7, 2, 3, 6, 7, 3, 9, 6, 6, 9, 10, 11, 7, 9,
        9, 7, 8,
    ],
    [
        2, 10, 7, 10, 9, 7, 9, 8, 11, 8, 3, 6, 3, 2, 7, 3, 7, 6, 8, 6, 11,
        9, 11, 7,
    ],
    [
        0, 4, 10, 4, 6, 1, 6, 11, 1, 11, 3, 0, 11, 0, 1, 4, 1, 2, 4, 2, 10,
        0, 10, 1,
    ],
    [0, 3, 9, 9, 3, 1, 1, 4, 0, 0, 6, 3, 3, 6, 2, 0, 4, 6, 1, 3, 4, 4, 3, 8],
    [
        1, 5, 11, 5, 4, 11, 4, 8, 11, 8, 3, 6, 3, 1, 6, 1, 7, 6, 8, 6, 11,
        1, 11, 7,
    ],
    [
        2, 10, 12, 10, 5, 12, 5, 4, 12, 4, 0, 12, 0, 2, 12, 6, 11, 12, 11,
        7, 12, 7, 6, 12,
    ],
    [0, 8, 5, 8, 7, 2, 7, 6, 2, 8, 2, 5, 2, 0, 4, 0, 5, 4, 2, 4, 9, 2, 9, 5],
    [
        3, 7, 12, 7, 6, 12, 6, 10, 12, 10, 1, 12, 1, 3, 12, 4, 9, 12, 9, 5,
        12, 5, 4, 12,
    ],
    [
        2, 10, 12, 10, 1, 12, 1, 2, 12, 6, 11, 12, 11, 8, 12, 8, 9, 12, 9,
        5, 12, 5, 6, 12,
    ],
    [
        0, 8, 1, 8, 3, 1, 3, 0, 7, 0, 1, 11, 1, 2, 11, 0, 11, 7, 3, 7, 1, 7,
        5, 1,
    ],
    [
        0, 3, 9, 9, 3, 1, 1, 7, 0, 0, 10, 3, 3, 10, 2, 0, 7, 10, 10, 7, 5,
        1, 3, 7,
    ],
    [
        0, 11, 9, 9, 11, 1, 1, 4, 0, 0, 4, 5, 1, 11, 4, 4, 11, 8, 0, 5, 11,
        11, 5, 10,
    ],
    [
        0, 8, 7, 8, 3, 9, 3, 0, 4, 0, 7, 4, 3, 4, 9, 8, 9, 7, 9, 10, 7, 10,
        11, 7,
    ],
];

/// Case 12.2: first face joined
pub(crate) static TILING12_2: [[i8; 24]; 24] = [
    [
        0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 10, 10, 12, 11, 11,
        12, 3, 3, 12, 0,
    ],
    [
        0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 11, 12, 11, 10, 12, 10,
        1, 12, 1, 0, 12,
    ],
    [
        0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 10, 12, 10, 5, 12, 5, 7, 12, 7, 3,
        12, 3, 0, 12,
    ],
    [
        0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 5, 5, 12,
        1, 1, 12, 0,
    ],
    [
        1, 10, 12, 10, 6, 12, 6, 5, 12, 5, 9, 12, 9, 8, 12, 8, 11, 12, 11,
        2, 12, 2, 1, 12,
    ],
    [
        1, 10, 12, 10, 6, 12, 6, 5, 12, 5, 9, 12, 9, 4, 12, 4, 7, 12, 7, 3,
        12, 3, 1, 12,
    ],
    [
        0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12,
        2, 2, 12, 0,
    ],
    [
        0, 4, 12, 4, 7, 12, 7, 11, 12, 11, 6, 12, 6, 5, 12, 5, 10, 12, 10,
        2, 12, 2, 0, 12,
    ],
    [
        1, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 7, 7, 12, 4, 4, 12, 8, 8, 12,
        3, 3, 12, 1,
    ],
    [
        0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 6, 12, 6, 4, 12, 4, 8, 12, 8, 3,
        12, 3, 0, 12,
    ],
    [
        0, 12, 4, 4, 12, 6, 6, 12, 11, 11, 12, 3, 3, 12, 2, 2, 12, 10, 10,
        12, 1, 1, 12, 0,
    ],
    [
        2, 12, 10, 10, 12, 9, 9, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 11, 11,
        12, 3, 3, 12, 2,
    ],
    [
        2, 11, 12, 11, 7, 12, 7, 6, 12, 6, 10, 12, 10, 9, 12, 9, 8, 12, 8,
        3, 12, 3, 2, 12,
    ],
    [
        0, 4, 12, 4, 6, 12, 6, 10, 12, 10, 1, 12, 1, 2, 12, 2, 11, 12, 11,
        3, 12, 3, 0, 12,
    ],
    [
        0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 6, 6, 12, 4, 4, 12, 9, 9, 12,
        1, 1, 12, 0,
    ],
    [
        1, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6, 11, 12, 11, 3,
        12, 3, 1, 12,
    ],
    [
        0, 12, 4, 4, 12, 5, 5, 12, 10, 10, 12, 6, 6, 12, 7, 7, 12, 11, 11,
        12, 2, 2, 12, 0,
    ],
    [
        0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6, 2,
        12, 2, 0, 12,
    ],
    [
        1, 12, 9, 9, 12, 4, 4, 12, 5, 5, 12, 10, 10, 12, 6, 6, 12, 7, 7, 12,
        3, 3, 12, 1,
    ],
    [
        1, 12, 9, 9, 12, 8, 8, 12, 11, 11, 12, 6, 6, 12, 5, 5, 12, 10, 10,
        12, 2, 2, 12, 1,
    ],
    [
        0, 8, 12, 8, 7, 12, 7, 5, 12, 5, 1, 12, 1, 2, 12, 2, 11, 12, 11, 3,
        12, 3, 0, 12,
    ],
    [
        0, 12, 9, 9, 12, 5, 5, 12, 7, 7, 12, 3, 3, 12, 2, 2, 12, 10, 10, 12,
        1, 1, 12, 0,
    ],
    [
        0, 12, 8, 8, 12, 11, 11, 12, 10, 10, 12, 5, 5, 12, 4, 4, 12, 9, 9,
        12, 1, 1, 12, 0,
    ],
    [
        0, 9, 12, 9, 10, 12, 10, 11, 12, 11, 7, 12, 7, 4, 12, 4, 8, 12, 8,
        3, 12, 3, 0, 12,
    ],
];

/// Case 12.2 mirrored: second face joined
pub(crate) static TILING12_2_: [[i8; 24]; 24] = [
    [
        0, 12, 9, 9, 12, 10, 10, 12, 11, 11, 12, 7, 7, 12, 4, 4, 12, 8, 8,
        12, 3, 3, 12, 0,
    ],
    [
        0, 8, 12, 8, 11, 12, 11, 10, 12, 10, 5, 12, 5, 4, 12, 4, 9, 12, 9,
        1, 12, 1, 0, 12,
    ],
    [
        0, 9, 12, 9, 5, 12, 5, 7, 12, 7, 3, 12, 3, 2, 12, 2, 10, 12, 10, 1,
        12, 1, 0, 12,
    ],
    [
        0, 12, 8, 8, 12, 7, 7, 12, 5, 5, 12, 1, 1, 12, 2, 2, 12, 11, 11, 12,
        3, 3, 12, 0,
    ],
    [
        1, 9, 12, 9, 8, 12, 8, 11, 12, 11, 6, 12, 6, 5, 12, 5, 10, 12, 10,
        2, 12, 2, 1, 12,
    ],
    [
        1, 9, 12, 9, 4, 12, 4, 5, 12, 5, 10, 12, 10, 6, 12, 6, 7, 12, 7, 3,
        12, 3, 1, 12,
    ],
    [
        0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12,
        2, 2, 12, 0,
    ],
    [
        0, 4, 12, 4, 5, 12, 5, 10, 12, 10, 6, 12, 6, 7, 12, 7, 11, 12, 11,
        2, 12, 2, 0, 12,
    ],
    [
        1, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 11, 11, 12,
        3, 3, 12, 1,
    ],
    [
        0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 6, 12, 6, 4, 12, 4, 9, 12, 9, 1,
        12, 1, 0, 12,
    ],
    [
        0, 12, 4, 4, 12, 6, 6, 12, 10, 10, 12, 1, 1, 12, 2, 2, 12, 11, 11,
        12, 3, 3, 12, 0,
    ],
    [
        2, 12, 11, 11, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 9, 9, 12, 8, 8,
        12, 3, 3, 12, 2,
    ],
    [
        2, 10, 12, 10, 9, 12, 9, 8, 12, 8, 7, 12, 7, 6, 12, 6, 11, 12, 11,
        3, 12, 3, 2, 12,
    ],
    [
        0, 4, 12, 4, 6, 12, 6, 11, 12, 11, 3, 12, 3, 2, 12, 2, 10, 12, 10,
        1, 12, 1, 0, 12,
    ],
    [
        0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 6, 6, 12, 4, 4, 12, 8, 8, 12,
        3, 3, 12, 0,
    ],
    [
        1, 5, 12, 5, 6, 12, 6, 11, 12, 11, 7, 12, 7, 4, 12, 4, 8, 12, 8, 3,
        12, 3, 1, 12,
    ],
    [
        0, 12, 4, 4, 12, 7, 7, 12, 11, 11, 12, 6, 6, 12, 5, 5, 12, 10, 10,
        12, 2, 2, 12, 0,
    ],
    [
        0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 5, 12, 5, 6, 12, 6, 2,
        12, 2, 0, 12,
    ],
    [
        1, 12, 10, 10, 12, 6, 6, 12, 5, 5, 12, 9, 9, 12, 4, 4, 12, 7, 7, 12,
        3, 3, 12, 1,
    ],
    [
        1, 12, 10, 10, 12, 6, 6, 12, 5, 5, 12, 9, 9, 12, 8, 8, 12, 11, 11,
        12, 2, 2, 12, 1,
    ],
    [
        0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 11, 12, 11, 7, 12, 7, 5, 12, 5, 1,
        12, 1, 0, 12,
    ],
    [
        0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 7, 7, 12,
        3, 3, 12, 0,
    ],
    [
        0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 11, 11, 12, 10, 10,
        12, 1, 1, 12, 0,
    ],
    [
        0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 10, 12, 10, 11, 12, 11,
        3, 12, 3, 0, 12,
    ],
];

/// Case 13.1: all four corners separated
pub(crate) static TILING13_1: [[i8; 12]; 2] = [
    [0, 1, 9, 2, 3, 11, 4, 7, 8, 5, 10, 6],
    [0, 8, 3, 1, 2, 10, 4, 9, 5, 6, 11, 7],
];

/// Case 13.1 inverted: all six faces joined
pub(crate) static TILING13_1_: [[i8; 12]; 2] = [
    [0, 3, 8, 1, 10, 2, 4, 5, 9, 6, 7, 11],
    [0, 9, 1, 2, 11, 3, 4, 8, 7, 5, 6, 10],
];

/// Case 14: mirrored zig-zag
pub(crate) static TILING14: [[i8; 12]; 12] = [
    [2, 10, 3, 10, 9, 3, 9, 4, 3, 4, 7, 3],
    [0, 3, 4, 4, 3, 5, 5, 3, 10, 10, 3, 11],
    [0, 9, 2, 9, 5, 2, 5, 7, 2, 7, 11, 2],
    [0, 8, 1, 8, 11, 1, 11, 6, 1, 6, 5, 1],
    [1, 10, 3, 10, 6, 3, 6, 4, 3, 4, 8, 3],
    [1, 2, 9, 9, 2, 8, 8, 2, 7, 7, 2, 6],
    [1, 9, 2, 9, 8, 2, 8, 7, 2, 7, 6, 2],
    [1, 3, 10, 10, 3, 6, 6, 3, 4, 4, 3, 8],
    [0, 1, 8, 8, 1, 11, 11, 1, 6, 6, 1, 5],
    [0, 2, 9, 9, 2, 5, 5, 2, 7, 7, 2, 11],
    [0, 4, 3, 4, 5, 3, 5, 10, 3, 10, 11, 3],
    [2, 3, 10, 10, 3, 9, 9, 3, 4, 4, 3, 7],
];

/// Case 7.2: one of the three faces joined
pub(crate) static TILING7_2: [[[i8; 15]; 3]; 16] = [
    [
        [0, 1, 8, 8, 1, 7, 7, 1, 4, 4, 1, 9, 2, 3, 11],
        [0, 1, 9, 2, 3, 11, 11, 4, 7, 11, 3, 4, 4, 3, 8],
        [0, 3, 9, 9, 3, 1, 1, 11, 2, 1, 3, 11, 4, 7, 8],
    ],
    [
        [0, 9, 3, 9, 5, 3, 5, 4, 3, 4, 8, 3, 1, 2, 10],
        [0, 8, 3, 1, 2, 9, 9, 2, 4, 4, 2, 5, 5, 2, 10],
        [0, 8, 1, 8, 3, 1, 3, 2, 10, 3, 10, 1, 4, 9, 5],
    ],
    [
        [0, 6, 9, 9, 6, 5, 0, 1, 6, 6, 1, 10, 2, 3, 11],
        [0, 1, 9, 2, 3, 10, 10, 3, 5, 5, 3, 6, 6, 3, 11],
        [0, 3, 9, 9, 3, 1, 1, 11, 2, 1, 3, 11, 5, 10, 6],
    ],
    [
        [0, 1, 8, 8, 1, 7, 7, 1, 4, 4, 1, 9, 5, 10, 6],
        [0, 6, 9, 9, 6, 5, 0, 1, 6, 6, 1, 10, 4, 7, 8],
        [0, 1, 9, 4, 5, 8, 8, 10, 7, 7, 10, 6, 8, 5, 10],
    ],
    [
        [2, 3, 10, 10, 3, 5, 5, 3, 6, 6, 3, 11, 4, 7, 8],
        [2, 3, 11, 11, 4, 7, 11, 3, 4, 4, 3, 8, 5, 10, 6],
        [2, 3, 11, 4, 5, 8, 8, 10, 7, 7, 10, 6, 8, 5, 10],
    ],
    [
        [1, 9, 2, 9, 4, 2, 4, 5, 2, 5, 10, 2, 6, 7, 11],
        [1, 10, 7, 10, 6, 7, 1, 7, 2, 7, 11, 2, 4, 5, 9],
        [1, 10, 2, 4, 7, 9, 9, 11, 5, 5, 11, 6, 9, 7, 11],
    ],
    [
        [0, 3, 9, 9, 3, 5, 5, 3, 4, 4, 3, 8, 6, 7, 11],
        [0, 3, 8, 8, 6, 7, 8, 3, 6, 6, 3, 11, 4, 5, 9],
        [0, 3, 8, 4, 7, 9, 9, 11, 5, 5, 11, 6, 9, 7, 11],
    ],
    [
        [0, 3, 8, 1, 10, 7, 10, 6, 7, 1, 7, 2, 7, 11, 2],
        [0, 3, 8, 8, 6, 7, 8, 3, 6, 6, 3, 11, 1, 10, 2],
        [0, 1, 8, 8, 1, 3, 3, 10, 2, 3, 1, 10, 6, 7, 11],
    ],
    [
        [0, 8, 3, 1, 7, 10, 10, 7, 6, 1, 2, 7, 7, 2, 11],
        [0, 8, 3, 8, 7, 6, 8, 6, 3, 6, 11, 3, 1, 2, 10],
        [0, 8, 1, 8, 3, 1, 3, 2, 10, 3, 10, 1, 6, 11, 7],
    ],
    [
        [0, 9, 3, 9, 5, 3, 5, 4, 3, 4, 8, 3, 6, 11, 7],
        [0, 8, 3, 8, 7, 6, 8, 6, 3, 6, 11, 3, 4, 9, 5],
        [0, 8, 3, 4, 9, 7, 9, 5, 11, 5, 6, 11, 9, 11, 7],
    ],
    [
        [1, 2, 9, 9, 2, 4, 4, 2, 5, 5, 2, 10, 6, 11, 7],
        [1, 7, 10, 10, 7, 6, 1, 2, 7, 7, 2, 11, 4, 9, 5],
        [1, 2, 10, 4, 9, 7, 9, 5, 11, 5, 6, 11, 9, 11, 7],
    ],
    [
        [2, 10, 3, 10, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7],
        [2, 11, 3, 11, 7, 4, 11, 4, 3, 4, 8, 3, 5, 6, 10],
        [2, 11, 3, 4, 8, 5, 8, 7, 10, 7, 6, 10, 8, 10, 5],
    ],
    [
        [0, 8, 1, 8, 7, 1, 7, 4, 1, 4, 9, 1, 5, 6, 10],
        [0, 9, 6, 9, 5, 6, 0, 6, 1, 6, 10, 1, 4, 8, 7],
        [0, 9, 1, 4, 8, 5, 8, 7, 10, 7, 6, 10, 8, 10, 5],
    ],
    [
        [0, 9, 6, 9, 5, 6, 0, 6, 1, 6, 10, 1, 2, 11, 3],
        [0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 6, 3, 6, 11, 3],
        [0, 9, 3, 9, 1, 3, 1, 2, 11, 1, 11, 3, 5, 6, 10],
    ],
    [
        [0, 3, 9, 9, 3, 5, 5, 3, 4, 4, 3, 8, 1, 10, 2],
        [0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 5, 2, 5, 10, 2],
        [0, 1, 8, 8, 1, 3, 3, 10, 2, 3, 1, 10, 4, 5, 9],
    ],
    [
        [0, 8, 1, 8, 7, 1, 7, 4, 1, 4, 9, 1, 2, 11, 3],
        [0, 9, 1, 2, 11, 3, 11, 7, 4, 11, 4, 3, 4, 8, 3],
        [0, 9, 3, 9, 1, 3, 1, 2, 11, 1, 11, 3, 4, 8, 7],
    ],
];

/// Case 7.3: two of the three faces joined
pub(crate) static TILING7_3: [[[i8; 27]; 3]; 16] = [
    [
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 4, 4,
            12, 9, 9, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 1, 1, 12, 2, 2,
            12, 11, 11, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 4, 4,
            12, 8, 8, 12, 3, 3, 12, 0,
        ],
    ],
    [
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 10, 12, 10, 5, 12, 5, 4, 12, 4,
            8, 12, 8, 3, 12, 3, 0, 12,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 3, 12, 3, 2, 12, 2,
            10, 12, 10, 1, 12, 1, 0, 12,
        ],
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 10, 12, 10, 5, 12, 5, 4, 12, 4,
            9, 12, 9, 1, 12, 1, 0, 12,
        ],
    ],
    [
        [
            0, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 3, 3, 12, 2, 2,
            12, 10, 10, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12, 10, 10, 12, 1, 1, 12, 2, 2,
            12, 11, 11, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 0,
        ],
    ],
    [
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 5, 5, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 5, 5, 12, 4, 4,
            12, 9, 9, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 0,
        ],
    ],
    [
        [
            2, 12, 10, 10, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 7, 7, 12, 4,
            4, 12, 8, 8, 12, 3, 3, 12, 2,
        ],
        [
            2, 12, 10, 10, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 2,
        ],
        [
            2, 12, 11, 11, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 5, 5, 12, 4,
            4, 12, 8, 8, 12, 3, 3, 12, 2,
        ],
    ],
    [
        [
            1, 9, 12, 9, 4, 12, 4, 5, 12, 5, 10, 12, 10, 6, 12, 6, 7, 12, 7,
            11, 12, 11, 2, 12, 2, 1, 12,
        ],
        [
            1, 9, 12, 9, 4, 12, 4, 7, 12, 7, 11, 12, 11, 6, 12, 6, 5, 12, 5,
            10, 12, 10, 2, 12, 2, 1, 12,
        ],
        [
            1, 10, 12, 10, 6, 12, 6, 5, 12, 5, 9, 12, 9, 4, 12, 4, 7, 12, 7,
            11, 12, 11, 2, 12, 2, 1, 12,
        ],
    ],
    [
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 7, 7, 12, 4, 4,
            12, 8, 8, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 5, 5, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 0,
        ],
    ],
    [
        [
            0, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 1, 1, 12, 2, 2,
            12, 11, 11, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 11, 11, 12, 3, 3, 12, 2, 2,
            12, 10, 10, 12, 1, 1, 12, 0,
        ],
    ],
    [
        [
            0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 10, 12, 10, 1, 12, 1, 2, 12, 2,
            11, 12, 11, 3, 12, 3, 0, 12,
        ],
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 11, 12, 11, 7, 12, 7, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 0, 12,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 11, 12, 11, 3, 12, 3, 2, 12, 2,
            10, 12, 10, 1, 12, 1, 0, 12,
        ],
    ],
    [
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 0, 12,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 11, 12, 11, 7, 12, 7, 4, 12, 4,
            8, 12, 8, 3, 12, 3, 0, 12,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 5, 12, 5, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 0, 12,
        ],
    ],
    [
        [
            1, 12, 9, 9, 12, 4, 4, 12, 5, 5, 12, 10, 10, 12, 6, 6, 12, 7, 7,
            12, 11, 11, 12, 2, 2, 12, 1,
        ],
        [
            1, 12, 9, 9, 12, 4, 4, 12, 7, 7, 12, 11, 11, 12, 6, 6, 12, 5, 5,
            12, 10, 10, 12, 2, 2, 12, 1,
        ],
        [
            1, 12, 10, 10, 12, 6, 6, 12, 5, 5, 12, 9, 9, 12, 4, 4, 12, 7, 7,
            12, 11, 11, 12, 2, 2, 12, 1,
        ],
    ],
    [
        [
            2, 10, 12, 10, 5, 12, 5, 6, 12, 6, 11, 12, 11, 7, 12, 7, 4, 12,
            4, 8, 12, 8, 3, 12, 3, 2, 12,
        ],
        [
            2, 10, 12, 10, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 2, 12,
        ],
        [
            2, 11, 12, 11, 7, 12, 7, 6, 12, 6, 10, 12, 10, 5, 12, 5, 4, 12,
            4, 8, 12, 8, 3, 12, 3, 2, 12,
        ],
    ],
    [
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 5, 12, 5, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 0, 12,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 10, 12, 10, 5, 12, 5, 4, 12, 4,
            9, 12, 9, 1, 12, 1, 0, 12,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 0, 12,
        ],
    ],
    [
        [
            0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 11, 12, 11, 3, 12, 3, 2, 12, 2,
            10, 12, 10, 1, 12, 1, 0, 12,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 10, 12, 10, 1, 12, 1, 2, 12, 2,
            11, 12, 11, 3, 12, 3, 0, 12,
        ],
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 10, 12, 10, 5, 12, 5, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 0, 12,
        ],
    ],
    [
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 4, 4,
            12, 8, 8, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 3, 3, 12, 2, 2,
            12, 10, 10, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 4, 4,
            12, 9, 9, 12, 1, 1, 12, 0,
        ],
    ],
    [
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 11, 12, 11, 7, 12, 7, 4, 12, 4,
            9, 12, 9, 1, 12, 1, 0, 12,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 1, 12, 1, 2, 12, 2,
            11, 12, 11, 3, 12, 3, 0, 12,
        ],
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 11, 12, 11, 7, 12, 7, 4, 12, 4,
            8, 12, 8, 3, 12, 3, 0, 12,
        ],
    ],
];

/// Case 13.2: one face joined
pub(crate) static TILING13_2: [[[i8; 18]; 6]; 2] = [
    [
        [0, 1, 8, 8, 1, 7, 7, 1, 4, 4, 1, 9, 2, 3, 11, 5, 10, 6],
        [0, 6, 9, 9, 6, 5, 0, 1, 6, 6, 1, 10, 2, 3, 11, 4, 7, 8],
        [0, 1, 9, 2, 3, 10, 10, 3, 5, 5, 3, 6, 6, 3, 11, 4, 7, 8],
        [0, 1, 9, 2, 3, 11, 11, 4, 7, 11, 3, 4, 4, 3, 8, 5, 10, 6],
        [0, 3, 9, 9, 3, 1, 1, 11, 2, 1, 3, 11, 4, 7, 8, 5, 10, 6],
        [0, 1, 9, 2, 3, 11, 4, 5, 8, 8, 10, 7, 7, 10, 6, 8, 5, 10],
    ],
    [
        [0, 8, 3, 1, 2, 10, 4, 9, 7, 9, 5, 11, 5, 6, 11, 9, 11, 7],
        [0, 8, 3, 1, 2, 9, 9, 2, 4, 4, 2, 5, 5, 2, 10, 6, 11, 7],
        [0, 8, 1, 8, 3, 1, 3, 2, 10, 3, 10, 1, 4, 9, 5, 6, 11, 7],
        [0, 8, 3, 8, 7, 6, 8, 6, 3, 6, 11, 3, 1, 2, 10, 4, 9, 5],
        [0, 9, 3, 9, 5, 3, 5, 4, 3, 4, 8, 3, 1, 2, 10, 6, 11, 7],
        [0, 8, 3, 1, 7, 10, 10, 7, 6, 1, 2, 7, 7, 2, 11, 4, 9, 5],
    ],
];

/// Case 13.2 inverted: five faces joined
pub(crate) static TILING13_2_: [[[i8; 18]; 6]; 2] = [
    [
        [0, 3, 9, 9, 3, 5, 5, 3, 4, 4, 3, 8, 1, 10, 2, 6, 7, 11],
        [0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 5, 2, 5, 10, 2, 6, 7, 11],
        [0, 3, 8, 1, 10, 7, 10, 6, 7, 1, 7, 2, 7, 11, 2, 4, 5, 9],
        [0, 3, 8, 8, 6, 7, 8, 3, 6, 6, 3, 11, 1, 10, 2, 4, 5, 9],
        [0, 1, 8, 8, 1, 3, 3, 10, 2, 3, 1, 10, 4, 5, 9, 6, 7, 11],
        [0, 3, 8, 1, 10, 2, 4, 7, 9, 9, 11, 5, 5, 11, 6, 9, 7, 11],
    ],
    [
        [0, 9, 1, 2, 11, 3, 4, 8, 5, 8, 7, 10, 7, 6, 10, 8, 10, 5],
        [0, 9, 6, 9, 5, 6, 0, 6, 1, 6, 10, 1, 2, 11, 3, 4, 8, 7],
        [0, 9, 3, 9, 1, 3, 1, 2, 11, 1, 11, 3, 4, 8, 7, 5, 6, 10],
        [0, 9, 1, 2, 11, 3, 11, 7, 4, 11, 4, 3, 4, 8, 3, 5, 6, 10],
        [0, 8, 1, 8, 7, 1, 7, 4, 1, 4, 9, 1, 2, 11, 3, 5, 6, 10],
        [0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7],
    ],
];

/// Case 13.3: two adjacent faces joined
pub(crate) static TILING13_3: [[[i8; 30]; 12]; 2] = [
    [
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 5, 5, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 0, 2, 3, 11,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 3, 3, 12, 2, 2,
            12, 10, 10, 12, 1, 1, 12, 0, 4, 7, 8,
        ],
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 4, 4,
            12, 9, 9, 12, 1, 1, 12, 0, 5, 10, 6,
        ],
        [
            0, 1, 9, 2, 12, 10, 10, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 7,
            7, 12, 4, 4, 12, 8, 8, 12, 3, 3, 12, 2,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 1, 1, 12, 2, 2,
            12, 11, 11, 12, 3, 3, 12, 0, 5, 10, 6,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12, 10, 10, 12, 1, 1, 12, 2, 2,
            12, 11, 11, 12, 3, 3, 12, 0, 4, 7, 8,
        ],
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 0, 4, 7, 8,
        ],
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 4, 4,
            12, 8, 8, 12, 3, 3, 12, 0, 5, 10, 6,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 5, 5, 12, 4, 4,
            12, 9, 9, 12, 1, 1, 12, 0, 2, 3, 11,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 0, 2, 3, 11,
        ],
        [
            0, 1, 9, 2, 12, 10, 10, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7,
            12, 6, 6, 12, 11, 11, 12, 3, 3, 12, 2,
        ],
        [
            0, 1, 9, 2, 12, 11, 11, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 5,
            5, 12, 4, 4, 12, 8, 8, 12, 3, 3, 12, 2,
        ],
    ],
    [
        [
            0, 8, 3, 1, 12, 9, 9, 12, 4, 4, 12, 7, 7, 12, 11, 11, 12, 6, 6,
            12, 5, 5, 12, 10, 10, 12, 2, 2, 12, 1,
        ],
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 10, 12, 10, 5, 12, 5, 4, 12, 4,
            9, 12, 9, 1, 12, 1, 0, 12, 6, 11, 7,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 5, 12, 5, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 0, 12, 1, 2, 10,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 11, 12, 11, 3, 12, 3, 2, 12, 2,
            10, 12, 10, 1, 12, 1, 0, 12, 4, 9, 5,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 11, 12, 11, 7, 12, 7, 4, 12, 4,
            8, 12, 8, 3, 12, 3, 0, 12, 1, 2, 10,
        ],
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 10, 12, 10, 5, 12, 5, 4, 12, 4,
            8, 12, 8, 3, 12, 3, 0, 12, 6, 11, 7,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 3, 12, 3, 2, 12, 2,
            10, 12, 10, 1, 12, 1, 0, 12, 6, 11, 7,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 0, 12, 1, 2, 10,
        ],
        [
            0, 8, 3, 1, 12, 10, 10, 12, 6, 6, 12, 5, 5, 12, 9, 9, 12, 4, 4,
            12, 7, 7, 12, 11, 11, 12, 2, 2, 12, 1,
        ],
        [
            0, 8, 3, 1, 12, 9, 9, 12, 4, 4, 12, 5, 5, 12, 10, 10, 12, 6, 6,
            12, 7, 7, 12, 11, 11, 12, 2, 2, 12, 1,
        ],
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 11, 12, 11, 7, 12, 7, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 0, 12, 4, 9, 5,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 10, 12, 10, 1, 12, 1, 2, 12, 2,
            11, 12, 11, 3, 12, 3, 0, 12, 4, 9, 5,
        ],
    ],
];

/// Case 13.3 inverted: four faces joined
pub(crate) static TILING13_3_: [[[i8; 30]; 12]; 2] = [
    [
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 5, 5, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 0, 1, 10, 2,
        ],
        [
            0, 3, 8, 1, 10, 12, 10, 6, 12, 6, 5, 12, 5, 9, 12, 9, 4, 12, 4,
            7, 12, 7, 11, 12, 11, 2, 12, 2, 1, 12,
        ],
        [
            0, 3, 8, 1, 9, 12, 9, 4, 12, 4, 7, 12, 7, 11, 12, 11, 6, 12, 6,
            5, 12, 5, 10, 12, 10, 2, 12, 2, 1, 12,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 6, 6, 12, 11, 11, 12, 7, 7, 12, 4, 4,
            12, 8, 8, 12, 3, 3, 12, 0, 1, 10, 2,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 11, 11, 12, 3, 3, 12, 2, 2,
            12, 10, 10, 12, 1, 1, 12, 0, 4, 5, 9,
        ],
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 0, 4, 5, 9,
        ],
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 4, 4,
            12, 9, 9, 12, 1, 1, 12, 0, 6, 7, 11,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 3, 3, 12, 2, 2,
            12, 10, 10, 12, 1, 1, 12, 0, 6, 7, 11,
        ],
        [
            0, 12, 8, 8, 12, 7, 7, 12, 6, 6, 12, 10, 10, 12, 1, 1, 12, 2, 2,
            12, 11, 11, 12, 3, 3, 12, 0, 4, 5, 9,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 0, 1, 10, 2,
        ],
        [
            0, 3, 8, 1, 9, 12, 9, 4, 12, 4, 5, 12, 5, 10, 12, 10, 6, 12, 6,
            7, 12, 7, 11, 12, 11, 2, 12, 2, 1, 12,
        ],
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 4, 4,
            12, 8, 8, 12, 3, 3, 12, 0, 6, 7, 11,
        ],
    ],
    [
        [
            0, 9, 1, 2, 10, 12, 10, 5, 12, 5, 6, 12, 6, 11, 12, 11, 7, 12,
            7, 4, 12, 4, 8, 12, 8, 3, 12, 3, 2, 12,
        ],
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 10, 12, 10, 5, 12, 5, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 0, 12, 4, 8, 7,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 11, 12, 11, 3, 12, 3, 2, 12, 2,
            10, 12, 10, 1, 12, 1, 0, 12, 4, 8, 7,
        ],
        [
            0, 9, 1, 2, 10, 12, 10, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7,
            6, 12, 6, 11, 12, 11, 3, 12, 3, 2, 12,
        ],
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 11, 12, 11, 7, 12, 7, 4, 12, 4,
            9, 12, 9, 1, 12, 1, 0, 12, 5, 6, 10,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 1, 12, 1, 2, 12, 2,
            11, 12, 11, 3, 12, 3, 0, 12, 5, 6, 10,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 5, 12, 5, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 0, 12, 2, 11, 3,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 6, 12, 6, 10, 12, 10, 5, 12, 5, 4, 12, 4,
            9, 12, 9, 1, 12, 1, 0, 12, 2, 11, 3,
        ],
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 11, 12, 11, 7, 12, 7, 4, 12, 4,
            8, 12, 8, 3, 12, 3, 0, 12, 5, 6, 10,
        ],
        [
            0, 9, 1, 2, 11, 12, 11, 7, 12, 7, 6, 12, 6, 10, 12, 10, 5, 12,
            5, 4, 12, 4, 8, 12, 8, 3, 12, 3, 2, 12,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 6, 12, 6, 10, 12, 10, 1, 12, 1, 2, 12, 2,
            11, 12, 11, 3, 12, 3, 0, 12, 4, 8, 7,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 0, 12, 2, 11, 3,
        ],
    ],
];

/// Case 13.4: three faces joined around a corner
pub(crate) static TILING13_4: [[[i8; 36]; 4]; 2] = [
    [
        [
            0, 12, 8, 8, 12, 7, 7, 12, 4, 4, 12, 9, 9, 12, 5, 5, 12, 6, 6,
            12, 10, 10, 12, 1, 1, 12, 2, 2, 12, 11, 11, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 1, 1, 12, 2, 2, 12, 10, 10, 12, 5, 5, 12, 6, 6,
            12, 11, 11, 12, 7, 7, 12, 4, 4, 12, 8, 8, 12, 3, 3, 12, 0,
        ],
        [
            0, 12, 9, 9, 12, 5, 5, 12, 4, 4, 12, 8, 8, 12, 7, 7, 12, 6, 6,
            12, 11, 11, 12, 3, 3, 12, 2, 2, 12, 10, 10, 12, 1, 1, 12, 0,
        ],
        [
            0, 12, 8, 8, 12, 3, 3, 12, 2, 2, 12, 11, 11, 12, 7, 7, 12, 6, 6,
            12, 10, 10, 12, 5, 5, 12, 4, 4, 12, 9, 9, 12, 1, 1, 12, 0,
        ],
    ],
    [
        [
            0, 9, 12, 9, 1, 12, 1, 2, 12, 2, 10, 12, 10, 5, 12, 5, 6, 12, 6,
            11, 12, 11, 7, 12, 7, 4, 12, 4, 8, 12, 8, 3, 12, 3, 0, 12,
        ],
        [
            0, 9, 12, 9, 5, 12, 5, 4, 12, 4, 8, 12, 8, 7, 12, 7, 6, 12, 6,
            11, 12, 11, 3, 12, 3, 2, 12, 2, 10, 12, 10, 1, 12, 1, 0, 12,
        ],
        [
            0, 8, 12, 8, 3, 12, 3, 2, 12, 2, 11, 12, 11, 7, 12, 7, 6, 12, 6,
            10, 12, 10, 5, 12, 5, 4, 12, 4, 9, 12, 9, 1, 12, 1, 0, 12,
        ],
        [
            0, 8, 12, 8, 7, 12, 7, 4, 12, 4, 9, 12, 9, 5, 12, 5, 6, 12, 6,
            10, 12, 10, 1, 12, 1, 2, 12, 2, 11, 12, 11, 3, 12, 3, 0, 12,
        ],
    ],
];

/// Case 13.5.1: three faces joined in a triangle, empty interior
///
/// The leading edge id of each tiling doubles as the reference
/// edge of the interior test.
pub(crate) static TILING13_5_1: [[[i8; 18]; 4]; 2] = [
    [
        [4, 7, 8, 0, 3, 9, 9, 3, 5, 5, 3, 6, 6, 3, 11, 1, 10, 2],
        [5, 10, 6, 0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2],
        [2, 3, 11, 0, 1, 8, 8, 1, 7, 7, 1, 6, 6, 1, 10, 4, 5, 9],
        [0, 1, 9, 2, 3, 10, 10, 3, 5, 5, 3, 4, 4, 3, 8, 6, 7, 11],
    ],
    [
        [6, 11, 7, 0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3],
        [1, 2, 10, 0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7],
        [0, 8, 3, 1, 2, 9, 9, 2, 4, 4, 2, 7, 7, 2, 11, 5, 6, 10],
        [4, 9, 5, 0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1, 2, 11, 3],
    ],
];

/// Case 13.5.2: three faces joined in a triangle, interior tunnel
pub(crate) static TILING13_5_2: [[[i8; 30]; 4]; 2] = [
    [
        [
            0, 3, 8, 8, 4, 7, 8, 3, 4, 4, 3, 9, 9, 2, 1, 9, 3, 2, 2, 3, 10,
            10, 3, 5, 5, 3, 6, 6, 3, 11,
        ],
        [
            0, 3, 9, 9, 3, 5, 5, 3, 6, 6, 3, 10, 10, 3, 1, 1, 11, 2, 1, 3,
            11, 11, 4, 7, 11, 3, 4, 4, 3, 8,
        ],
        [
            0, 5, 9, 0, 4, 5, 0, 1, 4, 4, 1, 8, 8, 1, 3, 3, 11, 2, 3, 1, 11,
            11, 1, 7, 7, 1, 6, 6, 1, 10,
        ],
        [
            0, 5, 9, 0, 4, 5, 0, 1, 4, 4, 1, 8, 8, 1, 3, 3, 11, 2, 3, 1, 11,
            11, 1, 7, 7, 1, 6, 6, 1, 10,
        ],
    ],
    [
        [
            0, 9, 6, 9, 5, 6, 0, 6, 1, 6, 11, 1, 11, 7, 1, 7, 4, 1, 4, 8, 1,
            8, 3, 1, 3, 2, 10, 3, 10, 1,
        ],
        [
            0, 9, 3, 9, 1, 3, 1, 2, 4, 2, 10, 4, 10, 5, 4, 1, 4, 3, 4, 8, 3,
            8, 7, 6, 8, 6, 3, 6, 11, 3,
        ],
        [
            0, 8, 3, 8, 7, 6, 8, 6, 3, 6, 10, 3, 10, 5, 3, 5, 4, 3, 4, 9, 3,
            9, 1, 3, 1, 2, 11, 1, 11, 3,
        ],
        [
            0, 8, 3, 8, 7, 6, 8, 6, 3, 6, 10, 3, 10, 5, 3, 5, 4, 3, 4, 9, 3,
            9, 1, 3, 1, 2, 11, 1, 11, 3,
        ],
    ],
];

/// Face to test for case 3, signed by query orientation
pub(crate) static TEST3: [i8; 24] = [
    5, 5, 1, 4, 1, 2, 2, 3, 6, -6, -3, -4, 4, 3, 6, -6, -3, -2, -2, -1, -4,
    -1, -5, -5,
];

/// Interior-test orientation for case 4
pub(crate) static TEST4: [i8; 8] = [
    7, 7, 7, -7, 7, -7, -7, -7,
];

/// Case 6: face to test, interior orientation, reference edge
pub(crate) static TEST6: [[i8; 3]; 48] = [
    [5, 7, 0],
    [1, 7, 0],
    [4, 7, 1],
    [1, 7, 0],
    [5, 7, 0],
    [2, 7, 1],
    [2, 7, 1],
    [4, 7, 2],
    [-2, -7, 0],
    [-4, -7, 0],
    [2, 7, 1],
    [5, 7, 0],
    [3, 7, 0],
    [6, 7, 0],
    [6, 7, 1],
    [-6, -7, 2],
    [-6, -7, 0],
    [1, 7, 0],
    [3, 7, 2],
    [-3, -7, 1],
    [-1, -7, 0],
    [-5, -7, 0],
    [-3, -7, 0],
    [-4, -7, 1],
    [4, 7, 1],
    [3, 7, 0],
    [5, 7, 0],
    [1, 7, 0],
    [3, 7, 1],
    [-3, -7, 2],
    [-1, -7, 0],
    [6, 7, 0],
    [6, 7, 2],
    [-6, -7, 1],
    [-6, -7, 0],
    [-3, -7, 0],
    [-5, -7, 0],
    [-2, -7, 1],
    [4, 7, 0],
    [2, 7, 0],
    [-4, -7, 2],
    [-2, -7, 1],
    [-2, -7, 1],
    [-5, -7, 0],
    [-1, -7, 0],
    [-4, -7, 1],
    [-1, -7, 0],
    [-5, -7, 0],
];

/// Case 7: three faces, interior orientation, reference edge
pub(crate) static TEST7: [[i8; 5]; 16] = [
    [1, 4, 5, 7, 0],
    [1, 2, 5, 7, 0],
    [2, 3, 5, 7, 1],
    [1, 2, 6, 7, 4],
    [3, 4, 6, 7, 6],
    [-2, -3, -6, -7, 5],
    [-1, -4, -6, -7, 4],
    [-3, -4, -5, -7, 2],
    [3, 4, 5, 7, 2],
    [1, 4, 6, 7, 4],
    [2, 3, 6, 7, 5],
    [-3, -4, -6, -7, 6],
    [-1, -2, -6, -7, 4],
    [-2, -3, -5, -7, 1],
    [-1, -2, -5, -7, 0],
    [-1, -4, -5, -7, 0],
];

/// Case 10: two faces, interior orientation
pub(crate) static TEST10: [[i8; 3]; 6] = [
    [2, 4, 7],
    [5, 6, 7],
    [1, 3, 7],
    [1, 3, 7],
    [5, 6, 7],
    [2, 4, 7],
];

/// Case 12: two faces, interior orientation, reference edge
pub(crate) static TEST12: [[i8; 4]; 24] = [
    [1, 4, 7, 0],
    [1, 2, 7, 0],
    [2, 5, 7, 0],
    [4, 5, 7, 0],
    [2, 3, 7, 1],
    [2, 6, 7, 4],
    [1, 6, 7, 4],
    [3, 6, 7, 5],
    [4, 6, 7, 4],
    [1, 5, 7, 0],
    [3, 5, 7, 1],
    [3, 4, 7, 2],
    [3, 4, 7, 2],
    [3, 5, 7, 1],
    [1, 5, 7, 0],
    [4, 6, 7, 4],
    [3, 6, 7, 5],
    [1, 6, 7, 4],
    [2, 6, 7, 4],
    [2, 3, 7, 1],
    [4, 5, 7, 0],
    [2, 5, 7, 0],
    [1, 2, 7, 0],
    [1, 4, 7, 0],
];

/// Case 13: six faces, interior orientation
pub(crate) static TEST13: [[i8; 7]; 2] = [
    [1, 2, 3, 4, 5, 6, 7],
    [6, 2, 5, 4, 1, 3, 7],
];

/// Folds the 64 face-test outcomes of case 13 onto its 46 sub-cases
pub(crate) static SUBCONFIG13: [i8; 64] = [
    0, 1, 2, 7, 3, -1, 8, -1, 4, 9, -1, -1, 10, -1, -1, -1, 5, 11, 12, 19,
    13, -1, 23, 27, 14, 24, -1, 28, 20, 29, 30, 44, 6, 15, 16, 25, 17, -1,
    21, 31, 18, 22, -1, 32, 26, 33, 34, 43, -1, -1, -1, 35, -1, -1, 36, 42,
    -1, 37, -1, 41, 38, 40, 39, 45,
];

/// Historical non-disambiguated table, terminated by -1 per row
pub(crate) static CASES_CLASSIC: [[i8; 16]; 256] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 8, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 3, 10, 9, 3, 9, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 11, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 2, 9, 8, 2, 8, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 11, 1, 11, 10, 1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 10, 10, 3, 11, -1, -1, -1, -1, -1, -1, -1],
    [8, 11, 9, 9, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 4, 3, 4, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 7, 3, 1, 2, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 10, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 3, 10, 9, 3, 9, 4, 3, 4, 7, 3, -1, -1, -1, -1],
    [2, 3, 11, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 2, 4, 7, 2, 7, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 11, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 11, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 1, 4, 7, 1, 7, 11, 1, 11, 10, 1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 10, 10, 3, 11, 4, 7, 8, -1, -1, -1, -1],
    [4, 7, 9, 9, 7, 10, 10, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 3, 5, 4, 3, 4, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 10, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 4, 4, 2, 5, 5, 2, 10, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3, -1, -1, -1, -1],
    [2, 3, 11, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 11, 2, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 5, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 2, 5, 4, 2, 4, 8, 2, 8, 11, 2, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 11, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 11, 1, 11, 10, 1, 4, 9, 5, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 5, 5, 3, 10, 10, 3, 11, -1, -1, -1, -1],
    [4, 8, 5, 8, 11, 5, 11, 10, 5, -1, -1, -1, -1, -1, -1, -1],
    [5, 7, 9, 9, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 8, 1, 7, 7, 1, 5, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 5, 7, 9, 9, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 7, 3, 1, 2, 10, -1, -1, -1, -1],
    [0, 2, 8, 8, 2, 7, 7, 2, 5, 5, 2, 10, -1, -1, -1, -1],
    [2, 10, 3, 10, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, 5, 7, 9, 9, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 9, 5, 2, 5, 7, 2, 7, 11, 2, -1, -1, -1, -1],
    [0, 1, 8, 8, 1, 7, 7, 1, 5, 2, 3, 11, -1, -1, -1, -1],
    [1, 5, 2, 5, 7, 2, 7, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 11, 5, 7, 9, 9, 7, 8, -1, -1, -1, -1],
    [0, 9, 1, 5, 7, 10, 10, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 5, 7, 10, 10, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [5, 7, 10, 10, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 8, 3, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 5, 5, 2, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 5, 5, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 5, 5, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [2, 6, 3, 6, 5, 3, 5, 9, 3, 9, 8, 3, -1, -1, -1, -1],
    [2, 3, 11, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 11, 2, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 11, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 2, 9, 8, 2, 8, 11, 2, 5, 10, 6, -1, -1, -1, -1],
    [1, 3, 5, 5, 3, 6, 6, 3, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 11, 1, 11, 6, 1, 6, 5, 1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 5, 5, 3, 6, 6, 3, 11, -1, -1, -1, -1],
    [5, 9, 6, 9, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [4, 7, 8, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 7, 3, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 4, 7, 8, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 4, 3, 4, 7, 3, 5, 10, 6, -1, -1, -1, -1],
    [1, 2, 5, 5, 2, 6, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 7, 3, 1, 2, 5, 5, 2, 6, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 5, 5, 2, 6, 4, 7, 8, -1, -1, -1, -1],
    [2, 6, 3, 6, 7, 3, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, 4, 7, 8, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 2, 4, 7, 2, 7, 11, 2, 5, 10, 6, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 11, 4, 7, 8, 5, 10, 6, -1, -1, -1, -1],
    [1, 10, 2, 4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 5, 5, 3, 6, 6, 3, 11, 4, 7, 8, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 6, 9, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 4, 9, 6, 9, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 6, 6, 1, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 10, 6, 3, 6, 4, 3, 4, 8, 3, -1, -1, -1, -1],
    [1, 2, 9, 9, 2, 4, 4, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 9, 9, 2, 4, 4, 2, 6, -1, -1, -1, -1],
    [0, 2, 4, 4, 2, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 6, 3, 6, 4, 3, 4, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, 4, 9, 6, 9, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 11, 2, 4, 9, 6, 9, 10, 6, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 6, 6, 1, 10, 2, 3, 11, -1, -1, -1, -1],
    [1, 10, 2, 4, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 9, 3, 4, 4, 3, 6, 6, 3, 11, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 6, 6, 3, 11, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 7, 10, 10, 7, 9, 9, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 10, 3, 10, 6, 3, 6, 7, 3, -1, -1, -1, -1],
    [0, 1, 8, 8, 1, 7, 7, 1, 6, 6, 1, 10, -1, -1, -1, -1],
    [1, 10, 3, 10, 6, 3, 6, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 9, 2, 8, 8, 2, 7, 7, 2, 6, -1, -1, -1, -1],
    [0, 9, 1, 2, 6, 3, 6, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 8, 2, 7, 7, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [2, 6, 3, 6, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, 6, 7, 10, 10, 7, 9, 9, 7, 8, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 9, 3, 8, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 8, 3, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 10, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 10, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 3, 10, 9, 3, 9, 8, 3, 6, 11, 7, -1, -1, -1, -1],
    [2, 3, 6, 6, 3, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 7, 2, 7, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 6, 6, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 2, 9, 8, 2, 8, 7, 2, 7, 6, 2, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 6, 6, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 10, 10, 3, 6, 6, 3, 7, -1, -1, -1, -1],
    [6, 10, 7, 10, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [4, 6, 8, 8, 6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 6, 3, 6, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 4, 6, 8, 8, 6, 11, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 4, 3, 4, 6, 3, 6, 11, 3, -1, -1, -1, -1],
    [1, 2, 10, 4, 6, 8, 8, 6, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 6, 3, 6, 11, 3, 1, 2, 10, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 10, 4, 6, 8, 8, 6, 11, -1, -1, -1, -1],
    [2, 11, 3, 4, 6, 9, 9, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 6, 6, 3, 4, 4, 3, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 6, 6, 3, 4, 4, 3, 8, -1, -1, -1, -1],
    [1, 9, 2, 9, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 6, 6, 3, 4, 4, 3, 8, -1, -1, -1, -1],
    [0, 4, 1, 4, 6, 1, 6, 10, 1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 6, 9, 9, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [4, 6, 9, 9, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 5, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 4, 9, 5, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 5, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 3, 5, 4, 3, 4, 8, 3, 6, 11, 7, -1, -1, -1, -1],
    [1, 2, 10, 4, 9, 5, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 10, 4, 9, 5, 6, 11, 7, -1, -1, -1, -1],
    [0, 2, 4, 4, 2, 5, 5, 2, 10, 6, 11, 7, -1, -1, -1, -1],
    [2, 11, 3, 4, 8, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 6, 6, 3, 7, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 7, 2, 7, 6, 2, 4, 9, 5, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 5, 2, 3, 6, 6, 3, 7, -1, -1, -1, -1],
    [1, 5, 2, 5, 6, 2, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 10, 10, 3, 6, 6, 3, 7, 4, 9, 5, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 6, 9, 9, 6, 8, 8, 6, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3, -1, -1, -1, -1],
    [0, 1, 8, 8, 1, 11, 11, 1, 6, 6, 1, 5, -1, -1, -1, -1],
    [1, 5, 3, 5, 6, 3, 6, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 5, 6, 9, 9, 6, 8, 8, 6, 11, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 8, 2, 11, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 6, 6, 3, 5, 5, 3, 9, 9, 3, 8, -1, -1, -1, -1],
    [0, 9, 2, 9, 5, 2, 5, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 5, 2, 5, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 2, 5, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 9, 3, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 10, 7, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 5, 10, 7, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 5, 10, 7, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 8, 3, 5, 10, 7, 10, 11, 7, -1, -1, -1, -1],
    [1, 2, 5, 5, 2, 7, 7, 2, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 5, 5, 2, 7, 7, 2, 11, -1, -1, -1, -1],
    [0, 2, 9, 9, 2, 5, 5, 2, 7, 7, 2, 11, -1, -1, -1, -1],
    [2, 11, 3, 5, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 10, 3, 5, 5, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 8, 7, 2, 7, 5, 2, 5, 10, 2, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 10, 10, 3, 5, 5, 3, 7, -1, -1, -1, -1],
    [1, 10, 2, 5, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 5, 5, 3, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 7, 1, 7, 5, 1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 5, 5, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 8, 8, 5, 11, 11, 5, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 3, 4, 5, 3, 5, 10, 3, 10, 11, 3, -1, -1, -1, -1],
    [0, 1, 9, 4, 5, 8, 8, 5, 11, 11, 5, 10, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 5, 5, 2, 4, 4, 2, 8, 8, 2, 11, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 8, 2, 11, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 10, 3, 5, 5, 3, 4, 4, 3, 8, -1, -1, -1, -1],
    [0, 4, 2, 4, 5, 2, 5, 10, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 5, 5, 3, 4, 4, 3, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 7, 9, 10, 7, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 4, 9, 7, 9, 10, 7, 10, 11, 7, -1, -1, -1, -1],
    [0, 1, 4, 4, 1, 7, 7, 1, 11, 11, 1, 10, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 9, 2, 4, 4, 2, 7, 7, 2, 11, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 4, 4, 2, 7, 7, 2, 11, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 10, 3, 9, 9, 3, 4, 4, 3, 7, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 7, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 9, 3, 4, 4, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 9, 11, 9, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 10, 3, 10, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 8, 1, 11, 11, 1, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 9, 2, 8, 8, 2, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 8, 2, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 10, 3, 9, 9, 3, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 9, 3, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

static_assertions::const_assert_eq!(CASES.len(), 256);
static_assertions::const_assert_eq!(CASES_CLASSIC.len(), 256);
static_assertions::const_assert_eq!(SUBCONFIG13.len(), 64);

#[cfg(test)]
mod test {
    use super::*;

    /// The published partition of the 256 masks into the 15 cases
    #[test]
    fn test_case_partition_sizes() {
        const SIZES: [usize; 15] =
            [2, 16, 24, 24, 8, 48, 48, 16, 6, 8, 6, 12, 24, 2, 12];
        let mut seen = [0usize; 15];
        for [case, config] in CASES {
            assert!((0..15).contains(&case));
            seen[case as usize] += 1;
            assert!((config as usize) < SIZES[case as usize]);
        }
        assert_eq!(seen, SIZES);
    }

    /// 46 realizable case-13 sub-cases, each exactly once
    #[test]
    fn test_subconfig13_is_a_partial_bijection() {
        let mut seen = [0usize; 46];
        for v in SUBCONFIG13 {
            if v >= 0 {
                seen[v as usize] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!(
            SUBCONFIG13.iter().filter(|&&v| v == -1).count(),
            64 - 46
        );
    }

    /// Every template references only edges crossed by its mask (plus the
    /// centroid), for both the classic table and case/config tilings
    #[test]
    fn test_classic_closure() {
        for (mask, row) in CASES_CLASSIC.iter().enumerate() {
            let crossing = |e: i8| {
                const ENDS: [(u8, u8); 12] = [
                    (0, 1), (1, 2), (2, 3), (3, 0),
                    (4, 5), (5, 6), (6, 7), (7, 4),
                    (0, 4), (1, 5), (2, 6), (3, 7),
                ];
                let (a, b) = ENDS[e as usize];
                (mask >> a) & 1 != (mask >> b) & 1
            };
            for &e in row.iter().take_while(|&&e| e >= 0) {
                assert!(
                    e < 12 && crossing(e),
                    "mask {mask:#04x} references non-crossing edge {e}"
                );
            }
        }
    }
}
