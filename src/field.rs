//! Scalar field sources sampled on regular grids
//!
//! The extraction core is agnostic to where samples come from: implicit
//! formula evaluators, CSG trees and file-loaded volumes all reduce to the
//! [`ScalarField`] trait.  [`DenseField`] is the common dense case.
use crate::Error;

/// A scalar field sampled at integer grid coordinates
pub trait ScalarField {
    /// Number of samples along each axis
    fn dimensions(&self) -> [usize; 3];

    /// Sample value at `(i, j, k)`
    ///
    /// Coordinates are only queried inside the ranges given by
    /// [`dimensions`](ScalarField::dimensions).
    fn sample(&self, i: usize, j: usize, k: usize) -> f32;
}

impl<F: ScalarField> ScalarField for &F {
    fn dimensions(&self) -> [usize; 3] {
        (**self).dimensions()
    }
    fn sample(&self, i: usize, j: usize, k: usize) -> f32 {
        (**self).sample(i, j, k)
    }
}

/// Dense row-major sample storage
///
/// Values are stored in `i + nx * (j + ny * k)` order.
#[derive(Debug)]
pub struct DenseField {
    nx: usize,
    ny: usize,
    nz: usize,
    data: Vec<f32>,
}

impl DenseField {
    /// Builds a field from a pre-filled row-major buffer
    pub fn new(
        nx: usize,
        ny: usize,
        nz: usize,
        data: Vec<f32>,
    ) -> Result<Self, Error> {
        let expected = nx * ny * nz;
        if data.len() != expected {
            return Err(Error::BadFieldSize(data.len(), expected));
        }
        Ok(Self { nx, ny, nz, data })
    }

    /// Builds a field by evaluating `f` at every grid point
    pub fn from_fn<F: FnMut(usize, usize, usize) -> f32>(
        nx: usize,
        ny: usize,
        nz: usize,
        mut f: F,
    ) -> Self {
        let mut data = Vec::with_capacity(nx * ny * nz);
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    data.push(f(i, j, k));
                }
            }
        }
        Self { nx, ny, nz, data }
    }
}

impl ScalarField for DenseField {
    fn dimensions(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }
    fn sample(&self, i: usize, j: usize, k: usize) -> f32 {
        debug_assert!(i < self.nx && j < self.ny && k < self.nz);
        self.data[i + self.nx * (j + self.ny * k)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dense_layout() {
        let f = DenseField::from_fn(3, 4, 5, |i, j, k| {
            (i + 10 * j + 100 * k) as f32
        });
        assert_eq!(f.dimensions(), [3, 4, 5]);
        assert_eq!(f.sample(2, 3, 4), 432.0);
        assert_eq!(f.sample(0, 0, 0), 0.0);
    }

    #[test]
    fn test_dense_size_mismatch() {
        let e = DenseField::new(2, 2, 2, vec![0.0; 7]).unwrap_err();
        assert!(matches!(e, Error::BadFieldSize(7, 8)));
    }
}
