mod matrix_c64;
pub use matrix_c64::*;

use num_traits::Zero;
use std::fmt;
use std::ops::{Index, IndexMut};

// Dense matrix in column-major order, the layout nalgebra and LAPACK expect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix<T> {
    nrow: usize,
    ncol: usize,
    data: Vec<T>,
}

impl<T: Zero + Copy> Matrix<T> {
    pub fn new(nrow: usize, ncol: usize) -> Matrix<T> {
        Matrix {
            nrow,
            ncol,
            data: vec![T::zero(); nrow * ncol],
        }
    }

    pub fn from_row_slice(nrow: usize, ncol: usize, v: &[T]) -> Matrix<T> {
        assert_eq!(v.len(), nrow * ncol, "Matrix::from_row_slice size mismatch");

        let mut mat = Matrix::<T>::new(nrow, ncol);

        for i in 0..nrow {
            for j in 0..ncol {
                mat[[i, j]] = v[i * ncol + j];
            }
        }

        mat
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.ncol
    }

    pub fn is_square(&self) -> bool {
        self.nrow == self.ncol
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn get_col(&self, icol: usize) -> &[T] {
        &self.data[icol * self.nrow..(icol + 1) * self.nrow]
    }

    pub fn set_zeros(&mut self) {
        self.data.iter_mut().for_each(|v| *v = T::zero());
    }

    // reshape in place; contents are zeroed
    pub fn resize(&mut self, nrow: usize, ncol: usize) {
        self.nrow = nrow;
        self.ncol = ncol;
        self.data.clear();
        self.data.resize(nrow * ncol, T::zero());
    }

    pub fn copy_from(&mut self, other: &Matrix<T>) {
        if self.nrow != other.nrow || self.ncol != other.ncol {
            self.resize(other.nrow, other.ncol);
        }

        self.data.copy_from_slice(&other.data);
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: [usize; 2]) -> &T {
        &self.data[idx[1] * self.nrow + idx[0]]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut T {
        &mut self.data[idx[1] * self.nrow + idx[0]]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.nrow {
            for j in 0..self.ncol {
                write!(f, "{:>24.12} ", self.data[j * self.nrow + i])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
