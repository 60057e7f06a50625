use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub, Mul};

/// Row-major matrix of `f64`. Samples are rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Glorot (Xavier) uniform initialization: U(-l, l) with
    /// l = sqrt(6 / (fan_in + fan_out)).
    ///
    /// Shape: (rows, cols). `rows` is the fan-in (number of input
    /// connections), `cols` the fan-out. Keeps the variance of activations
    /// and gradients roughly equal across Tanh/Sigmoid layers.
    pub fn glorot_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let limit = (6.0 / (rows + cols) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-limit..limit);
            }
        }
        res
    }

    /// Builds a matrix from row vectors. Panics if `data` is empty or ragged.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Matrix {
        assert!(!data.is_empty(), "Matrix::from_rows: no rows given");
        let cols = data[0].len();
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix::from_rows: rows have unequal lengths"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// A 1×n matrix holding a single sample.
    pub fn row_vector(values: &[f64]) -> Matrix {
        Matrix::from_rows(vec![values.to_vec()])
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_rows(
            self.data
                .iter()
                .map(|row| row.iter().map(|x| functor(*x)).collect())
                .collect(),
        )
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.rows, rhs.rows, "hadamard: row counts differ");
        assert_eq!(self.cols, rhs.cols, "hadamard: column counts differ");
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix::from_rows(data)
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "matrix addition: shapes differ"
        );

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "matrix subtraction: shapes differ"
        );

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix multiplication: inner dimensions differ"
        );

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
