use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major weight matrix addressed `[target][source]`.
///
/// Each row holds the incoming weights of one target unit; the columns
/// enumerate the previous layer including its trailing bias unit.
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

    /// Wraps existing rows. `cols` is taken from the first row (0 when empty);
    /// ragged rows are kept as-is and rejected later by `Network` construction.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data,
        }
    }

    /// Samples every entry uniformly from `[-range, range)`.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, range: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = (rng.gen::<f64>() * 2.0 - 1.0) * range;
            }
        }

        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// First row whose length differs from `cols`, with that length.
    pub fn ragged_row(&self, cols: usize) -> Option<(usize, usize)> {
        self.data.iter()
            .enumerate()
            .find(|(_, row)| row.len() != cols)
            .map(|(i, row)| (i, row.len()))
    }
}

/// Index of the largest value, scanning left to right with `>=` so a later
/// equal value wins the tie. Returns 0 for an empty slice or all-NaN input.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = f64::NEG_INFINITY;
    let mut index = 0;
    for (i, &v) in values.iter().enumerate() {
        if v >= best {
            best = v;
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn argmax_picks_unique_maximum() {
        assert_eq!(argmax(&[0.1, 0.5, 0.2]), 1);
    }

    #[test]
    fn argmax_ties_go_to_the_later_index() {
        assert_eq!(argmax(&[0.1, 0.5, 0.5]), 2);
        assert_eq!(argmax(&[0.3, 0.3, 0.3]), 2);
    }

    #[test]
    fn argmax_of_empty_is_zero() {
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn from_data_handles_empty_and_ragged_rows() {
        let empty = Matrix::from_data(vec![]);
        assert_eq!(empty.shape(), (0, 0));

        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.ragged_row(2), Some((1, 1)));
        assert_eq!(m.ragged_row(1), Some((0, 2)));
    }

    #[test]
    fn uniform_stays_in_range_and_is_seed_deterministic() {
        let a = Matrix::uniform(3, 4, 0.5, &mut StdRng::seed_from_u64(7));
        let b = Matrix::uniform(3, 4, 0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.shape(), (3, 4));
        assert!(a.data.iter().flatten().all(|w| (-0.5..0.5).contains(w)));
    }
}
