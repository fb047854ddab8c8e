/// Row-major 2-D grid of measurements.
///
/// The column order is fixed at construction and shared with the weight
/// vector and the cost/benefit partition, so column alignment is a
/// structural property rather than a per-lookup concern. Transformations
/// produce a new matrix; cells are never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    cells: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        debug_assert!(rows.iter().all(|row| row.len() == n_cols));
        Self {
            cells: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        }
    }

    pub fn from_fn(rows: usize, cols: usize, mut cell: impl FnMut(usize, usize) -> f64) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| cell(row, col))
            .collect();
        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().skip(col).step_by(self.cols.max(1)).copied()
    }
}

#[cfg(test)]
mod test {
    use super::Matrix;

    #[test]
    fn rows_and_columns_line_up() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(matrix.column(2).collect::<Vec<f64>>(), vec![3.0, 6.0]);
        assert_eq!(matrix.get(1, 0), 4.0);
    }

    #[test]
    fn from_fn_matches_from_rows() {
        let built = Matrix::from_fn(2, 2, |row, col| (row * 2 + col) as f64);
        assert_eq!(built, Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]));
    }
}
