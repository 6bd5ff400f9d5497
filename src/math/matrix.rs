use rand::prelude::*;

#[derive(Debug, Clone)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn random(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }

        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data
        }
    }

    /// Overwrites every element in place.
    pub fn fill(&mut self, value: f64) {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 7);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 7);
        assert!(m.data.iter().all(|row| row.len() == 7));
        assert!(m.data.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn from_data_infers_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 2);
        assert_eq!(m.data[1][0], 3.0);
    }

    #[test]
    fn fill_overwrites_every_slot() {
        let mut m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.fill(0.0);
        assert!(m.data.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn random_stays_in_unit_range() {
        let m = Matrix::random(4, 10);
        assert!(m.data.iter().flatten().all(|&v| (-1.0..1.0).contains(&v)));
    }
}
