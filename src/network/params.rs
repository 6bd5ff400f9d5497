use crate::math::matrix::Matrix;
use crate::network::layout::LayerLayout;

/// The trainable state of the network: one weight matrix and one bias matrix,
/// both column-indexed through [`LayerLayout`].
///
/// `weights[k][col]` connects neuron `k` of the feeding layer to the neuron
/// owning `col`; `biases[j][col]` is the bias read by neuron `j` at `col`.
/// Training mutates both in place; nothing else owns them.
#[derive(Debug, Clone)]
pub struct NetworkParams {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl NetworkParams {
    /// Wraps caller-supplied matrices after checking them against the layout.
    ///
    /// # Panics
    /// Panics when either matrix is not stage-width × slot-count.
    pub fn new(weights: Matrix, biases: Matrix, layout: &LayerLayout) -> NetworkParams {
        assert_eq!(
            weights.rows,
            layout.stage_width(),
            "weight rows must match the feeding layer width"
        );
        assert_eq!(
            weights.cols,
            layout.slot_count(),
            "weight columns must cover every parameter slot"
        );
        assert_eq!(
            biases.rows,
            layout.stage_width(),
            "bias rows must match the stage width"
        );
        assert_eq!(
            biases.cols,
            layout.slot_count(),
            "bias columns must cover every parameter slot"
        );

        NetworkParams { weights, biases }
    }

    /// Fresh parameters drawn uniformly from [-1, 1).
    pub fn random(layout: &LayerLayout) -> NetworkParams {
        NetworkParams {
            weights: Matrix::random(layout.stage_width(), layout.slot_count()),
            biases: Matrix::random(layout.stage_width(), layout.slot_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_params_match_the_layout_shape() {
        let layout = LayerLayout::new(vec![2; 6]);
        let params = NetworkParams::random(&layout);
        assert_eq!(params.weights.rows, 2);
        assert_eq!(params.weights.cols, 10);
        assert_eq!(params.biases.rows, 2);
        assert_eq!(params.biases.cols, 10);
        assert!(params
            .weights
            .data
            .iter()
            .flatten()
            .all(|&v| (-1.0..1.0).contains(&v)));
    }

    #[test]
    #[should_panic(expected = "weight columns")]
    fn undersized_weight_matrix_is_rejected() {
        let layout = LayerLayout::new(vec![2; 6]);
        let weights = Matrix::zeros(2, 8);
        let biases = Matrix::zeros(2, 10);
        NetworkParams::new(weights, biases, &layout);
    }
}
