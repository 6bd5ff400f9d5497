use crate::math::matrix::Matrix;
use crate::network::layout::LayerLayout;

/// Per-layer activations for the one sample currently being evaluated.
///
/// Row 0 holds the raw input coordinates; row `i + 1` holds stage `i`'s
/// sigmoid outputs. An evaluation must reset the buffer before use — values
/// left over from the previous sample must never leak into the next one.
/// The buffer belongs to exactly one in-flight evaluation; parallel callers
/// need one buffer each.
#[derive(Debug, Clone)]
pub struct ActivationBuffer {
    pub values: Matrix,
}

impl ActivationBuffer {
    pub fn new(layout: &LayerLayout) -> ActivationBuffer {
        ActivationBuffer {
            values: Matrix::zeros(layout.layer_count(), layout.stage_width()),
        }
    }

    /// Zeroes every layer row.
    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    /// Writes the sample coordinates into the input row.
    pub fn set_input(&mut self, x: f64, y: f64) {
        self.values.data[0][0] = x;
        self.values.data[0][1] = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_spans_every_layer() {
        let layout = LayerLayout::new(vec![2; 6]);
        let buf = ActivationBuffer::new(&layout);
        assert_eq!(buf.values.rows, 6);
        assert_eq!(buf.values.cols, 2);
        assert!(buf.values.data.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn reset_then_input_leaves_only_the_coordinates() {
        let layout = LayerLayout::new(vec![2; 6]);
        let mut buf = ActivationBuffer::new(&layout);
        buf.values.fill(9.25);
        buf.reset();
        buf.set_input(7.0, 3.0);
        assert_eq!(buf.values.data[0], vec![7.0, 3.0]);
        assert!(buf.values.data[1..].iter().flatten().all(|&v| v == 0.0));
    }
}
