use crate::activation::activation::sigmoid;
use crate::loss::sse::SseLoss;
use crate::network::buffer::ActivationBuffer;
use crate::network::layout::LayerLayout;
use crate::network::params::NetworkParams;

/// Side length of the square input grid.
pub const GRID_SIZE: usize = 30;

/// Width of the band along the two low edges that forms the positive class.
const BAND: usize = 5;

/// Binary label for a grid coordinate: 1.0 inside the band, 0.0 outside.
pub fn target(x: usize, y: usize) -> f64 {
    if x < BAND || y < BAND {
        1.0
    } else {
        0.0
    }
}

/// Runs one sample through the network and returns the two output
/// activations.
///
/// The buffer is reset, the raw coordinates are injected into its input row
/// (deliberately unnormalized), and each stage writes its sigmoid outputs
/// into the next row. `params` is read-only here; the buffer is the only
/// thing written.
pub fn forward(
    params: &NetworkParams,
    layout: &LayerLayout,
    buf: &mut ActivationBuffer,
    x: f64,
    y: f64,
) -> (f64, f64) {
    buf.reset();
    buf.set_input(x, y);

    for stage in 0..layout.stages() {
        for neuron in 0..layout.width(stage + 1) {
            let col = layout.column(stage, neuron);
            let mut total = 0.0;
            for k in 0..layout.width(stage) {
                total += buf.values.data[stage][k] * params.weights.data[k][col];
            }
            total += params.biases.data[neuron][col];
            buf.values.data[stage + 1][neuron] = sigmoid(total);
        }
    }

    let out = layout.stages();
    (buf.values.data[out][0], buf.values.data[out][1])
}

/// Total squared-error cost over the full grid.
///
/// Walks the grid row by row (y outer, x inner), forward-evaluates every
/// sample and accumulates the squared error of the output pair against
/// `(target, 1 - target)`. When `verbose`, prints one marker per sample
/// ('S' when output 0 wins the `>=` comparison, 'F' otherwise) and a newline
/// after each row of 30.
pub fn grid_cost(
    params: &NetworkParams,
    layout: &LayerLayout,
    buf: &mut ActivationBuffer,
    verbose: bool,
) -> f64 {
    let mut total_cost = 0.0;

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let (out0, out1) = forward(params, layout, buf, x as f64, y as f64);
            let expected = target(x, y);

            if verbose {
                print!("{} ", if out0 >= out1 { 'S' } else { 'F' });
            }

            total_cost += SseLoss::loss(&[out0, out1], &[expected, 1.0 - expected]);
        }

        if verbose {
            println!();
        }
    }

    total_cost
}
