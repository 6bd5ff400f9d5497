use crate::eval::cost::grid_cost;
use crate::network::buffer::ActivationBuffer;
use crate::network::layout::LayerLayout;
use crate::network::params::NetworkParams;
use crate::optim::sgd::Sgd;

/// One training generation: `layout.stages()` repetitions of a full weight
/// sweep followed by a full bias sweep.
///
/// Each sweep probes every row and column of its matrix; the stage counter
/// never narrows the probe columns to the stage's own slots, so all ten
/// columns are revisited on every repetition.
pub fn run_generation(
    params: &mut NetworkParams,
    layout: &LayerLayout,
    buf: &mut ActivationBuffer,
    optimizer: &Sgd,
    step_size: f64,
) {
    for _ in 0..layout.stages() {
        weights_sweep(params, layout, buf, optimizer, step_size);
        biases_sweep(params, layout, buf, optimizer, step_size);
    }
}

/// Symmetric-difference sweep over every weight slot.
///
/// A slot is probed at -h and +h around its current value and stepped by the
/// estimated downhill slope. The probe sequence ends at +h, so the step lands
/// on top of that offset rather than on the original value.
fn weights_sweep(
    params: &mut NetworkParams,
    layout: &LayerLayout,
    buf: &mut ActivationBuffer,
    optimizer: &Sgd,
    h: f64,
) {
    for j in 0..params.weights.rows {
        for k in 0..params.weights.cols {
            params.weights.data[j][k] -= h;
            let below = grid_cost(params, layout, buf, false);

            params.weights.data[j][k] += 2.0 * h;
            let above = grid_cost(params, layout, buf, false);

            let slope = (below - above) / (2.0 * h);
            optimizer.step(&mut params.weights.data[j][k], slope);
        }
    }
}

/// One-sided-difference sweep over every bias slot.
///
/// A slot is probed at its current value and at +h, then restored exactly.
/// The resulting step is applied to the weight slot at the same row and
/// column; the bias itself ends the sweep unchanged.
fn biases_sweep(
    params: &mut NetworkParams,
    layout: &LayerLayout,
    buf: &mut ActivationBuffer,
    optimizer: &Sgd,
    h: f64,
) {
    for j in 0..params.biases.rows {
        for k in 0..params.biases.cols {
            let at = grid_cost(params, layout, buf, false);

            params.biases.data[j][k] += h;
            let above = grid_cost(params, layout, buf, false);
            params.biases.data[j][k] -= h;

            let slope = (at - above) / h;
            optimizer.step(&mut params.weights.data[j][k], slope);
        }
    }
}
