// Trains a 6-layer, 2-wide network to classify a 30x30 grid: points inside
// the 5-wide band along the two low edges are the positive class. Gradients
// come from finite differences, so each generation re-evaluates the full
// grid cost twice per parameter probe.
use findiff_nn::{train_loop, LayerLayout, Matrix, NetworkParams, Sgd, TrainConfig};

fn main() {
    let layout = LayerLayout::new(vec![2; 6]);

    let weights = Matrix::from_data(vec![
        vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0],
        vec![-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0],
    ]);
    let biases = Matrix::from_data(vec![
        vec![-5.0, -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![-5.0, -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    ]);
    let mut params = NetworkParams::new(weights, biases, &layout);

    let optimizer = Sgd::new(0.005);
    let mut config = TrainConfig::new(100, 0.00001);
    config.verbose = true;

    train_loop(&mut params, &layout, &optimizer, &config);
}
