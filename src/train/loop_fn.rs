use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::eval::cost::grid_cost;
use crate::network::buffer::ActivationBuffer;
use crate::network::layout::LayerLayout;
use crate::network::params::NetworkParams;
use crate::optim::sgd::Sgd;
use crate::train::generation_stats::GenerationStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::run_generation;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `params` for `config.generations` generations and returns the total
/// grid cost after the **last completed generation**.
///
/// # Arguments
/// - `params`    — parameter matrices, updated in place
/// - `layout`    — column layout shared by the weight and bias matrices
/// - `optimizer` — SGD optimizer (carries the learning rate)
/// - `config`    — hyperparameters, optional progress channel, optional stop flag
///
/// In verbose mode the run opens with a `starting cost:` report — the
/// classification grid and the cost value — and every generation closes with
/// the freshly evaluated grid, a `current cost:` line, the cost value and a
/// blank line.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
pub fn train_loop(
    params: &mut NetworkParams,
    layout: &LayerLayout,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> f64 {
    let mut buf = ActivationBuffer::new(layout);

    if config.verbose {
        println!("starting cost:");
        let starting_cost = grid_cost(params, layout, &mut buf, true);
        println!("{starting_cost}");
        println!();
    }

    let mut last_cost = 0.0;

    for generation in 1..=config.generations {
        // Check stop flag at the top of each generation.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();

        // ── One full sweep over every trainable parameter ──────────────────
        run_generation(params, layout, &mut buf, optimizer, config.step_size);

        // ── Progress report ────────────────────────────────────────────────
        let cost_now = grid_cost(params, layout, &mut buf, config.verbose);
        if config.verbose {
            println!("current cost:");
            println!("{cost_now}");
            println!();
        }
        last_cost = cost_now;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if let Some(ref tx) = config.progress_tx {
            let stats = GenerationStats {
                generation,
                total_generations: config.generations,
                cost: cost_now,
                elapsed_ms,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    last_cost
}
