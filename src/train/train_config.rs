use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};

use crate::train::generation_stats::GenerationStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `generations` — number of full passes over every trainable parameter
/// - `step_size`   — finite-difference probe offset `h`
/// - `verbose`     — print the classification grid and cost after each pass
/// - `progress_tx` — optional channel sender; one `GenerationStats` is sent
///                   per completed generation.  If the receiver is dropped
///                   the loop terminates early (clean shutdown).
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates before the next generation.
pub struct TrainConfig {
    pub generations: usize,
    pub step_size: f64,
    pub verbose: bool,
    pub progress_tx: Option<mpsc::Sender<GenerationStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a quiet `TrainConfig` with no progress channel and no stop flag.
    pub fn new(generations: usize, step_size: f64) -> Self {
        TrainConfig {
            generations,
            step_size,
            verbose: false,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
