use serde::{Deserialize, Serialize};

/// Per-generation training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `GenerationStats` value at the end of every completed
/// generation.  Receivers use this to track progress without parsing the
/// textual report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Total generations requested for this run.
    pub total_generations: usize,
    /// Total grid cost after this generation's updates.
    pub cost: f64,
    /// Wall-clock duration of this single generation in milliseconds.
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_stay_stable_for_consumers() {
        let stats = GenerationStats {
            generation: 1,
            total_generations: 100,
            cost: 450.9,
            elapsed_ms: 12,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"generation\":1"));
        assert!(json.contains("\"elapsed_ms\":12"));

        let back: GenerationStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_generations, 100);
    }
}
