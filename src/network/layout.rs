/// Ordered layer sizes plus the flattening of (stage, neuron) pairs into
/// parameter-matrix columns.
///
/// Layer `i` feeds layer `i + 1` through stage `i`. Stage `i`'s neuron `j`
/// owns column `i * stage_width + j` in both the weight and bias matrices.
/// Construction requires uniform layer widths of at least two, which makes
/// the column mapping injective: no two connections share a slot.
#[derive(Debug, Clone)]
pub struct LayerLayout {
    layer_sizes: Vec<usize>,
    stage_width: usize,
}

impl LayerLayout {
    /// # Panics
    /// Panics on fewer than two layers, on widths below two (the input is an
    /// (x, y) pair and the output a class pair), or on non-uniform widths.
    pub fn new(layer_sizes: Vec<usize>) -> LayerLayout {
        assert!(
            layer_sizes.len() >= 2,
            "need an input layer and at least one stage"
        );
        let stage_width = layer_sizes[0];
        assert!(stage_width >= 2, "layers must be at least two neurons wide");
        assert!(
            layer_sizes.iter().all(|&size| size == stage_width),
            "column indexing requires uniform layer widths"
        );

        LayerLayout {
            layer_sizes,
            stage_width,
        }
    }

    /// Number of activation layers, input included.
    pub fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Number of layer-to-layer transitions.
    pub fn stages(&self) -> usize {
        self.layer_sizes.len() - 1
    }

    /// Neuron count of one layer.
    pub fn width(&self, layer: usize) -> usize {
        self.layer_sizes[layer]
    }

    pub fn stage_width(&self) -> usize {
        self.stage_width
    }

    /// Parameter-matrix column owned by `neuron` of `stage`.
    pub fn column(&self, stage: usize, neuron: usize) -> usize {
        debug_assert!(neuron < self.stage_width);
        stage * self.stage_width + neuron
    }

    /// Total number of parameter columns across all stages.
    pub fn slot_count(&self) -> usize {
        self.stages() * self.stage_width
    }
}
