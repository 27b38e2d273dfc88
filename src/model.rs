use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Contract the agents expect from their predictive model.
///
/// The model is an external collaborator: the agents never look inside it.
/// They feed it batches of inputs and targets, and read or overwrite its
/// parameters only through the flattened weight vector, which is all the
/// soft-update arithmetic needs.
pub trait Model {
    /// Forward pass over a batch; one output row per input row.
    fn predict(&mut self, inputs: ArrayView2<f32>) -> Array2<f32>;

    /// One optimization step on the given batch; returns the scalar cost.
    fn train_on_batch(&mut self, inputs: ArrayView2<f32>, targets: ArrayView2<f32>) -> f32;

    /// All parameters flattened into a single vector.
    fn weights_flat(&self) -> Array1<f32>;

    /// Overwrite all parameters from a flattened vector of the same length.
    fn set_weights_flat(&mut self, weights: ArrayView1<f32>);

    /// Forward pass over a single state.
    fn predict_one(&mut self, state: ArrayView1<f32>) -> Array1<f32> {
        let batch = state.insert_axis(Axis(0));
        self.predict(batch).index_axis(Axis(0), 0).to_owned()
    }
}
