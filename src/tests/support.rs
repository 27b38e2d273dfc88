//! Stub models for exercising the agents without a real network.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use std::collections::VecDeque;

use crate::model::Model;

/// Model that returns the same output vector for every input row and
/// records every training call.
pub struct StubModel {
    pub output: Array1<f32>,
    pub weights: Array1<f32>,
    pub trained: Vec<(Array2<f32>, Array2<f32>)>,
    pub cost: f32,
}

impl StubModel {
    pub fn new(output: Array1<f32>, weights: Array1<f32>) -> Self {
        StubModel {
            output,
            weights,
            trained: Vec::new(),
            cost: 0.5,
        }
    }
}

impl Model for StubModel {
    fn predict(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        let mut out = Array2::zeros((inputs.nrows(), self.output.len()));
        for mut row in out.axis_iter_mut(Axis(0)) {
            row.assign(&self.output);
        }
        out
    }

    fn train_on_batch(&mut self, inputs: ArrayView2<f32>, targets: ArrayView2<f32>) -> f32 {
        self.trained.push((inputs.to_owned(), targets.to_owned()));
        self.cost
    }

    fn weights_flat(&self) -> Array1<f32> {
        self.weights.clone()
    }

    fn set_weights_flat(&mut self, weights: ArrayView1<f32>) {
        self.weights = weights.to_owned();
    }
}

/// Model that replays a scripted sequence of outputs, one per predicted row.
pub struct SequenceModel {
    pub outputs: VecDeque<Array1<f32>>,
    pub weights: Array1<f32>,
    pub trained: Vec<(Array2<f32>, Array2<f32>)>,
}

impl SequenceModel {
    pub fn new(outputs: Vec<Array1<f32>>, weights: Array1<f32>) -> Self {
        SequenceModel {
            outputs: outputs.into(),
            weights,
            trained: Vec::new(),
        }
    }
}

impl Model for SequenceModel {
    fn predict(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        let width = self.outputs.front().map(|o| o.len()).unwrap_or(0);
        let mut out = Array2::zeros((inputs.nrows(), width));
        for mut row in out.axis_iter_mut(Axis(0)) {
            let next = self.outputs.pop_front().expect("script exhausted");
            row.assign(&next);
        }
        out
    }

    fn train_on_batch(&mut self, inputs: ArrayView2<f32>, targets: ArrayView2<f32>) -> f32 {
        self.trained.push((inputs.to_owned(), targets.to_owned()));
        0.0
    }

    fn weights_flat(&self) -> Array1<f32> {
        self.weights.clone()
    }

    fn set_weights_flat(&mut self, weights: ArrayView1<f32>) {
        self.weights = weights.to_owned();
    }
}
