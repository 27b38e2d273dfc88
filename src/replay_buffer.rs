use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Capacity-bounded FIFO store of labeled training pairs.
///
/// Entries are `(input, target)` rows. Once the buffer is full the oldest
/// entries are evicted first, so `len() <= capacity()` holds after every
/// call to [`remember`](ExperienceBuffer::remember).
#[derive(Clone, Serialize, Deserialize)]
pub struct ExperienceBuffer {
    buffer: VecDeque<(Array1<f32>, Array1<f32>)>,
    capacity: usize,
}

impl ExperienceBuffer {
    pub fn new(capacity: usize) -> Self {
        ExperienceBuffer {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append paired rows, evicting the oldest entries once over capacity.
    ///
    /// # Panics
    ///
    /// Panics if `inputs` and `targets` have different row counts; mismatched
    /// pairs are a programmer error.
    pub fn remember(&mut self, inputs: ArrayView2<f32>, targets: ArrayView2<f32>) {
        assert_eq!(
            inputs.nrows(),
            targets.nrows(),
            "inputs and targets must pair up row for row"
        );
        for (x, y) in inputs.axis_iter(Axis(0)).zip(targets.axis_iter(Axis(0))) {
            if self.buffer.len() == self.capacity {
                self.buffer.pop_front();
            }
            self.buffer.push_back((x.to_owned(), y.to_owned()));
        }
    }

    /// Uniform sample of `min(n, len)` pairs without replacement, stacked
    /// into `(inputs, targets)` matrices. An empty buffer yields empty
    /// matrices rather than an error. The buffer itself is not mutated.
    pub fn replay<R: Rng>(&self, n: usize, rng: &mut R) -> (Array2<f32>, Array2<f32>) {
        if self.buffer.is_empty() || n == 0 {
            return (Array2::zeros((0, 0)), Array2::zeros((0, 0)));
        }
        let mut indices = (0..self.buffer.len()).collect::<Vec<usize>>();
        indices.shuffle(rng);
        indices.truncate(n);

        let (x0, y0) = &self.buffer[indices[0]];
        let mut inputs = Array2::zeros((indices.len(), x0.len()));
        let mut targets = Array2::zeros((indices.len(), y0.len()));
        for (row, &i) in indices.iter().enumerate() {
            let (x, y) = &self.buffer[i];
            inputs.row_mut(row).assign(x);
            targets.row_mut(row).assign(y);
        }
        (inputs, targets)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &(Array1<f32>, Array1<f32>)> {
        self.buffer.iter()
    }
}
