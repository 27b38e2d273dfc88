use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::replay_buffer::ExperienceBuffer;

#[test]
fn test_remember_and_replay() {
    let mut buffer = ExperienceBuffer::new(10);
    buffer.remember(array![[0.5, -0.5]].view(), array![[1.0]].view());
    assert_eq!(buffer.len(), 1);

    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = buffer.replay(1, &mut rng);
    assert_eq!(x, array![[0.5, -0.5]]);
    assert_eq!(y, array![[1.0]]);
}

#[test]
fn test_capacity_bound_and_fifo_eviction() {
    let mut buffer = ExperienceBuffer::new(3);

    for i in 0..5 {
        buffer.remember(array![[i as f32]].view(), array![[i as f32 * 10.0]].view());
        assert!(buffer.len() <= buffer.capacity());
    }

    // Only the last 3 entries survive, oldest first
    let inputs: Vec<f32> = buffer.iter().map(|(x, _)| x[0]).collect();
    assert_eq!(inputs, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_fifo_eviction_scenario() {
    let mut buffer = ExperienceBuffer::new(3);
    buffer.remember(array![[1.0]].view(), array![[10.0]].view()); // (a, x)
    buffer.remember(array![[2.0]].view(), array![[20.0]].view()); // (b, y)
    buffer.remember(array![[3.0]].view(), array![[30.0]].view()); // (c, z)
    buffer.remember(array![[4.0]].view(), array![[40.0]].view()); // (d, w)

    let pairs: Vec<(f32, f32)> = buffer.iter().map(|(x, y)| (x[0], y[0])).collect();
    assert_eq!(pairs, vec![(2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]);
}

#[test]
fn test_remember_batch_overflowing_capacity() {
    let mut buffer = ExperienceBuffer::new(2);
    buffer.remember(
        array![[1.0], [2.0], [3.0], [4.0]].view(),
        array![[1.0], [2.0], [3.0], [4.0]].view(),
    );
    assert_eq!(buffer.len(), 2);
    let inputs: Vec<f32> = buffer.iter().map(|(x, _)| x[0]).collect();
    assert_eq!(inputs, vec![3.0, 4.0]);
}

#[test]
fn test_replay_empty_buffer() {
    let buffer = ExperienceBuffer::new(10);
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = buffer.replay(5, &mut rng);
    assert_eq!(x.nrows(), 0);
    assert_eq!(y.nrows(), 0);
}

#[test]
fn test_replay_sample_sizes() {
    let mut buffer = ExperienceBuffer::new(10);
    for i in 0..5 {
        buffer.remember(array![[i as f32]].view(), array![[0.0]].view());
    }
    let mut rng = StdRng::seed_from_u64(7);

    let (x, _) = buffer.replay(3, &mut rng);
    assert_eq!(x.nrows(), 3);

    // Sampling more than available returns all
    let (x, _) = buffer.replay(10, &mut rng);
    assert_eq!(x.nrows(), 5);

    // Replay never mutates the buffer
    assert_eq!(buffer.len(), 5);
}

#[test]
fn test_replay_returns_genuine_members() {
    let mut buffer = ExperienceBuffer::new(10);
    for i in 0..6 {
        buffer.remember(array![[i as f32]].view(), array![[i as f32 + 100.0]].view());
    }
    let mut rng = StdRng::seed_from_u64(42);
    let (x, y) = buffer.replay(4, &mut rng);

    for row in 0..x.nrows() {
        let member = buffer
            .iter()
            .any(|(bx, by)| bx[0] == x[[row, 0]] && by[0] == y[[row, 0]]);
        assert!(member, "sampled row {} is not a buffer entry", row);
    }
}

#[test]
fn test_replay_samples_without_replacement() {
    let mut buffer = ExperienceBuffer::new(10);
    for i in 0..5 {
        buffer.remember(array![[i as f32]].view(), array![[0.0]].view());
    }
    let mut rng = StdRng::seed_from_u64(3);
    let (x, _) = buffer.replay(5, &mut rng);

    let mut seen: Vec<f32> = (0..x.nrows()).map(|r| x[[r, 0]]).collect();
    seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(seen, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
#[should_panic(expected = "pair up row for row")]
fn test_remember_mismatched_rows_panics() {
    let mut buffer = ExperienceBuffer::new(10);
    buffer.remember(array![[1.0], [2.0]].view(), array![[1.0]].view());
}
