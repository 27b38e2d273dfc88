use ndarray::array;

use crate::rewards::{discount, standardize};

#[test]
fn test_discount_recurrence() {
    let rewards = array![1.0, 2.0, 3.0];
    let returns = discount(rewards.view(), 0.9);

    // G_2 = 3, G_1 = 2 + 0.9 * 3, G_0 = 1 + 0.9 * G_1
    assert!((returns[2] - 3.0).abs() < 1e-6);
    assert!((returns[1] - 4.7).abs() < 1e-6);
    assert!((returns[0] - 5.23).abs() < 1e-6);
}

#[test]
fn test_discount_zero_gamma_is_identity() {
    let rewards = array![5.0, -1.0, 0.5, 2.0];
    let returns = discount(rewards.view(), 0.0);
    assert_eq!(returns, rewards);
}

#[test]
fn test_discount_single_step() {
    let returns = discount(array![5.0].view(), 0.99);
    assert_eq!(returns, array![5.0]);
}

#[test]
fn test_standardize_zero_mean_unit_variance() {
    let returns = standardize(array![1.0, 2.0, 3.0, 4.0, 5.0]);
    let mean = returns.mean().unwrap();
    let std = returns.std(0.0);
    assert!(mean.abs() < 1e-6);
    assert!((std - 1.0).abs() < 1e-5);
}

#[test]
fn test_standardize_single_step_unchanged() {
    let returns = standardize(array![5.0]);
    assert_eq!(returns, array![5.0]);
}

#[test]
fn test_standardize_constant_sequence_centered_only() {
    // zero spread: centered but not divided by zero
    let returns = standardize(array![2.0, 2.0, 2.0]);
    assert_eq!(returns, array![0.0, 0.0, 0.0]);
}
