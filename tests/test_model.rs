use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use xornet::{BceLoss, Device, DeviceError, DeviceKind, Mlp};

/// A 2-input model with a 1-wide output head produces a single sigmoid
/// probability.
#[test]
fn forward_produces_one_probability() {
    let mut rng = StdRng::seed_from_u64(1);
    let model = Mlp::new(&[2], 4, 1, &mut rng);
    assert_eq!(model.input_dim(), 2);
    assert_eq!(model.output_dim(), 1);

    let output = model.forward(&[1.0, 0.0]);
    assert_eq!(output.len(), 1);
    assert!(output[0] > 0.0 && output[0] < 1.0);
}

/// Freshly built layers carry zero biases: with an all-zero input, tanh of
/// the hidden pre-activation is zero and the output is exactly sigmoid(0).
#[test]
fn biases_start_at_zero() {
    let mut rng = StdRng::seed_from_u64(2);
    let model = Mlp::new(&[2], 4, 1, &mut rng);
    let output = model.forward(&[0.0, 0.0]);
    assert_eq!(output[0], 0.5);
}

/// A reloaded model computes the same function as the one that was saved.
#[test]
fn saved_model_reloads_identically() {
    let path = std::env::temp_dir().join(format!("xornet-model-{}.json", std::process::id()));

    let mut rng = StdRng::seed_from_u64(3);
    let model = Mlp::new(&[2], 4, 1, &mut rng);
    model.save_json(&path).unwrap();
    let reloaded = Mlp::load_json(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        assert_eq!(model.forward(&input), reloaded.forward(&input));
    }
}

#[test]
fn bce_of_an_even_guess_is_ln_two() {
    let loss = BceLoss::loss(&[0.5], &[1.0]);
    assert_abs_diff_eq!(loss, std::f64::consts::LN_2, epsilon = 1e-9);
}

#[test]
fn cpu_backend_is_acquirable() {
    let device = Device::acquire(DeviceKind::Cpu).unwrap();
    assert_eq!(device.kind(), DeviceKind::Cpu);
    assert_eq!(device.to_string(), "CPU");
}

/// There is no accelerator backend in this build; asking for one fails at
/// acquisition time.
#[test]
fn gpu_backend_is_unavailable() {
    assert!(matches!(
        Device::acquire(DeviceKind::Gpu),
        Err(DeviceError::NoAccelerator)
    ));
}
