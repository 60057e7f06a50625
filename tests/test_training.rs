use rand::rngs::StdRng;
use rand::SeedableRng;

use xornet::{shuffle, should_report, xor_dataset, Sample};

/// Shuffling permutes the dataset: same four samples, no loss, no
/// duplication.
#[test]
fn shuffle_is_a_permutation() {
    let original = xor_dataset();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len());
        for sample in &original {
            let in_original = original.iter().filter(|s| *s == sample).count();
            let in_shuffled = shuffled.iter().filter(|s| *s == sample).count();
            assert_eq!(in_original, in_shuffled);
        }
    }
}

/// Progress is reported every N minibatches and only after a step that
/// consumed at least one sample.
#[test]
fn report_gate_matches_frequency_and_sample_count() {
    assert!(should_report(0, 50, 4));
    assert!(should_report(50, 50, 4));
    assert!(should_report(100, 50, 4));

    assert!(!should_report(1, 50, 4));
    assert!(!should_report(49, 50, 4));
    assert!(!should_report(51, 50, 4));

    // A step that consumed nothing never reports, frequency hit or not.
    assert!(!should_report(0, 50, 0));
    assert!(!should_report(50, 50, 0));
}

/// The fixed dataset is the full XOR truth table.
#[test]
fn dataset_is_the_xor_truth_table() {
    let dataset = xor_dataset();
    assert_eq!(dataset.len(), 4);

    for Sample { input, label } in &dataset {
        let expected = if (input[0] != 0.0) != (input[1] != 0.0) { 1.0 } else { 0.0 };
        assert_eq!(label[0], expected);
    }
}
