use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use xornet::{
    train_from_source, DataError, Mlp, Sgd, StreamConfig, TextMinibatchSource, TrainConfig,
    Trainer,
};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn write(name: &str, contents: &str) -> TempFile {
        let path = std::env::temp_dir().join(format!("xornet-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        TempFile { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

const XOR_FILE: &str = "\
|features 0 0 |labels 0
|features 1 0 |labels 1
|features 0 1 |labels 1
|features 1 1 |labels 0
";

fn xor_source(path: &std::path::Path) -> TextMinibatchSource {
    TextMinibatchSource::from_file(
        path,
        StreamConfig::new("features", 2),
        StreamConfig::new("labels", 1),
    )
    .unwrap()
}

/// A batch spanning the whole file flags the end of the sweep and carries
/// the records in file order.
#[test]
fn full_file_batch_flags_sweep_end() {
    let file = TempFile::write("full-batch.txt", XOR_FILE);
    let mut source = xor_source(&file.path);
    assert_eq!(source.len(), 4);

    let batch = source.next_minibatch(4);
    assert_eq!(batch.samples, 4);
    assert!(batch.sweep_end);
    assert_eq!(batch.inputs.row(1), &[1.0, 0.0]);
    assert_eq!(batch.labels.row(1), &[1.0]);

    // The source repeats indefinitely; the next sweep starts over.
    let again = source.next_minibatch(4);
    assert!(again.sweep_end);
    assert_eq!(again.inputs.row(0), &[0.0, 0.0]);
}

/// With a batch size that does not divide the file, the sweep flag is set
/// exactly on the batches that consume the file's last record.
#[test]
fn partial_batches_wrap_and_flag_sweeps() {
    let file = TempFile::write("partial-batch.txt", XOR_FILE);
    let mut source = xor_source(&file.path);

    let first = source.next_minibatch(3); // records 0,1,2
    assert!(!first.sweep_end);

    let second = source.next_minibatch(3); // records 3,0,1 — wraps
    assert!(second.sweep_end);
    assert_eq!(second.inputs.row(0), &[1.0, 1.0]);
    assert_eq!(second.inputs.row(1), &[0.0, 0.0]);
}

/// Epochs decrement only on sweep completion: a file holding two copies of
/// the dataset needs two size-4 batches per epoch.
#[test]
fn epochs_count_sweeps_not_batches() {
    let doubled = format!("{XOR_FILE}{XOR_FILE}");
    let file = TempFile::write("doubled.txt", &doubled);
    let mut source = xor_source(&file.path);

    assert_eq!(source.len(), 8);
    assert!(!source.next_minibatch(4).sweep_end);
    assert!(source.next_minibatch(4).sweep_end);
    assert!(!source.next_minibatch(4).sweep_end);
    assert!(source.next_minibatch(4).sweep_end);

    // Two epochs of file-backed training complete and report metrics.
    let mut rng = StdRng::seed_from_u64(21);
    let mut trainer = Trainer::new(Mlp::new(&[2], 4, 1, &mut rng), Sgd::new(0.1));
    let last = train_from_source(
        &mut trainer,
        &mut source,
        &TrainConfig::new(2, 4, usize::MAX),
    );
    assert_eq!(last.unwrap().samples, 4);
}

#[test]
fn malformed_value_is_an_error() {
    let file = TempFile::write("malformed.txt", "|features 0 oops |labels 0\n");
    let err = TextMinibatchSource::from_file(
        &file.path,
        StreamConfig::new("features", 2),
        StreamConfig::new("labels", 1),
    )
    .unwrap_err();
    assert!(matches!(err, DataError::Malformed { line: 1, .. }));
}

#[test]
fn missing_stream_is_an_error() {
    let file = TempFile::write("missing-stream.txt", "|features 0 0\n");
    let err = TextMinibatchSource::from_file(
        &file.path,
        StreamConfig::new("features", 2),
        StreamConfig::new("labels", 1),
    )
    .unwrap_err();
    assert!(matches!(err, DataError::MissingStream { .. }));
}

#[test]
fn wrong_width_is_an_error() {
    let file = TempFile::write("wrong-width.txt", "|features 0 0 1 |labels 0\n");
    let err = TextMinibatchSource::from_file(
        &file.path,
        StreamConfig::new("features", 2),
        StreamConfig::new("labels", 1),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DataError::DimensionMismatch { expected: 2, found: 3, .. }
    ));
}

#[test]
fn empty_file_is_an_error() {
    let file = TempFile::write("empty.txt", "\n\n");
    let err = TextMinibatchSource::from_file(
        &file.path,
        StreamConfig::new("features", 2),
        StreamConfig::new("labels", 1),
    )
    .unwrap_err();
    assert!(matches!(err, DataError::Empty { .. }));
}
