use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use xornet::{
    print_predictions, train_from_memory, train_from_source, xor_dataset, Device, DeviceKind,
    Mlp, Sgd, StreamConfig, TextMinibatchSource, TrainConfig, Trainer,
};

/// Trains a two-layer perceptron on the XOR truth table and prints its
/// predictions.
#[derive(Parser, Debug)]
#[command(name = "xornet")]
struct Cli {
    /// Compute backend for the run.
    #[arg(long, value_enum, default_value_t = DeviceKind::Cpu)]
    device: DeviceKind,

    /// Number of training epochs.
    #[arg(long, default_value_t = 1000)]
    epochs: usize,

    /// Hidden layer width.
    #[arg(long, default_value_t = 4)]
    hidden: usize,

    /// Per-sample learning rate.
    #[arg(long, default_value_t = 0.1)]
    learning_rate: f64,

    /// Print progress every N minibatches.
    #[arg(long, default_value_t = 50)]
    report_every: usize,

    /// Records per minibatch when training from a file.
    #[arg(long, default_value_t = 4)]
    batch_size: usize,

    /// Train from a tagged-stream text file (e.g. data/XORdataset.txt)
    /// instead of the built-in in-memory dataset.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Seed for the run's random generator (initialization and shuffling).
    /// Defaults to a fresh random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Save the trained model parameters to a JSON file after evaluation.
    #[arg(long)]
    save_model: Option<PathBuf>,

    /// Exit immediately instead of waiting for Enter.
    #[arg(long)]
    no_wait: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("xornet=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let device = Device::acquire(cli.device)?;
    println!("Device {device}");
    println!();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::info!(
        %device,
        seed,
        epochs = cli.epochs,
        hidden = cli.hidden,
        learning_rate = cli.learning_rate,
        "starting training run"
    );

    let model = Mlp::new(&[2], cli.hidden, 1, &mut rng);
    let mut trainer = Trainer::new(model, Sgd::new(cli.learning_rate));
    let config = TrainConfig::new(cli.epochs, cli.batch_size, cli.report_every);

    match &cli.data_file {
        Some(path) => {
            let mut source = TextMinibatchSource::from_file(
                path,
                StreamConfig::new("features", 2),
                StreamConfig::new("labels", 1),
            )?;
            tracing::info!(path = %path.display(), records = source.len(), "file-backed training");
            train_from_source(&mut trainer, &mut source, &config);
        }
        None => {
            let dataset = xor_dataset();
            train_from_memory(&mut trainer, &dataset, &config, &mut rng);
        }
    }

    print_predictions(&trainer);

    if let Some(path) = &cli.save_model {
        trainer
            .model()
            .save_json(path)
            .with_context(|| format!("saving model to {}", path.display()))?;
        tracing::info!(path = %path.display(), "model saved");
    }

    println!();
    println!("End");

    if !cli.no_wait {
        wait_for_enter()?;
    }

    Ok(())
}

/// Blocks until the user presses Enter. UX convenience carried over from
/// the original program; skipped with --no-wait.
fn wait_for_enter() -> Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(())
}
