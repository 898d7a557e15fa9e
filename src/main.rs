use std::{env, time::Duration};

use anyhow::{Context, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};
use tokio::{signal, time};
use tokio_util::sync::CancellationToken;

use logistic_trainer::{
    Outbox, Snapshot, TrainingConfig, TrainingLoop,
    data::{Bounds, LabeledPoint, RawDataset},
};

const POINTS: usize = 500;
const FRAME: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = match env::args().nth(1) {
        Some(path) => TrainingConfig::from_json_file(&path)
            .with_context(|| format!("loading config from '{path}'"))?,
        None => TrainingConfig::default(),
    };

    let shape = env::var("DATASET").unwrap_or_else(|_| "linear".to_string());
    let raw = synthetic(&shape, POINTS, cfg.seed)?;
    let bounds = raw.bounds();
    info!("generated {} {shape} points, bounds {bounds:?}", raw.len());

    let outbox = Outbox::new();
    let cancel = CancellationToken::new();
    let mut training = TrainingLoop::new(cfg, &raw)?.spawn(outbox.clone(), cancel.clone());

    let mut frames = time::interval(FRAME);
    let mut shown: Option<Snapshot> = None;

    loop {
        tokio::select! {
            joined = &mut training => {
                let (_, ret) = joined?;
                if let Some(snapshot) = outbox.take() {
                    shown = Some(snapshot);
                }
                if let Some(snapshot) = &shown {
                    draw(snapshot, bounds);
                }

                let report = ret?;
                info!(
                    "{} after {} epochs, accuracy {:.4}",
                    report.state, report.epochs, report.accuracy
                );
                break;
            }
            _ = frames.tick() => {
                if let Some(snapshot) = outbox.take() {
                    draw(&snapshot, bounds);
                    shown = Some(snapshot);
                }
            }
            _ = signal::ctrl_c() => {
                info!("received ctrl-c, stopping after the current epoch");
                cancel.cancel();
            }
        }
    }

    Ok(())
}

/// Stands in for the plotting front end: logs what would be drawn this frame.
fn draw(snapshot: &Snapshot, bounds: Bounds) {
    match snapshot.boundary_line(bounds.min.x0, bounds.max.x0) {
        Some((a, b)) => info!(
            "epoch {}: accuracy {:.2}, boundary from ({:.2}, {:.2}) to ({:.2}, {:.2})",
            snapshot.epoch(),
            snapshot.accuracy(),
            a.x0,
            a.x1,
            b.x0,
            b.x1
        ),
        None => info!(
            "epoch {}: accuracy {:.2}, w={} b={:.4}",
            snapshot.epoch(),
            snapshot.accuracy(),
            snapshot.weights(),
            snapshot.bias()
        ),
    }
}

/// Labeled points on `[0, 100)²`: `linear` is split by `x0 + x1 > 100`, `circle` labels
/// the points within 30 of the center.
fn synthetic(shape: &str, n: usize, seed: u64) -> anyhow::Result<RawDataset> {
    let label: fn(f64, f64) -> bool = match shape {
        "linear" => |x0: f64, x1: f64| x0 + x1 > 100.,
        "circle" => |x0: f64, x1: f64| (x0 - 50.).powi(2) + (x1 - 50.).powi(2) < 900.,
        other => bail!("unknown dataset shape '{other}', expected 'linear' or 'circle'"),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let coord = Uniform::<f64>::new(0., 100.)?;

    let points = (0..n)
        .map(|_| {
            let (x0, x1) = (coord.sample(&mut rng), coord.sample(&mut rng));
            LabeledPoint::new(x0, x1, u8::from(label(x0, x1)))
        })
        .collect();

    Ok(RawDataset::new(points)?)
}
