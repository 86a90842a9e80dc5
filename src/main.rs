mod scenes;

use crate::scenes::SceneKind;
use anyhow::{ensure, Context, Result};
use candela::aliases::{RandGen, Vec3};
use candela::scene::Scene;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Sender};
use std::time::Instant;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "candela",
    about = "Monte Carlo path tracer with light-importance sampling"
)]
struct Opt {
    /// Image width in pixels
    #[structopt(long, default_value = "600")]
    width: u32,
    /// Image height in pixels
    #[structopt(long, default_value = "600")]
    height: u32,
    /// Samples per pixel, split evenly across the workers
    #[structopt(short = "s", long, default_value = "1000")]
    samples: u32,
    /// Maximum path length per sample
    #[structopt(long, default_value = "50")]
    depth: i32,
    /// Worker thread count
    #[structopt(short = "j", long, default_value = "4")]
    threads: u32,
    /// Scene to render: cornell or spheres
    #[structopt(long, default_value = "cornell")]
    scene: SceneKind,
    /// Base seed of the per-worker random streams
    #[structopt(long, default_value = "0")]
    seed: u64,
    /// Write an intermediate image every this many samples per pixel
    #[structopt(long, default_value = "100")]
    snapshot: u32,
    /// Output image path
    #[structopt(short = "o", long, default_value = "render.png", parse(from_os_str))]
    output: PathBuf,
}

/// Running sum of radiance samples per pixel.
struct Film {
    width: u32,
    height: u32,
    samples: u32,
    sum: Vec<Vec3>,
}

impl Film {
    fn new(width: u32, height: u32) -> Self {
        Film {
            width,
            height,
            samples: 0,
            sum: vec![Vec3::zeros(); (width * height) as usize],
        }
    }
    fn take(&mut self) -> Film {
        std::mem::replace(self, Film::new(self.width, self.height))
    }
    fn merge(&mut self, rhs: Film) {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        self.samples += rhs.samples;
        for (acc, add) in self.sum.iter_mut().zip(rhs.sum.iter()) {
            *acc += *add;
        }
    }
    /// Averages, gamma-corrects (sqrt) and writes an 8-bit RGBA PNG.
    fn write_png(&self, path: &Path) -> Result<()> {
        ensure!(self.samples > 0, "no samples accumulated yet");
        let scale = 1.0 / self.samples as f32;
        let mut buffer = vec![0u8; (self.width * self.height * 4) as usize];
        for (idx, col) in self.sum.iter().enumerate() {
            for channel in 0..3 {
                let value = (scale * col[channel]).max(0.0).sqrt().min(1.0);
                buffer[idx * 4 + channel] = (255.99 * value) as u8;
            }
            buffer[idx * 4 + 3] = 255;
        }
        image::save_buffer(
            path,
            &buffer,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
        .with_context(|| format!("writing {}", path.display()))
    }
}

/// One worker: jittered camera rays, one radiance estimate per sample,
/// partial sums shipped through the channel every `report_every` rounds.
fn trace_samples(
    scene: &Scene,
    width: u32,
    height: u32,
    samples: u32,
    depth: i32,
    seed: u64,
    report_every: u32,
    tx: Sender<Film>,
) {
    let mut rng = RandGen::seed_from_u64(seed);
    let mut film = Film::new(width, height);
    for _ in 0..samples {
        for i in 0..width {
            for j in 0..height {
                let s = (i as f32 + rng.gen::<f32>()) / width as f32;
                let t = (j as f32 + rng.gen::<f32>()) / height as f32;
                let ray = scene.camera.get_ray(s, t, &mut rng);
                let color = candela::radiance(&ray, scene, &mut rng, depth);
                let idx = (i + (height - j - 1) * width) as usize;
                film.sum[idx] += color;
            }
        }
        film.samples += 1;
        if film.samples % report_every == 0 {
            // a closed channel means the run is shutting down
            if tx.send(film.take()).is_err() {
                return;
            }
        }
    }
    if film.samples > 0 {
        let _ = tx.send(film);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    ensure!(opt.threads > 0, "at least one worker thread is required");
    ensure!(
        opt.samples % opt.threads == 0,
        "--samples must be a multiple of --threads"
    );

    let start = Instant::now();
    let aspect = opt.width as f32 / opt.height as f32;
    let scene = scenes::build(opt.scene, aspect);
    info!(
        "scene ready after {:.3}s; {}x{} pixels, {} spp on {} workers, depth {}",
        start.elapsed().as_secs_f32(),
        opt.width,
        opt.height,
        opt.samples,
        opt.threads,
        opt.depth
    );

    let samples_per_worker = opt.samples / opt.threads;
    let report_every = (opt.snapshot / opt.threads).max(1);

    let film = crossbeam::scope(|scope| {
        let (tx, rx) = channel::<Film>();
        for worker in 0..opt.threads {
            let tx = tx.clone();
            let scene = &scene;
            let opt = &opt;
            let seed = opt.seed ^ (worker as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
            scope.spawn(move |_| {
                trace_samples(
                    scene,
                    opt.width,
                    opt.height,
                    samples_per_worker,
                    opt.depth,
                    seed,
                    report_every,
                    tx,
                );
            });
        }
        drop(tx); // the merge loop below ends once every worker is done

        let progress = ProgressBar::new(opt.samples as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} spp")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        let mut film = Film::new(opt.width, opt.height);
        let mut since_snapshot = 0;
        for partial in rx {
            since_snapshot += partial.samples;
            film.merge(partial);
            progress.set_position(film.samples as u64);
            if since_snapshot >= opt.snapshot {
                since_snapshot = 0;
                debug!("snapshot at {} spp", film.samples);
                if let Err(err) = film.write_png(&opt.output) {
                    warn!("snapshot failed: {:#}", err);
                }
            }
        }
        progress.finish_and_clear();
        film
    })
    .map_err(|_| anyhow::anyhow!("a worker thread panicked"))?;

    film.write_png(&opt.output)?;
    info!(
        "{} spp in {:.3}s -> {}",
        film.samples,
        start.elapsed().as_secs_f32(),
        opt.output.display()
    );
    Ok(())
}
