//! Heart spawner.
//!
//! Every heart follows the same lifecycle: build it with randomized
//! parameters, attach it to a host container, then detach it once its
//! lifetime has elapsed. The removal deadline is fixed at attach time, so
//! a container never holds a heart longer than its lifetime no matter how
//! many hearts are spawned.
//!
//! Two entry points share that lifecycle:
//! - [`DecorationSpawner::spawn_continuous`] drives the background rain on an
//!   interval and returns a [`SpawnerHandle`] for teardown.
//! - [`DecorationSpawner::spawn_once`] drops a single rising heart.
//!
//! Both must be called from within a tokio runtime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::config::{BurstConfig, CardConfig, RainConfig, MAX_ANIMATION_SECS};
use crate::container::DecorationHost;
use crate::decoration::{Decoration, DecorationId, DecorationKind, Placement};
use crate::error::CardResult;

/// Shortest interval accepted by `spawn_continuous`
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Creates hearts and schedules their removal.
pub struct DecorationSpawner {
    rain: RainConfig,
    burst: BurstConfig,
    palette: Vec<String>,
    rng: Mutex<StdRng>,
    next_id: AtomicU64,
    spawned: AtomicU64,
}

impl DecorationSpawner {
    /// Build a spawner from a validated copy of `config`.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    pub fn new(config: &CardConfig) -> CardResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            rain: config.rain.clone(),
            burst: config.burst.clone(),
            palette: config.palette.clone(),
            rng: Mutex::new(rng),
            next_id: AtomicU64::new(0),
            spawned: AtomicU64::new(0),
        })
    }

    /// Total hearts attached by this spawner so far.
    pub fn spawned_count(&self) -> u64 {
        self.spawned.load(Ordering::Relaxed)
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Build a rain heart without attaching it.
    pub fn falling_heart(&self) -> Decoration {
        let (size_px, left, duration, delay, color) = {
            let mut rng = self.rng.lock();
            let size = self.rain.size_px;
            let duration = self.rain.duration_secs;
            let delay = self.rain.delay_secs;
            (
                rng.random_range(size.min..=size.max),
                rng.random_range(0.0..100.0),
                rng.random_range(duration.min..=duration.max),
                rng.random_range(delay.min..=delay.max),
                self.pick_color(&mut rng),
            )
        };

        let animation_duration = seconds(duration);
        let animation_delay = seconds(delay);
        Decoration {
            id: self.next_id(),
            kind: DecorationKind::Falling,
            size_px,
            left: Placement::Viewport(left),
            color,
            animation_duration,
            animation_delay,
            lifetime: animation_duration + animation_delay,
        }
    }

    /// Build a rising heart for a container of the given measured width.
    pub fn rising_heart(&self, measured_width: Option<f64>) -> Decoration {
        let width = self.resolve_width(measured_width);
        let (size_px, fraction, color) = {
            let mut rng = self.rng.lock();
            let size = self.burst.size_px;
            (
                rng.random_range(size.min..=size.max),
                rng.random::<f64>(),
                self.pick_color(&mut rng),
            )
        };

        let room = (width - f64::from(size_px)).max(0.0);
        let lifetime = self.burst.lifetime();
        Decoration {
            id: self.next_id(),
            kind: DecorationKind::Rising,
            size_px,
            left: Placement::Pixels(fraction * room),
            color,
            animation_duration: lifetime,
            animation_delay: Duration::ZERO,
            lifetime,
        }
    }

    /// Attach one rising heart to `host` and remove it after the burst
    /// lifetime.
    pub fn spawn_once(&self, host: &Arc<dyn DecorationHost>) -> DecorationId {
        let heart = self.rising_heart(host.measured_width());
        self.place(host, heart)
    }

    /// Attach a rain heart to `host` every `interval` until the returned
    /// handle is cancelled or dropped.
    ///
    /// The first heart appears one interval after the call. Hearts already
    /// attached when the handle is cancelled still run out their lifetime.
    pub fn spawn_continuous(
        self: &Arc<Self>,
        host: Arc<dyn DecorationHost>,
        interval: Duration,
    ) -> SpawnerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let spawner = Arc::clone(self);
        let period = interval.max(MIN_INTERVAL);
        let start = Instant::now() + period;

        tokio::spawn(async move {
            let mut ticker = time::interval_at(start, period);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        let heart = spawner.falling_heart();
                        spawner.place(&host, heart);
                    }
                }
            }
            tracing::debug!("Heart rain stopped");
        });

        tracing::debug!(interval_ms = period.as_millis() as u64, "Heart rain started");
        SpawnerHandle { token }
    }

    fn place(&self, host: &Arc<dyn DecorationHost>, heart: Decoration) -> DecorationId {
        let id = heart.id;
        let deadline = Instant::now() + heart.lifetime;
        host.attach(heart);
        self.spawned.fetch_add(1, Ordering::Relaxed);

        let host = Arc::clone(host);
        tokio::spawn(async move {
            time::sleep_until(deadline).await;
            host.detach(id);
        });
        id
    }

    fn resolve_width(&self, measured: Option<f64>) -> f64 {
        match measured {
            Some(width) if width.is_finite() && width > 0.0 => width,
            _ => self.burst.fallback_width_px,
        }
    }

    fn pick_color(&self, rng: &mut StdRng) -> String {
        self.palette[rng.random_range(0..self.palette.len())].clone()
    }

    fn next_id(&self) -> DecorationId {
        DecorationId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

/// Animation time as a `Duration`, clamped to `[0, MAX_ANIMATION_SECS]`.
fn seconds(value: f64) -> Duration {
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_ANIMATION_SECS)
    };
    Duration::try_from_secs_f64(clamped).unwrap_or_default()
}

/// Stops a continuous spawner when cancelled or dropped.
#[derive(Debug)]
pub struct SpawnerHandle {
    token: CancellationToken,
}

impl SpawnerHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for SpawnerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
