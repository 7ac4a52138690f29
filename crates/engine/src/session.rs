//! Session driver.
//!
//! Bridges the synchronous [`Game`] with async producers and observers. One
//! task owns the game and `select!`s over a fixed-rate tick and a bounded
//! command channel, so gravity ticks and player commands are applied strictly
//! one after another. After every change the task publishes a snapshot on a
//! `watch` channel and forwards the raised events.

use std::time::Duration;

use anyhow::Context;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};

use spintris_core::{Game, GameSnapshot};
use spintris_types::{Command, GameEvent, TICK_MS};

/// Session driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Period of the gravity clock.
    pub tick_ms: u32,
    /// Commands buffered before `send` starts dropping them.
    pub command_queue: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            command_queue: 32,
        }
    }
}

impl SessionConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let tick_ms = env::var("SPINTRIS_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tick_ms);
        let command_queue = env::var("SPINTRIS_COMMAND_QUEUE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.command_queue);

        Self {
            tick_ms: tick_ms.max(1),
            command_queue: command_queue.max(1),
        }
    }
}

/// Run `game` until the command channel closes, then hand it back.
pub async fn run_session(
    mut game: Game,
    config: SessionConfig,
    mut commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<GameEvent>,
    snapshots: watch::Sender<GameSnapshot>,
) -> Game {
    game.start();
    publish(&mut game, &events, &snapshots);
    info!(
        tick_ms = config.tick_ms,
        episode = game.episode_id(),
        "session started"
    );

    let mut ticker = interval(Duration::from_millis(u64::from(config.tick_ms.max(1))));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    let mut last = Instant::now();

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                if game.apply(command) {
                    publish(&mut game, &events, &snapshots);
                }
            }
            _ = ticker.tick() => {
                // Whole milliseconds only; the remainder carries into the next tick.
                let ms = Instant::now().saturating_duration_since(last).as_millis() as u64;
                last += Duration::from_millis(ms);
                let elapsed = u32::try_from(ms).unwrap_or(u32::MAX);
                if game.advance(elapsed) {
                    publish(&mut game, &events, &snapshots);
                }
            }
        }
    }

    info!(
        score = game.score(),
        episode = game.episode_id(),
        "session stopped"
    );
    game
}

fn publish(
    game: &mut Game,
    events: &mpsc::UnboundedSender<GameEvent>,
    snapshots: &watch::Sender<GameSnapshot>,
) {
    for event in game.take_events() {
        // Observers are optional.
        let _ = events.send(event);
    }
    snapshots.send_modify(|s| game.snapshot_into(s));
}

/// A session task running on the current tokio runtime.
pub struct Session {
    pub commands: mpsc::Sender<Command>,
    pub events: mpsc::UnboundedReceiver<GameEvent>,
    pub snapshots: watch::Receiver<GameSnapshot>,
    pub task: JoinHandle<Game>,
}

impl Session {
    /// Spawn the driver task. Must be called from within a tokio runtime.
    pub fn spawn(game: Game, config: SessionConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(config.command_queue.max(1));
        let (event_tx, event_rx) = mpsc::unbounded_channel::<GameEvent>();
        let (snap_tx, snap_rx) = watch::channel(game.snapshot());

        let task = tokio::spawn(run_session(game, config, cmd_rx, event_tx, snap_tx));

        Self {
            commands: cmd_tx,
            events: event_rx,
            snapshots: snap_rx,
            task,
        }
    }
}

/// Session running on its own runtime, for synchronous callers.
pub struct SessionHandle {
    rt: Runtime,
    commands: mpsc::Sender<Command>,
    events: mpsc::UnboundedReceiver<GameEvent>,
    snapshots: watch::Receiver<GameSnapshot>,
    task: JoinHandle<Game>,
}

impl SessionHandle {
    pub fn start(game: Game, config: SessionConfig) -> anyhow::Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("spintris-session")
            .enable_all()
            .build()
            .context("failed to build tokio runtime")?;

        let session = {
            let _guard = rt.enter();
            Session::spawn(game, config)
        };

        Ok(Self {
            rt,
            commands: session.commands,
            events: session.events,
            snapshots: session.snapshots,
            task: session.task,
        })
    }

    /// Queue a command. Returns false when the queue is full or closed.
    pub fn send(&self, command: Command) -> bool {
        match self.commands.try_send(command) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(command)) => {
                debug!(command = command.as_str(), "command queue full, dropping");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    pub fn try_recv_event(&mut self) -> Option<GameEvent> {
        self.events.try_recv().ok()
    }

    /// Whether a snapshot newer than the last [`SessionHandle::snapshot`] exists.
    pub fn has_changed(&self) -> bool {
        self.snapshots.has_changed().unwrap_or(false)
    }

    /// Latest published snapshot.
    pub fn snapshot(&mut self) -> GameSnapshot {
        self.snapshots.borrow_and_update().clone()
    }

    /// Close the command channel and wait for the game to come back.
    pub fn shutdown(self) -> anyhow::Result<Game> {
        let Self {
            rt, commands, task, ..
        } = self;
        drop(commands);
        rt.block_on(task).context("session task failed")
    }
}
