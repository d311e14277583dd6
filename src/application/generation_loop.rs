//! Background generation loop.
//!
//! Each run lives on its own thread, owns its alive set, and reports ticks
//! through a per-run outbox. The owning thread forwards those ticks to
//! subscribers in [`GenerationLoop::pump`]. Stopping drops the outbox, so
//! nothing from a stopped run can reach a subscriber. A stopped worker is not
//! waited on; it exits after its in-flight tick and is reaped later.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError, select, tick, unbounded};
use tracing::{debug, error, info, warn};

use super::{StartMessage, TickMessage};
use crate::domain::next_generation;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A registered listener. Ticks arrive after the owner calls `pump`.
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<TickMessage>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn try_recv(&self) -> Option<TickMessage> {
        self.receiver.try_recv().ok()
    }

    /// Everything delivered so far, oldest first
    pub fn drain(&self) -> impl Iterator<Item = TickMessage> + '_ {
        self.receiver.try_iter()
    }
}

struct Worker {
    stop_tx: Sender<()>,
    outbox: Receiver<TickMessage>,
    handle: JoinHandle<()>,
}

enum LoopState {
    Idle,
    Running(Worker),
}

pub struct GenerationLoop {
    tick_interval: Duration,
    state: LoopState,
    subscribers: Vec<(SubscriptionId, Sender<TickMessage>)>,
    next_subscription: u64,
    /// Stopped workers that may still be finishing a tick
    retired: Vec<JoinHandle<()>>,
}

impl GenerationLoop {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            state: LoopState::Idle,
            subscribers: Vec::new(),
            next_subscription: 0,
            retired: Vec::new(),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let (tx, rx) = unbounded();
        self.subscribers.push((id, tx));
        debug!(?id, "subscriber added");

        Subscription { id, receiver: rx }
    }

    /// Returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        let removed = self.subscribers.len() != before;
        if removed {
            debug!(?id, "subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Idle -> Running. Ignored while a run is active.
    pub fn start(&mut self, message: StartMessage) {
        if self.is_running() {
            warn!("start requested while running; stop first");
            return;
        }

        info!(
            dimensions = %message.dimensions,
            alive = message.alive_cells.len(),
            generation = message.generation,
            interval_ms = self.tick_interval.as_millis() as u64,
            "generation loop starting"
        );

        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
        let (outbox_tx, outbox) = unbounded();
        let interval = self.tick_interval;
        let handle = thread::spawn(move || run_worker(message, interval, stop_rx, outbox_tx));

        self.state = LoopState::Running(Worker {
            stop_tx,
            outbox,
            handle,
        });
    }

    /// Running -> Idle. Once this returns, no further ticks are delivered.
    ///
    /// Never waits for the worker: a tick in progress finishes on its own
    /// thread and its result is dropped with the outbox.
    pub fn stop(&mut self) {
        let LoopState::Running(worker) = std::mem::replace(&mut self.state, LoopState::Idle) else {
            return;
        };

        // Disconnecting the stop channel wakes the worker's select;
        // dropping the outbox makes its next send fail.
        drop(worker.stop_tx);
        let discarded = worker.outbox.try_iter().count();
        drop(worker.outbox);
        self.retired.push(worker.handle);
        self.reap_retired();

        info!(discarded, "generation loop stopped");
    }

    /// Join workers that already exited, without blocking on the others
    fn reap_retired(&mut self) {
        let (finished, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.retired)
            .into_iter()
            .partition(|handle| handle.is_finished());
        self.retired = pending;

        for handle in finished {
            if handle.join().is_err() {
                error!("generation worker panicked");
            }
        }
    }

    /// Forward ticks from the active run to all subscribers.
    ///
    /// Subscribers whose receiving side is gone are dropped. Returns the
    /// number of ticks forwarded.
    pub fn pump(&mut self) -> usize {
        if !self.retired.is_empty() {
            self.reap_retired();
        }

        let LoopState::Running(worker) = &self.state else {
            return 0;
        };

        let mut forwarded = 0;
        let worker_gone = loop {
            match worker.outbox.try_recv() {
                Ok(message) => {
                    self.subscribers
                        .retain(|(_, tx)| tx.send(message.clone()).is_ok());
                    forwarded += 1;
                }
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };

        if worker_gone {
            warn!("generation worker exited unexpectedly");
            self.stop();
        }
        forwarded
    }
}

impl Default for GenerationLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Drop for GenerationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker(
    message: StartMessage,
    interval: Duration,
    stop_rx: Receiver<()>,
    outbox: Sender<TickMessage>,
) {
    let StartMessage {
        alive_cells: mut alive,
        dimensions,
        mut generation,
    } = message;
    let ticker = tick(interval);

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticker) -> _ => {
                alive = next_generation(&alive, dimensions);
                generation += 1;
                debug!(generation, alive = alive.len(), "tick");

                let message = TickMessage {
                    next_alive_cells: alive.clone(),
                    generation,
                };
                if outbox.send(message).is_err() {
                    break;
                }
            }
        }
    }
}
