//! The sync actor: an event loop over panel clicks plus the timer chains
//! it fans out.
//!
//! Click handlers must return immediately, so everything slow is
//! fire-and-forget: each event spawns its reconciliation and focus tasks
//! onto the current `LocalSet` and the loop goes back to waiting. Spawned
//! chains are never cancelled — a timer that was scheduled will fire — but
//! commits carry a generation stamp and a stale commit is skipped, so
//! rapid re-clicks resolve to the *newest* click's state instead of
//! whichever timer happens to land last.

use std::cell::Cell;
use std::rc::Rc;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::debug;

use crate::host::PanelHost;
use crate::panel::{Control, Visibility};

/// Events fed to the sync actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Establish bindings and an initial stable state, no click required.
    Startup,
    /// The user activated one of the panel controls.
    Clicked(Control),
}

/// Cloneable handle feeding events to a running sync actor.
///
/// Sends are fire-and-forget: if the actor is gone the page is gone too,
/// and a dropped event is exactly as harmless as a click on a dead page.
#[derive(Clone)]
pub struct SyncHandle {
    tx: mpsc::UnboundedSender<PanelEvent>,
}

impl SyncHandle {
    /// Run the startup reconciliation (bindings + initial stable state).
    pub fn startup(&self) {
        self.send(PanelEvent::Startup);
    }

    /// The expand control was clicked.
    pub fn open_clicked(&self) {
        self.send(PanelEvent::Clicked(Control::Open));
    }

    /// The collapse control was clicked.
    pub fn close_clicked(&self) {
        self.send(PanelEvent::Clicked(Control::Close));
    }

    fn send(&self, event: PanelEvent) {
        if self.tx.send(event).is_err() {
            debug!(?event, "sync actor gone; event dropped");
        }
    }
}

/// The actor itself. Owns the host view and the generation counter shared
/// with in-flight commit tasks.
struct SyncActor<H> {
    host: Rc<H>,
    generation: Rc<Cell<u64>>,
}

impl<H: PanelHost + 'static> SyncActor<H> {
    /// Process events until the channel closes.
    async fn run(self, mut rx: mpsc::UnboundedReceiver<PanelEvent>) {
        while let Some(event) = rx.recv().await {
            self.handle(event);
        }
        debug!("sync actor shutting down: channel closed");
    }

    /// Event dispatch. Synchronous — all waiting happens in spawned tasks.
    fn handle(&self, event: PanelEvent) {
        match event {
            PanelEvent::Startup => {
                self.host.install();
                self.reconcile();
            }
            PanelEvent::Clicked(control) => {
                // Optimistic hint first, synchronously with the click: the
                // controls' aria-expanded must not wait out the animation.
                self.host.hint_expanded(control.implies_expanded());
                self.reconcile();
                self.schedule_focus(control);
            }
        }
    }

    /// Two-phase reconciliation.
    ///
    /// Phase 1 waits one settle tick, then captures and clears the
    /// transient attribute — read strictly before clear. Phase 2 waits the
    /// direction-dependent commit delay and writes the stable attribute,
    /// unless a newer reconciliation was scheduled meanwhile.
    fn reconcile(&self) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let host = Rc::clone(&self.host);
        let newest = Rc::clone(&self.generation);
        tokio::task::spawn_local(async move {
            let settle = host.profile().settle_delay();
            sleep(settle).await;

            let transient = host.read_transient();
            host.clear_transient();
            let visibility = Visibility::from_transient(transient.as_deref());
            debug!(%visibility, generation, "transient captured");

            let commit_delay = host.profile().commit_delay(visibility);
            sleep(commit_delay).await;

            if newest.get() != generation {
                debug!(generation, newest = newest.get(), "commit superseded; skipping");
                return;
            }
            host.commit_stable(visibility);
        });
    }

    /// Delayed focus hand-off to the counterpart control.
    ///
    /// The clicked control (or its container) is about to leave the
    /// accessibility tree; focus may not stay on it. The wait is tuned
    /// past the host's animation so the target is focusable by the time
    /// we land on it.
    fn schedule_focus(&self, clicked: Control) {
        let target = clicked.counterpart();
        let delay = self.host.profile().focus_delay(clicked);

        let host = Rc::clone(&self.host);
        tokio::task::spawn_local(async move {
            sleep(delay).await;
            if !host.focus_control(target) {
                debug!(%target, "focus target missing; focus left as-is");
            }
        });
    }
}

/// Spawn a sync actor onto the current `LocalSet` and hand back its event
/// handle.
///
/// Must be called from within a [`tokio::task::LocalSet`]: the host view
/// wraps the `!Send` document, so the actor and all its timer chains stay
/// on the spawning thread.
pub fn spawn_sync<H: PanelHost + 'static>(host: H) -> SyncHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let actor = SyncActor {
        host: Rc::new(host),
        generation: Rc::new(Cell::new(0)),
    };
    tokio::task::spawn_local(actor.run(rx));
    SyncHandle { tx }
}
