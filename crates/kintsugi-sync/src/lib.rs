//! Panel visibility synchronizer for Kintsugi.
//!
//! The host renders a collapsible side panel and manages its visibility
//! itself — badly. On every toggle it writes a transient `aria-expanded`
//! onto the panel node *before* the animation settles, and it never exposes
//! a completion signal. Assistive technology and stylesheets need a state
//! they can trust; this crate maintains one.
//!
//! The synchronizer is a small asynchronous state machine:
//!
//! ```text
//!   control click ──▶ SyncHandle ──mpsc──▶ sync actor (spawn_local)
//!                                            │
//!                        optimistic ARIA hints (synchronous)
//!                                            │
//!                              ┌─────────────┴─────────────┐
//!                        reconciler                  focus coordinator
//!                 settle → read → clear           sleep(animation) → focus
//!                 sleep(commit) → commit
//! ```
//!
//! Reconciliation is two-phase: wait one tick so the host finishes its
//! synchronous attribute write, capture and clear the transient signal,
//! then commit it to the stable `data-expanded` attribute after a delay
//! matched to the animation direction. Overlapping reconciliations are
//! never cancelled, but each carries a generation stamp and stale commits
//! are skipped, so the newest click always wins.
//!
//! Everything runs on a current-thread runtime inside a
//! [`tokio::task::LocalSet`]: the document is `!Send` by design and every
//! step between timers executes atomically with respect to other tasks.

pub mod actor;
pub mod host;
pub mod panel;
pub mod profile;

pub use actor::{PanelEvent, SyncHandle, spawn_sync};
pub use host::{DomPanelHost, PanelHost, STABLE_ATTR, TRANSIENT_ATTR};
pub use panel::{Control, Visibility};
pub use profile::{ProfileError, SyncProfile, load_profile, load_profile_or_default};
