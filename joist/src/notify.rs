//! Change notification channel for host event loops.
//!
//! A host that blocks while idle installs a [`Notifier`] on the grid; async
//! completions (bulk actions, reorder commits) send a signal through it so
//! the host knows a render check is due. Synchronous operations only set
//! the grid's dirty flag, which the host polls on its own schedule.

use tokio::sync::mpsc;

/// Sender half of the notification channel.
///
/// Clone-able, can be moved into async tasks.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::Sender<()>,
}

impl Notifier {
    /// Send a change signal.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = shutting down,
    /// full buffer = a signal is already queued).
    pub fn notify(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the notification channel.
#[derive(Debug)]
pub struct NotifyReceiver {
    rx: mpsc::Receiver<()>,
}

impl NotifyReceiver {
    /// Wait for a change signal.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

/// Create a new notification channel pair.
pub fn channel() -> (Notifier, NotifyReceiver) {
    // Small buffer - the signal only means "check again", not a queue of work
    let (tx, rx) = mpsc::channel(16);
    (Notifier { tx }, NotifyReceiver { rx })
}
