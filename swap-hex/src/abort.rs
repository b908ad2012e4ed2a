//! Abort signal for abandoning an in-flight price fetch.

use tokio::sync::watch;

/// Receiving half. Cheap to clone; every clone observes the same trigger.
#[derive(Clone)]
pub struct AbortSignal {
    rx: watch::Receiver<bool>,
}

/// Sending half.
#[derive(Clone)]
pub struct AbortTrigger {
    tx: watch::Sender<bool>,
}

pub fn channel() -> (AbortTrigger, AbortSignal) {
    let (tx, rx) = watch::channel(false);
    (AbortTrigger { tx }, AbortSignal { rx })
}

impl AbortSignal {
    /// Resolves once the trigger fires.
    ///
    /// If every trigger is dropped without firing, this never resolves.
    pub async fn aborted(mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }

    pub fn is_aborted(&self) -> bool {
        *self.rx.borrow()
    }
}

impl AbortTrigger {
    pub fn abort(&self) {
        let _ = self.tx.send(true);
    }
}
