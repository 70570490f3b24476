use crossbeam_channel::{bounded, Receiver, Sender};

/// Host side of a cancellation pair. Dropping it without cancelling is harmless.
#[derive(Clone)]
pub struct Canceller {
    terminator_tx: Sender<bool>,
}

/// Checked by the acquisition loop before each read.
pub struct CancelToken {
    terminator_rx: Option<Receiver<bool>>,
    cancelled: bool,
}

pub fn cancellation() -> (Canceller, CancelToken) {
    let (terminator_tx, terminator_rx) = bounded(1);
    (
        Canceller { terminator_tx },
        CancelToken {
            terminator_rx: Some(terminator_rx),
            cancelled: false,
        },
    )
}

impl Canceller {
    pub fn cancel(&self) {
        // A full channel already holds a pending cancel.
        let _ = self.terminator_tx.try_send(true);
    }
}

impl CancelToken {
    /// A token that never fires.
    pub fn never() -> CancelToken {
        CancelToken {
            terminator_rx: None,
            cancelled: false,
        }
    }

    pub fn is_cancelled(&mut self) -> bool {
        if !self.cancelled {
            if let Some(rx) = &self.terminator_rx {
                self.cancelled = rx.try_recv().unwrap_or(false);
            }
        }
        self.cancelled
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        CancelToken::never()
    }
}
