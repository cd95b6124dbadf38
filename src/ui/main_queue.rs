//! Mailbox that moves messages from worker tasks back onto the UI thread.
//!
//! Workers hold a cloneable [`MainSender`] and post from any thread; the UI
//! thread owns the [`MainQueue`] and applies messages during its loop.

use std::marker::PhantomData;
use std::thread::{self, ThreadId};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Sending half of the UI mailbox. `Send + Clone`.
#[derive(Debug)]
pub struct MainSender<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M> Clone for MainSender<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<M: Send + 'static> MainSender<M> {
    /// Post a message. Returns false once the queue has been dropped.
    pub fn post(&self, message: M) -> bool {
        if self.tx.send(message).is_err() {
            tracing::trace!("UI mailbox closed, message dropped");
            return false;
        }
        true
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half of the UI mailbox, bound to the thread that created it.
pub struct MainQueue<M> {
    rx: mpsc::UnboundedReceiver<M>,
    owner: ThreadId,
    _not_send: PhantomData<*const ()>,
}

impl<M: Send + 'static> MainQueue<M> {
    pub fn new() -> (MainSender<M>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            MainSender { tx },
            Self {
                rx,
                owner: thread::current().id(),
                _not_send: PhantomData,
            },
        )
    }

    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    /// Take every message already posted, without waiting.
    pub fn drain(&mut self) -> Vec<M> {
        let mut messages = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(message) => messages.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        messages
    }

    /// Wait for the next message. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<M> {
        self.rx.recv().await
    }
}
