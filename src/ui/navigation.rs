//! Navigation stack owned by the host.
//!
//! Routers push and pop routes; the runtime keeps running while the stack is
//! non-empty.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    stack: Arc<Mutex<Vec<&'static str>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, route: &'static str) {
        tracing::debug!(route, "navigation push");
        self.stack.lock().push(route);
    }

    /// Pop `route` if it is on top. Returns whether anything was popped.
    pub fn pop(&self, route: &'static str) -> bool {
        let mut stack = self.stack.lock();
        if stack.last() != Some(&route) {
            tracing::warn!(route, top = ?stack.last(), "pop ignored, route not on top");
            return false;
        }
        stack.pop();
        tracing::debug!(route, depth = stack.len(), "navigation pop");
        true
    }

    pub fn top(&self) -> Option<&'static str> {
        self.stack.lock().last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }
}
