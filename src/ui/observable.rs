//! Observable state holder bound to the UI thread.
//!
//! The holder owns a [`UiState`] value, hands out read-only access, and
//! notifies subscribers after every mutation that actually changed the value.
//! It is `!Send`: once created on the UI thread it cannot leave it, and every
//! mutation additionally checks the calling thread.

use crate::ui::state::UiState;
use std::marker::PhantomData;
use std::thread::{self, ThreadId};

/// Identifies a subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<S> = Box<dyn FnMut(&S)>;

pub struct Observable<S: UiState> {
    value: S,
    owner: ThreadId,
    version: u64,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<S>)>,
    _not_send: PhantomData<*const ()>,
}

impl<S: UiState> Observable<S> {
    /// Create a holder owned by the current thread.
    pub fn new(value: S) -> Self {
        Self {
            value,
            owner: thread::current().id(),
            version: 0,
            next_id: 0,
            observers: Vec::new(),
            _not_send: PhantomData,
        }
    }

    pub fn get(&self) -> &S {
        &self.value
    }

    /// Number of mutations that changed the value.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Thread the holder is bound to.
    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    /// Register an observer called after each change with the new value.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Apply `update` to the value and notify observers if it changed.
    ///
    /// Returns whether the value changed.
    ///
    /// # Panics
    ///
    /// Panics when called from a thread other than the owner.
    pub fn mutate<F>(&mut self, update: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        assert_eq!(
            thread::current().id(),
            self.owner,
            "observable state mutated off the UI thread"
        );

        let previous = self.value.clone();
        update(&mut self.value);
        if self.value == previous {
            return false;
        }

        self.version += 1;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
        true
    }
}

impl<S: UiState> Default for Observable<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
