//! Screen environment: values published once and read by any descendant view.
//!
//! The environment is passed by reference down the render tree, so a child
//! widget can look a value up by type without every intermediate view
//! forwarding it explicitly.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Environment {
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `value`, replacing any previous value of the same type.
    pub fn publish<T: Any + Send + Sync>(&mut self, value: Arc<T>) {
        self.values.insert(TypeId::of::<T>(), value);
    }

    /// Builder form of [`Environment::publish`].
    pub fn with<T: Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
        self.publish(value);
        self
    }

    /// Shared handle to the published value of type `T`, if any.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| Arc::clone(value).downcast::<T>().ok())
    }

    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("values", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(&'static str);

    #[test]
    fn get_returns_the_published_instance() {
        let marker = Arc::new(Marker("router"));
        let env = Environment::new().with(Arc::clone(&marker));

        let found = env.get::<Marker>().expect("marker published");
        assert!(Arc::ptr_eq(&found, &marker));
        assert_eq!(found.0, "router");
    }

    #[test]
    fn missing_type_is_none() {
        let env = Environment::new();
        assert!(env.get::<Marker>().is_none());
        assert!(!env.contains::<Marker>());
    }

    #[test]
    fn publish_replaces_same_type() {
        let mut env = Environment::new();
        env.publish(Arc::new(Marker("first")));
        env.publish(Arc::new(Marker("second")));
        assert_eq!(env.get::<Marker>().map(|m| m.0), Some("second"));
    }
}
