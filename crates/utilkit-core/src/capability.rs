//! Explicitly registered, tag-addressed actions
//!
//! A host UI (inspector panel, debug console) lists the registered tags and
//! invokes a handler against the target object it is showing.

use crate::error::{KitError, Result};

type Handler<T> = Box<dyn FnMut(&mut T)>;

struct Capability<T> {
    tag: String,
    label: String,
    handler: Handler<T>,
}

/// Registry of actions that can be invoked on a `T` by tag.
pub struct CapabilityRegistry<T> {
    capabilities: Vec<Capability<T>>,
}

impl<T> CapabilityRegistry<T> {
    pub fn new() -> Self {
        Self {
            capabilities: Vec::new(),
        }
    }

    /// Register a handler under `tag`. Tags are unique; `label` is what a UI shows.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        label: impl Into<String>,
        handler: impl FnMut(&mut T) + 'static,
    ) -> Result<()> {
        let tag = tag.into();
        if self.contains(&tag) {
            return Err(KitError::DuplicateCapability(tag));
        }
        log::debug!("registered capability '{}'", tag);
        self.capabilities.push(Capability {
            tag,
            label: label.into(),
            handler: Box::new(handler),
        });
        Ok(())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.capabilities.iter().any(|c| c.tag == tag)
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> Vec<&str> {
        self.capabilities.iter().map(|c| c.tag.as_str()).collect()
    }

    pub fn label(&self, tag: &str) -> Option<&str> {
        self.capabilities
            .iter()
            .find(|c| c.tag == tag)
            .map(|c| c.label.as_str())
    }

    /// Run the handler registered under `tag` against `target`.
    pub fn invoke(&mut self, tag: &str, target: &mut T) -> Result<()> {
        let capability = self
            .capabilities
            .iter_mut()
            .find(|c| c.tag == tag)
            .ok_or_else(|| KitError::CapabilityNotFound(tag.to_string()))?;
        (capability.handler)(target);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl<T> Default for CapabilityRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    #[test]
    fn invoke_runs_handler_on_target() {
        let mut registry = CapabilityRegistry::new();
        registry
            .register("inc", "Increment", |c: &mut Counter| c.value += 1)
            .unwrap();
        registry
            .register("reset", "Reset", |c: &mut Counter| c.value = 0)
            .unwrap();

        let mut counter = Counter::default();
        registry.invoke("inc", &mut counter).unwrap();
        registry.invoke("inc", &mut counter).unwrap();
        assert_eq!(counter.value, 2);
        registry.invoke("reset", &mut counter).unwrap();
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn tags_keep_registration_order() {
        let mut registry = CapabilityRegistry::<Counter>::new();
        registry.register("b", "B", |_| {}).unwrap();
        registry.register("a", "A", |_| {}).unwrap();
        assert_eq!(registry.tags(), vec!["b", "a"]);
        assert_eq!(registry.label("a"), Some("A"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicate_tag_rejected() {
        let mut registry = CapabilityRegistry::<Counter>::new();
        registry.register("x", "X", |_| {}).unwrap();
        let err = registry.register("x", "Again", |_| {}).unwrap_err();
        assert!(matches!(err, KitError::DuplicateCapability(tag) if tag == "x"));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let mut registry = CapabilityRegistry::<Counter>::new();
        let mut counter = Counter::default();
        let err = registry.invoke("missing", &mut counter).unwrap_err();
        assert!(matches!(err, KitError::CapabilityNotFound(_)));
    }
}
