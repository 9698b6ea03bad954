use crate::engine::Matcher;
use crate::errors::Result;
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for named two-argument predicates usable from `expect(..)`.
pub trait Assertion: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, matcher: &Matcher, topic: &Value, expected: &Value) -> Result<bool>;
}

/// Thread-safe assertion registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Assertion>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn with_builtins() -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Assertion>> = HashMap::new();
        map.insert("to_be_like", Arc::new(builtins::ToBeLike));
        Self { inner: Arc::new(map) }
    }

    pub fn register<A: Assertion + 'static>(&mut self, a: A) {
        let mut_map = Arc::make_mut(&mut self.inner);
        mut_map.insert(a.name(), Arc::new(a));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Assertion>> {
        self.inner.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

pub mod builtins {
    use super::*;

    /// `topic` is like `expected`, with type-appropriate leeway.
    pub struct ToBeLike;
    impl Assertion for ToBeLike {
        fn name(&self) -> &'static str { "to_be_like" }
        fn check(&self, matcher: &Matcher, topic: &Value, expected: &Value) -> Result<bool> {
            matcher.matches(expected, topic)
        }
    }
}
