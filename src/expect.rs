use crate::assertions::Registry;
use crate::context::LikeOptions;
use crate::engine::Matcher;
use crate::errors::AssertionError;
use crate::value::Value;
use tracing::debug;

/// Entry point: `expect(topic).to_be_like(expected)`.
pub fn expect(topic: impl Into<Value>) -> Expectation {
    Expectation {
        topic: topic.into(),
        matcher: Matcher::default(),
        registry: Registry::with_builtins(),
    }
}

/// A topic waiting for assertions.
pub struct Expectation {
    topic: Value,
    matcher: Matcher,
    registry: Registry,
}

impl Expectation {
    pub fn with_options(mut self, options: LikeOptions) -> Self {
        self.matcher = Matcher::new(options);
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn topic(&self) -> &Value {
        &self.topic
    }

    pub fn to_be_like(&self, expected: impl Into<Value>) -> Result<(), AssertionError> {
        self.assert("to_be_like", expected)
    }

    pub fn not_to_be_like(&self, expected: impl Into<Value>) -> Result<(), AssertionError> {
        self.assert_not("to_be_like", expected)
    }

    /// Run the registered assertion `name`; fails when it returns false.
    pub fn assert(&self, name: &str, expected: impl Into<Value>) -> Result<(), AssertionError> {
        self.run(name, &expected.into(), false)
    }

    /// Run the registered assertion `name`; fails when it returns true.
    pub fn assert_not(&self, name: &str, expected: impl Into<Value>) -> Result<(), AssertionError> {
        self.run(name, &expected.into(), true)
    }

    fn run(&self, name: &str, expected: &Value, negated: bool) -> Result<(), AssertionError> {
        let assertion = self
            .registry
            .get(name)
            .ok_or_else(|| AssertionError::UnknownAssertion(name.to_string()))?;
        let holds = assertion.check(&self.matcher, &self.topic, expected)?;
        debug!(assertion = name, negated, holds, "assertion evaluated");
        if holds != negated {
            return Ok(());
        }
        let verb = name.replace('_', " ");
        let verb = if negated {
            verb.replacen("to ", "not to ", 1)
        } else {
            verb
        };
        Err(AssertionError::Failed {
            message: format!("Expected topic({}) {verb} {expected}", self.topic),
        })
    }
}
