use tracing::info;

use super::registry::{Task, TaskRegistry};

/// Placeholder task: does no work and reports `success`.
struct StubTask {
    name: &'static str,
    description: &'static str,
}

impl Task for StubTask {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn run(&self) -> anyhow::Result<String> {
        info!(task = self.name, "stub task invoked");
        Ok("success".to_string())
    }
}

/// Install the builtin stub tasks.
pub fn register_builtins(registry: &mut TaskRegistry) {
    for (name, description) in [
        ("task1", "first stub task"),
        ("task2", "second stub task"),
        ("task3", "third stub task"),
    ] {
        registry.register(std::sync::Arc::new(StubTask { name, description }));
    }
}
