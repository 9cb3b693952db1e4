use std::collections::HashMap;
use std::sync::Arc;

/// A named unit of work. Actions take no input, return an outcome value and
/// hold no per-execution state, so one instance is shared read-only across
/// concurrent executions.
pub trait Task: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Invoke the action. An `Err` is a task fault, not a branch outcome;
    /// branching compares the returned value against the condition's
    /// expected outcome.
    fn run(&self) -> anyhow::Result<String>;
}

/// Mapping from task name to action. Populated at process start and not
/// mutated afterwards.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Arc<dyn Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the builtin stub tasks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        super::builtin::register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, task: Arc<dyn Task>) {
        self.tasks.insert(task.name().to_string(), task);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Task>> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Every registered task name, exactly once, order unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

struct FnTask<F> {
    name: String,
    func: F,
}

impl<F> Task for FnTask<F>
where
    F: Fn() -> anyhow::Result<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> anyhow::Result<String> {
        (self.func)()
    }
}

/// Build a task from a closure.
pub fn task_from_fn<F>(name: impl Into<String>, func: F) -> Arc<dyn Task>
where
    F: Fn() -> anyhow::Result<String> + Send + Sync + 'static,
{
    Arc::new(FnTask {
        name: name.into(),
        func,
    })
}
