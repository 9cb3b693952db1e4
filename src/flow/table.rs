use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::tasks::Task;

/// Branching rule bound to a source task, reduced to what the engine needs.
#[derive(Clone, Debug)]
pub struct Branch {
    pub outcome: String,
    pub on_success: String,
    pub on_failure: String,
}

/// Per-task execution state: the bound action, the optional branching rule
/// and the narrative line written during traversal.
pub struct ExecutionEntry {
    pub action: Arc<dyn Task>,
    pub condition: Option<Branch>,
    pub report: String,
}

impl fmt::Debug for ExecutionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionEntry")
            .field("action", &self.action.name())
            .field("condition", &self.condition)
            .field("report", &self.report)
            .finish()
    }
}

/// Validated, per-request structure driving one traversal. Keys keep the
/// order tasks were declared in, which is also the report order.
#[derive(Debug, Default)]
pub struct ExecutionTable {
    entries: IndexMap<String, ExecutionEntry>,
}

impl ExecutionTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, action: Arc<dyn Task>) {
        self.entries.insert(
            name.into(),
            ExecutionEntry {
                action,
                condition: None,
                report: String::new(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&ExecutionEntry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ExecutionEntry> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExecutionEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::task_from_fn;

    #[test]
    fn test_table_preserves_declaration_order() {
        let mut table = ExecutionTable::new();
        for name in ["c", "a", "b"] {
            table.insert(name, task_from_fn(name, || Ok("success".to_string())));
        }

        let order: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
