use std::sync::Arc;

use tracing::debug;

use crate::error::ValidationError;
use crate::flow::constants::END_TASK;
use crate::flow::model::FlowDefinition;
use crate::flow::table::{Branch, ExecutionTable};
use crate::tasks::TaskRegistry;

/// Cross-check a flow definition against the task registry and build the
/// execution table driving the traversal.
///
/// Every reference is checked before any task runs: the start task, each
/// declared task, and each condition's source and non-`end` targets. A single
/// unknown identifier rejects the whole definition; a partial table is never
/// handed to the engine. Two conditions naming the same source task are
/// rejected rather than silently overwriting each other.
pub fn validate(
    flow: &FlowDefinition,
    registry: &TaskRegistry,
) -> Result<ExecutionTable, ValidationError> {
    if !registry.contains(&flow.start_task) {
        return Err(ValidationError::UnknownStartTask(flow.start_task.clone()));
    }

    let mut table = ExecutionTable::new();
    for task in &flow.tasks {
        let action = registry
            .get(&task.name)
            .ok_or_else(|| ValidationError::UnknownTask(task.name.clone()))?;
        table.insert(task.name.clone(), Arc::clone(action));
    }

    for condition in &flow.conditions {
        if !registry.contains(&condition.source_task) {
            return Err(ValidationError::UnknownConditionSource(
                condition.source_task.clone(),
            ));
        }
        for target in [
            condition.target_task_success.as_str(),
            condition.target_task_failure.as_str(),
        ] {
            if target != END_TASK && !registry.contains(target) {
                return Err(ValidationError::UnknownConditionTarget(target.to_string()));
            }
        }

        // A condition whose source task is registered but not declared in
        // this flow binds to nothing and is skipped.
        if let Some(entry) = table.get_mut(&condition.source_task) {
            if entry.condition.is_some() {
                return Err(ValidationError::DuplicateConditionSource(
                    condition.source_task.clone(),
                ));
            }
            entry.condition = Some(Branch {
                outcome: condition.outcome.clone(),
                on_success: condition.target_task_success.clone(),
                on_failure: condition.target_task_failure.clone(),
            });
        }
    }

    debug!(tasks = table.len(), "execution table built");
    Ok(table)
}
