use std::collections::HashSet;
use std::sync::Arc;

use anyhow::anyhow;
use tracing::{debug, error};

use crate::error::{FlowError, Result};
use crate::flow::constants::END_TASK;
use crate::flow::table::ExecutionTable;

/// Walk the execution table starting at `start`, writing one narrative line
/// per visited task, until the `end` sentinel is reached.
///
/// Each task is visited at most once; reaching a task a second time is a
/// cycle fault, reported before the action is re-invoked. A condition whose
/// expected outcome does not match routes down the failure branch - that is
/// ordinary branching, not a fault. A fault is an action returning `Err`,
/// which aborts the traversal with the task named.
pub fn run(table: &mut ExecutionTable, start: &str) -> Result<()> {
    let mut current = start.to_string();
    let mut visited: HashSet<String> = HashSet::new();

    while current != END_TASK {
        debug!(task = %current, "invoking task");
        if !visited.insert(current.clone()) {
            return Err(FlowError::CycleDetected(current));
        }

        let (action, condition) = {
            let entry = table
                .get(&current)
                .ok_or_else(|| anyhow!("task `{current}` has no execution entry"))?;
            (Arc::clone(&entry.action), entry.condition.clone())
        };

        let result = action.run().map_err(|source| {
            error!(task = %current, %source, "task raised an error");
            FlowError::TaskFailed {
                task: current.clone(),
                source,
            }
        })?;

        let (line, next) = match condition {
            Some(branch) => {
                debug!(task = %current, %result, expected = %branch.outcome, "evaluating condition");
                if result == branch.outcome {
                    (format!("{current} executed successfully."), branch.on_success)
                } else {
                    (format!("{current} failed."), branch.on_failure)
                }
            }
            None => {
                debug!(task = %current, "no condition, treating as last task");
                (format!("{current} is the last task."), END_TASK.to_string())
            }
        };

        if let Some(entry) = table.get_mut(&current) {
            entry.report = line;
        }
        current = next;
    }

    debug!("traversal completed");
    Ok(())
}
