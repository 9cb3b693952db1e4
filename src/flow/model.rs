use serde::{Deserialize, Serialize};

/// A task referenced by a flow. Identity is `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A branching rule attached to one source task: if the task's outcome equals
/// `outcome`, traversal continues at `target_task_success`, otherwise at
/// `target_task_failure`. Either target may be the `end` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub source_task: String,
    pub outcome: String,
    pub target_task_success: String,
    pub target_task_failure: String,
}

/// A declarative workflow: tasks plus the conditions that connect them.
/// Owned by one execution request and never mutated after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub id: String,
    pub name: String,
    pub start_task: String,
    pub tasks: Vec<TaskDefinition>,
    pub conditions: Vec<ConditionDefinition>,
}

/// Request body for flow execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub flow: FlowDefinition,
}

/// Ordered narrative of one traversal, one line per declared task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub report: Vec<String>,
}

/// One entry of the task listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInfo {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flow_definition_deserialization() {
        let value = json!({
            "id": "flow-1",
            "name": "demo",
            "start_task": "task1",
            "tasks": [
                {"name": "task1", "description": "first"},
                {"name": "task2"}
            ],
            "conditions": [
                {
                    "source_task": "task1",
                    "outcome": "success",
                    "target_task_success": "task2",
                    "target_task_failure": "end"
                }
            ]
        });

        let flow: FlowDefinition = serde_json::from_value(value).unwrap();
        assert_eq!(flow.start_task, "task1");
        assert_eq!(flow.tasks.len(), 2);
        assert_eq!(flow.tasks[1].description, "");
        assert_eq!(flow.conditions[0].target_task_failure, "end");
    }

    #[test]
    fn test_execution_report_serialization() {
        let report = ExecutionReport {
            id: "flow-1".to_string(),
            name: "demo".to_string(),
            report: vec!["task1 is the last task.".to_string()],
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: ExecutionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.report.len(), 1);
    }
}
