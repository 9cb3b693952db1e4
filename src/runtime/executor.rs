use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::Result;
use crate::flow::model::{ExecutionReport, FlowDefinition};
use crate::flow::validate;
use crate::tasks::TaskRegistry;

use super::{engine, report};

/// Flow executor: validates a definition against the registry, runs one
/// synchronous traversal and assembles the report. Cheap to clone; the
/// registry is the only shared state and is read-only.
#[derive(Clone)]
pub struct FlowExecutor {
    registry: Arc<TaskRegistry>,
}

impl FlowExecutor {
    pub fn new(registry: Arc<TaskRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Execute one flow. Either a complete report comes back or a single
    /// structured fault; there is no partial-success result.
    #[instrument(skip_all, fields(flow_id = %flow.id, flow_name = %flow.name))]
    pub fn execute(&self, flow: &FlowDefinition) -> Result<ExecutionReport> {
        info!(start_task = %flow.start_task, "flow execution started");
        let mut table = validate::validate(flow, &self.registry)?;
        engine::run(&mut table, &flow.start_task)?;
        let report = report::build(&flow.id, &flow.name, &table);
        info!(lines = report.report.len(), "flow execution completed");
        Ok(report)
    }
}
