// Flow definitions and their validated execution form.

pub mod constants;
pub mod model;
pub mod table;
pub mod validate;

pub use constants::END_TASK;
pub use model::{
    ConditionDefinition, ExecuteRequest, ExecutionReport, FlowDefinition, TaskDefinition, TaskInfo,
};
pub use table::{Branch, ExecutionEntry, ExecutionTable};
pub use validate::validate;
