pub mod config;
pub mod error;
pub mod flow;
pub mod runtime;
pub mod server;
pub mod tasks;
pub mod utils;

pub use config::ServerConfig;
pub use error::{FlowError, Result, ValidationError};
pub use flow::{
    validate, Branch, ConditionDefinition, ExecuteRequest, ExecutionEntry, ExecutionReport,
    ExecutionTable, FlowDefinition, TaskDefinition, TaskInfo, END_TASK,
};
pub use runtime::FlowExecutor;
pub use server::{router, AppState};
pub use tasks::{register_builtins, task_from_fn, Task, TaskRegistry};
pub use utils::LoggingConfig;
