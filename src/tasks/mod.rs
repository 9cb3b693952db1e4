// Task registry - the fixed set of invocable actions flows can reference.

mod builtin;
mod registry;

pub use builtin::register_builtins;
pub use registry::{task_from_fn, Task, TaskRegistry};
