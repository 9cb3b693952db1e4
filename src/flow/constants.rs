/// Reserved identifier marking traversal completion. Never a registered task
/// and never looked up in the registry.
pub const END_TASK: &str = "end";
