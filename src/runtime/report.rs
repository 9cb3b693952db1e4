use crate::flow::model::ExecutionReport;
use crate::flow::table::ExecutionTable;

/// Render the table into the final report, one line per declared task in
/// declaration order. Tasks the traversal never reached contribute an empty
/// line.
pub fn build(id: &str, name: &str, table: &ExecutionTable) -> ExecutionReport {
    ExecutionReport {
        id: id.to_string(),
        name: name.to_string(),
        report: table.iter().map(|(_, entry)| entry.report.clone()).collect(),
    }
}
