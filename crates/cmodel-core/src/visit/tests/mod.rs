mod dispatch;
mod overrides;

use crate::visit::{DispatchLog, DispatchPoint, traverse};
use cmodel_schema::node::Model;

// run a default-configured log over `model`
fn log_of(model: &Model) -> DispatchLog {
    let mut log = DispatchLog::new();
    traverse(&mut log, model).expect("traversal succeeds");

    log
}

// points recorded, restricted to `keep`, in call order
fn points_among(log: &DispatchLog, keep: &[DispatchPoint]) -> Vec<DispatchPoint> {
    log.entries()
        .iter()
        .map(|e| e.point)
        .filter(|p| keep.contains(p))
        .collect()
}
