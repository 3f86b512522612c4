use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(step) = session.redo() else {
        result.add_message(CmdMessage::info("Nothing to redo"));
        return Ok(result);
    };

    if step.applied {
        result.add_message(CmdMessage::success(format!("Redid {}", step.operation)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Could not redo {}; moved to undo history",
            step.operation
        )));
    }
    Ok(result.with_affected(vec![step.operation]))
}
