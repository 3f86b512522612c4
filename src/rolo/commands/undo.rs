use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(step) = session.undo() else {
        result.add_message(CmdMessage::info("Nothing to undo"));
        return Ok(result);
    };

    if step.applied {
        result.add_message(CmdMessage::success(format!("Undid {}", step.operation)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Could not undo {}; moved to redo history",
            step.operation
        )));
    }
    Ok(result.with_affected(vec![step.operation]))
}
