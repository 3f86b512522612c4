use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(session: &mut Session<S>, index: isize) -> Result<CmdResult> {
    let op = session.delete(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted ({}): {}",
        op.index, op.name
    )));
    Ok(result.with_affected(vec![op]))
}
