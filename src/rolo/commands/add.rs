use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

/// Append `name`, or insert it at `at` (clamped) when given.
pub fn run<S: ContactStore>(
    session: &mut Session<S>,
    name: &str,
    at: Option<isize>,
) -> Result<CmdResult> {
    let op = match at {
        Some(index) => session.insert(index, name)?,
        None => session.add(name)?,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added ({}): {}",
        op.index, op.name
    )));
    Ok(result.with_affected(vec![op]))
}
