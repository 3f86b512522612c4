use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

/// Exact case-insensitive match through the name index.
pub fn run<S: ContactStore>(session: &Session<S>, name: &str) -> Result<CmdResult> {
    let matches = session.lookup(name);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No contact named \"{}\"", name)));
    }
    Ok(result.with_matches(matches))
}
