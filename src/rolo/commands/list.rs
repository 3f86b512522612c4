use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_view(session.view()))
}
