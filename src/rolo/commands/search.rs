use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

/// Substring search over the store, returning `(index, name)` hits in store order.
pub fn run<S: ContactStore>(session: &Session<S>, query: &str) -> Result<CmdResult> {
    let hits = session.search(query);
    let mut result = CmdResult::default();
    if query.trim().is_empty() {
        result.add_message(CmdMessage::info("Empty search query"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} result(s) for \"{}\"",
            hits.len(),
            query
        )));
    }
    Ok(result.with_hits(hits))
}
