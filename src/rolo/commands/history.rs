use crate::commands::{CmdResult, HistorySnapshot};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(session: &Session<S>) -> Result<CmdResult> {
    let log = session.log();
    let snapshot = HistorySnapshot {
        undo: log.undo_entries().cloned().collect(),
        redo: log.redo_entries().cloned().collect(),
    };
    Ok(CmdResult::default().with_history(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::OperationLog;
    use crate::store::memory::fixtures::linked;

    #[test]
    fn lists_pending_entries_in_replay_order() {
        let mut session = Session::new(linked(&[]), OperationLog::default());
        session.add("A").unwrap();
        session.add("B").unwrap();
        session.add("C").unwrap();
        session.undo().unwrap();
        session.undo().unwrap();

        let history = run(&session).unwrap().history.unwrap();
        let undo: Vec<_> = history.undo.iter().map(|op| op.name.as_str()).collect();
        let redo: Vec<_> = history.redo.iter().map(|op| op.name.as_str()).collect();
        assert_eq!(undo, vec!["A"]);
        assert_eq!(redo, vec!["C", "B"]);
    }
}
