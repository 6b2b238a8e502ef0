// history.rs - Action log with linear undo/redo
//
// Only the text log moves between the stacks. Nothing here replays or
// reverts simulation state.

/// Receives the full done-list after every change.
pub trait HistoryView {
    fn show(&mut self, entries: &[String]);
}

impl HistoryView for () {
    fn show(&mut self, _entries: &[String]) {}
}

#[derive(Clone, Debug, Default)]
pub struct History {
    done: Vec<String>,
    redo: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new action. Any redo branch is discarded.
    pub fn push(&mut self, action: String) {
        self.done.push(action);
        self.redo.clear();
    }

    pub fn undo(&mut self) -> Option<&str> {
        let action = self.done.pop()?;
        self.redo.push(action);
        self.redo.last().map(String::as_str)
    }

    pub fn redo(&mut self) -> Option<&str> {
        let action = self.redo.pop()?;
        self.done.push(action);
        self.done.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.done
    }

    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}

/// "1. first", "2. second", ...
pub fn numbered(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}", i + 1, e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(items: &[&str]) -> History {
        let mut h = History::new();
        for i in items {
            h.push(i.to_string());
        }
        h
    }

    #[test]
    fn undo_moves_last_entry_to_redo() {
        let mut h = log(&["a", "b"]);
        assert_eq!(h.undo(), Some("b"));
        assert_eq!(h.entries(), ["a"]);
        assert_eq!(h.redo_stack(), ["b"]);
    }

    #[test]
    fn undo_then_redo_restores() {
        let mut h = log(&["a", "b", "c"]);
        let before = h.entries().to_vec();
        h.undo();
        assert_eq!(h.redo(), Some("c"));
        assert_eq!(h.entries(), before.as_slice());
        assert!(h.redo_stack().is_empty());
    }

    #[test]
    fn undo_and_redo_on_empty_are_noops() {
        let mut h = History::new();
        assert_eq!(h.undo(), None);
        assert_eq!(h.redo(), None);
        assert!(h.is_empty());
        assert!(h.redo_stack().is_empty());
    }

    #[test]
    fn push_discards_redo_branch() {
        let mut h = log(&["a", "b", "c"]);
        h.undo();
        h.undo();
        assert_eq!(h.redo_stack().len(), 2);
        h.push("d".into());
        assert_eq!(h.entries(), ["a", "d"]);
        assert!(h.redo_stack().is_empty());
    }

    #[test]
    fn redo_pops_most_recent_undo_first() {
        let mut h = log(&["a", "b", "c"]);
        h.undo();
        h.undo();
        assert_eq!(h.redo(), Some("b"));
        assert_eq!(h.redo(), Some("c"));
        assert_eq!(h.redo(), None);
    }

    #[test]
    fn numbering_is_one_based() {
        let h = log(&["x", "y"]);
        assert_eq!(numbered(h.entries()), vec!["1. x", "2. y"]);
    }
}
