use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Jump target of one loop, printed as `loop_<N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Label(usize);

impl Label {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop_{}", self.0)
    }
}

/// Monotonic label allocator for one compilation unit.
///
/// Clones share the counter. Numbers are never reused or rolled back.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    next: Rc<Cell<usize>>,
}

impl Labels {
    pub fn new() -> Self {
        Labels::default()
    }

    pub fn fresh(&self) -> Label {
        let label = Label(self.next.get());
        self.next.set(label.0 + 1);
        label
    }

    /// Number of labels handed out so far
    pub fn count(&self) -> usize {
        self.next.get()
    }
}

#[test]
fn labels_are_shared_and_monotonic() {
    let labels = Labels::new();
    let other = labels.clone();
    assert_eq!(labels.fresh().to_string(), "loop_0");
    assert_eq!(other.fresh().to_string(), "loop_1");
    assert_eq!(labels.fresh().index(), 2);
    assert_eq!(other.count(), 3);

    let fresh = Labels::new();
    assert_eq!(fresh.fresh().to_string(), "loop_0");
}
