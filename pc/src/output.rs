use thiserror::Error;

/// Payload of a parse that may succeed without producing data.
///
/// `Empty` is its own variant, so it never collides with a real payload that
/// happens to look like nothing (`Value(())`, `Value(None)`, `Value(vec![])`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<T> {
    Value(T),
    Empty,
}

impl<T> Match<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Match::Empty)
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Match::Value(value) => Some(value),
            Match::Empty => None,
        }
    }
}

/// Successful parse: the matched value and the first unconsumed index.
///
/// `furthest` is the furthest index at which some sub-parser failed while
/// this output was produced (a repetition stops on a failed attempt, for
/// example). It never falls below `next` and does not take part in equality.
#[derive(Debug, Clone)]
pub struct Output<T> {
    pub value: T,
    pub next: usize,
    pub furthest: usize,
}

impl<T> Output<T> {
    pub fn new(value: T, next: usize) -> Self {
        Output {
            value,
            next,
            furthest: next,
        }
    }

    /// Record a failed attempt at `index`
    pub fn reached(mut self, index: usize) -> Self {
        self.furthest = self.furthest.max(index);
        self
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Output<U> {
        Output {
            value: f(self.value),
            next: self.next,
            furthest: self.furthest,
        }
    }
}

impl<T: PartialEq> PartialEq for Output<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.next == other.next
    }
}

impl<T: Eq> Eq for Output<T> {}

impl<T> Output<Match<T>> {
    /// Zero-width success without payload
    pub fn empty(next: usize) -> Self {
        Output::new(Match::Empty, next)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Backtracking signal: nothing matched when trying at `index`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No match at index {index}")]
pub struct NoMatch {
    pub index: usize,
}

impl NoMatch {
    pub fn at(index: usize) -> Self {
        NoMatch { index }
    }

    /// Keep whichever failure got further into the input
    pub fn furthest(self, other: NoMatch) -> Self {
        if other.index > self.index {
            other
        } else {
            self
        }
    }
}

pub type PResult<T> = Result<Output<T>, NoMatch>;

#[test]
fn empty_output_is_not_a_unit_value() {
    let empty: Output<Match<()>> = Output::empty(3);
    let unit = Output::new(Match::Value(()), 3);
    assert!(empty.is_empty());
    assert!(!unit.is_empty());
    assert_ne!(empty, unit);

    let nothing: Output<Match<Option<u8>>> = Output::new(Match::Value(None), 0);
    assert!(!nothing.is_empty());
    assert_eq!(nothing.value.into_value(), Some(None));
}

#[test]
fn furthest_failure_wins() {
    assert_eq!(NoMatch::at(2).furthest(NoMatch::at(5)), NoMatch::at(5));
    assert_eq!(NoMatch::at(7).furthest(NoMatch::at(5)), NoMatch::at(7));
    assert_eq!(NoMatch::at(4).to_string(), "No match at index 4");
}

#[test]
fn furthest_is_tracked_but_not_compared() {
    let out = Output::new('a', 1).reached(4).reached(2);
    assert_eq!(out.furthest, 4);
    assert_eq!(out, Output::new('a', 1));
    assert_eq!(out.map(|c| c.to_string()).furthest, 4);
}
