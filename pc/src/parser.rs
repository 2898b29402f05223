use crate::output::{NoMatch, Output, PResult};
use std::rc::Rc;

type ParseFn<Tok, T> = dyn Fn(&[Tok], usize) -> PResult<T>;

/// A parser is a composable value: `(tokens, index) -> PResult<T>`.
///
/// Parsers are built before any input exists and cloning one only bumps a
/// reference count, so combinators can freely capture their sub-parsers.
pub struct Parser<Tok, T> {
    parse: Rc<ParseFn<Tok, T>>,
}

impl<Tok, T> Clone for Parser<Tok, T> {
    fn clone(&self) -> Self {
        Parser {
            parse: Rc::clone(&self.parse),
        }
    }
}

impl<Tok: 'static, T: 'static> Parser<Tok, T> {
    pub fn new<F>(parse: F) -> Self
    where
        F: Fn(&[Tok], usize) -> PResult<T> + 'static,
    {
        Parser {
            parse: Rc::new(parse),
        }
    }

    /// Try to match at `index`
    pub fn parse(&self, tokens: &[Tok], index: usize) -> PResult<T> {
        (self.parse)(tokens, index)
    }

    /// Try to match at the start of the input
    pub fn run(&self, tokens: &[Tok]) -> PResult<T> {
        self.parse(tokens, 0)
    }

    pub fn map<U: 'static, F>(self, f: F) -> Parser<Tok, U>
    where
        F: Fn(T) -> U + 'static,
    {
        crate::comb::transform(self, f)
    }

    /// First match starting anywhere at or after `index`
    pub fn search(&self, tokens: &[Tok], index: usize) -> PResult<T> {
        self.scan(tokens, index).map(|(_, output)| output)
    }

    /// Every non-overlapping match, left to right.
    ///
    /// Scanning resumes right after each match. Fails only if there is no
    /// match anywhere in the input.
    pub fn search_all(&self, tokens: &[Tok]) -> Result<Vec<Output<T>>, NoMatch> {
        let (start, first) = self.scan(tokens, 0)?;
        let mut index = first.next.max(start + 1);
        let mut outputs = vec![first];
        while index < tokens.len() {
            match self.scan(tokens, index) {
                Ok((start, output)) => {
                    // a zero-width match must still move the scan forward
                    index = output.next.max(start + 1);
                    outputs.push(output);
                }
                Err(_) => break,
            }
        }
        Ok(outputs)
    }

    fn scan(&self, tokens: &[Tok], index: usize) -> Result<(usize, Output<T>), NoMatch> {
        (index..tokens.len())
            .find_map(|start| self.parse(tokens, start).ok().map(|output| (start, output)))
            .ok_or(NoMatch::at(tokens.len()))
    }
}
