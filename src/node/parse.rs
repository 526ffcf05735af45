//! Reading a tree back from its bracketed form.
//!
//!   tree ::= '(' label word ')'
//!         |  '(' label tree+ ')'

use std::iter::Peekable;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::{Error, FragmentError};
use crate::luthor::{self, TokKind};
use crate::node::Tree;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tok<'a> {
    Open,
    Close,
    Word(&'a str),
}

/// Luthor tokens with the whitespace dropped.
struct Lexer<'a>(luthor::Lexer<'a>);

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(usize, Tok<'a>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, x, _j) = match self.0.next()? {
                Ok(x) => x,
                Err(e) => return Some(Err(fragment_error(e.at(), FragmentError::Lex(e)))),
            };
            let tok = match x.kind() {
                TokKind::Open => Tok::Open,
                TokKind::Close => Tok::Close,
                TokKind::Word => Tok::Word(*x.data()),
                // skip the space and grab next token.
                TokKind::Space => continue,
            };
            return Some(Ok((i, tok)));
        }
    }
}

fn fragment_error(at: usize, source: FragmentError) -> Error {
    Error::Fragment { at, source }
}

struct Parser<'a> {
    toks: Peekable<Lexer<'a>>,
    end: usize,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Result<Option<(usize, Tok<'a>)>, Error> {
        self.toks.next().transpose()
    }

    fn peek(&mut self) -> Result<Option<(usize, Tok<'a>)>, Error> {
        match self.toks.peek() {
            None => Ok(None),
            Some(Ok(x)) => Ok(Some(*x)),
            Some(Err(_)) => self.next(),
        }
    }

    fn tree(&mut self) -> Result<Tree, Error> {
        let open_at = match self.next()? {
            Some((i, Tok::Open)) => i,
            Some((i, Tok::Close)) => return Err(fragment_error(i, FragmentError::UnexpectedClose)),
            Some((i, Tok::Word(_))) => return Err(fragment_error(i, FragmentError::UnexpectedWord)),
            None => return Err(fragment_error(self.end, FragmentError::Unclosed)),
        };
        let label = match self.next()? {
            Some((_, Tok::Word(label))) => label,
            Some((i, _)) => return Err(fragment_error(i, FragmentError::MissingLabel)),
            None => return Err(fragment_error(open_at, FragmentError::Unclosed)),
        };

        if let Some((_, Tok::Word(token))) = self.peek()? {
            self.next()?;
            return match self.next()? {
                Some((_, Tok::Close)) => Ok(Tree::leaf(label, token)),
                Some((i, _)) => Err(fragment_error(i, FragmentError::UnexpectedWord)),
                None => Err(fragment_error(open_at, FragmentError::Unclosed)),
            };
        }

        let mut children = Vec::new();
        loop {
            match self.peek()? {
                Some((_, Tok::Open)) => children.push(Rc::new(self.tree()?)),
                Some((i, Tok::Close)) => {
                    self.next()?;
                    if children.is_empty() {
                        return Err(fragment_error(i, FragmentError::EmptyNode));
                    }
                    return Ok(Tree::node(label, children));
                }
                Some((i, Tok::Word(_))) => return Err(fragment_error(i, FragmentError::UnexpectedWord)),
                None => return Err(fragment_error(open_at, FragmentError::Unclosed)),
            }
        }
    }
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Tree, Error> {
        let mut parser = Parser { toks: Lexer(luthor::Lexer::new(s)).peekable(), end: s.len() };
        if parser.peek()?.is_none() {
            return Err(fragment_error(0, FragmentError::Empty));
        }
        let tree = parser.tree()?;
        match parser.next()? {
            None => Ok(tree),
            Some((i, _)) => Err(fragment_error(i, FragmentError::TrailingInput)),
        }
    }
}
