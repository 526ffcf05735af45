use std::time::Duration;

use crate::grammar::NonTerm;
use crate::rendering::DEFAULT_INDENT;

/// Hard stops for a single chart run. A grammar with many ambiguous
/// analyses can multiply items exponentially in the sentence length, since
/// each distinct derivation is its own item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_items: Option<usize>,
    pub time_limit: Option<Duration>,
}

pub const DEFAULT_MAX_ITEMS: usize = 1_000_000;

impl Default for Limits {
    fn default() -> Self {
        Limits { max_items: Some(DEFAULT_MAX_ITEMS), time_limit: None }
    }
}

impl Limits {
    pub fn unbounded() -> Self { Limits { max_items: None, time_limit: None } }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The symbol the start item expects to find spanning the sentence.
    pub top: NonTerm,
    pub limits: Limits,
    /// Spaces per nesting level when rendering trees.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { top: "S".into(), limits: Limits::default(), indent: DEFAULT_INDENT }
    }
}

impl Config {
    pub fn with_top(mut self, top: impl Into<NonTerm>) -> Self {
        self.top = top.into();
        self
    }

    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        self.limits.max_items = max_items;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.limits.time_limit = time_limit;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
