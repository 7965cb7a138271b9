//! Ordered, named rule chains for the block and inline phases.

use std::fmt::{self, Debug, Formatter};

use crate::parser::block::BlockState;
use crate::parser::inlines::InlineState;

/// A block-phase rule.  Receives the line to start at and the exclusive line to stop before;
/// returns `true` if it claimed input, in which case it has advanced `state.line`.
pub type BlockRule = fn(state: &mut BlockState<'_>, start_line: usize, end_line: usize) -> bool;

/// An inline-phase rule.  Returns `true` if it claimed input at `state.pos`, in which case it
/// has advanced `state.pos`.  When `silent` is set, nodes must not be emitted.
pub type InlineRule = fn(state: &mut InlineState<'_>, silent: bool) -> bool;

struct Rule<R> {
    name: &'static str,
    enabled: bool,
    rule: R,
}

/// An ordered list of rules, tried in turn at each position until one claims it.
pub struct Ruler<R> {
    rules: Vec<Rule<R>>,
}

impl<R: Copy> Ruler<R> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Ruler { rules: Vec::new() }
    }

    /// Add a rule at the end of the chain.
    pub fn push(&mut self, name: &'static str, rule: R) {
        self.rules.push(Rule {
            name,
            enabled: true,
            rule,
        });
    }

    /// Add a rule just before the rule named `before_name`.  Returns `false`, leaving the chain
    /// untouched, if there is no such rule.
    pub fn before(&mut self, before_name: &str, name: &'static str, rule: R) -> bool {
        match self.find(before_name) {
            Some(ix) => {
                self.rules.insert(
                    ix,
                    Rule {
                        name,
                        enabled: true,
                        rule,
                    },
                );
                true
            }
            None => false,
        }
    }

    /// Replace the implementation of the rule named `name`.  Returns `false` if there is no
    /// such rule.
    pub fn at(&mut self, name: &str, rule: R) -> bool {
        match self.find(name) {
            Some(ix) => {
                self.rules[ix].rule = rule;
                true
            }
            None => false,
        }
    }

    /// Enable or disable the rule named `name`.  Returns `false` if there is no such rule.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.find(name) {
            Some(ix) => {
                self.rules[ix].enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// The names of the enabled rules, in the order they are tried.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().filter(|r| r.enabled).map(|r| r.name)
    }

    /// The enabled rules, in the order they are tried.
    pub fn rules(&self) -> impl Iterator<Item = R> + '_ {
        self.rules.iter().filter(|r| r.enabled).map(|r| r.rule)
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.name == name)
    }
}

impl<R: Copy> Default for Ruler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Debug for Ruler<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| (r.name, r.enabled)))
            .finish()
    }
}
