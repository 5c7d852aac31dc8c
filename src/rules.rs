// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The shapes a date range may be written in.
//!
//! Rules are tried from the most to the least information present:
//!
//! ```txt
//! 1 January 1900 - 31 December 2000    # FullBoth
//! 1 January - 31 December 2000         # SharedYear
//! 1 - 31 December 2000                 # SharedMonthYear
//! ```
//!
//! Any amount of whitespace, line breaks included, is allowed around every
//! token, and the two halves are separated by a hyphen or an en dash.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::{Captures, Regex};

use crate::lexicon::MonthLexicon;

static RULES: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::new(MonthLexicon::global()));

/// Which end of the range each capture group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldLayout {
    /// `<day> <month> <year> - <day> <month> <year>`
    FullBoth,
    /// `<day> <month> - <day> <month> <year>`
    SharedYear,
    /// `<day> - <day> <month> <year>`
    SharedMonthYear,
}

/// Capture group indices of the fields of one end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub year: usize,
    pub month: usize,
    pub day: usize,
}

impl FieldLayout {
    /// In priority order.
    pub(crate) const ALL: [FieldLayout; 3] = [
        FieldLayout::FullBoth,
        FieldLayout::SharedYear,
        FieldLayout::SharedMonthYear,
    ];

    /// Capture groups for the start and the end of the range.
    ///
    /// A shared month or year is the same group on both sides.
    pub(crate) const fn endpoints(self) -> (Endpoint, Endpoint) {
        match self {
            FieldLayout::FullBoth => (
                Endpoint {
                    day: 1,
                    month: 2,
                    year: 3,
                },
                Endpoint {
                    day: 4,
                    month: 5,
                    year: 6,
                },
            ),
            FieldLayout::SharedYear => (
                Endpoint {
                    day: 1,
                    month: 2,
                    year: 5,
                },
                Endpoint {
                    day: 3,
                    month: 4,
                    year: 5,
                },
            ),
            FieldLayout::SharedMonthYear => (
                Endpoint {
                    day: 1,
                    month: 3,
                    year: 4,
                },
                Endpoint {
                    day: 2,
                    month: 3,
                    year: 4,
                },
            ),
        }
    }

    /// `{M}` stands for the alternation of all month names.
    ///
    /// Digits are ASCII only; `\d` would also take other scripts' digits.
    fn template(self) -> &'static str {
        match self {
            FieldLayout::FullBoth => {
                r"(?i)([0-9]{1,2})\s*({M})\s*([0-9]{4})\s*[–-]\s*([0-9]{1,2})\s*({M})\s*([0-9]{4})"
            }
            FieldLayout::SharedYear => r"(?i)([0-9]{1,2})\s*({M})\s*[–-]\s*([0-9]{1,2})\s*({M})\s*([0-9]{4})",
            FieldLayout::SharedMonthYear => r"(?i)([0-9]{1,2})\s*[–-]\s*([0-9]{1,2})\s*({M})\s*([0-9]{4})",
        }
    }
}

#[derive(Debug)]
pub(crate) struct PatternRule {
    regex: Regex,
    layout: FieldLayout,
}

impl PatternRule {
    fn new(layout: FieldLayout, lexicon: &MonthLexicon) -> Self {
        let pattern = layout
            .template()
            .replace("{M}", lexicon.combined_pattern());
        Self {
            // Built from constant templates only.
            regex: Regex::new(&pattern).expect("invalid rule pattern"),
            layout,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RuleTable {
    rules: Vec<PatternRule>,
}

impl RuleTable {
    fn new(lexicon: &MonthLexicon) -> Self {
        Self {
            rules: FieldLayout::ALL
                .into_iter()
                .map(|layout| PatternRule::new(layout, lexicon))
                .collect(),
        }
    }

    pub(crate) fn global() -> &'static Self {
        &RULES
    }

    /// Find the first rule, in priority order, that matches anywhere in
    /// `text`.
    pub(crate) fn find<'t>(&self, text: &'t str) -> Option<(FieldLayout, Captures<'t>)> {
        for rule in &self.rules {
            trace!("trying {:?} on {text:?}", rule.layout);
            if let Some(captures) = rule.regex.captures(text) {
                debug!(
                    "{:?} matched {:?}",
                    rule.layout,
                    captures.get(0).map_or("", |m| m.as_str())
                );
                return Some((rule.layout, captures));
            }
        }
        debug!("no rule matched {text:?}");
        None
    }
}
