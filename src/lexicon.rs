// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Month names recognised in date ranges.
//!
//! Every month is accepted either as its three letter abbreviation or spelled
//! out in full, in any letter case: `jan`, `Jan`, `JANUARY`, `January`.

use std::sync::LazyLock;

use regex::Regex;

/// One alternation per calendar month, January first.
///
/// The index of a pattern plus one is the month number, so this list must
/// never be reordered.
const MONTH_PATTERNS: [&str; 12] = [
    "jan(?:uary)?",
    "feb(?:ruary)?",
    "mar(?:ch)?",
    "apr(?:il)?",
    "may",
    "jun(?:e)?",
    "jul(?:y)?",
    "aug(?:ust)?",
    "sep(?:tember)?",
    "oct(?:ober)?",
    "nov(?:ember)?",
    "dec(?:ember)?",
];

static LEXICON: LazyLock<MonthLexicon> = LazyLock::new(MonthLexicon::new);

#[derive(Debug)]
pub struct MonthLexicon {
    months: Vec<Regex>,
    combined: String,
}

impl MonthLexicon {
    fn new() -> Self {
        let months = MONTH_PATTERNS
            .iter()
            .map(|p| {
                // The patterns are compile time constants.
                Regex::new(&format!("(?i)^(?:{p})$")).expect("invalid month pattern")
            })
            .collect();

        Self {
            months,
            combined: MONTH_PATTERNS.join("|"),
        }
    }

    /// The process-wide lexicon, built on first use.
    pub fn global() -> &'static Self {
        &LEXICON
    }

    /// All month patterns joined by alternation, without a surrounding group.
    pub fn combined_pattern(&self) -> &str {
        &self.combined
    }

    /// Resolve a month token to its number, 1 for January up to 12 for
    /// December.
    ///
    /// Returns `None` when the token names no month. Tokens captured by the
    /// rule table always resolve.
    pub fn resolve_month(&self, token: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|re| re.is_match(token.trim()))
            .map(|i| i as u32 + 1)
    }
}
