//! Phrase matching over commit messages

use crate::error::Result;
use crate::progress::ScanProgress;
use crate::types::Commit;
use regex::Regex;
use std::fmt;

/// Phrase every commit message has to contain
#[derive(Debug, Clone)]
pub enum MatchPhrase {
    /// Substring looked up in the normalized, lower-cased message.
    /// The phrase itself is used as given.
    Literal(String),
    /// Regular expression tested against the raw message
    Pattern(Regex),
}

impl MatchPhrase {
    /// Literal phrase
    pub fn literal(phrase: impl Into<String>) -> Self {
        Self::Literal(phrase.into())
    }

    /// Compile a pattern phrase
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Test a single message
    ///
    /// `Regex` keeps no match position between calls, so each message is
    /// evaluated independently of the ones before it.
    pub fn is_match(&self, message: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(message),
            Self::Literal(phrase) => normalize_message(message).contains(phrase.as_str()),
        }
    }
}

impl fmt::Display for MatchPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(phrase) => write!(f, "{phrase}"),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// Outcome of a match-all scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Every scanned commit matched
    pub all_matched: bool,
    /// First commit that did not match, present iff `all_matched` is false
    pub first_non_matching: Option<Commit>,
}

/// Whitespace as matched by ECMAScript `\s`: Unicode `Zs`, the ASCII
/// controls, the line/paragraph separators, and the BOM. Unlike
/// `char::is_whitespace`, U+0085 is not included and U+FEFF is.
const fn is_message_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Collapse whitespace runs to single spaces, trim, and lower-case
fn normalize_message(message: &str) -> String {
    message
        .split(is_message_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check that every commit message matches `phrase`
///
/// Scans in order and stops at the first message that does not match.
pub fn search_all_commit_messages(
    commits: &[Commit],
    phrase: &MatchPhrase,
    progress: &dyn ScanProgress,
) -> SearchResult {
    let first_non_matching = commits
        .iter()
        .find(|commit| {
            progress.on_compare(phrase, commit);
            !phrase.is_match(&commit.message)
        })
        .cloned();

    SearchResult {
        all_matched: first_non_matching.is_none(),
        first_non_matching,
    }
}
