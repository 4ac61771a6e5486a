//! Prefix tab completion over the command and file tables.

use crate::registry::{COMMANDS, FILES};

/// Outcome of a tab completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Exactly one match; the full replacement for the input line.
    Completed(String),
    /// Two or more matches, in table order. The input line stays as typed.
    Candidates(Vec<String>),
    NoMatch,
}

/// Complete the last word of `buffer`.
///
/// The buffer is split on single spaces. A lone word completes against
/// command names; any later word completes against virtual file names, and a
/// unique match replaces only that word. Matching is a case-sensitive
/// literal prefix test.
pub fn complete(buffer: &str) -> AutocompleteResult {
    let mut tokens: Vec<&str> = buffer.split(' ').collect();
    // `split` always yields at least one piece.
    let partial = tokens.pop().unwrap_or_default();

    let matches: Vec<&'static str> = if tokens.is_empty() {
        COMMANDS
            .iter()
            .map(|c| c.name)
            .filter(|name| name.starts_with(partial))
            .collect()
    } else {
        FILES
            .iter()
            .map(|f| f.name)
            .filter(|name| name.starts_with(partial))
            .collect()
    };

    match matches.as_slice() {
        [] => AutocompleteResult::NoMatch,
        [only] => {
            tokens.push(*only);
            AutocompleteResult::Completed(tokens.join(" "))
        },
        many => AutocompleteResult::Candidates(many.iter().map(|s| s.to_string()).collect()),
    }
}
