use crate::domain::lexicon::extract_verb;
use crate::domain::verb::Verb;

/// Words are rejoined with single spaces, which the extractor treats the
/// same as the original whitespace.
pub fn run(words: &[String]) -> Verb {
    extract_verb(&words.join(" "))
}
