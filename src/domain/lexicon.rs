//! Commit-message verb lookup.
//!
//! The table maps every accepted inflection (base, third person, past,
//! `-ing`, and a few irregular spellings) onto its canonical [`Verb`].
//! Inflections are never derived at runtime.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::verb::Verb;

/// Verb assumed when a message contains no recognizable word.
pub const FALLBACK_VERB: Verb = Verb::Update;

const REGULAR_FORMS: &[(Verb, [&str; 4])] = &[
    (Verb::Add, ["add", "adds", "added", "adding"]),
    (Verb::Remove, ["remove", "removes", "removed", "removing"]),
    (Verb::Update, ["update", "updates", "updated", "updating"]),
    (Verb::Fix, ["fix", "fixes", "fixed", "fixing"]),
    (Verb::Change, ["change", "changes", "changed", "changing"]),
    (Verb::Refactor, ["refactor", "refactors", "refactored", "refactoring"]),
    (Verb::Revert, ["revert", "reverts", "reverted", "reverting"]),
    (Verb::Merge, ["merge", "merges", "merged", "merging"]),
    (Verb::Rename, ["rename", "renames", "renamed", "renaming"]),
    (Verb::Improve, ["improve", "improves", "improved", "improving"]),
    (Verb::Optimize, ["optimize", "optimizes", "optimized", "optimizing"]),
    (Verb::Enhance, ["enhance", "enhances", "enhanced", "enhancing"]),
    (Verb::Document, ["document", "documents", "documented", "documenting"]),
    (Verb::Comment, ["comment", "comments", "commented", "commenting"]),
    (Verb::Format, ["format", "formats", "formatted", "formatting"]),
    (Verb::Configure, ["configure", "configures", "configured", "configuring"]),
    (Verb::Bump, ["bump", "bumps", "bumped", "bumping"]),
    (Verb::Lock, ["lock", "locks", "locked", "locking"]),
    (Verb::Initialize, ["initialize", "initializes", "initialized", "initializing"]),
    (Verb::Test, ["test", "tests", "tested", "testing"]),
    (Verb::Mock, ["mock", "mocks", "mocked", "mocking"]),
    (Verb::Validate, ["validate", "validates", "validated", "validating"]),
    (Verb::Squash, ["squash", "squashes", "squashed", "squashing"]),
    (Verb::Tag, ["tag", "tags", "tagged", "tagging"]),
    (Verb::Create, ["create", "creates", "created", "creating"]),
    (Verb::Delete, ["delete", "deletes", "deleted", "deleting"]),
];

const IRREGULAR_FORMS: &[(&str, Verb)] = &[
    ("cherry", Verb::Cherry),
    ("cherry-pick", Verb::Cherry),
    ("cherry-picked", Verb::Cherry),
];

static LEXICON: LazyLock<HashMap<&'static str, Verb>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (verb, forms) in REGULAR_FORMS {
        for form in forms {
            table.insert(*form, *verb);
        }
    }
    for (form, verb) in IRREGULAR_FORMS {
        table.insert(*form, *verb);
    }
    table
});

/// Looks a single word up, ignoring case.
pub fn lookup(word: &str) -> Option<Verb> {
    LEXICON.get(word.to_lowercase().as_str()).copied()
}

/// Returns the verb of the first whitespace-separated token found in the
/// lexicon, or [`FALLBACK_VERB`] when no token matches.
///
/// The match need not be the first word: "I fixed a bug" yields `fix`.
pub fn extract_verb(message: &str) -> Verb {
    message
        .split_whitespace()
        .find_map(lookup)
        .unwrap_or(FALLBACK_VERB)
}
