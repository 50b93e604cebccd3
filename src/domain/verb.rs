/// Action category inferred from a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Update,
    Fix,
    Revert,
    Add,
    Create,
    Delete,
    Remove,
    Change,
    Refactor,
    Merge,
    Rename,
    Improve,
    Optimize,
    Enhance,
    Validate,
    Document,
    Comment,
    Format,
    Configure,
    Bump,
    Lock,
    Initialize,
    Test,
    Mock,
    Cherry,
    Squash,
    Tag,
}

impl Verb {
    #[cfg(test)]
    pub const ALL: [Verb; 27] = [
        Verb::Update,
        Verb::Fix,
        Verb::Revert,
        Verb::Add,
        Verb::Create,
        Verb::Delete,
        Verb::Remove,
        Verb::Change,
        Verb::Refactor,
        Verb::Merge,
        Verb::Rename,
        Verb::Improve,
        Verb::Optimize,
        Verb::Enhance,
        Verb::Validate,
        Verb::Document,
        Verb::Comment,
        Verb::Format,
        Verb::Configure,
        Verb::Bump,
        Verb::Lock,
        Verb::Initialize,
        Verb::Test,
        Verb::Mock,
        Verb::Cherry,
        Verb::Squash,
        Verb::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Update => "update",
            Verb::Fix => "fix",
            Verb::Revert => "revert",
            Verb::Add => "add",
            Verb::Create => "create",
            Verb::Delete => "delete",
            Verb::Remove => "remove",
            Verb::Change => "change",
            Verb::Refactor => "refactor",
            Verb::Merge => "merge",
            Verb::Rename => "rename",
            Verb::Improve => "improve",
            Verb::Optimize => "optimize",
            Verb::Enhance => "enhance",
            Verb::Validate => "validate",
            Verb::Document => "document",
            Verb::Comment => "comment",
            Verb::Format => "format",
            Verb::Configure => "configure",
            Verb::Bump => "bump",
            Verb::Lock => "lock",
            Verb::Initialize => "initialize",
            Verb::Test => "test",
            Verb::Mock => "mock",
            Verb::Cherry => "cherry",
            Verb::Squash => "squash",
            Verb::Tag => "tag",
        }
    }

    /// Inflects the base form into its `-ing` form.
    ///
    /// Only used when participle rendering is switched on in the
    /// configuration; the default status line carries the bare tag.
    pub fn present_participle(&self) -> String {
        match self {
            Verb::Refactor => return "refactoring".to_string(),
            Verb::Cherry => return "cherry-picking".to_string(),
            _ => {}
        }

        let base = self.as_str();
        if let Some(stem) = base.strip_suffix('e') {
            return format!("{stem}ing");
        }
        if ends_with_single_consonant_vowel_consonant(base) {
            let last = &base[base.len() - 1..];
            return format!("{base}{last}ing");
        }
        format!("{base}ing")
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// 'x' counts as a vowel here so that "fix" never doubles.
fn ends_with_single_consonant_vowel_consonant(word: &str) -> bool {
    let is_vowel = |c: u8| matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'x');
    match word.as_bytes() {
        [.., a, b, c] => !is_vowel(*a) && is_vowel(*b) && !is_vowel(*c),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bare_tags() {
        assert_eq!(Verb::Update.as_str(), "update");
        assert_eq!(Verb::Cherry.to_string(), "cherry");
    }

    #[test]
    fn inflects_present_participle() {
        assert_eq!(Verb::Update.present_participle(), "updating");
        assert_eq!(Verb::Tag.present_participle(), "tagging");
        assert_eq!(Verb::Format.present_participle(), "formatting");
        assert_eq!(Verb::Fix.present_participle(), "fixing");
        assert_eq!(Verb::Test.present_participle(), "testing");
        assert_eq!(Verb::Refactor.present_participle(), "refactoring");
        assert_eq!(Verb::Cherry.present_participle(), "cherry-picking");
    }

    #[test]
    fn all_lists_every_variant_once() {
        let unique: std::collections::HashSet<_> = Verb::ALL.iter().collect();
        assert_eq!(unique.len(), 27);
    }
}
