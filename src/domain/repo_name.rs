use regex::Regex;

use crate::config::{RepoNameConfig, TruncateMode};
use crate::error::{AppError, AppResult};

/// Turns `owner/name` into the name shown in status lines.
#[derive(Debug, Clone)]
pub struct RepoNameFormatter {
    substitutions: Vec<(Regex, String)>,
    base_users: Vec<String>,
    truncate: TruncateMode,
}

impl RepoNameFormatter {
    pub fn new(config: &RepoNameConfig) -> AppResult<Self> {
        let substitutions = config
            .substitutions
            .iter()
            .map(|rule| {
                Regex::new(&rule.pattern)
                    .map(|regex| (regex, rule.replacement.clone()))
                    .map_err(|err| {
                        AppError::Configuration(format!(
                            "invalid repository pattern '{}': {err}",
                            rule.pattern
                        ))
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            substitutions,
            base_users: config.base_users.clone(),
            truncate: config.truncate,
        })
    }

    pub fn display_name(&self, full_name: &str) -> String {
        for (regex, replacement) in &self.substitutions {
            if let Some(captures) = regex.captures(full_name) {
                let mut expanded = String::new();
                captures.expand(replacement, &mut expanded);
                return expanded;
            }
        }

        let (Some((owner, _)), Some((_, name))) =
            (full_name.split_once('/'), full_name.rsplit_once('/'))
        else {
            return full_name.to_string();
        };
        match self.truncate {
            TruncateMode::BaseUser if self.base_users.iter().any(|user| user == owner) => {
                name.to_string()
            }
            TruncateMode::All => name.to_string(),
            TruncateMode::BaseUser | TruncateMode::Never => full_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Substitution;

    fn formatter(truncate: TruncateMode, substitutions: &[(&str, &str)]) -> RepoNameFormatter {
        RepoNameFormatter::new(&RepoNameConfig {
            base_users: vec!["ninjack-dev".to_string()],
            truncate,
            substitutions: substitutions
                .iter()
                .map(|(pattern, replacement)| Substitution {
                    pattern: pattern.to_string(),
                    replacement: replacement.to_string(),
                })
                .collect(),
        })
        .unwrap()
    }

    #[test]
    fn first_matching_substitution_wins() {
        let names = formatter(
            TruncateMode::BaseUser,
            &[
                (r"ninjack-dev/dotfiles", "my dotfiles"),
                (r"ninjack-dev/(.*)", "my $1"),
            ],
        );
        assert_eq!(names.display_name("ninjack-dev/dotfiles"), "my dotfiles");
        assert_eq!(names.display_name("ninjack-dev/website"), "my website");
    }

    #[test]
    fn substitution_supports_named_groups() {
        let names = formatter(TruncateMode::Never, &[(r"(?P<owner>\w+)/blog", "${owner}'s blog")]);
        assert_eq!(names.display_name("octocat/blog"), "octocat's blog");
    }

    #[test]
    fn user_mode_only_strips_base_users() {
        let names = formatter(TruncateMode::BaseUser, &[]);
        assert_eq!(names.display_name("ninjack-dev/tools"), "tools");
        assert_eq!(names.display_name("octocat/Hello-World"), "octocat/Hello-World");
    }

    #[test]
    fn all_mode_strips_every_owner() {
        let names = formatter(TruncateMode::All, &[]);
        assert_eq!(names.display_name("octocat/Hello-World"), "Hello-World");
    }

    #[test]
    fn none_mode_keeps_full_name() {
        let names = formatter(TruncateMode::Never, &[]);
        assert_eq!(names.display_name("ninjack-dev/tools"), "ninjack-dev/tools");
    }

    #[test]
    fn names_without_owner_pass_through() {
        let names = formatter(TruncateMode::All, &[]);
        assert_eq!(names.display_name("standalone"), "standalone");
    }

    #[test]
    fn invalid_pattern_is_a_configuration_error() {
        let err = RepoNameFormatter::new(&RepoNameConfig {
            substitutions: vec![Substitution {
                pattern: "(".to_string(),
                replacement: String::new(),
            }],
            ..RepoNameConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
