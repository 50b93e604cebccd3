use clap::{Args, Subcommand};

use crate::config::AppConfig;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the effective configuration (file, environment and defaults merged).
    Show,
}

pub fn run(command: ConfigCommand, config: &AppConfig) {
    match command {
        ConfigCommand::Show => {
            for line in show_lines(config) {
                println!("{line}");
            }
        }
    }
}

fn show_lines(config: &AppConfig) -> Vec<String> {
    let names = &config.repo_names;
    let mut lines = vec![
        format!("Resource directory: {}", config.resource_dir.display()),
        format!("Events file: {}", config.events_path().display()),
        format!("Participle verbs: {}", config.participles),
        format!("Base users: {}", display_list(&names.base_users)),
        format!("Truncate owner: {}", names.truncate.as_str()),
    ];
    if names.substitutions.is_empty() {
        lines.push("Substitutions: <none>".to_string());
    } else {
        lines.push("Substitutions:".to_string());
        lines.extend(
            names
                .substitutions
                .iter()
                .map(|rule| format!("  {} -> {}", rule.pattern, rule.replacement)),
        );
    }
    lines
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        "<not set>".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Substitution;

    #[test]
    fn shows_defaults() {
        let lines = show_lines(&AppConfig::default());
        assert!(lines.contains(&"Base users: <not set>".to_string()));
        assert!(lines.contains(&"Truncate owner: user".to_string()));
        assert!(lines.contains(&"Substitutions: <none>".to_string()));
    }

    #[test]
    fn lists_substitutions() {
        let mut config = AppConfig::default();
        config.repo_names.substitutions.push(Substitution {
            pattern: "ninjack-dev/(.*)".to_string(),
            replacement: "my $1".to_string(),
        });
        let lines = show_lines(&config);
        assert_eq!(lines.last().map(String::as_str), Some("  ninjack-dev/(.*) -> my $1"));
    }
}
