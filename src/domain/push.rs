use crate::domain::file::{ChangedFileRecord, FileStatus, resolve_representative};
use crate::domain::lexicon::extract_verb;

/// How the verb fallback is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbRendering {
    /// The canonical tag as is ("update").
    #[default]
    Bare,
    /// The `-ing` form ("updating").
    Participle,
}

/// First commit of a push, as far as the status line needs it.
#[derive(Debug, Clone, Copy)]
pub struct PushedCommit<'a> {
    pub repo: &'a str,
    pub message: &'a str,
    pub files: Option<&'a [ChangedFileRecord]>,
}

impl PushedCommit<'_> {
    pub fn describe(&self, rendering: VerbRendering) -> String {
        let repo = self.repo;
        let Some(file) = self.files.and_then(resolve_representative) else {
            let verb = extract_verb(self.message);
            let phrase = match rendering {
                VerbRendering::Bare => verb.as_str().to_string(),
                VerbRendering::Participle => verb.present_participle(),
            };
            return format!("Last seen {phrase} {repo}");
        };

        let name = &file.filename;
        match file.status {
            FileStatus::Modified => format!("Last seen working on {name} in {repo}"),
            FileStatus::Added => format!("Last seen adding {name} to {repo}"),
            FileStatus::Removed => format!("Last seen removing {name} from {repo}"),
            FileStatus::Renamed => {
                let previous = file.previous_filename.as_deref().unwrap_or(name);
                format!("Last seen renaming {previous} to {name} in {repo}")
            }
            // Lowercase 'last' on purpose.
            FileStatus::Changed => format!("last seen changing {name} in {repo}"),
            // No source name is available for a copy.
            FileStatus::Copied | FileStatus::Unchanged => format!("Last seen working on {repo}"),
        }
    }
}
