pub mod event;
pub mod file;
pub mod lexicon;
pub mod push;
pub mod repo_name;
pub mod template;
pub mod verb;
