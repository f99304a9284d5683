use crate::config::RegistryConfig;
use crate::directory::DirectoryView;
use crate::model::School;
use std::path::PathBuf;

pub mod config;
pub mod list;
pub mod register;
pub mod states;

#[derive(Debug, Clone)]
pub struct RegistryPaths {
    pub home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_schools: Vec<School>,
    pub directory: Option<DirectoryView>,
    pub states: Vec<String>,
    pub config: Option<RegistryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_schools(mut self, schools: Vec<School>) -> Self {
        self.affected_schools = schools;
        self
    }

    pub fn with_directory(mut self, directory: DirectoryView) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_states(mut self, states: Vec<String>) -> Self {
        self.states = states;
        self
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
