// src/session.rs
//! Per-operator session context and the run state machine.
//!
//! A [`Session`] is created at startup, handed every operator action, and
//! dropped at exit. It owns the current settings and at most one
//! [`RunResult`]; a new run replaces it wholesale.

use crate::error::{AppError, ErrorKind};
use crate::formatting::parse_content_ideas;
use crate::model::RunResult;
use crate::pipeline::IdeaPipeline;
use crate::types::{Audience, ContentFormat, IdeaCount, Settings, Topic, ValidationError};
use std::fmt;

/// Where the current run stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Fetching,
    FetchFailed {
        message: String,
    },
    NoTrendsFound,
    Fetched,
    Generating,
    GenerateFailed {
        message: String,
    },
    Generated,
    Parsed,
    Displayed,
}

impl RunState {
    /// Failure states end the run and fall back to `Idle` on the next action.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. } | Self::NoTrendsFound | Self::GenerateFailed { .. }
        )
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Fetching => write!(f, "fetching"),
            Self::FetchFailed { .. } => write!(f, "fetch failed"),
            Self::NoTrendsFound => write!(f, "no trends found"),
            Self::Fetched => write!(f, "fetched"),
            Self::Generating => write!(f, "generating"),
            Self::GenerateFailed { .. } => write!(f, "generate failed"),
            Self::Generated => write!(f, "generated"),
            Self::Parsed => write!(f, "parsed"),
            Self::Displayed => write!(f, "displayed"),
        }
    }
}

/// The operator's context across runs.
#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    state: RunState,
    result: Option<RunResult>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: RunState::Idle,
            result: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// The last successful run, if it has not been replaced.
    pub fn result(&self) -> Option<&RunResult> {
        self.result.as_ref()
    }

    pub fn set_count(&mut self, count: IdeaCount) {
        self.settings.count = count;
    }

    pub fn set_format(&mut self, format: ContentFormat) {
        self.settings.format = format;
    }

    pub fn set_audience(&mut self, audience: Audience) {
        self.settings.audience = audience;
    }

    /// Called on every operator action; clears a failed run back to `Idle`.
    pub fn begin_action(&mut self) {
        if self.state.is_failure() {
            self.transition(RunState::Idle);
        }
    }

    /// Records that the result table was shown to the operator.
    pub fn mark_displayed(&mut self) {
        if self.state == RunState::Parsed {
            self.transition(RunState::Displayed);
        }
    }

    /// Runs the whole pipeline for `input` with the current settings.
    ///
    /// `pipeline` carries the startup error when the services could not be
    /// built; the run is then refused with that reason before anything else
    /// is checked. Blank input is refused
    /// before any external call. Any later failure clears the previous
    /// result and leaves the session in the matching failure state.
    pub async fn run(
        &mut self,
        input: &str,
        pipeline: Result<&IdeaPipeline, &AppError>,
    ) -> Result<&RunResult, AppError> {
        self.begin_action();

        let pipeline = pipeline.map_err(|startup| match startup {
            AppError::ConfigurationMissing(reason) => AppError::ConfigurationMissing(reason.clone()),
            other => AppError::ConfigurationMissing(other.to_string()),
        })?;
        let topic = Topic::new(input)?;
        let settings = self.settings;

        self.result = None;
        self.transition(RunState::Fetching);

        let suggestions = match pipeline.fetch_trends(&topic).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                let next = match e.kind() {
                    ErrorKind::NoTrendsFound => RunState::NoTrendsFound,
                    _ => RunState::FetchFailed {
                        message: e.to_string(),
                    },
                };
                self.transition(next);
                return Err(e);
            }
        };
        self.transition(RunState::Fetched);

        self.transition(RunState::Generating);
        let text = match pipeline.generate(&topic, &settings, &suggestions).await {
            Ok(text) => text,
            Err(e) => {
                self.transition(RunState::GenerateFailed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        self.transition(RunState::Generated);

        let ideas = parse_content_ideas(&text, settings.count.get());
        log::info!(
            "Parsed {} content ideas (requested {})",
            ideas.len(),
            settings.count
        );
        self.transition(RunState::Parsed);

        Ok(&*self.result.insert(RunResult {
            topic,
            settings,
            suggestions,
            ideas,
            completed_at: chrono::Utc::now(),
        }))
    }

    fn transition(&mut self, next: RunState) {
        log::debug!("Run state: {} -> {}", self.state, next);
        self.state = next;
    }
}

/// One line of operator input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Anything that is not a `:command` is a topic
    Run(String),
    SetCount(IdeaCount),
    SetFormat(ContentFormat),
    SetAudience(Audience),
    ShowTrends,
    Download,
    Status,
    Help,
    Quit,
}

/// Interprets one line of operator input.
pub fn parse_command(line: &str) -> Result<SessionCommand, ValidationError> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return Ok(SessionCommand::Run(trimmed.to_string()));
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "count" | "n" => Ok(SessionCommand::SetCount(argument.parse()?)),
        "format" | "f" => Ok(SessionCommand::SetFormat(argument.parse()?)),
        "audience" | "a" => Ok(SessionCommand::SetAudience(argument.parse()?)),
        "trends" => Ok(SessionCommand::ShowTrends),
        "download" | "save" => Ok(SessionCommand::Download),
        "status" => Ok(SessionCommand::Status),
        "help" | "h" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        _ => Err(ValidationError::UnknownChoice {
            field: "command",
            value: trimmed.to_string(),
        }),
    }
}

/// Help text for the interactive session.
pub const SESSION_HELP: &str = "\
Type a health topic and press Enter to generate ideas.
  :count <8|12|15|20>     number of ideas
  :format <name>          social-media-posts, patient-education, health-tips, faq-answers
  :audience <name>        general-patients, young-adults, parents, seniors
  :trends                 list the search trends behind the last result
  :download               save the last result as CSV (alias :save)
  :status                 show service status and current settings
  :help                   show this help
  :quit                   end the session";
