// src/config.rs
use crate::constants::{
    GENERATION_API_KEY_VAR, GENERATION_API_URL, SEARCH_API_KEY_VAR, SEARCH_API_URL,
};
use crate::error::{AppError, ExternalService};
use crate::types::{ApiKey, Audience, ContentFormat, IdeaCount, Settings, ValidatedUrl};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Health topic to generate ideas for; omit to start an interactive session
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Number of content ideas to generate
    #[arg(short = 'n', long, value_enum, default_value_t = IdeaCount::Twelve)]
    pub count: IdeaCount,

    /// Content format of the ideas
    #[arg(short, long, value_enum, default_value_t = ContentFormat::SocialMediaPosts)]
    pub format: ContentFormat,

    /// Target audience of the ideas
    #[arg(short, long, value_enum, default_value_t = Audience::GeneralPatients)]
    pub audience: Audience,

    /// Directory where CSV downloads are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Pipe mode - print the CSV to stdout instead of writing a file
    #[arg(short, long, default_value_t = false)]
    pub pipe: bool,

    /// Path to a custom Handlebars prompt template
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Search suggestion endpoint
    #[arg(long, default_value = SEARCH_API_URL)]
    pub search_url: String,

    /// Text generation endpoint
    #[arg(long, default_value = GENERATION_API_URL)]
    pub generation_url: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Which service credentials were found at startup.
///
/// Missing credentials never abort startup; they put the tool into a
/// visible "not ready" state and every run is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCredentials {
    pub search: Option<ApiKey>,
    pub generation: Option<ApiKey>,
}

impl ServiceCredentials {
    /// Reads both credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads both credentials through `lookup`; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).and_then(|value| ApiKey::new(value).ok());
        Self {
            search: read(SEARCH_API_KEY_VAR),
            generation: read(GENERATION_API_KEY_VAR),
        }
    }

    pub fn is_ready(&self, service: ExternalService) -> bool {
        match service {
            ExternalService::Suggestions => self.search.is_some(),
            ExternalService::Generation => self.generation.is_some(),
        }
    }

    /// Names of the environment variables that still need a value.
    pub fn missing(&self) -> Vec<&'static str> {
        [ExternalService::Suggestions, ExternalService::Generation]
            .into_iter()
            .filter(|service| !self.is_ready(*service))
            .map(|service| service.credential_var())
            .collect()
    }

    /// Both credentials, or `ConfigurationMissing` naming the absent ones.
    pub fn require(&self) -> Result<(&ApiKey, &ApiKey), AppError> {
        match (&self.search, &self.generation) {
            (Some(search), Some(generation)) => Ok((search, generation)),
            _ => Err(AppError::ConfigurationMissing(format!(
                "{} not set; add it to the environment or a .env file",
                self.missing().join(" and ")
            ))),
        }
    }
}

/// Readiness of one service as shown in the status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Ready,
    /// The credential variable is unset or blank
    MissingCredential(&'static str),
    /// Credentials are present but the services could not be set up
    StartupFailed(String),
}

impl ServiceStatus {
    /// Status of `service`, given the error (if any) from building the services.
    ///
    /// A startup error only marks a service as failed when every credential
    /// is present; otherwise the missing credential is the thing to fix.
    pub fn of(
        service: ExternalService,
        credentials: &ServiceCredentials,
        startup_error: Option<&AppError>,
    ) -> Self {
        if !credentials.is_ready(service) {
            return Self::MissingCredential(service.credential_var());
        }
        match startup_error {
            Some(err) if credentials.missing().is_empty() => Self::StartupFailed(err.to_string()),
            _ => Self::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::MissingCredential(var) => write!(f, "not ready: set {}", var),
            Self::StartupFailed(reason) => write!(f, "not ready: {}", reason),
        }
    }
}

/// Resolved configuration for the whole session.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub topic: Option<String>,
    pub settings: Settings,
    pub output_dir: PathBuf,
    pub pipe: bool,
    pub template: Option<PathBuf>,
    pub search_url: ValidatedUrl,
    pub generation_url: ValidatedUrl,
    pub credentials: ServiceCredentials,
}

impl PipelineConfig {
    /// Resolves the configuration from CLI input and the environment.
    ///
    /// Credentials are looked up but not required here.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, ServiceCredentials::from_env())
    }

    pub fn resolve_with(
        cli: CommandLineInput,
        credentials: ServiceCredentials,
    ) -> Result<Self, AppError> {
        Ok(PipelineConfig {
            topic: cli.topic,
            settings: Settings::new(cli.count, cli.format, cli.audience),
            output_dir: cli.output_dir,
            pipe: cli.pipe,
            template: cli.template,
            search_url: ValidatedUrl::parse(&cli.search_url)?,
            generation_url: ValidatedUrl::parse(&cli.generation_url)?,
            credentials,
        })
    }
}
