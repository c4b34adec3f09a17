// src/main.rs

use clap::Parser;
use health_content_ideas::{
    deliver, plan_download, render_trend_list, AppError, CommandLineInput, DownloadMode,
    ErrorKind, ExternalService, IdeaPipeline, IdeaTable, PipelineConfig, RunResult,
    ServiceStatus, Session, SessionCommand,
};
use health_content_ideas::session::{parse_command, SESSION_HELP};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Sets up logging configuration.
///
/// Console output goes to stderr so pipe mode keeps stdout for the CSV.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("health_content_ideas.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("console", Box::new(console_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Drives operator actions against one session.
struct ContentStudio<'a> {
    config: &'a PipelineConfig,
    /// The startup error is kept so status and refused runs can show it.
    pipeline: Result<IdeaPipeline, AppError>,
    session: Session,
}

impl<'a> ContentStudio<'a> {
    fn new(config: &'a PipelineConfig, pipeline: Result<IdeaPipeline, AppError>) -> Self {
        Self {
            config,
            pipeline,
            session: Session::new(config.settings),
        }
    }

    /// Status text goes to stderr in pipe mode so stdout carries only CSV.
    fn say(&self, message: impl std::fmt::Display) {
        if self.config.pipe {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }

    fn report_status(&self) {
        self.say("🔑 System Status");
        let startup_error = self.pipeline.as_ref().err();
        for service in [ExternalService::Suggestions, ExternalService::Generation] {
            let status = ServiceStatus::of(service, &self.config.credentials, startup_error);
            let mark = if status.is_ready() { "✅" } else { "❌" };
            self.say(format!("  {} {} {}", mark, service, status));
        }
        self.say(format!("⚙️  Settings: {}", self.session.settings()));
    }

    fn report_error(&self, err: &AppError) {
        if err.is_warning() {
            log::warn!("{}", err);
            self.say(format!("⚠️  {}", err));
        } else if err.kind() == ErrorKind::ConfigurationMissing {
            log::error!("{}", err);
            self.say(format!("🔑 {}", err));
        } else {
            log::error!("{}", err);
            self.say(format!("❌ Error: {}", err));
        }
    }

    /// Triggers one run and shows its result.
    async fn generate(&mut self, input: &str) {
        self.say(format!(
            "🔍 Analyzing health search trends in India for: {}",
            input.trim()
        ));

        let outcome = self
            .session
            .run(input, self.pipeline.as_ref())
            .await
            .map(render_result);
        match outcome {
            Ok(rendered) => {
                self.say(rendered);
                self.session.mark_displayed();
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn show_trends(&self) {
        match self.session.result() {
            Some(result) => {
                self.say(format!(
                    "📊 {} health search trends from Indian patients:",
                    result.trends_analyzed()
                ));
                self.say(render_trend_list(&result.suggestions).trim_end());
            }
            None => self.report_error(&AppError::NothingToDeliver),
        }
    }

    fn download(&self) {
        let Some(result) = self.session.result() else {
            self.report_error(&AppError::NothingToDeliver);
            return;
        };

        let mode = if self.config.pipe {
            DownloadMode::Pipe
        } else {
            DownloadMode::File(&self.config.output_dir)
        };

        match plan_download(result, mode).and_then(deliver) {
            Ok(delivery) => {
                if let Some(path) = delivery.written_file() {
                    self.say(format!("📥 Content ideas saved to {}", path.display()));
                }
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Applies one operator action. Returns `false` when the session ends.
    async fn handle(&mut self, line: &str) -> bool {
        self.session.begin_action();

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                self.report_error(&e.into());
                return true;
            }
        };

        match command {
            SessionCommand::Run(topic) => self.generate(&topic).await,
            SessionCommand::SetCount(count) => {
                self.session.set_count(count);
                self.say(format!("⚙️  Settings: {}", self.session.settings()));
            }
            SessionCommand::SetFormat(format) => {
                self.session.set_format(format);
                self.say(format!("⚙️  Settings: {}", self.session.settings()));
            }
            SessionCommand::SetAudience(audience) => {
                self.session.set_audience(audience);
                self.say(format!("⚙️  Settings: {}", self.session.settings()));
            }
            SessionCommand::ShowTrends => self.show_trends(),
            SessionCommand::Download => self.download(),
            SessionCommand::Status => self.report_status(),
            SessionCommand::Help => self.say(SESSION_HELP),
            SessionCommand::Quit => return false,
        }
        true
    }

    /// Reads operator input line by line until `:quit` or end of input.
    async fn interact(&mut self) -> Result<(), AppError> {
        self.say("📝 Enter a health topic (e.g. diabetes management, PCOS, child nutrition). :help for commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            if self.config.pipe {
                eprint!("> ");
            } else {
                print!("> ");
                std::io::stdout().flush()?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.handle(&line).await {
                break;
            }
        }

        log::info!("Session ended");
        Ok(())
    }

    /// One run for the `--topic` argument, then the download.
    async fn run_once(&mut self, topic: &str) {
        self.generate(topic).await;
        if self.session.result().is_some() {
            self.download();
        }
    }
}

/// Success banner, statistics, and the idea table.
fn render_result(result: &RunResult) -> String {
    format!(
        "🎉 Generated {} content ideas for your clinic!\n📈 {} patient search trends analyzed\n🕒 Completed {}\n\n📋 Your Health Content Ideas ({})\n{}",
        result.idea_count(),
        result.trends_analyzed(),
        result.completed_label(),
        result.settings,
        IdeaTable::new(&result.ideas).render()
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_loaded = dotenvy::dotenv().is_ok();
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;
    if env_loaded {
        log::debug!("Loaded credentials from .env");
    }

    let config = PipelineConfig::resolve(cli)?;

    let pipeline = match IdeaPipeline::from_config(&config) {
        Err(e) if e.kind() == ErrorKind::ConfigurationMissing => {
            log::warn!("{}", e);
            Err(e)
        }
        Err(e) => return Err(e.into()),
        ok => ok,
    };

    let topic = config.topic.clone();
    let mut studio = ContentStudio::new(&config, pipeline);
    studio.report_status();

    match topic {
        Some(topic) => studio.run_once(&topic).await,
        None => studio.interact().await?,
    }

    Ok(())
}
