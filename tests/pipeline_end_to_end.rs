// End-to-end runs of a session against in-memory suggestion and generation services.

use health_content_ideas::{
    export_filename, AppError, ErrorKind, ExternalService, GeneratedText, IdeaCount, IdeaPipeline,
    IdeaTable, PromptComposer, RenderedPrompt, RunState, Session, Settings, SuggestionRepository,
    TextGenerator, Topic,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned suggestion service that counts how often it is asked.
struct MockSuggestions {
    response: Result<Vec<String>, String>,
    calls: AtomicUsize,
}

impl MockSuggestions {
    fn returning(values: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(values.iter().map(|v| v.to_string()).collect()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SuggestionRepository for MockSuggestions {
    async fn fetch_suggestions(&self, _topic: &Topic) -> Result<Vec<String>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .map_err(|message| AppError::external(ExternalService::Suggestions, message))
    }
}

/// Canned generator that records every prompt it receives.
struct MockGenerator {
    response: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &RenderedPrompt) -> Result<GeneratedText, AppError> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        self.response
            .clone()
            .map(GeneratedText::new)
            .map_err(|message| AppError::external(ExternalService::Generation, message))
    }
}

fn pipeline(suggestions: &Arc<MockSuggestions>, generator: &Arc<MockGenerator>) -> IdeaPipeline {
    IdeaPipeline::new(
        suggestions.clone(),
        generator.clone(),
        PromptComposer::builtin().unwrap(),
    )
}

const EIGHT_NUMBERED_LINES: &str = "\
1. 5 Early Signs of Diabetes You Shouldn't Ignore
2. Is Your Chai Raising Your Blood Sugar?
3. Diabetes-Friendly Indian Breakfasts
4. - Walking After Meals: Does It Help?
5. Understanding Your HbA1c Report
6. Myths About Sugar and Diabetes
7. • Foot Care Tips for Diabetics
8. When Should You Test Your Blood Sugar?";

#[tokio::test]
async fn diabetes_run_displays_eight_rows_in_generator_order() {
    let suggestions = MockSuggestions::returning(&[
        "diabetes symptoms",
        "diabetes diet",
        "diabetes test",
        "diabetes type 2",
        "diabetes medicine",
    ]);
    let generator = MockGenerator::returning(EIGHT_NUMBERED_LINES);
    let pipeline = pipeline(&suggestions, &generator);

    let mut session = Session::new(Settings {
        count: IdeaCount::Eight,
        ..Settings::default()
    });
    let result = session.run("diabetes", Ok(&pipeline)).await.unwrap();

    let table = IdeaTable::new(&result.ideas);
    let rows: Vec<(usize, String)> = table
        .rows()
        .map(|(i, idea)| (i, idea.as_str().to_string()))
        .collect();

    assert_eq!(result.trends_analyzed(), 5);
    assert_eq!(
        rows,
        vec![
            (1, "5 Early Signs of Diabetes You Shouldn't Ignore".to_string()),
            (2, "Is Your Chai Raising Your Blood Sugar?".to_string()),
            (3, "Diabetes-Friendly Indian Breakfasts".to_string()),
            (4, "Walking After Meals: Does It Help?".to_string()),
            (5, "Understanding Your HbA1c Report".to_string()),
            (6, "Myths About Sugar and Diabetes".to_string()),
            (7, "Foot Care Tips for Diabetics".to_string()),
            (8, "When Should You Test Your Blood Sugar?".to_string()),
        ]
    );
    assert_eq!(export_filename(&result.topic), "diabetes_health_content_ideas.csv");

    assert_eq!(session.state(), &RunState::Parsed);
    session.mark_displayed();
    assert_eq!(session.state(), &RunState::Displayed);
    assert_eq!(suggestions.calls(), 1);
}

#[tokio::test]
async fn prompt_carries_settings_and_sorted_unique_trends() {
    let suggestions = MockSuggestions::returning(&["pcos diet", "pcos symptoms", "pcos diet"]);
    let generator = MockGenerator::returning("1. Idea");
    let pipeline = pipeline(&suggestions, &generator);

    let mut session = Session::default();
    session.run("  pcos  ", Ok(&pipeline)).await.unwrap();

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("create 12 engaging content ideas"));
    assert!(prompts[0].contains("- Medical Topic: pcos\n"));
    assert!(prompts[0].contains(r#"["pcos diet", "pcos symptoms"]"#));
}

#[tokio::test]
async fn blank_topic_makes_no_external_call() {
    let suggestions = MockSuggestions::returning(&["anything"]);
    let generator = MockGenerator::returning("1. Idea");
    let pipeline = pipeline(&suggestions, &generator);

    let mut session = Session::default();
    for input in ["", "   ", "\t\n"] {
        let err = session.run(input, Ok(&pipeline)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    assert_eq!(suggestions.calls(), 0);
    assert!(generator.prompts().is_empty());
    assert_eq!(session.state(), &RunState::Idle);
}

#[tokio::test]
async fn empty_suggestions_halt_before_generation() {
    let suggestions = MockSuggestions::returning(&[]);
    let generator = MockGenerator::returning("1. Idea");
    let pipeline = pipeline(&suggestions, &generator);

    let mut session = Session::default();
    let err = session.run("rare topic", Ok(&pipeline)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoTrendsFound);
    assert!(err.is_warning());
    assert_eq!(session.state(), &RunState::NoTrendsFound);
    assert!(generator.prompts().is_empty());
    assert!(session.result().is_none());
}

#[tokio::test]
async fn fetch_failure_surfaces_message_and_skips_generation() {
    let suggestions = MockSuggestions::failing("Invalid API key.");
    let generator = MockGenerator::returning("1. Idea");
    let pipeline = pipeline(&suggestions, &generator);

    let mut session = Session::default();
    let err = session.run("asthma", Ok(&pipeline)).await.unwrap_err();

    assert_eq!(
        err.kind(),
        ErrorKind::ExternalService(ExternalService::Suggestions)
    );
    assert_eq!(err.to_string(), "search suggestion service error: Invalid API key.");
    assert_eq!(
        session.state(),
        &RunState::FetchFailed {
            message: "search suggestion service error: Invalid API key.".to_string()
        }
    );
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn generation_failure_discards_previous_result() {
    let suggestions = MockSuggestions::returning(&["migraine triggers"]);
    let good = MockGenerator::returning("1. Know your triggers");
    let bad = MockGenerator::failing("Rate limit reached");

    let mut session = Session::default();
    session
        .run("migraine", Ok(&pipeline(&suggestions, &good)))
        .await
        .unwrap();
    assert!(session.result().is_some());

    let err = session
        .run("migraine", Ok(&pipeline(&suggestions, &bad)))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::ExternalService(ExternalService::Generation)
    );
    assert!(matches!(session.state(), RunState::GenerateFailed { .. }));
    assert!(session.result().is_none());

    session.begin_action();
    assert_eq!(session.state(), &RunState::Idle);
}

#[tokio::test]
async fn new_run_replaces_previous_result() {
    let suggestions = MockSuggestions::returning(&["eye strain"]);
    let first = MockGenerator::returning("1. First");
    let second = MockGenerator::returning("- Second\n- Third");

    let mut session = Session::default();
    session
        .run("eye care", Ok(&pipeline(&suggestions, &first)))
        .await
        .unwrap();
    session.mark_displayed();

    let result = session
        .run("screen time", Ok(&pipeline(&suggestions, &second)))
        .await
        .unwrap();
    assert_eq!(result.topic.as_str(), "screen time");
    assert_eq!(result.idea_count(), 2);
}

#[tokio::test]
async fn fewer_lines_than_requested_is_not_an_error() {
    let suggestions = MockSuggestions::returning(&["vitamin d"]);
    let generator = MockGenerator::returning("Here are your ideas:\n\n1. Sunlight and You\n2. ");
    let pipeline = pipeline(&suggestions, &generator);

    let mut session = Session::new(Settings {
        count: IdeaCount::Twenty,
        ..Settings::default()
    });
    let result = session.run("vitamin d", Ok(&pipeline)).await.unwrap();

    let ideas: Vec<&str> = result.ideas.iter().map(|idea| idea.as_str()).collect();
    insta::assert_debug_snapshot!(ideas, @r###"
    [
        "Here are your ideas:",
        "Sunlight and You",
    ]
    "###);
}
