use async_trait::async_trait;
use code_hint::service::{
    ExecutionService, ExplainRequest, ExplainResponse, ExplanationService, HistoryEntry,
    HistoryService, RunRequest, RunResponse, SaveRequest, SaveResponse,
};
use code_hint::{
    ExplanationOrigin, HintConfig, HintError, HintResult, JudgeLanguage, Session,
    SupportedLanguage,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

/// Explanation service that always answers with the same reply
struct FixedExplainer(HintResult<String>);

#[async_trait]
impl ExplanationService for FixedExplainer {
    async fn explain(&self, _request: ExplainRequest) -> HintResult<ExplainResponse> {
        match &self.0 {
            Ok(text) => Ok(ExplainResponse {
                explanation: text.clone(),
            }),
            Err(_) => Err(HintError::service("explain", "connection refused")),
        }
    }
}

/// Execution service that records what it was asked to run
#[derive(Default)]
struct RecordingRunner {
    requests: Arc<Mutex<Vec<RunRequest>>>,
    fail: bool,
}

#[async_trait]
impl ExecutionService for RecordingRunner {
    async fn run(&self, request: RunRequest) -> HintResult<RunResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(HintError::service("run", "judge unavailable"));
        }
        Ok(RunResponse {
            output: format!("ran {} bytes", request.code.len()),
        })
    }
}

#[derive(Default)]
struct MemoryHistory {
    saved: Arc<Mutex<Vec<SaveRequest>>>,
}

#[async_trait]
impl HistoryService for MemoryHistory {
    async fn save(&self, request: SaveRequest) -> HintResult<SaveResponse> {
        self.saved.lock().unwrap().push(request);
        Ok(SaveResponse {
            success: true,
            message: "Code saved".to_string(),
            ..SaveResponse::default()
        })
    }

    async fn share(&self, request: SaveRequest) -> HintResult<SaveResponse> {
        let id = {
            let mut saved = self.saved.lock().unwrap();
            saved.push(request);
            saved.len()
        };
        Ok(SaveResponse {
            success: true,
            message: "Share link created".to_string(),
            share_link: Some(format!("http://localhost/share/{id}")),
            error: None,
        })
    }

    async fn history(&self, limit: usize) -> HintResult<Vec<HistoryEntry>> {
        let saved = self.saved.lock().unwrap();
        Ok(saved
            .iter()
            .enumerate()
            .rev()
            .take(limit)
            .map(|(index, request)| HistoryEntry {
                id: index as i64 + 1,
                title: request.title.clone(),
                language: request.language.clone(),
                code: request.code.clone(),
                activity_type: None,
                created_at: "2024-03-01T12:00:00Z".to_string(),
            })
            .collect())
    }
}

fn python_session() -> Session {
    Session::new(SupportedLanguage::Python, HintConfig::default())
}

const PYTHON_SOURCE: &str = "import os\ndef f():\n    print(os.name)\n";

#[tokio::test]
async fn test_explain_without_service_uses_local_summary() {
    let explanation = python_session().explain(PYTHON_SOURCE).await.unwrap();

    assert_eq!(explanation.origin, ExplanationOrigin::Local);
    assert!(explanation.text.starts_with("Language: Python\n"));
    assert!(explanation.text.contains("Imports (1):"));
}

#[tokio::test]
async fn test_explain_prefers_remote_reply() {
    let session = python_session()
        .with_explanation_service(Box::new(FixedExplainer(Ok("Prints the OS name.".to_string()))));

    let explanation = session.explain(PYTHON_SOURCE).await.unwrap();

    assert_eq!(explanation.origin, ExplanationOrigin::Remote);
    assert_eq!(explanation.text, "Prints the OS name.");
}

#[tokio::test]
async fn test_explain_falls_back_on_service_error() {
    let session = python_session().with_explanation_service(Box::new(FixedExplainer(Err(
        HintError::service("explain", "down"),
    ))));

    let explanation = session.explain(PYTHON_SOURCE).await.unwrap();

    assert_eq!(explanation.origin, ExplanationOrigin::Local);
}

#[tokio::test]
async fn test_explain_falls_back_on_empty_reply() {
    let session =
        python_session().with_explanation_service(Box::new(FixedExplainer(Ok("  \n".to_string()))));

    assert_eq!(
        session.explain(PYTHON_SOURCE).await.unwrap().origin,
        ExplanationOrigin::Local
    );
}

#[tokio::test]
async fn test_missing_linter_note_is_appended() {
    let note = "Linter tool not found: pylint";
    let session =
        python_session().with_explanation_service(Box::new(FixedExplainer(Ok(note.to_string()))));

    let explanation = session.explain(PYTHON_SOURCE).await.unwrap();

    assert_eq!(explanation.origin, ExplanationOrigin::Local);
    assert!(explanation.text.contains("Quick recommendations:"));
    assert!(explanation.text.trim_end().ends_with(note));
}

#[tokio::test]
async fn test_explain_rejects_blank_source() {
    let result = python_session().explain("   \n").await;
    assert!(matches!(result, Err(HintError::Validation { .. })));
}

#[tokio::test]
async fn test_run_sends_judge_language_and_trimmed_code() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner {
        requests: Arc::clone(&requests),
        fail: false,
    };
    let session = python_session().with_execution_service(Box::new(runner));

    let outcome = session.run("\nprint(input())\n", "42").await.unwrap();

    assert!(!outcome.simulated);
    assert_eq!(outcome.output, "ran 14 bytes");

    let sent = requests.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].language_id, JudgeLanguage::Python);
    assert_eq!(sent[0].code, "print(input())");
    assert_eq!(sent[0].stdin, "42");
}

#[tokio::test]
async fn test_run_simulates_when_service_fails() {
    let runner = RecordingRunner {
        fail: true,
        ..RecordingRunner::default()
    };
    let session = Session::new(SupportedLanguage::JavaScript, HintConfig::default())
        .with_execution_service(Box::new(runner));

    let outcome = session.run("let x = 5\nconsole.log(x)", "").await.unwrap();

    assert!(outcome.simulated);
    assert!(outcome.output.starts_with("Compilation Error:"));
}

#[tokio::test]
async fn test_html_is_never_sent_to_the_judge() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let runner = RecordingRunner {
        requests: Arc::clone(&requests),
        fail: false,
    };
    let session = Session::new(SupportedLanguage::Html, HintConfig::default())
        .with_execution_service(Box::new(runner));

    let outcome = session.run("<p>hi</p>", "").await.unwrap();

    assert!(outcome.simulated);
    assert!(outcome.output.starts_with("HTML validated successfully!"));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_share_and_list_history() {
    let saved = Arc::new(Mutex::new(Vec::new()));
    let history = MemoryHistory {
        saved: Arc::clone(&saved),
    };
    let session = python_session().with_history_service(Box::new(history));

    let response = session.save(PYTHON_SOURCE, "   ").await.unwrap();
    assert!(response.success);

    let shared = session.share(PYTHON_SOURCE, " Demo ").await.unwrap();
    assert_eq!(shared.share_link.as_deref(), Some("http://localhost/share/2"));

    let entries = session.history(10).await.unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Demo", "Untitled"]);
    assert_eq!(entries[0].language, "Python");
}

#[tokio::test]
async fn test_history_without_service_is_a_service_error() {
    let result = python_session().history(5).await;
    assert!(matches!(result, Err(HintError::Service { .. })));
}
