use autoresearch_types::{
    AnalyzeResponse, ChatMessage, ChatRequest, ChatRole, Paper, ResearchEvent, ResearchOutcome,
    ResearchSession, RunId, SearchResponse, DEFAULT_YEAR,
};
use serde_json::json;

#[test]
fn test_paper_uses_camel_case_wire_names() {
    let paper = Paper::new("demo-1", "Title")
        .with_abstract("Body")
        .with_authors(["Dr. A", "Prof. B"])
        .with_year(2023)
        .with_citations(127)
        .with_venue("Venue");

    let value = serde_json::to_value(&paper).unwrap();

    assert_eq!(value["paperId"], "demo-1");
    assert_eq!(value["abstract"], "Body");
    assert_eq!(value["citationCount"], 127);
    assert_eq!(value["authors"][1]["name"], "Prof. B");
    assert!(value.get("summary").is_none());
    assert!(value.get("keyPoints").is_none());
}

#[test]
fn test_paper_tolerates_missing_fields() {
    let paper: Paper = serde_json::from_value(json!({ "id": "p1", "title": "Only a title" })).unwrap();

    assert_eq!(paper.id, "p1");
    assert_eq!(paper.citation_count, 0);
    assert!(paper.authors.is_empty());
    assert_eq!(paper.year, None);
    assert_eq!(paper.effective_year(), DEFAULT_YEAR);
    assert_eq!(paper.display_year(), "n.d.");
}

#[test]
fn test_author_list_joins_names() {
    let paper = Paper::new("p", "t").with_authors(["Z", "Y"]);
    assert_eq!(paper.author_list(), "Z, Y");
}

#[test]
fn test_loading_session_is_empty() {
    let session = ResearchSession::loading("graph neural networks");

    assert!(session.is_loading);
    assert!(session.papers.is_empty());
    assert!(session.literature_review.is_empty());
    assert!(session.key_findings.is_empty());
    assert_eq!(session.error, None);
}

#[test]
fn test_finish_clears_loading_flag() {
    let session = ResearchSession::loading("x")
        .with_papers(vec![Paper::new("p", "t")])
        .finish(Vec::new(), "review".into(), vec!["a".into()], None);

    assert!(session.is_terminal());
    assert_eq!(session.topic, "x");
    assert!(session.papers.is_empty());
}

#[test]
fn test_partial_session_deserializes() {
    let session: ResearchSession = serde_json::from_value(json!({ "topic": "robots" })).unwrap();

    assert_eq!(session.topic, "robots");
    assert!(!session.is_loading);
    assert!(session.key_findings.is_empty());
}

#[test]
fn test_chat_role_is_lowercase() {
    let value = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
    assert_eq!(value["role"], "assistant");

    let parsed: ChatMessage = serde_json::from_value(json!({ "role": "user", "content": "q" })).unwrap();
    assert_eq!(parsed.role, ChatRole::User);
}

#[test]
fn test_chat_request_reads_chat_history_key() {
    let request: ChatRequest = serde_json::from_value(json!({
        "message": "hello",
        "session": { "topic": "t" },
        "chatHistory": [{ "role": "user", "content": "earlier" }]
    }))
    .unwrap();

    assert_eq!(request.message.as_deref(), Some("hello"));
    assert_eq!(request.chat_history.len(), 1);
}

#[test]
fn test_search_response_without_papers_key() {
    let response: SearchResponse = serde_json::from_value(json!({ "error": "boom" })).unwrap();
    assert!(response.papers.is_empty());
    assert_eq!(response.error.as_deref(), Some("boom"));
}

#[test]
fn test_analyze_response_missing_fields_stay_none() {
    let response: AnalyzeResponse = serde_json::from_value(json!({ "keyFindings": ["one"] })).unwrap();

    assert!(response.analyzed_papers.is_none());
    assert!(response.literature_review.is_none());
    assert_eq!(response.key_findings, Some(vec!["one".to_string()]));
}

#[test]
fn test_research_event_is_tagged() {
    let event = ResearchEvent::Finished {
        run: RunId(7),
        outcome: ResearchOutcome::AnalysisFallback {
            reason: "Analyze API failed: 500".into(),
        },
        session: ResearchSession::default(),
        duration_ms: 12,
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "finished");
    assert_eq!(value["run"], 7);
    assert_eq!(value["outcome"]["kind"], "analysis_fallback");
    assert_eq!(event.name(), "finished");
    assert!(event.is_finished());
}

#[test]
fn test_run_ids_are_ordered() {
    assert!(RunId(2) > RunId(1));
    assert_eq!(RunId(3).to_string(), "run-3");
}

#[test]
fn test_paper_without_identifier_deserializes() {
    let paper: Paper = serde_json::from_value(json!({ "title": "T", "citationCount": 5 })).unwrap();

    assert_eq!(paper.id, "");
    assert_eq!(paper.citation_count, 5);
}

#[test]
fn test_search_response_null_papers_is_empty() {
    let response: SearchResponse = serde_json::from_value(json!({ "papers": null })).unwrap();
    assert!(response.papers.is_empty());
}
