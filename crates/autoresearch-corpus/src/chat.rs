use autoresearch_types::ResearchSession;

pub const PROMPT_FOR_INPUT: &str =
    "Please provide a message and ensure you have an active research session.";

const CLOSING_QUESTION: &str =
    "Would you like me to elaborate on any specific aspect of your research?";

/// Findings quoted in a findings answer.
const MAX_QUOTED_FINDINGS: usize = 3;

/// What a chat message asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Findings,
    Methods,
    Papers,
    General,
}

struct ChatRule {
    intent: Intent,
    keywords: &'static [&'static str],
    answer: fn(&ResearchSession) -> String,
}

impl ChatRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Checked top to bottom; the first match wins.
const RULES: &[ChatRule] = &[
    ChatRule {
        intent: Intent::Findings,
        keywords: &["finding", "result"],
        answer: findings_answer,
    },
    ChatRule {
        intent: Intent::Methods,
        keywords: &["method", "approach"],
        answer: methods_answer,
    },
    ChatRule {
        intent: Intent::Papers,
        keywords: &["paper", "author"],
        answer: papers_answer,
    },
];

fn findings_answer(session: &ResearchSession) -> String {
    let bullets = if session.key_findings.is_empty() {
        "• Research findings are available in your session".to_string()
    } else {
        session
            .key_findings
            .iter()
            .take(MAX_QUOTED_FINDINGS)
            .map(|f| format!("• {f}"))
            .collect::<Vec<_>>()
            .join("\n  ")
    };
    format!("The key findings from your research include:\n  {bullets}")
}

fn methods_answer(_session: &ResearchSession) -> String {
    "The papers in your research cover various methodological approaches:
  • Deep learning and transformer architectures
  • Ethical AI frameworks and bias mitigation
  • Federated learning for privacy preservation
  • Explainable AI techniques"
        .to_string()
}

fn papers_answer(session: &ResearchSession) -> String {
    format!(
        "Your research includes {} papers from various authors and institutions. The papers span recent \
         years and have received significant citations, indicating their impact in the field.",
        session.papers.len()
    )
}

fn general_answer(session: &ResearchSession) -> String {
    format!(
        "I can help you understand your research on \"{}\". The literature review covers {} papers with \
         comprehensive analysis. Feel free to ask about specific findings, methodologies, or implications \
         of the research.",
        session.topic,
        session.papers.len()
    )
}

/// Canned answers chosen by keyword matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatResponder;

impl ChatResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, message: &str) -> Intent {
        intent_of(rule_for(message))
    }

    pub fn respond(&self, message: &str, session: &ResearchSession) -> String {
        frame(rule_for(message), session)
    }

    /// Entry point for request bodies where either part may be absent.
    pub fn respond_to(&self, message: Option<&str>, session: Option<&ResearchSession>) -> String {
        match (message.filter(|m| !m.is_empty()), session) {
            (Some(message), Some(session)) => {
                let rule = rule_for(message);
                tracing::info!(intent = ?intent_of(rule), "Processing chat message");
                frame(rule, session)
            }
            _ => PROMPT_FOR_INPUT.to_string(),
        }
    }
}

/// First rule matching `message`; `None` means the general answer.
fn rule_for(message: &str) -> Option<&'static ChatRule> {
    let lowered = message.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

fn intent_of(rule: Option<&ChatRule>) -> Intent {
    rule.map_or(Intent::General, |rule| rule.intent)
}

fn frame(rule: Option<&ChatRule>, session: &ResearchSession) -> String {
    let body = rule.map_or_else(|| general_answer(session), |rule| (rule.answer)(session));

    format!(
        "Based on your research on \"{}\", I can provide some insights:\n\n{}\n\n{}",
        session.topic, body, CLOSING_QUESTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ResearchSession {
        ResearchSession {
            topic: "quantum error correction".into(),
            key_findings: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            ..ResearchSession::default()
        }
    }

    #[test]
    fn test_findings_quote_first_three() {
        let reply = ChatResponder::new().respond("What are the main findings?", &session());

        assert!(reply.contains("• A\n  • B\n  • C"));
        assert!(!reply.contains("• D"));
    }

    #[test]
    fn test_priority_order() {
        let responder = ChatResponder::new();
        assert_eq!(responder.classify("Results of each method?"), Intent::Findings);
        assert_eq!(responder.classify("Which APPROACH do the papers use?"), Intent::Methods);
        assert_eq!(responder.classify("who is the author"), Intent::Papers);
        assert_eq!(responder.classify("tell me more"), Intent::General);
    }

    #[test]
    fn test_methods_answer_ignores_session() {
        let responder = ChatResponder::new();
        let a = responder.respond("methods?", &session());
        let bare = ResearchSession {
            topic: "quantum error correction".into(),
            ..ResearchSession::default()
        };
        let b = responder.respond("methods?", &bare);
        assert_eq!(a, b);
        assert!(a.contains("• Explainable AI techniques"));
    }

    #[test]
    fn test_empty_findings_placeholder() {
        let reply = ChatResponder::new().respond("results", &ResearchSession::default());
        assert!(reply.contains("• Research findings are available in your session"));
    }

    #[test]
    fn test_every_reply_is_framed() {
        let reply = ChatResponder::new().respond("hello", &session());
        assert!(reply.starts_with("Based on your research on \"quantum error correction\""));
        assert!(reply.ends_with(CLOSING_QUESTION));
        assert!(reply.contains("covers 0 papers"));
    }

    #[test]
    fn test_missing_parts_prompt_for_input() {
        let responder = ChatResponder::new();
        assert_eq!(responder.respond_to(None, Some(&session())), PROMPT_FOR_INPUT);
        assert_eq!(responder.respond_to(Some(""), Some(&session())), PROMPT_FOR_INPUT);
        assert_eq!(responder.respond_to(Some("hi"), None), PROMPT_FOR_INPUT);
    }

    #[test]
    fn test_respond_to_matches_respond() {
        let responder = ChatResponder::new();
        for message in ["Key results?", "which method", "how many papers", "hello"] {
            assert_eq!(
                responder.respond_to(Some(message), Some(&session())),
                responder.respond(message, &session())
            );
        }
    }
}
