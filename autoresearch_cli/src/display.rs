use autoresearch_client::is_linkable_url;
use autoresearch_types::{ChatMessage, ChatRole, ResearchEvent, ResearchOutcome, ResearchSession};

/// Number of key points shown per paper in the listing.
const LISTED_KEY_POINTS: usize = 2;

pub fn print_event(event: &ResearchEvent) {
    match event {
        ResearchEvent::Started { session, .. } => {
            println!("Researching \"{}\"...", session.topic);
        }
        ResearchEvent::PapersFound { session, .. } => {
            println!("   ✓ Found {} papers, analysing...", session.papers.len());
        }
        ResearchEvent::Finished {
            outcome, duration_ms, ..
        } => {
            println!("   ✓ Done in {duration_ms} ms{}\n", outcome_note(outcome));
        }
    }
}

fn outcome_note(outcome: &ResearchOutcome) -> &'static str {
    match outcome {
        ResearchOutcome::Completed => "",
        ResearchOutcome::EmptySearchFallback => " (no papers found, showing demo papers)",
        ResearchOutcome::AnalysisFallback { .. } => " (analysis generated locally)",
        ResearchOutcome::DemoFallback { .. } => " (showing demo data)",
    }
}

pub fn print_session(session: &ResearchSession) {
    if let Some(error) = &session.error {
        println!("⚠ {error}\n");
    }

    println!("Key Findings");
    println!("============");
    for finding in &session.key_findings {
        println!("  • {finding}");
    }

    println!("\nPapers ({})", session.papers.len());
    println!("==========");
    let any_linkable = session.papers.iter().any(|p| is_linkable_url(&p.url));
    for (i, paper) in session.papers.iter().enumerate() {
        println!("[{}] {}", i + 1, paper.title);
        println!(
            "    {} ({}) · {} · {} citations",
            paper.author_list(),
            paper.display_year(),
            paper.venue,
            paper.citation_count
        );
        if let Some(points) = &paper.key_points {
            let shown: Vec<_> = points.iter().take(LISTED_KEY_POINTS).cloned().collect();
            println!("    Key Points: {}", shown.join("; "));
        }
        if is_linkable_url(&paper.url) {
            println!("    {}", paper.url);
        }
    }
    if !any_linkable {
        println!("\n(Demo papers: save locally for details)");
    }

    println!("\nLiterature Review");
    println!("=================");
    println!("{}", session.literature_review);
}

pub fn print_reply(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "you",
        ChatRole::Assistant => "assistant",
    };
    println!("\n{speaker}> {}\n", message.content);
}
