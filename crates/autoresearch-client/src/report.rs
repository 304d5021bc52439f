//! Markdown report and per-paper text export.

use crate::error::Result;
use autoresearch_types::{Paper, ResearchSession};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use url::Url;

const PAPER_FILE_STEM_CHARS: usize = 50;
const DEMO_PAPER_NOTE: &str = "Note: This is a demo paper for illustration purposes";

/// Whether a paper URL points somewhere real.
///
/// Demo papers use `example.com` links, which are never offered as links.
pub fn is_linkable_url(raw: &str) -> bool {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.contains("example.com")))
        .unwrap_or(false)
}

pub fn render_report(session: &ResearchSession) -> String {
    let topic = if session.topic.is_empty() {
        "Untitled"
    } else {
        session.topic.as_str()
    };

    let findings = session
        .key_findings
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    let references = session
        .papers
        .iter()
        .enumerate()
        .map(|(i, paper)| {
            format!(
                "[{}] {} ({}). {}. {}. Citations: {}",
                i + 1,
                paper.author_list(),
                paper.display_year(),
                paper.title,
                paper.venue,
                paper.citation_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "# Literature Review: {topic}\n\n## Key Findings\n{findings}\n\n## Literature Review\n{}\n\n## References\n{references}\n",
        session.literature_review
    )
}

pub fn report_file_name(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    let mut in_space = false;
    for c in topic.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    format!("literature-review-{slug}.md")
}

pub fn render_paper(paper: &Paper) -> String {
    let mut text = format!(
        "Title: {}\n\nAuthors: {}\nYear: {}\nVenue: {}\nCitations: {}\n\nAbstract:\n{}\n\n",
        paper.title,
        paper.author_list(),
        paper.display_year(),
        paper.venue,
        paper.citation_count,
        paper.abstract_text
    );

    if let Some(summary) = paper.summary.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(text, "Summary:\n{summary}\n\n");
    }
    if let Some(points) = &paper.key_points {
        let _ = write!(text, "Key Points:\n{}\n\n", points.join("\n"));
    }

    if is_linkable_url(&paper.url) {
        let _ = write!(text, "URL: {}", paper.url);
    } else {
        text.push_str(DEMO_PAPER_NOTE);
    }
    text
}

pub fn paper_file_name(paper: &Paper) -> String {
    let stem: String = paper
        .title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(PAPER_FILE_STEM_CHARS)
        .collect();
    format!("{stem}.txt")
}

/// Write the session report into `dir`, returning the file path.
pub async fn save_report(session: &ResearchSession, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_file_name(&session.topic));
    tokio::fs::write(&path, render_report(session)).await?;
    tracing::info!(path = %path.display(), "Report saved");
    Ok(path)
}

pub async fn save_paper(paper: &Paper, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(paper_file_name(paper));
    tokio::fs::write(&path, render_paper(paper)).await?;
    tracing::info!(path = %path.display(), paper = %paper.id, "Paper saved");
    Ok(path)
}
