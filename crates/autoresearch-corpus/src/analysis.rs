use crate::error::{CorpusError, Result};
use autoresearch_types::{AnalyzeRequest, AnalyzeResponse, Paper, DEFAULT_YEAR};

/// Abstract characters quoted in the methodological listing.
const ABSTRACT_EXCERPT_CHARS: usize = 200;

const SUMMARY_PHRASES: [&str; 3] = [
    "comprehensive analysis",
    "novel methodologies",
    "practical applications",
];

const METHODOLOGY_LABELS: [&str; 3] = [
    "Systematic review approach",
    "Experimental validation",
    "Theoretical framework",
];

/// Citation and publication-year statistics over a set of papers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitationStats {
    pub total: u64,
    /// `round(total / count)`, rounding half away from zero; 0 for no papers.
    pub mean: u64,
    pub earliest: i32,
    pub latest: i32,
}

impl CitationStats {
    /// Returns `None` if the citation total overflows.
    pub fn checked(papers: &[Paper]) -> Option<Self> {
        let total = papers
            .iter()
            .try_fold(0u64, |acc, p| acc.checked_add(p.citation_count))?;
        Some(Self::with_total(papers, total))
    }

    /// Like [`CitationStats::checked`] but clamps the total instead of failing.
    pub fn saturating(papers: &[Paper]) -> Self {
        let total = papers
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.citation_count));
        Self::with_total(papers, total)
    }

    fn with_total(papers: &[Paper], total: u64) -> Self {
        let mean = if papers.is_empty() {
            0
        } else {
            (total as f64 / papers.len() as f64).round() as u64
        };
        let years = papers.iter().map(Paper::effective_year);
        Self {
            total,
            mean,
            earliest: years.clone().min().unwrap_or(DEFAULT_YEAR),
            latest: years.max().unwrap_or(DEFAULT_YEAR),
        }
    }
}

/// Output of [`PaperAnalysisService::analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub analyzed_papers: Vec<Paper>,
    pub literature_review: String,
    pub key_findings: Vec<String>,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            analyzed_papers: Some(analysis.analyzed_papers),
            literature_review: Some(analysis.literature_review),
            key_findings: Some(analysis.key_findings),
            error: None,
        }
    }
}

/// Templated "analysis" of searched papers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaperAnalysisService;

impl PaperAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Validates a request body before analysing it.
    pub fn analyze_request(&self, request: AnalyzeRequest) -> Result<Analysis> {
        let papers = request
            .papers
            .ok_or_else(|| CorpusError::InvalidInput("Invalid papers data".to_string()))?;
        self.analyze(&papers, &request.topic)
    }

    pub fn analyze(&self, papers: &[Paper], topic: &str) -> Result<Analysis> {
        tracing::info!(topic = %topic, papers = papers.len(), "Analyzing papers");

        let stats = CitationStats::checked(papers)
            .ok_or_else(|| CorpusError::Internal("citation total overflowed".to_string()))?;

        let analyzed_papers = papers
            .iter()
            .enumerate()
            .map(|(index, paper)| annotate(paper, index, topic))
            .collect();

        let analysis = Analysis {
            analyzed_papers,
            literature_review: literature_review(papers, topic, &stats),
            key_findings: key_findings(papers.len(), topic, &stats),
        };

        tracing::info!("Analysis completed successfully");
        Ok(analysis)
    }
}

fn annotate(paper: &Paper, index: usize, topic: &str) -> Paper {
    let phrase = SUMMARY_PHRASES[index % SUMMARY_PHRASES.len()];
    let label = METHODOLOGY_LABELS[index % METHODOLOGY_LABELS.len()];

    paper
        .clone()
        .with_summary(format!(
            "This paper presents important findings related to {topic}, contributing to our \
             understanding of the field through {phrase}."
        ))
        .with_key_points([
            format!("Key contribution to {topic} research"),
            format!("Methodology: {label}"),
            format!(
                "Impact: {} citations demonstrate scholarly influence",
                paper.citation_count
            ),
        ])
}

fn listing_entry(index: usize, paper: &Paper) -> String {
    let authors = if paper.authors.is_empty() {
        "Unknown authors".to_string()
    } else {
        paper.author_list()
    };
    let venue = if paper.venue.is_empty() {
        "Unknown venue"
    } else {
        paper.venue.as_str()
    };
    let focus = if paper.abstract_text.is_empty() {
        "No abstract available".to_string()
    } else {
        paper.abstract_text.chars().take(ABSTRACT_EXCERPT_CHARS).collect()
    };

    format!(
        "\n**[{}] {}** ({})\n- Authors: {}\n- Citations: {}\n- Venue: {}\n- Key Focus: {}...\n",
        index + 1,
        paper.title,
        paper.display_year(),
        authors,
        paper.citation_count,
        venue,
        focus,
    )
}

fn literature_review(papers: &[Paper], topic: &str, stats: &CitationStats) -> String {
    let listing = papers
        .iter()
        .enumerate()
        .map(|(index, paper)| listing_entry(index, paper))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Literature Review: {topic}

## Introduction

This literature review examines {count} research papers on {topic}, representing current state-of-the-art approaches and methodologies in the field. The selected papers demonstrate significant scholarly impact with a total of {total} citations.

## Current State of Research

The research landscape for {topic} shows active development across multiple dimensions:

### Methodological Approaches
{listing}

## Key Findings and Trends

Based on the analysis of the selected papers, several important trends emerge:

1. **Methodological Innovation**: The field shows continuous evolution with novel approaches being developed
2. **Performance Improvements**: Recent work demonstrates significant advances in accuracy and efficiency
3. **Interdisciplinary Applications**: Growing application across diverse domains
4. **Ethical Considerations**: Increasing attention to responsible AI and bias mitigation

## Research Impact and Citations

The papers in this review have received substantial citation counts, indicating strong scholarly engagement:
- Total citations: {total}
- Average citations per paper: {mean}
- Publication years: {earliest} - {latest}

## Future Directions

The literature suggests several promising research directions:
- Integration of multiple methodological approaches
- Enhanced focus on scalability and practical deployment
- Continued development of ethical AI frameworks
- Cross-disciplinary collaboration and applications

## Conclusion

This review provides an overview of current research in {topic}, highlighting significant contributions and identifying opportunities for future work. The field demonstrates strong momentum with high-impact publications and active scholarly engagement.",
        count = papers.len(),
        total = stats.total,
        mean = stats.mean,
        earliest = stats.earliest,
        latest = stats.latest,
    )
}

fn key_findings(count: usize, topic: &str, stats: &CitationStats) -> Vec<String> {
    vec![
        format!("Research in {topic} spans {count} significant publications with substantial scholarly impact"),
        format!(
            "Total citation impact of {} citations indicates strong research relevance",
            stats.total
        ),
        "Multiple methodological approaches are being explored across different research groups".to_string(),
        "Publication venues include top-tier conferences and journals, suggesting high research quality".to_string(),
        format!(
            "The field shows active development from {} to {}",
            stats.earliest, stats.latest
        ),
        "Growing emphasis on practical applications and real-world deployment".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn papers_with(citations: &[u64]) -> Vec<Paper> {
        citations
            .iter()
            .enumerate()
            .map(|(i, c)| Paper::new(format!("p{i}"), format!("Paper {i}")).with_citations(*c))
            .collect()
    }

    #[test]
    fn test_citation_stats_total_and_mean() {
        let stats = CitationStats::checked(&papers_with(&[127, 89, 156])).unwrap();
        assert_eq!(stats.total, 372);
        assert_eq!(stats.mean, 124);
    }

    #[test]
    fn test_mean_rounds_half_away_from_zero() {
        let stats = CitationStats::checked(&papers_with(&[1, 2])).unwrap();
        assert_eq!(stats.mean, 2);

        let stats = CitationStats::checked(&papers_with(&[1, 1, 2])).unwrap();
        assert_eq!(stats.mean, 1);
    }

    #[test]
    fn test_missing_years_count_as_default() {
        let papers = vec![
            Paper::new("a", "A").with_year(2019),
            Paper::new("b", "B"),
        ];
        let stats = CitationStats::checked(&papers).unwrap();
        assert_eq!((stats.earliest, stats.latest), (2019, DEFAULT_YEAR));
    }

    #[test]
    fn test_empty_stats() {
        let stats = CitationStats::saturating(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.mean, 0);
        assert_eq!((stats.earliest, stats.latest), (DEFAULT_YEAR, DEFAULT_YEAR));
    }

    #[test]
    fn test_overflow_is_internal_error() {
        let papers = papers_with(&[u64::MAX, 1]);
        assert!(CitationStats::checked(&papers).is_none());
        assert_eq!(CitationStats::saturating(&papers).total, u64::MAX);

        let err = PaperAnalysisService::new().analyze(&papers, "t").unwrap_err();
        assert!(matches!(err, CorpusError::Internal(_)));
    }

    #[test]
    fn test_methodology_rotates_by_position() {
        let analysis = PaperAnalysisService::new()
            .analyze(&papers_with(&[1, 2, 3, 4]), "t")
            .unwrap();

        let labels: Vec<&str> = analysis
            .analyzed_papers
            .iter()
            .map(|p| p.key_points.as_ref().unwrap()[1].as_str())
            .collect();
        assert_eq!(
            labels,
            [
                "Methodology: Systematic review approach",
                "Methodology: Experimental validation",
                "Methodology: Theoretical framework",
                "Methodology: Systematic review approach",
            ]
        );
        assert!(analysis.analyzed_papers[3]
            .summary
            .as_deref()
            .unwrap()
            .ends_with("comprehensive analysis."));
    }

    #[test]
    fn test_listing_defaults_for_sparse_paper() {
        let entry = listing_entry(0, &Paper::new("p", "Sparse"));
        assert!(entry.contains("**[1] Sparse** (n.d.)"));
        assert!(entry.contains("- Authors: Unknown authors"));
        assert!(entry.contains("- Venue: Unknown venue"));
        assert!(entry.contains("- Key Focus: No abstract available..."));
    }

    #[test]
    fn test_listing_truncates_abstract() {
        let paper = Paper::new("p", "Long").with_abstract("é".repeat(300));
        let entry = listing_entry(0, &paper);
        let expected = format!("- Key Focus: {}...", "é".repeat(200));
        assert!(entry.contains(&expected));
    }

    #[test]
    fn test_missing_papers_is_invalid_input() {
        let err = PaperAnalysisService::new()
            .analyze_request(AnalyzeRequest::default())
            .unwrap_err();
        assert_eq!(err, CorpusError::InvalidInput("Invalid papers data".to_string()));
    }
}
