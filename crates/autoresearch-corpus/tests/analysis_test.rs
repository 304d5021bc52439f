use autoresearch_corpus::{demo_papers, PaperAnalysisService, PaperSearchService};
use autoresearch_types::{AnalyzeResponse, Paper};

fn three_papers() -> Vec<Paper> {
    vec![
        Paper::new("p1", "First").with_year(2020).with_citations(127),
        Paper::new("p2", "Second").with_year(2022).with_citations(89),
        Paper::new("p3", "Third").with_citations(156),
    ]
}

#[test]
fn test_analyze_produces_six_findings() {
    let analysis = PaperAnalysisService::new().analyze(&three_papers(), "X").unwrap();

    assert_eq!(analysis.key_findings.len(), 6);
    assert!(analysis.key_findings[0].contains('3'));
    assert!(analysis.key_findings[0].contains('X'));
    assert_eq!(
        analysis.key_findings[1],
        "Total citation impact of 372 citations indicates strong research relevance"
    );
    assert_eq!(
        analysis.key_findings[4],
        "The field shows active development from 2020 to 2023"
    );
}

#[test]
fn test_review_reports_citation_statistics() {
    let analysis = PaperAnalysisService::new().analyze(&three_papers(), "X").unwrap();
    let review = &analysis.literature_review;

    assert!(review.starts_with("# Literature Review: X"));
    assert!(review.contains("with a total of 372 citations"));
    assert!(review.contains("- Total citations: 372"));
    assert!(review.contains("- Average citations per paper: 124"));
    assert!(review.contains("- Publication years: 2020 - 2023"));
    assert!(review.contains("**[3] Third** (n.d.)"));
}

#[test]
fn test_analysed_papers_keep_identity_and_order() {
    let input = three_papers();
    let analysis = PaperAnalysisService::new().analyze(&input, "X").unwrap();

    assert_eq!(analysis.analyzed_papers.len(), input.len());
    for (before, after) in input.iter().zip(&analysis.analyzed_papers) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.title, after.title);
        let points = after.key_points.as_ref().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], "Key contribution to X research");
        assert_eq!(
            points[2],
            format!("Impact: {} citations demonstrate scholarly influence", before.citation_count)
        );
    }
}

#[test]
fn test_search_then_analyze_round() {
    let papers = PaperSearchService::new().search("edge computing").unwrap();
    let response: AnalyzeResponse = PaperAnalysisService::new()
        .analyze(&papers, "edge computing")
        .unwrap()
        .into();

    assert_eq!(response.analyzed_papers.map(|p| p.len()), Some(5));
    assert!(response.error.is_none());
    assert!(response
        .literature_review
        .unwrap()
        .contains("- Total citations: 539"));
}

#[test]
fn test_demo_papers_analyse_like_any_other() {
    let analysis = PaperAnalysisService::new()
        .analyze(&demo_papers("t"), "t")
        .unwrap();
    assert!(analysis.literature_review.contains("- Publication years: 2022 - 2023"));
}
