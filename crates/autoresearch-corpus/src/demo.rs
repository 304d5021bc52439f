use autoresearch_types::Paper;

/// Built-in demo papers shown whenever a run cannot use searched results.
///
/// Unlike the search catalog these already carry a summary and key points,
/// and their URLs point at a placeholder host so they are never offered as
/// external links.
pub fn demo_papers(topic: &str) -> Vec<Paper> {
    vec![
        Paper::new("mock-1", format!("Deep Learning Approaches for {topic}: A Comprehensive Survey"))
            .with_abstract(format!(
                "This paper presents a comprehensive survey of deep learning techniques applied to {topic}. \
                 We analyze recent developments, methodologies, and performance metrics across various \
                 applications. Our study covers supervised, unsupervised, and reinforcement learning \
                 approaches, highlighting their strengths and limitations. The survey includes a detailed \
                 comparison of state-of-the-art methods and identifies promising research directions for \
                 future work."
            ))
            .with_authors(["Dr. Sarah Chen", "Prof. Michael Rodriguez"])
            .with_year(2023)
            .with_citations(127)
            .with_url("https://example.com/paper1")
            .with_venue("Nature Machine Intelligence")
            .with_summary(format!(
                "Comprehensive survey of deep learning applications in {topic}, covering multiple learning \
                 paradigms and identifying future research directions."
            ))
            .with_key_points([
                "Analyzes supervised, unsupervised, and reinforcement learning approaches",
                "Provides detailed performance comparisons",
                "Identifies key research gaps and opportunities",
            ]),
        Paper::new("mock-2", format!("Transformer Networks in {topic}: Performance Analysis and Optimization"))
            .with_abstract(format!(
                "We present a detailed analysis of transformer architectures for {topic} applications. Our \
                 research evaluates different attention mechanisms, positional encodings, and architectural \
                 variants. Results demonstrate significant improvements in accuracy and efficiency compared to \
                 traditional approaches. We introduce novel optimization techniques and provide implementation \
                 guidelines for practitioners."
            ))
            .with_authors(["Dr. James Liu", "Prof. Elena Kowalski"])
            .with_year(2023)
            .with_citations(89)
            .with_url("https://example.com/paper2")
            .with_venue("NeurIPS 2023")
            .with_summary(format!(
                "Analysis of transformer architectures for {topic}, introducing optimization techniques and \
                 achieving state-of-the-art performance."
            ))
            .with_key_points([
                "Evaluates different transformer variants",
                "Introduces novel optimization techniques",
                "Provides practical implementation guidelines",
            ]),
        Paper::new("mock-3", format!("Ethical Considerations in {topic} Systems: A Framework for Responsible AI"))
            .with_abstract(format!(
                "This paper addresses ethical concerns and bias mitigation in {topic} systems. We propose a \
                 comprehensive framework for responsible AI development, including fairness metrics, bias \
                 detection methods, and mitigation strategies. Our approach ensures equitable outcomes across \
                 different demographic groups while maintaining system performance."
            ))
            .with_authors(["Prof. David Thompson", "Dr. Maria Santos"])
            .with_year(2022)
            .with_citations(156)
            .with_url("https://example.com/paper3")
            .with_venue("ACM Conference on Fairness, Accountability, and Transparency")
            .with_summary(format!(
                "Framework for ethical AI development in {topic}, addressing bias mitigation and fairness \
                 considerations."
            ))
            .with_key_points([
                "Proposes comprehensive ethical framework",
                "Addresses bias detection and mitigation",
                "Ensures equitable outcomes across demographics",
            ]),
    ]
}
