use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Year assumed for papers that do not carry one when computing year ranges.
pub const DEFAULT_YEAR: i32 = 2023;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A paper record as produced by search and enriched by analysis.
///
/// Input is tolerant: every field may be absent, the identifier included.
/// `summary` and `key_points` stay `None` until analysis has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    #[serde(rename = "paperId", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub citation_count: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
}

impl Paper {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            abstract_text: String::new(),
            authors: Vec::new(),
            year: None,
            citation_count: 0,
            url: String::new(),
            venue: String::new(),
            summary: None,
            key_points: None,
        }
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn with_authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = names.into_iter().map(Author::new).collect();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_citations(mut self, count: u64) -> Self {
        self.citation_count = count;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_key_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_points = Some(points.into_iter().map(Into::into).collect());
        self
    }

    /// Author names joined with ", ".
    pub fn author_list(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Year used for range statistics; missing years count as [`DEFAULT_YEAR`].
    pub fn effective_year(&self) -> i32 {
        self.year.unwrap_or(DEFAULT_YEAR)
    }

    /// Year as shown in rendered text ("n.d." when unknown).
    pub fn display_year(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "n.d.".to_string(),
        }
    }
}
