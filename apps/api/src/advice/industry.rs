//! Industry detection — the four role specializations the knowledge base
//! carries dedicated content for.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Software,
    Marketing,
    Finance,
    Healthcare,
}

impl Industry {
    /// Detection order. The first group with a keyword hit wins, so a query
    /// naming two industries resolves to the earlier one.
    pub const ALL: [Industry; 4] = [
        Industry::Software,
        Industry::Marketing,
        Industry::Finance,
        Industry::Healthcare,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Industry::Software => &["software", "developer", "engineer", "tech"],
            Industry::Marketing => &["marketing", "sales", "advertising"],
            Industry::Finance => &["finance", "accounting", "banking"],
            Industry::Healthcare => &["healthcare", "medical", "nurse", "doctor"],
        }
    }

    /// Human-readable label used in response headers.
    pub fn label(self) -> &'static str {
        match self {
            Industry::Software => "software engineering",
            Industry::Marketing => "marketing and sales",
            Industry::Finance => "finance and accounting",
            Industry::Healthcare => "healthcare",
        }
    }

    /// Scans a lower-cased query for the first industry whose keyword group
    /// matches. Substring containment, same as every other keyword test in
    /// the engine.
    pub fn detect(lowered: &str) -> Option<Industry> {
        Industry::ALL
            .into_iter()
            .find(|industry| industry.keywords().iter().any(|kw| lowered.contains(kw)))
    }
}
