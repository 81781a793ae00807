//! Knowledge base — the static advice content behind the local engine.
//!
//! Content lives in `data/knowledge_base.json` and is embedded at compile
//! time, parsed once at startup, and never mutated. Keeping the content in
//! a data file means it can be edited or localized without touching the
//! classification code.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::advice::industry::Industry;

const KNOWLEDGE_BASE_JSON: &str = include_str!("../../data/knowledge_base.json");

/// Number of employment-gap tips the formatter numbers 1 through 5.
pub const EMPLOYMENT_GAP_TIPS: usize = 5;
/// Number of tips in the generic no-match fallback block.
pub const GENERAL_TIPS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    pub structure: StructureAdvice,
    pub bullet_writing: BulletWriting,
    pub skills: SkillsAdvice,
    pub ats: AtsAdvice,
    pub common_mistakes: Vec<String>,
    pub examples: ExampleLibrary,
    pub cover_letter: CoverLetterAdvice,
    pub employment_gaps: Vec<String>,
    pub interview_prep: Vec<String>,
    pub general_tips: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructureAdvice {
    pub sections: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulletWriting {
    pub formula: String,
    pub power_verbs: Vec<String>,
    pub examples: Vec<BulletExample>,
}

/// A weak phrasing and its rewritten counterpart, shown side by side.
#[derive(Debug, Clone, Deserialize)]
pub struct BulletExample {
    pub weak: String,
    pub strong: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillsAdvice {
    pub general: Vec<String>,
    pub industries: IndustryMap<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AtsAdvice {
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExampleLibrary {
    pub general: ResumeExample,
    pub industries: IndustryMap<ResumeExample>,
}

/// A model summary plus experience bullets for one kind of role.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeExample {
    pub summary: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterAdvice {
    pub structure: Vec<String>,
    pub tips: Vec<String>,
}

/// Per-industry content, one field per specialization the knowledge base
/// covers. A struct rather than a map so a missing industry is a parse
/// error at startup, not a runtime `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryMap<T> {
    pub software: T,
    pub marketing: T,
    pub finance: T,
    pub healthcare: T,
}

impl<T> IndustryMap<T> {
    pub fn get(&self, industry: Industry) -> &T {
        match industry {
            Industry::Software => &self.software,
            Industry::Marketing => &self.marketing,
            Industry::Finance => &self.finance,
            Industry::Healthcare => &self.healthcare,
        }
    }
}

impl KnowledgeBase {
    /// Parses the embedded asset. Called once at startup; a failure here is
    /// a content error to fix at build time, never a per-request condition.
    pub fn embedded() -> Result<Self> {
        let kb: KnowledgeBase = serde_json::from_str(KNOWLEDGE_BASE_JSON)
            .context("embedded knowledge base is not valid JSON")?;

        // The formatters number these lists; the counts are part of the contract.
        ensure!(
            kb.employment_gaps.len() == EMPLOYMENT_GAP_TIPS,
            "expected {} employment gap tips, found {}",
            EMPLOYMENT_GAP_TIPS,
            kb.employment_gaps.len()
        );
        ensure!(
            kb.general_tips.len() == GENERAL_TIPS,
            "expected {} general tips, found {}",
            GENERAL_TIPS,
            kb.general_tips.len()
        );

        Ok(kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_knowledge_base_parses() {
        let kb = KnowledgeBase::embedded().expect("embedded KB must parse");
        assert!(!kb.structure.sections.is_empty());
        assert!(!kb.ats.tips.is_empty());
        assert!(!kb.common_mistakes.is_empty());
        assert!(!kb.cover_letter.structure.is_empty());
        assert!(!kb.interview_prep.is_empty());
    }

    #[test]
    fn test_employment_gaps_has_exactly_five_tips() {
        let kb = KnowledgeBase::embedded().unwrap();
        assert_eq!(kb.employment_gaps.len(), EMPLOYMENT_GAP_TIPS);
    }

    #[test]
    fn test_general_tips_has_exactly_ten_entries() {
        let kb = KnowledgeBase::embedded().unwrap();
        assert_eq!(kb.general_tips.len(), GENERAL_TIPS);
    }

    #[test]
    fn test_every_industry_has_skills_and_examples() {
        let kb = KnowledgeBase::embedded().unwrap();
        for industry in Industry::ALL {
            assert!(
                !kb.skills.industries.get(industry).is_empty(),
                "no skills for {industry:?}"
            );
            let example = kb.examples.industries.get(industry);
            assert!(!example.summary.is_empty(), "no summary for {industry:?}");
            assert!(!example.bullets.is_empty(), "no bullets for {industry:?}");
        }
    }
}
