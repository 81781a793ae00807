//! Special intents — the ordered, first-match-wins rule list evaluated
//! before generic topic scoring.
//!
//! Order is load-bearing. The ATS rule precedes the skills rules, so
//! "ats for marketing skills" resolves to the ATS block; the example rules
//! come first, so "sample bullets for a developer" resolves to examples
//! rather than bullet writing. Tests pin the order and its outcomes.

use crate::advice::formatting;
use crate::advice::industry::Industry;
use crate::advice::knowledge::KnowledgeBase;

/// A query pre-processed once for every predicate: lower-cased, with the
/// industry detected up front.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    pub lowered: String,
    pub industry: Option<Industry>,
}

impl ParsedQuery {
    pub fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let industry = Industry::detect(&lowered);
        Self { lowered, industry }
    }

    fn has(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    fn has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lowered.contains(n))
    }
}

/// One special-intent rule: a predicate over the parsed query and the
/// responder that renders its knowledge-base block.
pub struct IntentRule {
    pub name: &'static str,
    pub matches: fn(&ParsedQuery) -> bool,
    pub respond: fn(&KnowledgeBase, &ParsedQuery) -> String,
}

/// Evaluated top to bottom; the first match short-circuits the rest.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        name: "industry_examples",
        matches: wants_industry_examples,
        respond: respond_industry_examples,
    },
    IntentRule {
        name: "general_examples",
        matches: wants_general_examples,
        respond: respond_general_examples,
    },
    IntentRule {
        name: "ats",
        matches: wants_ats,
        respond: respond_ats,
    },
    IntentRule {
        name: "bullet_writing",
        matches: wants_bullet_writing,
        respond: respond_bullet_writing,
    },
    IntentRule {
        name: "cover_letter",
        matches: wants_cover_letter,
        respond: respond_cover_letter,
    },
    IntentRule {
        name: "industry_skills",
        matches: wants_industry_skills,
        respond: respond_industry_skills,
    },
    IntentRule {
        name: "general_skills",
        matches: wants_general_skills,
        respond: respond_general_skills,
    },
];

/// Returns the first rule whose predicate accepts the query, if any.
pub fn match_rule(query: &ParsedQuery) -> Option<&'static IntentRule> {
    RULES.iter().find(|rule| (rule.matches)(query))
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

fn wants_industry_examples(q: &ParsedQuery) -> bool {
    q.has_any(&["example", "sample", "template"]) && q.industry.is_some()
}

fn wants_general_examples(q: &ParsedQuery) -> bool {
    q.has_any(&["resume example", "resume sample", "resume template"])
}

fn wants_ats(q: &ParsedQuery) -> bool {
    // Containment, not word-boundary: any query containing "ats" lands here.
    q.has_any(&["ats", "applicant tracking", "tracking system"])
}

fn wants_bullet_writing(q: &ParsedQuery) -> bool {
    (q.has("bullet") || q.has("description")) && q.has_any(&["write", "how", "example"])
}

fn wants_cover_letter(q: &ParsedQuery) -> bool {
    q.has_any(&["cover letter", "covering letter"])
}

fn wants_industry_skills(q: &ParsedQuery) -> bool {
    q.has("skill") && q.industry.is_some()
}

fn wants_general_skills(q: &ParsedQuery) -> bool {
    q.has("skill") && q.has("list")
}

// ────────────────────────────────────────────────────────────────────────────
// Responders
// ────────────────────────────────────────────────────────────────────────────

fn respond_industry_examples(kb: &KnowledgeBase, q: &ParsedQuery) -> String {
    formatting::examples(kb, q.industry)
}

fn respond_general_examples(kb: &KnowledgeBase, _q: &ParsedQuery) -> String {
    formatting::examples(kb, None)
}

fn respond_ats(kb: &KnowledgeBase, _q: &ParsedQuery) -> String {
    formatting::ats(kb)
}

fn respond_bullet_writing(kb: &KnowledgeBase, _q: &ParsedQuery) -> String {
    formatting::bullet_writing(kb)
}

fn respond_cover_letter(kb: &KnowledgeBase, _q: &ParsedQuery) -> String {
    formatting::cover_letter(kb)
}

fn respond_industry_skills(kb: &KnowledgeBase, q: &ParsedQuery) -> String {
    formatting::skills(kb, q.industry)
}

fn respond_general_skills(kb: &KnowledgeBase, _q: &ParsedQuery) -> String {
    formatting::skills(kb, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(raw: &str) -> Option<&'static str> {
        match_rule(&ParsedQuery::new(raw)).map(|rule| rule.name)
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "industry_examples",
                "general_examples",
                "ats",
                "bullet_writing",
                "cover_letter",
                "industry_skills",
                "general_skills",
            ]
        );
    }

    #[test]
    fn test_ats_takes_priority_over_industry_content() {
        // "nurse" is a healthcare keyword, but the ATS rule fires first
        // once the example rules decline.
        assert_eq!(matched("ats for a nurse"), Some("ats"));
    }

    #[test]
    fn test_ats_takes_priority_over_skills() {
        assert_eq!(matched("ats for marketing skills"), Some("ats"));
    }

    #[test]
    fn test_ats_matches_as_substring() {
        assert_eq!(matched("which formats work best"), Some("ats"));
    }

    #[test]
    fn test_examples_with_industry() {
        assert_eq!(
            matched("show me resume examples for a software engineer"),
            Some("industry_examples")
        );
    }

    #[test]
    fn test_bare_resume_examples_phrase() {
        assert_eq!(matched("resume examples please"), Some("general_examples"));
        assert_eq!(matched("got a resume template?"), Some("general_examples"));
    }

    #[test]
    fn test_example_without_resume_phrase_or_industry_declines() {
        // Falls through to the bullet rule instead.
        assert_eq!(
            matched("can you give an example bullet"),
            Some("bullet_writing")
        );
    }

    #[test]
    fn test_bullet_writing_intent() {
        assert_eq!(
            matched("how do i write bullet points"),
            Some("bullet_writing")
        );
        assert_eq!(
            matched("how should a job description read"),
            Some("bullet_writing")
        );
    }

    #[test]
    fn test_cover_letter_both_spellings() {
        assert_eq!(matched("do i need a cover letter"), Some("cover_letter"));
        assert_eq!(matched("covering letter advice"), Some("cover_letter"));
    }

    #[test]
    fn test_cover_letter_is_case_insensitive() {
        assert_eq!(matched("COVER LETTER"), Some("cover_letter"));
    }

    #[test]
    fn test_skills_with_industry() {
        assert_eq!(
            matched("skills for a software engineer"),
            Some("industry_skills")
        );
    }

    #[test]
    fn test_skills_list_without_industry() {
        assert_eq!(matched("skills list"), Some("general_skills"));
    }

    #[test]
    fn test_plain_question_matches_no_rule() {
        assert_eq!(matched("how do i explain employment gaps?"), None);
        assert_eq!(matched(""), None);
    }
}
