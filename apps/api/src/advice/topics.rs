//! Topic taxonomy — the nine advice categories behind generic scoring.
//!
//! Scoring only runs after the special-intent rules in `intents` have all
//! declined; see `engine::AdviceEngine::local` for the full pipeline.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Structure,
    JobDescriptions,
    Skills,
    Ats,
    CommonMistakes,
    CareerSpecific,
    CoverLetter,
    EmploymentGaps,
    InterviewPrep,
}

impl Topic {
    /// Declaration order doubles as the tie-break order in `classify`.
    pub const ALL: [Topic; 9] = [
        Topic::Structure,
        Topic::JobDescriptions,
        Topic::Skills,
        Topic::Ats,
        Topic::CommonMistakes,
        Topic::CareerSpecific,
        Topic::CoverLetter,
        Topic::EmploymentGaps,
        Topic::InterviewPrep,
    ];

    /// Stable key used in URLs and logs.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Structure => "structure",
            Topic::JobDescriptions => "job_descriptions",
            Topic::Skills => "skills",
            Topic::Ats => "ats",
            Topic::CommonMistakes => "common_mistakes",
            Topic::CareerSpecific => "career_specific",
            Topic::CoverLetter => "cover_letter",
            Topic::EmploymentGaps => "employment_gaps",
            Topic::InterviewPrep => "interview_prep",
        }
    }

    pub fn from_key(key: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Display label for UI suggestion chips.
    pub fn label(self) -> &'static str {
        match self {
            Topic::Structure => "Resume structure",
            Topic::JobDescriptions => "Writing experience bullets",
            Topic::Skills => "Skills section",
            Topic::Ats => "Applicant tracking systems",
            Topic::CommonMistakes => "Common mistakes",
            Topic::CareerSpecific => "Advice for your field",
            Topic::CoverLetter => "Cover letters",
            Topic::EmploymentGaps => "Employment gaps",
            Topic::InterviewPrep => "Interview preparation",
        }
    }

    /// Keyword set for generic scoring. All entries are lowercase and are
    /// matched by substring containment against the lower-cased query.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Structure => &[
                "structure", "format", "layout", "organize", "section", "length", "page", "font",
            ],
            Topic::JobDescriptions => &[
                "bullet",
                "description",
                "achievement",
                "accomplishment",
                "responsibilit",
                "action verb",
                "quantify",
                "metric",
            ],
            Topic::Skills => &["skill", "competenc", "abilities", "qualification"],
            Topic::Ats => &["ats", "applicant tracking", "tracking system", "keyword", "scan"],
            Topic::CommonMistakes => &["mistake", "error", "avoid", "wrong", "pitfall", "typo"],
            // Mirrors the industry keyword groups, plus the generic terms.
            Topic::CareerSpecific => &[
                "software",
                "developer",
                "engineer",
                "tech",
                "marketing",
                "sales",
                "advertising",
                "finance",
                "accounting",
                "banking",
                "healthcare",
                "medical",
                "nurse",
                "doctor",
                "industry",
            ],
            Topic::CoverLetter => &["cover letter", "covering letter"],
            Topic::EmploymentGaps => &[
                "gap",
                "employment",
                "unemployed",
                "career break",
                "time off",
                "laid off",
            ],
            Topic::InterviewPrep => &["interview", "prepare", "hiring manager", "behavioral"],
        }
    }
}

/// Scores the lower-cased query against every topic and returns the winner.
///
/// Each topic's score is the count of its keywords appearing as substrings.
/// Iteration follows `Topic::ALL`, and a later topic must strictly beat the
/// running maximum to take the win; on exact ties the earlier topic keeps
/// it. `None` means no keyword matched at all and the caller falls back to
/// the generic tips.
pub fn classify(lowered: &str) -> Option<Topic> {
    let mut best: Option<(Topic, usize)> = None;

    for topic in Topic::ALL {
        let hits = topic
            .keywords()
            .iter()
            .filter(|kw| lowered.contains(*kw))
            .count();
        if hits == 0 {
            continue;
        }
        match best {
            Some((_, max)) if hits <= max => {}
            _ => best = Some((topic, hits)),
        }
    }

    best.map(|(topic, _)| topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_structure_question() {
        assert_eq!(
            classify("what sections should my resume have and in what order"),
            Some(Topic::Structure)
        );
    }

    #[test]
    fn test_classify_employment_gaps_question() {
        assert_eq!(
            classify("how do i explain employment gaps?"),
            Some(Topic::EmploymentGaps)
        );
    }

    #[test]
    fn test_classify_interview_question() {
        assert_eq!(
            classify("how should i prepare for the interview"),
            Some(Topic::InterviewPrep)
        );
    }

    #[test]
    fn test_no_keyword_overlap_returns_none() {
        assert_eq!(classify("xyz123"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_highest_count_wins_over_single_hits() {
        // Two employment-gap keywords against at most one hit elsewhere.
        assert_eq!(
            classify("i was unemployed and have a gap"),
            Some(Topic::EmploymentGaps)
        );
    }

    #[test]
    fn test_exact_tie_keeps_earlier_topic() {
        // One Structure hit ("format") and one CommonMistakes hit ("avoid"):
        // Structure is declared first, so it keeps the win.
        assert_eq!(classify("format to avoid"), Some(Topic::Structure));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for topic in Topic::ALL {
            for kw in topic.keywords() {
                assert_eq!(*kw, kw.to_lowercase(), "{topic:?} keyword not lowercase");
            }
        }
    }

    #[test]
    fn test_from_key_round_trips() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_key(topic.key()), Some(topic));
        }
        assert_eq!(Topic::from_key("nonsense"), None);
    }
}
