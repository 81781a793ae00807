//! Response formatting — renders knowledge-base content into the prose
//! blocks the engine returns. One routine per topic; every routine is a
//! pure function of the knowledge base, so output is stable across calls.

use crate::advice::industry::Industry;
use crate::advice::knowledge::KnowledgeBase;
use crate::advice::topics::Topic;

/// Renders the block for a topic selected by generic scoring.
pub fn topic(kb: &KnowledgeBase, topic: Topic, industry: Option<Industry>) -> String {
    match topic {
        Topic::Structure => structure(kb),
        Topic::JobDescriptions => bullet_writing(kb),
        Topic::Skills => skills(kb, industry),
        Topic::Ats => ats(kb),
        Topic::CommonMistakes => common_mistakes(kb),
        Topic::CareerSpecific => career_specific(kb, industry),
        Topic::CoverLetter => cover_letter(kb),
        Topic::EmploymentGaps => employment_gaps(kb),
        Topic::InterviewPrep => interview_prep(kb),
    }
}

pub fn structure(kb: &KnowledgeBase) -> String {
    format!(
        "A strong resume is organized into clear sections:\n\n{}\n\nFormatting tips:\n{}",
        numbered(&kb.structure.sections),
        bulleted(&kb.structure.tips)
    )
}

pub fn bullet_writing(kb: &KnowledgeBase) -> String {
    let rewrites = kb
        .bullet_writing
        .examples
        .iter()
        .map(|ex| format!("• Weak: {}\n  Strong: {}", ex.weak, ex.strong))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Every experience bullet should follow one formula: {}.\n\n\
         Strong action verbs to reach for: {}.\n\n\
         Before and after:\n{}",
        kb.bullet_writing.formula,
        kb.bullet_writing.power_verbs.join(", "),
        rewrites
    )
}

/// With an industry: that industry's skill list. Without: how to build the
/// skills section in general.
pub fn skills(kb: &KnowledgeBase, industry: Option<Industry>) -> String {
    match industry {
        Some(industry) => format!(
            "Key skills to highlight for {} roles:\n\n{}\n\nLead with the ones the posting asks for by name.",
            industry.label(),
            bulleted(kb.skills.industries.get(industry))
        ),
        None => format!(
            "How to build your skills section:\n\n{}",
            numbered(&kb.skills.general)
        ),
    }
}

/// Fixed content; deliberately does not vary by industry.
pub fn ats(kb: &KnowledgeBase) -> String {
    format!(
        "How to get your resume past applicant tracking systems:\n\n{}",
        numbered(&kb.ats.tips)
    )
}

pub fn common_mistakes(kb: &KnowledgeBase) -> String {
    format!(
        "The most common resume mistakes to avoid:\n\n{}",
        numbered(&kb.common_mistakes)
    )
}

pub fn career_specific(kb: &KnowledgeBase, industry: Option<Industry>) -> String {
    match industry {
        Some(industry) => {
            let example = kb.examples.industries.get(industry);
            format!(
                "Resume advice for {} roles.\n\nSkills to highlight:\n{}\n\nA strong summary reads like:\n\"{}\"",
                industry.label(),
                bulleted(kb.skills.industries.get(industry)),
                example.summary
            )
        }
        None => {
            let fields = Industry::ALL
                .into_iter()
                .map(Industry::label)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Resume advice varies by field. I have specific guidance for: {fields}. \
                 Mention your industry and I will tailor the advice."
            )
        }
    }
}

pub fn cover_letter(kb: &KnowledgeBase) -> String {
    format!(
        "A cover letter that gets read has this shape:\n\n{}\n\nTips:\n{}",
        numbered(&kb.cover_letter.structure),
        bulleted(&kb.cover_letter.tips)
    )
}

pub fn employment_gaps(kb: &KnowledgeBase) -> String {
    format!(
        "How to handle employment gaps on your resume:\n\n{}",
        numbered(&kb.employment_gaps)
    )
}

pub fn interview_prep(kb: &KnowledgeBase) -> String {
    format!(
        "Once the resume is working, prepare for the interview:\n\n{}",
        numbered(&kb.interview_prep)
    )
}

/// With an industry: that industry's example block. Without: the general one.
pub fn examples(kb: &KnowledgeBase, industry: Option<Industry>) -> String {
    let (header, example) = match industry {
        Some(industry) => (
            format!("Example resume content for {} roles.", industry.label()),
            kb.examples.industries.get(industry),
        ),
        None => (
            "Example resume content you can adapt.".to_string(),
            &kb.examples.general,
        ),
    };

    format!(
        "{header}\n\nSummary:\n{}\n\nExperience bullets:\n{}",
        example.summary,
        bulleted(&example.bullets)
    )
}

/// The no-match fallback: the ten tips that matter most.
pub fn general_tips(kb: &KnowledgeBase) -> String {
    format!(
        "Here are the ten resume tips that matter most:\n\n{}",
        numbered(&kb.general_tips)
    )
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
