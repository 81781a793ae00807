//! Advice engine — tries the remote advisor when one is configured, and
//! falls back to the local knowledge-base pipeline on any failure. The
//! caller sees the same shape either way; only logs keep the distinction.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::advice::formatting;
use crate::advice::intents::{self, ParsedQuery};
use crate::advice::knowledge::KnowledgeBase;
use crate::advice::topics;
use crate::llm_client::{LlmClient, LlmError};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSource {
    Remote,
    Local,
}

#[derive(Debug, Clone)]
pub struct Advice {
    pub text: String,
    pub source: AdviceSource,
}

/// The optional remote path in front of the local pipeline. Implemented by
/// `LlmClient`; tests substitute failing or canned advisors.
#[async_trait]
pub trait RemoteAdvisor: Send + Sync {
    async fn complete(&self, query: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl RemoteAdvisor for LlmClient {
    async fn complete(&self, query: &str) -> Result<String, LlmError> {
        LlmClient::complete(self, query).await
    }
}

pub struct AdviceEngine {
    kb: KnowledgeBase,
    remote: Option<Arc<dyn RemoteAdvisor>>,
}

impl AdviceEngine {
    pub fn new(kb: KnowledgeBase, remote: Option<Arc<dyn RemoteAdvisor>>) -> Self {
        Self { kb, remote }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Answers a free-text resume question. Never fails: every input path
    /// terminates in a non-empty advice string.
    pub async fn advise(&self, query: &str) -> Advice {
        if let Some(remote) = &self.remote {
            match remote.complete(query).await {
                Ok(text) if !text.trim().is_empty() => {
                    return Advice {
                        text,
                        source: AdviceSource::Remote,
                    };
                }
                Ok(_) => {
                    warn!("remote advisor returned empty content; falling back to knowledge base")
                }
                Err(e) => {
                    warn!(error = %e, "remote advisor failed; falling back to knowledge base")
                }
            }
        }

        Advice {
            text: self.local(query),
            source: AdviceSource::Local,
        }
    }

    /// The local pipeline: special intents first, then topic scoring, then
    /// the generic fallback. Pure over the knowledge base — deterministic
    /// for a given input string.
    pub fn local(&self, raw: &str) -> String {
        let query = ParsedQuery::new(raw);

        if let Some(rule) = intents::match_rule(&query) {
            debug!(rule = rule.name, "special intent matched");
            return (rule.respond)(&self.kb, &query);
        }

        match topics::classify(&query.lowered) {
            Some(topic) => {
                debug!(topic = topic.key(), "topic selected by keyword scoring");
                formatting::topic(&self.kb, topic, query.industry)
            }
            None => {
                debug!("no keyword overlap; returning general tips");
                formatting::general_tips(&self.kb)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingAdvisor;

    #[async_trait]
    impl RemoteAdvisor for FailingAdvisor {
        async fn complete(&self, _query: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    struct CannedAdvisor(&'static str);

    #[async_trait]
    impl RemoteAdvisor for CannedAdvisor {
        async fn complete(&self, _query: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn local_engine() -> AdviceEngine {
        AdviceEngine::new(KnowledgeBase::embedded().unwrap(), None)
    }

    #[tokio::test]
    async fn test_no_remote_answers_locally() {
        let engine = local_engine();
        let advice = engine.advise("how do i structure my resume").await;
        assert_eq!(advice.source, AdviceSource::Local);
        assert!(!advice.text.is_empty());
    }

    #[tokio::test]
    async fn test_failing_remote_matches_no_key_output() {
        let query = "how do i explain employment gaps?";
        let with_failing = AdviceEngine::new(
            KnowledgeBase::embedded().unwrap(),
            Some(Arc::new(FailingAdvisor)),
        );
        let without = local_engine();

        let fallback = with_failing.advise(query).await;
        let baseline = without.advise(query).await;

        assert_eq!(fallback.source, AdviceSource::Local);
        assert_eq!(fallback.text, baseline.text);
    }

    #[tokio::test]
    async fn test_successful_remote_wins() {
        let engine = AdviceEngine::new(
            KnowledgeBase::embedded().unwrap(),
            Some(Arc::new(CannedAdvisor("Tailor it to the posting."))),
        );
        let advice = engine.advise("any tips?").await;
        assert_eq!(advice.source, AdviceSource::Remote);
        assert_eq!(advice.text, "Tailor it to the posting.");
    }

    #[tokio::test]
    async fn test_empty_remote_content_falls_back() {
        let engine = AdviceEngine::new(
            KnowledgeBase::embedded().unwrap(),
            Some(Arc::new(CannedAdvisor("   "))),
        );
        let advice = engine.advise("any tips?").await;
        assert_eq!(advice.source, AdviceSource::Local);
        assert!(!advice.text.trim().is_empty());
    }

    #[test]
    fn test_local_is_idempotent() {
        let engine = local_engine();
        for query in ["skills for a nurse", "xyz123", "", "COVER LETTER"] {
            assert_eq!(engine.local(query), engine.local(query), "query {query:?}");
        }
    }

    #[test]
    fn test_case_insensitive_classification() {
        let engine = local_engine();
        assert_eq!(engine.local("COVER LETTER"), engine.local("cover letter"));
    }

    #[test]
    fn test_unmatched_input_gets_general_tips() {
        let engine = local_engine();
        let expected = formatting::general_tips(engine.knowledge());
        assert_eq!(engine.local("xyz123"), expected);
        assert_eq!(engine.local(""), expected);
    }

    #[test]
    fn test_ats_block_regardless_of_other_keywords() {
        let engine = local_engine();
        let expected = formatting::ats(engine.knowledge());
        assert_eq!(engine.local("ats for a nurse"), expected);
        assert_eq!(engine.local("How do I get past ATS?"), expected);
    }

    #[test]
    fn test_industry_skills_beat_general_skills() {
        let engine = local_engine();
        let kb = engine.knowledge();
        assert_eq!(
            engine.local("skills for a software engineer"),
            formatting::skills(kb, Some(crate::advice::industry::Industry::Software))
        );
        assert_eq!(engine.local("skills list"), formatting::skills(kb, None));
    }

    #[test]
    fn test_employment_gaps_scenario() {
        let engine = local_engine();
        let text = engine.local("How do I explain employment gaps?");
        for (i, tip) in engine.knowledge().employment_gaps.iter().enumerate() {
            assert!(
                text.contains(&format!("{}. {}", i + 1, tip)),
                "gap tip {} missing",
                i + 1
            );
        }
    }
}
