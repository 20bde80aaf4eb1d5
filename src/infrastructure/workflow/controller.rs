//! Answer-quality workflow controller
//!
//! Drives one run through the step machine in `domain::workflow`, owning the
//! per-run state and enforcing the loop bounds.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::{
    transition, AnswerGenerator, CheckOutcome, EvidenceGrader, EvidenceVerdict,
    GroundednessChecker, GroundednessVerdict, RelevanceChecker, RelevanceVerdict, RunState,
    SearchReason, StepSignal, UnresolvedReason, WorkflowConfig, WorkflowError, WorkflowOutcome,
    WorkflowStatus, WorkflowStep,
};
use crate::infrastructure::observability::{
    record_generation_attempt, record_web_search, record_workflow_run,
};
use crate::infrastructure::retrieval::RetrievalGateway;

/// Whole milliseconds, saturating at `u64::MAX`
fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// The evaluator and generator capabilities used by the controller
#[derive(Debug, Clone)]
pub struct WorkflowCapabilities {
    pub grader: Arc<dyn EvidenceGrader>,
    pub generator: Arc<dyn AnswerGenerator>,
    pub groundedness: Arc<dyn GroundednessChecker>,
    pub relevance: Arc<dyn RelevanceChecker>,
}

/// A grounded answer kept as the fallback result
struct GroundedAnswer {
    answer: String,
    groundedness: GroundednessVerdict,
    relevance: Option<RelevanceVerdict>,
}

/// Loop counters for one run
#[derive(Default)]
struct RunCounters {
    /// Regenerations since the evidence last changed
    regenerations: u32,
    escalations: u32,
}

#[derive(Debug)]
pub struct WorkflowController {
    gateway: Arc<RetrievalGateway>,
    capabilities: WorkflowCapabilities,
    config: WorkflowConfig,
}

impl WorkflowController {
    pub fn new(
        gateway: Arc<RetrievalGateway>,
        capabilities: WorkflowCapabilities,
        config: WorkflowConfig,
    ) -> Result<Self, WorkflowError> {
        config.validate()?;

        Ok(Self {
            gateway,
            capabilities,
            config,
        })
    }

    pub fn gateway(&self) -> &Arc<RetrievalGateway> {
        &self.gateway
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Answer one question
    pub async fn run(&self, question: &str) -> Result<WorkflowOutcome, WorkflowError> {
        if question.trim().is_empty() {
            return Err(WorkflowError::invalid_input("question must not be empty"));
        }

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();

        let span = info_span!("workflow_run", %run_id);
        let result = self.execute(question).instrument(span).await;
        let elapsed = start.elapsed();
        let elapsed_ms = duration_ms(elapsed);

        match result {
            Ok((status, answer, state, trace)) => {
                record_workflow_run(Some(&status), elapsed);
                info!(
                    %run_id,
                    status = status.as_str(),
                    search_method = ?state.search_method,
                    generations = state.generation_attempts,
                    elapsed_ms,
                    "Workflow run finished"
                );

                Ok(WorkflowOutcome {
                    run_id,
                    status,
                    answer,
                    state,
                    trace,
                    started_at,
                    execution_time_ms: elapsed_ms,
                })
            }
            Err(e) => {
                record_workflow_run(None, elapsed);
                warn!(%run_id, error = %e, "Workflow run failed");
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        question: &str,
    ) -> Result<(WorkflowStatus, String, RunState, Vec<WorkflowStep>), WorkflowError> {
        let mut state = RunState::new(question);
        let mut trace = Vec::new();
        let mut counters = RunCounters::default();
        let mut best: Option<GroundedAnswer> = None;
        let mut search_reason = SearchReason::Fallback;
        let mut step = WorkflowStep::Retrieve;

        let status = loop {
            trace.push(step);
            debug!(%step, "Entering step");

            let signal = match step {
                WorkflowStep::Retrieve => {
                    let outcome = self.gateway.fetch(question).await;
                    info!(
                        passages = outcome.passages.len(),
                        fallback = outcome.used_web_search,
                        "Retrieved evidence"
                    );
                    state.record_retrieval(outcome.passages, outcome.used_web_search);
                    StepSignal::Retrieved
                }
                WorkflowStep::Grade => {
                    let verdicts = self.grade_all(&state).await?;
                    let graded = verdicts.len();
                    let needs_online_search = state.record_grades(verdicts);
                    info!(
                        graded,
                        kept = state.passages.len(),
                        needs_online_search,
                        "Graded evidence"
                    );
                    StepSignal::Graded {
                        needs_online_search,
                    }
                }
                WorkflowStep::SearchOnline => {
                    let passage = self
                        .gateway
                        .search_online(question)
                        .await
                        .map_err(|e| WorkflowError::web_search(e.to_string()))?;
                    state.record_web_passage(passage);
                    record_web_search(search_reason);
                    counters.regenerations = 0;
                    info!(reason = search_reason.as_str(), "Added web evidence");
                    StepSignal::SearchedOnline
                }
                WorkflowStep::Generate => {
                    let answer = self
                        .capabilities
                        .generator
                        .generate(question, &state.passages)
                        .await
                        .map_err(|e| WorkflowError::capability(WorkflowStep::Generate, e.to_string()))?;
                    state.record_answer(answer);
                    record_generation_attempt();
                    debug!(attempt = state.generation_attempts, "Generated answer");
                    StepSignal::Generated
                }
                WorkflowStep::Check => {
                    let outcome = self.check(&mut state, &mut best).await?;

                    match outcome {
                        CheckOutcome::Hallucinated => {
                            if counters.regenerations >= self.config.max_generation_retries {
                                warn!(
                                    regenerations = counters.regenerations,
                                    "Regeneration limit reached"
                                );
                                break WorkflowStatus::QualityUnresolved {
                                    reason: UnresolvedReason::Ungrounded,
                                };
                            }
                            counters.regenerations += 1;
                        }
                        CheckOutcome::Unaddressed => {
                            if counters.escalations >= self.config.max_escalations {
                                warn!(
                                    escalations = counters.escalations,
                                    "Escalation limit reached"
                                );
                                break WorkflowStatus::QualityUnresolved {
                                    reason: UnresolvedReason::Unaddressed,
                                };
                            }
                            counters.escalations += 1;
                            search_reason = SearchReason::Escalation;
                        }
                        CheckOutcome::Accepted => {}
                    }

                    info!(outcome = ?outcome, "Checked answer");
                    StepSignal::Checked(outcome)
                }
                WorkflowStep::Done => break WorkflowStatus::Answered,
            };

            step = transition(step, signal)
                .ok_or_else(|| WorkflowError::invalid_transition(step, format!("{:?}", signal)))?;
        };

        if let WorkflowStatus::QualityUnresolved {
            reason: UnresolvedReason::Ungrounded,
        } = status
        {
            if let Some(best) = best {
                state.restore_answer(best.answer, best.groundedness, best.relevance);
            }
        }

        let answer = state.candidate_answer.clone().unwrap_or_default();

        Ok((status, answer, state, trace))
    }

    /// Grade every passage, preserving passage order in the verdicts
    async fn grade_all(&self, state: &RunState) -> Result<Vec<EvidenceVerdict>, WorkflowError> {
        let grader = &self.capabilities.grader;
        let question = state.question.as_str();

        let grading: Vec<_> = state
            .passages
            .iter()
            .map(|passage| grader.grade(question, passage))
            .collect();

        stream::iter(grading)
            .buffered(self.config.grading_concurrency)
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| WorkflowError::capability(WorkflowStep::Grade, e.to_string()))
    }

    /// Groundedness first; relevance only for grounded answers
    async fn check(
        &self,
        state: &mut RunState,
        best: &mut Option<GroundedAnswer>,
    ) -> Result<CheckOutcome, WorkflowError> {
        let answer = state.candidate_answer.clone().ok_or_else(|| {
            WorkflowError::capability(WorkflowStep::Check, "no candidate answer to check")
        })?;

        let groundedness = self
            .capabilities
            .groundedness
            .check_grounded(&state.passages, &answer)
            .await
            .map_err(|e| WorkflowError::capability(WorkflowStep::Check, e.to_string()))?;
        state.record_groundedness(groundedness.clone());

        if groundedness.is_hallucination() {
            debug!(confidence = groundedness.confidence, "Answer not grounded");
            return Ok(CheckOutcome::Hallucinated);
        }

        let relevance = self
            .capabilities
            .relevance
            .check_relevance(&state.question, &answer)
            .await
            .map_err(|e| WorkflowError::capability(WorkflowStep::Check, e.to_string()))?;
        state.record_relevance(relevance.clone());

        let addresses_question = relevance.addresses_question;
        *best = Some(GroundedAnswer {
            answer,
            groundedness,
            relevance: Some(relevance),
        });

        Ok(if addresses_question {
            CheckOutcome::Accepted
        } else {
            CheckOutcome::Unaddressed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::{
        MockAnswerGenerator, MockEvidenceGrader, MockGroundednessChecker, MockRelevanceChecker,
    };
    use crate::domain::retrieval::{MockRetriever, MockWebSearch};
    use crate::domain::{DomainError, Passage, Retriever, SearchMethod, WebSearchResult};

    const QUESTION: &str = "What is the capital of France?";
    const WEB_SNIPPET: &str = "Paris is the capital and largest city of France.";

    struct Harness {
        grader: Arc<MockEvidenceGrader>,
        generator: Arc<MockAnswerGenerator>,
        groundedness: Arc<MockGroundednessChecker>,
        relevance: Arc<MockRelevanceChecker>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                grader: Arc::new(MockEvidenceGrader::new()),
                generator: Arc::new(MockAnswerGenerator::new("Paris is the capital.")),
                groundedness: Arc::new(MockGroundednessChecker::always(true)),
                relevance: Arc::new(MockRelevanceChecker::always(true)),
            }
        }

        fn with_grader(mut self, grader: MockEvidenceGrader) -> Self {
            self.grader = Arc::new(grader);
            self
        }

        fn with_generator(mut self, generator: MockAnswerGenerator) -> Self {
            self.generator = Arc::new(generator);
            self
        }

        fn with_groundedness(mut self, checker: MockGroundednessChecker) -> Self {
            self.groundedness = Arc::new(checker);
            self
        }

        fn with_relevance(mut self, checker: MockRelevanceChecker) -> Self {
            self.relevance = Arc::new(checker);
            self
        }

        fn controller(
            &self,
            retriever: Option<Arc<dyn Retriever>>,
            web_search: MockWebSearch,
            config: WorkflowConfig,
        ) -> WorkflowController {
            let gateway = Arc::new(RetrievalGateway::new(retriever, Arc::new(web_search)));
            let capabilities = WorkflowCapabilities {
                grader: self.grader.clone(),
                generator: self.generator.clone(),
                groundedness: self.groundedness.clone(),
                relevance: self.relevance.clone(),
            };

            WorkflowController::new(gateway, capabilities, config).unwrap()
        }
    }

    fn web_search(times: usize) -> MockWebSearch {
        let mut mock = MockWebSearch::new();
        mock.expect_search()
            .withf(|query| query == QUESTION)
            .times(times)
            .returning(|_| Ok(vec![WebSearchResult::new(WEB_SNIPPET)]));
        mock.expect_provider_name().return_const("mock");
        mock
    }

    fn retriever(contents: &[&str]) -> Option<Arc<dyn Retriever>> {
        let passages = contents
            .iter()
            .map(|c| Passage::local(*c, "atlas.txt"))
            .collect();
        Some(Arc::new(MockRetriever::new().with_passages(passages)))
    }

    #[tokio::test]
    async fn test_no_retriever_goes_online_without_grading() {
        let harness = Harness::new();
        let controller = harness.controller(None, web_search(1), WorkflowConfig::default());

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        assert!(harness.grader.graded().is_empty());
        assert_eq!(outcome.state.search_method, SearchMethod::Online);
        assert!(outcome.state.used_web_search);
    }

    #[tokio::test]
    async fn test_all_insufficient_searches_once_before_generating() {
        let harness = Harness::new().with_grader(MockEvidenceGrader::all_insufficient());
        let controller = harness.controller(
            retriever(&["Lyon is in France.", "Rivers of Europe."]),
            web_search(1),
            WorkflowConfig::default(),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert_eq!(outcome.state.search_method, SearchMethod::Online);
        let calls = harness.generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert!(calls[0][0].is_web());
    }

    #[tokio::test]
    async fn test_all_sufficient_stays_on_documents() {
        let harness = Harness::new();
        let controller = harness.controller(
            retriever(&["France's capital is Paris.", "Paris is on the Seine.", "Paris has the Louvre."]),
            web_search(0),
            WorkflowConfig::default(),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        assert_eq!(outcome.answer(), "Paris is the capital.");
        assert_eq!(outcome.state.search_method, SearchMethod::Documents);
        assert!(!outcome.state.used_web_search);
        assert_eq!(outcome.state.passages.len(), 3);
        assert_eq!(
            outcome.trace,
            vec![
                WorkflowStep::Retrieve,
                WorkflowStep::Grade,
                WorkflowStep::Generate,
                WorkflowStep::Check,
                WorkflowStep::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_hallucination_regenerates_with_same_evidence() {
        let harness = Harness::new()
            .with_generator(MockAnswerGenerator::with_answers(vec![
                "Paris, population 90 million.".to_string(),
                "Paris is the capital.".to_string(),
            ]))
            .with_groundedness(MockGroundednessChecker::scripted(vec![false, true]));
        let controller = harness.controller(
            retriever(&["France's capital is Paris."]),
            web_search(0),
            WorkflowConfig::default(),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        let calls = harness.generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(
            harness.relevance.checked_answers(),
            vec!["Paris is the capital.".to_string()]
        );
        assert_eq!(outcome.state.generation_attempts, 2);
    }

    #[tokio::test]
    async fn test_unaddressed_answer_escalates_to_web() {
        let harness = Harness::new()
            .with_generator(MockAnswerGenerator::with_answers(vec![
                "France is in Europe.".to_string(),
                "Paris is the capital.".to_string(),
            ]))
            .with_relevance(MockRelevanceChecker::scripted(vec![false, true]));
        let controller = harness.controller(
            retriever(&["France is a country in Europe."]),
            web_search(1),
            WorkflowConfig::default(),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        assert_eq!(outcome.answer(), "Paris is the capital.");

        let calls = harness.generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[1].len(), 2);
        assert_eq!(calls[1][0], calls[0][0]);
        assert!(calls[1][1].is_web());
        assert_eq!(outcome.state.search_method, SearchMethod::Online);
        assert_eq!(outcome.step_count(WorkflowStep::SearchOnline), 1);
    }

    #[tokio::test]
    async fn test_persistent_hallucination_terminates_within_cap() {
        let harness =
            Harness::new().with_groundedness(MockGroundednessChecker::always(false));
        let controller = harness.controller(
            retriever(&["France's capital is Paris."]),
            web_search(0),
            WorkflowConfig::default().with_max_generation_retries(3),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert_eq!(
            outcome.status,
            WorkflowStatus::QualityUnresolved {
                reason: UnresolvedReason::Ungrounded
            }
        );
        assert_eq!(harness.generator.call_count(), 4);
        assert!(harness.relevance.checked_answers().is_empty());
        assert_eq!(outcome.answer(), "Paris is the capital.");
    }

    #[tokio::test]
    async fn test_persistent_irrelevance_terminates_within_cap() {
        let harness = Harness::new().with_relevance(MockRelevanceChecker::always(false));
        let controller = harness.controller(
            retriever(&["France's capital is Paris."]),
            web_search(2),
            WorkflowConfig::default().with_max_escalations(2),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert_eq!(
            outcome.status,
            WorkflowStatus::QualityUnresolved {
                reason: UnresolvedReason::Unaddressed
            }
        );
        assert_eq!(harness.generator.call_count(), 3);
        assert_eq!(outcome.state.online_searches, 2);
        assert!(outcome.state.relevance_verdict.is_some());
    }

    #[tokio::test]
    async fn test_unresolved_returns_latest_grounded_answer() {
        let harness = Harness::new()
            .with_generator(MockAnswerGenerator::with_answers(vec![
                "France is in Europe.".to_string(),
                "Paris has 90 million people.".to_string(),
            ]))
            .with_groundedness(MockGroundednessChecker::scripted(vec![true, false]))
            .with_relevance(MockRelevanceChecker::always(false));
        let controller = harness.controller(
            retriever(&["France is a country in Europe."]),
            web_search(1),
            WorkflowConfig::default()
                .with_max_generation_retries(1)
                .with_max_escalations(1),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert_eq!(
            outcome.status,
            WorkflowStatus::QualityUnresolved {
                reason: UnresolvedReason::Ungrounded
            }
        );
        assert_eq!(outcome.answer(), "France is in Europe.");
        assert_eq!(harness.generator.call_count(), 3);
        assert!(outcome.state.groundedness_verdict.as_ref().unwrap().supported);
        assert!(!outcome.state.relevance_verdict.as_ref().unwrap().addresses_question);
    }

    #[tokio::test]
    async fn test_web_search_resets_regeneration_budget() {
        let harness = Harness::new()
            .with_groundedness(MockGroundednessChecker::scripted(vec![false, true, false, true]))
            .with_relevance(MockRelevanceChecker::scripted(vec![false, true]));
        let controller = harness.controller(
            retriever(&["France is a country in Europe."]),
            web_search(1),
            WorkflowConfig::default()
                .with_max_generation_retries(1)
                .with_max_escalations(1),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        assert_eq!(harness.generator.call_count(), 4);
        assert_eq!(outcome.state.online_searches, 1);
    }

    #[tokio::test]
    async fn test_scenario_no_passages_uses_single_web_passage() {
        let harness = Harness::new();
        let controller = harness.controller(retriever(&[]), web_search(1), WorkflowConfig::default());

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        assert_eq!(outcome.state.passages.len(), 1);
        assert_eq!(outcome.state.passages[0].content, WEB_SNIPPET);
        assert_eq!(harness.generator.calls()[0].len(), 1);
    }

    #[tokio::test]
    async fn test_scenario_mixed_grades_keep_sufficient_and_add_web() {
        let harness = Harness::new()
            .with_grader(MockEvidenceGrader::new().with_verdict_for("Rivers of Europe.", false));
        let controller = harness.controller(
            retriever(&["France's capital is Paris.", "Rivers of Europe."]),
            web_search(1),
            WorkflowConfig::default(),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        let generated_with = &harness.generator.calls()[0];
        assert_eq!(generated_with.len(), 2);
        assert_eq!(generated_with[0].content, "France's capital is Paris.");
        assert!(generated_with[1].is_web());
        assert_eq!(outcome.state.search_method, SearchMethod::Online);
        assert_eq!(outcome.state.evidence_verdicts.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_grading_preserves_order() {
        let harness = Harness::new()
            .with_grader(MockEvidenceGrader::new().with_verdict_for("b", false));
        let controller = harness.controller(
            retriever(&["a", "b", "c", "d"]),
            web_search(1),
            WorkflowConfig::default().with_grading_concurrency(4),
        );

        let outcome = controller.run(QUESTION).await.unwrap();

        let sufficiency: Vec<bool> = outcome
            .state
            .evidence_verdicts
            .iter()
            .map(|v| v.sufficient)
            .collect();
        assert_eq!(sufficiency, vec![true, false, true, true]);
        let kept: Vec<&str> = outcome
            .state
            .passages
            .iter()
            .filter(|p| !p.is_web())
            .map(|p| p.content.as_str())
            .collect();
        assert_eq!(kept, vec!["a", "c", "d"]);
    }

    #[tokio::test]
    async fn test_failing_retriever_degrades_to_web() {
        let harness = Harness::new();
        let failing: Arc<dyn Retriever> = Arc::new(MockRetriever::new().with_error("index closed"));
        let controller = harness.controller(Some(failing), web_search(1), WorkflowConfig::default());

        let outcome = controller.run(QUESTION).await.unwrap();

        assert!(outcome.is_answered());
        assert_eq!(outcome.state.search_method, SearchMethod::Online);
        assert!(!controller.gateway().has_retriever().await);
    }

    #[tokio::test]
    async fn test_empty_question_rejected() {
        let harness = Harness::new();
        let controller = harness.controller(None, web_search(0), WorkflowConfig::default());

        let err = controller.run("   ").await.unwrap_err();

        assert!(matches!(err, WorkflowError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_web_search_failure_is_fatal() {
        let harness = Harness::new();
        let mut mock = MockWebSearch::new();
        mock.expect_search()
            .times(1)
            .returning(|_| Err(DomainError::provider("tavily", "HTTP 503")));
        mock.expect_provider_name().return_const("mock");
        let controller = harness.controller(None, mock, WorkflowConfig::default());

        let err = controller.run(QUESTION).await.unwrap_err();

        assert!(matches!(err, WorkflowError::WebSearch(_)));
        assert_eq!(harness.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_capability_failures_name_their_step() {
        let harness = Harness::new().with_grader(MockEvidenceGrader::new().with_error("timeout"));
        let controller =
            harness.controller(retriever(&["a"]), web_search(0), WorkflowConfig::default());
        let err = controller.run(QUESTION).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Capability {
                step: WorkflowStep::Grade,
                ..
            }
        ));

        let harness =
            Harness::new().with_generator(MockAnswerGenerator::new("x").with_error("quota"));
        let controller =
            harness.controller(retriever(&["a"]), web_search(0), WorkflowConfig::default());
        let err = controller.run(QUESTION).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Capability {
                step: WorkflowStep::Generate,
                ..
            }
        ));

        let harness = Harness::new()
            .with_relevance(MockRelevanceChecker::always(true).with_error("malformed"));
        let controller =
            harness.controller(retriever(&["a"]), web_search(0), WorkflowConfig::default());
        let err = controller.run(QUESTION).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Capability {
                step: WorkflowStep::Check,
                ..
            }
        ));
    }

    #[test]
    fn test_duration_ms_saturates() {
        assert_eq!(duration_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn test_run_future_is_send() {
        let harness = Harness::new();
        let controller = harness.controller(None, web_search(0), WorkflowConfig::default());

        let run = controller.run(QUESTION);

        assert_send(&run);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let harness = Harness::new();
        let gateway = Arc::new(RetrievalGateway::new(None, Arc::new(web_search(0))));
        let capabilities = WorkflowCapabilities {
            grader: harness.grader.clone(),
            generator: harness.generator.clone(),
            groundedness: harness.groundedness.clone(),
            relevance: harness.relevance.clone(),
        };

        let result = WorkflowController::new(
            gateway,
            capabilities,
            WorkflowConfig::default().with_grading_concurrency(0),
        );

        assert!(matches!(result, Err(WorkflowError::Configuration(_))));
    }
}
