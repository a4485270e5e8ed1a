//! Remaining-work planning for a single adapter.
//!
//! Given the shared prompt list, the configured run count, and the records
//! that already exist in the adapter's checkpoint and in the merged output,
//! a [`WorkPlan`] fixes how many queries are still owed per prompt. Counts
//! from each source are capped at the configured run count, so a stale or
//! over-full file can never drive the remaining count negative or make the
//! worker re-issue completed queries.

use crate::core::prompt::Prompt;
use crate::query::record::ResultRecord;

/// Remaining runs per prompt for one adapter, computed once at worker start.
#[derive(Debug, Clone)]
pub struct WorkPlan {
    runs: u32,
    entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone)]
struct PlanEntry {
    prompt: Prompt,
    remaining: u32,
}

impl WorkPlan {
    /// Build the plan for `chatbot`.
    ///
    /// Checkpoint records are matched by prompt only (a checkpoint file holds
    /// a single adapter's records by construction); output records are
    /// matched by prompt and adapter name.
    pub fn new(
        chatbot: &str,
        prompts: &[Prompt],
        runs: u32,
        checkpoint: &[ResultRecord],
        output: &[ResultRecord],
    ) -> Self {
        let entries = prompts
            .iter()
            .map(|prompt| {
                let in_checkpoint = checkpoint
                    .iter()
                    .filter(|r| r.prompt == prompt.content())
                    .count() as u32;
                let in_output = output
                    .iter()
                    .filter(|r| r.prompt == prompt.content() && r.chatbot == chatbot)
                    .count() as u32;
                let satisfied = in_checkpoint.min(runs) + in_output.min(runs);
                PlanEntry {
                    prompt: prompt.clone(),
                    remaining: runs.saturating_sub(satisfied),
                }
            })
            .collect();

        Self { runs, entries }
    }

    /// Total units in this plan (prompts × runs).
    pub fn total_units(&self) -> u64 {
        self.entries.len() as u64 * u64::from(self.runs)
    }

    /// Units already satisfied before the worker starts.
    pub fn completed_units(&self) -> u64 {
        self.total_units() - self.remaining_units()
    }

    /// Units the worker still has to perform.
    pub fn remaining_units(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.remaining)).sum()
    }

    pub fn is_done(&self) -> bool {
        self.remaining_units() == 0
    }

    /// Prompts with outstanding runs, in list order.
    pub fn outstanding(&self) -> impl Iterator<Item = (&Prompt, u32)> {
        self.entries
            .iter()
            .filter(|e| e.remaining > 0)
            .map(|e| (&e.prompt, e.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::temperature::Temperature;

    fn record(chatbot: &str, prompt: &str) -> ResultRecord {
        ResultRecord::recorded_at(0.0, chatbot, prompt, Temperature::Unset, "answer")
    }

    fn prompts(texts: &[&str]) -> Vec<Prompt> {
        texts.iter().map(|t| Prompt::new(*t)).collect()
    }

    #[test]
    fn test_fresh_plan_owes_everything() {
        let plan = WorkPlan::new("A", &prompts(&["p1", "p2"]), 3, &[], &[]);
        assert_eq!(plan.total_units(), 6);
        assert_eq!(plan.remaining_units(), 6);
        assert_eq!(plan.completed_units(), 0);
        assert!(!plan.is_done());
    }

    #[test]
    fn test_checkpoint_and_output_both_count() {
        let checkpoint = vec![record("A", "p1")];
        let output = vec![record("A", "p1")];
        let plan = WorkPlan::new("A", &prompts(&["p1"]), 3, &checkpoint, &output);
        assert_eq!(plan.remaining_units(), 1);
        assert_eq!(plan.completed_units(), 2);
    }

    #[test]
    fn test_other_adapters_output_does_not_count() {
        let output = vec![record("B", "p1"), record("B", "p1")];
        let plan = WorkPlan::new("A", &prompts(&["p1"]), 2, &[], &output);
        assert_eq!(plan.remaining_units(), 2);
    }

    #[test]
    fn test_counts_capped_at_configured_runs() {
        // An over-full checkpoint plus prior output must not owe negative work
        let checkpoint = vec![record("A", "p1"), record("A", "p1"), record("A", "p1")];
        let output = vec![record("A", "p1"), record("A", "p1")];
        let plan = WorkPlan::new("A", &prompts(&["p1"]), 2, &checkpoint, &output);
        assert_eq!(plan.remaining_units(), 0);
        assert!(plan.is_done());
        // Satisfied units never exceed the plan total
        assert_eq!(plan.completed_units(), 2);
    }

    #[test]
    fn test_outstanding_preserves_list_order() {
        let checkpoint = vec![record("A", "p2"), record("A", "p2")];
        let plan = WorkPlan::new("A", &prompts(&["p1", "p2", "p3"]), 2, &checkpoint, &[]);
        let outstanding: Vec<(&str, u32)> = plan
            .outstanding()
            .map(|(p, n)| (p.content(), n))
            .collect();
        assert_eq!(outstanding, vec![("p1", 2), ("p3", 2)]);
    }
}
