//! Decision Timeline - Filtered decisions with their message trails
//!
//! A decision's trail is the set of messages its `source_message_ids`
//! resolve to, oldest first. Ids with no matching message are skipped.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{Decision, Message};
use crate::domain::value_objects::DecisionType;
use crate::domain::JourneyDataset;

/// Timeline search parameters
#[derive(Debug, Clone, Default)]
pub struct TimelineFilter {
    /// Free text, matched case-insensitively against title, type and rationale
    pub query: String,
    /// Only decisions tagged with this pillar
    pub pillar: Option<String>,
    /// Only decisions of this type
    pub decision_type: Option<DecisionType>,
}

impl TimelineFilter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn pillar(mut self, pillar: impl Into<String>) -> Self {
        self.pillar = Some(pillar.into());
        self
    }

    pub fn decision_type(mut self, decision_type: DecisionType) -> Self {
        self.decision_type = Some(decision_type);
        self
    }

    fn accepts(&self, decision: &Decision, needle: &str) -> bool {
        if !decision.matches_query(needle) {
            return false;
        }
        if let Some(pillar) = self.pillar.as_deref().filter(|p| !p.trim().is_empty()) {
            if !decision.has_pillar(pillar) {
                return false;
            }
        }
        if let Some(decision_type) = &self.decision_type {
            if !decision.decision_type.matches(decision_type) {
                return false;
            }
        }
        true
    }
}

/// A decision paired with the messages that justify it
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry<'a> {
    pub decision: &'a Decision,
    pub trail: Vec<&'a Message>,
}

/// Decisions accepted by `filter`, oldest first (ties broken by id)
pub fn filter_decisions<'a>(decisions: &'a [Decision], filter: &TimelineFilter) -> Vec<&'a Decision> {
    let needle = filter.query.trim().to_lowercase();
    let mut matched: Vec<&Decision> = decisions
        .iter()
        .filter(|d| filter.accepts(d, &needle))
        .collect();
    matched.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    matched
}

/// Messages cited by `decision`, oldest first, each at most once
pub fn resolve_trail<'a>(dataset: &'a JourneyDataset, decision: &Decision) -> Vec<&'a Message> {
    let mut seen = HashSet::new();
    let mut trail: Vec<&Message> = decision
        .source_message_ids
        .iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| dataset.message(*id))
        .collect();
    trail.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
    trail
}

/// Filtered timeline with resolved trails
pub fn build_timeline<'a>(dataset: &'a JourneyDataset, filter: &TimelineFilter) -> Vec<TimelineEntry<'a>> {
    filter_decisions(dataset.decisions(), filter)
        .into_iter()
        .map(|decision| TimelineEntry {
            decision,
            trail: resolve_trail(dataset, decision),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Persona;
    use crate::domain::value_objects::Timestamp;

    fn ts(raw: &str) -> Timestamp {
        Timestamp::parse(raw).unwrap()
    }

    fn dataset() -> JourneyDataset {
        let messages = vec![
            Message::new(1, "Rohan", ts("2025-01-21T10:00"), "Adjust workout routine."),
            Message::new(2, "Advik", ts("2025-01-20T08:00"), "HRV trending down."),
            Message::new(3, "Dr. Warren", ts("2025-02-02T09:00"), "Start statin trial."),
            Message::new(4, "Ruby", ts("2025-02-01T12:00"), "Lab slot booked."),
        ];
        let decisions = vec![
            Decision::new(
                "Start statin",
                DecisionType::Medication,
                ts("2025-02-02"),
                "ApoB above target",
                vec![3, 42],
            )
            .with_pillar("Cardio"),
            Decision::new(
                "Swap intervals",
                DecisionType::PlanUpdate,
                ts("2025-01-21"),
                "Recovery lagging",
                vec![1, 2],
            )
            .with_pillar("Autonomic"),
            Decision::new(
                "Book lipid panel",
                DecisionType::DiagnosticTest,
                ts("2025-02-01"),
                "Baseline before medication",
                vec![4],
            ),
        ];
        JourneyDataset::new(messages, decisions, Persona::default(), vec![])
    }

    #[test]
    fn test_single_decision_example() {
        let messages = vec![Message::new(
            1,
            "Rohan",
            ts("2025-01-21T10:00"),
            "Adjust workout routine.",
        )];
        let decisions = vec![Decision::new(
            "Swap intervals",
            DecisionType::default(),
            ts("2025-01-21"),
            "",
            vec![1],
        )];
        let ds = JourneyDataset::new(messages, decisions, Persona::default(), vec![]);

        let timeline = build_timeline(&ds, &TimelineFilter::with_query("interval"));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].decision.title, "Swap intervals");
        assert_eq!(timeline[0].trail.len(), 1);
        assert_eq!(timeline[0].trail[0].id, 1);
    }

    #[test]
    fn test_empty_query_returns_all_sorted_by_date() {
        let ds = dataset();
        let titles: Vec<&str> = build_timeline(&ds, &TimelineFilter::default())
            .iter()
            .map(|e| e.decision.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Swap intervals", "Book lipid panel", "Start statin"]);
    }

    #[test]
    fn test_trail_is_exact_and_chronological() {
        let ds = dataset();
        for entry in build_timeline(&ds, &TimelineFilter::default()) {
            let expected: HashSet<i64> = ds
                .messages()
                .iter()
                .filter(|m| entry.decision.source_message_ids.contains(&m.id))
                .map(|m| m.id)
                .collect();
            let got: HashSet<i64> = entry.trail.iter().map(|m| m.id).collect();
            assert_eq!(got, expected);
            assert!(entry.trail.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        }
    }

    #[test]
    fn test_dangling_ids_are_skipped() {
        let ds = dataset();
        let timeline = build_timeline(&ds, &TimelineFilter::with_query("statin"));
        assert_eq!(timeline.len(), 1);
        let ids: Vec<i64> = timeline[0].trail.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_trail_orders_by_timestamp_not_citation_order() {
        let ds = dataset();
        let timeline = build_timeline(&ds, &TimelineFilter::with_query("swap"));
        let ids: Vec<i64> = timeline[0].trail.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_query_matches_type_and_rationale_case_insensitively() {
        let ds = dataset();
        assert_eq!(build_timeline(&ds, &TimelineFilter::with_query("DIAGNOSTIC")).len(), 1);
        assert_eq!(build_timeline(&ds, &TimelineFilter::with_query("apob")).len(), 1);
        assert!(build_timeline(&ds, &TimelineFilter::with_query("sauna")).is_empty());
    }

    #[test]
    fn test_pillar_and_type_filters() {
        let ds = dataset();
        let by_pillar = build_timeline(&ds, &TimelineFilter::default().pillar("autonomic"));
        assert_eq!(by_pillar.len(), 1);
        assert_eq!(by_pillar[0].decision.title, "Swap intervals");

        let by_type = build_timeline(
            &ds,
            &TimelineFilter::default().decision_type(DecisionType::Medication),
        );
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].decision.title, "Start statin");

        let blank_pillar = build_timeline(&ds, &TimelineFilter::default().pillar("  "));
        assert_eq!(blank_pillar.len(), 3);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let ds = dataset();
        let filter = TimelineFilter::with_query("a");
        let once: Vec<Decision> = filter_decisions(ds.decisions(), &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<u64> = filter_decisions(&once, &filter).iter().map(|d| d.id).collect();
        let once_ids: Vec<u64> = once.iter().map(|d| d.id).collect();
        assert_eq!(once_ids, twice);
        let again: Vec<u64> = filter_decisions(ds.decisions(), &filter)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(once_ids, again);
    }
}
