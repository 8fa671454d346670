//! JourneyDataset - The four datasets, loaded once and never mutated
//!
//! Built by a [`DatasetSource`](crate::ports::DatasetSource) at startup and
//! shared read-only with every query.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Decision, Message, MetricsRow, Persona};

/// Read-only repository of messages, decisions, persona and metrics
#[derive(Debug, Clone, Default)]
pub struct JourneyDataset {
    messages: Vec<Message>,
    decisions: Vec<Decision>,
    persona: Persona,
    metrics: Vec<MetricsRow>,
    /// Message id -> position in `messages` (first occurrence wins)
    message_index: HashMap<i64, usize>,
}

impl JourneyDataset {
    /// Assemble a dataset, indexing messages and assigning decision ids.
    ///
    /// Decisions without a positive id get their 1-based position in the log,
    /// or the next free id when that position is already used explicitly.
    pub fn new(
        messages: Vec<Message>,
        mut decisions: Vec<Decision>,
        persona: Persona,
        metrics: Vec<MetricsRow>,
    ) -> Self {
        let mut message_index = HashMap::with_capacity(messages.len());
        for (pos, message) in messages.iter().enumerate() {
            if message_index.contains_key(&message.id) {
                tracing::warn!("Duplicate message id {} - keeping first occurrence", message.id);
                continue;
            }
            message_index.insert(message.id, pos);
        }

        assign_decision_ids(&mut decisions);

        let dataset = Self {
            messages,
            decisions,
            persona,
            metrics,
            message_index,
        };

        let dangling = dataset.dangling_references();
        if dangling > 0 {
            tracing::warn!(
                "{} decision source reference(s) point at unknown messages",
                dangling
            );
        }

        dataset
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn metrics(&self) -> &[MetricsRow] {
        &self.metrics
    }

    /// Find a message by ID
    pub fn message(&self, id: i64) -> Option<&Message> {
        self.message_index.get(&id).map(|&pos| &self.messages[pos])
    }

    /// Find a decision by ID
    pub fn decision(&self, id: u64) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id == id)
    }

    /// Number of `source_message_ids` entries (deduplicated per decision)
    /// that do not resolve to a message
    pub fn dangling_references(&self) -> usize {
        self.decisions
            .iter()
            .map(|d| {
                d.source_message_ids
                    .iter()
                    .collect::<HashSet<_>>()
                    .into_iter()
                    .filter(|id| !self.message_index.contains_key(id))
                    .count()
            })
            .sum()
    }
}

/// Fill in missing decision ids without colliding with explicit ones
fn assign_decision_ids(decisions: &mut [Decision]) {
    let mut taken: HashSet<u64> = HashSet::with_capacity(decisions.len());
    for decision in decisions.iter().filter(|d| d.id > 0) {
        if !taken.insert(decision.id) {
            tracing::warn!("Duplicate decision id {} in the decision log", decision.id);
        }
    }

    for (pos, decision) in decisions.iter_mut().enumerate() {
        if decision.id > 0 {
            continue;
        }
        let mut id = pos as u64 + 1;
        while taken.contains(&id) {
            id += 1;
        }
        taken.insert(id);
        decision.id = id;
    }
}
