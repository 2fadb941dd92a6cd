//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction, Port};

/// Serves a cassette's interactions in recorded order, with one queue per
/// port/method pair.
pub struct CassetteReplayer {
    name: String,
    queues: HashMap<(Port, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(Port, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port, interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { name: cassette.name.clone(), queues }
    }

    /// Number of interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Take the next interaction for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair,
    /// naming the cassette and the pairs that still have interactions.
    pub fn next_interaction(&mut self, port: Port, method: &str) -> Interaction {
        let next = self.queues.get_mut(&(port, method.to_string())).and_then(VecDeque::pop_front);
        let Some(interaction) = next else {
            let mut left: Vec<String> = self
                .queues
                .iter()
                .filter(|(_, queue)| !queue.is_empty())
                .map(|((p, m), queue)| format!("{p}::{m} ({})", queue.len()))
                .collect();
            left.sort();
            panic!(
                "Cassette exhausted: {name:?} has no interaction left for {port}::{method}. \
                 Remaining: [{}]",
                left.join(", "),
                name = self.name,
            );
        };
        interaction
    }
}
