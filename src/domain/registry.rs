//! Participant registry: the ordered list of names and the draw.
//!
//! [`ParticipantRegistry`] is a plain synchronous state machine. It holds
//! no locks and performs no I/O; the host decides how to share it (see
//! [`crate::service::DrawService`]).
//!
//! ```text
//!            add / draw (< 2 names fails)
//!   ┌────────────┐   draw (>= 2)   ┌────────┐
//!   │ Collecting │ ──────────────▶ │ Drawn  │ ─┐ draw (redraw)
//!   └────────────┘ ◀────────────── └────────┘ ◀┘
//!                       reset
//! ```

use serde::Serialize;

use super::random_source::{RandomSource, ThreadRandom};
use super::ParticipantName;
use crate::error::RegistryError;

/// Fewest names a draw accepts.
pub const MIN_PARTICIPANTS: usize = 2;

/// Lifecycle phase of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Accepting names; no result shown.
    Collecting,
    /// A winner has been drawn; reset is available.
    Drawn,
}

/// Point-in-time view of the registry for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    /// Names in insertion order.
    pub participants: Vec<ParticipantName>,
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Last drawn name, present only in [`Phase::Drawn`].
    pub winner: Option<ParticipantName>,
    /// Whether the reset affordance should be shown.
    pub reset_available: bool,
}

/// Ordered, case-insensitively unique list of participant names.
#[derive(Debug)]
pub struct ParticipantRegistry {
    names: Vec<ParticipantName>,
    winner: Option<ParticipantName>,
    random: Box<dyn RandomSource>,
}

impl ParticipantRegistry {
    /// Creates an empty registry drawing from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_random(Box::new(ThreadRandom::new()))
    }

    /// Creates an empty registry drawing from the given source.
    #[must_use]
    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Self {
            names: Vec::new(),
            winner: None,
            random,
        }
    }

    /// Validates `candidate` and appends it.
    ///
    /// Returns the updated list on success. On failure the registry is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyDrawn`] if a winner is currently shown.
    /// - [`RegistryError::EmptyName`] if `candidate` is blank.
    /// - [`RegistryError::DuplicateName`] if a name equal ignoring case is
    ///   already present.
    pub fn add(&mut self, candidate: &str) -> Result<&[ParticipantName], RegistryError> {
        if self.winner.is_some() {
            return Err(RegistryError::AlreadyDrawn);
        }
        let name = ParticipantName::parse(candidate)?;
        if let Some(existing) = self.names.iter().find(|n| n.matches(&name)) {
            return Err(RegistryError::DuplicateName(existing.to_string()));
        }
        self.names.push(name);
        Ok(&self.names)
    }

    /// Picks one name uniformly at random.
    ///
    /// The list is not modified. The winner is retained until the next
    /// draw or [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InsufficientParticipants`] with fewer than
    ///   [`MIN_PARTICIPANTS`] names.
    /// - [`RegistryError::IndexOutOfRange`] if the random source returns an
    ///   index past the end of the list.
    pub fn draw(&mut self) -> Result<ParticipantName, RegistryError> {
        let len = self.names.len();
        if len < MIN_PARTICIPANTS {
            return Err(RegistryError::InsufficientParticipants { count: len });
        }
        let index = self.random.index(len);
        let winner = self
            .names
            .get(index)
            .cloned()
            .ok_or(RegistryError::IndexOutOfRange { index, len })?;
        self.winner = Some(winner.clone());
        Ok(winner)
    }

    /// Empties the list and forgets any winner.
    pub fn reset(&mut self) {
        self.names.clear();
        self.winner = None;
    }

    /// Names in insertion order.
    #[must_use]
    pub fn participants(&self) -> &[ParticipantName] {
        &self.names
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Last drawn name, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&ParticipantName> {
        self.winner.as_ref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Drawn
        } else {
            Phase::Collecting
        }
    }

    /// Returns `true` once there are enough names to draw.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.names.len() >= MIN_PARTICIPANTS
    }

    /// Copies the current state for display.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        let phase = self.phase();
        RegistrySnapshot {
            participants: self.names.clone(),
            phase,
            winner: self.winner.clone(),
            reset_available: phase == Phase::Drawn,
        }
    }
}

impl Default for ParticipantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::random_source::{ScriptedRandom, SeededRandom};

    fn names(registry: &ParticipantRegistry) -> Vec<&str> {
        registry.participants().iter().map(ParticipantName::as_str).collect()
    }

    fn scripted(script: Vec<usize>) -> ParticipantRegistry {
        ParticipantRegistry::with_random(Box::new(ScriptedRandom::new(script)))
    }

    fn filled(list: &[&str]) -> ParticipantRegistry {
        let mut registry = ParticipantRegistry::with_random(Box::new(SeededRandom::new(1)));
        for name in list {
            if registry.add(name).is_err() {
                panic!("failed to add {name}");
            }
        }
        registry
    }

    #[test]
    fn starts_empty_and_collecting() {
        let registry = ParticipantRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.phase(), Phase::Collecting);
        assert!(registry.winner().is_none());
        assert!(!registry.can_draw());
    }

    #[test]
    fn add_returns_updated_list_in_order() {
        let mut registry = ParticipantRegistry::new();
        let _ = registry.add("Ana");
        let Ok(list) = registry.add("Beto") else {
            panic!("add failed");
        };
        let list: Vec<&str> = list.iter().map(ParticipantName::as_str).collect();
        assert_eq!(list, vec!["Ana", "Beto"]);
    }

    #[test]
    fn add_stores_trimmed_name() {
        let mut registry = ParticipantRegistry::new();
        assert!(registry.add("  Ana  ").is_ok());
        assert_eq!(names(&registry), vec!["Ana"]);
    }

    #[test]
    fn add_blank_fails_and_leaves_registry_unchanged() {
        let mut registry = filled(&["Ana"]);
        for blank in ["", "   ", "\t", "\n \r", "\u{FEFF}", " \u{3000}\u{FEFF} "] {
            assert!(matches!(registry.add(blank), Err(RegistryError::EmptyName)));
        }
        assert_eq!(names(&registry), vec!["Ana"]);
    }

    #[test]
    fn add_duplicate_ignoring_case_fails() {
        let mut registry = filled(&["Ana", "Beto"]);
        for dup in ["ana", "ANA", "  aNa ", "BETO"] {
            assert!(matches!(
                registry.add(dup),
                Err(RegistryError::DuplicateName(_))
            ));
        }
        assert_eq!(names(&registry), vec!["Ana", "Beto"]);
    }

    #[test]
    fn duplicate_error_names_the_existing_entry() {
        let mut registry = filled(&["Ana"]);
        let Err(RegistryError::DuplicateName(existing)) = registry.add("ANA") else {
            panic!("expected duplicate");
        };
        assert_eq!(existing, "Ana");
    }

    #[test]
    fn draw_below_minimum_fails_without_mutation() {
        let mut registry = ParticipantRegistry::new();
        assert!(matches!(
            registry.draw(),
            Err(RegistryError::InsufficientParticipants { count: 0 })
        ));

        let _ = registry.add("Ana");
        assert!(matches!(
            registry.draw(),
            Err(RegistryError::InsufficientParticipants { count: 1 })
        ));
        assert_eq!(names(&registry), vec!["Ana"]);
        assert_eq!(registry.phase(), Phase::Collecting);
    }

    #[test]
    fn draw_uses_injected_index() {
        let mut registry = scripted(vec![1]);
        let _ = registry.add("Ana");
        let _ = registry.add("Beto");
        let _ = registry.add("Carla");

        let Ok(winner) = registry.draw() else {
            panic!("draw failed");
        };
        assert_eq!(winner.as_str(), "Beto");
        assert_eq!(registry.phase(), Phase::Drawn);
        assert_eq!(registry.winner().map(ParticipantName::as_str), Some("Beto"));
    }

    #[test]
    fn draw_does_not_reorder() {
        let mut registry = filled(&["Ana", "Beto", "Carla", "Dario"]);
        for _ in 0..20 {
            let _ = registry.draw();
        }
        assert_eq!(names(&registry), vec!["Ana", "Beto", "Carla", "Dario"]);
    }

    #[test]
    fn draw_always_returns_member() {
        let mut registry = filled(&["Ana", "Beto", "Carla"]);
        for _ in 0..500 {
            let Ok(winner) = registry.draw() else {
                panic!("draw failed");
            };
            assert!(registry.participants().contains(&winner));
        }
    }

    #[test]
    fn draw_is_uniform_with_seeded_source() {
        let mut registry = ParticipantRegistry::with_random(Box::new(SeededRandom::new(2024)));
        let list = ["Ana", "Beto", "Carla", "Dario"];
        for name in list {
            let _ = registry.add(name);
        }

        let trials = 40_000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            let Ok(winner) = registry.draw() else {
                panic!("draw failed");
            };
            let Some(pos) = list.iter().position(|n| *n == winner.as_str()) else {
                panic!("winner not in list");
            };
            counts[pos] += 1;
        }

        for count in counts {
            let freq = count as f64 / f64::from(trials);
            assert!((freq - 0.25).abs() < 0.02, "frequency {freq} too far from 1/4");
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut registry = scripted(vec![5]);
        let _ = registry.add("Ana");
        let _ = registry.add("Beto");

        assert!(matches!(
            registry.draw(),
            Err(RegistryError::IndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(registry.phase(), Phase::Collecting);
    }

    #[test]
    fn redraw_replaces_winner() {
        let mut registry = scripted(vec![0, 1]);
        let _ = registry.add("Ana");
        let _ = registry.add("Beto");

        let _ = registry.draw();
        assert_eq!(registry.winner().map(ParticipantName::as_str), Some("Ana"));
        let _ = registry.draw();
        assert_eq!(registry.winner().map(ParticipantName::as_str), Some("Beto"));
    }

    #[test]
    fn add_after_draw_is_rejected() {
        let mut registry = filled(&["Ana", "Beto"]);
        let _ = registry.draw();
        assert!(matches!(
            registry.add("Carla"),
            Err(RegistryError::AlreadyDrawn)
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reset_clears_from_any_state() {
        let mut empty = ParticipantRegistry::new();
        empty.reset();
        assert!(empty.is_empty());

        let mut collecting = filled(&["Ana"]);
        collecting.reset();
        assert!(collecting.is_empty());
        assert_eq!(collecting.phase(), Phase::Collecting);

        let mut drawn = filled(&["Ana", "Beto"]);
        let _ = drawn.draw();
        drawn.reset();
        assert!(drawn.is_empty());
        assert!(drawn.winner().is_none());
        assert_eq!(drawn.phase(), Phase::Collecting);
    }

    #[test]
    fn reset_allows_reuse_of_names() {
        let mut registry = filled(&["Ana", "Beto"]);
        let _ = registry.draw();
        registry.reset();
        assert!(registry.add("ana").is_ok());
        assert_eq!(names(&registry), vec!["ana"]);
    }

    #[test]
    fn full_round_scenario() {
        let mut registry = scripted(vec![1]);
        assert!(registry.add("Ana").is_ok());
        assert!(registry.add("Beto").is_ok());
        assert!(matches!(
            registry.add("ana"),
            Err(RegistryError::DuplicateName(_))
        ));
        assert_eq!(names(&registry), vec!["Ana", "Beto"]);

        let Ok(winner) = registry.draw() else {
            panic!("draw failed");
        };
        assert_eq!(winner.as_str(), "Beto");

        registry.reset();
        assert!(registry.participants().is_empty());
    }

    #[test]
    fn snapshot_reflects_phase() {
        let mut registry = scripted(vec![0]);
        let _ = registry.add("Ana");
        let _ = registry.add("Beto");

        let before = registry.snapshot();
        assert_eq!(before.phase, Phase::Collecting);
        assert!(!before.reset_available);
        assert!(before.winner.is_none());

        let _ = registry.draw();
        let after = registry.snapshot();
        assert_eq!(after.phase, Phase::Drawn);
        assert!(after.reset_available);
        assert_eq!(after.winner.map(String::from).as_deref(), Some("Ana"));
        assert_eq!(after.participants.len(), 2);
    }
}
