//! Sidebar title typewriter.
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves to
//! the next phrase and loops forever. The session drives it off the timeline;
//! each `tick` returns the delay until the next one.

use std::time::Duration;

use crate::dom::{Document, Selector};
use crate::view::shell::TYPING_TITLE;

pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);
const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full phrase on screen; the next tick starts deleting.
    Pausing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    role: usize,
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    /// `None` when there is no non-empty phrase to type.
    pub fn new(roles: &[String]) -> Option<Self> {
        let roles: Vec<Vec<char>> = roles
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(|r| r.chars().collect())
            .collect();
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            role: 0,
            chars: 0,
            phase: Phase::Typing,
        })
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> String {
        self.roles[self.role][..self.chars].iter().collect()
    }

    /// Adds or removes one character and returns the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.roles[self.role].len();
        match self.phase {
            Phase::Typing => {
                self.chars = (self.chars + 1).min(len);
                if self.chars == len {
                    self.phase = Phase::Pausing;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Pausing | Phase::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.phase = Phase::Typing;
                    self.role = (self.role + 1) % self.roles.len();
                    NEXT_PHRASE_DELAY
                } else {
                    self.phase = Phase::Deleting;
                    DELETE_DELAY
                }
            }
        }
    }

    pub fn write(&self, doc: &mut Document) {
        if let Some(title) = doc.query_mut(&Selector::Id(TYPING_TITLE)) {
            title.set_text(self.text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_cycle_timings() {
        let mut tw = Typewriter::new(&roles(&["Hi", "Yo"])).unwrap();

        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.phase(), Phase::Pausing);

        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.tick(), NEXT_PHRASE_DELAY);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        tw.tick();
        assert_eq!(tw.text(), "Y");
    }

    #[test]
    fn test_wraps_back_to_first_phrase() {
        let mut tw = Typewriter::new(&roles(&["A"])).unwrap();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "A");
    }

    #[test]
    fn test_multibyte_phrases_advance_by_char() {
        let mut tw = Typewriter::new(&roles(&["Dév"])).unwrap();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "Dé");
    }

    #[test]
    fn test_empty_phrases_are_skipped() {
        assert!(Typewriter::new(&roles(&["", "  "])).is_none());
        let mut tw = Typewriter::new(&roles(&["", "Ok"])).unwrap();
        tw.tick();
        assert_eq!(tw.text(), "O");
    }
}
