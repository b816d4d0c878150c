//! Type/pause/delete state machine behind the hero tagline.
//!
//! DESIGN
//! ======
//! The machine only advances when `step` is called and reports how long the
//! caller should wait before the next call, so the timing source stays in
//! the component and the sequencing is testable without a browser.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    /// Hold time once a word is fully typed.
    pub pause: Duration,
    /// Full passes over the word list; `None` loops forever.
    pub loops: Option<u32>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(80),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(1400),
            loops: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
    Finished,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<&'static str>,
    config: TypewriterConfig,
    word_index: usize,
    shown_chars: usize,
    phase: Phase,
    completed_loops: u32,
}

impl Typewriter {
    pub fn new(words: &[&'static str], config: TypewriterConfig) -> Self {
        let phase = if words.is_empty() || config.loops == Some(0) { Phase::Finished } else { Phase::Typing };
        Self { words: words.to_vec(), config, word_index: 0, shown_chars: 0, phase, completed_loops: 0 }
    }

    /// Currently displayed prefix of the active word.
    pub fn text(&self) -> &'static str {
        let Some(word) = self.words.get(self.word_index).copied() else {
            return "";
        };
        let end = word
            .char_indices()
            .nth(self.shown_chars)
            .map_or(word.len(), |(idx, _)| idx);
        &word[..end]
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Delay before the first `step`.
    pub fn initial_delay(&self) -> Duration {
        self.config.type_speed
    }

    /// Advance one tick. Returns the delay until the next tick, or `None`
    /// once the configured loops are exhausted.
    pub fn step(&mut self) -> Option<Duration> {
        let word_len = self.words.get(self.word_index)?.chars().count();
        match self.phase {
            Phase::Finished => None,
            Phase::Typing => {
                self.shown_chars = (self.shown_chars + 1).min(word_len);
                if self.shown_chars < word_len {
                    return Some(self.config.type_speed);
                }
                if self.is_last_word_of_last_loop() {
                    self.phase = Phase::Finished;
                    return None;
                }
                self.phase = Phase::Pausing;
                Some(self.config.pause)
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.delete_one()
            }
            Phase::Deleting => self.delete_one(),
        }
    }

    fn delete_one(&mut self) -> Option<Duration> {
        self.shown_chars = self.shown_chars.saturating_sub(1);
        if self.shown_chars > 0 {
            return Some(self.config.delete_speed);
        }
        self.word_index += 1;
        if self.word_index >= self.words.len() {
            self.word_index = 0;
            self.completed_loops += 1;
        }
        self.phase = Phase::Typing;
        Some(self.config.type_speed)
    }

    fn is_last_word_of_last_loop(&self) -> bool {
        match self.config.loops {
            Some(loops) => self.word_index + 1 == self.words.len() && self.completed_loops + 1 >= loops,
            None => false,
        }
    }
}
