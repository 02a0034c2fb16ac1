//! Practice session state for a host UI.
//!
//! A [`Session`] is a snapshot of what the learner is working on. Every
//! transition is an explicit method call; derived values such as tokens and
//! visibility are recomputed from the snapshot rather than observed.

use crate::error::{Result, SpeechError};
use crate::matching::score;
use crate::speech::{recognition_locale, SpeechEvent, SpeechRecognizer};
use crate::tokenizer::tokenize;
use crate::types::{DisplayMode, MatchPolicy, ScoreResult, Token, Visibility};
use crate::visibility::{mask_text, resolve_all, resolve_visibility, snap_intensity};
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    tokens: Vec<Token>,
    mode: DisplayMode,
    intensity: u8,
    policy: MatchPolicy,
    attempt: String,
    result: Option<ScoreResult>,
    listening: bool,
}

impl Session {
    pub fn new(text: impl Into<String>, policy: MatchPolicy) -> Self {
        let mut session = Self::default();
        session.load(text, policy);
        session
    }

    /// Load a new passage, resetting mode, intensity, attempt and result.
    pub fn load(&mut self, text: impl Into<String>, policy: MatchPolicy) {
        self.set_text(text);
        self.policy = policy;
        self.mode = DisplayMode::Study;
        self.intensity = 0;
        self.attempt.clear();
    }

    /// Replace the passage text, keeping mode and attempt.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.tokens = tokenize(&self.text);
        self.result = None;
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Set the blur intensity, snapped to the slider step.
    pub fn set_intensity(&mut self, value: i32) {
        self.intensity = snap_intensity(value);
    }

    pub fn set_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    pub fn set_attempt(&mut self, attempt: impl Into<String>) {
        self.attempt = attempt.into();
    }

    /// Reset the attempt and drop the last result.
    pub fn clear_attempt(&mut self) {
        self.attempt.clear();
        self.result = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    /// Result of the last check, if the text has not changed since.
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn visibility(&self, index: usize) -> Visibility {
        resolve_visibility(&self.tokens, index, self.mode, self.intensity)
    }

    pub fn visibilities(&self) -> Vec<Visibility> {
        resolve_all(&self.tokens, self.mode, self.intensity)
    }

    pub fn masked_text(&self, placeholder: char) -> String {
        mask_text(&self.tokens, self.mode, self.intensity, placeholder)
    }

    /// Score the current attempt, replacing any previous result.
    pub fn check(&mut self) -> &ScoreResult {
        self.result
            .insert(score(&self.text, &self.attempt, self.policy))
    }

    /// Start or stop listening on the host's recognizer.
    ///
    /// Returns whether the session is listening afterwards. Without a
    /// recognizer this reports [`SpeechError::Unavailable`].
    pub fn toggle_listening(
        &mut self,
        recognizer: Option<&mut dyn SpeechRecognizer>,
    ) -> Result<bool> {
        let recognizer = recognizer.ok_or(SpeechError::Unavailable)?;

        if self.listening {
            recognizer.stop();
            self.listening = false;
        } else {
            recognizer.start(recognition_locale(&self.text))?;
            self.listening = true;
            self.result = None;
        }

        Ok(self.listening)
    }

    /// Apply one recognizer update. The latest transcript wins.
    pub fn handle_speech(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Transcript(text) => self.attempt = text,
            SpeechEvent::Error(_) | SpeechEvent::Ended => self.listening = false,
        }
    }

    /// Drain all pending recognizer updates. Returns how many were applied.
    pub fn pump(&mut self, events: &Receiver<SpeechEvent>) -> usize {
        let mut applied = 0;
        for event in events.try_iter() {
            self.handle_speech(event);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::listen;
    use crate::speech::testing::ScriptedRecognizer;
    use crate::types::Tier;

    #[test]
    fn new_session_starts_in_study() {
        let session = Session::new("慈母手中線", MatchPolicy::Strict);
        assert_eq!(session.mode(), DisplayMode::Study);
        assert_eq!(session.intensity(), 0);
        assert_eq!(session.tokens().len(), 5);
        assert!(session.result().is_none());
    }

    #[test]
    fn check_replaces_previous_result() {
        let mut session = Session::new("愛你", MatchPolicy::Strict);
        session.set_attempt("愛");
        assert_eq!(session.check().percentage, 50);

        session.set_attempt("愛你");
        assert_eq!(session.check().tier, Tier::Perfect);
        assert_eq!(session.result().map(|r| r.percentage), Some(100));
    }

    #[test]
    fn clear_attempt_drops_result() {
        let mut session = Session::new("愛你", MatchPolicy::Strict);
        session.set_mode(DisplayMode::Test);
        session.set_attempt("愛");
        session.check();

        session.clear_attempt();
        assert_eq!(session.attempt(), "");
        assert!(session.result().is_none());
        assert_eq!(session.mode(), DisplayMode::Test);
        assert_eq!(session.text(), "愛你");
    }

    #[test]
    fn text_change_clears_result() {
        let mut session = Session::new("the cat sat", MatchPolicy::Fuzzy);
        session.set_attempt("the cat sat");
        session.check();

        session.set_text("a new passage");
        assert!(session.result().is_none());
        assert_eq!(session.attempt(), "the cat sat");
    }

    #[test]
    fn load_resets_learning_state() {
        let mut session = Session::new("甲乙", MatchPolicy::Strict);
        session.set_mode(DisplayMode::Blur);
        session.set_intensity(60);
        session.set_attempt("甲");
        session.check();

        session.load("I have a dream", MatchPolicy::Fuzzy);
        assert_eq!(session.mode(), DisplayMode::Study);
        assert_eq!(session.intensity(), 0);
        assert_eq!(session.attempt(), "");
        assert_eq!(session.policy(), MatchPolicy::Fuzzy);
        assert!(session.result().is_none());
    }

    #[test]
    fn intensity_is_snapped() {
        let mut session = Session::new("甲", MatchPolicy::Strict);
        session.set_intensity(73);
        assert_eq!(session.intensity(), 75);
        session.set_intensity(500);
        assert_eq!(session.intensity(), 100);
    }

    #[test]
    fn visibility_follows_mode() {
        let mut session = Session::new("甲乙。丙丁", MatchPolicy::Strict);
        session.set_mode(DisplayMode::Initials);
        assert_eq!(session.visibility(1), Visibility::Hidden);
        assert_eq!(session.masked_text('_'), "甲_。丙_");

        session.set_mode(DisplayMode::Study);
        assert!(session
            .visibilities()
            .iter()
            .all(|v| *v == Visibility::Visible));
    }

    #[test]
    fn listening_without_capability_is_unavailable() {
        let mut session = Session::new("甲", MatchPolicy::Strict);
        assert_eq!(
            session.toggle_listening(None),
            Err(SpeechError::Unavailable)
        );
        assert!(!session.is_listening());
    }

    #[test]
    fn toggle_listening_uses_passage_locale() {
        let mut session = Session::new("慈母手中線", MatchPolicy::Strict);
        session.set_attempt("慈母");
        session.check();

        let mut recognizer = ScriptedRecognizer::default();
        assert_eq!(session.toggle_listening(Some(&mut recognizer)), Ok(true));
        assert_eq!(recognizer.started_with.as_deref(), Some("zh-TW"));
        assert!(session.result().is_none());

        assert_eq!(session.toggle_listening(Some(&mut recognizer)), Ok(false));
        assert!(recognizer.stopped);
    }

    #[test]
    fn failed_start_keeps_session_idle() {
        let mut session = Session::new("I have a dream", MatchPolicy::Fuzzy);
        let mut recognizer =
            ScriptedRecognizer::failing(SpeechError::Recognition("not-allowed".to_string()));
        assert!(session.toggle_listening(Some(&mut recognizer)).is_err());
        assert!(!session.is_listening());
    }

    #[test]
    fn transcripts_overwrite_attempt() {
        let mut session = Session::new("I have a dream", MatchPolicy::Fuzzy);
        let mut recognizer = ScriptedRecognizer::default();
        let events = listen(&mut recognizer);
        session.toggle_listening(Some(&mut recognizer)).unwrap();

        recognizer.emit_transcript("I have");
        recognizer.emit_transcript("I have a dream");
        assert_eq!(session.pump(&events), 2);
        assert_eq!(session.attempt(), "I have a dream");
        assert_eq!(session.check().tier, Tier::Perfect);
    }

    #[test]
    fn recognition_error_stops_listening() {
        let mut session = Session::new("I have a dream", MatchPolicy::Fuzzy);
        let mut recognizer = ScriptedRecognizer::default();
        let events = listen(&mut recognizer);
        session.toggle_listening(Some(&mut recognizer)).unwrap();

        recognizer.emit_error(SpeechError::Recognition("network".to_string()));
        session.pump(&events);
        assert!(!session.is_listening());

        session.toggle_listening(Some(&mut recognizer)).unwrap();
        session.handle_speech(SpeechEvent::Ended);
        assert!(!session.is_listening());
    }
}
