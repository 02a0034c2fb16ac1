//! Speech recognition capability seam.
//!
//! The core never recognizes speech itself. A host supplies a
//! [`SpeechRecognizer`], and transcript updates flow back as [`SpeechEvent`]s
//! that overwrite the current attempt.

use crate::error::{Result, SpeechError};
use crate::tokenizer::contains_cjk;
use std::sync::mpsc::{self, Receiver};

/// Callback receiving the full transcript so far.
pub type TranscriptCallback = Box<dyn FnMut(String) + Send>;

/// Callback receiving recognition errors.
pub type ErrorCallback = Box<dyn FnMut(SpeechError) + Send>;

/// A speech-to-text capability provided by the host.
pub trait SpeechRecognizer {
    /// Begin a continuous recognition session in the given locale.
    fn start(&mut self, locale: &str) -> Result<()>;

    /// End the current session.
    fn stop(&mut self);

    /// Register the transcript callback. Each call replaces the previous one.
    fn on_transcript(&mut self, callback: TranscriptCallback);

    /// Register the error callback. Each call replaces the previous one.
    fn on_error(&mut self, callback: ErrorCallback);
}

/// Update delivered by a running recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Full transcript so far. Replaces the attempt.
    Transcript(String),
    Error(SpeechError),
    /// Recognition finished. [`listen`] never produces this; hosts send it
    /// when their platform reports the end of a session.
    Ended,
}

/// Recognition locale for a passage.
pub fn recognition_locale(text: &str) -> &'static str {
    if contains_cjk(text) {
        "zh-TW"
    } else {
        "en-US"
    }
}

/// Join interim and final result segments into one transcript.
pub fn join_transcript<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().map(|s| s.as_ref()).collect()
}

/// Route a recognizer's callbacks into a channel the host can drain.
///
/// Only transcripts and errors arrive on the channel. The trait has no end
/// callback, so the host delivers [`SpeechEvent::Ended`] to the session itself.
pub fn listen(recognizer: &mut dyn SpeechRecognizer) -> Receiver<SpeechEvent> {
    let (tx, rx) = mpsc::channel();

    let transcript_tx = tx.clone();
    recognizer.on_transcript(Box::new(move |text| {
        // The receiver may already be gone; late updates are dropped.
        let _ = transcript_tx.send(SpeechEvent::Transcript(text));
    }));
    recognizer.on_error(Box::new(move |err| {
        let _ = tx.send(SpeechEvent::Error(err));
    }));

    rx
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRecognizer;
    use super::*;

    #[test]
    fn locale_follows_script() {
        assert_eq!(recognition_locale("慈母手中線"), "zh-TW");
        assert_eq!(recognition_locale("I have a dream"), "en-US");
        assert_eq!(recognition_locale(""), "en-US");
    }

    #[test]
    fn join_transcript_concatenates() {
        assert_eq!(join_transcript(&["I have ", "a dream"]), "I have a dream");
        assert_eq!(join_transcript::<&str>(&[]), "");
    }

    #[test]
    fn listen_forwards_events_in_order() {
        let mut recognizer = ScriptedRecognizer::default();
        let rx = listen(&mut recognizer);

        recognizer.emit_transcript("I have");
        recognizer.emit_transcript("I have a dream");
        recognizer.emit_error(SpeechError::Recognition("no-speech".to_string()));

        let events: Vec<SpeechEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                SpeechEvent::Transcript("I have".to_string()),
                SpeechEvent::Transcript("I have a dream".to_string()),
                SpeechEvent::Error(SpeechError::Recognition("no-speech".to_string())),
            ]
        );
    }

    #[test]
    fn listen_survives_dropped_receiver() {
        let mut recognizer = ScriptedRecognizer::default();
        drop(listen(&mut recognizer));
        recognizer.emit_transcript("late");
    }
}
