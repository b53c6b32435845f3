//! Consultation - outcomes, transcripts and reports of a multi-round run.
//!
//! A consultation is a sequence of rounds. Each round asks every
//! participant once and yields a [`RoundResult`]; successful answers are
//! folded into a [`Transcript`] that feeds the next round's prompt. The
//! finished run is a [`ConsultationReport`].

pub mod outcome;
pub mod transcript;
pub mod value_objects;

pub use outcome::InvocationOutcome;
pub use transcript::{Transcript, TranscriptEntry};
pub use value_objects::{ConsultationReport, ParticipantOutcome, RoundResult};
