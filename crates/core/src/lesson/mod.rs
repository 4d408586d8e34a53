//! Lesson flow as a pure state machine.
//!
//! `transition` takes the current state and an event and returns the next
//! state plus at most one `Effect` for the runtime to execute. Completions of
//! effects come back in as events.

mod effect;
mod event;
mod library;
mod state;
mod transition;

pub use effect::Effect;
pub use event::LessonEvent;
pub use library::{Library, SavedArticle};
pub use state::{
    AnswerSelection, Finished, Lesson, LessonState, QuizSession, Reading, Screen, ScreenKind,
    TranslationPanel,
};
pub use transition::{Transition, transition};
