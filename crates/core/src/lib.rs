#![forbid(unsafe_code)]

pub mod lesson;
pub mod model;
pub mod text;
pub mod time;

pub use lesson::{Effect, LessonEvent, LessonState, ScreenKind, Transition, transition};
pub use time::Clock;
