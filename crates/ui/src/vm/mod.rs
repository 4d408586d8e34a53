mod article_vm;
mod library_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use article_vm::{ArticleVm, TooltipVm, WordVm, map_article};
pub use library_vm::{ArticleCardVm, LibraryVm, map_library};
pub use quiz_vm::{OptionState, OptionVm, QuizCardVm, map_quiz_card};
pub use result_vm::{EndScreenVm, map_end_screen};
