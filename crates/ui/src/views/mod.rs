mod article;
mod finished;
mod lesson;
mod library;
mod loading;
mod quiz;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use article::ArticleView;
pub use finished::EndView;
pub use lesson::LessonView;
pub use library::DashboardView;
pub use loading::LoadingView;
pub use quiz::QuizView;
pub use topic::TopicView;
