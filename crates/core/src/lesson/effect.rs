use crate::model::{RequestId, Topic};

/// Work the runtime must perform on behalf of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GenerateArticle {
        request: RequestId,
        topic: Topic,
    },
    GenerateQuiz {
        request: RequestId,
        article_content: String,
    },
    TranslateWord {
        request: RequestId,
        word: String,
        context: String,
    },
}

impl Effect {
    #[must_use]
    pub fn request(&self) -> RequestId {
        match self {
            Self::GenerateArticle { request, .. }
            | Self::GenerateQuiz { request, .. }
            | Self::TranslateWord { request, .. } => *request,
        }
    }
}
