mod article;
mod ids;
mod quiz;
mod result;
mod topic;
mod translation;

pub use article::{Article, ArticleError, GeneratedArticle, GeneratedImage, ImageError};
pub use ids::{ArticleId, RequestId};
pub use quiz::{OPTION_COUNT, Quiz, QuizError, QuizQuestion};
pub use result::QuizResult;
pub use topic::{Topic, TopicError};
pub use translation::{TranslationError, WordTranslation};
