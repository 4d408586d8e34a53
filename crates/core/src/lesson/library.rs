use chrono::{DateTime, Utc};

use crate::model::ArticleId;

use super::state::Lesson;

/// A generated lesson kept for rereading during the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArticle {
    pub id: ArticleId,
    pub lesson: Lesson,
    pub created_at: DateTime<Utc>,
}

/// Articles generated in this session, newest first.
///
/// Lives only as long as the `LessonState` holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    articles: Vec<SavedArticle>,
    next_id: ArticleId,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            next_id: ArticleId::new(1),
        }
    }

    /// Store `lesson` at the front and return its id.
    pub(crate) fn add(&mut self, lesson: Lesson, created_at: DateTime<Utc>) -> ArticleId {
        let id = self.next_id;
        self.next_id = id.next();
        self.articles.insert(
            0,
            SavedArticle {
                id,
                lesson,
                created_at,
            },
        );
        id
    }

    /// Remove the article with `id`. Returns false if it was not stored.
    pub(crate) fn remove(&mut self, id: ArticleId) -> bool {
        let before = self.articles.len();
        self.articles.retain(|saved| saved.id != id);
        self.articles.len() != before
    }

    #[must_use]
    pub fn get(&self, id: ArticleId) -> Option<&SavedArticle> {
        self.articles.iter().find(|saved| saved.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedArticle> {
        self.articles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
