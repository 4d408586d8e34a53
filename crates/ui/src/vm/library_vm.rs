use lernpartner_core::lesson::Library;
use lernpartner_core::model::ArticleId;

use super::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleCardVm {
    pub id: ArticleId,
    pub title: String,
    pub topic: String,
    pub created: String,
    pub image_src: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryVm {
    pub cards: Vec<ArticleCardVm>,
}

impl LibraryVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[must_use]
pub fn map_library(library: &Library) -> LibraryVm {
    let cards = library
        .iter()
        .map(|saved| ArticleCardVm {
            id: saved.id,
            title: saved.lesson.article.title().to_string(),
            topic: saved.lesson.topic.to_string(),
            created: format_date(saved.created_at),
            image_src: saved.lesson.image.data_url(),
        })
        .collect();
    LibraryVm { cards }
}

#[cfg(test)]
mod tests {
    use lernpartner_core::lesson::{LessonEvent, LessonState, transition};
    use lernpartner_core::model::{Article, GeneratedArticle, GeneratedImage};
    use lernpartner_core::time::fixed_now;

    use super::*;

    fn with_article(state: &LessonState, topic: &str, title: &str) -> LessonState {
        let submitted = transition(state, LessonEvent::SubmitTopic(topic.into()));
        let request = submitted.effect.unwrap().request();
        let reading = transition(
            &submitted.state,
            LessonEvent::ArticleGenerated {
                request,
                generated: GeneratedArticle {
                    article: Article::new(title, "Ein kurzer Text.").unwrap(),
                    image: GeneratedImage::from_base64("/9j/4AAQ").unwrap(),
                },
                created_at: fixed_now(),
            },
        )
        .state;
        transition(&reading, LessonEvent::BackToTopics).state
    }

    #[test]
    fn empty_library_has_no_cards() {
        assert!(map_library(LessonState::new().library()).is_empty());
    }

    #[test]
    fn cards_follow_library_order() {
        let state = with_article(&LessonState::new(), "Die Alpen", "Hoch in den Alpen");
        let state = with_article(&state, "Berlin", "Berlin bei Nacht");

        let vm = map_library(state.library());
        let titles: Vec<&str> = vm.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Berlin bei Nacht", "Hoch in den Alpen"]);

        let card = &vm.cards[1];
        assert_eq!(card.topic, "Die Alpen");
        assert_eq!(card.created, "14.11.2023");
        assert_eq!(card.image_src, "data:image/jpeg;base64,/9j/4AAQ");
    }
}
