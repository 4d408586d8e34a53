use lernpartner_core::lesson::{Reading, TranslationPanel};
use lernpartner_core::text::{clean_word, segment_words};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordVm {
    pub text: String,
    pub clickable: bool,
    /// Set while this word's translation is loading.
    pub pending: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipVm {
    Translation {
        word: String,
        translation: String,
        explanation: String,
    },
    Failure {
        word: String,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleVm {
    pub title: String,
    pub image_src: String,
    pub words: Vec<WordVm>,
    pub tooltip: Option<TooltipVm>,
    pub translating: bool,
    pub error: Option<String>,
}

#[must_use]
pub fn map_article(reading: &Reading) -> ArticleVm {
    let lesson = &reading.lesson;
    let pending = reading.translation.pending_word();
    let words = segment_words(lesson.article.content())
        .into_iter()
        .map(|segment| {
            let clickable = segment.is_word();
            let is_pending =
                clickable && pending.is_some() && clean_word(&segment.text).as_deref() == pending;
            WordVm {
                text: segment.text,
                clickable,
                pending: is_pending,
            }
        })
        .collect();

    let tooltip = match &reading.translation {
        TranslationPanel::Shown { word, translation } => Some(TooltipVm::Translation {
            word: word.clone(),
            translation: translation.translation().to_string(),
            explanation: translation.explanation().to_string(),
        }),
        TranslationPanel::Failed { word, message } => Some(TooltipVm::Failure {
            word: word.clone(),
            message: message.clone(),
        }),
        TranslationPanel::Closed | TranslationPanel::Pending { .. } => None,
    };

    ArticleVm {
        title: lesson.article.title().to_string(),
        image_src: lesson.image.data_url(),
        words,
        tooltip,
        translating: reading.translation.is_pending(),
        error: reading.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use lernpartner_core::lesson::Lesson;
    use lernpartner_core::model::{
        Article, GeneratedArticle, GeneratedImage, RequestId, Topic, WordTranslation,
    };

    use super::*;

    fn reading(translation: TranslationPanel) -> Reading {
        let generated = GeneratedArticle {
            article: Article::new("Die Alpen", "Viele Häuser. Hohe Berge.").unwrap(),
            image: GeneratedImage::from_base64("/9j/4AAQ").unwrap(),
        };
        Reading {
            lesson: Lesson::new(Topic::new("Die Alpen").unwrap(), generated),
            error: None,
            translation,
        }
    }

    #[test]
    fn words_are_clickable_but_gaps_are_not() {
        let vm = map_article(&reading(TranslationPanel::Closed));
        let clickable: Vec<_> = vm
            .words
            .iter()
            .filter(|w| w.clickable)
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(clickable, vec!["Viele", "Häuser", "Hohe", "Berge"]);
        assert!(vm.image_src.starts_with("data:image/jpeg;base64,"));
        assert!(vm.tooltip.is_none());
    }

    #[test]
    fn pending_word_is_marked() {
        let vm = map_article(&reading(TranslationPanel::Pending {
            word: "Häuser".into(),
            request: RequestId::new(3),
        }));
        assert!(vm.translating);
        let pending: Vec<_> = vm.words.iter().filter(|w| w.pending).collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].text, "Häuser");
    }

    #[test]
    fn shown_translation_becomes_tooltip() {
        let vm = map_article(&reading(TranslationPanel::Shown {
            word: "Berge".into(),
            translation: WordTranslation::new("mountains", "Plural of Berg.").unwrap(),
        }));
        assert_eq!(
            vm.tooltip,
            Some(TooltipVm::Translation {
                word: "Berge".into(),
                translation: "mountains".into(),
                explanation: "Plural of Berg.".into(),
            })
        );
        assert!(!vm.translating);
    }
}
