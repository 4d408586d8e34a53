use lernpartner_core::lesson::QuizSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// No answer given yet.
    Open,
    Correct,
    Incorrect,
    Disabled,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open => "quiz-option",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::Incorrect => "quiz-option quiz-option--incorrect",
            Self::Disabled => "quiz-option quiz-option--disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub progress_label: String,
    pub progress_percent: usize,
    pub question: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub explanation: Option<String>,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_quiz_card(session: &QuizSession) -> Option<QuizCardVm> {
    let question = session.current_question()?;
    let number = session.index + 1;
    let total = session.quiz.len();
    let selection = session.selection.as_ref();

    let options = question
        .options()
        .iter()
        .map(|option| {
            let state = match selection {
                None => OptionState::Open,
                Some(_) if question.is_correct(option) => OptionState::Correct,
                Some(selected) if selected.answer == *option => OptionState::Incorrect,
                Some(_) => OptionState::Disabled,
            };
            OptionVm {
                text: option.clone(),
                state,
            }
        })
        .collect();

    Some(QuizCardVm {
        progress_label: format!("Question {number} / {total}"),
        progress_percent: number * 100 / total.max(1),
        question: question.question().to_string(),
        options,
        answered: selection.is_some(),
        explanation: selection.map(|_| question.explanation().to_string()),
        next_label: if session.is_last_question() {
            "Finish Quiz"
        } else {
            "Next Question"
        },
    })
}

#[cfg(test)]
mod tests {
    use lernpartner_core::lesson::{AnswerSelection, Lesson};
    use lernpartner_core::model::{
        Article, GeneratedArticle, GeneratedImage, Quiz, QuizQuestion, Topic,
    };

    use super::*;

    fn session(index: usize, selection: Option<AnswerSelection>) -> QuizSession {
        let question = |word: &str| {
            QuizQuestion::new(
                word,
                vec!["house".into(), "tree".into(), "car".into(), "dog".into()],
                "house",
                "Das Haus.",
            )
            .unwrap()
        };
        let generated = GeneratedArticle {
            article: Article::new("Titel", "Inhalt").unwrap(),
            image: GeneratedImage::from_base64("/9j/4AAQ").unwrap(),
        };
        QuizSession {
            lesson: Lesson::new(Topic::new("Haus").unwrap(), generated),
            quiz: Quiz::new(vec![question("Haus"), question("Heim")]).unwrap(),
            index,
            score: 0,
            selection,
        }
    }

    fn states(vm: &QuizCardVm) -> Vec<OptionState> {
        vm.options.iter().map(|o| o.state).collect()
    }

    #[test]
    fn unanswered_question_has_open_options() {
        let vm = map_quiz_card(&session(0, None)).unwrap();
        assert_eq!(vm.progress_label, "Question 1 / 2");
        assert_eq!(vm.progress_percent, 50);
        assert_eq!(vm.question, "Haus");
        assert!(states(&vm).iter().all(|s| *s == OptionState::Open));
        assert_eq!(vm.explanation, None);
        assert_eq!(vm.next_label, "Next Question");
    }

    #[test]
    fn wrong_answer_marks_both_choices() {
        let vm = map_quiz_card(&session(
            1,
            Some(AnswerSelection {
                answer: "car".into(),
                correct: false,
            }),
        ))
        .unwrap();
        assert_eq!(
            states(&vm),
            vec![
                OptionState::Correct,
                OptionState::Disabled,
                OptionState::Incorrect,
                OptionState::Disabled,
            ]
        );
        assert_eq!(vm.explanation.as_deref(), Some("Das Haus."));
        assert_eq!(vm.next_label, "Finish Quiz");
    }
}
