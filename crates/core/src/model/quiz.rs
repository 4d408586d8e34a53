use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// A vocabulary question: one source word, four candidate translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

impl QuizQuestion {
    /// Validate a generated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the word is blank, the option count is not
    /// `OPTION_COUNT`, an option is blank, or the correct answer is not one of
    /// the options.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let question = question.into().trim().to_string();
        if question.is_empty() {
            return Err(QuizError::MissingWord);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuizError::OptionCount {
                word: question,
                found: options.len(),
            });
        }
        let options: Vec<String> = options.into_iter().map(|o| o.trim().to_string()).collect();
        if options.iter().any(String::is_empty) {
            return Err(QuizError::BlankOption { word: question });
        }
        let correct_answer = correct_answer.into().trim().to_string();
        if !options.contains(&correct_answer) {
            return Err(QuizError::AnswerNotInOptions {
                word: question,
                answer: correct_answer,
            });
        }

        Ok(Self {
            question,
            options,
            correct_answer,
            explanation: explanation.into().trim().to_string(),
        })
    }

    /// The word being quizzed.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Ordered, non-empty list of questions generated for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` when no questions are given.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,
    #[error("quiz question is missing its word")]
    MissingWord,
    #[error("question for {word:?} has {found} options, expected 4")]
    OptionCount { word: String, found: usize },
    #[error("question for {word:?} has a blank option")]
    BlankOption { word: String },
    #[error("correct answer {answer:?} for {word:?} is not among the options")]
    AnswerNotInOptions { word: String, answer: String },
}
