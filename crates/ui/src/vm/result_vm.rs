use lernpartner_core::model::QuizResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndScreenVm {
    pub score_label: String,
    pub percentage_label: String,
    pub message: &'static str,
}

#[must_use]
pub fn map_end_screen(result: QuizResult) -> EndScreenVm {
    EndScreenVm {
        score_label: format!("{} / {}", result.score(), result.total()),
        percentage_label: format!("({}%)", result.percentage()),
        message: result.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_score_and_percentage() {
        let vm = map_end_screen(QuizResult::new(4, 5));
        assert_eq!(vm.score_label, "4 / 5");
        assert_eq!(vm.percentage_label, "(80%)");
        assert_eq!(vm.message, "Sehr gut! Excellent work!");
    }
}
