//! Prompt text for each generation request.

use lernpartner_core::model::Topic;

#[must_use]
pub fn article(topic: &Topic) -> String {
    format!(
        "You are a German author writing for intermediate language learners. \
         Write a short, engaging article (around 150-200 words) about the topic: \"{topic}\". \
         The article should have a title. Return it as JSON."
    )
}

#[must_use]
pub fn image(topic: &Topic) -> String {
    format!(
        "A vibrant, digital art style illustration about {topic}. \
         Clean, simple, and focused on the main subject."
    )
}

#[must_use]
pub fn quiz(article_content: &str, question_count: usize) -> String {
    format!(
        "You are an expert German language tutor. Based on the following German article, \
         create {question_count} multiple-choice quiz questions focusing on important or tricky \
         vocabulary. For each question, provide the German word from the article, four plausible \
         but distinct English options, the correct English translation (copied exactly from the \
         options), and a brief explanation. Article: \"{article_content}\". \
         Return the data in a valid JSON array."
    )
}

#[must_use]
pub fn translation(word: &str, context: &str) -> String {
    format!(
        "Provide a simple English translation and a one-sentence explanation for the German \
         word \"{word}\". The word appears in the context of the following article: \
         \"{context}\". Return as JSON."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_their_inputs() {
        let topic = Topic::new("Die Alpen").unwrap();
        assert!(article(&topic).contains("\"Die Alpen\""));
        assert!(image(&topic).contains("about Die Alpen."));
        assert!(quiz("Text", 5).contains("create 5 multiple-choice"));
        let prompt = translation("Häuser", "Die Häuser sind alt.");
        assert!(prompt.contains("\"Häuser\""));
        assert!(prompt.contains("Die Häuser sind alt."));
    }
}
