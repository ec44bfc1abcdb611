//! Review prompt construction.

/// Phrase substituted for the trait list when the caller supplies none.
pub const EMPTY_TRAITS_FALLBACK: &str = "general great experience";

/// Build the instruction passed to the text provider.
///
/// Deterministic for a given input: the business name and the comma-joined
/// trait list (or the fallback phrase) are embedded verbatim, followed by the
/// configured highlight sentences when any are set.
pub fn build_review_prompt(name: &str, traits: &[String], highlights: &[String]) -> String {
    let themes = if traits.is_empty() {
        EMPTY_TRAITS_FALLBACK.to_string()
    } else {
        traits.join(", ")
    };

    let mut prompt = format!(
        "Write a positive, authentic-sounding review for a business named '{}'. \
         The review should be enthusiastic, around 60-70 words long, and \
         incorporate the following themes: {}. \
         Do not mention any specific product or menu items.",
        name, themes
    );

    if !highlights.is_empty() {
        prompt.push_str(&format!(
            " Paraphrase and include these sentences in the review naturally: {}.",
            highlights.join(" ")
        ));
    }

    prompt.push_str(
        " Introduce some common, natural-sounding spelling mistakes so it reads \
         like a real, casual user review. Keep the tone natural, personal and \
         informal. Do not use asterisks or emojis for decoration, use very \
         little punctuation, and at most one exclamation mark.",
    );

    prompt
}
