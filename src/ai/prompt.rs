// src/ai/prompt.rs

use rand::Rng;

/// Options every generated question must carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Builds the instruction sent to the model.
///
/// The example object places its correct answer at a random slot so the
/// model is not nudged towards always putting it first.
pub fn build_prompt(topic: &str, count: u32) -> String {
    let correct_slot = rand::thread_rng().gen_range(0..OPTIONS_PER_QUESTION);
    build_prompt_with_slot(topic, count, correct_slot)
}

fn build_prompt_with_slot(topic: &str, count: u32, correct_slot: usize) -> String {
    let labels = ["Option A", "Option B", "Option C", "Option D"];
    let example_options = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            format!(
                r#"        {{ "id": "random UUID", "content": "{}", "is_correct": {} }}"#,
                label,
                i == correct_slot
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"You are a quiz expert. Write {count} single-choice questions about the topic "{topic}".

Requirements:
1. Every question must have exactly {OPTIONS_PER_QUESTION} options.
2. Exactly one option is correct, and its position must be random among the {OPTIONS_PER_QUESTION} options.
3. Reply with pure JSON only. Do not wrap it in Markdown.

JSON structure example:
[
  {{
    "id": "random UUID",
    "content": "Question text",
    "options": [
{example_options}
    ]
  }}
]"#
    )
}
