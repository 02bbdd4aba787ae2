//! Parsing of model output into quiz questions.
//!
//! Model completions are untrusted: they may be wrapped in markdown fences,
//! omit fields, or encode booleans as numbers. Malformed entries are dropped
//! one by one; only a batch with nothing usable left is an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use crate::error::QuizError;
use crate::models::{AiOption, AiQuestion, Question};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)\s*```\s*$").expect("valid fence regex")
});

/// Removes a surrounding ```` ```json ... ``` ```` (or bare ```` ``` ````) wrapper.
/// Text without a fence is returned trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    match CODE_FENCE.captures(raw).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => raw.trim(),
    }
}

/// Parses a model completion into questions.
///
/// * Elements without a UUID `id`, a string `content` or an `options` array are skipped.
/// * Options without `id`, `content` or `is_correct` are skipped individually.
/// * Fails with [`QuizError::Generation`] when nothing survives.
pub fn parse_ai_questions(raw: &str) -> Result<Vec<Question>, QuizError> {
    let body = strip_code_fences(raw);
    if body.is_empty() {
        return Err(QuizError::Generation("empty response".to_string()));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|_| QuizError::Generation("malformed JSON".to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            // The generation function reports its own failures as `{ "error": "..." }`.
            if let Some(message) = other.get("error").and_then(Value::as_str) {
                return Err(QuizError::Generation(message.to_string()));
            }
            return Err(QuizError::Generation("malformed JSON".to_string()));
        }
    };

    let total = items.len();
    let questions: Vec<Question> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| parse_question(index, item))
        .map(Question::from)
        .collect();

    if questions.is_empty() {
        tracing::warn!(received = total, "AI response held no usable questions");
        return Err(QuizError::Generation("no usable questions".to_string()));
    }

    tracing::debug!(
        received = total,
        kept = questions.len(),
        "parsed AI-generated questions"
    );
    Ok(questions)
}

fn parse_question(index: usize, item: &Value) -> Option<AiQuestion> {
    let id = item.get("id").and_then(parse_uuid);
    let content = item.get("content").and_then(Value::as_str);
    let options = item.get("options").and_then(Value::as_array);

    let (Some(id), Some(content), Some(options)) = (id, content, options) else {
        tracing::warn!(index, "dropping AI question with missing id, content or options");
        return None;
    };

    let options = options
        .iter()
        .enumerate()
        .filter_map(|(opt_index, opt)| {
            let parsed = parse_option(opt);
            if parsed.is_none() {
                tracing::warn!(index, option = opt_index, "dropping malformed AI option");
            }
            parsed
        })
        .collect();

    Some(AiQuestion {
        id,
        content: content.to_string(),
        options,
    })
}

fn parse_option(item: &Value) -> Option<AiOption> {
    let id = item.get("id").and_then(parse_uuid)?;
    let content = item.get("content").and_then(Value::as_str)?;
    let is_correct = item.get("is_correct").filter(|v| !v.is_null())?;

    Some(AiOption {
        id,
        content: content.to_string(),
        is_correct: normalize_correctness(is_correct),
    })
}

fn parse_uuid(value: &Value) -> Option<Uuid> {
    value.as_str().and_then(|s| Uuid::parse_str(s.trim()).ok())
}

/// `true`/`false` as-is, integer `1` is true, other numbers are true when non-zero.
/// Anything else counts as not correct.
fn normalize_correctness(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i == 1
            } else if n.is_u64() {
                false
            } else {
                n.as_f64().is_some_and(|f| f != 0.0)
            }
        }
        _ => false,
    }
}
