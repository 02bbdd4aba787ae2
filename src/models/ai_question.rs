// src/models/ai_question.rs

use uuid::Uuid;

use super::question::{AnswerOption, Question};

/// A question as recovered from a model completion, before it is lifted
/// into the regular [`Question`] shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AiQuestion {
    pub id: Uuid,
    pub content: String,
    pub options: Vec<AiOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiOption {
    pub id: Uuid,
    pub content: String,
    pub is_correct: bool,
}

/// Back-fills `question_id` on every option from the parent.
/// Author and timestamps stay empty until something persists the question.
impl From<AiQuestion> for Question {
    fn from(ai: AiQuestion) -> Self {
        let question_id = ai.id;
        let options = ai
            .options
            .into_iter()
            .map(|opt| AnswerOption {
                id: opt.id,
                question_id,
                content: opt.content,
                is_correct: opt.is_correct,
                created_at: None,
            })
            .collect();

        Question {
            id: question_id,
            author_id: None,
            content: ai.content,
            created_at: None,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifting_links_options_to_parent() {
        let ai = AiQuestion {
            id: Uuid::new_v4(),
            content: "Why do cats knock cups off tables?".to_string(),
            options: vec![
                AiOption {
                    id: Uuid::new_v4(),
                    content: "Gravity research".to_string(),
                    is_correct: true,
                },
                AiOption {
                    id: Uuid::new_v4(),
                    content: "Accident".to_string(),
                    is_correct: false,
                },
            ],
        };
        let expected_id = ai.id;

        let question = Question::from(ai);

        assert_eq!(question.id, expected_id);
        assert!(question.author_id.is_none());
        assert!(question.created_at.is_none());
        assert!(question.options.iter().all(|o| o.question_id == expected_id));
        assert!(question.options.iter().all(|o| o.created_at.is_none()));
    }
}
