//! Typed form field state, indexed by question position.
//!
//! The render layer keeps one [`FieldValue`] per question and hands the
//! whole ordered list to the submit handler; answers are paired with
//! questions positionally, never looked up by element id.

use crate::catalog::{Question, QuestionKind};
use crate::models::{Answer, Answers};

/// The in-progress value of one form field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free text (single or multi line).
    Text(String),
    /// Radio group selection, if any.
    Choice(Option<String>),
    /// Checked options of a checkbox group, in check order.
    Multi(Vec<String>),
}

impl FieldValue {
    /// Add or remove one checkbox option. No-op on non-multi fields.
    pub fn set_option(&mut self, option: &str, selected: bool) {
        if let FieldValue::Multi(chosen) = self {
            if selected {
                if !chosen.iter().any(|c| c == option) {
                    chosen.push(option.to_string());
                }
            } else {
                chosen.retain(|c| c != option);
            }
        }
    }
}

/// Initial field state for a questionnaire.
pub fn blank_fields(questions: &[Question]) -> Vec<FieldValue> {
    questions
        .iter()
        .map(|q| match q.kind {
            QuestionKind::Text | QuestionKind::LongText => FieldValue::Text(String::new()),
            QuestionKind::SingleChoice => FieldValue::Choice(None),
            QuestionKind::MultipleChoice => FieldValue::Multi(Vec::new()),
        })
        .collect()
}

/// Pair fields with questions and build the answers mapping.
///
/// The result carries exactly one entry per question label. An
/// unanswered single-choice question yields an empty string, an
/// unanswered multiple-choice question an empty list.
pub fn collect_answers(questions: &[Question], fields: &[FieldValue]) -> Answers {
    questions
        .iter()
        .zip(fields)
        .map(|(question, field)| {
            let answer = match field {
                FieldValue::Text(text) => Answer::Text(text.clone()),
                FieldValue::Choice(choice) => Answer::Text(choice.clone().unwrap_or_default()),
                FieldValue::Multi(chosen) => Answer::Multi(chosen.clone()),
            };
            (question.label.to_string(), answer)
        })
        .collect()
}

/// Whether an answers mapping carries exactly one entry per question
/// label of the questionnaire, no more and no fewer.
///
/// [`collect_answers`] produces conforming maps by construction; this is
/// the check for maps that arrive over the wire.
pub fn answers_match_questions(questions: &[Question], answers: &Answers) -> bool {
    use std::collections::BTreeSet;

    let labels: BTreeSet<&str> = questions.iter().map(|q| q.label).collect();
    let keys: BTreeSet<&str> = answers.keys().map(String::as_str).collect();
    labels == keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions_for;
    use crate::models::Area;
    use std::collections::HashSet;

    #[test]
    fn test_blank_submission_covers_every_label_with_empty_answers() {
        for area in Area::ALL {
            let questions = questions_for(area);
            let answers = collect_answers(questions, &blank_fields(questions));

            let expected: HashSet<String> =
                questions.iter().map(|q| q.label.to_string()).collect();
            let actual: HashSet<String> = answers.keys().cloned().collect();
            assert_eq!(actual, expected);

            for (question, answer) in questions.iter().zip(questions.iter().map(|q| &answers[q.label])) {
                match question.kind {
                    QuestionKind::Text | QuestionKind::LongText | QuestionKind::SingleChoice => {
                        assert_eq!(answer, &Answer::Text(String::new()))
                    }
                    QuestionKind::MultipleChoice => {
                        assert_eq!(answer, &Answer::Multi(Vec::new()))
                    }
                }
            }
        }
    }

    #[test]
    fn test_filled_fields_map_to_their_question_labels() {
        let questions = questions_for(Area::Personal);
        let mut fields = blank_fields(questions);
        fields[0] = FieldValue::Text("Disciplina".to_string());
        fields[1].set_option("Leitura", true);
        fields[1].set_option("Meditação", true);

        let answers = collect_answers(questions, &fields);
        assert_eq!(
            answers["O que você busca melhorar pessoalmente?"],
            Answer::Text("Disciplina".to_string())
        );
        assert_eq!(
            answers["Quais hábitos você segue?"],
            Answer::Multi(vec!["Leitura".to_string(), "Meditação".to_string()])
        );
    }

    #[test]
    fn test_answer_keys_must_match_the_questionnaire_labels() {
        let questions = questions_for(Area::Student);
        let answers = collect_answers(questions, &blank_fields(questions));
        assert!(answers_match_questions(questions, &answers));

        // A key from another questionnaire fails the check.
        let mut renamed = answers.clone();
        let value = renamed.remove("Qual curso você faz?").unwrap();
        renamed.insert("Qual sua principal habilidade?".to_string(), value);
        assert!(!answers_match_questions(questions, &renamed));

        // A missing entry fails even when every present key is valid.
        let mut missing = answers.clone();
        missing.remove("Qual curso você faz?");
        assert!(!answers_match_questions(questions, &missing));

        // An extra entry on top of a full set fails too.
        let mut extra = answers;
        extra.insert("Pergunta inventada".to_string(), Answer::Text(String::new()));
        assert!(!answers_match_questions(questions, &extra));
    }

    #[test]
    fn test_set_option_is_idempotent_and_unchecking_removes() {
        let mut field = FieldValue::Multi(Vec::new());
        field.set_option("TI", true);
        field.set_option("TI", true);
        assert_eq!(field, FieldValue::Multi(vec!["TI".to_string()]));

        field.set_option("TI", false);
        assert_eq!(field, FieldValue::Multi(Vec::new()));
    }
}
