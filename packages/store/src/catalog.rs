//! # Form catalog — the fixed questionnaire for each area
//!
//! Static mapping from [`Area`] to an ordered list of [`Question`]s.
//! Areas and questionnaires are compiled in; nothing here changes at
//! runtime. Labels are unique within an area, and a submitted response's
//! answer keys are exactly these labels (see [`crate::forms`]).

use crate::error::UnknownAreaError;
use crate::models::Area;

/// How a question is rendered and answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    LongText,
    /// Radio group; answer is one of `options` or empty.
    SingleChoice,
    /// Checkbox group; answer is a subset of `options`.
    MultipleChoice,
}

/// One question in a questionnaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub label: &'static str,
    /// Present only for the choice kinds.
    pub options: &'static [&'static str],
}

const fn text(label: &'static str) -> Question {
    Question {
        kind: QuestionKind::Text,
        label,
        options: &[],
    }
}

const fn single(label: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        kind: QuestionKind::SingleChoice,
        label,
        options,
    }
}

const fn multi(label: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        kind: QuestionKind::MultipleChoice,
        label,
        options,
    }
}

static STUDENT: [Question; 2] = [
    text("Qual curso você faz?"),
    single("Você utiliza ferramentas online?", &["Sim", "Não"]),
];

static PERSONAL: [Question; 2] = [
    text("O que você busca melhorar pessoalmente?"),
    multi("Quais hábitos você segue?", &["Leitura", "Exercícios", "Meditação"]),
];

static CREATOR: [Question; 2] = [
    text("Qual tipo de conteúdo você produz?"),
    single("Você monetiza seu conteúdo?", &["Sim", "Não"]),
];

static BUSINESS: [Question; 2] = [
    text("Qual o tamanho da sua empresa?"),
    multi("Quais áreas deseja otimizar?", &["Marketing", "Vendas", "TI"]),
];

static SMALL_BUSINESS: [Question; 2] = [
    text("Qual segmento da empresa?"),
    single("Você utiliza automações?", &["Sim", "Não"]),
];

static FREELANCER: [Question; 2] = [
    text("Qual sua principal habilidade?"),
    single("Você trabalha sozinho ou em equipe?", &["Sozinho", "Equipe"]),
];

/// The questionnaire for an area, in display order.
pub fn questions_for(area: Area) -> &'static [Question] {
    match area {
        Area::Student => &STUDENT,
        Area::Personal => &PERSONAL,
        Area::Creator => &CREATOR,
        Area::Business => &BUSINESS,
        Area::SmallBusiness => &SMALL_BUSINESS,
        Area::Freelancer => &FREELANCER,
    }
}

/// Questionnaire lookup for a raw tag read back from storage.
///
/// The enumerated selector makes an unknown tag unreachable through the
/// UI; this path exists for stored documents whose tag no longer matches
/// the catalog.
pub fn questions_for_tag(tag: &str) -> Result<&'static [Question], UnknownAreaError> {
    Area::from_tag(tag)
        .map(questions_for)
        .ok_or_else(|| UnknownAreaError {
            tag: tag.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_area_has_a_nonempty_questionnaire_with_unique_labels() {
        for area in Area::ALL {
            let questions = questions_for(area);
            assert!(!questions.is_empty(), "{} has no questions", area.tag());

            let labels: HashSet<&str> = questions.iter().map(|q| q.label).collect();
            assert_eq!(labels.len(), questions.len(), "{} repeats a label", area.tag());
        }
    }

    #[test]
    fn test_choice_questions_carry_options_and_text_questions_do_not() {
        for area in Area::ALL {
            for q in questions_for(area) {
                match q.kind {
                    QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
                        assert!(!q.options.is_empty(), "{:?} has no options", q.label)
                    }
                    QuestionKind::Text | QuestionKind::LongText => {
                        assert!(q.options.is_empty())
                    }
                }
            }
        }
    }

    #[test]
    fn test_tag_lookup_round_trips_and_rejects_unknown_tags() {
        assert_eq!(
            questions_for_tag("pequenaEmpresa").unwrap(),
            questions_for(Area::SmallBusiness)
        );
        let err = questions_for_tag("gamer").unwrap_err();
        assert_eq!(err.tag, "gamer");
    }
}
