//! # Domain models for profiles and survey responses
//!
//! Defines the data structures that cross the server/client boundary via
//! Dioxus server functions. All of them are `Serialize + Deserialize` and
//! `PartialEq` so they can live in signals and be compared in tests.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Area`] | One of the six fixed profile categories. The serde wire tags (`"estudante"`, `"pequenaEmpresa"`, ...) are the stored document values and must never change. |
//! | [`Profile`] | The per-user record of the selected area. At most one per user; overwritten, not versioned, on re-save. |
//! | [`Answer`] | A single answer: a string for text/single-choice questions, a list of strings for multiple-choice. Serialized untagged, so the stored JSON is a plain string or array. |
//! | [`NewResponse`] | A response as submitted by the client — no id, no timestamp. |
//! | [`ResponseDoc`] | A stored response as read back from the collection, with the store-assigned `submitted_at` (epoch seconds). |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the six fixed profile areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "estudante")]
    Student,
    #[serde(rename = "pessoal")]
    Personal,
    #[serde(rename = "criador")]
    Creator,
    #[serde(rename = "comercial")]
    Business,
    #[serde(rename = "pequenaEmpresa")]
    SmallBusiness,
    #[serde(rename = "freelancer")]
    Freelancer,
}

impl Area {
    /// Every area, in catalog order. This is also the bar order of the
    /// admin chart.
    pub const ALL: [Area; 6] = [
        Area::Student,
        Area::Personal,
        Area::Creator,
        Area::Business,
        Area::SmallBusiness,
        Area::Freelancer,
    ];

    /// The stored document tag for this area.
    pub fn tag(self) -> &'static str {
        match self {
            Area::Student => "estudante",
            Area::Personal => "pessoal",
            Area::Creator => "criador",
            Area::Business => "comercial",
            Area::SmallBusiness => "pequenaEmpresa",
            Area::Freelancer => "freelancer",
        }
    }

    /// Parse a stored tag back into an area.
    pub fn from_tag(tag: &str) -> Option<Area> {
        Area::ALL.into_iter().find(|a| a.tag() == tag)
    }

    /// Human-readable name shown in the area selector and chart labels.
    pub fn display_name(self) -> &'static str {
        match self {
            Area::Student => "Estudante",
            Area::Personal => "Pessoal",
            Area::Creator => "Criador de Conteúdo",
            Area::Business => "Comercial",
            Area::SmallBusiness => "Pequena Empresa",
            Area::Freelancer => "Freelancer",
        }
    }
}

/// Per-user profile document. Keyed by the user id; full overwrite on save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    /// Selected area, absent until the user confirms one.
    pub area: Option<Area>,
}

/// One answer in a submitted response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Text and single-choice questions; empty string when unanswered.
    Text(String),
    /// Multiple-choice questions; empty list when unanswered.
    Multi(Vec<String>),
}

/// Question label → answer, for exactly the labels of the submitted
/// area's questionnaire.
pub type Answers = BTreeMap<String, Answer>;

/// A response as submitted; the store assigns id and timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewResponse {
    pub user_id: String,
    pub email: String,
    pub area: Area,
    pub answers: Answers,
}

/// A stored response read back from the collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseDoc {
    pub user_id: String,
    pub email: String,
    pub area: Area,
    pub answers: Answers,
    /// Store-assigned submission time, epoch seconds.
    pub submitted_at: i64,
}
