pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod forms;
pub mod models;

mod adapter;
pub use adapter::{DocumentStore, FeedGuard, ResponseFeed};

mod memory;
pub use memory::MemoryStore;

pub use catalog::{questions_for, questions_for_tag, Question, QuestionKind};
pub use error::{StoreError, UnknownAreaError, ValidationError};
pub use models::{Answer, Answers, Area, NewResponse, Profile, ResponseDoc};
