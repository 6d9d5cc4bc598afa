//! User entry form: payload, form state reducer and submission outcomes.

pub mod aggregate;
pub mod form_state;
pub mod submission;

pub use aggregate::{Gender, SkillCatalog, UserEntryDto, SKILL_CATALOG};
pub use form_state::{Field, FormEvent, FormMessage, FormState, MessageKind, SubmitPhase, Transition};
pub use submission::{users_endpoint, HttpReply, SubmissionError, ValidationError};
