//! Participant directory: users eligible for selection into a session.

mod selection;
mod selector;
mod user;

pub use selection::ParticipantSelection;
pub use selector::ParticipantSelector;
pub use user::User;
