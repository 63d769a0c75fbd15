//! Session domain: visibility types, draft assembly, persisted records.

mod draft;
mod record;
mod session_type;

pub use draft::{NewSessionRequest, SessionDraft};
pub use record::SessionRecord;
pub use session_type::SessionType;
