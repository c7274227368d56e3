pub mod entry;
pub mod help_status;
pub mod label;
pub mod mood;
pub mod record;
pub mod session;

pub use entry::JournalEntry;
pub use help_status::HelpStatus;
pub use label::Label;
pub use mood::Mood;
pub use record::LogRecord;
pub use session::{Session, SessionEvent};
