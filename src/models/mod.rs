pub mod conversation;
pub mod entry;
pub mod message;

pub use conversation::DirectConversation;
pub use entry::TimesheetEntry;
pub use message::RawMessage;
