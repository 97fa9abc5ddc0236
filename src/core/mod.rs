pub mod extract;
pub mod logic;

pub use extract::extract_entries;
pub use logic::Core;
