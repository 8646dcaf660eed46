pub mod events;
pub mod records;

pub use events::AppEvent;
pub use records::{Suggestion, WordRecord};
