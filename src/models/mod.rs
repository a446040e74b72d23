pub mod calendar_event;
pub mod category;
pub mod record;

pub use category::Category;
pub use record::Record;
