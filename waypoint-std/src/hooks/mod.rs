//! Standard navigation observers.

pub mod logging;
pub mod page_view;

pub use logging::LoggingHook;
pub use page_view::PageViewHook;
