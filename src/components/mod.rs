//! UI Components
//!
//! Presentational Leptos components; state lives in the store and every
//! action goes through the sync layer in `AppContext`.

mod error_notification;
mod footer;
mod header;
mod todo_row;
mod user_warning;

pub use error_notification::ErrorNotification;
pub use footer::Footer;
pub use header::Header;
pub use todo_row::TodoRow;
pub use user_warning::UserWarning;
