pub mod handlers;
pub mod listener;
pub mod logging;
pub mod router;
