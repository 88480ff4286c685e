// routes/mod.rs
// Public re-exports of all route handlers.

pub mod home;
pub mod setup;
pub mod verify;

pub use home::{health, home};
pub use setup::setup;
pub use verify::verify;
