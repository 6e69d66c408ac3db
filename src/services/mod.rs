pub mod auth;
pub mod classrooms;
pub mod outcome;

pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use outcome::{Outcome, Redirect};
