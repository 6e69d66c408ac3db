pub mod auth;

pub mod classrooms;

mod respond;

pub use auth::configure_auth_routes;
pub use classrooms::configure_classroom_routes;
