pub mod auth;
pub mod gate;
pub mod role;
pub mod routes;
