pub mod general;
pub mod roles;
