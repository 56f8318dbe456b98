pub mod admin;
pub mod inquiry;
pub mod session;
