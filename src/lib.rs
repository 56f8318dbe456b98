pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use error::DeskError;
pub use router::{DeskState, desk_router};
