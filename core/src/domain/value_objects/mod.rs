//! Value objects shared by services.

pub mod route;

pub use route::Route;
