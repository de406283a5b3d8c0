pub mod cli;
pub mod config;
pub mod db;
pub mod indexnow;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod seo;
pub mod server;
pub mod template;

pub use routes::AppState;
