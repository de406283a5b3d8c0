mod indexnow;
mod server;

pub use indexnow::indexnow;
pub use server::serve;
