//! Catalog database access

pub mod init;
pub mod models;
pub mod query;
pub mod seed;

pub use init::*;
pub use models::*;
pub use query::*;
pub use seed::*;
