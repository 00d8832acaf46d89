pub mod connection;
pub mod exploits;
pub mod schema;

pub use connection::Database;
pub use exploits::ExploitStats;
