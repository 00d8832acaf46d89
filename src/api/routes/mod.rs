pub mod analysis;
pub mod chat;
pub mod examples;
pub mod exploits;
pub mod health;
pub mod knowledge;
