pub mod severity;
pub mod exploit;

pub use severity::Severity;
pub use exploit::{ExploitSubmission, NewExploit, ANONYMOUS_AUTHOR};
