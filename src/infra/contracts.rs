use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Outbound "intent to join a class" side effect.
pub trait JoinAnnouncer {
    fn announce_join(&mut self, class_code: &str) -> Result<()>;
}

/// Text of the diagnostic entry written for every join attempt.
pub fn join_announcement(class_code: &str) -> String {
    format!("Joining class with code: {class_code}")
}
