use anyhow::Result;

use crate::infra::contracts::{join_announcement, JoinAnnouncer};

/// Announces joins through the diagnostic log only. Nothing reaches a
/// backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogJoinAnnouncer;

impl JoinAnnouncer for LogJoinAnnouncer {
    fn announce_join(&mut self, class_code: &str) -> Result<()> {
        tracing::info!(class_code, "{}", join_announcement(class_code));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_text_embeds_code_verbatim() {
        assert_eq!(
            join_announcement("ABC123"),
            "Joining class with code: ABC123"
        );
    }

    #[test]
    fn log_announcer_never_fails() {
        let mut announcer = LogJoinAnnouncer;

        announcer
            .announce_join("ABC123")
            .expect("logging announcement must succeed");
    }
}
