use anyhow::Result;

use crate::infra::{
    config::AppConfig,
    contracts::{join_announcement, ConfigAdapter, JoinAnnouncer},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Keeps every announcement line instead of logging it.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    pub lines: Vec<String>,
}

impl JoinAnnouncer for RecordingAnnouncer {
    fn announce_join(&mut self, class_code: &str) -> Result<()> {
        self.lines.push(join_announcement(class_code));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn recording_announcer_keeps_lines_in_order() {
        let mut announcer = RecordingAnnouncer::default();

        announcer.announce_join("A").expect("announce A");
        announcer.announce_join("B").expect("announce B");

        assert_eq!(
            announcer.lines,
            vec![
                "Joining class with code: A".to_owned(),
                "Joining class with code: B".to_owned()
            ]
        );
    }
}
