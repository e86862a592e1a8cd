use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, page, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref(), cli.seed)?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                page = page::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names_match_layers() {
        assert_eq!(domain::module_name(), "domain");
        assert_eq!(page::module_name(), "page");
        assert_eq!(usecases::module_name(), "usecases");
        assert_eq!(infra::module_name(), "infra");
        assert_eq!(ui::module_name(), "ui");
    }
}
