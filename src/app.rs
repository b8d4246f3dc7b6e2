use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{self, script::ScriptPath},
    host, infra,
    usecases::{
        self, bootstrap,
        probe::probe_support,
        register::{register_worker, TracingReporter},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Register => {
            let mut context = bootstrap::bootstrap(cli.config.as_deref())?;
            log_module_boundaries();

            let script = ScriptPath::new(&context.config.worker.script_path);
            let mut reporter = TracingReporter;
            let outcome = register_worker(&mut context.host, &mut reporter, &script);

            tracing::debug!(outcome = outcome.as_label(), "registration flow finished");
        }
        Command::Probe => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            log_module_boundaries();

            let report = probe_support(&context.host);
            tracing::debug!(code = report.as_label(), "capability probe finished");
            println!("{}", report.user_line());
        }
    }

    Ok(())
}

fn log_module_boundaries() {
    tracing::debug!(
        domain = domain::module_name(),
        host = host::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );
}
