//! CLI Adapter.

mod artifact;
mod exec;

use std::path::PathBuf;

use crate::app::logging;
use crate::domain::{AppError, InvocationResult, OptionOverrides};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mvn-invoke")]
#[command(version)]
#[command(about = "Configure and run Maven install, deploy and goal invocations", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Config file (defaults to ~/.config/mvn-invoke/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Local repository directory, created when missing
    #[arg(long, global = true)]
    local_repository: Option<String>,
    /// Path to the mvn executable
    #[arg(long, global = true)]
    maven_executable: Option<String>,
    /// Maven installation directory
    #[arg(long, global = true)]
    maven_home: Option<String>,
    /// Force a check for updated snapshots (-U); `=false` overrides the config file
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    update_snapshots: Option<bool>,
    /// Suppress plugin update checks (-npu); `=false` overrides the config file
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    non_plugin_updates: Option<bool>,
    /// Print the result as JSON; Maven output moves to stderr
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalArgs {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            local_repository: self.local_repository.clone(),
            maven_executable: self.maven_executable.clone(),
            maven_home: self.maven_home.clone(),
            update_snapshots: self.update_snapshots,
            non_plugin_updates: self.non_plugin_updates,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Install an artifact file into the local repository
    #[clap(visible_alias = "i")]
    Install(artifact::InstallArgs),
    /// Deploy an artifact file to a remote repository
    #[clap(visible_alias = "d")]
    Deploy(artifact::DeployArgs),
    /// Run an arbitrary goal with raw arguments
    #[clap(visible_alias = "x")]
    Exec(exec::ExecArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match dispatch(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "invocation aborted");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32, AppError> {
    let options =
        crate::app::api::resolve_options(cli.global.config.as_deref(), cli.global.overrides())?;
    let template = crate::app::api::console_template(&options, cli.global.json)?;

    let result = match cli.command {
        Commands::Install(args) => artifact::run_install(&template, args)?,
        Commands::Deploy(args) => artifact::run_deploy(&template, args)?,
        Commands::Exec(args) => exec::run_exec(&template, args)?,
    };

    report(&result, cli.global.json)?;
    Ok(result.exit_code())
}

fn report(result: &InvocationResult, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!("ExitCode: {}", result.exit_code());
    }
    Ok(())
}
