//! Arbitrary goal subcommand.

use std::path::PathBuf;

use clap::Args;

use crate::app::template::MavenInvokerTemplate;
use crate::domain::{AppError, InvocationResult};
use crate::ports::InvocationRunner;

#[derive(Args)]
pub struct ExecArgs {
    /// Working directory for Maven (defaults to current directory)
    #[arg(short = 'C', long)]
    base_dir: Option<PathBuf>,
    /// Goal or phase to run
    goal: String,
    /// Extra arguments passed to Maven verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

pub fn run_exec<R: InvocationRunner>(
    template: &MavenInvokerTemplate<R>,
    args: ExecArgs,
) -> Result<InvocationResult, AppError> {
    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    template.execute(&base_dir, &args.goal, &args.args)
}
