//! Install and deploy subcommands.

use std::path::PathBuf;

use clap::Args;

use crate::app::template::MavenInvokerTemplate;
use crate::domain::{AppError, ArtifactCoordinates, DEFAULT_PACKAGING, InvocationResult};
use crate::ports::InvocationRunner;

#[derive(Args)]
pub struct CoordinateArgs {
    /// Artifact file to publish
    file: PathBuf,
    /// Group id
    #[arg(short, long)]
    group_id: String,
    /// Artifact id
    #[arg(short, long)]
    artifact_id: String,
    /// Artifact version
    #[arg(long)]
    version: String,
    /// Packaging type
    #[arg(short, long, default_value = DEFAULT_PACKAGING)]
    packaging: String,
}

impl CoordinateArgs {
    fn coordinates(&self) -> Result<ArtifactCoordinates, AppError> {
        ArtifactCoordinates::new(&self.group_id, &self.artifact_id, &self.version)?
            .with_packaging(&self.packaging)
    }
}

#[derive(Args)]
pub struct InstallArgs {
    #[command(flatten)]
    artifact: CoordinateArgs,
    /// Generate a minimal POM for the artifact
    #[arg(long)]
    generate_pom: bool,
    /// Write checksums next to the installed artifact
    #[arg(long)]
    create_checksum: bool,
}

#[derive(Args)]
pub struct DeployArgs {
    #[command(flatten)]
    artifact: CoordinateArgs,
    /// Remote repository URL
    #[arg(long)]
    url: String,
    /// Server id in settings.xml holding the credentials
    #[arg(long)]
    repository_id: String,
}

pub fn run_install<R: InvocationRunner>(
    template: &MavenInvokerTemplate<R>,
    args: InstallArgs,
) -> Result<InvocationResult, AppError> {
    let coordinates = args.artifact.coordinates()?;
    template.install(&args.artifact.file, &coordinates, args.generate_pom, args.create_checksum)
}

pub fn run_deploy<R: InvocationRunner>(
    template: &MavenInvokerTemplate<R>,
    args: DeployArgs,
) -> Result<InvocationResult, AppError> {
    let coordinates = args.artifact.coordinates()?;
    template.deploy(&args.artifact.file, &coordinates, &args.url, &args.repository_id)
}
