//! Install, deploy and arbitrary-goal operations over a configured invoker.

use std::path::{Path, PathBuf};

use url::Url;

use super::configurator::InvocationHandle;
use crate::domain::{
    AppError, ArtifactCoordinates, InvocationRequest, InvocationResult, MavenInvokerOptions,
};
use crate::ports::InvocationRunner;

const INSTALL_FILE_GOAL: &str = "install:install-file";
const DEPLOY_FILE_GOAL: &str = "deploy:deploy-file";

/// Template operations sharing one handle and runner.
///
/// The snapshot and plugin-update flags from the options apply to every
/// request issued through the template.
pub struct MavenInvokerTemplate<R: InvocationRunner> {
    handle: InvocationHandle,
    runner: R,
    update_snapshots: bool,
    non_plugin_updates: bool,
}

impl<R: InvocationRunner> MavenInvokerTemplate<R> {
    pub fn new(handle: InvocationHandle, runner: R, options: &MavenInvokerOptions) -> Self {
        Self {
            handle,
            runner,
            update_snapshots: options.update_snapshots,
            non_plugin_updates: options.non_plugin_updates,
        }
    }

    pub fn handle(&self) -> &InvocationHandle {
        &self.handle
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Install `file` into the local repository under `coordinates`.
    ///
    /// Runs in the file's directory.
    pub fn install(
        &self,
        file: &Path,
        coordinates: &ArtifactCoordinates,
        generate_pom: bool,
        create_checksum: bool,
    ) -> Result<InvocationResult, AppError> {
        let request = self
            .artifact_request(INSTALL_FILE_GOAL, file, coordinates)?
            .property("generatePom", generate_pom.to_string())
            .property("createChecksum", create_checksum.to_string());
        self.run(&request)
    }

    /// Deploy `file` to the remote repository at `repository_url`.
    ///
    /// `repository_id` selects the server credentials from Maven's settings.
    pub fn deploy(
        &self,
        file: &Path,
        coordinates: &ArtifactCoordinates,
        repository_url: &str,
        repository_id: &str,
    ) -> Result<InvocationResult, AppError> {
        let repository_url = repository_url.trim();
        Url::parse(repository_url).map_err(|e| AppError::InvalidUrl {
            url: repository_url.to_string(),
            details: e.to_string(),
        })?;
        let repository_id = repository_id.trim();
        if repository_id.is_empty() {
            return Err(AppError::configuration("Repository id must not be blank"));
        }

        let request = self
            .artifact_request(DEPLOY_FILE_GOAL, file, coordinates)?
            .property("url", repository_url)
            .property("repositoryId", repository_id);
        self.run(&request)
    }

    /// Run `goal` in `base_dir` with `args` appended verbatim.
    pub fn execute(
        &self,
        base_dir: &Path,
        goal: &str,
        args: &[String],
    ) -> Result<InvocationResult, AppError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(AppError::configuration("Goal must not be blank"));
        }
        if !base_dir.is_dir() {
            return Err(AppError::configuration(format!(
                "Base directory '{}' is not a directory",
                base_dir.display()
            )));
        }

        let request = self.request().base_directory(base_dir).goal(goal).arguments(args.iter().cloned());
        self.run(&request)
    }

    fn request(&self) -> InvocationRequest {
        InvocationRequest::new()
            .update_snapshots(self.update_snapshots)
            .non_plugin_updates(self.non_plugin_updates)
    }

    fn artifact_request(
        &self,
        goal: &str,
        file: &Path,
        coordinates: &ArtifactCoordinates,
    ) -> Result<InvocationRequest, AppError> {
        if !file.is_file() {
            return Err(AppError::ArtifactNotFound(file.to_path_buf()));
        }
        let file = std::path::absolute(file)?;
        let base_dir = file.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

        let mut request = self
            .request()
            .base_directory(base_dir)
            .goal(goal)
            .property("file", file.to_string_lossy());
        for (key, value) in coordinates.properties() {
            request = request.property(key, value);
        }
        Ok(request)
    }

    fn run(&self, request: &InvocationRequest) -> Result<InvocationResult, AppError> {
        self.handle.logger().info(&format!("Running Maven goals: {}", request.goals().join(" ")));
        self.handle.execute(&self.runner, request)
    }
}
