use super::AppError;

/// Packaging used when none is given.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Maven coordinates of an artifact file.
///
/// Guarantees every component has text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinates {
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
}

impl ArtifactCoordinates {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Result<Self, AppError> {
        Ok(Self {
            group_id: required("groupId", group_id)?,
            artifact_id: required("artifactId", artifact_id)?,
            version: required("version", version)?,
            packaging: DEFAULT_PACKAGING.to_string(),
        })
    }

    pub fn with_packaging(mut self, packaging: &str) -> Result<Self, AppError> {
        self.packaging = required("packaging", packaging)?;
        Ok(self)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    /// `-D` properties naming this artifact, in Maven's parameter spelling.
    pub fn properties(&self) -> [(&'static str, &str); 4] {
        [
            ("groupId", &self.group_id),
            ("artifactId", &self.artifact_id),
            ("version", &self.version),
            ("packaging", &self.packaging),
        ]
    }
}

fn required(name: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidCoordinates(format!("{name} must not be blank")));
    }
    Ok(value.to_string())
}
