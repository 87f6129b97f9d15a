pub mod coordinates;
pub mod error;
pub mod invocation;
pub mod options;

pub use coordinates::{ArtifactCoordinates, DEFAULT_PACKAGING};
pub use error::AppError;
pub use invocation::{InvocationRequest, InvocationResult, InvokerSettings};
pub use options::{MavenInvokerOptions, OptionOverrides};
