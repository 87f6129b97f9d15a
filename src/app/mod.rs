pub mod api;
pub mod cli;
pub mod config;
pub mod configurator;
pub mod logging;
pub mod template;

pub use configurator::{InvocationHandle, configure};
pub use template::MavenInvokerTemplate;
