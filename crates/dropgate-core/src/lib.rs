pub mod config;
pub mod logging;

pub mod admission;
pub mod content;
pub mod extension;
pub mod registry;
pub mod sizes;
pub mod strings;
pub mod url_model;

pub use admission::{AdmissionGate, Rejection};
pub use content::{Classification, ContentClassifier};
pub use extension::Extension;
pub use registry::{BuiltinRegistry, LanguageRegistry};
pub use sizes::{SizeCategory, SizeLimits};
