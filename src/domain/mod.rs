pub mod config;
pub mod constraint;
pub mod diff;
pub mod error;
pub mod identifiers;
pub mod manifest;
pub mod template;
pub mod version;

pub use config::{LintSection, ManifestSection, OrderRule, ReqfileConfig};
pub use constraint::{Clause, Comparator, VersionConstraint};
pub use diff::{Change, ManifestDiff};
pub use error::AppError;
pub use identifiers::{PackageName, TemplateId};
pub use manifest::{DependencyEntry, Line, Manifest, parse_manifest};
pub use template::ManifestTemplate;
pub use version::{PreRelease, Version};
