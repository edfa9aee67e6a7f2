pub mod package_name;
pub mod template_id;
pub mod validation;

pub use package_name::PackageName;
pub use template_id::TemplateId;
