//! reqfile: parse, lint, and diff ordered dependency manifests.
//!
//! A manifest is a `requirements.txt`-style list of `(name, constraint)`
//! entries whose order is significant to the installer that consumes it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{
    check, check_at, diff, diff_at, eval, eval_at, fmt, fmt_at, init, init_at, list, list_at,
    templates,
};
pub use app::api::{
    CheckOptions, CheckOutcome, Diagnostic, EvalOutcome, FmtOptions, FmtOutcome, InitOutcome,
    ListFormat, ListOutput, Severity, TemplateSummary, Verdict,
};
pub use domain::{
    AppError, Change, Clause, Comparator, DependencyEntry, Line, Manifest, ManifestDiff,
    PackageName, Version, VersionConstraint, parse_manifest,
};
