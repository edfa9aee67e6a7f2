use crate::harness::{REFERENCE_MANIFEST, TestContext};
use predicates::prelude::*;

#[test]
fn init_writes_reference_template_by_default() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("from template 'swift-storage' (10 entries)"));

    assert_eq!(ctx.read("requirements.txt"), REFERENCE_MANIFEST);
}

#[test]
fn init_honours_file_flag_and_template() {
    let ctx = TestContext::new();

    ctx.cli().args(["init", "--template", "minimal", "-f", "deps/base.txt"]).assert().success();

    let written = ctx.read("deps/base.txt");
    assert!(written.starts_with("# The order of packages is significant"));
    assert!(!written.contains("eventlet"));
}
