use crate::harness::{REFERENCE_MANIFEST, TestContext};
use predicates::prelude::*;

#[test]
fn init_rejects_existing_manifest() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "greenlet>=0.3.1\n");

    ctx.cli()
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Manifest already exists"));

    assert_eq!(ctx.read("requirements.txt"), "greenlet>=0.3.1\n");
}

#[test]
fn init_force_overwrites() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "greenlet>=0.3.1\n");

    ctx.cli()
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced"));

    assert_eq!(ctx.read("requirements.txt"), REFERENCE_MANIFEST);
}

#[test]
fn init_rejects_unknown_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--template", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'missing' not found"))
        .stderr(predicate::str::contains("swift-storage"));
}
