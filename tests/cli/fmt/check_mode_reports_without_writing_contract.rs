use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn fmt_check_reports_without_writing() {
    let ctx = TestContext::new();
    let original = "greenlet >= 0.3.1\n";
    ctx.write("requirements.txt", original);

    ctx.cli()
        .args(["fmt", "--check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requirements.txt is not in canonical form"));

    assert_eq!(ctx.read("requirements.txt"), original);
}

#[test]
fn fmt_check_passes_canonical_file() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    ctx.cli().args(["fmt", "--check"]).assert().success();
}
