use crate::harness::{REFERENCE_MANIFEST, TestContext};
use predicates::prelude::*;

#[test]
fn fmt_rewrites_to_canonical_form() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "# deps\n eventlet >= 0.16.1 , != 0.17.0\nPyECLib == 1.0.7 #BSD\n");

    ctx.cli().arg("fmt").assert().success().stdout(predicate::str::contains("Formatted"));

    assert_eq!(
        ctx.read("requirements.txt"),
        "# deps\neventlet>=0.16.1,!=0.17.0\nPyECLib==1.0.7  # BSD\n"
    );
}

#[test]
fn fmt_leaves_reference_manifest_untouched() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    ctx.cli().arg("fmt").assert().success().stdout(predicate::str::contains("already canonical"));

    assert_eq!(ctx.read("requirements.txt"), REFERENCE_MANIFEST);
}
