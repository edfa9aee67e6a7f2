use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn templates_lists_bundled_templates() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available templates:"))
        .stdout(predicate::str::contains("swift-storage - "))
        .stdout(predicate::str::contains("(10 entries)"))
        .stdout(predicate::str::contains("minimal - "));
}
