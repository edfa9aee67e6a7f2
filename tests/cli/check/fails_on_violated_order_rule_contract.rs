use crate::harness::TestContext;
use predicates::prelude::*;

const ORDER_RULE: &str = "[[order]]\nbefore = \"eventlet\"\nafter = \"greenlet\"\n";

#[test]
fn order_rule_holds_for_reference_manifest() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();
    ctx.write_config(ORDER_RULE);

    ctx.cli().arg("check").assert().success();
}

#[test]
fn order_rule_violation_is_an_error() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "greenlet>=0.3.1\neventlet>=0.16.1,!=0.17.0\n");
    ctx.write_config(ORDER_RULE);

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[ERROR] requirements.txt:2: eventlet: must be declared before 'greenlet' (line 1)",
        ));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();
    ctx.write_config("[[order]]\nbefore = \"eventlet\"\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("reqfile.toml"));
}
