use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn eventlet_rejects_excluded_release() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    ctx.cli()
        .args(["eval", "eventlet", "0.17.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "eventlet>=0.16.1,!=0.17.0 rejects 0.17.0 (fails !=0.17.0)",
        ));
}

#[test]
fn eventlet_accepts_lower_bound() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    ctx.cli()
        .args(["eval", "eventlet", "0.16.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eventlet>=0.16.1,!=0.17.0 accepts 0.16.1"));
}

#[test]
fn netifaces_exclusions_hold() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    for rejected in ["0.10.0", "0.10.1"] {
        ctx.cli().args(["e", "netifaces", rejected]).assert().code(1);
    }
    for accepted in ["0.5", "0.11"] {
        ctx.cli().args(["e", "netifaces", accepted]).assert().success();
    }
}

#[test]
fn lookup_is_case_insensitive() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    ctx.cli()
        .args(["eval", "pyeclib", "1.0.7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PyECLib==1.0.7 accepts 1.0.7"));
}
