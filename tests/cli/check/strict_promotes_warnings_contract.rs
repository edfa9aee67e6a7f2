use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn strict_check_exits_two_on_warnings() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "eventlet>=0.16.1,!=0.15.0\n");

    ctx.cli()
        .args(["check", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'!=0.15.0' excludes a version"));
}

#[test]
fn errors_exit_one_regardless_of_strict() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "eventlet>=0.16.1\nEventlet>=0.17\nxattr>=2.0,<1.0\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate package, first declared on line 1"))
        .stderr(predicate::str::contains("cannot be satisfied by any version"))
        .stderr(predicate::str::contains("Check failed: 2 error(s), 0 warning(s) found."));
}
