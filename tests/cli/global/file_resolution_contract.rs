use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn config_manifest_path_is_used() {
    let ctx = TestContext::new();
    ctx.write("deps/base.txt", "greenlet>=0.3.1\n");
    ctx.write_config("[manifest]\npath = \"deps/base.txt\"\n");

    ctx.cli().args(["eval", "greenlet", "0.3.1"]).assert().success();
}

#[test]
fn environment_overrides_config() {
    let ctx = TestContext::new();
    ctx.write("deps/base.txt", "greenlet>=0.3.1\n");
    ctx.write("deps/env.txt", "greenlet>=1.0\n");
    ctx.write_config("[manifest]\npath = \"deps/base.txt\"\n");

    ctx.cli()
        .env("REQFILE_MANIFEST", "deps/env.txt")
        .args(["eval", "greenlet", "0.3.1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("greenlet>=1.0 rejects 0.3.1"));
}

#[test]
fn file_flag_overrides_environment() {
    let ctx = TestContext::new();
    ctx.write("deps/env.txt", "greenlet>=1.0\n");
    ctx.write("deps/cli.txt", "greenlet>=0.3.1\n");

    ctx.cli()
        .env("REQFILE_MANIFEST", "deps/env.txt")
        .args(["eval", "greenlet", "0.3.1", "--file", "deps/cli.txt"])
        .assert()
        .success();
}

#[test]
fn verbose_logs_to_stderr_only() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    let output = ctx.cli().args(["-v", "list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("stdout stays JSON");
    assert!(String::from_utf8_lossy(&output.stderr).contains("parsed manifest"));
}
