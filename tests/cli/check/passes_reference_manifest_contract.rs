use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_reference_manifest_warns_only_about_unconstrained_entry() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[WARN] requirements.txt:13: prettytable: no version constraint",
        ))
        .stderr(predicate::str::contains("Check completed with 1 warning(s)."));
}

#[test]
fn check_passes_when_unconstrained_entry_is_allowed() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();
    ctx.write_config("[lint]\nallow_unconstrained = [\"prettytable\"]\n");

    ctx.cli()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed (10 entries)."));
}

#[test]
fn check_reports_parse_errors_with_line_numbers() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "dnspython>=1.9.4\neventlet=>0.16.1\n");

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Line 2:"));
}
