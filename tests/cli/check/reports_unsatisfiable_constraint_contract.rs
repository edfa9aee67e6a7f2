use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn wildcard_exclusion_covering_the_whole_range_is_an_error() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "dnspython>=1.9.4\nsimplejson==1.4.*,!=1.4.*\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[ERROR] requirements.txt:2: simplejson: constraint '==1.4.*,!=1.4.*' cannot be satisfied",
        ));
}

#[test]
fn largest_release_component_is_checked_without_crashing() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "xattr==18446744073709551615.*\n");

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed (1 entries)."));
}

#[test]
fn order_rule_naming_two_absent_packages_reports_both() {
    let ctx = TestContext::new();
    ctx.write("requirements.txt", "dnspython>=1.9.4\n");
    ctx.write_config("[[order]]\nbefore = \"eventlet\"\nafter = \"greenlet\"\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[ERROR] requirements.txt: eventlet, greenlet: order rule 'eventlet' before 'greenlet'",
        ));
}
