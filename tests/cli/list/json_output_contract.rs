use crate::harness::TestContext;

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();
    ctx.with_reference_manifest();

    let output = ctx.cli().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value["entries"].as_array().unwrap();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[1]["name"], "eventlet");
    assert_eq!(entries[1]["position"], 1);
    assert_eq!(entries[1]["constraint"][0]["comparator"], ">=");
    assert_eq!(entries[1]["constraint"][0]["version"], "0.16.1");
    assert_eq!(entries[8]["name"], "prettytable");
    assert_eq!(entries[8]["constraint"].as_array().unwrap().len(), 0);
    assert_eq!(entries[8]["annotation"], "BSD");
    assert_eq!(value["fingerprint"].as_str().unwrap().len(), 64);
}
