use reqfile::{
    CheckOptions, FmtOptions, Verdict, check_at, diff_at, eval_at, fmt_at, init_at, list_at,
    templates,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn public_api_lifecycle_happy_path_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    fs::write(root.join("reqfile.toml"), "[lint]\nallow_unconstrained = [\"prettytable\"]\n")
        .unwrap();

    let names: Vec<String> = templates().unwrap().into_iter().map(|t| t.name).collect();
    assert!(names.contains(&"swift-storage".to_string()));

    let init = init_at(root.clone(), None, None, false).expect("init failed");
    assert_eq!(init.entries, 10);
    assert!(root.join("requirements.txt").is_file());

    let listed = list_at(root.clone(), None).expect("list failed");
    assert_eq!(listed.entries.len(), 10);
    assert_eq!(listed.fingerprint.len(), 64);

    let outcome = check_at(root.clone(), None, CheckOptions { strict: true }).expect("check failed");
    assert_eq!(outcome.exit_code, 0);

    let accepted = eval_at(root.clone(), None, "eventlet", "0.16.1").expect("eval failed");
    assert_eq!(accepted.verdict, Verdict::Accepted);
    let rejected = eval_at(root.clone(), None, "eventlet", "0.17.0").expect("eval failed");
    assert!(!rejected.verdict.is_accepted());

    let formatted = fmt_at(root.clone(), None, FmtOptions { check: true }).expect("fmt failed");
    assert!(!formatted.changed);

    let diff = diff_at(root.clone(), Path::new("requirements.txt"), Path::new("requirements.txt"))
        .expect("diff failed");
    assert!(diff.is_empty());
}
