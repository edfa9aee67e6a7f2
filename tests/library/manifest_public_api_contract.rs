use crate::harness::REFERENCE_MANIFEST;
use reqfile::{Change, Comparator, Line, ManifestDiff, Version, parse_manifest};

const REFERENCE_ORDER: [&str; 10] = [
    "dnspython",
    "eventlet",
    "greenlet",
    "netifaces",
    "pastedeploy",
    "simplejson",
    "xattr",
    "PyECLib",
    "prettytable",
    "scandir",
];

fn version(text: &str) -> Version {
    text.parse().unwrap()
}

#[test]
fn reference_names_keep_declared_order() {
    let manifest = parse_manifest(REFERENCE_MANIFEST).unwrap();
    assert_eq!(manifest.names(), REFERENCE_ORDER);

    let positions: Vec<usize> = manifest.entries().map(|e| e.position).collect();
    assert_eq!(positions, (0..10).collect::<Vec<_>>());
}

#[test]
fn every_entry_line_parses_into_name_and_clauses() {
    let manifest = parse_manifest(REFERENCE_MANIFEST).unwrap();
    let netifaces = manifest.find("netifaces").unwrap();

    let clauses: Vec<(Comparator, String)> = netifaces
        .constraint
        .clauses()
        .iter()
        .map(|c| (c.comparator, c.version.to_string()))
        .collect();
    assert_eq!(
        clauses,
        vec![
            (Comparator::GreaterOrEqual, "0.5".to_string()),
            (Comparator::NotEqual, "0.10.0".to_string()),
            (Comparator::NotEqual, "0.10.1".to_string()),
        ]
    );
    assert_eq!(manifest.find("PyECLib").unwrap().annotation.as_deref(), Some("BSD"));
    assert!(manifest.find("prettytable").unwrap().constraint.is_unconstrained());
}

#[test]
fn header_comment_survives_round_trip() {
    let manifest = parse_manifest(REFERENCE_MANIFEST).unwrap();

    assert!(matches!(&manifest.lines()[0], Line::Comment(text) if text.contains("significant")));
    assert_eq!(manifest.render(), REFERENCE_MANIFEST);
    assert_eq!(parse_manifest(&manifest.render()).unwrap(), manifest);
}

#[test]
fn eventlet_and_netifaces_constraint_contracts() {
    let manifest = parse_manifest(REFERENCE_MANIFEST).unwrap();
    let eventlet = &manifest.find("eventlet").unwrap().constraint;
    let netifaces = &manifest.find("netifaces").unwrap().constraint;

    assert!(!eventlet.allows(&version("0.17.0")));
    assert!(eventlet.allows(&version("0.16.1")));

    assert!(!netifaces.allows(&version("0.10.0")));
    assert!(!netifaces.allows(&version("0.10.1")));
    assert!(netifaces.allows(&version("0.5")));
    assert!(netifaces.allows(&version("0.11")));
}

#[test]
fn reordering_eventlet_relative_to_greenlet_is_flagged() {
    let old = parse_manifest(REFERENCE_MANIFEST).unwrap();

    let swapped = parse_manifest(&REFERENCE_MANIFEST.replace(
        "eventlet>=0.16.1,!=0.17.0\ngreenlet>=0.3.1\n",
        "greenlet>=0.3.1\neventlet>=0.16.1,!=0.17.0\n",
    ))
    .unwrap();
    assert!(ManifestDiff::between(&old, &swapped).order_changing);

    let removed =
        parse_manifest(&REFERENCE_MANIFEST.replace("eventlet>=0.16.1,!=0.17.0\n", "")).unwrap();
    let diff = ManifestDiff::between(&old, &removed);
    assert!(diff.order_changing);
    assert_eq!(diff.changes, vec![Change::Removed { name: "eventlet".into(), position: 1 }]);

    let appended = parse_manifest(&format!("{}six\n", REFERENCE_MANIFEST)).unwrap();
    assert!(!ManifestDiff::between(&old, &appended).order_changing);
}
