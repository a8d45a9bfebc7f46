use serde_json::{Value, json};
use utilkit_core::prelude::*;

fn sample() -> Value {
    json!({
        "user": {
            "name": "Ada",
            "roles": ["admin", "dev"],
            "address": {"city": "London", "zip": null}
        },
        "items": [{"id": 1}, {"id": 2, "tags": []}]
    })
}

#[test]
fn every_stored_path_resolves() {
    let doc = sample();
    let cases: Vec<(KeyPath, Value)> = vec![
        ("user.name".into(), json!("Ada")),
        (key_path!("user.roles", 1usize), json!("dev")),
        ("user.address.zip".into(), json!(null)),
        (key_path!("items", 1usize, "tags"), json!([])),
        (key_path!(vec!["items", "0"], "id"), json!(1)),
    ];

    for (path, expected) in cases {
        assert_eq!(get(&doc, &path), Some(&expected), "{}", path);
        assert!(has(&doc, &path), "{}", path);
    }
}

#[test]
fn missing_paths_are_absent() {
    let doc = sample();
    for path in ["user.email", "user.roles.2", "items.5.id", "user.name.first", "nope"] {
        assert_eq!(get(&doc, path), None, "{}", path);
        assert!(!has(&doc, path), "{}", path);
    }
}

#[test]
fn unset_then_has_is_false() {
    let mut doc = sample();
    let user = get_mut(&mut doc, "user").expect("user is present");
    assert!(unset(user, "roles").is_some());
    assert!(!has(&doc, "user.roles"));
    assert!(has(&doc, "user.name"));
}

#[test]
fn extend_is_left_to_right() {
    let mut base = json!({});
    extend(&mut base, [json!({"k": 1}), json!({"k": 2}), json!({"k": 3})]);
    assert_eq!(base, json!({"k": 3}));

    let mut base = json!([]);
    extend(&mut base, [json!(1), json!([2, 3]), json!("four")]);
    assert_eq!(base, json!([1, 2, 3, "four"]));
}

#[test]
fn classifier_drives_both_operations() {
    let doc = json!("scalar");
    assert_eq!(classify(&doc), ValueKind::Scalar);
    assert_eq!(get(&doc, ""), None);

    let mut base = doc.clone();
    extend(&mut base, [json!([1])]);
    assert_eq!(base, doc);
}
