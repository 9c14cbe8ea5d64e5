use uriref::UriBuilder;

#[test]
fn set_path_resplits_into_segments() {
    let b = UriBuilder::new().set_scheme("https").set_host("h").set_path("/a/b/c");
    assert_eq!(
        b.path_segments().unwrap(),
        &["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn trailing_slash_yields_trailing_empty_segment() {
    let b = UriBuilder::new().set_scheme("https").set_host("h").set_path("/a/");
    assert_eq!(b.path_segments().unwrap(), &["a".to_string(), String::new()]);
}

#[test]
fn leading_slash_is_not_its_own_segment() {
    let b = UriBuilder::new().set_scheme("https").set_host("h").set_path("/a/b");
    assert_eq!(b.path_segments().unwrap().len(), 2);
}

#[test]
fn append_path_segments_extends_existing_list() {
    let b = UriBuilder::new()
        .set_scheme("https")
        .set_host("h")
        .set_path_segments(&["a"])
        .append_path_segments(&["b", "c"]);
    assert_eq!(
        b.path_segments().unwrap(),
        &["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn no_path_segments_and_no_encoded_path_is_opaque() {
    let b = UriBuilder::new().set_scheme("mailto").set_scheme_specific_part("user@example.com");
    assert!(b.is_opaque());
}

#[test]
fn path_accessor_reconstructs_slash_joined_string() {
    let b = UriBuilder::new()
        .set_scheme("https")
        .set_host("h")
        .set_path_segments(&["path", "to", "thing"]);
    assert_eq!(b.path().as_deref(), Some("/path/to/thing"));
}
