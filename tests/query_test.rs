use uriref::NameValuePair;

fn pairs(s: &str, plus_as_blank: bool) -> Vec<NameValuePair> {
    uriref::UriBuilder::new()
        .set_encoded_query(s)
        .set_plus_as_blank(plus_as_blank)
        .query_params()
        .to_vec()
}

#[test]
fn empty_string_yields_empty_list() {
    assert!(pairs("", false).is_empty());
}

#[test]
fn drops_empty_name_pairs() {
    let got = pairs("a=1&b=&c&=d", false);
    assert_eq!(
        got,
        vec![
            NameValuePair::new("a", Some("1".to_string())),
            NameValuePair::new("b", Some(String::new())),
            NameValuePair::new("c", None),
        ]
    );
}

#[test]
fn plus_as_blank_decodes_plus_to_space() {
    let got = pairs("a+b=c+d", true);
    assert_eq!(got, vec![NameValuePair::new("a b", Some("c d".to_string()))]);
}

#[test]
fn preserves_insertion_order() {
    let got = pairs("z=1&a=2&m=3", false);
    let names: Vec<&str> = got.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn builder_formats_parameters_joined_by_ampersand() {
    let uri = uriref::UriBuilder::new()
        .set_scheme("https")
        .set_host("example.com")
        .add_parameter("q", Some("hello world".to_string()))
        .add_parameter("flag", None)
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "https://example.com?q=hello%20world&flag");
}

#[test]
fn set_parameter_replaces_existing_same_named_entries() {
    let uri = uriref::UriBuilder::new()
        .set_scheme("https")
        .set_host("example.com")
        .add_parameter("q", Some("old".to_string()))
        .set_parameter("q", Some("new".to_string()))
        .build()
        .unwrap();
    assert_eq!(uri.query_params().len(), 1);
    assert_eq!(uri.query_params()[0].value.as_deref(), Some("new"));
}
