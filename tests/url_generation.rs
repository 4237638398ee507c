use texivia_router_rs::{RouteParams, RouteTable, RouteTemplate, RouterError, RouterOptions};

const NO_QUERY: &[(&str, &str)] = &[];

fn table() -> RouteTable<()> {
    RouteTable::build(
        vec![
            RouteTemplate::new("/").name("Home"),
            RouteTemplate::new("/users/{id:\\d+}").name("User"),
            RouteTemplate::new("/{lang}/docs/{docId}").name("Doc"),
            RouteTemplate::new("/files/{path}/raw/").name("Raw"),
            RouteTemplate::wildcard().name("NotFound"),
        ],
        &RouterOptions::default(),
    )
    .expect("table should build")
}

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn generate_when_params_given_then_substitutes_them() {
    let table = table();
    let url = table
        .generate_url("Doc", &params(&[("lang", "en"), ("docId", "intro")]), NO_QUERY)
        .expect("url should generate");
    assert_eq!(url, "/en/docs/intro");
    assert_eq!(table.generate_url("Home", &RouteParams::new(), NO_QUERY).unwrap(), "/");
}

#[test]
fn generate_when_query_given_then_appends_encoded_pairs() {
    let url = table()
        .generate_url("User", &params(&[("id", "5")]), &[("tab", "a b"), ("q", "x&y")])
        .expect("url should generate");
    assert_eq!(url, "/users/5?tab=a%20b&q=x%26y");
}

#[test]
fn generate_when_value_needs_escaping_then_percent_encodes_it() {
    let url = table()
        .generate_url("Raw", &params(&[("path", "a/b c")]), NO_QUERY)
        .expect("url should generate");
    assert_eq!(url, "/files/a%2Fb%20c/raw/");
}

#[test]
fn generate_when_extra_params_given_then_ignores_them() {
    let url = table()
        .generate_url("User", &params(&[("id", "1"), ("unused", "x")]), NO_QUERY)
        .expect("url should generate");
    assert_eq!(url, "/users/1");
}

#[test]
fn generate_when_name_unknown_then_unknown_route() {
    match table().generate_url("Nope", &RouteParams::new(), NO_QUERY) {
        Err(RouterError::UnknownRoute { name }) => assert_eq!(name, "Nope"),
        other => panic!("expected UnknownRoute, got {other:?}"),
    }
}

#[test]
fn generate_when_param_missing_then_reports_first_missing() {
    match table().generate_url("Doc", &params(&[("docId", "x")]), NO_QUERY) {
        Err(RouterError::MissingParameter { name, route }) => {
            assert_eq!(name, "lang");
            assert_eq!(route, "Doc");
        }
        other => panic!("expected MissingParameter, got {other:?}"),
    }
}

#[test]
fn generate_when_route_is_wildcard_then_not_generatable() {
    match table().generate_url("NotFound", &RouteParams::new(), NO_QUERY) {
        Err(RouterError::NotGeneratable { name }) => assert_eq!(name, "NotFound"),
        other => panic!("expected NotGeneratable, got {other:?}"),
    }
}

#[test]
fn generate_when_matched_back_then_params_round_trip() {
    let table = table();
    let original = params(&[("lang", "pt br"), ("docId", "ação-1")]);
    let url = table.generate_url("Doc", &original, NO_QUERY).expect("url should generate");
    let (route, matched) = table.match_path(&url).expect("generated url should match");
    assert_eq!(route.name(), Some("Doc"));
    assert_eq!(matched, original);
}
