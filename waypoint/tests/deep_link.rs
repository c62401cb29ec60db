//! Deep-link parsing against the default route table.

use url::Url;
use waypoint::{
    DeepLinkError, DeepLinkParser, LinkRoute, Listener, LookupError, Path,
    store::{MOCK_EVENT_NAME, MockEventStore},
};

mod common;
use common::known_events;

fn mock_parser() -> DeepLinkParser<MockEventStore> {
    DeepLinkParser::new(MockEventStore).unwrap()
}

#[test]
fn test_events_id_resolves_event_details() {
    let path = mock_parser()
        .parse_str("https://app.example.com/events/123")
        .unwrap();
    match path {
        Path::EventDetails(event) => {
            assert_eq!(event.id().as_str(), "123");
            assert_eq!(event.name(), MOCK_EVENT_NAME);
        }
        other => panic!("expected EventDetails, got {:?}", other),
    }
}

#[test]
fn test_signup_and_unknown() {
    let parser = mock_parser();
    assert_eq!(parser.parse_path("/signup"), Ok(Path::SignUp));
    assert_eq!(
        parser.parse_path("/unknown"),
        Err(DeepLinkError::Mismatch("/unknown".to_string()))
    );
}

#[test]
fn test_no_partial_matches() {
    let parser = mock_parser();
    for path in ["/events/123/extra", "/events", "/events/", "/signup/now", "/", ""] {
        assert!(
            matches!(parser.parse_path(path), Err(DeepLinkError::Mismatch(_))),
            "{:?} should not match",
            path
        );
    }
}

#[test]
fn test_single_trailing_slash_tolerated() {
    let parser = mock_parser();
    assert_eq!(parser.parse_path("/signup/"), Ok(Path::SignUp));
    assert!(matches!(
        parser.parse_path("/events/7/"),
        Ok(Path::EventDetails(e)) if e.id().as_str() == "7"
    ));
    assert!(parser.parse_path("/signup//").is_err());
}

#[test]
fn test_query_and_fragment_ignored() {
    let url = Url::parse("myapp://open/signup?ref=mail#top").unwrap();
    assert_eq!(mock_parser().parse(&url), Ok(Path::SignUp));
}

#[test]
fn test_invalid_url() {
    assert!(matches!(
        mock_parser().parse_str("/events/1"),
        Err(DeepLinkError::InvalidUrl(_))
    ));
}

#[test]
fn test_lookup_miss_with_real_store() {
    let parser = DeepLinkParser::new(known_events()).unwrap();

    let Ok(Path::EventDetails(event)) = parser.parse_path("/events/jazz") else {
        panic!("jazz is a known event");
    };
    assert_eq!(event.name(), "Jazz Night");

    assert_eq!(
        parser.parse_path("/events/opera"),
        Err(DeepLinkError::LookupMiss(LookupError::NotFound(
            "opera".to_string()
        )))
    );

    let url = Url::parse("https://app.example.com/events/opera").unwrap();
    assert_eq!(parser.resolve(&url), None);
}

#[test]
fn test_custom_route_aliases() {
    let parser = DeepLinkParser::with_routes(
        MockEventStore,
        [
            ("/e/{id}", LinkRoute::EventDetails),
            ("/join", LinkRoute::SignUp),
        ],
    )
    .unwrap();

    assert_eq!(parser.patterns(), ["/e/{id}", "/join"]);
    assert_eq!(parser.parse_path("/join"), Ok(Path::SignUp));
    assert!(matches!(parser.parse_path("/e/5"), Ok(Path::EventDetails(_))));
    assert!(parser.parse_path("/signup").is_err());
}

#[test]
fn test_parser_as_listener() {
    let only_events = mock_parser().filter(|path: &Path| matches!(path, Path::EventDetails(_)));

    let event_url = Url::parse("https://x.test/events/1").unwrap();
    let signup_url = Url::parse("https://x.test/signup").unwrap();
    let junk_url = Url::parse("https://x.test/nope").unwrap();

    assert!(only_events.listen(&event_url).unwrap().is_some());
    assert_eq!(only_events.listen(&signup_url).unwrap(), None);
    assert_eq!(only_events.listen(&junk_url).unwrap(), None);
}
