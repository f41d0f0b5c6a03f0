//! Integration tests for the request-field validators
//!
//! These exercise the public API the way a request handler would: raw text
//! in, accept or reject out, with an optional year policy layered on top.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use format_validators::{
    CalendarDate, FormatError, Guid, Ipv6Literal, YearWindow, is_valid_guid, is_valid_ipv6,
    parse_strict_date,
};

use tracing_subscriber::{Layer, layer::Context, layer::SubscriberExt};

/// Counts every event emitted while installed
struct EventCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn events_during(check: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(EventCounter(Arc::clone(&count)));
    tracing::subscriber::with_default(subscriber, check);
    count.load(Ordering::SeqCst)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_valid_dates_keep_their_components() {
    init_tracing();

    let inputs = vec![
        ("31/12/2020", (31, 12, 2020)),
        ("01/01/2021", (1, 1, 2021)),
        ("29/02/2020", (29, 2, 2020)),
        ("30/04/1999", (30, 4, 1999)),
        ("01/01/0000", (1, 1, 0)),
    ];

    for (input, (day, month, year)) in inputs {
        let date = parse_strict_date(input).unwrap_or_else(|| panic!("{input} should parse"));
        assert_eq!((date.day(), date.month(), date.year()), (day, month, year), "Components of {input}");
    }
}

#[test]
fn test_nonexistent_dates_are_rejected() {
    init_tracing();

    for input in ["31/02/2020", "29/02/2021", "01/13/2021", "31/06/2022", "00/00/2000"] {
        assert_eq!(parse_strict_date(input), None, "{input} should be rejected");
    }
}

#[test]
fn test_date_segments_one_short_or_long_are_rejected() {
    for input in [
        "1/01/2021",
        "001/01/2021",
        "01/1/2021",
        "01/001/2021",
        "01/01/202",
        "01/01/20211",
        "01/01/2021/",
        "/01/01/2021",
    ] {
        assert_eq!(parse_strict_date(input), None, "{input} should be rejected");
    }
}

#[test]
fn test_guid_segments_one_short_or_long_are_rejected() {
    let valid = "550e8400-e29b-41d4-a716-446655440000";
    assert!(is_valid_guid(valid));

    let segments: Vec<&str> = valid.split('-').collect();
    for index in 0..segments.len() {
        let mut shorter = segments.clone();
        let trimmed = &segments[index][1..];
        shorter[index] = trimmed;
        assert!(!is_valid_guid(&shorter.join("-")), "segment {index} one short");

        let longer_segment = format!("{}0", segments[index]);
        let mut longer: Vec<&str> = segments.clone();
        longer[index] = &longer_segment;
        assert!(!is_valid_guid(&longer.join("-")), "segment {index} one long");
    }
}

#[test]
fn test_ipv6_hextet_one_long_is_rejected() {
    assert!(is_valid_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
    assert!(!is_valid_ipv6("2001:0db8:85a3:00000:0000:8a2e:0370:7334"));
    assert!(!is_valid_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370"));
}

#[test]
fn test_ipv6_reference_cases() {
    init_tracing();

    assert!(is_valid_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
    assert!(!is_valid_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334:"));
    assert!(is_valid_ipv6("::1"));
    assert!(!is_valid_ipv6("::g"));
    assert!(is_valid_ipv6("::"));
    assert!(is_valid_ipv6("::ffff:10.0.0.1"));
}

#[test]
fn test_validators_are_repeatable() {
    let inputs = ["29/02/2020", "::1", "1::2::3", "550e8400-e29b-41d4-a716-446655440000", ""];

    for input in inputs {
        assert_eq!(parse_strict_date(input), parse_strict_date(input));
        assert_eq!(is_valid_ipv6(input), is_valid_ipv6(input));
        assert_eq!(is_valid_guid(input), is_valid_guid(input));
    }
}

#[test]
fn test_validators_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100).all(|_| {
                    parse_strict_date("29/02/2024").is_some()
                        && is_valid_ipv6("fe80::1")
                        && is_valid_guid("6ba7b810-9dad-11d1-80b4-00c04fd430c8")
                })
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[derive(Debug, serde::Deserialize)]
struct AlbumRequest {
    release_date: CalendarDate,
    mirror:       Ipv6Literal,
    catalogue_id: Guid,
}

#[test]
fn test_request_body_is_validated_on_deserialize() {
    let body = r#"{
        "release_date": "15/08/1991",
        "mirror": "2001:db8::1",
        "catalogue_id": "550e8400-e29b-41d4-a716-446655440000"
    }"#;

    let request: AlbumRequest = serde_json::from_str(body).unwrap();
    assert_eq!(request.release_date.year(), 1991);
    assert_eq!(request.mirror.as_str(), "2001:db8::1");
    assert_eq!(request.catalogue_id.as_str(), "550e8400-e29b-41d4-a716-446655440000");

    let bad = r#"{
        "release_date": "31/02/1991",
        "mirror": "2001:db8::1",
        "catalogue_id": "550e8400-e29b-41d4-a716-446655440000"
    }"#;
    let err = serde_json::from_str::<AlbumRequest>(bad).unwrap_err();
    assert!(err.to_string().contains("No such calendar date: 31/02/1991"));
}

#[test]
fn test_year_window_layers_on_parsed_date() {
    let window = YearWindow::new(1900, 2024).unwrap();

    let date = parse_strict_date("01/01/1899").unwrap();
    let err = window.check_date(date).unwrap_err();
    assert_eq!(err.to_string(), "Year must be between 1900 and 2024");

    let date = parse_strict_date("01/01/1900").unwrap();
    assert!(window.check_date(date).is_ok());
}

#[test]
fn test_error_reasons() {
    assert!(matches!("01-01-2021".parse::<CalendarDate>(), Err(FormatError::DateLayout(_))));
    assert!(matches!("29/02/2021".parse::<CalendarDate>(), Err(FormatError::NonexistentDate(_))));
    assert!(matches!("1::2::3".parse::<Ipv6Literal>(), Err(FormatError::Ipv6(_))));
    assert!(matches!("abc".parse::<Guid>(), Err(FormatError::Guid(_))));
}

#[test]
fn test_predicates_log_rejections() {
    let rejected = vec![
        ("ipv6", events_during(|| assert!(!is_valid_ipv6("::g")))),
        ("guid", events_during(|| assert!(!is_valid_guid("not-a-guid")))),
        ("date layout", events_during(|| assert!(parse_strict_date("2021-01-01").is_none()))),
        ("date calendar", events_during(|| assert!(parse_strict_date("31/02/2021").is_none()))),
    ];

    for (check, events) in rejected {
        assert!(events >= 1, "Expected a rejection event from {check}");
    }
}

#[test]
fn test_predicates_stay_quiet_on_acceptance() {
    let accepted = events_during(|| {
        assert!(is_valid_ipv6("::1"));
        assert!(is_valid_guid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(parse_strict_date("29/02/2024").is_some());
    });
    assert_eq!(accepted, 0);
}
