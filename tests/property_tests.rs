//! Property-based tests for rust_logger_facade using proptest

use proptest::prelude::*;
use rust_logger_facade::prelude::*;
use rust_logger_facade::{join_name, FieldSet};

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn capturing() -> (StdLogger, CaptureBuffer) {
    let (out, buf) = SharedWriter::buffer();
    let (err, _) = SharedWriter::buffer();
    let logger = StdLogger::builder()
        .out_sink(out)
        .err_sink(err)
        .termination_policy(TerminationPolicy::Propagate)
        .must_build();
    (logger, buf)
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Ordering follows the raw values
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as i8) <= (b as i8));
        prop_assert_eq!(a < b, (a as i8) < (b as i8));
    }

    /// Display tokens parse back, in any case
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        prop_assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        prop_assert_eq!(level.as_str().to_lowercase().parse::<Level>(), Ok(level));
        prop_assert_eq!(level.padded().len(), 6);
    }

    /// Raw values outside the defined range display as UNKNOWN
    #[test]
    fn test_level_name_of(raw in any::<i8>()) {
        let name = Level::name_of(raw);
        if (-1..=5).contains(&raw) {
            prop_assert_ne!(name, "UNKNOWN");
            prop_assert_eq!(Level::from_raw(raw).map(|l| l as i8), Some(raw));
        } else {
            prop_assert_eq!(name, "UNKNOWN");
        }
    }

    /// Only levels at or above the minimum reach the sink
    #[test]
    fn test_min_level_filter(min in any_level(), level in prop::sample::select(vec![
        Level::Debug, Level::Info, Level::Warn, Level::Error,
    ])) {
        let (out, buf) = SharedWriter::buffer();
        let logger = StdLogger::builder().out_sink(out).min_level(min).must_build();
        logger.log(level, "probe", &[]);
        prop_assert_eq!(buf.is_empty(), level < min);
    }
}

// ============================================================================
// Field Tests
// ============================================================================

proptest! {
    /// Integers render bare
    #[test]
    fn test_integer_field_is_bare(n in any::<i64>()) {
        prop_assert_eq!(field("n", n).to_string(), format!("n={}", n));
    }

    /// Everything that is not numeric is quoted
    #[test]
    fn test_text_field_is_quoted(s in ".{0,20}") {
        prop_assert_eq!(field("s", s.as_str()).to_string(), format!("s={:?}", s));
    }

    /// Accumulated fields come first, call-site fields after
    #[test]
    fn test_field_set_order(
        left in prop::collection::vec(segment(), 0..4),
        right in prop::collection::vec(segment(), 0..4),
    ) {
        let accumulated: Vec<Field> = left.iter().map(|k| field(k.as_str(), 1)).collect();
        let call_site: Vec<Field> = right.iter().map(|k| field(k.as_str(), 2)).collect();
        let set = FieldSet::new(&accumulated, &call_site);

        let keys: Vec<&str> = set.iter().map(Field::key).collect();
        let expected: Vec<&str> = left.iter().chain(right.iter()).map(String::as_str).collect();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(set.render_suffix().is_empty(), set.is_empty());
    }
}

// ============================================================================
// Derivation Tests
// ============================================================================

proptest! {
    /// Joined names are upper case and splitting a segment does not change them
    #[test]
    fn test_join_name(a in segment(), b in segment(), c in segment()) {
        let nested = join_name(&join_name(&a, &b), &c);
        let flat = join_name(&a, &format!("{}.{}", b, c));
        prop_assert_eq!(&nested, &flat);
        prop_assert_eq!(nested.clone(), nested.to_uppercase());
        prop_assert_eq!(join_name("", &a), a.to_uppercase());
    }

    /// Deriving children never changes the parent
    #[test]
    fn test_derivation_is_pure(
        name in segment(),
        keys in prop::collection::vec(segment(), 1..5),
    ) {
        let (root, _) = capturing();
        let parent = root.named(&name).with(&[field("base", 0)]);

        let extra: Vec<Field> = keys.iter().map(|k| field(k.as_str(), "v")).collect();
        let child = parent.with(&extra).named("child");

        prop_assert_eq!(parent.name(), name.to_uppercase());
        prop_assert_eq!(parent.fields().len(), 1);
        prop_assert_eq!(child.fields().len(), 1 + keys.len());
        prop_assert!(root.name().is_empty());
        prop_assert!(root.fields().is_empty());
    }
}

// ============================================================================
// Line and Error Tests
// ============================================================================

proptest! {
    /// Messages always produce exactly one line
    #[test]
    fn test_message_stays_on_one_line(msg in "[a-z \n\r\t]{0,30}") {
        let (logger, buf) = capturing();
        logger.info(&msg, &[]);
        let contents = buf.contents();
        prop_assert_eq!(contents.matches('\n').count(), 1);
        prop_assert!(contents.ends_with('\n'));
    }

    /// The returned error carries the same tail as the written line
    #[test]
    fn test_error_return_mirrors_line(
        name in segment(),
        msg in "[a-zA-Z0-9 ]{1,20}",
        value in any::<i32>(),
    ) {
        let (root, buf) = capturing();
        let logger = root.named(&name);
        let err = logger.error_return(&msg, &[field("v", value)]);

        let text = err.to_string();
        let tail = format!("{} (v={})", msg, value);
        let head = format!("{}: ", name.to_uppercase());
        prop_assert!(text.starts_with(&head));
        prop_assert!(text.ends_with(&tail));
        prop_assert!(buf.contents().trim_end().ends_with(&tail));
    }
}
