//! Inline snapshots pinning the rendered forms: `Debug` for any unit
//! type, `Display` for `char` and byte strings.

use unitstr::UnitString;

#[test]
fn snapshot_debug_char() {
    let s = UnitString::<char>::from("Hi!");
    insta::assert_snapshot!(
        format!("{s:?}"),
        @"UnitString { len: 3, capacity: 4, units: ['H', 'i', '!'] }"
    );
}

#[test]
fn snapshot_debug_bytes() {
    let s = UnitString::<u8>::from("Hi!");
    insta::assert_snapshot!(
        format!("{s:?}"),
        @"UnitString { len: 3, capacity: 4, units: [72, 105, 33] }"
    );
}

#[test]
fn snapshot_debug_empty() {
    let s = UnitString::<u16>::new();
    insta::assert_snapshot!(
        format!("{s:?}"),
        @"UnitString { len: 0, capacity: 0, units: [] }"
    );
}

#[test]
fn snapshot_display_char() {
    let mut s = UnitString::<char>::from("Hello World!");
    insta::assert_snapshot!(format!("{s}"), @"Hello World!");
    insta::assert_snapshot!(format!("{}", s.make_upper()), @"HELLO WORLD!");
}

#[test]
fn snapshot_display_bytes() {
    let s = UnitString::<u8>::from("Hello World!");
    insta::assert_snapshot!(format!("{s}"), @"Hello World!");

    let sub = s.substring(6..);
    insta::assert_snapshot!(format!("{sub}"), @"World!");
}
