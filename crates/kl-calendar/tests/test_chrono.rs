//! Interop with `chrono::NaiveDate`.

#![cfg(feature = "chrono")]

use chrono::NaiveDate;
use kl_calendar::SolarDate;
use kl_core::Error;

#[test]
fn gregorian_dates_convert_both_ways() {
    let naive = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let solar = SolarDate::try_from(naive).unwrap();
    assert_eq!(solar, SolarDate::new(2024, 2, 10).unwrap());
    assert_eq!(NaiveDate::try_from(solar).unwrap(), naive);

    let first = NaiveDate::from_ymd_opt(1582, 10, 15).unwrap();
    assert!(SolarDate::try_from(first).is_ok());
}

#[test]
fn julian_and_out_of_table_dates_are_refused() {
    let julian = SolarDate::new(1582, 10, 4).unwrap();
    assert!(matches!(NaiveDate::try_from(julian), Err(Error::OutOfRange(_))));
    let early = NaiveDate::from_ymd_opt(1500, 1, 1).unwrap();
    assert!(matches!(SolarDate::try_from(early), Err(Error::OutOfRange(_))));
    let late = NaiveDate::from_ymd_opt(2051, 1, 1).unwrap();
    assert!(matches!(SolarDate::try_from(late), Err(Error::OutOfRange(_))));
}
