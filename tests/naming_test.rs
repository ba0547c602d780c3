//! Naming properties: source URL layout and destination blob names.

use chrono::NaiveDate;
use covers_cli::fetcher::cover_url;
use covers_cli::models::CoverDate;

fn date(year: i32, month: u32, day: u32) -> CoverDate {
    CoverDate::from(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

#[test]
fn test_source_url_matches_published_layout() {
    let url = cover_url("https://static01.nyt.com/images", date(2024, 3, 7)).unwrap();
    assert_eq!(
        url.as_str(),
        "https://static01.nyt.com/images/2024/03/07/nytfrontpage/scan.pdf"
    );
}

#[test]
fn test_source_url_pads_every_single_digit_component() {
    for month in 1..=9 {
        for day in [1, 9] {
            let url = cover_url("https://static01.nyt.com/images", date(2024, month, day)).unwrap();
            let expected = format!("/images/2024/{month:02}/{day:02}/nytfrontpage/scan.pdf");
            assert_eq!(url.path(), expected);
        }
    }
}

#[test]
fn test_source_url_keeps_double_digit_components() {
    let url = cover_url("https://static01.nyt.com/images", date(2023, 12, 25)).unwrap();
    assert_eq!(
        url.path(),
        "/images/2023/12/25/nytfrontpage/scan.pdf"
    );
}

#[test]
fn test_blob_name_derives_from_the_same_date() {
    let d = date(2024, 3, 7);
    assert_eq!(d.blob_name(), "2024_03_07.pdf");

    let d = date(2025, 10, 1);
    assert_eq!(d.blob_name(), "2025_10_01.pdf");
}

#[test]
fn test_arbitrary_dates_are_accepted() {
    // No validation on the date itself: old or future dates still form a URL
    // and a name, and the server decides whether anything is there.
    let old = date(1999, 1, 1);
    assert!(cover_url("https://static01.nyt.com/images", old).is_ok());
    assert_eq!(old.blob_name(), "1999_01_01.pdf");
}
