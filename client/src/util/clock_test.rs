use super::*;

#[test]
fn now_millis_is_after_2024() {
    assert!(now_millis() > 1_704_067_200_000);
}

#[test]
fn local_date_parts_are_in_range() {
    let (hour, day, month) = local_date_parts();
    assert!(hour < 24);
    assert!((1..=31).contains(&day));
    assert!(month < 12);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn date_parts_use_zero_based_months() {
    use time::macros::datetime;

    assert_eq!(date_parts(datetime!(1970-01-01 0:00 UTC)), (0, 1, 0));
    assert_eq!(date_parts(datetime!(2024-02-29 13:05 UTC)), (13, 29, 1));
    assert_eq!(date_parts(datetime!(2026-12-31 23:59 UTC)), (23, 31, 11));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sleep_completes_on_host() {
    futures::executor::block_on(sleep(Duration::from_secs(5)));
}
