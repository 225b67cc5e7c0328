use local_datetime::{LocalDateTime, Instant, Month};
use local_datetime::{DatePiece, TimePiece};


macro_rules! test {
    ($name: ident: $seconds: expr => $year: expr, $month: ident, $day: expr, $hour: expr, $minute: expr, $second: expr) => {
        #[test]
        fn $name() {
            let date = LocalDateTime::at($seconds);

            assert_eq!(date.year(),   $year);
            assert_eq!(date.month(),  Month::$month);
            assert_eq!(date.day(),    $day);
            assert_eq!(date.hour(),   $hour);
            assert_eq!(date.minute(), $minute);
            assert_eq!(date.second(), $second);

            assert_eq!(LocalDateTime::from_instant(Instant::at($seconds)), date);
        }
    };
}

test!(a_long_time_ago:     -1_000_000_000        => 1938, April,     24, 22, 13, 20);
test!(unix_epoch:          0                     => 1970, January,    1,  0,  0,  0);
test!(one_second_before:   -1                    => 1969, December,  31, 23, 59, 59);
test!(billennium:          1_000_000_000         => 2001, September,  9,  1, 46, 40);
test!(numbers:             1_234_567_890         => 2009, February,  13, 23, 31, 30);
test!(year_2038_problem:   0x7FFF_FFFF           => 2038, January,   19,  3, 14,  7);
test!(the_last_day:        9_223_372_036_854_633_600 => 292_277_026_596, December, 3, 0, 0, 0);
test!(the_end_of_time:     0x7FFF_FFFF_FFFF_FFFF => 292_277_026_596, December, 3, 23, 59, 59);
test!(just_some_date:      146_096 * 86400       => 2369, December,  31,  0,  0,  0);
test!(leap_year_some_date: 1_459_468_800         => 2016, April,      1,  0,  0,  0);
test!(leap_year_29th_feb:  1_456_704_000         => 2016, February,  29,  0,  0,  0);
test!(year_zero:           -62_167_219_200       => 0,    January,    1,  0,  0,  0);
test!(year_one:            -62_135_596_800       => 1,    January,    1,  0,  0,  0);


#[test]
fn nanoseconds_are_dropped() {
    let then = LocalDateTime::from(Instant::at_ns(1_234_567_890, 999_999_999));
    assert_eq!(then, LocalDateTime::at(1_234_567_890));
}

#[test]
fn past_the_end_is_clamped() {
    let last = LocalDateTime::at(i64::MAX);
    assert_eq!(LocalDateTime::at(last.unix()), last);
    assert_eq!(last.unix(), 9_223_372_036_854_719_999);

    let first = LocalDateTime::at(i64::MIN);
    assert_eq!(first.unix(), -9_223_372_036_854_633_600);
    assert_eq!((first.hour(), first.minute(), first.second()), (0, 0, 0));
}
