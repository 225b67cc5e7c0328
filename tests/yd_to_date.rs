use local_datetime::{LocalDate, Month};
use local_datetime::DatePiece;


#[test]
fn day_start_of_year() {
    let date = LocalDate::yd(2015, 1);
    assert_eq!(2015, date.year());
    assert_eq!(Month::January, date.month());
    assert_eq!(1, date.day());
}


#[test]
fn from_yearday() {
    for date in vec![
        LocalDate::ymd(1970,  1,  1),
        LocalDate::ymd(1971,  1,  1),
        LocalDate::ymd(1973,  1,  1),
        LocalDate::ymd(1977,  1,  1),
        LocalDate::ymd(1989, 11, 10),
        LocalDate::ymd(1990,  7,  8),
        LocalDate::ymd(2014,  7, 13),
        LocalDate::ymd(2001,  2,  3),
        LocalDate::ymd(2000, 12, 31),
    ]{
        let new_date = LocalDate::yd(date.year(), i64::from(date.yearday()));
        assert_eq!(new_date, date);
        assert_eq!(new_date.yearday(), date.yearday());
    }
}


#[test]
fn out_of_range_days() {
    assert_eq!(LocalDate::yd(2020, 0), LocalDate::ymd(2019, 12, 31));
    assert_eq!(LocalDate::yd(2020, 367), LocalDate::ymd(2021, 1, 1));
    assert_eq!(LocalDate::yd(2021, 366), LocalDate::ymd(2022, 1, 1));
    assert_eq!(LocalDate::yd(2020, -1), LocalDate::ymd(2019, 12, 30));
}


#[test]
fn leap_years() {
    assert_eq!(LocalDate::yd(2020, 60), LocalDate::ymd(2020, 2, 29));
    assert_eq!(LocalDate::yd(2021, 60), LocalDate::ymd(2021, 3, 1));
}
