use local_datetime::LocalDate;
use local_datetime::DatePiece;


#[test]
fn start_of_year_day() {
    let date = LocalDate::ymd(2015, 1, 1);
    assert_eq!(date.yearday(), 1);
}


#[test]
fn end_of_year_day() {
    let date = LocalDate::ymd(2015, 12, 31);
    assert_eq!(date.yearday(), 365);
}


#[test]
fn end_of_leap_year_day() {
    let date = LocalDate::ymd(2016, 12, 31);
    assert_eq!(date.yearday(), 366);
}


#[test]
fn yearday() {
    for year in 1..2058 {
        assert_eq!( LocalDate::ymd(year,  1, 31).yearday() + 1,
                    LocalDate::ymd(year,  2,  1).yearday());
        assert_eq!( LocalDate::ymd(year,  3, 31).yearday() + 1,
                    LocalDate::ymd(year,  4,  1).yearday());
        assert_eq!( LocalDate::ymd(year,  4, 30).yearday() + 1,
                    LocalDate::ymd(year,  5,  1).yearday());
        assert!(    LocalDate::ymd(year, 12, 31).yearday() > 0);
    }
    assert_eq!( LocalDate::ymd(1600, 2, 29).yearday() + 1, // leap year
                LocalDate::ymd(1600, 3,  1).yearday());
    assert_eq!( LocalDate::ymd(1601, 2, 28).yearday() + 1, // no leap year
                LocalDate::ymd(1601, 3,  1).yearday());
}
