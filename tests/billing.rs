//! Public API checks for twice-monthly billing dates.

use billing_date::{
    BillingDateCalculator, CalendarDate, DateComponent, DateError, Month, compute_billing_dates,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test]
fn test_leap_year_february() {
    let dates = compute_billing_dates(15, 30, 2020).unwrap();
    assert_eq!(&dates[2..4], [date("2020-02-15"), date("2020-02-29")]);
}

#[test]
fn test_common_year_february() {
    let dates = compute_billing_dates(15, 30, 2019).unwrap();
    assert_eq!(&dates[2..4], [date("2019-02-15"), date("2019-02-28")]);
}

#[test]
fn test_full_schedule_without_clamping() {
    let dates = compute_billing_dates(5, 20, 2020).unwrap();
    let expected: Vec<CalendarDate> = (1..=11)
        .flat_map(|m| {
            [
                CalendarDate::new(2020, m, 5).unwrap(),
                CalendarDate::new(2020, m, 20).unwrap(),
            ]
        })
        .collect();
    assert_eq!(dates.as_slice(), expected.as_slice());
}

#[test]
fn test_every_date_is_valid_and_ordered() {
    for year in 1995..=2030 {
        let dates = compute_billing_dates(31, 29, year).unwrap();
        assert_eq!(dates.len(), 22);
        for pair in dates.windows(2) {
            assert!(pair[0].month() <= pair[1].month());
        }
        for d in &dates {
            // Round-trips through text only if the date is real.
            assert_eq!(d.to_string().parse::<CalendarDate>().unwrap(), *d);
        }
    }
}

#[test]
fn test_rejects_out_of_range_inputs() {
    let err = compute_billing_dates(-1, 15, 2020).unwrap_err();
    assert!(matches!(
        err,
        DateError::InvalidDateComponent {
            component: DateComponent::Day,
            value: -1,
            ..
        }
    ));

    let err = compute_billing_dates(1, 15, 0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid year: 0 (must be 1-9999)");
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calculator = BillingDateCalculator::new(15, 30).unwrap().through_month(Month::DECEMBER);
    let handles: Vec<_> = (2019..2023)
        .map(|year| std::thread::spawn(move || calculator.compute(year).unwrap()))
        .collect();

    for (year, handle) in (2019..2023).zip(handles) {
        let dates = handle.join().unwrap();
        assert_eq!(dates, calculator.compute(year).unwrap());
        assert_eq!(dates.len(), 24);
    }
}
