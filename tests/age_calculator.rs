// End-to-end behavior of the date-of-birth field: masking, validation and age.
use agecalc::{AgeBreakdown, AgeError, CalendarPolicy, MaskedDate, Snapshot, calculate_age};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn age(years: u32, months: u32, days: u32) -> AgeBreakdown {
    AgeBreakdown {
        years,
        months,
        days,
    }
}

fn strict(input: &str, today: NaiveDate) -> Result<AgeBreakdown, AgeError> {
    calculate_age(input, today, CalendarPolicy::Strict)
}

#[test]
fn test_mask_length_and_separator_positions() {
    let digits = "3112199945";
    for len in 0..=digits.len() {
        let masked = MaskedDate::from_input(&digits[..len]);
        let expected = (len + usize::from(len >= 2) + usize::from(len >= 4)).min(10);
        assert_eq!(masked.len(), expected, "digits {}", &digits[..len]);

        let bytes = masked.as_str().as_bytes();
        if len >= 2 {
            assert_eq!(bytes[2], b'/');
        }
        if len >= 4 {
            assert_eq!(bytes[5], b'/');
        }
        assert_eq!(bytes.iter().filter(|b| **b == b'/').count(), expected - len.min(8));
    }
}

#[test]
fn test_mask_is_idempotent_on_complete_input() {
    for raw in ["01/01/2000", "31121999", "x0x7x0x4x1x9x8x8x"] {
        let once = MaskedDate::from_input(raw);
        assert!(once.is_complete());
        assert_eq!(MaskedDate::from_input(once.as_str()), once);
    }
}

#[test]
fn test_age_with_fixed_today() {
    assert_eq!(strict("01/01/2000", date(2024, 6, 15)), Ok(age(24, 5, 14)));
}

#[test]
fn test_future_date_rejected() {
    assert_eq!(
        strict("31/12/2024", date(2024, 1, 1)),
        Err(AgeError::FutureDate)
    );
}

#[test]
fn test_year_1900_boundary() {
    let today = date(2024, 6, 15);
    assert_eq!(strict("01/01/1899", today), Err(AgeError::OutOfRange));
    assert!(strict("01/01/1900", today).is_ok());
}

#[test]
fn test_born_today_is_zero() {
    assert_eq!(strict("15/06/2024", date(2024, 6, 15)), Ok(age(0, 0, 0)));
}

#[test]
fn test_day_borrow_from_march() {
    assert_eq!(strict("20/03/2000", date(2024, 4, 5)), Ok(age(24, 0, 16)));
}

#[test]
fn test_month_borrow_never_negative() {
    let today = date(2024, 3, 10);
    for month in 4..=12 {
        let input = format!("05/{month:02}/1990");
        let result = strict(&input, today).unwrap();
        assert_eq!(result.years, 33, "{input}");
        assert_eq!(result.months, 3 + 12 - month, "{input}");
        assert_eq!(result.days, 5, "{input}");
    }
}

#[test]
fn test_components_stay_in_range_over_a_leap_year() {
    let today = date(2024, 3, 1);
    let mut birth = date(2023, 1, 1);
    while birth <= today {
        let input = birth.format("%d/%m/%Y").to_string();
        let result = strict(&input, today).unwrap();
        assert!(result.months <= 11, "{input}: {result:?}");
        assert!(result.days <= 30, "{input}: {result:?}");
        birth = birth.succ_opt().unwrap();
    }
}

#[test]
fn test_malformed_input_is_distinct() {
    let today = date(2024, 6, 15);
    assert_eq!(strict("31/02/2000", today), Err(AgeError::MalformedInput));
    assert_eq!(strict("12/34/5678", today), Err(AgeError::MalformedInput));
    assert_eq!(strict("2000-01-01", today), Err(AgeError::MalformedInput));
}

#[test]
fn test_snapshot_keystroke_sequence() {
    let today = date(2024, 6, 15);
    let policy = CalendarPolicy::Strict;

    let mut snap = Snapshot::new().focus();
    let mut field = String::new();
    let mut seen = Vec::new();
    for key in "15061990".chars() {
        field.push(key);
        snap = snap.apply(&field, today, policy);
        field = snap.input().to_string();
        seen.push(field.clone());
        if !snap.input().is_complete() {
            assert_eq!(snap.result(), None);
            assert_eq!(snap.error(), None);
        }
    }

    assert_eq!(
        seen,
        [
            "1", "15/", "15/0", "15/06/", "15/06/1", "15/06/19", "15/06/199", "15/06/1990"
        ]
    );
    assert_eq!(snap.result(), Some(age(34, 0, 0)));

    // Typing a different year replaces the result with an error.
    let snap = snap.apply("15/06/2090", today, policy);
    assert_eq!(snap.result(), None);
    assert_eq!(snap.error(), Some(AgeError::FutureDate));

    // Any edit clears it again.
    let snap = snap.apply("15/06/209", today, policy);
    assert_eq!(snap.error(), None);
    assert_eq!(snap.result(), None);
}
