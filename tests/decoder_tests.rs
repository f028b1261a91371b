mod common;
use common::{dt, serial_of};
use rtimesheet::core::decoder::{DecodeError, decode_lenient, excel_serial_to_datetime};

#[test]
fn test_serial_one_is_last_day_of_1899_at_midnight() {
    let decoded = excel_serial_to_datetime(1.0).expect("serial 1 must decode");
    assert_eq!(decoded, dt(1899, 12, 31, 0, 0));
}

#[test]
fn test_half_day_fraction_is_local_noon() {
    let decoded = excel_serial_to_datetime(45446.5).unwrap();
    assert_eq!(decoded, dt(2024, 6, 3, 12, 0));
}

#[test]
fn test_clock_times_survive_float_representation() {
    for (h, mi) in [(6, 30), (15, 35), (0, 1), (23, 59), (13, 59), (14, 0)] {
        let expected = dt(2024, 6, 3, h, mi);
        assert_eq!(
            excel_serial_to_datetime(serial_of(expected)).unwrap(),
            expected,
            "{h:02}:{mi:02} decoded wrongly"
        );
    }
}

#[test]
fn test_seconds_are_decoded() {
    // 06:30:15 → 23415 s
    let serial = 45446.0 + 23415.0 / 86400.0;
    let decoded = excel_serial_to_datetime(serial).unwrap();
    assert_eq!(decoded.format("%H:%M:%S").to_string(), "06:30:15");
}

#[test]
fn test_non_positive_and_non_finite_serials_fail() {
    assert_eq!(excel_serial_to_datetime(0.0), Err(DecodeError::NonPositive(0.0)));
    assert_eq!(excel_serial_to_datetime(-3.5), Err(DecodeError::NonPositive(-3.5)));
    assert_eq!(excel_serial_to_datetime(f64::NAN), Err(DecodeError::NotFinite));
    assert_eq!(excel_serial_to_datetime(f64::INFINITY), Err(DecodeError::NotFinite));
    assert!(decode_lenient(f64::NEG_INFINITY).is_none());
}

#[test]
fn test_out_of_calendar_serial_fails() {
    assert!(matches!(
        excel_serial_to_datetime(1e20),
        Err(DecodeError::OutOfRange(_))
    ));
}

#[test]
fn test_date_part_matches_floor_of_serial() {
    let serials = [
        1.25,
        61.999,
        25569.0001,
        43831.75,
        45446.270833333336,
        45446.99999999,
        45657.9999999999,
    ];

    for s in serials {
        let full = excel_serial_to_datetime(s).unwrap();
        let floor = excel_serial_to_datetime(s.floor()).unwrap();
        assert_eq!(full.date(), floor.date(), "date part differs for {s}");
    }
}

#[test]
fn test_fraction_close_to_midnight_is_clamped_to_last_second() {
    let decoded = excel_serial_to_datetime(45446.99999999).unwrap();
    assert_eq!(decoded.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-06-03 23:59:59");
}

#[test]
fn test_decoding_is_deterministic() {
    let s = 45461.6493055555;
    let first = excel_serial_to_datetime(s);
    for _ in 0..10 {
        assert_eq!(excel_serial_to_datetime(s), first);
    }
}
