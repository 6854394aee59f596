use crate::{Booking, BookingConflict, BookingConflictInfo, BookingWindow, DateRange, Error};

/// Decide whether `candidate` may be booked.
///
/// Checked in order: `OutOfRange` when the candidate leaves `availability`,
/// then `InvertedRange`, then `DateConflict` against the first pending or
/// confirmed booking in `existing` sharing a day. Cancelled bookings are
/// skipped.
///
/// The booking pipeline runs this again inside the insert transaction.
pub fn validate_booking(
    candidate: DateRange,
    availability: &DateRange,
    existing: &[Booking],
) -> Result<DateRange, Error> {
    if !availability.contains(&candidate) {
        return Err(Error::OutOfRange);
    }

    if candidate.is_inverted() {
        return Err(Error::InvertedRange);
    }

    for booking in existing.iter().filter(|b| b.is_active()) {
        let booked = booking.date_range()?;
        if candidate.overlaps(&booked) {
            return Err(Error::DateConflict(BookingConflictInfo::Parsed(
                BookingConflict {
                    new: BookingWindow {
                        item_id: booking.item_id.clone(),
                        range: candidate,
                    },
                    old: BookingWindow {
                        item_id: booking.item_id.clone(),
                        range: booked,
                    },
                },
            )));
        }
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookingStatus;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn june() -> DateRange {
        DateRange::new(day(6, 1), day(6, 30))
    }

    fn confirmed(start: NaiveDate, end: NaiveDate) -> Booking {
        let mut b = Booking::new_pending("tyr", "camera-1", start, end);
        b.status = BookingStatus::Confirmed as i32;
        b
    }

    fn existing() -> Vec<Booking> {
        vec![confirmed(day(6, 10), day(6, 15))]
    }

    #[test]
    fn free_range_inside_window_should_pass() {
        let candidate = DateRange::new(day(6, 16), day(6, 20));
        assert_eq!(
            validate_booking(candidate, &june(), &existing()).unwrap(),
            candidate
        );
    }

    #[test]
    fn overlapping_range_should_conflict() {
        let candidate = DateRange::new(day(6, 14), day(6, 16));
        let err = validate_booking(candidate, &june(), &existing()).unwrap_err();
        let info = BookingConflictInfo::Parsed(BookingConflict {
            new: BookingWindow {
                item_id: "camera-1".into(),
                range: candidate,
            },
            old: BookingWindow {
                item_id: "camera-1".into(),
                range: DateRange::new(day(6, 10), day(6, 15)),
            },
        });
        assert_eq!(err, Error::DateConflict(info));
    }

    #[test]
    fn range_starting_before_window_should_be_out_of_range() {
        let candidate = DateRange::new(day(5, 28), day(6, 5));
        assert_eq!(
            validate_booking(candidate, &june(), &existing()).unwrap_err(),
            Error::OutOfRange
        );
    }

    #[test]
    fn range_ending_after_window_should_be_out_of_range() {
        let candidate = DateRange::new(day(6, 28), day(7, 2));
        assert_eq!(
            validate_booking(candidate, &june(), &[]).unwrap_err(),
            Error::OutOfRange
        );
    }

    #[test]
    fn inverted_range_should_be_rejected() {
        let candidate = DateRange::new(day(6, 20), day(6, 18));
        assert_eq!(
            validate_booking(candidate, &june(), &existing()).unwrap_err(),
            Error::InvertedRange
        );
    }

    #[test]
    fn window_check_should_come_before_inversion() {
        let candidate = DateRange::new(day(5, 20), day(5, 10));
        assert_eq!(
            validate_booking(candidate, &june(), &[]).unwrap_err(),
            Error::OutOfRange
        );

        // both ends inside june, only reversed
        let candidate = DateRange::new(day(7, 5), day(6, 28));
        assert_eq!(
            validate_booking(candidate, &june(), &[]).unwrap_err(),
            Error::InvertedRange
        );
    }

    #[test]
    fn single_shared_day_should_conflict() {
        for candidate in [
            DateRange::new(day(6, 15), day(6, 15)),
            DateRange::new(day(6, 5), day(6, 10)),
            DateRange::new(day(6, 15), day(6, 25)),
            DateRange::new(day(6, 1), day(6, 30)),
        ] {
            assert!(matches!(
                validate_booking(candidate, &june(), &existing()),
                Err(Error::DateConflict(_))
            ));
        }
    }

    #[test]
    fn adjacent_ranges_should_pass() {
        for candidate in [
            DateRange::new(day(6, 16), day(6, 16)),
            DateRange::new(day(6, 1), day(6, 9)),
            DateRange::new(day(6, 9), day(6, 9)),
        ] {
            assert!(validate_booking(candidate, &june(), &existing()).is_ok());
        }
    }

    #[test]
    fn cancelled_bookings_should_not_block() {
        let mut cancelled = confirmed(day(6, 10), day(6, 15));
        cancelled.status = BookingStatus::Cancelled as i32;
        let candidate = DateRange::new(day(6, 12), day(6, 13));
        assert!(validate_booking(candidate, &june(), &[cancelled]).is_ok());
    }

    #[test]
    fn pending_bookings_should_block() {
        let pending = Booking::new_pending("alice", "camera-1", day(6, 20), day(6, 22));
        let candidate = DateRange::new(day(6, 22), day(6, 24));
        assert!(matches!(
            validate_booking(candidate, &june(), &[pending]),
            Err(Error::DateConflict(_))
        ));
    }

    #[test]
    fn whole_window_should_pass_when_nothing_is_booked() {
        assert!(validate_booking(june(), &june(), &[]).is_ok());
    }
}
