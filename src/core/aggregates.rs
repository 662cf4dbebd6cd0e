//! Aggregate queries over registrar collections
//!
//! Pure scans over caller-supplied snapshots: top-rated faculty selection
//! and seat-assignment revenue summation.

use crate::core::models::{FacultyProfile, SeatAssignment};

/// Select the faculty record with the strictly highest average rating.
///
/// Single left-to-right scan starting from `(0.0, None)`; a candidate wins
/// only on a strictly greater average, so ties keep the earliest-seen record
/// and a collection whose candidates all average `0.0` yields `None`, the
/// same as an empty collection. Any reimplementation must keep the
/// first-occurrence-wins tie break.
#[must_use]
pub fn top_rated_faculty(faculty: &[FacultyProfile]) -> Option<&FacultyProfile> {
    let mut best_rating = 0.0_f64;
    let mut best: Option<&FacultyProfile> = None;

    for profile in faculty {
        let rating = profile.average_overall_rating();
        if rating > best_rating {
            best_rating = rating;
            best = Some(profile);
        }
    }

    if let Some(profile) = best {
        crate::debug!(
            "top-rated faculty: {} (average {best_rating})",
            profile.id
        );
    }
    best
}

/// Sum the charged price across a semester's seat assignments.
///
/// The input is expected to already be filtered to one semester by the
/// schedule owner. Empty input sums to 0. Accumulation is 64-bit so
/// realistic tuition volumes cannot overflow.
#[must_use]
pub fn total_revenue(seats: &[SeatAssignment]) -> u64 {
    seats.iter().map(|sa| u64::from(sa.price)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn rated(id: &str, ratings: &[f64]) -> FacultyProfile {
        let mut profile = FacultyProfile::new(id.to_string(), format!("Prof {id}"));
        for &r in ratings {
            profile.add_rating(r);
        }
        profile
    }

    fn seat(price: u32) -> SeatAssignment {
        let course = Course::new("INFO5100".to_string(), "App Eng".to_string(), 4).unwrap();
        SeatAssignment::new(course, price, "001".to_string())
    }

    #[test]
    fn test_top_rated_picks_highest_average() {
        let faculty = vec![
            rated("f01", &[3.5]),
            rated("f02", &[4.8]),
            rated("f03", &[2.0]),
        ];

        let top = top_rated_faculty(&faculty).expect("non-empty collection");
        assert_eq!(top.id, "f02");
    }

    #[test]
    fn test_tie_keeps_earliest_record() {
        let faculty = vec![
            rated("f01", &[3.5]),
            rated("f02", &[4.8]),
            rated("f03", &[4.8]),
            rated("f04", &[2.0]),
        ];

        let top = top_rated_faculty(&faculty).expect("non-empty collection");
        assert_eq!(top.id, "f02");
    }

    #[test]
    fn test_empty_collection_yields_none() {
        assert!(top_rated_faculty(&[]).is_none());
    }

    #[test]
    fn test_all_zero_ratings_yield_none() {
        let faculty = vec![rated("f01", &[]), rated("f02", &[0.0, 0.0])];
        assert!(top_rated_faculty(&faculty).is_none());
    }

    #[test]
    fn test_unrated_record_never_beats_a_rated_one() {
        let faculty = vec![rated("f01", &[]), rated("f02", &[1.5])];

        let top = top_rated_faculty(&faculty).expect("rated record present");
        assert_eq!(top.id, "f02");
    }

    #[test]
    fn test_revenue_sums_prices() {
        let seats = vec![seat(1200), seat(950), seat(0), seat(1200)];
        assert_eq!(total_revenue(&seats), 3350);
    }

    #[test]
    fn test_revenue_empty_input_is_zero() {
        assert_eq!(total_revenue(&[]), 0);
    }

    #[test]
    fn test_revenue_accumulates_past_u32() {
        let seats = vec![seat(u32::MAX), seat(u32::MAX)];
        assert_eq!(total_revenue(&seats), u64::from(u32::MAX) * 2);
    }
}
