//! Integration tests for faculty-rating and revenue aggregates

use degree_audit::aggregates::{top_rated_faculty, total_revenue};
use degree_audit::{Course, CourseSchedule, Department, FacultyProfile, SeatAssignment};

fn rated(id: &str, ratings: &[f64]) -> FacultyProfile {
    let mut profile = FacultyProfile::new(id.to_string(), format!("Prof {id}"));
    for &r in ratings {
        profile.add_rating(r);
    }
    profile
}

fn seat(price: u32) -> SeatAssignment {
    let course = Course::new("INFO5100".to_string(), "App Eng".to_string(), 4).unwrap();
    SeatAssignment::new(course, price, "s001".to_string())
}

#[test]
fn top_rated_is_first_on_tie() {
    let faculty = vec![
        rated("f01", &[3.5]),
        rated("f02", &[4.8]),
        rated("f03", &[4.8]),
        rated("f04", &[2.0]),
    ];

    let top = top_rated_faculty(&faculty).expect("non-empty roster");
    assert_eq!(top.id, "f02");
}

#[test]
fn top_rated_uses_the_average_not_the_peak() {
    // f01 has one high rating; f02 averages higher overall.
    let faculty = vec![rated("f01", &[5.0, 1.0]), rated("f02", &[4.0, 4.5])];

    let top = top_rated_faculty(&faculty).expect("non-empty roster");
    assert_eq!(top.id, "f02");
}

#[test]
fn top_rated_empty_is_none() {
    assert!(top_rated_faculty(&[]).is_none());
}

#[test]
fn revenue_matches_manual_sum() {
    let seats = vec![seat(1200), seat(950), seat(0), seat(1200)];
    assert_eq!(total_revenue(&seats), 3350);
}

#[test]
fn department_semester_revenue() {
    let mut department = Department::new("Information Systems".to_string());

    let mut fall = CourseSchedule::new("Fall2025".to_string());
    fall.add_seat_assignment(seat(1200));
    fall.add_seat_assignment(seat(950));
    department.add_schedule(fall);

    let spring = CourseSchedule::new("Spring2026".to_string());
    department.add_schedule(spring);

    assert_eq!(department.revenues_by_semester("Fall2025"), Some(2150));
    assert_eq!(department.revenues_by_semester("Spring2026"), Some(0));
    assert_eq!(department.revenues_by_semester("Summer2026"), None);
}

#[test]
fn department_top_professor_skips_unrated() {
    let mut department = Department::new("Information Systems".to_string());
    department.add_faculty(rated("f01", &[]));
    department.add_faculty(rated("f02", &[3.9]));

    let top = department.top_professor().expect("rated member present");
    assert_eq!(top.id, "f02");
}
