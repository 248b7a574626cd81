//! Timeslot string helpers.
//!
//! A timeslot is a textual interval such as "Monday 9:00-11:00". It is
//! used verbatim as a schedule key and as an availability-set member; no
//! calendar arithmetic is performed on it.

/// Splits a timeslot into start and end on the `-` separator.
///
/// `"Monday 9:00-11:00"` yields `("Monday 9:00", "11:00")`. A timeslot
/// with no separator yields the full string as start and an empty end.
pub fn split_times(timeslot: &str) -> (String, String) {
    match timeslot.split_once('-') {
        Some((start, end)) => (start.to_string(), end.to_string()),
        None => (timeslot.to_string(), String::new()),
    }
}

/// Removes the first occurrence of a timeslot from an availability list.
///
/// No-op when the timeslot is not present.
pub fn release(timeslots: &mut Vec<String>, timeslot: &str) {
    if let Some(pos) = timeslots.iter().position(|t| t == timeslot) {
        timeslots.remove(pos);
    }
}
