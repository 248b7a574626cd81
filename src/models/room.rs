//! Room model.
//!
//! Rooms are shared resources with a fixed capacity and a shrinking set of
//! free timeslots. The scheduler is the only writer.

use serde::{Deserialize, Serialize};

use super::timeslot;

/// A room that courses can be scheduled into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier, e.g. "Room 101".
    pub id: String,
    /// Maximum number of students the room holds.
    pub capacity: i32,
    /// Timeslots the room is still free in.
    pub available_timeslots: Vec<String>,
}

impl Room {
    /// Creates a new room with no availability.
    pub fn new(id: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            capacity,
            available_timeslots: Vec::new(),
        }
    }

    /// Adds an available timeslot.
    pub fn with_timeslot(mut self, timeslot: impl Into<String>) -> Self {
        self.available_timeslots.push(timeslot.into());
        self
    }

    /// Sets the full availability list.
    pub fn with_timeslots(mut self, timeslots: Vec<String>) -> Self {
        self.available_timeslots = timeslots;
        self
    }

    /// Whether the room is still free at the given timeslot.
    pub fn is_available_at(&self, timeslot: &str) -> bool {
        self.available_timeslots.iter().any(|t| t == timeslot)
    }

    /// Records a committed assignment: releases the used timeslot.
    pub fn commit_assignment(&mut self, timeslot: &str) {
        timeslot::release(&mut self.available_timeslots, timeslot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("Room 101", 50).with_timeslot("Monday 9:00-11:00");

        assert_eq!(r.id, "Room 101");
        assert_eq!(r.capacity, 50);
        assert!(r.is_available_at("Monday 9:00-11:00"));
        assert!(!r.is_available_at("Tuesday 9:00-10:00"));
    }

    #[test]
    fn test_commit_assignment() {
        let mut r = Room::new("Room 101", 50)
            .with_timeslots(vec!["Monday 9:00-11:00".into(), "Tuesday 9:00-10:00".into()]);

        r.commit_assignment("Monday 9:00-11:00");

        assert!(!r.is_available_at("Monday 9:00-11:00"));
        assert!(r.is_available_at("Tuesday 9:00-10:00"));
    }
}
