//! First-fit course scheduler.
//!
//! # Algorithm
//!
//! For one course: walk its student groups in list order, and for each
//! resolved group walk the rooms in table order. The first (group, room)
//! candidate that passes every hard constraint is committed: a slot is
//! appended to the timetable, the lecturer's workload grows by the
//! course's duration, and the used timeslot is released from both the
//! room's and the lecturer's availability. At most one slot is produced
//! per course, even when the course lists several groups.
//!
//! Commits mutate the shared resource tables immediately, so earlier
//! courses in the input sequence have first claim on contested rooms and
//! lecturer timeslots. There is no scoring and no backtracking: a course
//! that exhausts its candidates fails, and the run moves on.
//!
//! # Complexity
//! O(g * r) per course, where g = listed groups, r = rooms.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::constraints;
use crate::error::TimetableError;
use crate::models::{Course, Lecturer, Room, StudentGroup, Timetable, TimetableSlot};

/// First-fit scheduler owning the run's mutable resource tables.
///
/// The scheduler is the single writer of lecturer workload and
/// room/lecturer availability; all mutation funnels through the commit
/// step of a successful assignment. Courses are processed strictly
/// sequentially, which makes resource contention first-come-first-served.
#[derive(Debug, Clone)]
pub struct Scheduler {
    lecturers: Vec<Lecturer>,
    rooms: Vec<Room>,
    groups: Vec<StudentGroup>,
    /// Name-keyed lecturer lookup, built once per run. Courses reference
    /// lecturers by name; the first record wins on duplicate names.
    lecturer_index: HashMap<String, usize>,
}

impl Scheduler {
    /// Creates a scheduler over the run's resource tables.
    pub fn new(lecturers: Vec<Lecturer>, rooms: Vec<Room>, groups: Vec<StudentGroup>) -> Self {
        let mut lecturer_index = HashMap::new();
        for (idx, lecturer) in lecturers.iter().enumerate() {
            lecturer_index.entry(lecturer.name.clone()).or_insert(idx);
        }
        Self {
            lecturers,
            rooms,
            groups,
            lecturer_index,
        }
    }

    /// The lecturer table in its current state.
    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    /// The room table in its current state.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The student group table.
    pub fn groups(&self) -> &[StudentGroup] {
        &self.groups
    }

    /// Attempts to place one course.
    ///
    /// Returns `Ok(true)` when a candidate was committed and `Ok(false)`
    /// when every candidate violated a constraint. A failed course leaves
    /// the resource tables untouched.
    ///
    /// # Errors
    /// [`TimetableError::UnknownLecturer`] when the course names a
    /// lecturer missing from the table. Group ids missing from the group
    /// table are skipped silently, so a course whose group ids all dangle
    /// fails without ever resolving the lecturer.
    pub fn schedule_course(
        &mut self,
        course: &Course,
        timetable: &mut Timetable,
    ) -> Result<bool, TimetableError> {
        for group_id in &course.student_groups {
            let group_idx = match self.groups.iter().position(|g| &g.id == group_id) {
                Some(idx) => idx,
                None => {
                    debug!(
                        course = %course.code,
                        group = %group_id,
                        "skipping unknown student group"
                    );
                    continue;
                }
            };

            for room_idx in 0..self.rooms.len() {
                let lecturer_idx = *self
                    .lecturer_index
                    .get(course.lecturer.as_str())
                    .ok_or_else(|| TimetableError::UnknownLecturer {
                        course: course.code.clone(),
                        lecturer: course.lecturer.clone(),
                    })?;

                let lecturer = &self.lecturers[lecturer_idx];
                let room = &self.rooms[room_idx];
                let group = &self.groups[group_idx];

                match constraints::check(course, lecturer, room, group) {
                    Ok(()) => {
                        let slot = TimetableSlot::new(course, lecturer, room);
                        info!(
                            course = %course.code,
                            name = %course.name,
                            group = %group_id,
                            room = %slot.room,
                            start = %slot.start_time,
                            end = %slot.end_time,
                            "scheduled"
                        );
                        timetable.add_slot(slot);
                        self.commit(lecturer_idx, room_idx, course);
                        return Ok(true);
                    }
                    Err(violation) => {
                        debug!(
                            course = %course.code,
                            room = %self.rooms[room_idx].id,
                            group = %group_id,
                            %violation,
                            "candidate rejected"
                        );
                    }
                }
            }
        }

        warn!(
            course = %course.code,
            "failed to schedule: no candidate satisfied the constraints"
        );
        Ok(false)
    }

    /// Schedules every course in input order.
    ///
    /// Per-course failures do not stop the run; the returned timetable
    /// holds one slot per scheduled course, in scheduling order.
    ///
    /// # Errors
    /// Propagates the fatal [`TimetableError::UnknownLecturer`].
    pub fn run(&mut self, courses: &[Course]) -> Result<Timetable, TimetableError> {
        let mut timetable = Timetable::new();
        let mut scheduled = 0usize;

        for course in courses {
            if self.schedule_course(course, &mut timetable)? {
                scheduled += 1;
            }
        }

        info!(
            scheduled,
            failed = courses.len() - scheduled,
            "scheduling pass complete"
        );
        Ok(timetable)
    }

    /// Commits a successful assignment to the resource tables. Called
    /// exactly once per scheduled course, after the constraint check.
    fn commit(&mut self, lecturer_idx: usize, room_idx: usize, course: &Course) {
        self.lecturers[lecturer_idx].commit_assignment(course.duration, &course.timeslot);
        self.rooms[room_idx].commit_assignment(&course.timeslot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smith() -> Lecturer {
        Lecturer::new("1", "Dr. Smith")
            .with_timeslot("Monday 9:00-11:00")
            .with_timeslot("Wednesday 9:00-11:00")
    }

    fn room_101() -> Room {
        Room::new("Room 101", 50).with_timeslot("Monday 9:00-11:00")
    }

    fn group_a() -> StudentGroup {
        StudentGroup::new("Group A", 40).with_course("CS101")
    }

    fn group_b() -> StudentGroup {
        StudentGroup::new("Group B", 35).with_course("CS101")
    }

    fn cs101() -> Course {
        Course::new("CS101", "Dr. Smith", 2, "Monday 9:00-11:00")
            .with_name("Introduction to Programming")
            .with_group("Group A")
            .with_group("Group B")
    }

    #[test]
    fn test_schedules_and_commits() {
        let mut scheduler = Scheduler::new(vec![smith()], vec![room_101()], vec![group_a()]);
        let mut timetable = Timetable::new();

        let scheduled = scheduler.schedule_course(&cs101(), &mut timetable).unwrap();
        assert!(scheduled);

        assert_eq!(timetable.slot_count(), 1);
        let slot = &timetable.slots()[0];
        assert_eq!(slot.course_code, "CS101");
        assert_eq!(slot.lecturer, "Dr. Smith");
        assert_eq!(slot.room, "Room 101");
        assert_eq!(slot.start_time, "Monday 9:00");
        assert_eq!(slot.end_time, "11:00");

        // Commit effects: workload grew, timeslot released on both sides.
        assert_eq!(scheduler.lecturers()[0].workload, 2);
        assert!(!scheduler.lecturers()[0].is_available_at("Monday 9:00-11:00"));
        assert!(scheduler.lecturers()[0].is_available_at("Wednesday 9:00-11:00"));
        assert!(!scheduler.rooms()[0].is_available_at("Monday 9:00-11:00"));
    }

    #[test]
    fn test_failed_course_leaves_state_unchanged() {
        // Room too small for either group: every candidate fails.
        let small = Room::new("Room 1", 10).with_timeslot("Monday 9:00-11:00");
        let mut scheduler =
            Scheduler::new(vec![smith()], vec![small], vec![group_a(), group_b()]);
        let mut timetable = Timetable::new();

        let scheduled = scheduler.schedule_course(&cs101(), &mut timetable).unwrap();
        assert!(!scheduled);

        assert!(timetable.is_empty());
        assert_eq!(scheduler.lecturers()[0].workload, 0);
        assert!(scheduler.lecturers()[0].is_available_at("Monday 9:00-11:00"));
        assert!(scheduler.rooms()[0].is_available_at("Monday 9:00-11:00"));
    }

    #[test]
    fn test_unknown_group_skipped() {
        let course = Course::new("CS101", "Dr. Smith", 2, "Monday 9:00-11:00")
            .with_group("Ghost Group")
            .with_group("Group A");
        let mut scheduler = Scheduler::new(vec![smith()], vec![room_101()], vec![group_a()]);
        let mut timetable = Timetable::new();

        let scheduled = scheduler.schedule_course(&course, &mut timetable).unwrap();
        assert!(scheduled);
        assert_eq!(timetable.slot_count(), 1);
    }

    #[test]
    fn test_unknown_lecturer_is_fatal() {
        let course = Course::new("CS101", "Dr. Nobody", 2, "Monday 9:00-11:00")
            .with_group("Group A");
        let mut scheduler = Scheduler::new(vec![smith()], vec![room_101()], vec![group_a()]);
        let mut timetable = Timetable::new();

        let err = scheduler
            .schedule_course(&course, &mut timetable)
            .unwrap_err();
        assert!(matches!(
            err,
            TimetableError::UnknownLecturer { course, lecturer }
                if course == "CS101" && lecturer == "Dr. Nobody"
        ));
    }

    #[test]
    fn test_unknown_lecturer_with_dangling_groups_is_not_fatal() {
        // The lecturer lookup happens inside the candidate loop; a course
        // whose group ids all dangle never reaches it.
        let course = Course::new("CS101", "Dr. Nobody", 2, "Monday 9:00-11:00")
            .with_group("Ghost Group");
        let mut scheduler = Scheduler::new(vec![smith()], vec![room_101()], vec![group_a()]);
        let mut timetable = Timetable::new();

        let scheduled = scheduler.schedule_course(&course, &mut timetable).unwrap();
        assert!(!scheduled);
        assert!(timetable.is_empty());
    }

    #[test]
    fn test_single_assignment_per_course() {
        // Both groups fit; only the first produces a slot.
        let mut scheduler = Scheduler::new(
            vec![smith()],
            vec![room_101()],
            vec![group_a(), group_b()],
        );
        let mut timetable = Timetable::new();

        let scheduled = scheduler.schedule_course(&cs101(), &mut timetable).unwrap();
        assert!(scheduled);
        assert_eq!(timetable.slot_count(), 1);
        assert_eq!(scheduler.lecturers()[0].workload, 2);
    }

    #[test]
    fn test_groups_tried_in_list_order() {
        // Group A is too large for the room, Group B fits: the slot is
        // found through Group B after Group A's candidates fail.
        let room = Room::new("Room 1", 38).with_timeslot("Monday 9:00-11:00");
        let mut scheduler =
            Scheduler::new(vec![smith()], vec![room], vec![group_a(), group_b()]);
        let mut timetable = Timetable::new();

        let scheduled = scheduler.schedule_course(&cs101(), &mut timetable).unwrap();
        assert!(scheduled);
        assert_eq!(timetable.slot_count(), 1);
    }

    #[test]
    fn test_first_room_in_table_order_wins() {
        let rooms = vec![
            Room::new("Room 101", 50).with_timeslot("Monday 9:00-11:00"),
            Room::new("Room 102", 50).with_timeslot("Monday 9:00-11:00"),
        ];
        let mut scheduler = Scheduler::new(vec![smith()], rooms, vec![group_a()]);
        let mut timetable = Timetable::new();

        scheduler.schedule_course(&cs101(), &mut timetable).unwrap();
        assert_eq!(timetable.slots()[0].room, "Room 101");
        // The untouched room keeps its availability.
        assert!(scheduler.rooms()[1].is_available_at("Monday 9:00-11:00"));
    }

    #[test]
    fn test_contention_earlier_course_wins() {
        // Two courses, distinct lecturers, one room free at the shared
        // timeslot: the earlier course claims it, the later one fails.
        let lecturers = vec![
            smith(),
            Lecturer::new("2", "Dr. Johnson").with_timeslot("Monday 9:00-11:00"),
        ];
        let first = cs101();
        let second = Course::new("CS202", "Dr. Johnson", 2, "Monday 9:00-11:00")
            .with_group("Group A");
        let mut scheduler = Scheduler::new(lecturers, vec![room_101()], vec![group_a()]);

        let timetable = scheduler.run(&[first, second]).unwrap();

        assert_eq!(timetable.slot_count(), 1);
        assert_eq!(timetable.slots()[0].course_code, "CS101");
        // The loser's lecturer state is untouched.
        assert_eq!(scheduler.lecturers()[1].workload, 0);
        assert!(scheduler.lecturers()[1].is_available_at("Monday 9:00-11:00"));
    }

    #[test]
    fn test_workload_accumulates_across_courses() {
        let lecturer = Lecturer::new("1", "Dr. Smith")
            .with_timeslot("Monday 9:00-12:00")
            .with_timeslot("Tuesday 9:00-13:00");
        let rooms = vec![
            Room::new("Room 101", 50).with_timeslot("Monday 9:00-12:00"),
            Room::new("Room 102", 50).with_timeslot("Tuesday 9:00-13:00"),
        ];
        let first = Course::new("CS101", "Dr. Smith", 3, "Monday 9:00-12:00").with_group("Group A");
        let second = Course::new("CS201", "Dr. Smith", 4, "Tuesday 9:00-13:00").with_group("Group A");
        let mut scheduler = Scheduler::new(vec![lecturer], rooms, vec![group_a()]);

        let timetable = scheduler.run(&[first, second]).unwrap();

        // 3 hours committed; 3 + 4 breaches the cap, so CS201 fails.
        assert_eq!(timetable.slot_count(), 1);
        assert_eq!(scheduler.lecturers()[0].workload, 3);
    }

    #[test]
    fn test_run_continues_past_failures() {
        let lecturers = vec![
            smith(),
            Lecturer::new("3", "Prof. Adams").with_timeslot("Tuesday 9:00-10:00"),
        ];
        let rooms = vec![
            room_101(),
            Room::new("Room 103", 50).with_timeslot("Tuesday 9:00-10:00"),
        ];
        let unschedulable =
            Course::new("PHYS101", "Prof. Adams", 1, "Friday 9:00-10:00").with_group("Group A");
        let math = Course::new("MATH101", "Prof. Adams", 1, "Tuesday 9:00-10:00")
            .with_group("Group A");
        let mut scheduler = Scheduler::new(lecturers, rooms, vec![group_a()]);

        let timetable = scheduler.run(&[cs101(), unschedulable, math]).unwrap();

        let codes: Vec<&str> = timetable
            .slots()
            .iter()
            .map(|s| s.course_code.as_str())
            .collect();
        assert_eq!(codes, vec!["CS101", "MATH101"]);
    }

    #[test]
    fn test_duplicate_lecturer_name_first_record_wins() {
        let lecturers = vec![
            Lecturer::new("1", "Dr. Smith").with_timeslot("Monday 9:00-11:00"),
            Lecturer::new("2", "Dr. Smith").with_timeslot("Monday 9:00-11:00"),
        ];
        let mut scheduler = Scheduler::new(lecturers, vec![room_101()], vec![group_a()]);
        let mut timetable = Timetable::new();

        scheduler.schedule_course(&cs101(), &mut timetable).unwrap();

        assert_eq!(scheduler.lecturers()[0].workload, 2);
        assert_eq!(scheduler.lecturers()[1].workload, 0);
    }
}
