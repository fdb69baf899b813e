pub mod schedule;

pub use schedule::{Interview, ScheduleRequest, Statistics, TimeSlotRange};
