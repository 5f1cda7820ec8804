mod clock;
mod controller;
mod objective;
mod scheduler;
mod tracker;

pub use clock::{Clock, ClockState};
pub use controller::TimerController;
pub use objective::{Objective, ObjectiveSchedule};
pub use scheduler::{due, Firing};
pub use tracker::NotificationTracker;
