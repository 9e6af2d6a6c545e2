pub mod booking;
pub mod display_schedule;
pub mod error;
pub mod make_schedule;
pub mod parse_request;
pub mod response;

use display_schedule::display_schedule;
use error::ScheduleError;
use make_schedule::make_schedule;
use parse_request::parse_request;

/// Turns a raw booking request batch into the formatted delivery schedule.
pub fn create_delivery_schedule(content: &str) -> Result<String, ScheduleError> {
    let (hours, orders) = parse_request(content)?;
    let schedule = make_schedule(&hours, orders);
    Ok(display_schedule(&schedule))
}
