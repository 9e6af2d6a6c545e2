use crate::delivery_schedule::error::ScheduleError;

use serde::Serialize;

/// JSON body for a scheduling attempt: `{"deliverySchedule": ...}` on
/// success, `{"error": ...}` when the batch was rejected.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScheduleResponse {
    Schedule {
        #[serde(rename(serialize = "deliverySchedule"))]
        delivery_schedule: String,
    },
    Error {
        error: String,
    },
}

impl From<Result<String, ScheduleError>> for ScheduleResponse {
    fn from(result: Result<String, ScheduleError>) -> Self {
        match result {
            Ok(delivery_schedule) => ScheduleResponse::Schedule { delivery_schedule },
            Err(error) => ScheduleResponse::Error {
                error: error.to_string(),
            },
        }
    }
}
