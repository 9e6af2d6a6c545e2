use crate::delivery_schedule::booking::{BookingRequest, OperatingHours, RawBookingRequest};
use crate::delivery_schedule::error::{MalformedReason, ScheduleError};

use tracing::debug;

/// Splits a booking request batch into the shop's operating hours and one
/// `BookingRequest` per line pair, in input order.
///
/// Only the overall shape is checked here. Bad numbers inside a line pair
/// leave the request without a delivery window, and the scheduler drops it.
pub fn parse_request(
    content: &str,
) -> Result<(OperatingHours, Vec<BookingRequest>), ScheduleError> {
    if content.trim().is_empty() {
        return Err(ScheduleError::EmptyInput);
    }

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < 3 {
        debug!(line_count = lines.len(), "booking request is too short");
        return Err(ScheduleError::MalformedInput(MalformedReason::TooFewLines));
    }
    if lines.len() % 2 == 0 {
        debug!(line_count = lines.len(), "booking request has an even line count");
        return Err(ScheduleError::MalformedInput(MalformedReason::EvenLineCount));
    }

    let hours = parse_operating_hours(lines[0]);
    let orders: Vec<BookingRequest> = lines[1..]
        .chunks_exact(2)
        .map(|pair| read_raw_request(pair[0], pair[1]))
        .map(|raw| to_booking_request(&raw))
        .collect();

    debug!(
        opening = ?hours.opening,
        closing = ?hours.closing,
        orders = orders.len(),
        "parsed booking request"
    );

    Ok((hours, orders))
}

fn parse_operating_hours(line: &str) -> OperatingHours {
    let mut tokens = line.split_whitespace();
    OperatingHours {
        opening: tokens.next().and_then(parse_hhmm),
        closing: tokens.next().and_then(parse_hhmm),
    }
}

// 2022-03-17 10:17:06 001
// 2022-03-21 09:00 2
fn read_raw_request(request_line: &str, delivery_line: &str) -> RawBookingRequest {
    let mut request = request_line.split_whitespace();
    let mut delivery = delivery_line.split_whitespace();
    RawBookingRequest {
        request_date: next_token(&mut request),
        request_time: next_token(&mut request),
        employee_id: next_token(&mut request),
        delivery_date: next_token(&mut delivery),
        delivery_start: next_token(&mut delivery),
        duration_hours: next_token(&mut delivery),
    }
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> String {
    tokens.next().unwrap_or_default().to_string()
}

fn to_booking_request(raw: &RawBookingRequest) -> BookingRequest {
    let delivery_start = parse_hhmm(&raw.delivery_start.replacen(':', "", 1));
    let delivery_end = delivery_start.and_then(|start| {
        let hours: i64 = raw.duration_hours.parse().ok()?;
        start.checked_add(hours.checked_mul(100)?)
    });

    if delivery_end.is_none() {
        debug!(
            employee_id = %raw.employee_id,
            start = %raw.delivery_start,
            duration = %raw.duration_hours,
            "delivery window is not numeric"
        );
    }

    BookingRequest {
        request_timestamp: format!("{}T{}", raw.request_date, raw.request_time),
        employee_id: raw.employee_id.clone(),
        delivery_date: raw.delivery_date.clone(),
        delivery_start,
        delivery_end,
    }
}

fn parse_hhmm(token: &str) -> Option<i64> {
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, str::FromStr};

    use super::*;

    fn read_dataset(name: &str) -> String {
        let path = PathBuf::from_str("./test_datasets").unwrap().join(name);
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_parse_sample_request() {
        let (hours, orders) = parse_request(&read_dataset("sample_request.txt")).unwrap();

        assert_eq!(hours.opening, Some(900));
        assert_eq!(hours.closing, Some(1730));
        assert_eq!(orders.len(), 2);

        assert_eq!(orders[0].request_timestamp, "2022-03-17T10:17:06");
        assert_eq!(orders[0].employee_id, "001");
        assert_eq!(orders[0].delivery_date, "2022-03-21");
        assert_eq!(orders[0].delivery_start, Some(900));
        assert_eq!(orders[0].delivery_end, Some(1100));

        assert_eq!(orders[1].request_timestamp, "2022-03-16T12:34:56");
        assert_eq!(orders[1].employee_id, "002");
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let (_, orders) = parse_request(&read_dataset("multiple_dates.txt")).unwrap();

        let employees: Vec<&str> = orders.iter().map(|order| order.employee_id.as_str()).collect();
        assert_eq!(employees, ["001", "002", "003", "004", "005", "006", "007"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_request(""), Err(ScheduleError::EmptyInput));
        assert_eq!(parse_request(" \n \n"), Err(ScheduleError::EmptyInput));
        assert_eq!(
            ScheduleError::EmptyInput.to_string(),
            "Booking request is empty"
        );
    }

    #[test]
    fn test_parse_too_few_lines() {
        let error = parse_request("0900 1730\n2022-03-17 10:17:06 001").unwrap_err();

        assert_eq!(
            error,
            ScheduleError::MalformedInput(MalformedReason::TooFewLines)
        );
        assert_eq!(
            error.to_string(),
            "No individual booking request. Need 3 lines input minimum."
        );
    }

    #[test]
    fn test_parse_even_line_count() {
        let error = parse_request(&read_dataset("malformed_even_lines.txt")).unwrap_err();

        assert_eq!(
            error,
            ScheduleError::MalformedInput(MalformedReason::EvenLineCount)
        );
        assert_eq!(
            error.to_string(),
            "Booking request must have \"2x+1\" number of lines, eg odd numbers of lines only."
        );
    }

    #[test]
    fn test_trailing_newline_counts_as_a_line() {
        let error = parse_request("0900 1730\n2022-03-17 10:17:06 001\n2022-03-21 09:00 2\n")
            .unwrap_err();

        assert_eq!(
            error,
            ScheduleError::MalformedInput(MalformedReason::EvenLineCount)
        );
    }

    #[test]
    fn test_parse_ignores_leading_whitespace_in_a_line() {
        let (hours, orders) =
            parse_request(" 0900 1730\n  2022-03-17 10:17:06 001\n\t2022-03-21 09:00 2").unwrap();

        assert_eq!(hours.opening, Some(900));
        assert_eq!(hours.closing, Some(1730));
        assert_eq!(orders[0].request_timestamp, "2022-03-17T10:17:06");
        assert_eq!(orders[0].employee_id, "001");
        assert_eq!(orders[0].delivery_start, Some(900));
        assert_eq!(orders[0].delivery_end, Some(1100));
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let (hours, orders) =
            parse_request("0900 1730\r\n2022-03-17 10:17:06 001\r\n2022-03-21 09:00 2").unwrap();

        assert_eq!(hours.closing, Some(1730));
        assert_eq!(orders[0].employee_id, "001");
        assert_eq!(orders[0].delivery_end, Some(1100));
    }

    #[test]
    fn test_malformed_numbers_leave_window_empty() {
        let content = "0900 late\n\
                       2022-03-17 10:17:06 001\n\
                       2022-03-21 nine 2\n\
                       2022-03-17 10:17:07 002\n\
                       2022-03-21 09:00";
        let (hours, orders) = parse_request(content).unwrap();

        assert_eq!(hours.opening, Some(900));
        assert_eq!(hours.closing, None);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].window(), None);
        assert_eq!(orders[1].delivery_start, Some(900));
        assert_eq!(orders[1].delivery_end, None);
    }

    #[test]
    fn test_to_booking_request() {
        let raw = RawBookingRequest {
            request_date: "2022-03-17".to_string(),
            request_time: "10:17:06".to_string(),
            employee_id: "001".to_string(),
            delivery_date: "2022-03-21".to_string(),
            delivery_start: "13:30".to_string(),
            duration_hours: "3".to_string(),
        };

        let request = to_booking_request(&raw);

        assert_eq!(request.request_timestamp, "2022-03-17T10:17:06");
        assert_eq!(request.delivery_start, Some(1330));
        assert_eq!(request.delivery_end, Some(1630));
    }
}
