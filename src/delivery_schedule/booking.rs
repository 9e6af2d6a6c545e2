use std::collections::BTreeMap;

/// Shop opening hours in HHMM-as-integer form, e.g. `1730` for 17:30.
///
/// A bound is `None` when its header token was not an integer. An unknown
/// bound admits no delivery window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    pub opening: Option<i64>,
    pub closing: Option<i64>,
}

impl OperatingHours {
    pub fn admits(&self, window: DeliveryWindow) -> bool {
        match (self.opening, self.closing) {
            (Some(opening), Some(closing)) => window.start >= opening && window.end <= closing,
            _ => false,
        }
    }
}

/// The whitespace-separated tokens of one request line pair, before any
/// numeric conversion. Missing tokens are kept as empty strings.
#[derive(Debug, Default)]
pub struct RawBookingRequest {
    pub request_date: String,
    pub request_time: String,
    pub employee_id: String,
    pub delivery_date: String,
    pub delivery_start: String,
    pub duration_hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// `<date>T<time>`, compared as a string.
    pub request_timestamp: String,
    pub employee_id: String,
    pub delivery_date: String,
    pub delivery_start: Option<i64>,
    pub delivery_end: Option<i64>,
}

impl BookingRequest {
    pub fn window(&self) -> Option<DeliveryWindow> {
        Some(DeliveryWindow {
            start: self.delivery_start?,
            end: self.delivery_end?,
        })
    }
}

/// Half-open booking window `[start, end)` in HHMM-as-integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub start: i64,
    pub end: i64,
}

impl DeliveryWindow {
    pub fn overlaps(&self, other: &DeliveryWindow) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A request that passed the operating hours check, paired with its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDelivery {
    pub request: BookingRequest,
    pub window: DeliveryWindow,
}

impl ScheduledDelivery {
    pub fn conflicts_with(&self, other: &ScheduledDelivery) -> bool {
        self.request.delivery_date == other.request.delivery_date
            && self.window.overlaps(&other.window)
    }
}

/// Accepted deliveries keyed by delivery date. Dates iterate in ascending
/// string order and each date's deliveries are ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedSchedule {
    days: BTreeMap<String, Vec<ScheduledDelivery>>,
}

impl AcceptedSchedule {
    /// Groups deliveries that are already sorted by date and start time.
    pub fn from_sorted(deliveries: Vec<ScheduledDelivery>) -> Self {
        let mut days: BTreeMap<String, Vec<ScheduledDelivery>> = BTreeMap::new();
        for delivery in deliveries {
            days.entry(delivery.request.delivery_date.clone())
                .or_default()
                .push(delivery);
        }
        AcceptedSchedule { days }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScheduledDelivery])> {
        self.days
            .iter()
            .map(|(date, deliveries)| (date.as_str(), deliveries.as_slice()))
    }

    pub fn delivery_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
