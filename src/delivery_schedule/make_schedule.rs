use crate::delivery_schedule::booking::{
    AcceptedSchedule, BookingRequest, OperatingHours, ScheduledDelivery,
};

use tracing::{debug, info};

/// Works out which orders make it onto the delivery schedule.
///
/// Orders outside opening hours are dropped, then the rest are taken in the
/// order they were requested: an order is accepted only if it does not clash
/// with one accepted before it. Dropped orders are logged at debug level and
/// otherwise vanish.
pub fn make_schedule(hours: &OperatingHours, orders: Vec<BookingRequest>) -> AcceptedSchedule {
    let received = orders.len();

    let mut valid_orders: Vec<ScheduledDelivery> = orders
        .into_iter()
        .filter_map(|order| within_operating_hours(hours, order))
        .collect();
    let valid = valid_orders.len();

    // timestamps are zero padded and date first, so string order is arrival order
    valid_orders.sort_by(|a, b| a.request.request_timestamp.cmp(&b.request.request_timestamp));

    let mut accepted_orders: Vec<ScheduledDelivery> = Vec::with_capacity(valid_orders.len());
    for current_order in valid_orders {
        if let Some(existing_order) = accepted_orders
            .iter()
            .find(|existing_order| existing_order.conflicts_with(&current_order))
        {
            debug!(
                employee_id = %current_order.request.employee_id,
                delivery_date = %current_order.request.delivery_date,
                blocked_by = %existing_order.request.employee_id,
                "dropping order that clashes with an earlier request"
            );
            continue;
        }
        accepted_orders.push(current_order);
    }

    accepted_orders.sort_by(|a, b| {
        a.request
            .delivery_date
            .cmp(&b.request.delivery_date)
            .then(a.window.start.cmp(&b.window.start))
    });

    let schedule = AcceptedSchedule::from_sorted(accepted_orders);
    info!(
        received,
        valid,
        accepted = schedule.delivery_count(),
        "delivery schedule created"
    );
    schedule
}

fn within_operating_hours(
    hours: &OperatingHours,
    order: BookingRequest,
) -> Option<ScheduledDelivery> {
    let Some(window) = order.window() else {
        debug!(employee_id = %order.employee_id, "dropping order without a numeric window");
        return None;
    };

    if window.start > window.end {
        debug!(
            employee_id = %order.employee_id,
            start = window.start,
            end = window.end,
            "dropping order that ends before it starts"
        );
        return None;
    }
    if !hours.admits(window) {
        debug!(
            employee_id = %order.employee_id,
            start = window.start,
            end = window.end,
            "dropping order outside opening hours"
        );
        return None;
    }

    Some(ScheduledDelivery {
        request: order,
        window,
    })
}
