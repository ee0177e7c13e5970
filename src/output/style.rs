//! Cell styling rules shared across reports
//!
//! Styling annotates display values for visual emphasis in table output; the
//! underlying text is unchanged for CSV/JSON.

use super::row::{Emphasis, Value};

/// Highlight privileged collaborator roles
pub fn style_user_role(role: &str) -> Value {
    match role {
        "admin" => Value::styled(role, Emphasis::Red),
        "member" => Value::styled(role, Emphasis::Purple),
        _ => Value::text(role),
    }
}

/// Highlight hobby-tier dyno sizes
pub fn style_formation_size(size: &str) -> Value {
    if size == "Basic" {
        Value::styled(size, Emphasis::Purple)
    } else {
        Value::text(size)
    }
}

/// A scaled-to-zero formation reads as "Stopped"
pub fn style_formation_quantity(quantity: i64) -> Value {
    if quantity == 0 {
        Value::styled("Stopped", Emphasis::Red)
    } else {
        Value::Int(quantity)
    }
}

/// Render backup schedules, flagging databases with none configured
pub fn style_backup_schedules(schedules: &[String]) -> Value {
    if schedules.is_empty() {
        Value::styled("NONE", Emphasis::Red)
    } else {
        Value::text(schedules.join(", "))
    }
}

/// Flag bare apex domains, which cannot take a CNAME
pub fn style_hostname(hostname: &str) -> Value {
    if hostname.split('.').count() <= 2 {
        Value::styled(hostname, Emphasis::Purple)
    } else {
        Value::text(hostname)
    }
}

/// Highlight certificate status: green when issued, red when failing
pub fn style_acm_status(status: &str) -> Value {
    match status {
        "cert issued" => Value::styled(status, Emphasis::Green),
        "failed" | "failing" => Value::styled(status, Emphasis::Red),
        _ => Value::text(status),
    }
}
