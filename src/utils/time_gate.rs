// src/utils/time_gate.rs

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::{error::AppError, models::time_window::TimeWindow};

/// Why the gate let a caller through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenReason {
    WithinWindow,
    DevelopmentMode,
    PrivilegedBypass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Open(OpenReason),
    Closed,
}

impl AccessDecision {
    pub fn is_open(&self) -> bool {
        matches!(self, AccessDecision::Open(_))
    }
}

/// Everything the gate needs to decide, supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct GateContext {
    pub now: NaiveDateTime,
    pub window: TimeWindow,
    pub is_privileged: bool,
    pub development_mode: bool,
}

pub fn minutes_since_midnight(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}

/// `start <= now <= end`, at minute resolution.
pub fn is_within_time_window(now: NaiveDateTime, window: &TimeWindow) -> bool {
    window.contains(minutes_since_midnight(now.time()))
}

/// OPEN iff inside the window, in development mode, or a privileged caller
/// while the window allows admin bypass.
pub fn evaluate(ctx: &GateContext) -> AccessDecision {
    if is_within_time_window(ctx.now, &ctx.window) {
        AccessDecision::Open(OpenReason::WithinWindow)
    } else if ctx.development_mode {
        AccessDecision::Open(OpenReason::DevelopmentMode)
    } else if ctx.is_privileged && ctx.window.admin_bypass {
        AccessDecision::Open(OpenReason::PrivilegedBypass)
    } else {
        AccessDecision::Closed
    }
}

/// Like [`evaluate`] but turns a closed gate into `AppError::TimeRestricted`.
pub fn ensure_open(ctx: &GateContext) -> Result<OpenReason, AppError> {
    match evaluate(ctx) {
        AccessDecision::Open(reason) => Ok(reason),
        AccessDecision::Closed => {
            tracing::info!(
                now = %ctx.now.time(),
                start = ctx.window.start_minutes,
                end = ctx.window.end_minutes,
                "Request rejected outside time window"
            );
            Err(AppError::TimeRestricted(ctx.window))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(hour, minute, 30)
            .unwrap()
    }

    fn ctx(now: NaiveDateTime) -> GateContext {
        GateContext {
            now,
            window: TimeWindow::from_hhmm("06:30", "08:00", true).unwrap(),
            is_privileged: false,
            development_mode: false,
        }
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = ctx(at(0, 0)).window;
        assert!(is_within_time_window(at(6, 30), &window));
        assert!(is_within_time_window(at(8, 0), &window));
        assert!(is_within_time_window(at(7, 15), &window));
        assert!(!is_within_time_window(at(6, 29), &window));
        assert!(!is_within_time_window(at(8, 1), &window));
    }

    #[test]
    fn closed_outside_window_for_regular_caller() {
        assert_eq!(evaluate(&ctx(at(9, 0))), AccessDecision::Closed);
        assert!(matches!(
            ensure_open(&ctx(at(9, 0))),
            Err(AppError::TimeRestricted(_))
        ));
        assert_eq!(
            evaluate(&ctx(at(7, 0))),
            AccessDecision::Open(OpenReason::WithinWindow)
        );
    }

    #[test]
    fn privileged_caller_bypasses_window() {
        let mut c = ctx(at(23, 0));
        c.is_privileged = true;
        assert_eq!(evaluate(&c), AccessDecision::Open(OpenReason::PrivilegedBypass));

        c.window.admin_bypass = false;
        assert_eq!(evaluate(&c), AccessDecision::Closed);
    }

    #[test]
    fn development_mode_opens_gate() {
        let mut c = ctx(at(3, 0));
        c.development_mode = true;
        assert_eq!(ensure_open(&c).unwrap(), OpenReason::DevelopmentMode);
    }
}
