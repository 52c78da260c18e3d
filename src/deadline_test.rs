use super::*;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

#[test]
fn picker_value_gets_offset_and_seconds() {
    let normalized = normalize_input("2024-01-03T05:30", jst()).unwrap();
    assert_eq!(normalized.as_deref(), Some("2024-01-03T05:30:00+09:00"));
}

#[test]
fn picker_value_with_seconds_is_accepted() {
    let normalized = normalize_input("2024-01-03T05:30:15", FixedOffset::east_opt(0).unwrap()).unwrap();
    assert_eq!(normalized.as_deref(), Some("2024-01-03T05:30:15+00:00"));
}

#[test]
fn qualified_value_keeps_its_own_offset() {
    let normalized = normalize_input("2024-01-03T05:30:00-05:00", jst()).unwrap();
    assert_eq!(normalized.as_deref(), Some("2024-01-03T05:30:00-05:00"));
}

#[test]
fn normalization_is_idempotent() {
    let once = normalize_input("2024-06-30T23:59", jst()).unwrap().unwrap();
    let twice = normalize_input(&once, jst()).unwrap().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn empty_input_means_no_deadline() {
    assert_eq!(normalize_input("", jst()).unwrap(), None);
    assert_eq!(normalize_input("  ", jst()).unwrap(), None);
}

#[test]
fn garbage_input_is_rejected() {
    let err = normalize_input("tomorrow", jst()).unwrap_err();
    assert_eq!(err, DeadlineError::Invalid("tomorrow".into()));
}

#[test]
fn input_value_converts_into_display_offset() {
    let value = to_input_value(Some("2024-01-03T00:00:00Z"), jst());
    assert_eq!(value, "2024-01-03T09:00");
}

#[test]
fn input_value_is_empty_without_deadline() {
    assert_eq!(to_input_value(None, jst()), "");
    assert_eq!(to_input_value(Some("not a date"), jst()), "");
}

// =============================================================================
// DAYLIGHT SAVING
// =============================================================================

/// US Eastern rules for 2024: EST (-05:00) outside
/// 2024-03-10T07:00Z..2024-11-03T06:00Z, EDT (-04:00) inside.
#[derive(Clone, Copy, Debug)]
struct Eastern2024;

fn est() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn edt() -> FixedOffset {
    FixedOffset::west_opt(4 * 3600).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

impl TimeZone for Eastern2024 {
    type Offset = FixedOffset;

    fn from_offset(_: &FixedOffset) -> Self {
        Self
    }

    fn offset_from_local_date(&self, local: &chrono::NaiveDate) -> chrono::LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(chrono::NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> chrono::LocalResult<FixedOffset> {
        use chrono::LocalResult;
        let local = *local;
        if (at(2024, 3, 10, 2, 0)..at(2024, 3, 10, 3, 0)).contains(&local) {
            LocalResult::None
        } else if (at(2024, 11, 3, 1, 0)..at(2024, 11, 3, 2, 0)).contains(&local) {
            LocalResult::Ambiguous(edt(), est())
        } else if (at(2024, 3, 10, 3, 0)..at(2024, 11, 3, 1, 0)).contains(&local) {
            LocalResult::Single(edt())
        } else {
            LocalResult::Single(est())
        }
    }

    fn offset_from_utc_date(&self, utc: &chrono::NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(chrono::NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if (at(2024, 3, 10, 7, 0)..at(2024, 11, 3, 6, 0)).contains(utc) { edt() } else { est() }
    }
}

#[test]
fn picker_value_uses_offset_in_force_on_that_date() {
    let summer = normalize_input("2024-07-01T09:00", Eastern2024).unwrap();
    let winter = normalize_input("2024-01-15T09:00", Eastern2024).unwrap();
    assert_eq!(summer.as_deref(), Some("2024-07-01T09:00:00-04:00"));
    assert_eq!(winter.as_deref(), Some("2024-01-15T09:00:00-05:00"));
}

#[test]
fn input_value_shows_wall_clock_on_both_sides_of_a_change() {
    assert_eq!(to_input_value(Some("2024-07-01T13:00:00Z"), Eastern2024), "2024-07-01T09:00");
    assert_eq!(to_input_value(Some("2024-01-15T14:00:00Z"), Eastern2024), "2024-01-15T09:00");
}

#[test]
fn skipped_wall_clock_time_is_rejected() {
    let err = normalize_input("2024-03-10T02:30", Eastern2024).unwrap_err();
    assert_eq!(err, DeadlineError::Invalid("2024-03-10T02:30".into()));
}

#[test]
fn repeated_wall_clock_time_takes_the_earlier_instant() {
    let normalized = normalize_input("2024-11-03T01:30", Eastern2024).unwrap();
    assert_eq!(normalized.as_deref(), Some("2024-11-03T01:30:00-04:00"));
}

#[test]
fn summer_value_round_trips_through_the_picker() {
    let stored = normalize_input("2024-07-01T09:00", Eastern2024).unwrap();
    assert_eq!(to_input_value(stored.as_deref(), Eastern2024), "2024-07-01T09:00");
}
