use chrono::DateTime;
use chrono::Datelike;
use chrono::Utc;
use racevis_dataset::year_start;
use serde::Serialize;

use crate::scale::TimeScale;

const TARGET_TICK_COUNT: f64 = 10.0;
const MAX_TICK_COUNT: i64 = 50;

const YEAR_STEPS: [i64; 10] = [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];

const SECOND_STEPS: [i64; 13] = [
    1,
    5,
    15,
    30,
    60,
    5 * 60,
    15 * 60,
    30 * 60,
    60 * 60,
    3 * 60 * 60,
    6 * 60 * 60,
    12 * 60 * 60,
    24 * 60 * 60,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// The pixel position of the tick along its axis.
    pub offset: f64,
    pub label: String,
}

/// Formats a race time as `minutes:seconds` with both parts zero-padded.
/// Minutes are not wrapped into hours, so `75:00` stays `75:00`.
pub fn format_race_time(time: DateTime<Utc>) -> String {
    let total = time.timestamp();

    format!("{:02}:{:02}", total.div_euclid(60), total.rem_euclid(60))
}

/// Ticks at January 1 of evenly spaced years inside the scale domain.
pub fn year_ticks(scale: &TimeScale) -> Vec<Tick> {
    let (start, end) = scale.domain();
    let (first_year, last_year) = (i64::from(start.year()), i64::from(end.year()));
    let step = pick_step(last_year - first_year, &YEAR_STEPS);

    let mut ticks = Vec::new();
    let mut year = ceil_multiple(first_year, step);

    while year <= last_year {
        if let Some(date) = i32::try_from(year).ok().and_then(|y| year_start(y).ok()) {
            if date >= start && date <= end {
                ticks.push(Tick {
                    offset: round(scale.apply(date)),
                    label: year.to_string(),
                });
            }
        }

        year += step;
    }

    ticks
}

/// Ticks at evenly spaced race times inside the scale domain, labeled
/// as `minutes:seconds`.
pub fn time_ticks(scale: &TimeScale) -> Vec<Tick> {
    let (start, end) = scale.domain();
    let (first, last) = (start.timestamp(), end.timestamp());
    let step = pick_step(last - first, &SECOND_STEPS);

    let mut ticks = Vec::new();
    let mut seconds = ceil_multiple(first, step);

    while seconds <= last {
        if let Some(time) = DateTime::from_timestamp(seconds, 0) {
            ticks.push(Tick {
                offset: round(scale.apply(time)),
                label: format_race_time(time),
            });
        }

        seconds += step;
    }

    ticks
}

/// Picks the step whose tick count is the closest to the target.
/// Ties go to the smaller step. Spans too wide for the largest step get
/// a power of ten multiple of it, keeping at most `MAX_TICK_COUNT` ticks.
fn pick_step(span: i64, steps: &[i64]) -> i64 {
    let mut step = steps
        .iter()
        .copied()
        .min_by(|a, b| {
            let a = (span as f64 / *a as f64 - TARGET_TICK_COUNT).abs();
            let b = (span as f64 / *b as f64 - TARGET_TICK_COUNT).abs();
            a.total_cmp(&b)
        })
        .unwrap_or(1);

    while span / step > MAX_TICK_COUNT {
        step = step.saturating_mul(10);
    }

    step
}

/// The smallest multiple of `step` that is greater or equal to `value`.
fn ceil_multiple(value: i64, step: i64) -> i64 {
    let floor = value.div_euclid(step) * step;

    if floor == value { floor } else { floor + step }
}

/// Rounds pixel positions to two decimals to keep the markup short.
pub(crate) fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use racevis_dataset::parse_race_time;

    #[test]
    fn race_time_round_trip() {
        let time = parse_race_time("36:50").unwrap();

        assert_eq!(format_race_time(time), "36:50");
    }

    #[test]
    fn seconds_are_zero_padded() {
        let time = parse_race_time("37:05").unwrap();

        assert_eq!(format_race_time(time), "37:05");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        for time in ["60:00", "75:00", "120:05"] {
            assert_eq!(format_race_time(parse_race_time(time).unwrap()), time);
        }
    }

    #[test]
    fn time_ticks_cross_the_hour() {
        let scale = TimeScale::new(
            (
                parse_race_time("59:30").unwrap(),
                parse_race_time("60:30").unwrap(),
            ),
            (50.0, 580.0),
        );

        let labels: Vec<String> = time_ticks(&scale).into_iter().map(|t| t.label).collect();

        assert_eq!(labels.len(), 13);
        assert_eq!(labels.first().map(String::as_str), Some("59:30"));
        assert_eq!(labels.get(6).map(String::as_str), Some("60:00"));
        assert_eq!(labels.last().map(String::as_str), Some("60:30"));
    }

    #[test]
    fn huge_time_span_keeps_few_ticks() {
        let scale = TimeScale::new(
            (
                parse_race_time("36:50").unwrap(),
                parse_race_time("4294967295:00").unwrap(),
            ),
            (50.0, 580.0),
        );

        let ticks = time_ticks(&scale);

        assert!(!ticks.is_empty());
        assert!(ticks.len() as i64 <= MAX_TICK_COUNT + 1);
    }

    #[test]
    fn year_ticks_use_two_year_steps_for_two_decades() {
        let scale = TimeScale::new(
            (year_start(1993).unwrap(), year_start(2016).unwrap()),
            (50.0, 870.0),
        );

        let labels: Vec<String> = year_ticks(&scale).into_iter().map(|t| t.label).collect();

        assert_eq!(
            labels,
            [
                "1994", "1996", "1998", "2000", "2002", "2004", "2006", "2008", "2010", "2012",
                "2014", "2016"
            ]
        );
    }

    #[test]
    fn year_ticks_lie_within_the_range() {
        let scale = TimeScale::new(
            (year_start(1994).unwrap(), year_start(2016).unwrap()),
            (50.0, 870.0),
        );

        let ticks = year_ticks(&scale);

        assert_eq!(ticks.first().map(|t| t.offset), Some(50.0));
        assert_eq!(ticks.last().map(|t| t.offset), Some(870.0));
        assert!(ticks.windows(2).all(|w| w[0].offset < w[1].offset));
    }

    #[test]
    fn time_ticks_use_fifteen_seconds_for_three_minutes() {
        let scale = TimeScale::new(
            (
                parse_race_time("36:50").unwrap(),
                parse_race_time("39:50").unwrap(),
            ),
            (50.0, 580.0),
        );

        let labels: Vec<String> = time_ticks(&scale).into_iter().map(|t| t.label).collect();

        assert_eq!(labels.first().map(String::as_str), Some("37:00"));
        assert_eq!(labels.get(1).map(String::as_str), Some("37:15"));
        assert_eq!(labels.last().map(String::as_str), Some("39:45"));
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn single_time_has_one_tick() {
        let time = parse_race_time("36:50").unwrap();
        let scale = TimeScale::new((time, time), (50.0, 580.0));

        let ticks = time_ticks(&scale);

        assert_eq!(
            ticks,
            [Tick {
                offset: 315.0,
                label: String::from("36:50")
            }]
        );
    }

    #[test]
    fn ceil_to_step_multiples() {
        assert_eq!(ceil_multiple(1993, 2), 1994);
        assert_eq!(ceil_multiple(1994, 2), 1994);
        assert_eq!(ceil_multiple(2210, 15), 2220);
        assert_eq!(ceil_multiple(-7, 5), -5);
    }
}
