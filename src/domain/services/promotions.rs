use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::models::discount::ScheduledDiscount;
use crate::domain::models::item::MenuItem;

/// A menu item as served to diners: the stored record plus whatever
/// promotion currently applies to it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PricedMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub is_promotion: bool,
    pub promotion_price: Option<f64>,
    pub promotion_name: Option<String>,
    pub promotion_percentage: Option<f64>,
}

/// Countdown descriptor for the dashboard badge: whether the discount is
/// running right now and when its state flips next.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PromotionCountdown {
    pub is_active_now: bool,
    pub next_transition_at: Option<DateTime<Utc>>,
    pub millis_until: Option<i64>,
    pub day_label: Option<String>,
}

impl PromotionCountdown {
    /// Result for discounts that can never fire: master switch off, no days
    /// configured, or a definition too malformed to evaluate.
    fn unscheduled() -> Self {
        Self {
            is_active_now: false,
            next_transition_at: None,
            millis_until: None,
            day_label: None,
        }
    }
}

/// Whether `discount` is running at `at`, as observed on the restaurant's
/// wall clock.
///
/// Day-of-week membership follows the day a window STARTS on: a Friday
/// 22:00-02:00 window is still on at Saturday 01:30 even though Saturday is
/// not listed. Anything unparseable (zone or time strings) evaluates to
/// `false` rather than erroring; a broken discount must never take the menu
/// down with it.
pub fn is_active(discount: &ScheduledDiscount, timezone: &str, at: DateTime<Utc>) -> bool {
    if !discount.is_active {
        return false;
    }

    let Ok(tz) = timezone.parse::<Tz>() else {
        return false;
    };
    let (Some(start), Some(end)) = (
        minute_of_day(&discount.start_time),
        minute_of_day(&discount.end_time),
    ) else {
        return false;
    };

    let local = at.with_timezone(&tz);
    let today = local.weekday().num_days_from_sunday() as u8;
    let yesterday = (today + 6) % 7;
    let now = local.hour() * 60 + local.minute();

    let days = &discount.days_of_week.0;
    if end >= start {
        days.contains(&today) && start <= now && now <= end
    } else {
        // Window crosses midnight: the head runs today, the tail belongs to
        // a window that started yesterday.
        (days.contains(&today) && now >= start) || (days.contains(&yesterday) && now <= end)
    }
}

/// Price of `item` with `discount` applied, rounded half-up to the cent.
/// The percentage is clamped to [0, 100] so bad data can neither inflate
/// the price nor push it below zero.
pub fn discounted_price(item: &MenuItem, discount: &ScheduledDiscount) -> f64 {
    let base = item.base_price.or(item.price).unwrap_or(0.0);
    let pct = discount.discount_percentage.clamp(0.0, 100.0);
    let reduced = (base * (1.0 - pct / 100.0)).max(0.0);
    (reduced * 100.0).round() / 100.0
}

/// Maps `items` through the discounts active at `at`. Each item picks up at
/// most one promotion: the first active discount (in input order) targeting
/// its category. Items without a match pass through unchanged.
///
/// Pure with respect to its arguments; callers re-invoke on their own
/// cadence (the public menu evaluates per request, the dashboard polls).
pub fn apply_to_items(
    items: &[MenuItem],
    discounts: &[ScheduledDiscount],
    timezone: &str,
    at: DateTime<Utc>,
) -> Vec<PricedMenuItem> {
    let active: Vec<&ScheduledDiscount> = discounts
        .iter()
        .filter(|d| is_active(d, timezone, at))
        .collect();

    items
        .iter()
        .map(|item| match active.iter().find(|d| d.category_id == item.category_id) {
            Some(discount) => PricedMenuItem {
                item: item.clone(),
                is_promotion: true,
                promotion_price: Some(discounted_price(item, discount)),
                promotion_name: Some(discount.name.clone()),
                promotion_percentage: Some(discount.discount_percentage),
            },
            None => PricedMenuItem {
                item: item.clone(),
                is_promotion: false,
                promotion_price: None,
                promotion_name: None,
                promotion_percentage: None,
            },
        })
        .collect()
}

/// When `discount` next changes state, seen from `at`.
///
/// Active now: the transition is the end of the current window (for a
/// midnight-crossing window that is the end on the following calendar day).
/// Inactive: the next scheduled start, checking later today first and then
/// scanning at most a week ahead. Never panics and never loops unbounded;
/// inputs that cannot produce a transition yield the unscheduled result.
pub fn next_transition(
    discount: &ScheduledDiscount,
    timezone: &str,
    at: DateTime<Utc>,
) -> PromotionCountdown {
    if !discount.is_active || discount.days_of_week.0.is_empty() {
        return PromotionCountdown::unscheduled();
    }

    let Ok(tz) = timezone.parse::<Tz>() else {
        return PromotionCountdown::unscheduled();
    };
    let (Some(start), Some(end)) = (
        minute_of_day(&discount.start_time),
        minute_of_day(&discount.end_time),
    ) else {
        return PromotionCountdown::unscheduled();
    };

    let local = at.with_timezone(&tz);
    let now = local.hour() * 60 + local.minute();
    let days = &discount.days_of_week.0;

    if is_active(discount, timezone, at) {
        let end_date = if end >= start {
            local.date_naive()
        } else if now >= start {
            // Entered the window today; it runs past midnight.
            local.date_naive() + Duration::days(1)
        } else {
            // Inside the tail of a window that started yesterday.
            local.date_naive()
        };

        let end_naive = end_date.and_time(time_at_minute(end));
        let Some(end_local) = tz.from_local_datetime(&end_naive).earliest() else {
            return PromotionCountdown::unscheduled();
        };

        let end_utc = end_local.with_timezone(&Utc);
        return PromotionCountdown {
            is_active_now: true,
            next_transition_at: Some(end_utc),
            millis_until: Some((end_utc - at).num_milliseconds().max(0)),
            day_label: Some(day_label(&local, &end_local)),
        };
    }

    // Not running: find the next start. Offset 0 covers "later today";
    // offset 7 covers a weekly schedule whose only day is today but whose
    // start already passed.
    for offset in 0..=7i64 {
        let date = local.date_naive() + Duration::days(offset);
        let dow = date.weekday().num_days_from_sunday() as u8;
        if !days.contains(&dow) {
            continue;
        }
        if offset == 0 && now >= start {
            continue;
        }

        let start_naive = date.and_time(time_at_minute(start));
        let Some(start_local) = tz.from_local_datetime(&start_naive).earliest() else {
            // Start erased by a spring-forward gap; try the next listed day.
            continue;
        };

        let start_utc = start_local.with_timezone(&Utc);
        return PromotionCountdown {
            is_active_now: false,
            next_transition_at: Some(start_utc),
            millis_until: Some((start_utc - at).num_milliseconds().max(0)),
            day_label: Some(day_label(&local, &start_local)),
        };
    }

    PromotionCountdown::unscheduled()
}

/// "HH:MM" to minutes since midnight. `None` for anything chrono rejects
/// (missing colon, hour 24, etc.).
fn minute_of_day(raw: &str) -> Option<u32> {
    let parsed = NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()?;
    Some(parsed.hour() * 60 + parsed.minute())
}

fn time_at_minute(minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap_or_default()
}

fn day_label(now_local: &DateTime<Tz>, when_local: &DateTime<Tz>) -> String {
    if when_local.date_naive() == now_local.date_naive() {
        "Today".to_string()
    } else {
        when_local.format("%A").to_string()
    }
}
