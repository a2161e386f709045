use crate::models::{OdometerReading, Trip};
use chrono::{Datelike, NaiveDate};

/// One entry of the merged history view: either a trip or a manual
/// odometer check-in.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineItem {
    Trip(Trip),
    Odometer(OdometerReading),
}

impl TimelineItem {
    pub fn date(&self) -> NaiveDate {
        match self {
            TimelineItem::Trip(t) => t.date,
            TimelineItem::Odometer(r) => r.date,
        }
    }
}

/// Merge trips and odometer readings of one calendar year into a single
/// descending-by-date sequence. Same-date items keep collection order,
/// trips ahead of readings (stable sort over the concatenation).
pub fn build_timeline(
    trips: &[Trip],
    readings: &[OdometerReading],
    year: i32,
) -> Vec<TimelineItem> {
    let mut items: Vec<TimelineItem> = Vec::new();

    items.extend(
        trips
            .iter()
            .filter(|t| t.date.year() == year)
            .cloned()
            .map(TimelineItem::Trip),
    );
    items.extend(
        readings
            .iter()
            .filter(|r| r.date.year() == year)
            .cloned()
            .map(TimelineItem::Odometer),
    );

    items.sort_by(|a, b| b.date().cmp(&a.date()));
    items
}
