//! Meeting windows and the conflict-aware schedule.
//!
//! A [`Meeting`] is either arranged (no fixed time) or a set of weekdays with
//! an inclusive `HHMM` window. Two scheduled meetings conflict when they share
//! a day and their windows overlap, where touching endpoints count as overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collections::{ArrayList, BoundedSequence};
use crate::core::ScheduleError;

/// Title given to a fresh or reset schedule.
pub const DEFAULT_TITLE: &str = "My Schedule";

/// Teaching days, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// `M`
    Monday,
    /// `T`
    Tuesday,
    /// `W`
    Wednesday,
    /// `H`
    Thursday,
    /// `F`
    Friday,
}

impl Weekday {
    /// All teaching days in calendar order.
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Parse a single day letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Self::Monday),
            'T' => Some(Self::Tuesday),
            'W' => Some(Self::Wednesday),
            'H' => Some(Self::Thursday),
            'F' => Some(Self::Friday),
            _ => None,
        }
    }

    /// Day letter used in meeting strings.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Monday => 'M',
            Self::Tuesday => 'T',
            Self::Wednesday => 'W',
            Self::Thursday => 'H',
            Self::Friday => 'F',
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Non-empty set of teaching days.
///
/// Serialized as its day-letter string, e.g. `"MWF"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DaySet(u8);

impl DaySet {
    /// Parse a day-letter string. Letters must be from `MTWHF` and appear once.
    pub fn parse(days: &str) -> Result<Self, ScheduleError> {
        if days.is_empty() {
            return Err(ScheduleError::InvalidMeeting("no meeting days".into()));
        }
        let mut bits = 0u8;
        for letter in days.chars() {
            let day = Weekday::from_letter(letter).ok_or_else(|| {
                ScheduleError::InvalidMeeting(format!("unknown day '{letter}'"))
            })?;
            if bits & day.bit() != 0 {
                return Err(ScheduleError::InvalidMeeting(format!(
                    "day '{letter}' repeated"
                )));
            }
            bits |= day.bit();
        }
        Ok(Self(bits))
    }

    /// Whether `day` is in the set.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Whether the two sets share at least one day.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Days in calendar order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |day| self.contains(*day))
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|day| write!(f, "{}", day.letter()))
    }
}

impl TryFrom<String> for DaySet {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DaySet> for String {
    fn from(value: DaySet) -> Self {
        value.to_string()
    }
}

/// Scheduled days plus an inclusive `[start, end]` window in `HHMM` form.
///
/// Deserializing goes through [`TimeWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow")]
pub struct TimeWindow {
    days: DaySet,
    start: u16,
    end: u16,
}

impl TimeWindow {
    /// Build a window, validating both times and their order.
    pub fn new(days: DaySet, start: u16, end: u16) -> Result<Self, ScheduleError> {
        check_time(start)?;
        check_time(end)?;
        if end < start {
            return Err(ScheduleError::InvalidMeeting(format!(
                "end {end} precedes start {start}"
            )));
        }
        Ok(Self { days, start, end })
    }

    /// Meeting days.
    #[must_use]
    pub const fn days(&self) -> DaySet {
        self.days
    }

    /// Start time, `HHMM`.
    #[must_use]
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// End time, `HHMM`.
    #[must_use]
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Shared day and `[start, end]` windows intersecting, endpoints included.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.days.intersects(other.days) && self.start <= other.end && other.start <= self.end
    }
}

#[derive(Deserialize)]
struct RawTimeWindow {
    days: DaySet,
    start: u16,
    end: u16,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = ScheduleError;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        Self::new(raw.days, raw.start, raw.end)
    }
}

fn check_time(time: u16) -> Result<(), ScheduleError> {
    if time / 100 < 24 && time % 100 < 60 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidMeeting(format!("invalid time {time}")))
    }
}

fn format_time(time: u16) -> String {
    let (hour, minute) = (time / 100, time % 100);
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minute:02}{suffix}")
}

/// When an item meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meeting {
    /// No fixed days or times; never conflicts.
    Arranged,
    /// Fixed days and window.
    Scheduled(TimeWindow),
}

impl Meeting {
    /// Parse a meeting from its day string and `HHMM` times.
    ///
    /// `"A"` means arranged and requires both times to be zero. Any other day
    /// string must be non-empty letters from `MTWHF` without repeats, with
    /// non-zero times and `end >= start`.
    pub fn parse(days: &str, start: u16, end: u16) -> Result<Self, ScheduleError> {
        if days == "A" {
            if start != 0 || end != 0 {
                return Err(ScheduleError::InvalidMeeting(
                    "arranged meetings have no times".into(),
                ));
            }
            return Ok(Self::Arranged);
        }
        if start == 0 || end == 0 {
            return Err(ScheduleError::InvalidMeeting(
                "scheduled meetings need a start and end time".into(),
            ));
        }
        let days = DaySet::parse(days)?;
        TimeWindow::new(days, start, end).map(Self::Scheduled)
    }

    /// Re-apply the [`Meeting::parse`] rules, including non-zero scheduled times.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            Self::Arranged => Ok(()),
            Self::Scheduled(window) => {
                Self::parse(&window.days.to_string(), window.start, window.end).map(|_| ())
            }
        }
    }

    /// Whether the two meetings overlap. Arranged meetings conflict with nothing.
    #[must_use]
    pub const fn conflicts_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scheduled(a), Self::Scheduled(b)) => a.overlaps(b),
            _ => false,
        }
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arranged => f.write_str("Arranged"),
            Self::Scheduled(window) => write!(
                f,
                "{} {}-{}",
                window.days,
                format_time(window.start),
                format_time(window.end)
            ),
        }
    }
}

/// Item that can be placed on a [`ConflictAwareSchedule`].
pub trait Schedulable {
    /// Key that identifies duplicates.
    type Identity: PartialEq + fmt::Display + ?Sized;

    /// Duplicate key.
    fn identity(&self) -> &Self::Identity;

    /// When the item meets.
    fn meeting(&self) -> &Meeting;
}

/// Titled list of items in which no two share an identity or overlap in time.
#[derive(Debug, Clone)]
pub struct ConflictAwareSchedule<T> {
    title: String,
    items: ArrayList<T>,
}

impl<T> Default for ConflictAwareSchedule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConflictAwareSchedule<T> {
    /// Empty schedule titled [`DEFAULT_TITLE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            items: ArrayList::new(),
        }
    }

    /// Current title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the schedule. Empty titles are rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ScheduleError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        self.title = title;
        Ok(())
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Schedulable + PartialEq> ConflictAwareSchedule<T> {
    fn check(&self, item: &T) -> Result<(), ScheduleError> {
        for existing in self.items.iter() {
            if existing.identity() == item.identity() {
                return Err(ScheduleError::DuplicateItem(item.identity().to_string()));
            }
            if existing.meeting().conflicts_with(item.meeting()) {
                return Err(ScheduleError::ScheduleConflict(
                    existing.identity().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Whether `item` could be added. Absent items cannot.
    pub fn can_add<'a>(&self, item: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        item.into().is_some_and(|item| self.check(item).is_ok())
    }

    /// Add `item`, rejecting absent items, duplicate identities and conflicts.
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<(), ScheduleError> {
        let item = item.into().ok_or(ScheduleError::NullItem)?;
        self.check(&item)?;
        tracing::debug!(item = %item.identity(), "added to schedule");
        self.items.push(item)?;
        Ok(())
    }

    /// Remove the item equal to `item`. Returns whether one was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove_item(item).is_some()
    }

    /// Borrow the item at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ScheduleError> {
        Ok(self.items.get(index)?)
    }

    /// Number of scheduled items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item and restore the default title.
    pub fn reset(&mut self) {
        self.items.clear();
        self.title = DEFAULT_TITLE.to_string();
    }
}
