//! # Visit availability slots
//!
//! A slot is picked as a weekday name, an hour label and a minute label
//! (`Mardi`, `14h`, `30m`). Before submission it is projected onto the
//! next future-or-same occurrence of that weekday and rendered as a
//! `YYYY-MM-DD HH:MM:00` timestamp, the format the `disponibilites`
//! table accepts.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Day of the week, as offered by the day selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jour {
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
    Samedi,
    Dimanche,
}

impl Jour {
    /// Selector order, Monday first.
    pub const ALL: [Jour; 7] = [
        Jour::Lundi,
        Jour::Mardi,
        Jour::Mercredi,
        Jour::Jeudi,
        Jour::Vendredi,
        Jour::Samedi,
        Jour::Dimanche,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Jour::Lundi => "Lundi",
            Jour::Mardi => "Mardi",
            Jour::Mercredi => "Mercredi",
            Jour::Jeudi => "Jeudi",
            Jour::Vendredi => "Vendredi",
            Jour::Samedi => "Samedi",
            Jour::Dimanche => "Dimanche",
        }
    }

    /// 0 = Monday .. 6 = Sunday.
    pub fn index(&self) -> u32 {
        self.weekday().num_days_from_monday()
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            Jour::Lundi => Weekday::Mon,
            Jour::Mardi => Weekday::Tue,
            Jour::Mercredi => Weekday::Wed,
            Jour::Jeudi => Weekday::Thu,
            Jour::Vendredi => Weekday::Fri,
            Jour::Samedi => Weekday::Sat,
            Jour::Dimanche => Weekday::Sun,
        }
    }

    /// Date of the next occurrence of this day, counting `today` itself.
    ///
    /// The offset from `today` is always in `0..=6`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let current = today.weekday().num_days_from_monday() as i64;
        let mut diff = self.index() as i64 - current;
        if diff < 0 {
            diff += 7;
        }
        today + Duration::days(diff)
    }
}

impl fmt::Display for Jour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Jour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Jour::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| format!("Unknown day: {}", s))
    }
}

/// Hour of a slot, `7h` to `20h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotHour(u8);

impl SlotHour {
    pub const FIRST: u8 = 7;
    pub const LAST: u8 = 20;

    pub fn new(hour: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST)
            .contains(&hour)
            .then_some(SlotHour(hour))
    }

    pub fn all() -> impl Iterator<Item = SlotHour> {
        (Self::FIRST..=Self::LAST).map(SlotHour)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("{}h", self.0)
    }
}

impl Default for SlotHour {
    fn default() -> Self {
        SlotHour(Self::FIRST)
    }
}

impl fmt::Display for SlotHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

impl FromStr for SlotHour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_suffix('h')
            .and_then(|digits| digits.parse::<u8>().ok())
            .and_then(SlotHour::new)
            .ok_or_else(|| format!("Unknown hour: {}", s))
    }
}

/// Minute of a slot, by quarter hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotMinute {
    #[default]
    M00,
    M15,
    M30,
    M45,
}

impl SlotMinute {
    pub const ALL: [SlotMinute; 4] = [
        SlotMinute::M00,
        SlotMinute::M15,
        SlotMinute::M30,
        SlotMinute::M45,
    ];

    pub fn value(&self) -> u8 {
        match self {
            SlotMinute::M00 => 0,
            SlotMinute::M15 => 15,
            SlotMinute::M30 => 30,
            SlotMinute::M45 => 45,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotMinute::M00 => "00m",
            SlotMinute::M15 => "15m",
            SlotMinute::M30 => "30m",
            SlotMinute::M45 => "45m",
        }
    }
}

impl fmt::Display for SlotMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SlotMinute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotMinute::ALL
            .into_iter()
            .find(|minute| minute.label() == s)
            .ok_or_else(|| format!("Unknown minute: {}", s))
    }
}

/// A complete slot selection, as kept in the form's slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disponibilite {
    pub day: Jour,
    pub hour: SlotHour,
    pub minute: SlotMinute,
}

impl Disponibilite {
    pub fn new(day: Jour, hour: SlotHour, minute: SlotMinute) -> Self {
        Self { day, hour, minute }
    }

    /// Calendar date this slot falls on when submitted on `today`.
    pub fn projected_date(&self, today: NaiveDate) -> NaiveDate {
        self.day.next_occurrence(today)
    }

    /// Timestamp string sent to the endpoint, `YYYY-MM-DD HH:MM:00`.
    pub fn to_timestamp(&self, today: NaiveDate) -> String {
        format!(
            "{} {:02}:{:02}:00",
            self.projected_date(today).format("%Y-%m-%d"),
            self.hour.value(),
            self.minute.value()
        )
    }

    /// Short line for the saved-slots list, e.g. `Mardi à 14:30`.
    pub fn summary(&self) -> String {
        format!(
            "{} à {}:{:02}",
            self.day,
            self.hour.value(),
            self.minute.value()
        )
    }
}
