//! Headless state of a yearless date picker.
//!
//! Holds what a picker widget needs besides its rendering: the selected date,
//! the month on display, optional circular `min`/`max` bounds, and the
//! `change`/`select` handlers. Drawing the calendar, positioning and event
//! wiring are left to the host.

use crate::{Component, DateInput, Day, Format, Month, Settings, YearlessDate};
use std::fmt;

/// Handler kinds a picker can notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The selected date was replaced
    Change,
    /// A day was picked from the calendar
    Select,
}

type Handler = Box<dyn FnMut(&YearlessDate)>;

/// Initial configuration of a [`Picker`].
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Settings for parsing inputs and rendering [`Picker::input_text`]
    pub settings: Settings,
    /// Initially selected date
    pub date: Option<DateInput>,
    /// Text already present in the bound input, used when `date` is missing or invalid
    pub initial_text: Option<String>,
    /// Start of the allowed arc, inclusive
    pub min: Option<DateInput>,
    /// End of the allowed arc, inclusive; may wrap past December
    pub max: Option<DateInput>,
    /// Format of the secondary ("alt") field, if the host keeps one
    pub alt_format: Option<Format>,
}

/// One day of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub day: u8,
    pub selected: bool,
    pub disabled: bool,
}

/// Selection and navigation state of one picker widget.
pub struct Picker {
    settings: Settings,
    date: YearlessDate,
    displayed: YearlessDate,
    min: Option<YearlessDate>,
    max: Option<YearlessDate>,
    alt_format: Option<Format>,
    open: bool,
    on_change: Option<Handler>,
    on_select: Option<Handler>,
}

impl Picker {
    /// Builds a picker. Inputs that fail to parse are skipped; the date falls
    /// back to `initial_text`, then to 1 January. A `max` that would exclude
    /// the initial date is dropped.
    pub fn new(options: PickerOptions) -> Self {
        let PickerOptions {
            settings,
            date,
            initial_text,
            min,
            max,
            alt_format,
        } = options;

        let date = date
            .and_then(|input| parse(input, &settings))
            .or_else(|| initial_text.and_then(|text| parse(text, &settings)))
            .unwrap_or_else(|| YearlessDate::from_parts(Month::JANUARY, Day::FIRST, &settings));
        let min = min.and_then(|input| parse(input, &settings));
        let mut max = max.and_then(|input| parse(input, &settings));

        let excluded = match (&min, &max) {
            (Some(lower), Some(upper)) => !date.is_between(lower, upper),
            _ => false,
        };
        if excluded {
            #[cfg(feature = "log")]
            log::warn!("Initial date {date} is outside the picker range, ignoring max");
            max = None;
        }

        Self {
            displayed: date.clone(),
            settings,
            date,
            min,
            max,
            alt_format,
            open: false,
            on_change: None,
            on_select: None,
        }
    }

    /// Returns a copy of the selected date
    pub fn date(&self) -> YearlessDate {
        self.date.clone()
    }

    /// The date whose month is on display
    pub const fn displayed(&self) -> &YearlessDate {
        &self.displayed
    }

    pub const fn min(&self) -> Option<&YearlessDate> {
        self.min.as_ref()
    }

    pub const fn max(&self) -> Option<&YearlessDate> {
        self.max.as_ref()
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the picker on the selected date's month, unless already open.
    pub fn open(&mut self) {
        if !self.open {
            let delta = i64::from(self.date.month()) - i64::from(self.displayed.month());
            self.displayed.shift_month_in_place(delta);
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Registers the handler for `event`, replacing any previous one.
    pub fn on(&mut self, event: Event, handler: impl FnMut(&YearlessDate) + 'static) {
        let handler: Handler = Box::new(handler);
        match event {
            Event::Change => self.on_change = Some(handler),
            Event::Select => self.on_select = Some(handler),
        }
    }

    /// Moves the displayed month; the selection is unchanged.
    pub fn shift_month(&mut self, n: impl Into<Component>) {
        self.displayed.shift_month_in_place(n);
    }

    /// Long name of the displayed month, for the calendar heading
    pub fn month_title(&self) -> &'static str {
        self.displayed.month_name(crate::NameFormat::Long)
    }

    /// Whether `date` is allowed by the bounds. Bounds only apply once both
    /// `min` and `max` are set.
    pub fn allows(&self, date: &YearlessDate) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => date.is_between(min, max),
            _ => true,
        }
    }

    /// Cells of the displayed month, in day order.
    pub fn days(&self) -> Vec<DayCell> {
        let month = self.displayed.month_typed();
        (1..=month.days())
            .filter_map(|day| Day::new(day, month).ok())
            .map(|day| {
                let candidate = YearlessDate::from_parts(month, day, &self.settings);
                DayCell {
                    day: day.get(),
                    selected: candidate == self.date,
                    disabled: !self.allows(&candidate),
                }
            })
            .collect()
    }

    /// Picks day `d` of the displayed month. Disabled days are ignored and
    /// keep the picker open. Invalid days change nothing but close it. On
    /// success the change and select handlers run and the picker closes.
    pub fn select_day(&mut self, d: impl Into<Component>) -> bool {
        let mut candidate = self.displayed.clone();
        if candidate.set_day(d).is_err() {
            self.close();
            return false;
        }
        if !self.allows(&candidate) {
            return false;
        }
        self.displayed = candidate.clone();
        self.store(candidate, true);
        if let Some(handler) = self.on_select.as_mut() {
            handler(&self.date);
        }
        self.close();
        true
    }

    /// Replaces the selected date. Runs the change handler unless `silent`.
    /// Returns false, keeping the current date, if `input` doesn't parse.
    pub fn set_date(&mut self, input: impl Into<DateInput>, silent: bool) -> bool {
        match parse(input, &self.settings) {
            Some(date) => {
                self.store(date, !silent);
                true
            }
            None => false,
        }
    }

    /// Sets the lower bound, provided the selected date stays in range.
    pub fn set_min(&mut self, input: impl Into<DateInput>) -> bool {
        let Some(min) = parse(input, &self.settings) else {
            return false;
        };
        let fits = self
            .max
            .as_ref()
            .is_none_or(|max| self.date.is_between(&min, max));
        if fits {
            self.min = Some(min);
        }
        fits
    }

    /// Sets the upper bound, provided the selected date stays in range.
    pub fn set_max(&mut self, input: impl Into<DateInput>) -> bool {
        let Some(max) = parse(input, &self.settings) else {
            return false;
        };
        let fits = self
            .min
            .as_ref()
            .is_none_or(|min| self.date.is_between(min, &max));
        if fits {
            self.max = Some(max);
        }
        fits
    }

    /// Text for the bound input field
    pub fn input_text(&self) -> String {
        self.date
            .format(self.settings.format, Some(&self.settings.separator))
    }

    /// Text for the alt field, when one is configured
    pub fn alt_text(&self) -> Option<String> {
        self.alt_format.map(|format| self.date.format(format, None))
    }

    fn store(&mut self, date: YearlessDate, notify: bool) {
        self.date = date;
        if notify {
            if let Some(handler) = self.on_change.as_mut() {
                handler(&self.date);
            }
        }
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("settings", &self.settings)
            .field("date", &self.date)
            .field("displayed", &self.displayed)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("alt_format", &self.alt_format)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

fn parse(input: impl Into<DateInput>, settings: &Settings) -> Option<YearlessDate> {
    match YearlessDate::from_input(input, settings) {
        Ok(date) => Some(date),
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("Ignoring picker date: {_err}");
            None
        }
    }
}
