use chrono::{Datelike, Local, NaiveDate};
use yew::prelude::*;
use yew_hooks::use_click_away;

pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { month: self.month + 1, ..self }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { month: self.month - 1, ..self }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Sunday = 0, so the 1st lands under its weekday column.
    pub fn leading_blanks(self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn cells(self) -> Vec<Option<u32>> {
        let blanks = (0..self.leading_blanks()).map(|_| None);
        let days = (1..=self.days_in_month()).map(Some);
        blanks.chain(days).collect()
    }

    pub fn title(self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn format_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(
            "{} {}{}, {}",
            date.format("%B"),
            date.day(),
            ordinal_suffix(date.day()),
            date.year()
        ),
        None => "Select Event Date".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub value: Option<NaiveDate>,
    pub on_change: Callback<NaiveDate>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let today = Local::now().date_naive();
    let is_open = use_state(|| false);
    let shown = {
        let start = props.value.unwrap_or(today);
        use_state(move || CalendarMonth::of(start))
    };
    let container = use_node_ref();

    {
        let is_open = is_open.clone();
        use_click_away(container.clone(), move |_: Event| is_open.set(false));
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let prev_month = {
        let shown = shown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            shown.set(shown.prev());
        })
    };
    let next_month = {
        let shown = shown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            shown.set(shown.next());
        })
    };

    let month = *shown;
    let cells = month.cells().into_iter().enumerate().map(|(i, cell)| match cell {
        None => html! { <div key={format!("blank-{}", i)} class="calendar-blank"></div> },
        Some(day) => {
            let date = month.day(day);
            let selected = date.is_some() && date == props.value;
            let is_today = props.value.is_none() && date == Some(today);
            let onclick = {
                let on_change = props.on_change.clone();
                let is_open = is_open.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    if let Some(date) = date {
                        on_change.emit(date);
                        is_open.set(false);
                    }
                })
            };
            html! {
                <button
                    key={format!("day-{}", day)}
                    class={classes!(
                        "calendar-day",
                        selected.then(|| "selected"),
                        is_today.then(|| "today"),
                    )}
                    {onclick}
                >
                    { day }
                </button>
            }
        }
    });

    html! {
        <div class="date-picker" ref={container}>
            <div
                class={classes!("date-field", props.value.is_none().then(|| "placeholder"))}
                onclick={toggle}
            >
                <span>{ format_label(props.value) }</span>
                <span class="date-icon">{"📅"}</span>
            </div>
            if *is_open {
                <div class="calendar-popup">
                    <div class="calendar-header">
                        <button class="calendar-nav" onclick={prev_month}>{"‹"}</button>
                        <span class="calendar-title">{ month.title() }</span>
                        <button class="calendar-nav" onclick={next_month}>{"›"}</button>
                    </div>
                    <div class="calendar-grid">
                        { for WEEKDAYS.iter().map(|d| html! { <div class="calendar-weekday">{ *d }</div> }) }
                        { for cells }
                    </div>
                </div>
            }
            <style>
                {r#"
                .date-picker {
                    position: relative;
                }
                .date-field {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    border-bottom: 1px solid #d1d5db;
                    padding: 0.5rem 0;
                    cursor: pointer;
                    color: var(--charcoal);
                }
                .date-field.placeholder {
                    color: #9ca3af;
                }
                .date-field:hover {
                    border-color: var(--gold-500);
                }
                .calendar-popup {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    z-index: 50;
                    margin-top: 0.5rem;
                    width: 18rem;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                    padding: 1rem;
                }
                .calendar-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .calendar-title {
                    font-family: var(--font-serif);
                    font-weight: 700;
                }
                .calendar-nav {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .calendar-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 0.25rem;
                    text-align: center;
                }
                .calendar-weekday {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #9ca3af;
                }
                .calendar-day {
                    height: 2rem;
                    width: 2rem;
                    border: none;
                    border-radius: 50%;
                    background: none;
                    font-size: 0.85rem;
                    cursor: pointer;
                }
                .calendar-day:hover {
                    background: var(--gold-100);
                }
                .calendar-day.today {
                    box-shadow: inset 0 0 0 1px var(--gold-500);
                    color: var(--gold-600);
                }
                .calendar-day.selected {
                    background: var(--gold-500);
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth { year, month }
    }

    #[test]
    fn leading_blanks_match_weekday_of_the_first() {
        // 1 Dec 2024 was a Sunday, 1 Feb 2025 a Saturday
        assert_eq!(month(2024, 12).leading_blanks(), 0);
        assert_eq!(month(2025, 2).leading_blanks(), 6);
        assert_eq!(month(2025, 10).leading_blanks(), 3);
    }

    #[test]
    fn grid_holds_every_day_of_the_month() {
        let cells = month(2025, 2).cells();
        assert_eq!(cells.len(), 6 + 28);
        assert!(cells[..6].iter().all(Option::is_none));
        assert_eq!(cells[6], Some(1));
        assert_eq!(cells.last(), Some(&Some(28)));
    }

    #[test]
    fn leap_years_get_twenty_nine_days() {
        assert_eq!(month(2024, 2).days_in_month(), 29);
        assert_eq!(month(1900, 2).days_in_month(), 28);
        assert_eq!(month(2000, 2).days_in_month(), 29);
        assert_eq!(month(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn navigation_rolls_the_year() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
        assert_eq!(month(2025, 6).next().prev(), month(2025, 6));
        assert_eq!(month(2024, 12).title(), "December 2024");
    }

    #[test]
    fn labels_use_ordinal_days() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 12, d);
        assert_eq!(format_label(date(25)), "December 25th, 2024");
        assert_eq!(format_label(date(1)), "December 1st, 2024");
        assert_eq!(format_label(date(22)), "December 22nd, 2024");
        assert_eq!(format_label(date(3)), "December 3rd, 2024");
        assert_eq!(format_label(date(11)), "December 11th, 2024");
        assert_eq!(format_label(date(13)), "December 13th, 2024");
        assert_eq!(format_label(None), "Select Event Date");
    }
}
