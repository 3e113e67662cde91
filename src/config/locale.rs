use chrono::{ Datelike, Local, Timelike };

const WEEKDAYS_FR: [&str; 7] = [
    "lundi",
    "mardi",
    "mercredi",
    "jeudi",
    "vendredi",
    "samedi",
    "dimanche",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// `"{weekday} {dd} {month} {yyyy}"`, e.g. `"vendredi 16 octobre 2026"`.
pub fn french_date<T: Datelike>(date: &T) -> String {
    let weekday = WEEKDAYS_FR[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {:02} {} {}", weekday, date.day(), month, date.year())
}

/// `"HHhMM"`, 24-hour clock.
pub fn french_time<T: Timelike>(time: &T) -> String {
    format!("{:02}h{:02}", time.hour(), time.minute())
}

pub fn french_time_sentence<T: Datelike + Timelike>(now: &T) -> String {
    format!(
        "Bien sûr ! Nous sommes le {}, et il est {}. 😊",
        french_date(now),
        french_time(now)
    )
}

/// Sentence answering "what time is it" using the host's local clock.
pub fn localized_now_in_french() -> String {
    french_time_sentence(&Local::now())
}
