//! Catalog loading and showtime resolution
//!
//! The booking data file nests showtimes as movie -> date -> theater
//! -> screen -> index. That composite key is resolved exactly once,
//! at load time, into a flat [`ShowtimeContext`]; the rest of the
//! engine never walks the nested mapping again.

mod loader;

pub use loader::load_booking_data;

use shared::{BookingData, BookingError, BookingResult, Screen, Showtime};

/// Everything the session needs about the chosen screening, resolved
/// from the nested schedule once
#[derive(Debug, Clone, PartialEq)]
pub struct ShowtimeContext {
    pub movie_id: String,
    /// Show date as scheduled ("2024-01-15")
    pub show_date: String,
    pub theater_id: String,
    pub theater_name: String,
    pub screen_id: String,
    pub screen: Screen,
    pub showtime: Showtime,
}

/// Resolve a (movie, date, showtime index) triple against the nested
/// schedule
///
/// Theaters and screens are scanned in sorted order so resolution is
/// deterministic; the index counts showtimes within the first screen
/// that has enough of them, matching how the booking page picks the
/// screening for a URL parameter.
pub fn resolve_showtime(
    data: &BookingData,
    movie_id: &str,
    show_date: &str,
    showtime_index: usize,
) -> BookingResult<ShowtimeContext> {
    let by_date = data.showtimes.get(movie_id).ok_or_else(|| {
        BookingError::DataLoad(format!("no showtimes found for movie '{movie_id}'"))
    })?;
    let by_theater = by_date.get(show_date).ok_or_else(|| {
        BookingError::DataLoad(format!(
            "no showtimes found for movie '{movie_id}' on date {show_date}"
        ))
    })?;

    let mut theater_names: Vec<&String> = by_theater.keys().collect();
    theater_names.sort();

    for theater_name in theater_names {
        let screens = &by_theater[theater_name];
        let mut screen_ids: Vec<&String> = screens.keys().collect();
        screen_ids.sort();

        for screen_id in screen_ids {
            let showtimes = &screens[screen_id];
            let Some(showtime) = showtimes.get(showtime_index) else {
                continue;
            };

            let theater = data.theaters.get(theater_name).ok_or_else(|| {
                BookingError::DataLoad(format!("theater data for '{theater_name}' not found"))
            })?;
            let screen = theater.screens.get(screen_id).ok_or_else(|| {
                BookingError::DataLoad(format!(
                    "screen '{screen_id}' in theater '{theater_name}' not found"
                ))
            })?;

            tracing::info!(
                movie_id,
                show_date,
                theater = %theater.name,
                screen = %screen.name,
                time = %showtime.time,
                format = %showtime.format,
                "Resolved showtime"
            );

            return Ok(ShowtimeContext {
                movie_id: movie_id.to_string(),
                show_date: show_date.to_string(),
                theater_id: theater.id.clone(),
                theater_name: theater.name.clone(),
                screen_id: screen_id.clone(),
                screen: screen.clone(),
                showtime: showtime.clone(),
            });
        }
    }

    Err(BookingError::DataLoad(format!(
        "showtime at index {showtime_index} not found for '{movie_id}' on {show_date}"
    )))
}
