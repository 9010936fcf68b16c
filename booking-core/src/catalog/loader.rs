//! Booking data file loading and validation

use shared::{BookingData, BookingError, BookingResult};
use std::path::Path;
use tracing::{error, info};

/// Load and validate the booking data file
///
/// A missing file, malformed JSON, or a structurally unusable catalog
/// all surface as [`BookingError::DataLoad`]; the caller shows the
/// generic retry message and keeps the booking surface disabled.
pub fn load_booking_data(path: impl AsRef<Path>) -> BookingResult<BookingData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to read booking data file");
        BookingError::DataLoad(format!("failed to read {}: {e}", path.display()))
    })?;

    let data: BookingData = serde_json::from_str(&raw).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to parse booking data file");
        BookingError::DataLoad(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate(&data)?;

    info!(
        path = %path.display(),
        theaters = data.theaters.len(),
        movies = data.showtimes.len(),
        addon_items = data.addons.items.len(),
        "Booking data loaded"
    );
    Ok(data)
}

/// Structural checks beyond what deserialization enforces
fn validate(data: &BookingData) -> BookingResult<()> {
    if data.pricing.tickets.is_empty() {
        return Err(BookingError::DataLoad(
            "pricing section lists no ticket types".to_string(),
        ));
    }
    if !(0.0..1.0).contains(&data.pricing.tax_rate) {
        return Err(BookingError::DataLoad(format!(
            "tax rate {} outside [0, 1)",
            data.pricing.tax_rate
        )));
    }
    if data.theaters.is_empty() {
        return Err(BookingError::DataLoad("no theaters defined".to_string()));
    }
    for (name, theater) in &data.theaters {
        for (screen_id, screen) in &theater.screens {
            if screen.rows.is_empty() || screen.seats_per_row == 0 {
                return Err(BookingError::DataLoad(format!(
                    "screen '{screen_id}' in theater '{name}' has an empty layout"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) const SAMPLE_JSON: &str = r#"{
        "pricing": {
            "tickets": {"adult": 12.0, "child": 8.5, "senior": 9.5, "student": 10.0},
            "premiumSeating": 3.0,
            "formatPricing": {"IMAX": 2.0, "3D": 1.5},
            "serviceFee": 1.5,
            "taxRate": 0.08
        },
        "theaters": {
            "Mall Central": {
                "id": "mall-central",
                "name": "Mall Central",
                "screens": {
                    "screen-1": {
                        "name": "Screen 1",
                        "rows": ["A", "B", "C", "D", "E"],
                        "seatsPerRow": 10,
                        "premiumRows": ["D", "E"],
                        "handicapSeats": ["A1", "A10"]
                    }
                }
            }
        },
        "showtimes": {
            "interstellar": {
                "2024-01-15": {
                    "Mall Central": {
                        "screen-1": [
                            {"time": "16:00", "format": "Standard", "occupiedSeats": ["B3"]},
                            {"time": "19:30", "format": "IMAX", "occupiedSeats": ["C4", "C5", "D7"]}
                        ]
                    }
                }
            }
        },
        "addons": {
            "categories": {
                "snacks": {"name": "Snacks"},
                "drinks": {"name": "Drinks"},
                "combos": {"name": "Combo Deals"}
            },
            "items": {
                "popcorn-large": {
                    "name": "Large Popcorn",
                    "description": "Freshly popped, choice of butter",
                    "price": 8.5,
                    "category": "snacks"
                },
                "soda-large": {
                    "name": "Large Soda",
                    "price": 5.5,
                    "category": "drinks"
                },
                "movie-combo": {
                    "name": "Movie Night Combo",
                    "description": "Large popcorn + two large sodas",
                    "price": 15.0,
                    "category": "combos",
                    "savings": 4.5,
                    "featured": true
                }
            }
        }
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_file() {
        let file = write_temp(SAMPLE_JSON);
        let data = load_booking_data(file.path()).unwrap();
        assert_eq!(data.pricing.tickets.len(), 4);
        assert_eq!(data.theaters.len(), 1);
        assert_eq!(data.addons.items.len(), 3);
    }

    #[test]
    fn missing_file_is_data_load_error() {
        let err = load_booking_data("/nonexistent/booking_info.json").unwrap_err();
        assert!(matches!(err, BookingError::DataLoad(_)));
        assert!(!err.code().is_recoverable());
    }

    #[test]
    fn malformed_json_is_data_load_error() {
        let file = write_temp("{ this is not json");
        let err = load_booking_data(file.path()).unwrap_err();
        assert!(matches!(err, BookingError::DataLoad(_)));
    }

    #[test]
    fn missing_section_is_data_load_error() {
        // No addons section at all
        let file = write_temp(
            r#"{"pricing": {"tickets": {"adult": 12.0}}, "theaters": {}, "showtimes": {}}"#,
        );
        let err = load_booking_data(file.path()).unwrap_err();
        assert!(matches!(err, BookingError::DataLoad(_)));
    }

    #[test]
    fn rejects_out_of_range_tax_rate() {
        let bad = SAMPLE_JSON.replace("\"taxRate\": 0.08", "\"taxRate\": 1.25");
        let file = write_temp(&bad);
        let err = load_booking_data(file.path()).unwrap_err();
        assert!(matches!(err, BookingError::DataLoad(_)));
    }

    #[test]
    fn rejects_empty_screen_layout() {
        let bad = SAMPLE_JSON.replace("\"rows\": [\"A\", \"B\", \"C\", \"D\", \"E\"]", "\"rows\": []");
        let file = write_temp(&bad);
        let err = load_booking_data(file.path()).unwrap_err();
        assert!(matches!(err, BookingError::DataLoad(_)));
    }
}
