use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::{CoreError, CoreResult};

/// Structured flight search parameters. Built either from the search form
/// fields or by `query::parse` from a free-text trip description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin_code: String,
    pub destination_code: String,
    pub traveller_count: u32,
    /// YYYY-MM-DD text. Digit shape only, never calendar-validated.
    pub travel_date: Option<String>,
}

impl SearchQuery {
    /// Build a query from form-style inputs. Airport codes are folded to
    /// uppercase and a zero traveller count falls back to 1.
    pub fn new(
        origin: &str,
        destination: &str,
        travellers: u32,
        travel_date: Option<String>,
    ) -> CoreResult<Self> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(CoreError::ValidationError(
                "origin and destination are required".to_string(),
            ));
        }
        Ok(Self {
            origin_code: origin.to_uppercase(),
            destination_code: destination.to_uppercase(),
            traveller_count: travellers.max(1),
            travel_date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: Uuid,
    pub flight_number: String,
    pub departure_airport_id: String,
    pub arrival_airport_id: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    /// Seats still open for sale on this flight.
    pub total_seats: i32,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_offer_deserialization() {
        let json = r#"
            {
                "id": "7f2c1d8e-4f3a-4b21-9c0d-5e6f7a8b9c0d",
                "flightNumber": "AI-101",
                "departureAirportId": "DEL",
                "arrivalAirportId": "BOM",
                "departureTime": "2024-12-25T06:30:00Z",
                "arrivalTime": "2024-12-25T08:45:00Z",
                "totalSeats": 42,
                "price": 5400
            }
        "#;
        let offer: FlightOffer = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(offer.flight_number, "AI-101");
        assert_eq!(offer.departure_airport_id, "DEL");
        assert_eq!(offer.total_seats, 42);
        assert_eq!(offer.price, 5400);
    }

    #[test]
    fn test_new_uppercases_codes() {
        let query = SearchQuery::new("del", "bom", 2, None).unwrap();
        assert_eq!(query.origin_code, "DEL");
        assert_eq!(query.destination_code, "BOM");
        assert_eq!(query.traveller_count, 2);
    }

    #[test]
    fn test_new_clamps_zero_travellers() {
        let query = SearchQuery::new("DEL", "BOM", 0, None).unwrap();
        assert_eq!(query.traveller_count, 1);
    }

    #[test]
    fn test_new_rejects_blank_codes() {
        assert!(SearchQuery::new("  ", "BOM", 1, None).is_err());
        assert!(SearchQuery::new("DEL", "", 1, None).is_err());
    }
}
