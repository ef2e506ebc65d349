use reqwest::Method;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::http::ApiClient;
use crate::ClientError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub flight_id: Uuid,
    pub user_id: String,
    pub no_of_seats: u32,
    pub total_cost: i64,
}

pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Book `seats` seats on a flight at the quoted unit price. Each call
    /// sends a fresh idempotency key so a retried request cannot double-book.
    pub async fn book(
        &self,
        flight_id: Uuid,
        user_id: &str,
        seats: u32,
        unit_price: i64,
    ) -> Result<(), ClientError> {
        if !self.api.is_authenticated() {
            return Err(ClientError::Unauthenticated(
                "Please sign in to book".to_string(),
            ));
        }

        let request = BookingRequest {
            flight_id,
            user_id: user_id.to_string(),
            no_of_seats: seats,
            total_cost: unit_price * i64::from(seats),
        };

        let idempotency_key = Uuid::new_v4();
        let _: serde_json::Value = self
            .api
            .send_json(
                self.api
                    .request(Method::POST, "/bookings")
                    .header("x-idempotency-key", idempotency_key.to_string())
                    .json(&request),
            )
            .await?;

        info!(
            "Booking confirmed for {} seats on flight {}",
            seats, flight_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_request_serialization() {
        let request = BookingRequest {
            flight_id: Uuid::nil(),
            user_id: "user-1".to_string(),
            no_of_seats: 3,
            total_cost: 5400 * 3,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["flightId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["noOfSeats"], 3);
        assert_eq!(json["totalCost"], 16200);
    }
}
