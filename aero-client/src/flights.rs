use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use aero_core::search::{FlightOffer, SearchQuery};

use crate::http::ApiClient;
use crate::ClientError;

/// Search-execution boundary: takes the structured query, returns flight
/// offers. The parser's output is used here without further transformation.
#[async_trait]
pub trait SearchFlights: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<FlightOffer>, ClientError>;
}

pub struct HttpFlightService {
    api: ApiClient,
}

impl HttpFlightService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SearchFlights for HttpFlightService {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<FlightOffer>, ClientError> {
        let params = query_params(query);
        let offers: Vec<FlightOffer> = self
            .api
            .send_json(self.api.request(Method::GET, "/flights").query(&params))
            .await?;
        info!(
            "Search {} -> {} returned {} offers",
            query.origin_code,
            query.destination_code,
            offers.len()
        );
        Ok(offers)
    }
}

/// Map a [`SearchQuery`] onto the API's query-parameter names. Optional
/// fields are omitted entirely rather than sent empty.
fn query_params(query: &SearchQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("departureAirportId", query.origin_code.to_uppercase()),
        ("arrivalAirportId", query.destination_code.to_uppercase()),
        ("travellers", query.traveller_count.to_string()),
    ];
    if let Some(date) = &query.travel_date {
        params.push(("tripDate", date.clone()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_full() {
        let query = SearchQuery {
            origin_code: "DEL".to_string(),
            destination_code: "BOM".to_string(),
            traveller_count: 2,
            travel_date: Some("2024-12-25".to_string()),
        };
        let params = query_params(&query);
        assert_eq!(
            params,
            vec![
                ("departureAirportId", "DEL".to_string()),
                ("arrivalAirportId", "BOM".to_string()),
                ("travellers", "2".to_string()),
                ("tripDate", "2024-12-25".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_omit_absent_date() {
        let query = SearchQuery {
            origin_code: "del".to_string(),
            destination_code: "bom".to_string(),
            traveller_count: 1,
            travel_date: None,
        };
        let params = query_params(&query);
        assert_eq!(params.len(), 3);
        // Codes are folded to uppercase on the way out, matching what the
        // backend stores for airport ids.
        assert_eq!(params[0].1, "DEL");
        assert_eq!(params[1].1, "BOM");
    }
}
