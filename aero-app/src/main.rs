use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use aero_client::auth::AuthService;
use aero_client::bookings::BookingService;
use aero_client::{ApiClient, Config, ConsoleNotifier, HttpFlightService, Notifier, SearchFlights};
use aero_core::query::{self, ParseFailure, REPHRASE_ADVICE};
use aero_core::search::SearchQuery;

#[derive(Debug, StructOpt)]
#[structopt(name = "aero", about = "Flight search and booking from the command line")]
enum Opt {
    /// Search flights from a free-text trip description or explicit fields
    Search {
        /// Trip description, e.g. "Flights from DEL to BOM for 2"
        text: Vec<String>,
        #[structopt(long)]
        from: Option<String>,
        #[structopt(long)]
        to: Option<String>,
        #[structopt(long, default_value = "1")]
        travellers: u32,
        /// Travel date, YYYY-MM-DD
        #[structopt(long)]
        date: Option<String>,
    },
    /// Book seats on a flight returned by a previous search
    Book {
        #[structopt(long)]
        flight_id: Uuid,
        #[structopt(long)]
        user_id: String,
        #[structopt(long, default_value = "1")]
        seats: u32,
        /// Unit price quoted in the search results
        #[structopt(long)]
        price: i64,
    },
    /// Sign in and print the session token
    Signin { email: String, password: String },
    /// Create an account
    Signup { email: String, password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aero_app=info,aero_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opt = Opt::from_args();
    let config = Config::load()?;
    tracing::info!("Using flights API at {}", config.api.base_url);
    let api = ApiClient::new(&config)?;

    match opt {
        Opt::Search {
            text,
            from,
            to,
            travellers,
            date,
        } => {
            let search = match (from, to) {
                (Some(from), Some(to)) => SearchQuery::new(&from, &to, travellers, date)?,
                _ => {
                    let text = text.join(" ");
                    match query::parse(&text) {
                        Ok(search) => search,
                        Err(ParseFailure::AmbiguousInput) => {
                            ConsoleNotifier.advise(REPHRASE_ADVICE);
                            std::process::exit(2);
                        }
                    }
                }
            };

            let service = HttpFlightService::new(api);
            let offers = service.search(&search).await?;

            println!("Available flights ({})", offers.len());
            if offers.is_empty() {
                println!("No flights found. Try changing filters.");
            }
            for offer in &offers {
                println!(
                    "{}  {} ({}) -> {} ({})  {} seats remaining  {}",
                    offer.flight_number,
                    offer.departure_airport_id,
                    offer.departure_time.format("%Y-%m-%d %H:%M"),
                    offer.arrival_airport_id,
                    offer.arrival_time.format("%H:%M"),
                    offer.total_seats,
                    offer.price,
                );
                println!("   id: {}", offer.id);
            }
        }
        Opt::Book {
            flight_id,
            user_id,
            seats,
            price,
        } => {
            let service = BookingService::new(api);
            service.book(flight_id, &user_id, seats, price).await?;
            println!("Booking successful for {} passengers", seats);
        }
        Opt::Signin { email, password } => {
            let service = AuthService::new(api);
            let token = service.sign_in(&email, &password).await?;
            println!("{}", token);
        }
        Opt::Signup { email, password } => {
            let service = AuthService::new(api);
            service.sign_up(&email, &password).await?;
            println!("Account created, sign in to get a token");
        }
    }

    Ok(())
}
