use std::error::Error;

use chrono::{Local, NaiveDate};

use kartingrm::client::HttpClient;
use kartingrm::config::BackendConfig;
use kartingrm::reservation::ReservationService;
use kartingrm::traits::UserInterface;
use kartingrm::RackView;

/// Alerts are printed, navigation is only logged
struct Terminal;

impl UserInterface for Terminal {
    fn alert(&self, message: &str) {
        eprintln!("/!\\ {}", message);
    }

    fn navigate(&self, route: &str) {
        log::info!("Navigation to {} is not supported in a terminal", route);
    }
}


#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let date = match std::env::args().nth(1) {
        None => Local::now().date_naive(),
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .map_err(|err| format!("Invalid date {:?} (expected YYYY-MM-DD): {}", arg, err))?,
    };

    let client = HttpClient::new(&BackendConfig::from_env())?;
    let service = ReservationService::new(client);

    let mut rack = RackView::new();
    println!("---- {} -----", kartingrm::calendar::rack::RACK_TITLE);
    rack.load_week(&service, &Terminal).await;
    kartingrm::utils::print_rack(&mut rack, date);

    if let Some(first) = rack.layout(date).into_iter().next() {
        rack.select_event(first.event);
        if let Some(details) = rack.selected_details() {
            println!();
            println!("{}", details);
        }
    }

    Ok(())
}
