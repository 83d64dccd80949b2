use awb_gen::reservation::{ReservationClient, ReservationRequest, WebhookReply};
use chrono::Utc;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Submit a transport reservation to the workflow webhook")]
struct Args {
    /// Webhook endpoint to post the reservation to
    #[arg(long)]
    endpoint: String,

    #[arg(long)]
    passenger: String,

    /// IATA code of the departure airport
    #[arg(long)]
    departure: String,

    /// IATA code of the destination airport
    #[arg(long)]
    destination: String,

    #[arg(long, default_value = "")]
    flight: String,

    /// Departure date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    date: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let request = ReservationRequest {
        passenger_name: args.passenger,
        departure: args.departure,
        destination: args.destination,
        requested_flight: args.flight,
        departure_date: args.date,
    };

    let client = ReservationClient::new(args.endpoint);
    match client.submit(&request, Utc::now()) {
        Ok(WebhookReply::Parsed(value)) => println!("accepted: {value}"),
        Ok(WebhookReply::RawText(text)) => println!("accepted: {text}"),
        Err(err) => {
            eprintln!("submission failed: {err}");
            std::process::exit(1);
        }
    }
}
