use awb_gen::{
    AgentInfo, AirWaybill, AwbError, ChargesDeclaration, ChargesSummary, ConsignmentInfo,
    ExecutionInfo, FileSink, FlightBookingInfo, OtherCharge, OutputSink, PartyInfo, RateLineItem,
    WaybillLayout,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Render a sample air waybill PDF")]
struct Args {
    /// Directory to write the artifact into
    #[arg(short, long, default_value = ".")]
    out_dir: String,
}

fn main() -> Result<(), AwbError> {
    env_logger::init();
    let args = Args::parse();

    let layout = WaybillLayout::new();
    let artifact = layout.render(&sample_waybill())?;

    let mut sink = FileSink::new(&args.out_dir);
    sink.persist(&artifact)?;
    println!("wrote {}", artifact.file_name);
    Ok(())
}

fn sample_waybill() -> AirWaybill {
    AirWaybill {
        consignment: ConsignmentInfo {
            waybill_number: "124-45678901".to_string(),
            origin_airport: "ORY".to_string(),
            issuer: "Air Transport Services".to_string(),
            issued_by: "Paris Orly cargo desk".to_string(),
        },
        shipper: PartyInfo {
            account_number: "SHP-20415".to_string(),
            name: "Pompes Funèbres Martin".to_string(),
            address: "18 rue de la République".to_string(),
            city: "Lyon".to_string(),
            country: "France".to_string(),
            postal_code: "69002".to_string(),
        },
        consignee: PartyInfo {
            account_number: "CNE-88110".to_string(),
            name: "Funérarium El Djazair".to_string(),
            address: "7 boulevard Zighout Youcef".to_string(),
            city: "Alger".to_string(),
            country: "Algérie".to_string(),
            postal_code: "16000".to_string(),
        },
        agent: AgentInfo {
            name: "Transmonde Cargo".to_string(),
            city: "Paris".to_string(),
            iata_code: "20-4 5678".to_string(),
            account_number: "AGT-00441".to_string(),
        },
        flight: FlightBookingInfo {
            departure: "ORY".to_string(),
            route: "ORY-ALG direct".to_string(),
            destination: "ALG".to_string(),
            flight_date: "AH1007 / 18 MAR".to_string(),
            carrier: "Air Algérie".to_string(),
        },
        charges: ChargesDeclaration {
            currency: "EUR".to_string(),
            declared_carriage: "NVD".to_string(),
            declared_customs: "NCV".to_string(),
            insurance: "NIL".to_string(),
            prepaid: true,
            collect: false,
        },
        rate_lines: vec![RateLineItem {
            pieces: "1".to_string(),
            gross_weight: "185.0".to_string(),
            weight_unit: "kg".to_string(),
            rate_class: "Q".to_string(),
            item_number: "0008".to_string(),
            chargeable_weight: "185.0".to_string(),
            rate: "4.10".to_string(),
            total: "758.50".to_string(),
            nature_goods: "HUM - human remains in hermetically sealed coffin, accompanied"
                .to_string(),
        }],
        summary: ChargesSummary {
            weight_charge: "758.50".to_string(),
            valuation_charge: "0.00".to_string(),
            tax: "151.70".to_string(),
            other_due_agent: "45.00".to_string(),
            other_due_carrier: "30.00".to_string(),
            total: "985.20".to_string(),
        },
        other_charges: vec![
            OtherCharge {
                description: "Handling".to_string(),
                amount: "45.00".to_string(),
                entitlement: "A".to_string(),
            },
            OtherCharge {
                description: "Security surcharge".to_string(),
                amount: "30.00".to_string(),
                entitlement: "C".to_string(),
            },
        ],
        execution: ExecutionInfo {
            date: "18 MAR 2024".to_string(),
            place: "Paris".to_string(),
            shipper_signature: "P. Martin".to_string(),
            carrier_signature: "Air Algérie / Orly".to_string(),
        },
    }
}
