use serde::{Deserialize, Serialize};

/// The shipper or consignee block of the waybill. Free-text fields are
/// rendered as supplied; monetary and code fields are pre-formatted by the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub account_number: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
}

/// The issuing carrier's agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: String,
    pub city: String,
    pub iata_code: String,
    pub account_number: String,
}

/// Identity of the consignment itself: the waybill number and who issued it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsignmentInfo {
    pub waybill_number: String,
    pub origin_airport: String,
    pub issuer: String,
    pub issued_by: String,
}

/// Routing and booking details for the requested flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightBookingInfo {
    pub departure: String,
    pub route: String,
    pub destination: String,
    pub flight_date: String,
    pub carrier: String,
}

/// Declared values and the prepaid/collect election
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargesDeclaration {
    pub currency: String,
    pub declared_carriage: String,
    pub declared_customs: String,
    pub insurance: String,
    pub prepaid: bool,
    pub collect: bool,
}

/// One row of the tabular rate schedule, describing pieces, weight, and
/// charge for one cargo unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLineItem {
    pub pieces: String,
    pub gross_weight: String,
    pub weight_unit: String,
    pub rate_class: String,
    pub item_number: String,
    pub chargeable_weight: String,
    pub rate: String,
    pub total: String,
    /// Free text; the only table column that word-wraps
    pub nature_goods: String,
}

/// The totals block under the rate schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargesSummary {
    pub weight_charge: String,
    pub valuation_charge: String,
    pub tax: String,
    pub other_due_agent: String,
    pub other_due_carrier: String,
    pub total: String,
}

/// An accessorial charge; the section is omitted entirely when no charges
/// are present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherCharge {
    pub description: String,
    pub amount: String,
    /// Entitlement code, e.g. "A" (due agent) or "C" (due carrier)
    pub entitlement: String,
}

/// Execution block: where and when the waybill was signed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionInfo {
    pub date: String,
    pub place: String,
    pub shipper_signature: String,
    pub carrier_signature: String,
}

/// The complete waybill record. Constructed entirely by the caller before
/// rendering; the layout engine neither mutates nor retains it, so one
/// record can be rendered any number of times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirWaybill {
    pub consignment: ConsignmentInfo,
    pub shipper: PartyInfo,
    pub consignee: PartyInfo,
    pub agent: AgentInfo,
    pub flight: FlightBookingInfo,
    pub charges: ChargesDeclaration,
    pub rate_lines: Vec<RateLineItem>,
    pub summary: ChargesSummary,
    pub other_charges: Vec<OtherCharge>,
    pub execution: ExecutionInfo,
}
