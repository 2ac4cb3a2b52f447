use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Outer wrapper returned by every OnAir endpoint.
///
/// The only meaningful field is `Content`, which holds the real payload as
/// raw JSON. It is re-decoded into the operation-specific type in a second
/// pass, so the same envelope type serves every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Content")]
    pub content: Box<RawValue>,
}

/// A company notification (financial events, system messages, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "PeopleId")]
    pub people_id: String,
    #[serde(rename = "CompanyId")]
    pub company_id: String,
    #[serde(rename = "IsRead")]
    pub is_read: bool,
    #[serde(rename = "IsNotification")]
    pub is_notification: bool,
    /// Event timestamp as sent by the server (zulu time, left unparsed).
    #[serde(rename = "ZuluEventTime")]
    pub zulu_event_time: String,
    #[serde(rename = "Category")]
    pub category: i32,
    #[serde(rename = "Action")]
    pub action: i32,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "AccountId")]
    pub account_id: String,
}

/// A completed or in-progress company flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "DepartureAirport")]
    pub departure_airport: Airport,
    #[serde(rename = "ArrivalActualAirport")]
    pub arrival_actual_airport: Airport,
    #[serde(rename = "Registered")]
    pub registered: bool,
    #[serde(rename = "ResultComments")]
    pub result_comments: String,
    #[serde(rename = "StartTime")]
    pub start_time: String,
    /// `null` on the wire while the flight is still in progress.
    #[serde(rename = "EndTime")]
    pub end_time: Option<String>,
}

/// Airport embedded by value inside a [`Flight`]; no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Airport {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "ICAO")]
    pub icao: String,
}

/// Cash-flow report: an ordered sequence of ledger entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlow {
    #[serde(rename = "Entries")]
    pub entries: Vec<CashFlowEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowEntry {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "CompanyId")]
    pub company_id: String,
    #[serde(rename = "AccountId")]
    pub account_id: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "CreationDate")]
    pub creation_date: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// The live service misspells this field; the rename must stay as-is
    /// for wire compatibility.
    #[serde(rename = "CarryFowarad")]
    pub carry_forward: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_field_names_match_wire() {
        let n = Notification {
            id: "n1".into(),
            people_id: "p1".into(),
            company_id: "co1".into(),
            is_read: false,
            is_notification: true,
            zulu_event_time: "2024-01-01T10:00:00Z".into(),
            category: 3,
            action: 7,
            description: "landing fee".into(),
            amount: -42.5,
            account_id: "ac1".into(),
        };
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(v["Id"], "n1");
        assert_eq!(v["PeopleId"], "p1");
        assert_eq!(v["ZuluEventTime"], "2024-01-01T10:00:00Z");
        assert_eq!(v["Amount"], -42.5);
    }

    #[test]
    fn cashflow_entry_keeps_misspelled_wire_field() {
        let e = CashFlowEntry {
            id: "c1".into(),
            company_id: "co1".into(),
            account_id: "ac1".into(),
            amount: 100.5,
            creation_date: "2024-01-01".into(),
            description: "fuel".into(),
            carry_forward: "true".into(),
        };
        let v = serde_json::to_value(&e).unwrap();
        assert!(v.get("CarryFowarad").is_some());
        assert!(v.get("CarryForward").is_none());
    }

    #[test]
    fn flight_end_time_null_is_none() {
        let json = r#"{
            "Id":"f1",
            "DepartureAirport":{"Id":"a1","ICAO":"ESSA"},
            "ArrivalActualAirport":{"Id":"a2","ICAO":"ESGG"},
            "Registered":true,
            "ResultComments":"",
            "StartTime":"2024-01-01T10:00:00Z",
            "EndTime":null
        }"#;
        let f: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(f.end_time, None);
        assert_eq!(f.departure_airport.icao, "ESSA");
    }
}
