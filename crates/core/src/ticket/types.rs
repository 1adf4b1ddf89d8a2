//! Core ticket data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TicketRequestError;

/// Kind of ticket sold at the venue.
///
/// The set is closed: anything other than these three names is rejected when
/// a request is built, never at pricing time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// All ticket types, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Returns the wire name of this ticket type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this type occupies a seat.
    pub fn needs_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Whether this type may only be bought alongside an adult ticket.
    pub fn requires_adult(&self) -> bool {
        matches!(self, TicketType::Child | TicketType::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            other => Err(TicketRequestError::UnknownTicketType(other.to_string())),
        }
    }
}

/// Raw shape of a request on the wire, validated into [`TicketTypeRequest`].
#[derive(Debug, Deserialize)]
struct RawTicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: i64,
}

/// An immutable request for a number of tickets of one type.
///
/// The count is always at least one; construction fails otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawTicketTypeRequest")]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a request for `count` tickets of `ticket_type`.
    pub fn new(ticket_type: TicketType, count: i64) -> Result<Self, TicketRequestError> {
        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(TicketRequestError::InvalidCount(count))?;

        Ok(Self { ticket_type, count })
    }

    /// Creates a request from a ticket type name such as `"ADULT"`.
    pub fn parse(ticket_type: &str, count: i64) -> Result<Self, TicketRequestError> {
        Self::new(ticket_type.parse()?, count)
    }

    /// Decodes a JSON array of `{"type": ..., "count": ...}` objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, TicketRequestError> {
        serde_json::from_str(json).map_err(|e| TicketRequestError::Malformed(e.to_string()))
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl TryFrom<RawTicketTypeRequest> for TicketTypeRequest {
    type Error = TicketRequestError;

    fn try_from(raw: RawTicketTypeRequest) -> Result<Self, Self::Error> {
        Self::new(raw.ticket_type, raw.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_requests() {
        let adult = TicketTypeRequest::parse("ADULT", 3).unwrap();
        assert_eq!(adult.ticket_type(), TicketType::Adult);
        assert_eq!(adult.count(), 3);

        let child = TicketTypeRequest::parse("CHILD", 2).unwrap();
        assert_eq!(child.ticket_type(), TicketType::Child);
        assert_eq!(child.count(), 2);

        let infant = TicketTypeRequest::parse("INFANT", 1).unwrap();
        assert_eq!(infant.ticket_type(), TicketType::Infant);
        assert_eq!(infant.count(), 1);
    }

    #[test]
    fn test_unknown_ticket_type_rejected() {
        let err = TicketTypeRequest::parse("SENIOR", 2).unwrap_err();
        assert_eq!(err, TicketRequestError::UnknownTicketType("SENIOR".to_string()));

        // Near misses are not accepted either
        assert!(TicketTypeRequest::parse("ADULTS", 4).is_err());
        assert!(TicketTypeRequest::parse("adult", 4).is_err());
    }

    #[test]
    fn test_non_positive_count_rejected() {
        assert_eq!(
            TicketTypeRequest::new(TicketType::Adult, 0).unwrap_err(),
            TicketRequestError::InvalidCount(0)
        );
        assert_eq!(
            TicketTypeRequest::new(TicketType::Child, -3).unwrap_err(),
            TicketRequestError::InvalidCount(-3)
        );
    }

    #[test]
    fn test_count_beyond_u32_rejected() {
        let too_many = i64::from(u32::MAX) + 1;
        assert!(matches!(
            TicketTypeRequest::new(TicketType::Adult, too_many),
            Err(TicketRequestError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_seat_and_adult_rules_per_type() {
        assert!(TicketType::Adult.needs_seat());
        assert!(TicketType::Child.needs_seat());
        assert!(!TicketType::Infant.needs_seat());

        assert!(!TicketType::Adult.requires_adult());
        assert!(TicketType::Child.requires_adult());
        assert!(TicketType::Infant.requires_adult());
    }

    #[test]
    fn test_ticket_type_display_matches_wire_name() {
        for ticket_type in TicketType::ALL {
            assert_eq!(ticket_type.to_string().parse::<TicketType>().unwrap(), ticket_type);
        }
    }

    #[test]
    fn test_deserialize_request() {
        let request: TicketTypeRequest =
            serde_json::from_str(r#"{"type": "CHILD", "count": 4}"#).unwrap();
        assert_eq!(request.ticket_type(), TicketType::Child);
        assert_eq!(request.count(), 4);
    }

    #[test]
    fn test_deserialize_rejects_bad_count() {
        assert!(serde_json::from_str::<TicketTypeRequest>(r#"{"type": "ADULT", "count": 0}"#)
            .is_err());
        assert!(serde_json::from_str::<TicketTypeRequest>(r#"{"type": "ADULT", "count": 2.5}"#)
            .is_err());
        assert!(serde_json::from_str::<TicketTypeRequest>(r#"{"type": "ADULT", "count": "two"}"#)
            .is_err());
    }

    #[test]
    fn test_serialize_request() {
        let request = TicketTypeRequest::new(TicketType::Infant, 1).unwrap();
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json, serde_json::json!({"type": "INFANT", "count": 1}));
    }

    #[test]
    fn test_list_from_json() {
        let requests = TicketTypeRequest::list_from_json(
            r#"[{"type": "ADULT", "count": 2}, {"type": "INFANT", "count": 1}]"#,
        )
        .unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].ticket_type(), TicketType::Infant);

        let err = TicketTypeRequest::list_from_json(r#"[{"type": "SENIOR", "count": 1}]"#)
            .unwrap_err();
        assert!(matches!(err, TicketRequestError::Malformed(_)));
    }
}
