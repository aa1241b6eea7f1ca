use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{MovementStatus, MovementType};
use crate::shared::serde_utils::{lenient_i64, lenient_opt_f64, lenient_opt_i64, null_default};

/// Entry of `GET /inventory-audits`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub movement_type: MovementType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub quantity_after: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub status: MovementStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub unit_purchase_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub unit_sale_price: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl MovementRecord {
    /// OUT shown negative, IN positive, ADJUST as recorded
    pub fn display_quantity(&self) -> i64 {
        match self.movement_type {
            MovementType::Out => -self.quantity.abs(),
            MovementType::In => self.quantity.abs(),
            _ => self.quantity,
        }
    }

    /// "+5", "-3", "0"
    pub fn display_quantity_signed(&self) -> String {
        let q = self.display_quantity();
        if q > 0 {
            format!("+{q}")
        } else {
            q.to_string()
        }
    }

    /// Unit price relevant to the movement direction
    pub fn unit_price(&self) -> Option<f64> {
        match self.movement_type {
            MovementType::In => self.unit_purchase_price,
            MovementType::Out => self.unit_sale_price,
            _ => None,
        }
        .filter(|p| *p != 0.0)
    }

    pub fn total_value(&self) -> Option<f64> {
        self.unit_price().map(|p| self.quantity.abs() as f64 * p)
    }

    /// Card accent: failed, adjust, or success
    pub fn card_class(&self) -> &'static str {
        if self.status == MovementStatus::Failed {
            "failed"
        } else if self.movement_type == MovementType::Adjust {
            "adjust"
        } else {
            "success"
        }
    }

    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }

    /// List key that changes when processing settles, so the card redraws;
    /// `position` stands in for a missing id
    pub fn render_key(&self, position: usize) -> String {
        let id = self.id.clone().unwrap_or_else(|| position.to_string());
        format!(
            "{}:{}:{}",
            id,
            self.status.css_class(),
            self.error_message.as_deref().unwrap_or_default()
        )
    }
}

/// Accepts RFC 3339 and zone-less `YYYY-MM-DDThh:mm:ss[.fff]` (taken as UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Newest first, capped to `limit`; records without a readable timestamp go last
pub fn latest(mut records: Vec<MovementRecord>, limit: usize) -> Vec<MovementRecord> {
    records.sort_by_key(|r| std::cmp::Reverse(r.parsed_timestamp()));
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> MovementRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_quantity_sign() {
        assert_eq!(record(json!({"quantity": 3, "movement_type": "OUT"})).display_quantity(), -3);
        assert_eq!(record(json!({"quantity": -3, "movement_type": "IN"})).display_quantity(), 3);
        let adjust = record(json!({"quantity": -2, "movement_type": "ADJUST"}));
        assert_eq!(adjust.display_quantity_signed(), "-2");
        assert_eq!(record(json!({"quantity": 4, "movement_type": "IN"})).display_quantity_signed(), "+4");
    }

    #[test]
    fn test_total_value_uses_direction_price() {
        let out = record(json!({
            "quantity": -2, "movement_type": "OUT",
            "unit_purchase_price": 5.0, "unit_sale_price": 9.5
        }));
        assert_eq!(out.total_value(), Some(19.0));
        let adjust = record(json!({"quantity": 2, "movement_type": "ADJUST", "unit_sale_price": 9.5}));
        assert_eq!(adjust.total_value(), None);
    }

    #[test]
    fn test_unknown_status_and_type_are_tolerated() {
        let r = record(json!({"movement_type": "TRANSFER", "status": "PENDING"}));
        assert_eq!(r.movement_type, MovementType::Unknown);
        assert_eq!(r.status.display_name(), "Falha");
        assert_eq!(r.card_class(), "success");
    }

    #[test]
    fn test_null_fields_do_not_fail_the_list() {
        let rows: Vec<MovementRecord> = serde_json::from_value(json!([
            {"id": "a1", "quantity": 2, "movement_type": "IN"},
            {"id": "a2", "quantity": null, "movement_type": null, "status": null,
             "quantity_after": "5", "unit_sale_price": "9.90"}
        ]))
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].quantity, 0);
        assert_eq!(rows[1].movement_type, MovementType::default());
        assert_eq!(rows[1].status, MovementStatus::default());
        assert_eq!(rows[1].quantity_after, Some(5));
        assert_eq!(rows[1].unit_sale_price, Some(9.9));
    }

    #[test]
    fn test_render_key_follows_status() {
        let failed = record(json!({"id": "a1", "status": "FAILED", "error_message": "sem estoque"}));
        let processed = record(json!({"id": "a1", "status": "PROCESSED"}));
        assert_ne!(failed.render_key(0), processed.render_key(0));
        assert_eq!(processed.render_key(3), processed.render_key(7));
        assert_ne!(record(json!({})).render_key(1), record(json!({})).render_key(2));
    }

    #[test]
    fn test_latest_sorts_and_caps() {
        let records: Vec<MovementRecord> = (1..=50)
            .map(|d| {
                record(json!({
                    "id": d.to_string(),
                    "timestamp": format!("2025-03-{:02}T10:00:00", (d % 28) + 1)
                }))
            })
            .chain(std::iter::once(record(json!({"id": "none"}))))
            .collect();

        let top = latest(records, 40);
        assert_eq!(top.len(), 40);
        assert_eq!(top[0].timestamp.as_deref(), Some("2025-03-28T10:00:00"));
        assert!(top.iter().all(|r| r.id.as_deref() != Some("none")));
        assert!(top.windows(2).all(|w| w[0].parsed_timestamp() >= w[1].parsed_timestamp()));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2025-01-05T10:30:00Z").is_some());
        assert!(parse_timestamp("2025-01-05T10:30:00.123456").is_some());
        assert!(parse_timestamp("2025-01-05 10:30:00").is_some());
        assert!(parse_timestamp("ontem").is_none());
    }
}
