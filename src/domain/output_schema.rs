use serde_json::{json, Value};

use super::Broker;

/// JSON schema for one broker's structured model output.
///
/// Handed to the model backend as the response `format`, constraining
/// inference to a `{"data": [...]}` envelope of transaction records.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub format: Value,
}

impl OutputSchema {
    pub fn for_broker(broker: Broker) -> Self {
        match broker {
            Broker::Robinhood => Self::robinhood(),
            Broker::Fidelity => Self::fidelity(),
        }
    }

    fn robinhood() -> Self {
        Self {
            format: envelope(json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string" },
                    "action": { "type": "string" },
                    "trade_date": { "type": "string" },
                    "settle_date": { "type": "string" },
                    "account_type": { "type": "string" },
                    "price": { "type": "number" },
                    "quantity": { "type": "integer" },
                    "principal": { "type": "number" },
                    "commission": { "type": "number" },
                    "contract_fee": { "type": "number" },
                    "transaction_fee": { "type": "number" },
                    "net_amount": { "type": "number" },
                    "market": { "type": "string" },
                    "cap": { "type": "string" },
                    "us": { "type": "string" }
                },
                "required": [
                    "symbol", "action", "trade_date", "settle_date",
                    "account_type", "price", "quantity", "principal",
                    "commission", "contract_fee", "transaction_fee",
                    "net_amount", "market", "cap", "us"
                ]
            })),
        }
    }

    fn fidelity() -> Self {
        Self {
            format: envelope(json!({
                "type": "object",
                "properties": {
                    "date": { "type": "string" },
                    "action": { "type": "string" },
                    "symbol": { "type": "string" },
                    "quantity": { "type": "integer" },
                    "price": { "type": "number" },
                    "total": { "type": "number" },
                    "order_no": { "type": "string" },
                    "reference_no": { "type": "string" }
                },
                "required": [
                    "date", "action", "symbol", "quantity",
                    "price", "total", "order_no", "reference_no"
                ]
            })),
        }
    }
}

fn envelope(record_schema: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "array",
                "items": record_schema
            }
        },
        "required": ["data"]
    })
}
