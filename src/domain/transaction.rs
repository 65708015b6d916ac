/// One structured transaction extracted from a confirmation page.
///
/// Records are dynamic field mappings rather than per-broker structs:
/// the model output is validated against the broker's schema at
/// inference time, and the CSV writer derives its header from the
/// first record's key order (`serde_json` is built with
/// `preserve_order`, so insertion order survives decoding).
pub type TransactionRecord = serde_json::Map<String, serde_json::Value>;
