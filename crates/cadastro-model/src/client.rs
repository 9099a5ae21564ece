use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated client record, ready to hand to the persistence layer.
///
/// `cpf` always holds exactly 11 digits and satisfies the CPF checksum;
/// `phone` holds 10 or 11 digits. Both are stored digit-only, with any
/// formatting punctuation stripped during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Batch-unique temporary identifier. The durable key is assigned by
    /// the persistence layer after the import result is handed over.
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    /// Tenant stamp, constant across a whole import batch.
    pub company_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let now = Utc::now();
        let client = ClientRecord {
            id: "temp_0_1".to_string(),
            name: "Maria Lima".to_string(),
            cpf: "98765432100".to_string(),
            phone: "11988888888".to_string(),
            email: Some("maria@email.com".to_string()),
            group: None,
            observations: None,
            company_id: "acme".to_string(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&client).expect("serialize client");
        assert_eq!(json["companyId"], "acme");
        assert_eq!(json["name"], "Maria Lima");
        assert!(json.get("group").is_none());
    }
}
