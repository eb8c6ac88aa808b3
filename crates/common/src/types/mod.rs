use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform response wrapper returned by every resource endpoint.
///
/// `data` and `count` are omitted from the JSON body when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: message.into(), data: Some(data), count: None }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl Envelope<()> {
    /// Successful response without payload (e.g. delete).
    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), data: None, count: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), data: None, count: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_type_ok() {
        let h = Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn list_envelope_carries_count() {
        let env = Envelope::ok("Customers retrieved successfully", vec![1, 2, 3]).with_count(3);
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v, json!({"success": true, "message": "Customers retrieved successfully", "data": [1, 2, 3], "count": 3}));
    }

    #[test]
    fn failure_omits_data_and_count() {
        let v = serde_json::to_value(Envelope::failure("Customer not found with id: 7")).unwrap();
        assert_eq!(v, json!({"success": false, "message": "Customer not found with id: 7"}));
    }
}
