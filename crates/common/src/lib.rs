//! Shared plumbing for the Find Wi-Fi workspace: logging setup, startup
//! environment checks and the small response types every surface reuses.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_serializes_with_message_key() {
        let m = types::MessageResponse::new("wifiName is required");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["message"], "wifiName is required");
    }
}
