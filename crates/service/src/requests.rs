//! Inbound request shapes and their field rules.
//!
//! Every field carries `#[serde(default)]` so that a missing field is
//! reported by the rule table together with every other failure, instead of
//! aborting decoding at the first absent key.

use models::{
    area::NewArea,
    review::NewReview,
    shop::NewShop,
    validation::{is_key, is_present, is_url, max_chars, ValidationErrors, Validator},
    wifi_service::NewWifiService,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const AREA_KEY_MAX: usize = 64;
pub const NAME_MAX: usize = 255;
pub const LINK_MAX: usize = 2048;
pub const ADDRESS_MAX: usize = 512;
pub const COMMENT_MAX: usize = 1000;

/// Turns a raw request into the validated input of a domain entity.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

fn blank_to_none(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterServiceRequest {
    #[serde(default)]
    pub wifi_name: String,
    #[serde(default)]
    pub link: String,
}

static SERVICE_RULES: Lazy<Validator<RegisterServiceRequest>> = Lazy::new(|| {
    Validator::new()
        .rule("wifiName", "is required", |r: &RegisterServiceRequest| is_present(&r.wifi_name))
        .rule("wifiName", format!("must be at most {NAME_MAX} characters"), |r: &RegisterServiceRequest| {
            max_chars(&r.wifi_name, NAME_MAX)
        })
        .rule("link", "is required", |r: &RegisterServiceRequest| is_present(&r.link))
        .rule("link", format!("must be at most {LINK_MAX} characters"), |r: &RegisterServiceRequest| {
            max_chars(r.link.trim(), LINK_MAX)
        })
        .rule("link", "must be a URL", |r: &RegisterServiceRequest| is_url(&r.link))
});

impl Validate for RegisterServiceRequest {
    type Output = NewWifiService;

    fn validate(self) -> Result<NewWifiService, ValidationErrors> {
        SERVICE_RULES.validate(&self)?;
        Ok(NewWifiService {
            wifi_name: self.wifi_name.trim().to_string(),
            link: self.link.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterShopRequest {
    #[serde(default)]
    pub shop_name: String,
    #[serde(default)]
    pub area_key: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub service_id: Option<i32>,
}

static SHOP_RULES: Lazy<Validator<RegisterShopRequest>> = Lazy::new(|| {
    Validator::new()
        .rule("shopName", "is required", |r: &RegisterShopRequest| is_present(&r.shop_name))
        .rule("shopName", format!("must be at most {NAME_MAX} characters"), |r: &RegisterShopRequest| {
            max_chars(&r.shop_name, NAME_MAX)
        })
        .rule("areaKey", "must not be blank", |r: &RegisterShopRequest| {
            r.area_key.as_deref().map_or(true, is_present)
        })
        .rule("areaKey", format!("must be at most {AREA_KEY_MAX} characters"), |r: &RegisterShopRequest| {
            r.area_key.as_deref().map_or(true, |k| max_chars(k.trim(), AREA_KEY_MAX))
        })
        .rule("areaKey", "may only contain letters, digits, '-' and '_'", |r: &RegisterShopRequest| {
            r.area_key.as_deref().map_or(true, |k| is_key(k.trim()))
        })
        .rule("address", format!("must be at most {ADDRESS_MAX} characters"), |r: &RegisterShopRequest| {
            r.address.as_deref().map_or(true, |a| max_chars(a.trim(), ADDRESS_MAX))
        })
        .rule("serviceId", "is required", |r: &RegisterShopRequest| r.service_id.is_some())
        .rule("serviceId", "must be a positive id", |r: &RegisterShopRequest| {
            r.service_id.is_some_and(|id| id >= 1)
        })
});

impl Validate for RegisterShopRequest {
    type Output = NewShop;

    fn validate(self) -> Result<NewShop, ValidationErrors> {
        SHOP_RULES.validate(&self)?;
        let service_id = self
            .service_id
            .ok_or_else(|| ValidationErrors::single("serviceId", "is required"))?;
        Ok(NewShop {
            shop_name: self.shop_name.trim().to_string(),
            area_key: blank_to_none(self.area_key),
            address: blank_to_none(self.address),
            service_id,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAreaRequest {
    #[serde(default)]
    pub area_key: String,
    #[serde(default)]
    pub area_name: String,
}

static AREA_RULES: Lazy<Validator<RegisterAreaRequest>> = Lazy::new(|| {
    Validator::new()
        .rule("areaKey", "is required", |r: &RegisterAreaRequest| is_present(&r.area_key))
        .rule("areaKey", format!("must be at most {AREA_KEY_MAX} characters"), |r: &RegisterAreaRequest| {
            max_chars(r.area_key.trim(), AREA_KEY_MAX)
        })
        .rule("areaKey", "may only contain letters, digits, '-' and '_'", |r: &RegisterAreaRequest| {
            is_key(r.area_key.trim())
        })
        .rule("areaName", "is required", |r: &RegisterAreaRequest| is_present(&r.area_name))
        .rule("areaName", format!("must be at most {NAME_MAX} characters"), |r: &RegisterAreaRequest| {
            max_chars(&r.area_name, NAME_MAX)
        })
});

impl Validate for RegisterAreaRequest {
    type Output = NewArea;

    fn validate(self) -> Result<NewArea, ValidationErrors> {
        AREA_RULES.validate(&self)?;
        Ok(NewArea {
            area_key: self.area_key.trim().to_string(),
            area_name: self.area_name.trim().to_string(),
        })
    }
}

/// Review body; `shop_id` comes from the route, not the payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReviewRequest {
    #[serde(default, skip_serializing)]
    pub shop_id: Option<i32>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
}

static REVIEW_RULES: Lazy<Validator<RegisterReviewRequest>> = Lazy::new(|| {
    Validator::new()
        .rule("shopId", "must be a positive id", |r: &RegisterReviewRequest| {
            r.shop_id.is_some_and(|id| id >= 1)
        })
        .rule("rating", "is required", |r: &RegisterReviewRequest| r.rating.is_some())
        .rule("rating", "must be between 1 and 5", |r: &RegisterReviewRequest| {
            r.rating.is_some_and(|n| (1..=5).contains(&n))
        })
        .rule("comment", format!("must be at most {COMMENT_MAX} characters"), |r: &RegisterReviewRequest| {
            r.comment.as_deref().map_or(true, |c| max_chars(c, COMMENT_MAX))
        })
});

impl Validate for RegisterReviewRequest {
    type Output = NewReview;

    fn validate(self) -> Result<NewReview, ValidationErrors> {
        REVIEW_RULES.validate(&self)?;
        match (self.shop_id, self.rating) {
            (Some(shop_id), Some(rating)) => Ok(NewReview {
                shop_id,
                rating,
                comment: blank_to_none(self.comment),
            }),
            _ => Err(ValidationErrors::single("rating", "is required")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(wifi_name: &str, link: &str) -> RegisterServiceRequest {
        RegisterServiceRequest { wifi_name: wifi_name.into(), link: link.into() }
    }

    #[test]
    fn service_request_becomes_new_service() {
        let new = service(" CafeWiFi ", "https://example.com").validate().unwrap();
        assert_eq!(new.wifi_name, "CafeWiFi");
        assert_eq!(new.link, "https://example.com");
    }

    #[test]
    fn empty_service_request_lists_both_fields() {
        let err = service("", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "wifiName: is required; link: is required");
    }

    #[test]
    fn service_link_must_look_like_a_url() {
        let err = service("CafeWiFi", "example").validate().unwrap_err();
        assert_eq!(err.to_string(), "link: must be a URL");
    }

    #[test]
    fn missing_json_fields_reach_the_rules() {
        let req: RegisterServiceRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.validate().unwrap_err().errors().len(), 2);
    }

    #[test]
    fn shop_request_requires_name_and_service() {
        let err = RegisterShopRequest::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "shopName: is required; serviceId: is required");

        let err = RegisterShopRequest { shop_name: "Main St".into(), service_id: Some(0), ..Default::default() }
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "serviceId: must be a positive id");
    }

    #[test]
    fn shop_request_optional_location_fields() {
        let req: RegisterShopRequest =
            serde_json::from_str(r#"{"shopName":"Main St","serviceId":1,"address":"  "}"#).unwrap();
        let new = req.validate().unwrap();
        assert_eq!(new.service_id, 1);
        assert_eq!(new.area_key, None);
        assert_eq!(new.address, None);

        let err = RegisterShopRequest {
            shop_name: "Main St".into(),
            area_key: Some("shi buya".into()),
            service_id: Some(1),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.has_field("areaKey"));
    }

    #[test]
    fn lengths_follow_column_limits() {
        let link = format!("https://example.com/{}", "a".repeat(LINK_MAX));
        let err = service("CafeWiFi", &link).validate().unwrap_err();
        assert_eq!(err.to_string(), format!("link: must be at most {LINK_MAX} characters"));

        let longest = format!("https://example.com/{}", "a".repeat(LINK_MAX - "https://example.com/".len()));
        assert!(service("CafeWiFi", &longest).validate().is_ok());

        let shop = |key: String| RegisterShopRequest {
            shop_name: "Main St".into(),
            area_key: Some(key),
            service_id: Some(1),
            ..Default::default()
        };
        let err = shop("k".repeat(AREA_KEY_MAX + 1)).validate().unwrap_err();
        assert_eq!(err.to_string(), format!("areaKey: must be at most {AREA_KEY_MAX} characters"));
        assert!(shop("k".repeat(AREA_KEY_MAX)).validate().is_ok());
    }

    #[test]
    fn area_request_rules() {
        let ok = RegisterAreaRequest { area_key: "shibuya".into(), area_name: "Shibuya".into() };
        assert_eq!(ok.validate().unwrap().area_key, "shibuya");

        let long = RegisterAreaRequest { area_key: "k".repeat(AREA_KEY_MAX + 1), area_name: String::new() };
        let err = long.validate().unwrap_err();
        assert!(err.has_field("areaKey"));
        assert!(err.has_field("areaName"));
    }

    #[test]
    fn review_rating_bounds() {
        let req = |rating| RegisterReviewRequest { shop_id: Some(1), rating: Some(rating), comment: None };
        assert!(req(1).validate().is_ok());
        assert!(req(5).validate().is_ok());
        assert!(req(0).validate().is_err());
        assert!(req(6).validate().is_err());

        let err = RegisterReviewRequest::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "shopId: must be a positive id; rating: is required");
    }
}
