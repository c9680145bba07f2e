use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Company,
    Pharma,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "البريد الإلكتروني غير صالح"))]
    pub email: String,
    #[validate(length(min = 6, message = "كلمة المرور قصيرة جداً"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, message = "الاسم مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 7, message = "رقم الهاتف غير صالح"))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionError {
    pub message: String,
}

/// Uniform return shape of every action-module function. Callers branch on
/// `success` before touching `data`; business and validation failures live
/// here, transport failures are `Err(ApiError)` at the call site instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

impl<T> ActionResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
            links: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ActionError {
                message: message.into(),
            }),
            meta: None,
            links: None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|err| err.message.as_str())
    }
}

// Company-side resources

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "اسم المنتج مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "السعر يجب أن يكون موجباً"))]
    pub price: f64,
    #[validate(range(min = 0, message = "الكمية يجب أن تكون موجبة"))]
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "اسم المنتج مطلوب"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "السعر يجب أن يكون موجباً"))]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "الكمية يجب أن تكون موجبة"))]
    pub stock: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub product_id: String,
    pub discount_percent: f64,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOfferPayload {
    #[validate(length(min = 1, message = "المنتج مطلوب"))]
    pub product_id: String,
    #[validate(range(min = 1.0, max = 100.0, message = "نسبة الخصم يجب أن تكون بين 1 و100"))]
    pub discount_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

// Pharmacy-side resources

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBranchPayload {
    #[validate(length(min = 1, message = "اسم الفرع مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: String,
    pub total: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemPayload {
    #[validate(length(min = 1, message = "المنتج مطلوب"))]
    pub product_id: String,
    #[validate(range(min = 1, message = "الكمية يجب أن تكون 1 على الأقل"))]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderPayload {
    #[validate(length(min = 1, message = "المستودع مطلوب"))]
    pub warehouse_id: String,
    #[validate(length(min = 1, message = "الطلب فارغ"), nested)]
    pub items: Vec<OrderItemPayload>,
}

// Owner-side resources

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RejectAccountPayload {
    #[validate(length(min = 1, message = "سبب الرفض مطلوب"))]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub companies: i64,
    pub pharmacies: i64,
    pub orders: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_uses_backend_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserType::Pharma).expect("serialize"),
            "\"Pharma\""
        );
        let parsed: UserProfile = serde_json::from_str(
            r#"{"id":"u1","name":"شركة الدواء","email":"a@b.c","userType":"Company"}"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.user_type, UserType::Company);
        assert!(parsed.phone.is_none());
    }

    #[test]
    fn envelope_constructors_set_success_flag() {
        let ok = ActionResponse::ok(1);
        assert!(ok.success);
        assert_eq!(ok.data, Some(1));
        assert!(ok.error.is_none());

        let failed: ActionResponse<i32> = ActionResponse::failure("رفض الطلب");
        assert!(!failed.success);
        assert!(failed.data.is_none());
        assert_eq!(failed.error_message(), Some("رفض الطلب"));
    }

    #[test]
    fn create_order_requires_items() {
        let payload = CreateOrderPayload {
            warehouse_id: "w1".into(),
            items: vec![],
        };
        assert!(payload.validate().is_err());

        let payload = CreateOrderPayload {
            warehouse_id: "w1".into(),
            items: vec![OrderItemPayload {
                product_id: "p1".into(),
                quantity: 0,
            }],
        };
        assert!(payload.validate().is_err());

        let payload = CreateOrderPayload {
            warehouse_id: "w1".into(),
            items: vec![OrderItemPayload {
                product_id: "p1".into(),
                quantity: 2,
            }],
        };
        assert!(payload.validate().is_ok());
    }
}
