//! Order Commands

use serde::{Deserialize, Deserializer};

/// 创建请求的来源通道
///
/// `Post` 为标准 REST 入口；`Get` 为通过查询参数创建的便捷入口，仅用于手工测试
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateChannel {
    Post,
    Get,
}

impl CreateChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreateChannel::Post => "POST",
            CreateChannel::Get => "GET",
        }
    }

    /// 校验错误中使用的输入位置
    pub fn input_location(&self) -> &'static str {
        match self {
            CreateChannel::Post => "body",
            CreateChannel::Get => "query",
        }
    }
}

/// 未校验的输入字段
///
/// 区分三种情况：字段缺失、显式 `null`、给出了值。
/// 配合 `#[serde(default)]` 使用，缺失字段落到 `Missing`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputField<T> {
    #[default]
    Missing,
    Null,
    Present(T),
}

impl<T> InputField<T> {
    pub fn present(value: T) -> Self {
        InputField::Present(value)
    }
}

impl<'de, T> Deserialize<'de> for InputField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => InputField::Present(value),
            None => InputField::Null,
        })
    }
}

/// 创建订单命令
///
/// 字段保持未校验的原始形态，由 handler 统一校验并收集全部字段错误
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_email: InputField<String>,
    pub product_id: InputField<String>,
    pub quantity: InputField<i64>,
    pub channel: CreateChannel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        quantity: InputField<i64>,
    }

    #[test]
    fn test_input_field_distinguishes_missing_null_and_value() {
        let missing: Payload = serde_json::from_str("{}").unwrap();
        let null: Payload = serde_json::from_str(r#"{"quantity":null}"#).unwrap();
        let value: Payload = serde_json::from_str(r#"{"quantity":3}"#).unwrap();

        assert_eq!(missing.quantity, InputField::Missing);
        assert_eq!(null.quantity, InputField::Null);
        assert_eq!(value.quantity, InputField::Present(3));
    }
}
