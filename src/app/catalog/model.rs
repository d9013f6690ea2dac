//! 商品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 商品记录
///
/// 请求体中缺失的字段取零值（空字符串、Unix 纪元），未知字段忽略。
/// `date_added` 总是由服务端在创建或编辑时重新赋值。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub merchant_id: String,
    pub date_added: DateTime<Utc>,
}

impl Product {
    /// 解码请求体中的第一个 JSON 值
    ///
    /// 其后的多余内容被忽略；`null` 视为全部字段取零值。空请求体返回解码错误。
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Product>>();
        match values.next() {
            Some(value) => Ok(value?.unwrap_or_default()),
            None => serde_json::from_slice(body),
        }
    }
}

/// 取查询串中某个键的第一个值，缺失时为空字符串
pub fn first_query_value(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}
