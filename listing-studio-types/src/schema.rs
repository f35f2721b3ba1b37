use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enums::Type;

/// OpenAPI Schema（结构化输出使用的精简子集）。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Box<Schema>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ordering: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    /// 创建对象 Schema builder。
    pub fn object() -> SchemaBuilder {
        SchemaBuilder::new(Type::Object)
    }

    /// 创建数组 Schema builder。
    pub fn array() -> SchemaBuilder {
        SchemaBuilder::new(Type::Array)
    }

    /// 创建字符串 Schema。
    pub fn string() -> Self {
        Self {
            ty: Some(Type::String),
            ..Default::default()
        }
    }

    /// 获取字段 Schema。
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .as_ref()
            .and_then(|properties| properties.get(name))
            .map(AsRef::as_ref)
    }

    /// 字段是否为必填。
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|field| field == name))
    }
}

/// Schema builder。
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// 创建 Schema builder。
    pub fn new(ty: Type) -> Self {
        Self {
            schema: Schema {
                ty: Some(ty),
                ..Default::default()
            },
        }
    }

    /// 设置描述。
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = Some(description.into());
        self
    }

    /// 添加字段，同时记录字段顺序。
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.schema
            .property_ordering
            .get_or_insert_with(Vec::new)
            .push(name.clone());
        self.schema
            .properties
            .get_or_insert_with(HashMap::new)
            .insert(name, Box::new(schema));
        self
    }

    /// 标记必填字段。
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.schema
            .required
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// 设置数组元素 Schema。
    pub fn items(mut self, schema: Schema) -> Self {
        self.schema.items = Some(Box::new(schema));
        self
    }

    /// 构建 Schema。
    pub fn build(self) -> Schema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_builder_object() {
        let schema = Schema::object()
            .property("name", Schema::string())
            .property("aliases", Schema::array().items(Schema::string()).build())
            .required("name")
            .build();

        assert_eq!(schema.ty, Some(Type::Object));
        assert!(schema.is_required("name"));
        assert!(!schema.is_required("aliases"));
        assert_eq!(
            schema.property("aliases").and_then(|s| s.items.as_deref()),
            Some(&Schema::string())
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["propertyOrdering"], json!(["name", "aliases"]));
        assert_eq!(value["properties"]["aliases"]["items"]["type"], "STRING");
    }
}
