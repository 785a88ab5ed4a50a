use std::collections::HashMap;
use std::fmt;

use aws_sdk_sqs::types::MessageAttributeValue;

use super::Config;
use crate::errors::AwsSqsConfigError;

/// Data type of a custom message attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Number,
    String,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Number => "Number",
            DataType::String => "String",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value offered to [`Config::add_attribute`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

macro_rules! int_attribute_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_attribute_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(f64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

/// A typed key/value pair sent alongside the message body.
///
/// Custom attributes show up as message metadata in the SQS console, which
/// makes them a good fit for correlation ids or client information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAttribute {
    pub title: String,
    pub data_type: DataType,
    /// String encoding of the value. Numbers are base-10 integers.
    pub value: String,
}

impl CustomAttribute {
    /// Converts the attribute into an SQS message attribute.
    pub fn to_message_attribute(&self) -> Result<MessageAttributeValue, AwsSqsConfigError> {
        let attribute = MessageAttributeValue::builder()
            .data_type(self.data_type.as_str())
            .string_value(&self.value)
            .build()?;
        Ok(attribute)
    }
}

/// Ordered, append-only list of custom attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomAttributes(Vec<CustomAttribute>);

impl CustomAttributes {
    /// Number of attributes added so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attributes in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, CustomAttribute> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CustomAttribute] {
        &self.0
    }

    /// Whether an attribute with `title` was already added.
    pub fn contains(&self, title: &str) -> bool {
        self.0.iter().any(|attribute| attribute.title == title)
    }
}

impl<'a> IntoIterator for &'a CustomAttributes {
    type Item = &'a CustomAttribute;
    type IntoIter = std::slice::Iter<'a, CustomAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Config {
    /// Appends a custom attribute to every outgoing message.
    ///
    /// `DataType::Number` accepts integers only. `DataType::String` accepts strings only.
    /// A mismatch returns [`AwsSqsConfigError::Marshal`] and leaves the attributes untouched.
    /// Titles are unique, a repeated one returns [`AwsSqsConfigError::DuplicateAttribute`].
    ///
    /// ```rust
    /// use rs_sqs_bootstrap::config::{Config, DataType};
    ///
    /// let mut config = Config::default();
    /// config.add_attribute(DataType::String, "correlationId", "abc-123").unwrap();
    /// config.add_attribute(DataType::Number, "priority", 5).unwrap();
    /// assert!(config.add_attribute(DataType::Number, "ratio", 0.5).is_err());
    /// assert_eq!(config.attributes.len(), 2);
    /// ```
    pub fn add_attribute(
        &mut self,
        data_type: DataType,
        title: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), AwsSqsConfigError> {
        let title = title.into();
        if self.attributes.contains(&title) {
            return Err(AwsSqsConfigError::DuplicateAttribute(title));
        }

        let value = match (data_type, value.into()) {
            (DataType::Number, AttributeValue::Int(value)) => value.to_string(),
            (DataType::String, AttributeValue::Str(value)) => value,
            _ => return Err(AwsSqsConfigError::Marshal { title, data_type }),
        };

        self.attributes.0.push(CustomAttribute {
            title,
            data_type,
            value,
        });
        Ok(())
    }

    /// All custom attributes as SQS message attributes, keyed by title.
    pub fn message_attributes(
        &self,
    ) -> Result<HashMap<String, MessageAttributeValue>, AwsSqsConfigError> {
        self.attributes
            .iter()
            .map(|attribute| Ok((attribute.title.clone(), attribute.to_message_attribute()?)))
            .collect()
    }
}
