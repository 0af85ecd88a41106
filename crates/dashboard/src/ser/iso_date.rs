use serde::{Deserialize, Deserializer, Serializer};
use time::{format_description::FormatItem, macros::format_description, Date};

pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[allow(dead_code)]
pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = value.format(&ISO_DATE).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&s)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Date::parse(&s, &ISO_DATE).map_err(serde::de::Error::custom)
}
