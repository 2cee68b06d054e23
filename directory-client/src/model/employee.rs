use serde::{de, Deserialize, Deserializer, Serialize};

/// Employee record as exchanged with the directory API.
///
/// Listing and lookup responses use the `employee_*` field names while creation responses
/// answer with `name`, `salary` and `age`, often with numbers encoded as strings. Both
/// spellings and both encodings decode into the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEmployeeRecord {
    #[serde(deserialize_with = "lenient_i32")]
    pub id: i32,
    #[serde(alias = "name")]
    pub employee_name: String,
    #[serde(alias = "salary", deserialize_with = "lenient_i32")]
    pub employee_salary: i32,
    #[serde(alias = "age", deserialize_with = "lenient_i32")]
    pub employee_age: i32,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => i32::try_from(n).map_err(de::Error::custom),
        NumberOrString::String(s) => s.trim().parse::<i32>().map_err(de::Error::custom),
    }
}
