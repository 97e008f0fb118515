use serde::{Deserialize, Serialize};

/// One spell as catalogued in a rules reference.
///
/// `level` follows the usual convention (0 is a cantrip) but nothing here
/// enforces a range, and `school` is an open label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub name: String,
    pub level: i32,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub components: String,
    pub duration: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>, // book/page, absent when unknown
}
