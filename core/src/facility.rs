use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Facility categories a graph document can pin to a single node.
///
/// Labels are lower-case; `toilet` and `food` are accepted as aliases when
/// parsing so older station documents keep working.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    #[strum(to_string = "restroom", serialize = "toilet")]
    #[serde(alias = "toilet")]
    Restroom,
    Lift,
    #[strum(to_string = "dining", serialize = "food")]
    #[serde(alias = "food")]
    Dining,
    Medical,
}
