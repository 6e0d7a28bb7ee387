use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct BookingListQuery {
    pub search: Option<String>,
}
