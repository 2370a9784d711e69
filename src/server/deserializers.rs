use serde::{Deserialize, Deserializer};

// page is taken from the query string, so it arrives as text; anything
// unparsable or below 1 falls back to the first page instead of rejecting
// the request
pub fn lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1))
}

pub fn first_page() -> u32 {
    1
}
