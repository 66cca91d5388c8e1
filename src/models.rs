use csv::ByteRecord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Parse `text` as `T`, returning `fallback` when it does not parse.
///
/// Numeric columns in the input tables are read tolerantly: a malformed
/// rate or rate area becomes zero and the row is kept.
pub fn parse_or<T: FromStr>(text: &str, fallback: T) -> T {
    text.trim().parse().unwrap_or(fallback)
}

/// Rates are plain decimals: exponent forms, `NaN` and infinities fall back
/// to zero like any other unparseable text.
pub fn parse_rate(text: &str) -> f64 {
    if text.contains(['e', 'E']) {
        return 0.0;
    }
    let rate: f64 = parse_or(text, 0.0);
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}

/// Field `index` decoded as UTF-8, with invalid bytes replaced and
/// missing fields read as empty.
fn field(record: &ByteRecord, index: usize) -> String {
    record
        .get(index)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

/// Metal tier of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetalLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Catastrophic,
    Other(String),
}

impl From<&str> for MetalLevel {
    fn from(s: &str) -> Self {
        match s {
            "Bronze" => MetalLevel::Bronze,
            "Silver" => MetalLevel::Silver,
            "Gold" => MetalLevel::Gold,
            "Platinum" => MetalLevel::Platinum,
            "Catastrophic" => MetalLevel::Catastrophic,
            other => MetalLevel::Other(other.to_string()),
        }
    }
}

/// Row of `zips.csv`: `zipcode,state,county_code,name,rate_area`
#[derive(Debug, Clone, PartialEq)]
pub struct ZipEntry {
    pub zip_code: String,
    pub state: String,
    pub county_code: String,
    pub name: String,
    pub rate_area: i32,
}

impl ZipEntry {
    pub fn from_record(record: &ByteRecord) -> Self {
        Self {
            zip_code: field(record, 0),
            state: field(record, 1),
            county_code: field(record, 2),
            name: field(record, 3),
            rate_area: parse_or(&field(record, 4), 0),
        }
    }

    pub fn rate_area_key(&self) -> RateAreaKey {
        RateAreaKey::new(&self.state, self.rate_area)
    }
}

/// Row of `plans.csv`: `plan_id,state,metal_level,rate,rate_area`
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub state: String,
    pub metal_level: MetalLevel,
    pub rate: f64,
    pub rate_area: i32,
}

impl Plan {
    pub fn from_record(record: &ByteRecord) -> Self {
        Self {
            id: field(record, 0),
            state: field(record, 1),
            metal_level: MetalLevel::from(field(record, 2).as_str()),
            rate: parse_rate(&field(record, 3)),
            rate_area: parse_or(&field(record, 4), 0),
        }
    }

    pub fn rate_area_key(&self) -> RateAreaKey {
        RateAreaKey::new(&self.state, self.rate_area)
    }

    pub fn is_silver(&self) -> bool {
        self.metal_level == MetalLevel::Silver
    }
}

/// Row of `slcsp.csv` before a rate has been computed.
/// The second input column is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRow {
    pub zip_code: String,
}

impl TargetRow {
    pub fn from_record(record: &ByteRecord) -> Self {
        Self {
            zip_code: field(record, 0),
        }
    }

    /// Attach the computed rate, producing the output row.
    pub fn with_rate(self, rate: Option<String>) -> AnswerRow {
        AnswerRow {
            zip_code: self.zip_code,
            rate,
        }
    }
}

/// Output row: `zipcode,rate`, with an empty rate when none applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRow {
    pub zip_code: String,
    pub rate: Option<String>,
}

/// (state, rate area) pair joining the ZIP directory to the plan table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RateAreaKey {
    pub state: String,
    pub rate_area: i32,
}

impl RateAreaKey {
    pub fn new(state: &str, rate_area: i32) -> Self {
        Self {
            state: state.to_string(),
            rate_area,
        }
    }
}

impl fmt::Display for RateAreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.rate_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or("7", 0), 7);
        assert_eq!(parse_or("seven", 0), 0);
        assert_eq!(parse_or("", 0), 0);
        assert_eq!(parse_or("245.20", 0.0), 245.2);
        assert_eq!(parse_or("n/a", 0.0), 0.0);
    }

    #[test]
    fn test_parse_rate_rejects_non_finite() {
        assert_eq!(parse_rate("169.71"), 169.71);
        assert_eq!(parse_rate("NaN"), 0.0);
        assert_eq!(parse_rate("inf"), 0.0);
    }

    #[test]
    fn test_parse_rate_rejects_exponents() {
        assert_eq!(parse_rate("1e2"), 0.0);
        assert_eq!(parse_rate("2.5E1"), 0.0);
        assert_eq!(parse_rate(" 100.00 "), 100.0);
    }

    #[test]
    fn test_metal_level_is_exact() {
        assert_eq!(MetalLevel::from("Silver"), MetalLevel::Silver);
        assert_eq!(
            MetalLevel::from("silver"),
            MetalLevel::Other("silver".to_string())
        );
    }

    #[test]
    fn test_zip_entry_from_record() {
        let record = ByteRecord::from(vec!["36749", "AL", "01001", "Autauga", "11"]);
        let entry = ZipEntry::from_record(&record);
        assert_eq!(entry.zip_code, "36749");
        assert_eq!(entry.rate_area_key(), RateAreaKey::new("AL", 11));
    }

    #[test]
    fn test_plan_malformed_numbers_default_to_zero() {
        let record = ByteRecord::from(vec!["74449NR9870320", "GA", "Silver", "abc", "x"]);
        let plan = Plan::from_record(&record);
        assert!(plan.is_silver());
        assert_eq!(plan.rate, 0.0);
        assert_eq!(plan.rate_area, 0);
    }

    #[test]
    fn test_short_record_fills_blanks() {
        let record = ByteRecord::from(vec!["64148", "MO"]);
        let entry = ZipEntry::from_record(&record);
        assert_eq!(entry.county_code, "");
        assert_eq!(entry.rate_area, 0);
    }

    #[test]
    fn test_rate_area_key_display() {
        assert_eq!(RateAreaKey::new("NC", 7).to_string(), "NC 7");
    }
}
