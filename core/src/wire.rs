//! JSON representation of test cases.
//!
//! A test case is one object whose `keys` entry carries `n` and `k`; every
//! other entry is a share keyed by its index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `n`, `k` and `base` may be JSON numbers or decimal strings. A document is
//! either one such object or an array of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, Result};
use crate::share::{Share, TestCase};

/// A number that some producers write as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient {
    Number(u64),
    Text(String),
}

impl Lenient {
    fn parse(&self, field: &str) -> Result<u64> {
        match self {
            Lenient::Number(n) => Ok(*n),
            Lenient::Text(s) => s.trim().parse().map_err(|_| {
                RecoveryError::Wire(format!("{field}: {s:?} is not a number"))
            }),
        }
    }

    fn parse_usize(&self, field: &str) -> Result<usize> {
        let value = self.parse(field)?;
        usize::try_from(value).map_err(|_| {
            RecoveryError::Wire(format!("{field}: {value} is out of range"))
        })
    }
}

impl From<u64> for Lenient {
    fn from(value: u64) -> Self {
        Lenient::Text(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: Lenient,
    pub k: Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub base: Lenient,
    pub value: String,
}

/// One test case as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<CaseDocument>),
    One(CaseDocument),
}

impl TryFrom<CaseDocument> for TestCase {
    type Error = RecoveryError;

    fn try_from(doc: CaseDocument) -> Result<Self> {
        let n = doc.keys.n.parse_usize("keys.n")?;
        let k = doc.keys.k.parse_usize("keys.k")?;

        let mut shares = Vec::with_capacity(doc.shares.len());
        for (label, entry) in doc.shares {
            let x: u64 = label.trim().parse().map_err(|_| {
                RecoveryError::Wire(format!("share label {label:?} is not an index"))
            })?;
            let base = entry.base.parse(&format!("{label}.base"))?;
            let base = u32::try_from(base).map_err(|_| {
                RecoveryError::Wire(format!("{label}.base: {base} is out of range"))
            })?;
            shares.push(Share::new(x, base, entry.value)?);
        }
        // Labels sort as strings ("10" < "2"); order by index instead.
        shares.sort_by_key(Share::x);

        TestCase::new(n, k, shares)
    }
}

impl From<&TestCase> for CaseDocument {
    fn from(case: &TestCase) -> Self {
        let shares = case
            .shares()
            .iter()
            .map(|share| {
                let entry = ShareEntry {
                    base: u64::from(share.base()).into(),
                    value: share.value().to_owned(),
                };
                (share.x().to_string(), entry)
            })
            .collect();

        CaseDocument {
            keys: Keys {
                n: (case.n() as u64).into(),
                k: (case.k() as u64).into(),
            },
            shares,
        }
    }
}

/// Parse a document holding one test case or an array of them.
pub fn parse_cases(json: &str) -> Result<Vec<TestCase>> {
    let docs = match serde_json::from_str(json)? {
        Document::Many(docs) => docs,
        Document::One(doc) => vec![doc],
    };
    docs.into_iter().map(TestCase::try_from).collect()
}

/// Parse a document holding exactly one test case.
pub fn parse_case(json: &str) -> Result<TestCase> {
    let doc: CaseDocument = serde_json::from_str(json)?;
    TestCase::try_from(doc)
}

/// Render `case` in the wire format, numbers written as strings.
pub fn to_json(case: &TestCase) -> Result<String> {
    Ok(serde_json::to_string_pretty(&CaseDocument::from(case))?)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::reconstruct::reconstruct;

    const FIRST: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn parses_single_case_with_numeric_keys() {
        let case = parse_case(FIRST).unwrap();
        assert_eq!((case.n(), case.k()), (4, 3));
        let xs: Vec<u64> = case.shares().iter().map(Share::x).collect();
        assert_eq!(xs, vec![1, 2, 3, 6]);
        assert_eq!(case.shares()[1].base(), 2);
        assert_eq!(case.shares()[1].value(), "111");
    }

    #[test]
    fn accepts_string_encoded_keys() {
        let json = r#"{
            "keys": { "n": "2", "k": "2" },
            "10": { "base": 16, "value": "ff" },
            "2": { "base": "10", "value": "7" }
        }"#;
        let case = parse_case(json).unwrap();
        let xs: Vec<u64> = case.shares().iter().map(Share::x).collect();
        assert_eq!(xs, vec![2, 10]);
    }

    #[test]
    fn parses_arrays_of_cases() {
        let json = format!("[{FIRST}, {FIRST}]");
        assert_eq!(parse_cases(&json).unwrap().len(), 2);
        assert_eq!(parse_cases(FIRST).unwrap().len(), 1);
    }

    #[test]
    fn round_trips_through_wire_format() {
        let case = parse_case(FIRST).unwrap();
        let json = to_json(&case).unwrap();
        assert!(json.contains(r#""n": "4""#));
        assert_eq!(parse_case(&json).unwrap(), case);
        assert_eq!(reconstruct(&case).unwrap().secret, BigInt::from(3));
    }

    #[test]
    fn rejects_bad_labels_and_counts() {
        let bad_label = r#"{"keys":{"n":1,"k":1},"one":{"base":"10","value":"4"}}"#;
        assert!(matches!(
            parse_case(bad_label),
            Err(RecoveryError::Wire(_))
        ));

        let short = r#"{"keys":{"n":2,"k":1},"1":{"base":"10","value":"4"}}"#;
        assert!(matches!(
            parse_case(short),
            Err(RecoveryError::ShareCountMismatch { .. })
        ));

        let bad_base = r#"{"keys":{"n":1,"k":1},"1":{"base":"ten","value":"4"}}"#;
        assert!(matches!(parse_case(bad_base), Err(RecoveryError::Wire(_))));
    }

    #[test]
    fn missing_keys_is_malformed() {
        let json = r#"{"1":{"base":"10","value":"4"}}"#;
        assert!(matches!(parse_case(json), Err(RecoveryError::Wire(_))));
    }
}
