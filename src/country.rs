//! 국가 코드 조회 모듈
//!
//! 국가 이름 → ISO 3166 alpha-2 코드 조회 테이블입니다. 테이블 자체는 외부 JSON 파일로 제공됩니다.

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ConvertError, Result};

/// 국가 코드 항목 (`alpha-3`, `country-code` 등 다른 필드는 무시)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryCode {
    pub name: String,
    #[serde(rename = "alpha-2")]
    pub alpha2: String,
}

/// 순서가 유지되는 국가 코드 테이블
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: Vec<CountryCode>,
}

impl CountryTable {
    /// 빈 테이블 생성 (모든 조회가 실패)
    pub fn empty() -> Self {
        Self::default()
    }

    /// JSON 배열 리더에서 테이블 로드
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let entries: Vec<CountryCode> = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// JSON 파일에서 테이블 로드
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|e| ConvertError::ParseError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 국가 이름으로 alpha-2 코드 조회
    ///
    /// 대소문자를 구분하는 정확한 일치이며, 여러 개가 일치하면 첫 항목을 사용합니다.
    ///
    /// # Examples
    /// ```
    /// use jresume::country::{CountryCode, CountryTable};
    ///
    /// let table: CountryTable = vec![CountryCode {
    ///     name: "United Kingdom".to_string(),
    ///     alpha2: "GB".to_string(),
    /// }]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(table.lookup("United Kingdom"), Some("GB"));
    /// assert_eq!(table.lookup("united kingdom"), None);
    /// ```
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.alpha2.as_str())
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CountryCode> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryCode>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_ignores_extra_fields() {
        let json = r#"[
            {"name": "Germany", "alpha-2": "DE", "alpha-3": "DEU", "country-code": "276"},
            {"name": "France", "alpha-2": "FR"}
        ]"#;

        let table = CountryTable::from_reader(json.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Germany"), Some("DE"));
        assert_eq!(table.lookup("France"), Some("FR"));
        assert_eq!(table.lookup("Spain"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table: CountryTable = vec![
            CountryCode {
                name: "Korea".to_string(),
                alpha2: "KR".to_string(),
            },
            CountryCode {
                name: "Korea".to_string(),
                alpha2: "KP".to_string(),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(table.lookup("Korea"), Some("KR"));
    }

    #[test]
    fn test_empty_table() {
        let table = CountryTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("Germany"), None);
    }
}
