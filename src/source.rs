//! 원본 레코드 타입 정의 모듈
//!
//! LinkedIn 내보내기 데이터에서 카테고리별로 추출된 레코드의 형태를 정의합니다.
//! 모든 필드는 누락되거나 `null`일 수 있으므로 `Option` 또는 기본값으로 받습니다.

use serde::Deserialize;
use serde_json::Value;

/// 날짜 필드 원본 값
///
/// 내보내기 데이터의 날짜는 문자열, 숫자, `null` 등 형태가 일정하지 않아
/// 원본 JSON 값을 그대로 보관하고 필요할 때 문자열로 변환합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SourceDate(pub Value);

impl SourceDate {
    /// 문자열 날짜로 생성
    pub fn text(value: impl Into<String>) -> Self {
        Self(Value::String(value.into()))
    }

    /// 문자열 형태로 변환 (`null`/누락은 빈 문자열)
    ///
    /// # Examples
    /// ```
    /// use jresume::source::SourceDate;
    /// use serde_json::json;
    ///
    /// assert_eq!(SourceDate(json!("2015-03")).as_text(), "2015-03");
    /// assert_eq!(SourceDate(json!(2015)).as_text(), "2015");
    /// assert_eq!(SourceDate::default().as_text(), "");
    /// ```
    pub fn as_text(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// 값이 존재하고 참으로 평가되는지 확인
    ///
    /// 빈 문자열, 0, `false`, `null`은 없는 값으로 취급합니다.
    /// 문자열 내용 자체(예: "Invalid date")는 검사하지 않습니다.
    pub fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// 존재하는 경우에만 문자열 날짜 반환 (종료일 처리용)
    pub fn present_text(&self) -> Option<String> {
        self.is_present().then(|| self.as_text())
    }
}

/// 프로필 위치 정보
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceLocation {
    pub name: Option<String>,
}

/// 프로필 레코드
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub country: Option<String>,
    pub websites: Option<String>,
    pub summary: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub location: Option<SourceLocation>,
    pub twitter_handles: Option<String>,
}

/// 경력 레코드
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourcePosition {
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub start_date: SourceDate,
    pub description: Option<String>,
    pub end_date: SourceDate,
}

/// 학력/자격증 레코드 (두 카테고리가 같은 형태를 공유)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceEducation {
    pub school_name: Option<String>,
    pub degree: Option<String>,
    pub start_date: SourceDate,
    pub notes: Option<String>,
    pub end_date: SourceDate,
    pub area: Option<String>,
}

/// 언어 레코드
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceLanguage {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

/// 추천서 레코드
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceReference {
    pub recommender_first_name: Option<String>,
    pub recommender_last_name: Option<String>,
    pub recommender_company: Option<String>,
    pub recommendation_body: Option<String>,
}

/// 프로젝트 레코드
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceProject {
    pub title: Option<String>,
    pub start_date: SourceDate,
    pub description: Option<String>,
    pub url: Option<String>,
    pub end_date: SourceDate,
}

/// 출판물 레코드
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourcePublication {
    pub name: Option<String>,
    pub publisher: Option<String>,
    pub date: SourceDate,
    pub url: Option<String>,
    pub description: Option<String>,
}
