//! JSON Resume 출력 스키마 모듈
//!
//! 변환 결과 문서와 각 카테고리 항목 타입을 정의합니다.
//! `Resume`의 필드 선언 순서가 곧 직렬화 순서입니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 출력 문서의 최상위 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Basics,
    Work,
    Volunteer,
    Education,
    Certification,
    Awards,
    Publications,
    Skills,
    Languages,
    Interests,
    References,
    Projects,
}

impl Category {
    /// 출력 문서의 카테고리 순서
    ///
    /// `Volunteer`, `Awards`는 채워지지 않지만 순서상 자리를 유지합니다.
    pub const CANONICAL_ORDER: [Category; 12] = [
        Category::Basics,
        Category::Work,
        Category::Volunteer,
        Category::Education,
        Category::Certification,
        Category::Awards,
        Category::Publications,
        Category::Skills,
        Category::Languages,
        Category::Interests,
        Category::References,
        Category::Projects,
    ];

    /// JSON 키 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basics => "basics",
            Category::Work => "work",
            Category::Volunteer => "volunteer",
            Category::Education => "education",
            Category::Certification => "certification",
            Category::Awards => "awards",
            Category::Publications => "publications",
            Category::Skills => "skills",
            Category::Languages => "languages",
            Category::Interests => "interests",
            Category::References => "references",
            Category::Projects => "projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 기본 정보의 위치
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
    pub region: String,
}

/// 소셜 프로필
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub network: String,
    pub username: String,
    pub url: String,
}

/// 기본 정보 (`basics`)
///
/// 프로필 처리와 이메일 처리가 나누어 채우므로 모든 필드가 선택적입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<Profile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Basics {
    /// 얕은 병합: `other`에 값이 있는 필드만 덮어씀
    pub fn merge(&mut self, other: Basics) {
        overwrite(&mut self.name, other.name);
        overwrite(&mut self.label, other.label);
        overwrite(&mut self.picture, other.picture);
        overwrite(&mut self.phone, other.phone);
        overwrite(&mut self.website, other.website);
        overwrite(&mut self.summary, other.summary);
        overwrite(&mut self.location, other.location);
        overwrite(&mut self.profiles, other.profiles);
        overwrite(&mut self.email, other.email);
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// 경력 항목
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub company: String,
    pub position: String,
    pub website: String,
    pub start_date: String,
    pub summary: String,
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// 학력 항목 (자격증도 같은 형태)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub start_date: String,
    pub gpa: String,
    pub courses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    /// 숙련도가 없으면 `null`로 직렬화
    pub fluency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub start_date: String,
    pub summary: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub name: String,
    pub publisher: String,
    pub release_date: String,
    pub website: String,
    pub summary: String,
}

/// 최종 JSON Resume 문서
///
/// 처리되지 않은 카테고리는 직렬화에서 제외됩니다. 자격증은 `education`에 병합되어
/// 별도 키로 나타나지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basics: Option<Basics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<Vec<Work>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<Publication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<Interest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

impl Resume {
    /// 카테고리별 항목 수 (`basics`는 1, 없는 카테고리는 `None`)
    pub fn item_count(&self, category: Category) -> Option<usize> {
        match category {
            Category::Basics => self.basics.as_ref().map(|_| 1),
            Category::Work => self.work.as_ref().map(Vec::len),
            Category::Education => self.education.as_ref().map(Vec::len),
            Category::Publications => self.publications.as_ref().map(Vec::len),
            Category::Skills => self.skills.as_ref().map(Vec::len),
            Category::Languages => self.languages.as_ref().map(Vec::len),
            Category::Interests => self.interests.as_ref().map(Vec::len),
            Category::References => self.references.as_ref().map(Vec::len),
            Category::Projects => self.projects.as_ref().map(Vec::len),
            Category::Volunteer | Category::Awards | Category::Certification => None,
        }
    }

    /// 문서에 존재하는 카테고리 목록 (출력 순서대로)
    pub fn categories(&self) -> Vec<Category> {
        Category::CANONICAL_ORDER
            .into_iter()
            .filter(|category| self.item_count(*category).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basics_merge_last_write_wins() {
        let mut basics = Basics {
            name: Some("Old".to_string()),
            email: Some("old@example.com".to_string()),
            ..Default::default()
        };

        basics.merge(Basics {
            name: Some("New".to_string()),
            label: Some("Engineer".to_string()),
            ..Default::default()
        });

        assert_eq!(basics.name.as_deref(), Some("New"));
        assert_eq!(basics.label.as_deref(), Some("Engineer"));
        assert_eq!(basics.email.as_deref(), Some("old@example.com"));
    }

    #[test]
    fn test_resume_serialization_order_and_omission() {
        let resume = Resume {
            skills: Some(vec![Skill {
                name: "Rust".to_string(),
                ..Default::default()
            }]),
            basics: Some(Basics {
                email: Some("ada@example.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let text = serde_json::to_string(&resume).unwrap();
        assert_eq!(
            text,
            r#"{"basics":{"email":"ada@example.com"},"skills":[{"name":"Rust","level":"","keywords":[]}]}"#
        );
    }

    #[test]
    fn test_end_date_skipped_when_absent() {
        let work = Work {
            company: "Acme".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&work).unwrap();

        assert!(value.get("endDate").is_none());
        assert_eq!(value["highlights"], json!([]));
    }

    #[test]
    fn test_language_null_fluency() {
        let language = Language {
            language: "Latin".to_string(),
            fluency: None,
        };
        assert_eq!(
            serde_json::to_value(&language).unwrap(),
            json!({"language": "Latin", "fluency": null})
        );
    }

    #[test]
    fn test_categories_in_canonical_order() {
        let resume = Resume {
            projects: Some(vec![]),
            work: Some(vec![]),
            basics: Some(Basics::default()),
            ..Default::default()
        };

        assert_eq!(
            resume.categories(),
            vec![Category::Basics, Category::Work, Category::Projects]
        );
    }
}
