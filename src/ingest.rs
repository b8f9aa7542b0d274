//! 내보내기 조각 로드 모듈
//!
//! 입력 폴더에서 카테고리별 JSON 조각 파일을 찾아 원본 레코드로 디코딩합니다.
//! 배열의 각 레코드는 개별적으로 디코딩되며, 실패한 레코드만 경고와 함께 건너뜁니다.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};
use crate::resume::Category;
use crate::source::{
    SourceEducation, SourceLanguage, SourcePosition, SourceProfile, SourceProject,
    SourcePublication, SourceReference,
};

/// 조각 파일 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Profile,
    Email,
    Positions,
    Education,
    Certifications,
    Skills,
    Languages,
    References,
    Interests,
    Projects,
    Publications,
}

impl SourceKind {
    /// 파일 이름(확장자 제외)으로 종류 판별 (대소문자, `-`/공백 무시)
    ///
    /// # Examples
    /// ```
    /// use jresume::ingest::SourceKind;
    ///
    /// assert_eq!(SourceKind::from_file_stem("Positions"), Some(SourceKind::Positions));
    /// assert_eq!(SourceKind::from_file_stem("Email Addresses"), Some(SourceKind::Email));
    /// assert_eq!(SourceKind::from_file_stem("connections"), None);
    /// ```
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        let normalized = stem.trim().to_lowercase().replace(['-', ' '], "_");

        let kind = match normalized.as_str() {
            "profile" => SourceKind::Profile,
            "email" | "emails" | "email_addresses" => SourceKind::Email,
            "positions" => SourceKind::Positions,
            "education" => SourceKind::Education,
            "certifications" => SourceKind::Certifications,
            "skills" => SourceKind::Skills,
            "languages" => SourceKind::Languages,
            "recommendations" | "recommendations_received" | "references" => {
                SourceKind::References
            }
            "interests" => SourceKind::Interests,
            "projects" => SourceKind::Projects,
            "publications" => SourceKind::Publications,
            _ => return None,
        };

        Some(kind)
    }

    /// 채워지는 출력 카테고리
    pub fn category(&self) -> Category {
        match self {
            SourceKind::Profile | SourceKind::Email => Category::Basics,
            SourceKind::Positions => Category::Work,
            SourceKind::Education => Category::Education,
            SourceKind::Certifications => Category::Certification,
            SourceKind::Skills => Category::Skills,
            SourceKind::Languages => Category::Languages,
            SourceKind::References => Category::References,
            SourceKind::Interests => Category::Interests,
            SourceKind::Projects => Category::Projects,
            SourceKind::Publications => Category::Publications,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Profile => "profile",
            SourceKind::Email => "email",
            SourceKind::Positions => "positions",
            SourceKind::Education => "education",
            SourceKind::Certifications => "certifications",
            SourceKind::Skills => "skills",
            SourceKind::Languages => "languages",
            SourceKind::References => "references",
            SourceKind::Interests => "interests",
            SourceKind::Projects => "projects",
            SourceKind::Publications => "publications",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 발견된 조각 파일
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub path: PathBuf,
    pub kind: SourceKind,
}

/// 폴더 탐색 결과
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// 인식된 조각 파일 (파일 이름 순)
    pub fragments: Vec<Fragment>,
    /// 종류를 알 수 없어 무시한 JSON 파일
    pub ignored: Vec<PathBuf>,
}

/// 건너뛴 레코드 또는 조각에 대한 경고
#[derive(Debug, Clone, PartialEq)]
pub struct RecordWarning {
    pub kind: SourceKind,
    pub file: PathBuf,
    /// 배열 내 위치 (조각 전체에 대한 경고면 `None`)
    pub index: Option<usize>,
    pub reason: String,
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "[{}#{}] {}", self.kind, index, self.reason),
            None => write!(f, "[{}] {}", self.kind, self.reason),
        }
    }
}

/// 기술/관심사 항목: 문자열 또는 `{ "name": ... }`
#[derive(Deserialize)]
#[serde(untagged)]
enum NamedEntry {
    Plain(String),
    Named { name: String },
}

impl From<NamedEntry> for String {
    fn from(entry: NamedEntry) -> Self {
        match entry {
            NamedEntry::Plain(name) | NamedEntry::Named { name } => name,
        }
    }
}

/// 카테고리별로 디코딩된 내보내기 데이터
#[derive(Debug, Clone, Default)]
pub struct SourceExport {
    pub profile: Option<SourceProfile>,
    pub email: Option<String>,
    pub positions: Option<Vec<SourcePosition>>,
    pub education: Option<Vec<SourceEducation>>,
    pub certifications: Option<Vec<SourceEducation>>,
    pub skills: Option<Vec<String>>,
    pub languages: Option<Vec<SourceLanguage>>,
    pub references: Option<Vec<SourceReference>>,
    pub interests: Option<Vec<String>>,
    pub projects: Option<Vec<SourceProject>>,
    pub publications: Option<Vec<SourcePublication>>,
    /// 건너뛴 레코드/조각 경고
    pub warnings: Vec<RecordWarning>,
    /// 읽은 총 바이트
    pub bytes_read: u64,
}

impl SourceExport {
    /// 종류별 디코딩된 레코드 수 (로드되지 않았으면 `None`)
    pub fn record_count(&self, kind: SourceKind) -> Option<usize> {
        match kind {
            SourceKind::Profile => self.profile.as_ref().map(|_| 1),
            SourceKind::Email => self.email.as_ref().map(|_| 1),
            SourceKind::Positions => self.positions.as_ref().map(Vec::len),
            SourceKind::Education => self.education.as_ref().map(Vec::len),
            SourceKind::Certifications => self.certifications.as_ref().map(Vec::len),
            SourceKind::Skills => self.skills.as_ref().map(Vec::len),
            SourceKind::Languages => self.languages.as_ref().map(Vec::len),
            SourceKind::References => self.references.as_ref().map(Vec::len),
            SourceKind::Interests => self.interests.as_ref().map(Vec::len),
            SourceKind::Projects => self.projects.as_ref().map(Vec::len),
            SourceKind::Publications => self.publications.as_ref().map(Vec::len),
        }
    }
}

/// 입력 폴더에서 조각 파일 탐색
///
/// # Arguments
/// * `input` - 조각 파일이 있는 폴더
/// * `max_depth` - 최대 탐색 깊이 (1이면 폴더 바로 아래만)
pub fn discover_fragments(input: &Path, max_depth: usize) -> Result<Discovery> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if !input.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: input.to_path_buf(),
        });
    }

    let mut discovery = Discovery::default();

    let json_files = WalkDir::new(input)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|s| s.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .map(|e| e.into_path());

    for path in json_files {
        let kind = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(SourceKind::from_file_stem);

        match kind {
            Some(kind) => discovery.fragments.push(Fragment { path, kind }),
            None => discovery.ignored.push(path),
        }
    }

    Ok(discovery)
}

/// 조각 파일들을 읽어 디코딩
///
/// 같은 종류의 조각이 여러 개면 나중 파일이 앞의 것을 대체합니다.
pub fn load_fragments(fragments: &[Fragment]) -> Result<SourceExport> {
    if fragments.is_empty() {
        return Err(ConvertError::NoFragmentsFound);
    }

    let mut export = SourceExport::default();

    for fragment in fragments {
        if export.record_count(fragment.kind).is_some() {
            warn!(kind = %fragment.kind, file = ?fragment.path, "중복 조각: 이전 데이터를 대체");
        }

        export.bytes_read += std::fs::metadata(&fragment.path)
            .map(|m| m.len())
            .unwrap_or(0);

        let value = read_json(&fragment.path)?;
        let mut decoder = Decoder {
            kind: fragment.kind,
            file: &fragment.path,
            warnings: &mut export.warnings,
        };

        match fragment.kind {
            SourceKind::Profile => export.profile = decoder.single(value),
            SourceKind::Email => export.email = decoder.email(&value),
            SourceKind::Positions => export.positions = decoder.records(value),
            SourceKind::Education => export.education = decoder.records(value),
            SourceKind::Certifications => export.certifications = decoder.records(value),
            SourceKind::Skills => export.skills = decoder.names(value),
            SourceKind::Languages => export.languages = decoder.records(value),
            SourceKind::References => export.references = decoder.records(value),
            SourceKind::Interests => export.interests = decoder.names(value),
            SourceKind::Projects => export.projects = decoder.records(value),
            SourceKind::Publications => export.publications = decoder.records(value),
        }

        debug!(
            kind = %fragment.kind,
            records = export.record_count(fragment.kind).unwrap_or(0),
            "조각 로드 완료"
        );
    }

    Ok(export)
}

/// 폴더 탐색과 로드를 한 번에 수행
pub fn load_export(input: &Path, max_depth: usize) -> Result<SourceExport> {
    let discovery = discover_fragments(input, max_depth)?;
    load_fragments(&discovery.fragments)
}

/// 버퍼 리더를 사용한 JSON 파싱
fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| ConvertError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| ConvertError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 한 조각 파일의 레코드 디코더
struct Decoder<'a> {
    kind: SourceKind,
    file: &'a Path,
    warnings: &'a mut Vec<RecordWarning>,
}

impl Decoder<'_> {
    fn warn(&mut self, index: Option<usize>, reason: String) {
        warn!(kind = %self.kind, ?index, %reason, "레코드 건너뜀");
        self.warnings.push(RecordWarning {
            kind: self.kind,
            file: self.file.to_path_buf(),
            index,
            reason,
        });
    }

    /// 배열의 각 요소를 개별 디코딩 (단일 객체는 요소 하나인 배열로 취급)
    fn records<T: DeserializeOwned>(&mut self, value: Value) -> Option<Vec<T>> {
        let items = match value {
            Value::Array(items) => items,
            object @ Value::Object(_) => vec![object],
            other => {
                self.warn(None, format!("배열이 아닌 조각: {}", type_name(&other)));
                return None;
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<T>(item) {
                Ok(record) => records.push(record),
                Err(e) => self.warn(Some(index), e.to_string()),
            }
        }

        Some(records)
    }

    /// 기술/관심사 이름 목록
    fn names(&mut self, value: Value) -> Option<Vec<String>> {
        self.records::<NamedEntry>(value)
            .map(|entries| entries.into_iter().map(String::from).collect())
    }

    /// 단일 레코드 (배열이면 첫 요소)
    fn single<T: DeserializeOwned>(&mut self, value: Value) -> Option<T> {
        let value = match value {
            Value::Array(items) => match items.into_iter().next() {
                Some(first) => first,
                None => {
                    self.warn(None, "빈 배열".to_string());
                    return None;
                }
            },
            other => other,
        };

        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                self.warn(Some(0), e.to_string());
                None
            }
        }
    }

    /// 이메일: 문자열, `{ "emailAddress": ... }`, 또는 그 배열 (`primary` 항목 우선)
    fn email(&mut self, value: &Value) -> Option<String> {
        let found = match value {
            Value::Array(items) => items
                .iter()
                .find(|item| is_primary(item))
                .and_then(email_address)
                .or_else(|| items.iter().find_map(email_address)),
            other => email_address(other),
        };

        if found.is_none() {
            self.warn(None, "이메일 주소를 찾을 수 없음".to_string());
        }
        found
    }
}

fn email_address(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("emailAddress")
            .or_else(|| map.get("email"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn is_primary(value: &Value) -> bool {
    match value.get("primary") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
