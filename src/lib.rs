//! jresume - LINKEDIN EXPORT TO JSON RESUME CONVERTER
//!
//! LinkedIn 내보내기 데이터를 [JSON Resume](https://jsonresume.org) 문서로 변환하는 도구입니다.
//!
//! # 주요 기능
//!
//! - 🧩 **카테고리별 매핑**: 프로필, 경력, 학력, 자격증, 기술, 언어, 추천서, 관심사, 프로젝트, 출판물
//! - 🎓 **학력 병합**: 자격증을 학력에 합쳐 시작일 내림차순으로 안정 정렬
//! - 🌍 **국가 코드**: 국가 이름을 ISO alpha-2 코드로 변환
//! - ⚠️ **부분 실패 허용**: 잘못된 레코드만 건너뛰고 경고로 보고
//! - 🎨 **컬러 출력**: 카테고리별 항목 수와 통계 표시
//!
//! # 예제
//!
//! ```
//! use jresume::{CountryTable, ResumeBuilder};
//!
//! let mut builder = ResumeBuilder::new();
//! builder.process_email("ada@example.com");
//! builder.process_skills(&["Rust"]);
//!
//! let resume = builder.finalize();
//! assert_eq!(resume.skills.unwrap()[0].name, "Rust");
//! # let _ = CountryTable::empty();
//! ```

pub mod builder;
pub mod cli;
pub mod convert;
pub mod country;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod resume;
pub mod source;
pub mod stats;

// Re-exports for convenient access
pub use builder::ResumeBuilder;
pub use cli::{Args, WriteMode};
pub use convert::{convert, to_json, Conversion};
pub use country::{CountryCode, CountryTable};
pub use error::{ConvertError, Result};
pub use ingest::{load_export, RecordWarning, SourceExport, SourceKind};
pub use resume::{Category, Resume};
pub use stats::{format_bytes, Statistics};
