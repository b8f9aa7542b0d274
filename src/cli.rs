//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 출력 파일 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum WriteMode {
    /// 기존 파일이 있으면 덮어쓰기
    #[default]
    Overwrite,
    /// 기존 파일이 있으면 에러
    Error,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Overwrite => write!(f, "Overwrite"),
            WriteMode::Error => write!(f, "Error"),
        }
    }
}

/// jresume CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jresume",
    author = "YourName <your@email.com>",
    version,
    about = "LINKEDIN EXPORT TO JSON RESUME CONVERTER - LinkedIn 내보내기 데이터를 JSON Resume 문서로 변환",
    long_about = r#"
LINKEDIN EXPORT TO JSON RESUME CONVERTER
========================================

폴더 안의 카테고리별 JSON 조각 파일(profile.json, positions.json,
education.json, skills.json 등)을 읽어 하나의 JSON Resume 문서로 변환합니다.

특징:
  • 학력과 자격증을 시작일 기준으로 병합
  • 국가 이름 → ISO 국가 코드 변환
  • 잘못된 레코드는 건너뛰고 경고로 보고

예제:
  jresume -i ./export -o resume.json
  jresume -i ./export -c country-codes.json --verbose
  jresume -i ./export --dry-run
"#
)]
pub struct Args {
    /// JSON 조각 파일들이 있는 입력 폴더 경로
    #[arg(short, long)]
    pub input: PathBuf,

    /// 생성될 JSON Resume 파일 경로
    #[arg(short, long, default_value = "resume.json")]
    pub output: PathBuf,

    /// 출력 파일 모드
    #[arg(short, long, value_enum, default_value_t = WriteMode::Overwrite)]
    pub mode: WriteMode,

    /// 국가 코드 테이블 JSON 파일 (`[{"name": ..., "alpha-2": ...}]`)
    #[arg(short, long)]
    pub country_codes: Option<PathBuf>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 인식된 조각 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 최대 폴더 탐색 깊이
    #[arg(long, default_value_t = 1)]
    pub max_depth: usize,

    /// 경고 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// 한 줄 JSON 출력 (기본값: 들여쓰기)
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// 로그 필터 기본값 (`RUST_LOG`가 없을 때)
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "jresume=debug"
        } else {
            "warn"
        }
    }
}
