//! 에러 타입 정의 모듈
//!
//! 내보내기 데이터 로드와 출력 직렬화에서 발생할 수 있는 에러 타입을 정의합니다.
//! 레코드 매핑 자체는 실패하지 않으며, 잘못된 레코드는 경고로 보고됩니다.

use std::path::PathBuf;
use thiserror::Error;

/// jresume에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// JSON 파싱 실패
    #[error("JSON 파싱 실패 ({file}): {reason}")]
    ParseError { file: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    SerializeError { reason: String },

    /// 처리할 조각 파일 없음
    #[error("처리할 내보내기 조각 파일이 없습니다")]
    NoFragmentsFound,
}

/// jresume 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
