//! 변환 실행 모듈
//!
//! 로드된 내보내기 데이터를 빌더에 차례로 넣고 최종 문서를 만듭니다.

use tracing::info;

use crate::builder::ResumeBuilder;
use crate::country::CountryTable;
use crate::error::{ConvertError, Result};
use crate::ingest::{RecordWarning, SourceExport};
use crate::resume::Resume;

/// 변환 결과
#[derive(Debug, Clone)]
pub struct Conversion {
    /// 최종 JSON Resume 문서
    pub resume: Resume,
    /// 로드 중 건너뛴 레코드 경고
    pub warnings: Vec<RecordWarning>,
}

/// 내보내기 데이터 전체를 JSON Resume 문서로 변환
pub fn convert(export: &SourceExport, countries: &CountryTable) -> Conversion {
    let mut builder = ResumeBuilder::new();

    if let Some(profile) = &export.profile {
        builder.process_profile(profile, countries);
    }
    if let Some(email) = &export.email {
        builder.process_email(email);
    }
    if let Some(positions) = &export.positions {
        builder.process_positions(positions);
    }
    if let Some(education) = &export.education {
        builder.process_education(education);
    }
    if let Some(certifications) = &export.certifications {
        builder.process_certifications(certifications);
    }
    if let Some(skills) = &export.skills {
        builder.process_skills(skills);
    }
    if let Some(languages) = &export.languages {
        builder.process_languages(languages);
    }
    if let Some(references) = &export.references {
        builder.process_references(references);
    }
    if let Some(interests) = &export.interests {
        builder.process_interests(interests);
    }
    if let Some(projects) = &export.projects {
        builder.process_projects(projects);
    }
    if let Some(publications) = &export.publications {
        builder.process_publications(publications);
    }

    let resume = builder.finalize();
    info!(
        categories = resume.categories().len(),
        warnings = export.warnings.len(),
        "변환 완료"
    );

    Conversion {
        resume,
        warnings: export.warnings.clone(),
    }
}

/// 문서를 JSON 문자열로 직렬화
pub fn to_json(resume: &Resume, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(resume)
    } else {
        serde_json::to_string(resume)
    }
    .map_err(|e| ConvertError::SerializeError {
        reason: e.to_string(),
    })
}
