//! 이력서 빌더 모듈
//!
//! 카테고리별 원본 레코드를 JSON Resume 항목으로 매핑하여 내부 문서에 누적하고,
//! `finalize`로 정렬/병합된 최종 문서를 만듭니다.

use tracing::{debug, warn};

use crate::country::CountryTable;
use crate::extract::{clean_proficiency, parse_twitter_handle, parse_website};
use crate::resume::{
    Basics, Category, Education, Interest, Language, Location, Profile, Project, Publication,
    Reference, Resume, Skill, Work,
};
use crate::source::{
    SourceEducation, SourceLanguage, SourcePosition, SourceProfile, SourceProject,
    SourcePublication, SourceReference,
};

/// 처리 중인 문서 (자격증을 별도 목록으로 보관)
#[derive(Debug, Clone, Default, PartialEq)]
struct PartialResume {
    basics: Option<Basics>,
    work: Option<Vec<Work>>,
    education: Option<Vec<Education>>,
    certification: Option<Vec<Education>>,
    publications: Option<Vec<Publication>>,
    skills: Option<Vec<Skill>>,
    languages: Option<Vec<Language>>,
    interests: Option<Vec<Interest>>,
    references: Option<Vec<Reference>>,
    projects: Option<Vec<Project>>,
}

/// JSON Resume 빌더
///
/// `process_*` 호출 순서는 자유이며, 같은 카테고리를 다시 처리하면 목록을 교체합니다.
/// `basics`만 프로필/이메일 처리에 걸쳐 얕게 병합됩니다.
#[derive(Debug, Clone, Default)]
pub struct ResumeBuilder {
    target: PartialResume,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl ResumeBuilder {
    /// 빈 빌더 생성
    pub fn new() -> Self {
        Self::default()
    }

    fn merge_basics(&mut self, patch: Basics) {
        self.target
            .basics
            .get_or_insert_with(Basics::default)
            .merge(patch);
    }

    /// 프로필 처리
    ///
    /// 이름, 헤드라인, 웹사이트, 위치, 트위터 프로필을 `basics`에 기록합니다.
    /// 국가 이름이 테이블에 없으면 국가 코드는 빈 문자열입니다.
    pub fn process_profile(&mut self, source: &SourceProfile, countries: &CountryTable) {
        let country_code = source
            .country
            .as_deref()
            .and_then(|country| countries.lookup(country))
            .unwrap_or_default()
            .to_string();

        let website = match source.websites.as_deref().filter(|w| !w.is_empty()) {
            Some(websites) => parse_website(websites).unwrap_or_else(|| {
                warn!(websites, "웹사이트 형식을 해석할 수 없어 빈 값으로 대체");
                String::new()
            }),
            None => String::new(),
        };

        let profiles = match source.twitter_handles.as_deref().filter(|h| !h.is_empty()) {
            Some(handles) => match parse_twitter_handle(handles) {
                Some(username) => vec![Profile {
                    network: "Twitter".to_string(),
                    url: format!("https://twitter.com/{}", username),
                    username,
                }],
                None => {
                    warn!(handles, "트위터 핸들을 해석할 수 없어 프로필 생략");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let city = source
            .location
            .as_ref()
            .map(|location| text(&location.name))
            .unwrap_or_default();

        self.merge_basics(Basics {
            name: Some(format!(
                "{} {}",
                text(&source.first_name),
                text(&source.last_name)
            )),
            label: Some(text(&source.headline)),
            picture: Some(String::new()),
            phone: Some(String::new()),
            website: Some(website),
            summary: Some(text(&source.summary)),
            location: Some(Location {
                address: text(&source.address),
                postal_code: text(&source.zip_code),
                city,
                country_code,
                region: String::new(),
            }),
            profiles: Some(profiles),
            email: None,
        });

        debug!(category = %Category::Basics, "프로필 처리 완료");
    }

    /// 이메일 처리
    pub fn process_email(&mut self, email: &str) {
        self.merge_basics(Basics {
            email: Some(email.to_string()),
            ..Default::default()
        });
    }

    /// 경력 처리
    pub fn process_positions(&mut self, positions: &[SourcePosition]) {
        let work: Vec<Work> = positions
            .iter()
            .map(|position| Work {
                company: text(&position.company_name),
                position: text(&position.title),
                website: String::new(),
                start_date: position.start_date.as_text(),
                summary: text(&position.description),
                highlights: Vec::new(),
                end_date: position.end_date.present_text(),
            })
            .collect();

        debug!(category = %Category::Work, count = work.len(), "경력 처리 완료");
        self.target.work = Some(work);
    }

    /// 학력 처리
    ///
    /// 메모(`notes`)가 있으면 유일한 과목으로 기록합니다.
    pub fn process_education(&mut self, schools: &[SourceEducation]) {
        let education: Vec<Education> = schools
            .iter()
            .map(|school| Education {
                institution: text(&school.school_name),
                area: String::new(),
                study_type: text(&school.degree),
                start_date: school.start_date.as_text(),
                gpa: String::new(),
                courses: school
                    .notes
                    .iter()
                    .filter(|notes| !notes.is_empty())
                    .cloned()
                    .collect(),
                end_date: school.end_date.present_text(),
            })
            .collect();

        debug!(category = %Category::Education, count = education.len(), "학력 처리 완료");
        self.target.education = Some(education);
    }

    /// 자격증 처리 (`finalize`에서 학력에 병합)
    pub fn process_certifications(&mut self, certifications: &[SourceEducation]) {
        let certification: Vec<Education> = certifications
            .iter()
            .map(|cert| Education {
                institution: text(&cert.school_name),
                area: text(&cert.area),
                study_type: text(&cert.degree),
                start_date: cert.start_date.as_text(),
                gpa: String::new(),
                courses: Vec::new(),
                end_date: cert.end_date.present_text(),
            })
            .collect();

        debug!(
            category = %Category::Certification,
            count = certification.len(),
            "자격증 처리 완료"
        );
        self.target.certification = Some(certification);
    }

    /// 기술 처리
    pub fn process_skills<S: AsRef<str>>(&mut self, skills: &[S]) {
        self.target.skills = Some(
            skills
                .iter()
                .map(|skill| Skill {
                    name: skill.as_ref().to_string(),
                    level: String::new(),
                    keywords: Vec::new(),
                })
                .collect(),
        );
    }

    /// 언어 처리
    pub fn process_languages(&mut self, languages: &[SourceLanguage]) {
        self.target.languages = Some(
            languages
                .iter()
                .map(|language| Language {
                    language: text(&language.name),
                    fluency: language.proficiency.as_deref().and_then(clean_proficiency),
                })
                .collect(),
        );
    }

    /// 추천서 처리
    pub fn process_references(&mut self, references: &[SourceReference]) {
        self.target.references = Some(
            references
                .iter()
                .map(|reference| Reference {
                    name: format!(
                        "{} {} - {}",
                        text(&reference.recommender_first_name),
                        text(&reference.recommender_last_name),
                        text(&reference.recommender_company)
                    ),
                    reference: text(&reference.recommendation_body),
                })
                .collect(),
        );
    }

    /// 관심사 처리
    pub fn process_interests<S: AsRef<str>>(&mut self, interests: &[S]) {
        self.target.interests = Some(
            interests
                .iter()
                .map(|interest| Interest {
                    name: interest.as_ref().to_string(),
                    keywords: Vec::new(),
                })
                .collect(),
        );
    }

    /// 프로젝트 처리
    pub fn process_projects(&mut self, projects: &[SourceProject]) {
        self.target.projects = Some(
            projects
                .iter()
                .map(|project| Project {
                    name: text(&project.title),
                    start_date: project.start_date.as_text(),
                    summary: text(&project.description),
                    url: text(&project.url),
                    end_date: project.end_date.present_text(),
                })
                .collect(),
        );
    }

    /// 출판물 처리
    pub fn process_publications(&mut self, publications: &[SourcePublication]) {
        self.target.publications = Some(
            publications
                .iter()
                .map(|publication| Publication {
                    name: text(&publication.name),
                    publisher: text(&publication.publisher),
                    release_date: publication.date.as_text(),
                    website: text(&publication.url),
                    summary: text(&publication.description),
                })
                .collect(),
        );
    }

    /// 최종 문서 생성
    ///
    /// 내부 상태의 복사본으로 만들어지므로 이후의 `process_*` 호출은
    /// 이미 반환된 문서에 영향을 주지 않습니다.
    pub fn finalize(&self) -> Resume {
        let target = &self.target;
        let mut resume = Resume::default();

        for category in Category::CANONICAL_ORDER {
            match category {
                Category::Basics => resume.basics = target.basics.clone(),
                Category::Work => resume.work = target.work.clone(),
                Category::Education => resume.education = target.education.clone(),
                Category::Certification => {
                    if let Some(certification) = &target.certification {
                        resume.education = Some(merge_education(
                            target.education.as_deref().unwrap_or_default(),
                            certification,
                        ));
                    }
                }
                Category::Publications => resume.publications = target.publications.clone(),
                Category::Skills => resume.skills = target.skills.clone(),
                Category::Languages => resume.languages = target.languages.clone(),
                Category::Interests => resume.interests = target.interests.clone(),
                Category::References => resume.references = target.references.clone(),
                Category::Projects => resume.projects = target.projects.clone(),
                Category::Volunteer | Category::Awards => {}
            }
        }

        resume
    }
}

/// 학력과 자격증을 이어 붙여 시작일 내림차순으로 정렬
///
/// 안정 정렬이므로 시작일이 같으면 학력이 먼저, 각 목록 안에서는 입력 순서를 유지합니다.
fn merge_education(education: &[Education], certification: &[Education]) -> Vec<Education> {
    let mut merged: Vec<Education> = education.iter().chain(certification).cloned().collect();
    merged.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    merged
}
