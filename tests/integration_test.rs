//! 통합 테스트 모듈
//!
//! jresume의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 테스트용 JSON 파일 생성 헬퍼
fn create_json_file(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 전체 카테고리가 들어 있는 내보내기 폴더 생성
fn setup_export_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    create_json_file(
        temp_dir.path(),
        "Profile.json",
        r#"[{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "headline": "Analyst & Metaphysician",
            "country": "United Kingdom",
            "websites": "[PERSONAL:https://ada.dev,BLOG:https://notes.ada.dev]",
            "summary": "Wrote the first algorithm.",
            "address": "12 St James's Square",
            "zipCode": "SW1Y 4JH",
            "location": {"name": "London"},
            "twitterHandles": "[adalovelace]"
        }]"#,
    );
    create_json_file(
        temp_dir.path(),
        "Email Addresses.json",
        r#"[{"emailAddress": "ada@example.com", "primary": "Yes"}]"#,
    );
    create_json_file(
        temp_dir.path(),
        "positions.json",
        r#"[
            {"companyName": "Analytical Engine Co.", "title": "Analyst", "startDate": "1842-01", "description": "Notes", "endDate": "1843-09"},
            {"companyName": "Babbage & Co.", "startDate": "1833-06", "description": "Correspondence", "endDate": null}
        ]"#,
    );
    create_json_file(
        temp_dir.path(),
        "education.json",
        r#"[{"schoolName": "Home Tutoring", "degree": "Mathematics", "startDate": "1828", "notes": "De Morgan", "endDate": "1835"}]"#,
    );
    create_json_file(
        temp_dir.path(),
        "certifications.json",
        r#"[{"schoolName": "Royal Society", "degree": "Fellowship", "startDate": "1840", "area": "Science"}]"#,
    );
    create_json_file(temp_dir.path(), "skills.json", r#"["Mathematics", "Poetry"]"#);
    create_json_file(
        temp_dir.path(),
        "languages.json",
        r#"[{"name": "English", "proficiency": "NATIVE_OR_BILINGUAL"}, {"name": "French"}]"#,
    );
    create_json_file(
        temp_dir.path(),
        "recommendations.json",
        r#"[{"recommenderFirstName": "Charles", "recommenderLastName": "Babbage", "recommenderCompany": "Cambridge", "recommendationBody": "Enchantress of numbers."}]"#,
    );
    create_json_file(temp_dir.path(), "interests.json", r#"["Horses"]"#);
    create_json_file(
        temp_dir.path(),
        "projects.json",
        r#"[{"title": "Note G", "startDate": "1843", "description": "Bernoulli numbers", "url": "https://example.org/g"}]"#,
    );
    create_json_file(
        temp_dir.path(),
        "publications.json",
        r#"[{"name": "Sketch of the Analytical Engine", "publisher": "Taylor's Scientific Memoirs", "date": "1843", "url": "https://example.org/sketch", "description": "Translation with notes"}]"#,
    );
    create_json_file(
        temp_dir.path(),
        "country-codes.json",
        r#"[{"name": "United Kingdom", "alpha-2": "GB", "alpha-3": "GBR"}]"#,
    );
    create_json_file(temp_dir.path(), "connections.json", r#"[]"#);

    temp_dir
}

mod builder_tests {
    use jresume::country::{CountryCode, CountryTable};
    use jresume::source::{SourceDate, SourceEducation, SourceLanguage, SourceProfile, SourceReference};
    use jresume::ResumeBuilder;
    use serde_json::json;

    #[test]
    fn test_profile_name_and_country_code() {
        let countries: CountryTable = vec![CountryCode {
            name: "United Kingdom".to_string(),
            alpha2: "GB".to_string(),
        }]
        .into_iter()
        .collect();

        let mut builder = ResumeBuilder::new();
        builder.process_profile(
            &SourceProfile {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                country: Some("United Kingdom".to_string()),
                ..Default::default()
            },
            &countries,
        );

        let basics = builder.finalize().basics.unwrap();
        assert_eq!(basics.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(basics.location.unwrap().country_code, "GB");
    }

    #[test]
    fn test_languages_example() {
        let mut builder = ResumeBuilder::new();
        builder.process_languages(&[SourceLanguage {
            name: Some("English".to_string()),
            proficiency: Some("NATIVE_OR_BILINGUAL".to_string()),
        }]);

        let value = serde_json::to_value(builder.finalize()).unwrap();
        assert_eq!(
            value,
            json!({"languages": [{"language": "English", "fluency": "Native or bilingual"}]})
        );
    }

    #[test]
    fn test_references_example() {
        let mut builder = ResumeBuilder::new();
        builder.process_references(&[SourceReference {
            recommender_first_name: Some("Jo".to_string()),
            recommender_last_name: Some("Doe".to_string()),
            recommender_company: Some("Acme".to_string()),
            recommendation_body: Some("Great!".to_string()),
        }]);

        let value = serde_json::to_value(builder.finalize()).unwrap();
        assert_eq!(
            value["references"],
            json!([{"name": "Jo Doe - Acme", "reference": "Great!"}])
        );
    }

    #[test]
    fn test_finalize_never_emits_certification() {
        let mut builder = ResumeBuilder::new();
        builder.process_education(&[SourceEducation {
            school_name: Some("MIT".to_string()),
            start_date: SourceDate::text("2001-09"),
            ..Default::default()
        }]);
        builder.process_certifications(&[SourceEducation {
            school_name: Some("CNCF".to_string()),
            start_date: SourceDate::text("2019-02"),
            end_date: SourceDate::text("Invalid date"),
            ..Default::default()
        }]);

        let value = serde_json::to_value(builder.finalize()).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("certification"));
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["education"]);
        assert_eq!(value["education"][0]["institution"], json!("CNCF"));
        assert_eq!(value["education"][0]["endDate"], json!("Invalid date"));
        assert_eq!(value["education"][1]["institution"], json!("MIT"));
        assert!(value["education"][1].get("endDate").is_none());
    }

    #[test]
    fn test_only_skills_document() {
        let mut builder = ResumeBuilder::new();
        builder.process_skills(&["Rust"]);

        assert_eq!(
            serde_json::to_value(builder.finalize()).unwrap(),
            json!({"skills": [{"name": "Rust", "level": "", "keywords": []}]})
        );
    }
}

mod ingest_tests {
    use super::*;
    use jresume::ingest::{discover_fragments, load_export, SourceKind};
    use jresume::ConvertError;

    #[test]
    fn test_discover_recognizes_fragments() {
        let temp_dir = setup_export_directory();
        let discovery = discover_fragments(temp_dir.path(), 1).unwrap();

        assert_eq!(discovery.fragments.len(), 11);
        assert_eq!(discovery.ignored.len(), 2); // connections, country-codes
        assert!(discovery
            .fragments
            .iter()
            .any(|f| f.kind == SourceKind::Email));
    }

    #[test]
    fn test_discover_respects_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        create_json_file(temp_dir.path(), "skills.json", r#"["Rust"]"#);
        create_json_file(&nested, "interests.json", r#"["Chess"]"#);

        assert_eq!(discover_fragments(temp_dir.path(), 1).unwrap().fragments.len(), 1);
        assert_eq!(discover_fragments(temp_dir.path(), 2).unwrap().fragments.len(), 2);
    }

    #[test]
    fn test_discover_missing_input() {
        let result = discover_fragments(std::path::Path::new("/nonexistent/export"), 1);
        assert!(matches!(result, Err(ConvertError::InputNotFound { .. })));
    }

    #[test]
    fn test_discover_file_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_json_file(temp_dir.path(), "skills.json", "[]");

        let result = discover_fragments(&file, 1);
        assert!(matches!(result, Err(ConvertError::NotADirectory { .. })));
    }

    #[test]
    fn test_load_export_empty_folder() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_export(temp_dir.path(), 1);
        assert!(matches!(result, Err(ConvertError::NoFragmentsFound)));
    }

    #[test]
    fn test_load_export_invalid_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        create_json_file(temp_dir.path(), "skills.json", r#"["Rust", broken"#);

        let result = load_export(temp_dir.path(), 1);
        assert!(matches!(result, Err(ConvertError::ParseError { .. })));
    }

    #[test]
    fn test_load_export_skips_malformed_records() {
        let temp_dir = TempDir::new().unwrap();
        create_json_file(
            temp_dir.path(),
            "positions.json",
            r#"[{"companyName": "Acme"}, {"companyName": ["not", "a", "string"]}, {"companyName": "Initech"}]"#,
        );

        let export = load_export(temp_dir.path(), 1).unwrap();

        assert_eq!(export.record_count(SourceKind::Positions), Some(2));
        assert_eq!(export.warnings.len(), 1);
        assert_eq!(export.warnings[0].index, Some(1));
        assert!(export.bytes_read > 0);
    }
}

mod conversion_tests {
    use super::*;
    use jresume::country::CountryTable;
    use jresume::{convert, load_export, to_json, Category};
    use serde_json::{json, Value};

    #[test]
    fn test_full_export_conversion() {
        let temp_dir = setup_export_directory();
        let export = load_export(temp_dir.path(), 1).unwrap();
        let countries =
            CountryTable::from_path(&temp_dir.path().join("country-codes.json")).unwrap();

        let conversion = convert(&export, &countries);
        assert!(conversion.warnings.is_empty());

        let resume = &conversion.resume;
        assert_eq!(
            resume.categories(),
            vec![
                Category::Basics,
                Category::Work,
                Category::Education,
                Category::Publications,
                Category::Skills,
                Category::Languages,
                Category::Interests,
                Category::References,
                Category::Projects,
            ]
        );

        let value: Value = serde_json::from_str(&to_json(resume, true).unwrap()).unwrap();
        let basics = &value["basics"];
        assert_eq!(basics["name"], json!("Ada Lovelace"));
        assert_eq!(basics["email"], json!("ada@example.com"));
        assert_eq!(basics["website"], json!("https://ada.dev"));
        assert_eq!(basics["location"]["countryCode"], json!("GB"));
        assert_eq!(basics["location"]["city"], json!("London"));
        assert_eq!(
            basics["profiles"],
            json!([{"network": "Twitter", "username": "adalovelace", "url": "https://twitter.com/adalovelace"}])
        );

        assert_eq!(value["work"][0]["endDate"], json!("1843-09"));
        assert!(value["work"][1].get("endDate").is_none());
        assert_eq!(value["work"][1]["position"], json!(""));

        assert_eq!(value["education"][0]["institution"], json!("Royal Society"));
        assert_eq!(value["education"][1]["courses"], json!(["De Morgan"]));
        assert_eq!(value["languages"][1]["fluency"], Value::Null);
        assert_eq!(
            value["references"][0]["name"],
            json!("Charles Babbage - Cambridge")
        );
        assert_eq!(value["publications"][0]["releaseDate"], json!("1843"));
    }

    #[test]
    fn test_output_key_order() {
        let temp_dir = setup_export_directory();
        let export = load_export(temp_dir.path(), 1).unwrap();
        let text = to_json(&convert(&export, &CountryTable::empty()).resume, false).unwrap();

        let positions: Vec<usize> = [
            "\"basics\"",
            "\"work\"",
            "\"education\"",
            "\"publications\"",
            "\"skills\"",
            "\"languages\"",
            "\"interests\"",
            "\"references\"",
            "\"projects\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(!text.contains("certification"));
    }

    #[test]
    fn test_unknown_country_leaves_code_empty() {
        let temp_dir = setup_export_directory();
        let export = load_export(temp_dir.path(), 1).unwrap();

        let resume = convert(&export, &CountryTable::empty()).resume;
        let location = resume.basics.unwrap().location.unwrap();

        assert_eq!(location.country_code, "");
    }
}

mod error_tests {
    use jresume::error::ConvertError;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let error = ConvertError::InputNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        let msg = error.to_string();
        assert!(msg.contains("입력 폴더를 찾을 수 없습니다"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = ConvertError::ParseError {
            file: PathBuf::from("positions.json"),
            reason: "unexpected token".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("JSON 파싱 실패"));
        assert!(msg.contains("positions.json"));
    }
}

mod cli_tests {
    use clap::Parser;
    use jresume::cli::Args;
    use jresume::WriteMode;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["jresume", "-i", "./export"]);

        assert_eq!(args.output, std::path::PathBuf::from("resume.json"));
        assert_eq!(args.mode, WriteMode::Overwrite);
        assert_eq!(args.max_depth, 1);
        assert!(!args.compact);
        assert_eq!(args.default_log_filter(), "warn");
    }

    #[test]
    fn test_parse_full() {
        let args = Args::parse_from([
            "jresume",
            "--input",
            "./export",
            "--mode",
            "error",
            "--country-codes",
            "codes.json",
            "--verbose",
            "--compact",
        ]);

        assert_eq!(args.mode, WriteMode::Error);
        assert!(args.country_codes.is_some());
        assert!(args.compact);
        assert_eq!(args.default_log_filter(), "jresume=debug");
    }
}
