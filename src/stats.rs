//! 통계 및 유틸리티 모듈
//!
//! 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::ingest::SourceExport;
use crate::resume::{Category, Resume};

/// 변환 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 발견된 조각 파일 수
    pub fragments_found: usize,
    /// 무시된 JSON 파일 수
    pub files_ignored: usize,
    /// 출력 문서에 기록된 항목 수
    pub items_written: usize,
    /// 건너뛴 레코드 수
    pub records_skipped: usize,
    /// 읽은 총 바이트
    pub total_bytes_read: u64,
    /// 쓴 총 바이트
    pub total_bytes_written: u64,
    /// 카테고리별 항목 수 (출력 순서)
    pub categories: Vec<(Category, usize)>,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(fragments_found: usize, files_ignored: usize) -> Self {
        Self {
            fragments_found,
            files_ignored,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 로드 결과 기록
    pub fn record_export(&mut self, export: &SourceExport) {
        self.total_bytes_read += export.bytes_read;
        self.records_skipped += export.warnings.len();
    }

    /// 출력 문서 기록
    pub fn record_resume(&mut self, resume: &Resume) {
        self.categories = resume
            .categories()
            .into_iter()
            .filter_map(|category| resume.item_count(category).map(|n| (category, n)))
            .collect();
        self.items_written = self.categories.iter().map(|(_, n)| n).sum();
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&mut self, bytes: u64) {
        self.total_bytes_written += bytes;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 조각 파일:    {}",
            "📁".bright_cyan(),
            self.fragments_found
        );

        if self.files_ignored > 0 {
            println!(
                "  {} 무시된 파일:  {}",
                "⚠️".bright_yellow(),
                self.files_ignored.to_string().yellow()
            );
        }

        for (category, count) in &self.categories {
            println!(
                "  {} {:<13} {}",
                "•".bright_green(),
                format!("{}:", category),
                count.to_string().green()
            );
        }

        if self.records_skipped > 0 {
            println!(
                "  {} 건너뜀:       {}",
                "❌".bright_red(),
                self.records_skipped.to_string().red()
            );
        } else {
            println!("  {} 건너뜀:       {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.total_bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.total_bytes_written)
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use jresume::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
