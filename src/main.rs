//! jresume - LINKEDIN EXPORT TO JSON RESUME CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use jresume::{
    cli::{Args, WriteMode},
    convert::{convert, to_json},
    country::CountryTable,
    ingest::{discover_fragments, load_fragments, Discovery, RecordWarning},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args);

    // 헤더 출력
    print_header(&args);

    // 조각 파일 탐색
    let discovery = discover_fragments(&args.input, args.max_depth)?;

    if discovery.fragments.is_empty() {
        println!("{}", "⚠️ 처리할 조각 파일이 없습니다.".yellow());
        return Ok(());
    }

    println!(
        "  {} 발견된 조각 수: {}",
        "📋".bright_white(),
        discovery.fragments.len().to_string().bright_green()
    );

    // 드라이런 모드
    if args.dry_run {
        print_dry_run(&discovery);
        return Ok(());
    }

    run_conversion(&args, &discovery)
}

/// 로그 구독자 초기화 (`RUST_LOG` 우선)
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 LINKEDIN EXPORT TO JSON RESUME".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), args.input);

    if !args.dry_run {
        println!("  {} 출력 파일: {:?}", "📄".bright_green(), args.output);
        println!("  {} 모드: {}", "⚙️".bright_yellow(), args.mode);
    }

    if let Some(ref countries) = args.country_codes {
        println!("  {} 국가 코드: {:?}", "🌍".bright_magenta(), countries);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 조각 파일 검색 중...".bright_cyan());
}

/// 드라이런 출력
fn print_dry_run(discovery: &Discovery) {
    println!("\n{}", "📋 인식된 조각 파일:".bright_cyan());
    for (i, fragment) in discovery.fragments.iter().enumerate() {
        println!(
            "  {}. {:?} → {}",
            i + 1,
            fragment.path.file_name().unwrap_or_default(),
            fragment.kind.category().to_string().bright_green()
        );
    }

    if !discovery.ignored.is_empty() {
        println!("\n{}", "⚠️ 무시될 파일:".bright_yellow());
        for path in &discovery.ignored {
            println!("  {} {:?}", "•".yellow(), path.file_name().unwrap_or_default());
        }
    }
}

/// 변환 실행
fn run_conversion(args: &Args, discovery: &Discovery) -> Result<()> {
    // 출력 파일 모드 확인
    check_output_mode(args)?;

    let countries = load_country_table(args)?;
    let mut stats = Statistics::new(discovery.fragments.len(), discovery.ignored.len());

    println!("\n{}", "⚡ 변환 중...".bright_cyan());

    let export = load_fragments(&discovery.fragments).context("조각 파일 로드 실패")?;
    stats.record_export(&export);

    let conversion = convert(&export, &countries);
    stats.record_resume(&conversion.resume);

    if args.verbose {
        for category in conversion.resume.categories() {
            println!("  {} {}", "✓".green(), category);
        }
    }

    // 파일 쓰기
    println!("\n{}", "💾 JSON Resume 저장 중...".bright_cyan());

    let json = to_json(&conversion.resume, !args.compact)?;
    write_output(&args.output, &json)?;
    stats.add_bytes_written(json.len() as u64 + 1);

    // 경고 출력
    print_warnings(&conversion.warnings, args.verbose);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_warning_log(log_path, &conversion.warnings)?;
    }

    // 통계 출력
    stats.print_summary();

    println!("\n{} 저장 완료: {:?}\n", "✅".bright_green(), args.output);

    Ok(())
}

/// 출력 모드 확인
fn check_output_mode(args: &Args) -> Result<()> {
    if args.mode == WriteMode::Error && args.output.exists() {
        anyhow::bail!("출력 파일이 이미 존재합니다: {:?}", args.output);
    }
    Ok(())
}

/// 국가 코드 테이블 로드 (지정되지 않으면 빈 테이블)
fn load_country_table(args: &Args) -> Result<CountryTable> {
    match args.country_codes {
        Some(ref path) => {
            let table = CountryTable::from_path(path)?;
            if args.verbose {
                println!(
                    "  {} 국가 코드 {}개 로드",
                    "🌍".bright_magenta(),
                    table.len()
                );
            }
            Ok(table)
        }
        None => {
            println!(
                "  {} {}",
                "ℹ️".bright_blue(),
                "국가 코드 테이블 없음: countryCode는 비어 있게 됩니다".dimmed()
            );
            Ok(CountryTable::empty())
        }
    }
}

/// 출력 파일 쓰기
fn write_output(path: &Path, json: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("출력 파일 생성 실패: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}

/// 경고 목록 출력
fn print_warnings(warnings: &[RecordWarning], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    println!("\n{}", "⚠️ 건너뛴 레코드:".bright_yellow());
    for warning in warnings {
        println!(
            "  {} {:?} {}",
            "•".yellow(),
            warning.file.file_name().unwrap_or_default(),
            warning.kind
        );
        if verbose {
            println!("    {}", warning.to_string().dimmed());
        }
    }
}

/// 경고 로그 파일 작성
fn write_warning_log(log_path: &Path, warnings: &[RecordWarning]) -> Result<()> {
    let mut log_file = File::create(log_path)?;

    writeln!(log_file, "jresume 경고 로그")?;
    writeln!(log_file, "총 경고 수: {}", warnings.len())?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for warning in warnings {
        writeln!(log_file, "\n파일: {:?}", warning.file)?;
        writeln!(log_file, "경고: {}", warning)?;
    }

    println!("\n{} 경고 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}
