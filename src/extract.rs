//! 문자열 추출 모듈
//!
//! 웹사이트, 트위터 핸들, 언어 숙련도 같은 자유 형식 문자열에서 값을 뽑아냅니다.
//! 형식이 맞지 않으면 `None`을 반환하며, 호출 측에서 기본값으로 대체합니다.

/// 단어 문자 여부 (`[A-Za-z0-9_]`)
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// 첫 단어 문자부터 마지막 단어 문자까지의 구간 반환
///
/// 앞뒤의 괄호, 공백, 구두점 등을 잘라냅니다. 단어 문자가 두 개 미만이면 `None`입니다.
///
/// # Examples
/// ```
/// use jresume::extract::word_span;
///
/// assert_eq!(word_span("[https://ada.dev/]"), Some("https://ada.dev"));
/// assert_eq!(word_span("  @ada "), Some("ada"));
/// assert_eq!(word_span("[]"), None);
/// ```
pub fn word_span(text: &str) -> Option<&str> {
    let start = text.find(is_word_char)?;
    let end = text.rfind(is_word_char)?;

    // 단어 문자는 모두 1바이트 ASCII
    (end > start).then(|| &text[start..=end])
}

/// 웹사이트 목록에서 첫 번째 URL 추출
///
/// 입력 형식은 `"[TYPE:url,TYPE:url]"`이며, 첫 항목의 첫 `:` 뒤 부분을 사용합니다.
pub fn parse_website(websites: &str) -> Option<String> {
    let first = websites.split(',').next()?;
    let (_, address) = first.split_once(':')?;
    word_span(address).map(str::to_string)
}

/// 트위터 핸들 목록에서 첫 번째 사용자 이름 추출
pub fn parse_twitter_handle(handles: &str) -> Option<String> {
    let first = handles.split(',').next()?;
    word_span(first).map(str::to_string)
}

/// 숙련도 코드를 읽기 쉬운 문장으로 변환
///
/// # Examples
/// ```
/// use jresume::extract::clean_proficiency;
///
/// assert_eq!(
///     clean_proficiency("NATIVE_OR_BILINGUAL").as_deref(),
///     Some("Native or bilingual")
/// );
/// assert_eq!(clean_proficiency(""), None);
/// ```
pub fn clean_proficiency(proficiency: &str) -> Option<String> {
    let lowered = proficiency.to_lowercase().replace('_', " ");
    let mut chars = lowered.chars();
    let first = chars.next()?;

    Some(first.to_uppercase().chain(chars).collect())
}
