//! Fixed text of the generated page body, per language

use crate::config::Language;

/// Headings, placeholders and default checklist for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Heading of the title section
    pub title_heading: &'static str,
    /// Heading of the summary section
    pub summary_heading: &'static str,
    /// Heading of the checklist section
    pub checklist_heading: &'static str,
    /// Heading of the closing section
    pub closing_heading: &'static str,
    /// Shown when the PR has no summary text
    pub no_summary: &'static str,
    /// Trailing empty notes line
    pub notes: &'static str,
    /// Checklist used when the PR body has no checkbox items
    pub default_todos: [&'static str; 4],
}

const KO: Template = Template {
    title_heading: "제목",
    summary_heading: "업무 파악",
    checklist_heading: "체크 리스트",
    closing_heading: "최종 정리",
    no_summary: "(요약 없음)",
    notes: "추가 메모:",
    default_todos: [
        "테스트/검증 확인",
        "배포 영향도 확인",
        "롤백 플랜 확인",
        "모니터링 포인트 확인",
    ],
};

const EN: Template = Template {
    title_heading: "Title",
    summary_heading: "Summary",
    checklist_heading: "Checklist",
    closing_heading: "Wrap-up",
    no_summary: "(no summary)",
    notes: "Additional notes:",
    default_todos: [
        "Verify tests",
        "Verify deployment impact",
        "Verify rollback plan",
        "Verify monitoring",
    ],
};

impl Template {
    /// Template for `language`
    pub const fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Ko => &KO,
            Language::En => &EN,
        }
    }
}
