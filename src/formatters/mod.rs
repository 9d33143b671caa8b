pub mod terminology_formatter;


pub use terminology_formatter::{
    DetailSection, detail_line_count, detail_sections, format_detail, format_history_entry,
    format_scan_result, format_suggestion_line,
};
