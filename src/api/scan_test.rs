#[cfg(test)]
mod tests {
    use super::super::error::ApiError;
    use super::super::scan::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn test_allowed_file_types() {
        for name in [
            "report.pdf",
            "notes.DOC",
            "letter.docx",
            "scan.jpg",
            "scan.JPEG",
            "photo.png",
        ] {
            assert!(validate_scan_file(Path::new(name)).is_ok(), "{name} rejected");
        }
    }

    #[test]
    fn test_rejected_file_types() {
        for name in ["archive.zip", "notes.txt", "no_extension", "pdf"] {
            let error = validate_scan_file(Path::new(name)).unwrap_err();
            assert!(matches!(error, ApiError::UnsupportedFileType { .. }));
            assert_eq!(
                error.to_string(),
                "Invalid file type. Please upload PDF, DOC, DOCX, or image files."
            );
        }
    }

    #[test]
    fn test_display_file_name() {
        assert_eq!(display_file_name(Path::new("/tmp/docs/report.pdf")), "report.pdf");
        assert_eq!(display_file_name(Path::new("scan.png")), "scan.png");
    }

    #[test]
    fn test_parse_scan_result_requires_download_url() {
        assert!(matches!(
            parse_scan_result(json!({"fileName": "a.pdf"})),
            Err(ApiError::InvalidResponse)
        ));
        assert!(matches!(
            parse_scan_result(json!({"downloadUrl": ""})),
            Err(ApiError::InvalidResponse)
        ));
        assert!(matches!(
            parse_scan_result(json!(null)),
            Err(ApiError::InvalidResponse)
        ));

        let result = parse_scan_result(json!({
            "downloadUrl": "https://scan.example/out.pdf",
            "summary": "2 conditions detected"
        }))
        .unwrap();
        assert_eq!(result.download_url, "https://scan.example/out.pdf");
        assert_eq!(result.summary.as_deref(), Some("2 conditions detected"));
    }

    #[test]
    fn test_upload_rejects_invalid_type_before_network() {
        let config = ApiConfig::default().with_scan_base_url("http://127.0.0.1:9");
        let client = HttpScanClient::new(&config).unwrap();

        let result = client.upload(Path::new("malware.exe"));

        assert!(matches!(result, Err(ApiError::UnsupportedFileType { .. })));
        assert_eq!(client.upload_url(), "http://127.0.0.1:9/scan/report");
    }
}
