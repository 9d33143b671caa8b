#[cfg(test)]
mod tests {
    use super::super::selection_resolver::*;
    use crate::schemas::terminology::{Icd11Mappings, Terminology};

    #[test]
    fn test_missing_code_is_invalid() {
        let blank = Terminology {
            namaste_code: Some("   ".to_string()),
            definition: Some("has detail".to_string()),
            ..Default::default()
        };

        assert_eq!(resolve(&blank), Err(SelectionError::MissingCode));
        assert_eq!(
            resolve(&Terminology::default()),
            Err(SelectionError::MissingCode)
        );
        assert_eq!(
            SelectionError::MissingCode.to_string(),
            "Invalid terminology selected. Missing NAMASTE code."
        );
    }

    #[test]
    fn test_suggestion_with_detail_is_ready() {
        let with_definition = Terminology {
            namaste_code: Some("AYUR001".to_string()),
            definition: Some("Fever".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve(&with_definition),
            Ok(Resolution::Ready(with_definition.clone()))
        );

        let with_features = Terminology {
            namaste_code: Some("AYUR002".to_string()),
            clinical_features: Some(Vec::new()),
            ..Default::default()
        };
        assert!(matches!(resolve(&with_features), Ok(Resolution::Ready(_))));

        let with_icd = Terminology {
            namaste_code: Some("AYUR003".to_string()),
            icd11_mappings: Some(Icd11Mappings::default()),
            ..Default::default()
        };
        assert!(matches!(resolve(&with_icd), Ok(Resolution::Ready(_))));
    }

    #[test]
    fn test_bare_suggestion_needs_fetch() {
        let bare = Terminology {
            namaste_code: Some(" AYUR004 ".to_string()),
            definition: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(resolve(&bare), Ok(Resolution::Fetch("AYUR004".to_string())));
    }
}
