use crate::document::Section;
use crate::extraction::Diagnostics;

/// Extracts the slide depth in micrometers from the document section
///
/// The depth is the slide number, encoded as the second underscore
/// segment of the title: `PP21_321_Rt` is 321 um deep. Returns `None`
/// with a diagnostic when the title is absent, the segment is missing,
/// or it does not parse as an integer. Depth is required, so a `None`
/// here voids the whole record downstream.
pub fn extract_depth(document: &Section, log: &mut Diagnostics) -> Option<i32> {
    let title = match document.text("title") {
        Some(t) => t.to_lowercase(),
        None => {
            log.push("no title field to derive the slide depth from");
            return None;
        }
    };

    let segment = match title.split('_').nth(1) {
        Some(s) => s,
        None => {
            log.push(format!("title '{}' has no depth segment", title));
            return None;
        }
    };

    match segment.parse::<i32>() {
        Ok(depth) => Some(depth),
        Err(_) => {
            log.push(format!(
                "depth segment '{}' of title '{}' is not an integer",
                segment, title
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn titled(title: &str) -> Section {
        let mut s = Section::default();
        s.record("title", title.to_string());
        s
    }

    #[rstest]
    #[case("PP21_321_Rt", Some(321))]
    #[case("pp21_0_lt", Some(0))]
    #[case("PP21_321", Some(321))]
    #[case("PP21_abc_Rt", None)]
    #[case("PP21", None)]
    #[case("PP21_", None)]
    fn test_depth_from_title(#[case] title: &str, #[case] expected: Option<i32>) {
        let mut log = Diagnostics::new();
        assert_eq!(extract_depth(&titled(title), &mut log), expected);
        assert_eq!(log.is_empty(), expected.is_some());
    }

    #[test]
    fn test_missing_title_is_logged() {
        let mut log = Diagnostics::new();
        assert_eq!(extract_depth(&Section::default(), &mut log), None);
        assert!(log.to_string().contains("title"));
    }

    #[test]
    fn test_bad_segment_is_named_in_diagnostic() {
        let mut log = Diagnostics::new();
        assert_eq!(extract_depth(&titled("PP21_3x1_Rt"), &mut log), None);
        assert!(log.to_string().contains("'3x1'"));
    }
}
