use crate::document::Section;
use crate::extraction::Diagnostics;
use crate::types::SideOfHead;

/// One side-resolution rule over (lowercased title, lowercased description)
struct SideRule {
    side: SideOfHead,
    matches: fn(&str, &str) -> bool,
}

fn right_signal(title: &str, description: &str) -> bool {
    title.contains("rt") || description.contains("right")
}

fn left_signal(title: &str, description: &str) -> bool {
    title.contains("lt") || description.contains("left")
}

/// Rules are evaluated in declared order and the first match wins.
/// Conflicting signals across the two texts are not reconciled; whichever
/// rule fires first decides.
const RULES: &[SideRule] = &[
    SideRule {
        side: SideOfHead::Right,
        matches: right_signal,
    },
    SideRule {
        side: SideOfHead::Left,
        matches: left_signal,
    },
];

/// Extracts which side of the head the slide came from
///
/// Looks for abbreviated markers ("rt"/"lt") in the title and spelled-out
/// markers ("right"/"left") in the description. Returns `None` with a
/// diagnostic naming both examined strings when no rule matches; the side
/// is an optional field, so this does not void the record.
pub fn extract_side_of_head(document: &Section, log: &mut Diagnostics) -> Option<SideOfHead> {
    let title = document.text("title").unwrap_or("").to_lowercase();
    let description = document.text("description").unwrap_or("").to_lowercase();

    for rule in RULES {
        if (rule.matches)(&title, &description) {
            return Some(rule.side);
        }
    }

    log.push(format!(
        "no side marker in title '{}' or description '{}'",
        title, description
    ));
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn section(title: &str, description: &str) -> Section {
        let mut s = Section::default();
        if !title.is_empty() {
            s.record("title", title.to_string());
        }
        if !description.is_empty() {
            s.record("description", description.to_string());
        }
        s
    }

    #[rstest]
    #[case("PP21_321_Rt", "", Some(SideOfHead::Right))]
    #[case("PP21_321_Lt", "", Some(SideOfHead::Left))]
    #[case("PP21_321", "right cochlea", Some(SideOfHead::Right))]
    #[case("PP21_321", "left cochlea", Some(SideOfHead::Left))]
    #[case("PP21_321", "mid-sagittal", None)]
    #[case("", "", None)]
    fn test_side_resolution(
        #[case] title: &str,
        #[case] description: &str,
        #[case] expected: Option<SideOfHead>,
    ) {
        let doc = section(title, description);
        let mut log = Diagnostics::new();
        assert_eq!(extract_side_of_head(&doc, &mut log), expected);
        assert_eq!(log.is_empty(), expected.is_some());
    }

    #[test]
    fn test_title_rt_beats_description_left() {
        // Right rule is declared first, so an "rt" title wins even when
        // the description says left.
        let doc = section("PP21_321_Rt", "left side of head");
        let mut log = Diagnostics::new();
        assert_eq!(extract_side_of_head(&doc, &mut log), Some(SideOfHead::Right));
    }

    #[test]
    fn test_description_right_beats_title_lt() {
        // Same ordering consequence mirrored: the Right rule also fires
        // from the description alone, before the Left rule is consulted.
        let doc = section("PP21_321_Lt", "right side of head");
        let mut log = Diagnostics::new();
        assert_eq!(extract_side_of_head(&doc, &mut log), Some(SideOfHead::Right));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let doc = section("pp21_321_RT", "");
        let mut log = Diagnostics::new();
        assert_eq!(extract_side_of_head(&doc, &mut log), Some(SideOfHead::Right));
    }

    #[test]
    fn test_diagnostic_names_examined_strings() {
        let doc = section("pp21_321", "no marker here");
        let mut log = Diagnostics::new();
        assert_eq!(extract_side_of_head(&doc, &mut log), None);
        let msg = log.to_string();
        assert!(msg.contains("pp21_321"));
        assert!(msg.contains("no marker here"));
    }
}
