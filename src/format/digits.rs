// ============================================================================
// Numbering systems
// Native digit substitution for non-Latin locales
// ============================================================================

/// The numbering system a locale renders digits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NumberingSystem {
    /// Western Arabic digits 0-9.
    #[default]
    Latn,
    /// Arabic-Indic digits.
    Arab,
    /// Extended Arabic-Indic digits (Persian).
    ArabExt,
    /// Bengali digits.
    Beng,
    /// Devanagari digits.
    Deva,
    /// Myanmar digits.
    Mymr,
}

impl NumberingSystem {
    fn digits(self) -> Option<&'static [char; 10]> {
        match self {
            NumberingSystem::Latn => None,
            NumberingSystem::Arab => {
                Some(&['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'])
            }
            NumberingSystem::ArabExt => {
                Some(&['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'])
            }
            NumberingSystem::Beng => {
                Some(&['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'])
            }
            NumberingSystem::Deva => {
                Some(&['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'])
            }
            NumberingSystem::Mymr => {
                Some(&['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'])
            }
        }
    }

    /// Replace ASCII digits with the system's native digits.
    pub(crate) fn localize(self, number: &str) -> String {
        match self.digits() {
            None => number.to_string(),
            Some(digits) => number
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if c.is_ascii_digit() => digits[d as usize],
                    _ => c,
                })
                .collect(),
        }
    }

    /// Replace the system's native digits with ASCII digits.
    pub(crate) fn delocalize(self, number: &str) -> String {
        match self.digits() {
            None => number.to_string(),
            Some(digits) => number
                .chars()
                .map(|c| match digits.iter().position(|&d| d == c) {
                    Some(i) => char::from_digit(i as u32, 10).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latn_is_identity() {
        assert_eq!(NumberingSystem::Latn.localize("1234.59"), "1234.59");
        assert_eq!(NumberingSystem::Latn.delocalize("1234.59"), "1234.59");
    }

    #[test]
    fn test_localize() {
        assert_eq!(NumberingSystem::Arab.localize("1234"), "١٢٣٤");
        assert_eq!(NumberingSystem::ArabExt.localize("1234"), "۱۲۳۴");
        assert_eq!(NumberingSystem::Beng.localize("1234"), "১২৩৪");
        assert_eq!(NumberingSystem::Deva.localize("1234"), "१२३४");
        assert_eq!(NumberingSystem::Mymr.localize("1234"), "၁၂၃၄");
        // Non-digit characters pass through.
        assert_eq!(NumberingSystem::Deva.localize("-1,2.3"), "-१,२.३");
    }

    #[test]
    fn test_round_trip() {
        let systems = [
            NumberingSystem::Arab,
            NumberingSystem::ArabExt,
            NumberingSystem::Beng,
            NumberingSystem::Deva,
            NumberingSystem::Mymr,
        ];
        for system in systems {
            let localized = system.localize("1234567890");
            assert_eq!(system.delocalize(&localized), "1234567890", "{system:?}");
        }
    }
}
