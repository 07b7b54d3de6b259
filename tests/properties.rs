use idna2008::BidiError;
use idna2008::Idna;
use idna2008::IdnaError;
use idna2008::NormalizationError;
use proptest::prelude::*;

proptest! {
    /// повторная нормализация ничего не меняет
    #[test]
    fn normalization_is_idempotent(source in "\\PC{1,40}")
    {
        let idna = Idna::default();

        let once = match idna.normalize(&source) {
            Ok(normalized) => normalized,
            Err(IdnaError::Normalization(NormalizationError::BufferOverflow(_))) => return Ok(()),
            Err(error) => return Err(TestCaseError::fail(error.to_string())),
        };

        prop_assert_eq!(idna.normalize(&once), Ok(once.clone()));
    }

    /// ToUnicode(ToASCII(x)) - нормализованная форма x
    #[test]
    fn ascii_round_trip(source in "[a-z0-9\u{E0}-\u{FF}\u{3B1}-\u{3C9}\u{5D0}-\u{5EA}]{1,20}")
    {
        let idna = Idna::default();

        if let Ok(ascii) = idna.to_ascii_label(&source) {
            prop_assert!(ascii.is_ascii());
            prop_assert!(!ascii.is_empty() && ascii.len() <= 63);

            let unicode = idna.to_unicode_label8(ascii.as_bytes());
            let normalized = idna.normalize(&source).unwrap();

            prop_assert_eq!(unicode.status, Ok(()));
            prop_assert_eq!(unicode.output, normalized.into_bytes());
        }
    }

    /// первое нарушенное правило Bidi не зависит от того, что идет после него
    #[test]
    fn bidi_first_rule_dominates(tail in "[a-z\u{5D0}-\u{5EA}0-9\u{660}-\u{669}-]{0,10}")
    {
        let idna = Idna::default();

        let label = format!("1{}", tail);
        prop_assert_eq!(idna.assert_bidi_compliance(&label), Err(BidiError::FirstCharacter));
    }
}
