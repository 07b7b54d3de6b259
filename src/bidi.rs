use crate::domain::split_labels;
use crate::error::BidiError;
use crate::error::DomainError;
use crate::properties::BidiClass;
use crate::properties::UnicodeProperties;

use BidiClass::*;

/// есть ли в домене хотя бы один кодпоинт класса R, AL или AN
/// только для таких доменов применяются правила Bidi
pub fn is_bidi_domain<P>(properties: &P, domain: &[u32]) -> bool
where
    P: UnicodeProperties + ?Sized,
{
    domain
        .iter()
        .any(|&code| properties.bidi_class(code).is_rtl())
}

/// RTL-метка: первый кодпоинт имеет класс R, AL или AN
pub fn is_rtl_label<P>(properties: &P, label: &[u32]) -> bool
where
    P: UnicodeProperties + ?Sized,
{
    match label.first() {
        Some(&code) => properties.bidi_class(code).is_rtl(),
        None => false,
    }
}

/// проверить метку правилами Bidi (RFC 5893, раздел 2)
///
/// правило 1 проверяется всегда, затем 2 - 4 для RTL-метки, либо 5 - 6 для LTR-метки.
/// первое нарушенное правило - окончательный результат
pub fn assert_bidi_compliance<P>(properties: &P, label: &[u32]) -> Result<(), BidiError>
where
    P: UnicodeProperties + ?Sized,
{
    let first = match label.first() {
        Some(&code) => properties.bidi_class(code),
        None => return Ok(()),
    };

    // 1. первый символ - L, R или AL
    if !matches!(first, LeftToRight | RightToLeft | ArabicLetter) {
        return Err(BidiError::FirstCharacter);
    }

    match is_rtl_label(properties, label) {
        true => assert_rtl_label(properties, label),
        false => assert_ltr_label(properties, label),
    }
}

/// правила 2 - 4
fn assert_rtl_label<P>(properties: &P, label: &[u32]) -> Result<(), BidiError>
where
    P: UnicodeProperties + ?Sized,
{
    let mut has_european_number = false;
    let mut has_arabic_number = false;

    // 2. допустимые классы RTL-метки
    for &code in label {
        match properties.bidi_class(code) {
            EuropeanNumber => has_european_number = true,
            ArabicNumber => has_arabic_number = true,
            RightToLeft | ArabicLetter | EuropeanSeparator | CommonSeparator
            | EuropeanTerminator | OtherNeutral | BoundaryNeutral | NonspacingMark => (),
            _ => return Err(BidiError::RtlCharacter),
        }
    }

    // 3. окончание метки, не считая завершающих NSM
    match last_non_nsm(properties, label) {
        Some(RightToLeft | ArabicLetter | EuropeanNumber | ArabicNumber) => (),
        _ => return Err(BidiError::RtlEnding),
    }

    // 4. EN и AN не могут встречаться вместе
    match has_european_number && has_arabic_number {
        true => Err(BidiError::MixedNumbers),
        false => Ok(()),
    }
}

/// правила 5 - 6
fn assert_ltr_label<P>(properties: &P, label: &[u32]) -> Result<(), BidiError>
where
    P: UnicodeProperties + ?Sized,
{
    // 5. допустимые классы LTR-метки
    for &code in label {
        match properties.bidi_class(code) {
            LeftToRight | EuropeanNumber | EuropeanSeparator | CommonSeparator
            | EuropeanTerminator | OtherNeutral | BoundaryNeutral | NonspacingMark => (),
            _ => return Err(BidiError::LtrCharacter),
        }
    }

    // 6. окончание метки, не считая завершающих NSM
    match last_non_nsm(properties, label) {
        Some(LeftToRight | EuropeanNumber) => Ok(()),
        _ => Err(BidiError::LtrEnding),
    }
}

/// класс последнего кодпоинта, не являющегося NSM. None - метка состоит только из NSM
#[inline]
fn last_non_nsm<P>(properties: &P, label: &[u32]) -> Option<BidiClass>
where
    P: UnicodeProperties + ?Sized,
{
    label
        .iter()
        .rev()
        .map(|&code| properties.bidi_class(code))
        .find(|class| *class != NonspacingMark)
}

/// правила Bidi для всего нормализованного домена (метки вместе с разделителями)
/// домен без RTL-кодпоинтов проверку проходит сразу, иначе проверяется каждая непустая метка
pub fn apply_bidi_rules<P>(properties: &P, domain: &[u32]) -> Result<(), DomainError>
where
    P: UnicodeProperties + ?Sized,
{
    if !is_bidi_domain(properties, domain) {
        return Ok(());
    }

    for (index, label) in split_labels(domain).enumerate() {
        if label.is_empty() {
            continue;
        }

        assert_bidi_compliance(properties, label).map_err(|error| DomainError::new(index, error))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::properties::IcuProperties;

    fn codes(source: &str) -> Vec<u32>
    {
        source.chars().map(u32::from).collect()
    }

    fn check(source: &str) -> Result<(), BidiError>
    {
        assert_bidi_compliance(&IcuProperties::new(), &codes(source))
    }

    #[test]
    fn ltr_labels()
    {
        assert_eq!(check("abc"), Ok(()));
        assert_eq!(check("abc1"), Ok(()));
        assert_eq!(check("a\u{301}"), Ok(()));
        // 5: иврит внутри LTR-метки
        assert_eq!(check("a\u{5D0}b"), Err(BidiError::LtrCharacter));
        // 6: метка заканчивается на ES
        assert_eq!(check("ab-"), Err(BidiError::LtrEnding));
    }

    #[test]
    fn rtl_labels()
    {
        assert_eq!(check("\u{5D0}\u{5D1}"), Ok(()));
        assert_eq!(check("\u{627}\u{628}\u{661}"), Ok(()));
        // 2: латиница в RTL-метке
        assert_eq!(check("\u{5D0}a\u{5D1}"), Err(BidiError::RtlCharacter));
        // 3: окончание на ES
        assert_eq!(check("\u{5D0}-"), Err(BidiError::RtlEnding));
        // 3: завершающие NSM пропускаются
        assert_eq!(check("\u{5D0}\u{5B0}"), Ok(()));
        // 4: EN и AN вместе
        assert_eq!(check("\u{627}1\u{661}"), Err(BidiError::MixedNumbers));
    }

    #[test]
    fn first_rule_is_final()
    {
        // цифра в начале: правило 1 нарушено, хотя метка нарушает и правило 5
        assert_eq!(check("1\u{5D0}"), Err(BidiError::FirstCharacter));
        assert_eq!(check("\u{661}\u{5D0}"), Err(BidiError::FirstCharacter));
        assert_eq!(check("\u{301}a"), Err(BidiError::FirstCharacter));
    }

    #[test]
    fn domains()
    {
        let properties = IcuProperties::new();

        // нет RTL-кодпоинтов - метки не проверяются
        assert!(!is_bidi_domain(&properties, &codes("1a.b-")));
        assert_eq!(apply_bidi_rules(&properties, &codes("1a.b-")), Ok(()));

        assert!(is_rtl_label(&properties, &codes("\u{5D0}a")));
        assert!(!is_rtl_label(&properties, &codes("a\u{5D0}")));

        // в домене есть иврит - LTR-метка с ведущей цифрой не проходит
        assert_eq!(
            apply_bidi_rules(&properties, &codes("\u{5D0}\u{5D1}.1a")),
            Err(DomainError::new(1, BidiError::FirstCharacter))
        );
        assert_eq!(apply_bidi_rules(&properties, &codes("\u{5D0}\u{5D1}.abc")), Ok(()));
    }
}
