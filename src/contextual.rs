use regex::Regex;

use crate::error::ContextError;
use crate::properties::Script;
use crate::properties::UnicodeProperties;

/// ZERO WIDTH NON-JOINER
pub const ZERO_WIDTH_NON_JOINER: u32 = 0x200C;
/// ZERO WIDTH JOINER
pub const ZERO_WIDTH_JOINER: u32 = 0x200D;
/// MIDDLE DOT
pub const MIDDLE_DOT: u32 = 0x00B7;
/// GREEK LOWER NUMERAL SIGN (KERAIA)
pub const GREEK_LOWER_NUMERAL_SIGN: u32 = 0x0375;
/// HEBREW PUNCTUATION GERESH
pub const HEBREW_GERESH: u32 = 0x05F3;
/// HEBREW PUNCTUATION GERSHAYIM
pub const HEBREW_GERSHAYIM: u32 = 0x05F4;
/// KATAKANA MIDDLE DOT
pub const KATAKANA_MIDDLE_DOT: u32 = 0x30FB;

/// строчная латинская l - соседи средней точки (каталанское l·l)
const LATIN_SMALL_L: u32 = 0x006C;

lazy_static! {
    /// (Joining_Type:{L,D})(Joining_Type:T)*‌(Joining_Type:T)*(Joining_Type:{R,D}) - по всей метке
    static ref ZWNJ_JOINING_PATTERN: Regex = Regex::new("^(L|D)(T)*\u{200C}(T)*(R|D)$").unwrap();
}

/// контекстное правило (RFC 5892, приложение A)
/// порядок вариантов - порядок применения к кодпоинту
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rule
{
    ZeroWidthNonJoiner = 0,
    ZeroWidthJoiner = 1,
    MiddleDot = 2,
    GreekLowerNumeralSign = 3,
    HebrewGeresh = 4,
    HebrewGershayim = 5,
    KatakanaMiddleDot = 6,
    ArabicIndicDigits = 7,
    ExtendedArabicIndicDigits = 8,
}

/// все правила в порядке применения
pub const RULES: [Rule; 9] = [
    Rule::ZeroWidthNonJoiner,
    Rule::ZeroWidthJoiner,
    Rule::MiddleDot,
    Rule::GreekLowerNumeralSign,
    Rule::HebrewGeresh,
    Rule::HebrewGershayim,
    Rule::KatakanaMiddleDot,
    Rule::ArabicIndicDigits,
    Rule::ExtendedArabicIndicDigits,
];

#[inline(always)]
fn is_arabic_indic_digit(code: u32) -> bool
{
    matches!(code, 0x0660 ..= 0x0669)
}

#[inline(always)]
fn is_extended_arabic_indic_digit(code: u32) -> bool
{
    matches!(code, 0x06F0 ..= 0x06F9)
}

impl Rule
{
    /// применимо ли правило к кодпоинту
    #[inline]
    pub fn applicable(&self, code: u32) -> bool
    {
        match self {
            Self::ZeroWidthNonJoiner => code == ZERO_WIDTH_NON_JOINER,
            Self::ZeroWidthJoiner => code == ZERO_WIDTH_JOINER,
            Self::MiddleDot => code == MIDDLE_DOT,
            Self::GreekLowerNumeralSign => code == GREEK_LOWER_NUMERAL_SIGN,
            Self::HebrewGeresh => code == HEBREW_GERESH,
            Self::HebrewGershayim => code == HEBREW_GERSHAYIM,
            Self::KatakanaMiddleDot => code == KATAKANA_MIDDLE_DOT,
            Self::ArabicIndicDigits => is_arabic_indic_digit(code),
            Self::ExtendedArabicIndicDigits => is_extended_arabic_indic_digit(code),
        }
    }

    /// ошибка, которой заканчивается невыполненное правило
    #[inline]
    pub fn error(&self) -> ContextError
    {
        match self {
            Self::ZeroWidthNonJoiner => ContextError::ZeroWidthNonJoiner,
            Self::ZeroWidthJoiner => ContextError::ZeroWidthJoiner,
            Self::MiddleDot => ContextError::MiddleDot,
            Self::GreekLowerNumeralSign => ContextError::GreekLowerNumeralSign,
            Self::HebrewGeresh => ContextError::HebrewGeresh,
            Self::HebrewGershayim => ContextError::HebrewGershayim,
            Self::KatakanaMiddleDot => ContextError::KatakanaMiddleDot,
            Self::ArabicIndicDigits => ContextError::ArabicIndicDigits,
            Self::ExtendedArabicIndicDigits => ContextError::ExtendedArabicIndicDigits,
        }
    }

    /// проверить правило для кодпоинта label[index]
    ///
    /// неприменимое к кодпоинту правило возвращает ContextError::NotApplicable;
    /// отсутствующий сосед слева / справа - нарушение правила
    pub fn evaluate<P>(
        &self,
        properties: &P,
        label: &[u32],
        index: usize,
        record: &mut ExecutionRecord,
    ) -> Result<(), ContextError>
    where
        P: UnicodeProperties + ?Sized,
    {
        match label.get(index) {
            Some(&code) if self.applicable(code) => (),
            _ => return Err(ContextError::NotApplicable),
        }

        record.resolve(index, *self);

        let before = index.checked_sub(1).and_then(|i| label.get(i)).copied();
        let after = label.get(index + 1).copied();

        let passed = match self {
            Self::ZeroWidthNonJoiner => match before {
                Some(before) => {
                    properties.canonical_class(before).is_virama()
                        || matches_joining_pattern(properties, label)
                }
                None => false,
            },
            Self::ZeroWidthJoiner => match before {
                Some(before) => properties.canonical_class(before).is_virama(),
                None => false,
            },
            Self::MiddleDot => before == Some(LATIN_SMALL_L) && after == Some(LATIN_SMALL_L),
            Self::GreekLowerNumeralSign => match after {
                Some(after) => properties.script(after) == Script::Greek,
                None => false,
            },
            Self::HebrewGeresh | Self::HebrewGershayim => match before {
                Some(before) => properties.script(before) == Script::Hebrew,
                None => false,
            },
            Self::KatakanaMiddleDot => {
                self.resolve_all(label, record);

                label.iter().any(|&code| {
                    code != KATAKANA_MIDDLE_DOT && properties.script(code).is_japanese()
                })
            }
            Self::ArabicIndicDigits => {
                self.resolve_all(label, record);

                !label.iter().any(|&code| is_extended_arabic_indic_digit(code))
            }
            Self::ExtendedArabicIndicDigits => {
                self.resolve_all(label, record);

                !label.iter().any(|&code| is_arabic_indic_digit(code))
            }
        };

        match passed {
            true => Ok(()),
            false => Err(self.error()),
        }
    }

    /// правила, проверяющие метку целиком, дают один результат для всех применимых позиций
    #[inline]
    fn resolve_all(&self, label: &[u32], record: &mut ExecutionRecord)
    {
        for (index, &code) in label.iter().enumerate() {
            if self.applicable(code) {
                record.resolve(index, *self);
            }
        }
    }
}

/// ZWNJ: типы соединения всей метки, где сам ZWNJ записан как есть
fn matches_joining_pattern<P>(properties: &P, label: &[u32]) -> bool
where
    P: UnicodeProperties + ?Sized,
{
    let derived: String = label
        .iter()
        .map(|&code| match code == ZERO_WIDTH_NON_JOINER {
            true => '\u{200C}',
            false => properties.joining_type(code).letter(),
        })
        .collect();

    ZWNJ_JOINING_PATTERN.is_match(&derived)
}

/// какие правила уже разрешены для каких позиций метки
/// живет в пределах одного вызова execute_contextual_rules
pub struct ExecutionRecord
{
    /// битовая маска правил на каждую позицию
    resolved: Vec<u16>,
}

impl ExecutionRecord
{
    pub fn new(len: usize) -> Self
    {
        Self {
            resolved: vec![0; len],
        }
    }

    #[inline]
    pub fn is_resolved(&self, index: usize, rule: Rule) -> bool
    {
        match self.resolved.get(index) {
            Some(mask) => mask & (1 << rule as u8) != 0,
            None => false,
        }
    }

    #[inline]
    pub fn resolve(&mut self, index: usize, rule: Rule)
    {
        if let Some(mask) = self.resolved.get_mut(index) {
            *mask |= 1 << rule as u8;
        }
    }
}

/// есть ли в метке кодпоинты, требующие контекстных правил
pub fn has_contextual_code_points<P>(properties: &P, label: &[u32]) -> bool
where
    P: UnicodeProperties + ?Sized,
{
    label
        .iter()
        .any(|&code| properties.is_context_o(code) || properties.is_context_j(code))
}

/// применить контекстные правила к метке
/// внешний цикл - позиции, внутренний - правила; первое нарушение прерывает проверку
pub fn execute_contextual_rules<P>(properties: &P, label: &[u32]) -> Result<(), ContextError>
where
    P: UnicodeProperties + ?Sized,
{
    let mut record = ExecutionRecord::new(label.len());

    for (index, &code) in label.iter().enumerate() {
        for rule in RULES {
            if !rule.applicable(code) || record.is_resolved(index, rule) {
                continue;
            }

            rule.evaluate(properties, label, index, &mut record)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::properties::IcuProperties;

    fn check(label: &[u32]) -> Result<(), ContextError>
    {
        execute_contextual_rules(&IcuProperties::new(), label)
    }

    #[test]
    fn zero_width_non_joiner()
    {
        // в начале метки соседа слева нет - ошибка именно правила ZWNJ
        assert_eq!(check(&[0x200C, 0x61]), Err(ContextError::ZeroWidthNonJoiner));
        // после вирамы (деванагари)
        assert_eq!(check(&[0x0915, 0x094D, 0x200C, 0x0937]), Ok(()));
        // بی: D + ZWNJ + D
        assert_eq!(check(&[0x0628, 0x200C, 0x064A]), Ok(()));
        // D + T + ZWNJ + R
        assert_eq!(check(&[0x0628, 0x064E, 0x200C, 0x0627]), Ok(()));
        // R + ZWNJ + D: слева нет соединения
        assert_eq!(check(&[0x0627, 0x200C, 0x0628]), Err(ContextError::ZeroWidthNonJoiner));
        assert_eq!(check(&[0x61, 0x200C, 0x62]), Err(ContextError::ZeroWidthNonJoiner));
    }

    #[test]
    fn zero_width_joiner()
    {
        assert_eq!(check(&[0x0915, 0x094D, 0x200D]), Ok(()));
        assert_eq!(check(&[0x200D, 0x0915]), Err(ContextError::ZeroWidthJoiner));
        assert_eq!(check(&[0x0915, 0x200D]), Err(ContextError::ZeroWidthJoiner));
    }

    #[test]
    fn middle_dot()
    {
        assert_eq!(check(&[0x6C, 0xB7, 0x6C]), Ok(()));
        assert_eq!(check(&[0x61, 0xB7, 0x62]), Err(ContextError::MiddleDot));
        assert_eq!(check(&[0x6C, 0xB7]), Err(ContextError::MiddleDot));
        assert_eq!(check(&[0xB7, 0x6C]), Err(ContextError::MiddleDot));
    }

    #[test]
    fn greek_and_hebrew()
    {
        assert_eq!(check(&[0x0375, 0x03B1]), Ok(()));
        assert_eq!(check(&[0x0375, 0x61]), Err(ContextError::GreekLowerNumeralSign));
        assert_eq!(check(&[0x03B1, 0x0375]), Err(ContextError::GreekLowerNumeralSign));

        assert_eq!(check(&[0x05D0, 0x05F3]), Ok(()));
        assert_eq!(check(&[0x05D0, 0x05F4]), Ok(()));
        assert_eq!(check(&[0x05F3, 0x05D0]), Err(ContextError::HebrewGeresh));
        assert_eq!(check(&[0x61, 0x05F4]), Err(ContextError::HebrewGershayim));
    }

    #[test]
    fn katakana_middle_dot()
    {
        assert_eq!(check(&[0x30A2, 0x30FB, 0x30A4]), Ok(()));
        assert_eq!(check(&[0x30FB, 0x3042]), Ok(()));
        assert_eq!(check(&[0x61, 0x30FB]), Err(ContextError::KatakanaMiddleDot));
        assert_eq!(check(&[0x30FB, 0x30FB]), Err(ContextError::KatakanaMiddleDot));
    }

    #[test]
    fn arabic_indic_digits()
    {
        assert_eq!(check(&[0x0661, 0x0662]), Ok(()));
        assert_eq!(check(&[0x06F1, 0x06F2]), Ok(()));
        assert_eq!(check(&[0x0660, 0x06F0]), Err(ContextError::ArabicIndicDigits));
        assert_eq!(check(&[0x06F0, 0x0660]), Err(ContextError::ExtendedArabicIndicDigits));
    }

    #[test]
    fn not_applicable_is_a_dispatch_signal()
    {
        let properties = IcuProperties::new();
        let label = [0x61, 0xB7, 0x62];
        let mut record = ExecutionRecord::new(label.len());

        assert_eq!(
            Rule::MiddleDot.evaluate(&properties, &label, 0, &mut record),
            Err(ContextError::NotApplicable)
        );
        assert!(!record.is_resolved(0, Rule::MiddleDot));

        assert_eq!(
            Rule::MiddleDot.evaluate(&properties, &label, 1, &mut record),
            Err(ContextError::MiddleDot)
        );
        assert!(record.is_resolved(1, Rule::MiddleDot));
    }

    #[test]
    fn label_wide_rules_resolve_every_position()
    {
        let properties = IcuProperties::new();
        let label = [0x0661, 0x0662, 0x0663];
        let mut record = ExecutionRecord::new(label.len());

        assert_eq!(Rule::ArabicIndicDigits.evaluate(&properties, &label, 0, &mut record), Ok(()));
        assert!(record.is_resolved(2, Rule::ArabicIndicDigits));
        assert!(!record.is_resolved(2, Rule::ExtendedArabicIndicDigits));
    }

    #[test]
    fn contextual_code_points()
    {
        let properties = IcuProperties::new();

        assert!(has_contextual_code_points(&properties, &[0x61, 0x200D]));
        assert!(has_contextual_code_points(&properties, &[0x0663]));
        assert!(!has_contextual_code_points(&properties, &[0x61, 0x62]));
    }
}
