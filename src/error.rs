use thiserror::Error;

/// превышена емкость буфера кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer capacity of {capacity} code points exceeded")]
pub struct CapacityError
{
    pub capacity: usize,
}

/// ошибки нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationError
{
    #[error("nothing to normalize: empty input")]
    EmptyInput,
    #[error("null character present at position {0}")]
    NullCharacter(usize),
    #[error("normalization output overflow: {0}")]
    BufferOverflow(#[from] CapacityError),
}

/// ошибки правил двунаправленного текста (RFC 5893), по одной на каждое правило
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidiError
{
    #[error("Bidi rule 1: the first character must have Bidi property L, R or AL")]
    FirstCharacter,
    #[error("Bidi rule 2: an RTL label may contain only R, AL, AN, EN, ES, CS, ET, ON, BN or NSM")]
    RtlCharacter,
    #[error("Bidi rule 3: an RTL label must end with R, AL, EN or AN, followed by zero or more NSM")]
    RtlEnding,
    #[error("Bidi rule 4: an RTL label must not contain both EN and AN")]
    MixedNumbers,
    #[error("Bidi rule 5: an LTR label may contain only L, EN, ES, CS, ET, ON, BN or NSM")]
    LtrCharacter,
    #[error("Bidi rule 6: an LTR label must end with L or EN, followed by zero or more NSM")]
    LtrEnding,
}

/// ошибки контекстных правил (RFC 5892, приложение A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError
{
    /// правило не применимо к кодпоинту - внутренний сигнал диспетчеризации, не отказ
    #[error("contextual rule is not applicable to the code point")]
    NotApplicable,
    #[error("ZERO WIDTH NON-JOINER U+200C must follow a virama or sit inside a joining context")]
    ZeroWidthNonJoiner,
    #[error("ZERO WIDTH JOINER U+200D must follow a virama")]
    ZeroWidthJoiner,
    #[error("MIDDLE DOT U+00B7 must be between two U+006C")]
    MiddleDot,
    #[error("GREEK LOWER NUMERAL SIGN U+0375 must be followed by a Greek character")]
    GreekLowerNumeralSign,
    #[error("HEBREW PUNCTUATION GERESH U+05F3 must follow a Hebrew character")]
    HebrewGeresh,
    #[error("HEBREW PUNCTUATION GERSHAYIM U+05F4 must follow a Hebrew character")]
    HebrewGershayim,
    #[error("KATAKANA MIDDLE DOT U+30FB requires a Hiragana, Katakana or Han character in the label")]
    KatakanaMiddleDot,
    #[error("ARABIC-INDIC DIGITS 0660..0669 cannot be mixed with 06F0..06F9")]
    ArabicIndicDigits,
    #[error("EXTENDED ARABIC-INDIC DIGITS 06F0..06F9 cannot be mixed with 0660..0669")]
    ExtendedArabicIndicDigits,
}

/// ошибки протокола IDNA2008 для отдельной метки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolError
{
    #[error("empty label")]
    EmptyLabel,
    #[error("disallowed or unassigned code point U+{code:04X} at position {position}")]
    DisallowedOrUnassigned
    {
        position: usize,
        code: u32,
    },
    #[error("label begins or ends with a hyphen, or has hyphens in the third and fourth positions")]
    RestrictedHyphens,
    #[error("label begins with the combining mark U+{0:04X}")]
    LeadingCombiningMark(u32),
    #[error("label is not in normalized form")]
    NotNormalized,
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// ошибки кодирования / декодирования punycode (RFC 3492)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PunycodeError
{
    #[error("punycode arithmetic overflow")]
    Overflow,
    #[error("invalid punycode digit {0:#04X}")]
    InvalidDigit(u8),
    #[error("punycode input ends inside a variable-length integer")]
    UnexpectedEnd,
    #[error("punycode produced an invalid code point {0:#X}")]
    InvalidCodePoint(u32),
}

/// ошибка преобразования метки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdnaError
{
    #[error("empty input")]
    EmptyInput,
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error("input is not well-formed UTF-16")]
    InvalidUtf16,
    #[error("input is not well-formed UTF-8")]
    InvalidUtf8,
    #[error("STD3 rules: non-LDH ASCII code point U+{0:04X}")]
    Std3NonLdh(u32),
    #[error("STD3 rules: label begins or ends with a hyphen")]
    Std3Hyphen,
    #[error("label already begins with the ACE prefix")]
    AlreadyEncoded,
    #[error("encoded label length {0} is outside of 1..=63")]
    InvalidDnsLength(usize),
    #[error("ToASCII of the decoded label does not reproduce the input")]
    RoundTripMismatch,
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Bidi(#[from] BidiError),
    #[error(transparent)]
    Punycode(#[from] PunycodeError),
}

impl From<ContextError> for IdnaError
{
    fn from(error: ContextError) -> Self
    {
        Self::Protocol(ProtocolError::Context(error))
    }
}

/// ошибка преобразования домена: ошибка метки и её позиция (с нуля)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("label {label}: {error}")]
pub struct DomainError
{
    pub label: usize,
    #[source]
    pub error: IdnaError,
}

impl DomainError
{
    pub fn new(label: usize, error: impl Into<IdnaError>) -> Self
    {
        Self {
            label,
            error: error.into(),
        }
    }

    /// числовой статус
    pub fn code(&self) -> u16
    {
        self.error.code()
    }
}

// числовые статусы, по диапазону на подсистему:
//  1xx - аргументы и емкость буферов
//  2xx - нормализация
//  3xx - протокол
//  4xx - правила Bidi
//  5xx - контекстные правила
//  6xx - транскодирование

/// успешный результат
pub const SUCCESS: u16 = 0;

impl CapacityError
{
    pub fn code(&self) -> u16
    {
        102
    }
}

impl NormalizationError
{
    pub fn code(&self) -> u16
    {
        match self {
            Self::EmptyInput => 201,
            Self::NullCharacter(_) => 202,
            Self::BufferOverflow(_) => 203,
        }
    }
}

impl BidiError
{
    /// номер нарушенного правила (1 ..= 6)
    pub fn rule(&self) -> u8
    {
        match self {
            Self::FirstCharacter => 1,
            Self::RtlCharacter => 2,
            Self::RtlEnding => 3,
            Self::MixedNumbers => 4,
            Self::LtrCharacter => 5,
            Self::LtrEnding => 6,
        }
    }

    pub fn code(&self) -> u16
    {
        400 + self.rule() as u16
    }
}

impl ContextError
{
    pub fn code(&self) -> u16
    {
        match self {
            Self::NotApplicable => 501,
            Self::ZeroWidthNonJoiner => 502,
            Self::ZeroWidthJoiner => 503,
            Self::MiddleDot => 504,
            Self::GreekLowerNumeralSign => 505,
            Self::HebrewGeresh => 506,
            Self::HebrewGershayim => 507,
            Self::KatakanaMiddleDot => 508,
            Self::ArabicIndicDigits => 509,
            Self::ExtendedArabicIndicDigits => 510,
        }
    }
}

impl ProtocolError
{
    pub fn code(&self) -> u16
    {
        match self {
            Self::EmptyLabel => 300,
            Self::DisallowedOrUnassigned { .. } => 301,
            Self::RestrictedHyphens => 302,
            Self::LeadingCombiningMark(_) => 303,
            Self::NotNormalized => 304,
            Self::Context(error) => error.code(),
        }
    }
}

impl PunycodeError
{
    pub fn code(&self) -> u16
    {
        match self {
            Self::Overflow => 601,
            Self::InvalidDigit(_) => 602,
            Self::UnexpectedEnd => 603,
            Self::InvalidCodePoint(_) => 604,
        }
    }
}

impl IdnaError
{
    /// числовой статус
    pub fn code(&self) -> u16
    {
        match self {
            Self::EmptyInput => 101,
            Self::Capacity(error) => error.code(),
            Self::InvalidUtf16 => 103,
            Self::InvalidUtf8 => 104,
            Self::Std3NonLdh(_) => 611,
            Self::Std3Hyphen => 612,
            Self::AlreadyEncoded => 613,
            Self::InvalidDnsLength(_) => 614,
            Self::RoundTripMismatch => 615,
            Self::Normalization(error) => error.code(),
            Self::Protocol(error) => error.code(),
            Self::Bidi(error) => error.code(),
            Self::Punycode(error) => error.code(),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn codes_are_grouped_by_subsystem()
    {
        assert_eq!(IdnaError::from(BidiError::FirstCharacter).code(), 401);
        assert_eq!(IdnaError::from(BidiError::LtrEnding).code(), 406);
        assert_eq!(IdnaError::from(ContextError::MiddleDot).code(), 504);
        assert_eq!(IdnaError::from(NormalizationError::NullCharacter(3)).code(), 202);
        assert_eq!(IdnaError::AlreadyEncoded.code(), 613);
        assert_eq!(DomainError::new(2, ProtocolError::RestrictedHyphens).code(), 302);
    }

    #[test]
    fn domain_error_keeps_label_position()
    {
        let error = DomainError::new(1, BidiError::RtlEnding);

        assert_eq!(error.label, 1);
        assert!(error.to_string().starts_with("label 1: Bidi rule 3"));
    }
}
