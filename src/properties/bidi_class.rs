use icu_properties::BidiClass as IcuBidiClass;

/// класс направления текста (bidi class)
/// 23 варианта, укладывается в 5 бит
///
/// группы классов:
///     strong (L, R, AL) - сильный тип направления - символы, которые имеют явно заданное направление
///     weak (EN, ES, ET, AN, CS, NSM, BN) - слабый тип направления - символы, направление которых зависит от контекста
///     neutral (B, S, WS, ON) - нейтральные типы - символы, не имеющие определенного направления
///     explicit (LRE, LRO, RLE, RLO, PDF, LRI, RLI, FSI, PDI) - явные типы форматирования
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum BidiClass
{
    /// L - любой сильный LTR-символ
    LeftToRight = 1,
    /// R - любой сильный (не арабский) RTL-символ
    RightToLeft = 2,
    /// AL - любой сильный (арабский) RTL-символ
    ArabicLetter = 3,

    /// EN - любая цифра ASCII или восточно-арабская индийская цифра
    EuropeanNumber = 4,
    /// ES - знаки плюса и минуса
    EuropeanSeparator = 5,
    /// ET - терминатор в контексте числового формата, включает символы валюты
    EuropeanTerminator = 6,
    /// AN - любая арабско-индийская цифра
    ArabicNumber = 7,
    /// CS - запятые, двоеточия и слеши
    CommonSeparator = 8,
    /// NSM - не занимающий места символ, не оказывающий влияния на направление текста
    NonspacingMark = 9,
    /// BN - большинство символов форматирования, управляющие коды или недопустимые символы
    BoundaryNeutral = 10,

    /// B - различные символы новой строки, которые разделяют абзацы
    ParagraphSeparator = 12,
    /// S - различные управляющие коды, связанные с сегментами текста
    SegmentSeparator = 13,
    /// WS - пробельные символы, такие как пробелы и табуляции
    Whitespace = 14,
    /// ON - большинство других символов и знаков пунктуации
    OtherNeutral = 15,

    /// LRE - U+202A
    LeftToRightEmbedding = 16,
    /// LRO - U+202D
    LeftToRightOverride = 17,
    /// RLE - U+202B
    RightToLeftEmbedding = 18,
    /// RLO - U+202E
    RightToLeftOverride = 19,
    /// PDF - U+202C
    PopDirectionalFormat = 20,
    /// LRI - U+2066
    LeftToRightIsolate = 21,
    /// RLI - U+2067
    RightToLeftIsolate = 22,
    /// FSI - U+2068
    FirstStrongIsolate = 23,
    /// PDI - U+2069
    PopDirectionalIsolate = 24,
}

impl BidiClass
{
    /// R, AL или AN - признак RTL-метки и "двунаправленного" домена
    #[inline]
    pub fn is_rtl(&self) -> bool
    {
        matches!(self, Self::RightToLeft | Self::ArabicLetter | Self::ArabicNumber)
    }

    /// сокращенное название, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::LeftToRight => "L",
            Self::RightToLeft => "R",
            Self::ArabicLetter => "AL",
            Self::EuropeanNumber => "EN",
            Self::EuropeanSeparator => "ES",
            Self::EuropeanTerminator => "ET",
            Self::ArabicNumber => "AN",
            Self::CommonSeparator => "CS",
            Self::NonspacingMark => "NSM",
            Self::BoundaryNeutral => "BN",
            Self::ParagraphSeparator => "B",
            Self::SegmentSeparator => "S",
            Self::Whitespace => "WS",
            Self::OtherNeutral => "ON",
            Self::LeftToRightEmbedding => "LRE",
            Self::LeftToRightOverride => "LRO",
            Self::RightToLeftEmbedding => "RLE",
            Self::RightToLeftOverride => "RLO",
            Self::PopDirectionalFormat => "PDF",
            Self::LeftToRightIsolate => "LRI",
            Self::RightToLeftIsolate => "RLI",
            Self::FirstStrongIsolate => "FSI",
            Self::PopDirectionalIsolate => "PDI",
        }
    }
}

impl From<IcuBidiClass> for BidiClass
{
    fn from(value: IcuBidiClass) -> Self
    {
        match value {
            IcuBidiClass::LeftToRight => Self::LeftToRight,
            IcuBidiClass::RightToLeft => Self::RightToLeft,
            IcuBidiClass::ArabicLetter => Self::ArabicLetter,
            IcuBidiClass::EuropeanNumber => Self::EuropeanNumber,
            IcuBidiClass::EuropeanSeparator => Self::EuropeanSeparator,
            IcuBidiClass::EuropeanTerminator => Self::EuropeanTerminator,
            IcuBidiClass::ArabicNumber => Self::ArabicNumber,
            IcuBidiClass::CommonSeparator => Self::CommonSeparator,
            IcuBidiClass::NonspacingMark => Self::NonspacingMark,
            IcuBidiClass::BoundaryNeutral => Self::BoundaryNeutral,
            IcuBidiClass::ParagraphSeparator => Self::ParagraphSeparator,
            IcuBidiClass::SegmentSeparator => Self::SegmentSeparator,
            IcuBidiClass::WhiteSpace => Self::Whitespace,
            IcuBidiClass::OtherNeutral => Self::OtherNeutral,
            IcuBidiClass::LeftToRightEmbedding => Self::LeftToRightEmbedding,
            IcuBidiClass::LeftToRightOverride => Self::LeftToRightOverride,
            IcuBidiClass::RightToLeftEmbedding => Self::RightToLeftEmbedding,
            IcuBidiClass::RightToLeftOverride => Self::RightToLeftOverride,
            IcuBidiClass::PopDirectionalFormat => Self::PopDirectionalFormat,
            IcuBidiClass::LeftToRightIsolate => Self::LeftToRightIsolate,
            IcuBidiClass::RightToLeftIsolate => Self::RightToLeftIsolate,
            IcuBidiClass::FirstStrongIsolate => Self::FirstStrongIsolate,
            IcuBidiClass::PopDirectionalIsolate => Self::PopDirectionalIsolate,
            // все кодпоинты, не перечисленные явно в DerivedBidiClass.txt, имеют класс L
            _ => Self::LeftToRight,
        }
    }
}

impl core::fmt::Display for BidiClass
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}
