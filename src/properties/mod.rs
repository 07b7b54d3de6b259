use icu_normalizer::properties::CanonicalComposition;
use icu_normalizer::properties::CanonicalDecomposition;
use icu_normalizer::properties::Decomposed;
use icu_normalizer::DecomposingNormalizer;
use icu_properties::maps;
use icu_properties::sets;
use icu_properties::GeneralCategory;

mod bidi_class;
mod canonical_combining_class;
mod decomposition;
mod derived;
mod joining_type;
mod script;

pub use bidi_class::BidiClass;
pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionKind;
pub use derived::derived_property;
pub use derived::DerivedProperty;
pub use joining_type::JoiningType;
pub use script::Script;

/// свойства кодпоинтов Unicode, необходимые IDNA2008
/// все функции чистые и определены на всем диапазоне кодпоинтов
pub trait UnicodeProperties
{
    /// класс направления текста
    fn bidi_class(&self, code: u32) -> BidiClass;

    /// письменность
    fn script(&self, code: u32) -> Script;

    /// класс канонического комбинирования
    fn canonical_class(&self, code: u32) -> CanonicalCombiningClass;

    /// производный тип соединения
    fn joining_type(&self, code: u32) -> JoiningType;

    /// декомпозиция (без алгоритмической декомпозиции хангыль)
    fn decomposition(&self, code: u32) -> Option<Decomposition>;

    /// результат канонической композиции пары, если она существует
    fn compose(&self, first: u32, second: u32) -> Option<u32>;

    /// исключен ли кодпоинт из композиции
    fn is_composition_excluded(&self, code: u32) -> bool;

    /// комбинируемый знак: General_Category = Mn, Mc или Me
    fn is_combining_mark(&self, code: u32) -> bool;

    /// производное свойство IDNA2008
    fn derived_property(&self, code: u32) -> DerivedProperty;

    /// декомпозиция совместимости
    fn is_compatibility_decomposition(&self, code: u32) -> bool
    {
        self.decomposition(code)
            .map(|decomposition| decomposition.is_compatibility())
            .unwrap_or(false)
    }

    fn is_context_o(&self, code: u32) -> bool
    {
        self.derived_property(code) == DerivedProperty::ContextO
    }

    fn is_context_j(&self, code: u32) -> bool
    {
        self.derived_property(code) == DerivedProperty::ContextJ
    }

    fn is_disallowed_or_unassigned(&self, code: u32) -> bool
    {
        matches!(
            self.derived_property(code),
            DerivedProperty::Disallowed | DerivedProperty::Unassigned
        )
    }
}

/// свойства Unicode на данных ICU4X
pub struct IcuProperties
{
    /// канонические композиции
    composition: CanonicalComposition,
    /// одношаговые канонические декомпозиции
    decomposition: CanonicalDecomposition,
    /// полная декомпозиция совместимости
    nfkd: DecomposingNormalizer,
}

impl IcuProperties
{
    pub fn new() -> Self
    {
        Self {
            composition: CanonicalComposition::new(),
            decomposition: CanonicalDecomposition::new(),
            nfkd: DecomposingNormalizer::new_nfkd(),
        }
    }
}

impl Default for IcuProperties
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl UnicodeProperties for IcuProperties
{
    #[inline]
    fn bidi_class(&self, code: u32) -> BidiClass
    {
        BidiClass::from(maps::bidi_class().get32(code))
    }

    #[inline]
    fn script(&self, code: u32) -> Script
    {
        Script::from(maps::script().get32(code))
    }

    #[inline]
    fn canonical_class(&self, code: u32) -> CanonicalCombiningClass
    {
        CanonicalCombiningClass::from(maps::canonical_combining_class().get32(code))
    }

    #[inline]
    fn joining_type(&self, code: u32) -> JoiningType
    {
        JoiningType::from(maps::joining_type().get32(code))
    }

    fn decomposition(&self, code: u32) -> Option<Decomposition>
    {
        // U+0000 ..= U+009F не имеют декомпозиции
        if code < 0xA0 {
            return None;
        }

        let symbol = char::from_u32(code)?;

        // у кодпоинта либо каноническая декомпозиция, либо декомпозиция совместимости
        match self.decomposition.decompose(symbol) {
            Decomposed::Singleton(c0) => return Some(Decomposition::canonical(vec![u32::from(c0)])),
            Decomposed::Expansion(c0, c1) => {
                return Some(Decomposition::canonical(vec![u32::from(c0), u32::from(c1)]))
            }
            Decomposed::Default => (),
        }

        let mut utf8 = [0u8; 4];
        let source: &str = symbol.encode_utf8(&mut utf8);
        let nfkd = self.nfkd.normalize(source);

        // декомпозиция совместимости хранится полностью - в ICU4X нет одношаговых декомпозиций с тегом
        match nfkd == source {
            true => None,
            false => Some(Decomposition::compatibility(
                nfkd.chars().map(u32::from).collect(),
            )),
        }
    }

    #[inline]
    fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        let first = char::from_u32(first)?;
        let second = char::from_u32(second)?;

        self.composition.compose(first, second).map(u32::from)
    }

    #[inline]
    fn is_composition_excluded(&self, code: u32) -> bool
    {
        sets::full_composition_exclusion().contains32(code)
    }

    #[inline]
    fn is_combining_mark(&self, code: u32) -> bool
    {
        matches!(
            maps::general_category().get32(code),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
        )
    }

    #[inline]
    fn derived_property(&self, code: u32) -> DerivedProperty
    {
        derived_property(code)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn decompositions()
    {
        let properties = IcuProperties::new();

        assert_eq!(properties.decomposition(0x61), None);
        // Å -> A + кольцо, канонически
        assert_eq!(
            properties.decomposition(0xC5),
            Some(Decomposition::canonical(vec![0x41, 0x30A]))
        );
        // ﬁ -> f i, совместимость
        assert_eq!(
            properties.decomposition(0xFB01),
            Some(Decomposition::compatibility(vec![0x66, 0x69]))
        );
        assert!(properties.is_compatibility_decomposition(0xFB01));
        assert!(!properties.is_compatibility_decomposition(0xC5));
        // ẛ̇: каноническая декомпозиция, хотя полное раскрытие затрагивает совместимость (ſ -> s)
        assert_eq!(
            properties.decomposition(0x1E9B),
            Some(Decomposition::canonical(vec![0x17F, 0x307]))
        );
        assert!(!properties.is_compatibility_decomposition(0x1E9B));
        assert!(properties.is_compatibility_decomposition(0x17F));
        // синглтон: знак ангстрема
        assert_eq!(
            properties.decomposition(0x212B),
            Some(Decomposition::canonical(vec![0xC5]))
        );
    }

    #[test]
    fn character_classes()
    {
        let properties = IcuProperties::new();

        assert_eq!(properties.bidi_class(0x05D0), BidiClass::RightToLeft);
        assert_eq!(properties.bidi_class(0x0627), BidiClass::ArabicLetter);
        assert_eq!(properties.bidi_class(0x0660), BidiClass::ArabicNumber);
        assert_eq!(properties.bidi_class(0x31), BidiClass::EuropeanNumber);
        assert_eq!(properties.bidi_class(0x0301), BidiClass::NonspacingMark);
        assert_eq!(properties.script(0x03B1), Script::Greek);
        assert_eq!(properties.script(0x30A2), Script::Katakana);
        assert!(properties.canonical_class(0x094D).is_virama());
        assert_eq!(properties.joining_type(0x0628), JoiningType::DualJoining);
        assert_eq!(properties.joining_type(0x0627), JoiningType::RightJoining);
        assert!(properties.is_combining_mark(0x0301));
        assert!(properties.is_context_j(0x200C));
        assert!(properties.is_context_o(0x30FB));
        assert!(properties.is_disallowed_or_unassigned(0x41));
    }

    #[test]
    fn compositions()
    {
        let properties = IcuProperties::new();

        assert_eq!(properties.compose(0x41, 0x30A), Some(0xC5));
        assert_eq!(properties.compose(0x61, 0x62), None);
        assert!(properties.is_composition_excluded(0x0958));
    }
}
