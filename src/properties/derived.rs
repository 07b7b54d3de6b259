use std::collections::HashMap;

use icu_properties::maps;
use icu_properties::sets;
use icu_properties::GeneralCategory;

/// производное свойство IDNA2008 (RFC 5892, раздел 2)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DerivedProperty
{
    /// разрешен протоколом
    Pvalid,
    /// разрешен в контексте, правило соединения (ZWNJ, ZWJ)
    ContextJ,
    /// разрешен в контексте, прочие правила
    ContextO,
    /// запрещен
    Disallowed,
    /// не назначен в текущей версии Unicode
    Unassigned,
}

lazy_static! {
    /// исключения (категория F), имеют приоритет над остальными правилами
    static ref EXCEPTIONS: HashMap<u32, DerivedProperty> = exceptions();
}

/// исключения RFC 5892, раздел 2.6
fn exceptions() -> HashMap<u32, DerivedProperty>
{
    let mut map = HashMap::new();

    // PVALID: ß, конечная сигма, арабские знаки, тибетский тсег, иероглифический ноль
    for code in [0x00DF, 0x03C2, 0x06FD, 0x06FE, 0x0F0B, 0x3007] {
        map.insert(code, DerivedProperty::Pvalid);
    }

    // CONTEXTO: средняя точка, греческий знак числа, гереш и гершаим, катакана-точка, арабские цифры
    for code in [0x00B7, 0x0375, 0x05F3, 0x05F4, 0x30FB]
        .into_iter()
        .chain(0x0660 ..= 0x0669)
        .chain(0x06F0 ..= 0x06F9)
    {
        map.insert(code, DerivedProperty::ContextO);
    }

    // DISALLOWED: татвиль, нко, тональные знаки хангыль, знаки повтора кана
    for code in [0x0640, 0x07FA, 0x302E, 0x302F, 0x303B]
        .into_iter()
        .chain(0x3031 ..= 0x3035)
    {
        map.insert(code, DerivedProperty::Disallowed);
    }

    map
}

/// вычислить производное свойство кодпоинта
/// порядок проверок важен: первое сработавшее правило определяет результат
pub fn derived_property(code: u32) -> DerivedProperty
{
    if let Some(property) = EXCEPTIONS.get(&code) {
        return *property;
    }

    // BackwardCompatible (G) на данный момент пуст

    if is_unassigned(code) {
        return DerivedProperty::Unassigned;
    }

    if is_ldh(code) {
        return DerivedProperty::Pvalid;
    }

    if sets::join_control().contains32(code) {
        return DerivedProperty::ContextJ;
    }

    if is_unstable(code) || is_ignorable_property(code) || is_ignorable_block(code) {
        return DerivedProperty::Disallowed;
    }

    if is_old_hangul_jamo(code) {
        return DerivedProperty::Disallowed;
    }

    match is_letter_digit(code) {
        true => DerivedProperty::Pvalid,
        false => DerivedProperty::Disallowed,
    }
}

/// J: General_Category = Cn и не является нехарактерным кодпоинтом
#[inline]
fn is_unassigned(code: u32) -> bool
{
    maps::general_category().get32(code) == GeneralCategory::Unassigned
        && !sets::noncharacter_code_point().contains32(code)
}

/// H: буквы, цифры, дефис в нижнем регистре
#[inline]
fn is_ldh(code: u32) -> bool
{
    matches!(code, 0x2D | 0x30 ..= 0x39 | 0x61 ..= 0x7A)
}

/// B: меняется при NFKC_Casefold
#[inline]
fn is_unstable(code: u32) -> bool
{
    sets::changes_when_nfkc_casefolded().contains32(code)
}

/// C: игнорируемые свойства
#[inline]
fn is_ignorable_property(code: u32) -> bool
{
    sets::default_ignorable_code_point().contains32(code)
        || sets::white_space().contains32(code)
        || sets::noncharacter_code_point().contains32(code)
}

/// D: игнорируемые блоки
#[inline]
fn is_ignorable_block(code: u32) -> bool
{
    matches!(code, 0x20D0 ..= 0x20FF | 0x1D100 ..= 0x1D1FF | 0x1D200 ..= 0x1D24F)
}

/// E: старые чамо хангыль (L, V, T)
#[inline]
fn is_old_hangul_jamo(code: u32) -> bool
{
    matches!(
        code,
        0x1100 ..= 0x115F
            | 0xA960 ..= 0xA97C
            | 0x1160 ..= 0x11A7
            | 0xD7B0 ..= 0xD7C6
            | 0x11A8 ..= 0x11FF
            | 0xD7CB ..= 0xD7FB
    )
}

/// A: Ll, Lu, Lo, Nd, Lm, Mn, Mc
#[inline]
fn is_letter_digit(code: u32) -> bool
{
    matches!(
        maps::general_category().get32(code),
        GeneralCategory::LowercaseLetter
            | GeneralCategory::UppercaseLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::ModifierLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
    )
}
