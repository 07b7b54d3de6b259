use hangul::*;

use crate::buffer::CodepointBuffer;
use crate::buffer::Label;
use crate::error::NormalizationError;
use crate::properties::UnicodeProperties;

mod hangul;

/// емкость стека раскрываемых декомпозиций одного кодпоинта
/// самая длинная декомпозиция совместимости (U+FDFA) - 18 кодпоинтов
const DECOMPOSITION_STACK_SIZE: usize = 32;

/// класс комбинирования "стартера нет" - больше любого настоящего CCC
const NO_STARTER: u16 = 256;

/// нормализация NFKC последовательности кодпоинтов
///
///  - декомпозиция совместимости (хангыль - алгоритмически)
///  - канонический порядок нестартеров
///  - каноническая композиция
///
/// результат не может превысить емкость метки - переполнение возвращается как ошибка
pub fn normalize<P>(properties: &P, input: &[u32]) -> Result<Label, NormalizationError>
where
    P: UnicodeProperties + ?Sized,
{
    if input.is_empty() {
        return Err(NormalizationError::EmptyInput);
    }

    if let Some(position) = input.iter().position(|&code| code == 0) {
        return Err(NormalizationError::NullCharacter(position));
    }

    let mut result = Label::new();

    for &code in input {
        decompose(properties, code, &mut result)?;
    }

    compose(properties, &mut result);

    Ok(result)
}

/// находится ли последовательность в форме NFKC
pub fn is_normalized<P>(properties: &P, input: &[u32]) -> Result<bool, NormalizationError>
where
    P: UnicodeProperties + ?Sized,
{
    Ok(normalize(properties, input)?.as_slice() == input)
}

/// полная декомпозиция кодпоинта с записью результата в канонический порядок
///
/// вместо рекурсии - стек: декомпозиция кладется на стек в обратном порядке, первый кодпоинт
/// снимается первым. глубина ограничена емкостью стека
fn decompose<P>(properties: &P, code: u32, result: &mut Label) -> Result<(), NormalizationError>
where
    P: UnicodeProperties + ?Sized,
{
    let mut stack = CodepointBuffer::<DECOMPOSITION_STACK_SIZE>::new();
    stack.push(code)?;

    while let Some(code) = stack.pop() {
        if is_hangul_syllable(code) {
            let mut jamo = [0; 3];
            let len = decompose_hangul_syllable(code, &mut jamo);

            for &code in &jamo[.. len] {
                insert_ordered(properties, code, result)?;
            }

            continue;
        }

        match properties.decomposition(code) {
            Some(decomposition) => {
                for &code in decomposition.codes.iter().rev() {
                    stack.push(code)?;
                }
            }
            None => insert_ordered(properties, code, result)?,
        }
    }

    Ok(())
}

/// записать кодпоинт, сохраняя канонический порядок:
/// нестартер сдвигается влево, пока предыдущий кодпоинт имеет строго больший класс комбинирования
#[inline(always)]
fn insert_ordered<P>(properties: &P, code: u32, result: &mut Label) -> Result<(), NormalizationError>
where
    P: UnicodeProperties + ?Sized,
{
    let class = properties.canonical_class(code);

    if class.is_starter() {
        return Ok(result.push(code)?);
    }

    let mut position = result.len();

    while position > 0 && properties.canonical_class(result[position - 1]) > class {
        position -= 1;
    }

    Ok(result.insert(position, code)?)
}

/// каноническая композиция на месте
///
/// кодпоинт комбинируется с последним стартером, если между ними нет блокирующего кодпоинта:
/// класс предыдущего записанного кодпоинта меньше класса текущего, либо предыдущий - сам стартер
fn compose<P>(properties: &P, buffer: &mut Label)
where
    P: UnicodeProperties + ?Sized,
{
    if buffer.is_empty() {
        return;
    }

    let mut starter_position = 0;
    let mut starter = buffer[0];

    let mut last_class = u16::from(properties.canonical_class(starter));

    if last_class != 0 {
        last_class = NO_STARTER;
    }

    let mut len = 1;

    for index in 1 .. buffer.len() {
        let code = buffer[index];
        let class = u16::from(properties.canonical_class(code));

        if last_class < class || last_class == 0 {
            if let Some(composite) = compose_pair(properties, starter, code) {
                buffer[starter_position] = composite;
                starter = composite;
                continue;
            }
        }

        if class == 0 {
            starter_position = len;
            starter = code;
        }

        last_class = class;
        buffer[len] = code;
        len += 1;
    }

    buffer.truncate(len);
}

/// скомбинировать пару кодпоинтов: сначала хангыль, затем таблица канонических композиций
#[inline(always)]
fn compose_pair<P>(properties: &P, first: u32, second: u32) -> Option<u32>
where
    P: UnicodeProperties + ?Sized,
{
    if let Some(syllable) = compose_hangul(first, second) {
        return Some(syllable);
    }

    properties
        .compose(first, second)
        .filter(|&composite| !properties.is_composition_excluded(composite))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::CapacityError;
    use crate::properties::BidiClass;
    use crate::properties::CanonicalCombiningClass;
    use crate::properties::Decomposition;
    use crate::properties::DerivedProperty;
    use crate::properties::IcuProperties;
    use crate::properties::JoiningType;
    use crate::properties::Script;

    fn codes(source: &str) -> Vec<u32>
    {
        source.chars().map(u32::from).collect()
    }

    fn nfkc(properties: &IcuProperties, source: &str) -> String
    {
        normalize(properties, &codes(source))
            .unwrap()
            .iter()
            .filter_map(|&code| char::from_u32(code))
            .collect()
    }

    #[test]
    fn compatibility_and_composition()
    {
        let properties = IcuProperties::new();

        // ﬁ -> fi
        assert_eq!(nfkc(&properties, "\u{FB01}"), "fi");
        // A + кольцо -> Å
        assert_eq!(nfkc(&properties, "A\u{30A}"), "\u{C5}");
        // знак ангстрема -> Å
        assert_eq!(nfkc(&properties, "\u{212B}"), "\u{C5}");
        // полноширинные латинские буквы
        assert_eq!(nfkc(&properties, "\u{FF41}\u{FF42}"), "ab");
        // исключение композиции остается разложенным
        assert_eq!(nfkc(&properties, "\u{0958}"), "\u{0915}\u{093C}");
    }

    #[test]
    fn canonical_ordering()
    {
        let properties = IcuProperties::new();

        // точка снизу (220) встает перед точкой сверху (230), затем ṩ
        assert_eq!(nfkc(&properties, "s\u{307}\u{323}"), "\u{1E69}");
        // два знака с одинаковым классом сохраняют порядок
        assert_eq!(nfkc(&properties, "a\u{301}\u{300}"), "\u{E1}\u{300}");
    }

    #[test]
    fn hangul()
    {
        let properties = IcuProperties::new();

        assert_eq!(nfkc(&properties, "\u{1100}\u{1161}\u{11A8}"), "\u{AC01}");
        assert_eq!(nfkc(&properties, "\u{AC00}\u{11A8}"), "\u{AC01}");
        // совместимое чамо -> ведущая согласная
        assert_eq!(nfkc(&properties, "\u{3131}"), "\u{1100}");
    }

    #[test]
    fn hangul_round_trip()
    {
        let properties = IcuProperties::new();

        for syllable in 0xAC00 ..= 0xD7A3 {
            let mut jamo = [0; 3];
            let len = decompose_hangul_syllable(syllable, &mut jamo);

            let mut buffer = Label::from_slice(&jamo[.. len]).unwrap();
            compose(&properties, &mut buffer);

            assert_eq!(buffer.as_slice(), &[syllable], "U+{:04X}", syllable);
            assert_eq!(normalize(&properties, &[syllable]).unwrap().as_slice(), &[syllable]);
        }
    }

    #[test]
    fn errors()
    {
        let properties = IcuProperties::new();

        assert_eq!(normalize(&properties, &[]), Err(NormalizationError::EmptyInput));
        assert_eq!(
            normalize(&properties, &[0x61, 0, 0x62]),
            Err(NormalizationError::NullCharacter(1))
        );

        // U+FDFA раскладывается в 18 кодпоинтов: 15 штук не помещаются в метку
        let input = [0xFDFA; 15];
        assert!(matches!(
            normalize(&properties, &input),
            Err(NormalizationError::BufferOverflow(_))
        ));
    }

    /// свойства ICU, но у U+E000 искусственно длинная декомпозиция совместимости
    struct LongDecomposition(IcuProperties);

    impl UnicodeProperties for LongDecomposition
    {
        fn bidi_class(&self, code: u32) -> BidiClass
        {
            self.0.bidi_class(code)
        }

        fn script(&self, code: u32) -> Script
        {
            self.0.script(code)
        }

        fn canonical_class(&self, code: u32) -> CanonicalCombiningClass
        {
            self.0.canonical_class(code)
        }

        fn joining_type(&self, code: u32) -> JoiningType
        {
            self.0.joining_type(code)
        }

        fn decomposition(&self, code: u32) -> Option<Decomposition>
        {
            match code {
                0xE000 => Some(Decomposition::compatibility(vec![0x61; DECOMPOSITION_STACK_SIZE + 1])),
                _ => self.0.decomposition(code),
            }
        }

        fn compose(&self, first: u32, second: u32) -> Option<u32>
        {
            self.0.compose(first, second)
        }

        fn is_composition_excluded(&self, code: u32) -> bool
        {
            self.0.is_composition_excluded(code)
        }

        fn is_combining_mark(&self, code: u32) -> bool
        {
            self.0.is_combining_mark(code)
        }

        fn derived_property(&self, code: u32) -> DerivedProperty
        {
            self.0.derived_property(code)
        }
    }

    #[test]
    fn decomposition_stack_overflow()
    {
        let properties = LongDecomposition(IcuProperties::new());

        // раскрытие не помещается в стек декомпозиции, хотя метке места хватило бы
        assert_eq!(
            normalize(&properties, &[0x62, 0xE000]),
            Err(NormalizationError::BufferOverflow(CapacityError {
                capacity: DECOMPOSITION_STACK_SIZE
            }))
        );
        assert_eq!(normalize(&properties, &[0x62]).unwrap().as_slice(), &[0x62]);
    }

    #[test]
    fn normalized_form()
    {
        let properties = IcuProperties::new();

        assert_eq!(is_normalized(&properties, &codes("\u{C5}")), Ok(true));
        assert_eq!(is_normalized(&properties, &codes("A\u{30A}")), Ok(false));
        assert_eq!(is_normalized(&properties, &codes("\u{FB01}")), Ok(false));
    }
}
