use crate::contextual::execute_contextual_rules;
use crate::contextual::has_contextual_code_points;
use crate::error::ProtocolError;
use crate::properties::UnicodeProperties;

/// дефис-минус
pub const HYPHEN: u32 = 0x2D;

/// протокол IDNA2008 для нормализованной метки (RFC 5891, раздел 5.4)
///
///  1. нет запрещенных и неназначенных кодпоинтов
///  2. нет дефиса в начале или в конце, нет дефисов одновременно в 3 и 4 позициях
///  3. метка не начинается с комбинируемого знака
///  4. кодпоинты CONTEXTO / CONTEXTJ проходят контекстные правила
///
/// правила Bidi применяются отдельно, ко всему домену
pub fn idna2008_protocol<P>(properties: &P, label: &[u32]) -> Result<(), ProtocolError>
where
    P: UnicodeProperties + ?Sized,
{
    let first = *label.first().ok_or(ProtocolError::EmptyLabel)?;

    if let Some(position) = label
        .iter()
        .position(|&code| properties.is_disallowed_or_unassigned(code))
    {
        return Err(ProtocolError::DisallowedOrUnassigned {
            position,
            code: label[position],
        });
    }

    if has_restricted_hyphens(label) {
        return Err(ProtocolError::RestrictedHyphens);
    }

    if properties.is_combining_mark(first) {
        return Err(ProtocolError::LeadingCombiningMark(first));
    }

    if has_contextual_code_points(properties, label) {
        execute_contextual_rules(properties, label)?;
    }

    Ok(())
}

/// дефис в начале или в конце метки, либо дефисы в 3 и 4 позициях (индексы 2 и 3)
#[inline]
pub fn has_restricted_hyphens(label: &[u32]) -> bool
{
    label.first() == Some(&HYPHEN)
        || label.last() == Some(&HYPHEN)
        || (label.len() > 3 && label[2] == HYPHEN && label[3] == HYPHEN)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ContextError;
    use crate::properties::IcuProperties;

    fn codes(source: &str) -> Vec<u32>
    {
        source.chars().map(u32::from).collect()
    }

    fn check(source: &str) -> Result<(), ProtocolError>
    {
        idna2008_protocol(&IcuProperties::new(), &codes(source))
    }

    #[test]
    fn valid_labels()
    {
        assert_eq!(check("example"), Ok(()));
        assert_eq!(check("b\u{FC}cher"), Ok(()));
        assert_eq!(check("\u{43F}\u{440}\u{438}\u{43C}\u{435}\u{440}"), Ok(()));
        assert_eq!(check("a-b"), Ok(()));
        assert_eq!(check("l\u{B7}l"), Ok(()));
    }

    #[test]
    fn checks_run_in_order()
    {
        // прописная буква запрещена
        assert_eq!(
            check("aBc"),
            Err(ProtocolError::DisallowedOrUnassigned {
                position: 1,
                code: 0x42
            })
        );
        // запрещенный кодпоинт важнее дефиса в начале
        assert!(matches!(
            check("-A"),
            Err(ProtocolError::DisallowedOrUnassigned { .. })
        ));
        assert_eq!(check("-ab"), Err(ProtocolError::RestrictedHyphens));
        assert_eq!(check("ab-"), Err(ProtocolError::RestrictedHyphens));
        assert_eq!(check("ab--cd"), Err(ProtocolError::RestrictedHyphens));
        assert_eq!(check("a--b"), Ok(()));
        assert_eq!(check("\u{301}a"), Err(ProtocolError::LeadingCombiningMark(0x301)));
        assert_eq!(
            check("a\u{B7}b"),
            Err(ProtocolError::Context(ContextError::MiddleDot))
        );
        assert_eq!(check(""), Err(ProtocolError::EmptyLabel));
    }
}
