/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// кодпоинт, предшествующий блоку завершающих согласных (T = 0 - нет завершающей согласной)
pub const HANGUL_T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных, включая их отсутствие
const HANGUL_T_COUNT: u32 = 28;
/// количество вариантов слогов на одну ведущую согласную: V * T
const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
/// количество слогов хангыль в Unicode
const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

/// является ли кодпоинт слогом хангыль
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// алгоритмическая декомпозиция слога хангыль: LV или LVT
/// результат - количество записанных кодпоинтов
#[inline(always)]
pub fn decompose_hangul_syllable(code: u32, output: &mut [u32; 3]) -> usize
{
    let s = code - HANGUL_S_BASE;

    let l = s / HANGUL_N_COUNT;
    let v = (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = s % HANGUL_T_COUNT;

    output[0] = HANGUL_L_BASE + l;
    output[1] = HANGUL_V_BASE + v;

    match t {
        0 => 2,
        _ => {
            output[2] = HANGUL_T_BASE + t;
            3
        }
    }
}

/// алгоритмическая композиция: L + V -> LV, LV + T -> LVT
#[inline(always)]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    // L + V
    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(HANGUL_S_BASE + (l * HANGUL_V_COUNT + v) * HANGUL_T_COUNT),
            false => None,
        };
    }

    // LV + T
    let s = first.wrapping_sub(HANGUL_S_BASE);

    if s < HANGUL_S_COUNT && s % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        if t > 0 && t < HANGUL_T_COUNT {
            return Some(first + t);
        }
    }

    None
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn syllable_arithmetic()
    {
        let mut buffer = [0; 3];

        // 가 = ᄀ + ᅡ
        assert_eq!(decompose_hangul_syllable(0xAC00, &mut buffer), 2);
        assert_eq!(&buffer[.. 2], &[0x1100, 0x1161]);

        // 각 = ᄀ + ᅡ + ᆨ
        assert_eq!(decompose_hangul_syllable(0xAC01, &mut buffer), 3);
        assert_eq!(buffer, [0x1100, 0x1161, 0x11A8]);

        assert_eq!(compose_hangul(0x1100, 0x1161), Some(0xAC00));
        assert_eq!(compose_hangul(0xAC00, 0x11A8), Some(0xAC01));
        // LVT не комбинируется с T
        assert_eq!(compose_hangul(0xAC01, 0x11A8), None);
        // T_BASE сам по себе не является завершающей согласной
        assert_eq!(compose_hangul(0xAC00, HANGUL_T_BASE), None);

        assert!(is_hangul_syllable(0xD7A3));
        assert!(!is_hangul_syllable(0xD7A4));
    }
}
