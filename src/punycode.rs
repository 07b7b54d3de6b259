use crate::error::PunycodeError;

// параметры bootstring для punycode (RFC 3492, раздел 5)
const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: u8 = b'-';

/// адаптация смещения после каждой дельты
#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32
{
    delta /= match first_time {
        true => DAMP,
        false => 2,
    };
    delta += delta / num_points;

    let mut k = 0;

    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }

    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

/// порог для позиции k при текущем смещении
#[inline(always)]
fn threshold(k: u32, bias: u32) -> u32
{
    match k <= bias {
        true => T_MIN,
        false => (k - bias).min(T_MAX),
    }
}

/// декодирование punycode (без префикса ACE) в кодпоинты
/// цифры принимаются в обоих регистрах
pub fn decode(input: &[u8]) -> Result<Vec<u32>, PunycodeError>
{
    // базовые кодпоинты записаны как есть до последнего разделителя
    let (mut output, input): (Vec<u32>, &[u8]) =
        match input.iter().rposition(|&byte| byte == DELIMITER) {
            None => (vec![], input),
            Some(position) => {
                let basic = &input[.. position];

                if let Some(&byte) = basic.iter().find(|byte| !byte.is_ascii()) {
                    return Err(PunycodeError::InvalidDigit(byte));
                }

                (
                    basic.iter().map(|&byte| byte as u32).collect(),
                    &input[position + 1 ..],
                )
            }
        };

    let mut code_point = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i: u32 = 0;
    let mut iter = input.iter();

    while let Some(&first) = iter.next() {
        let previous_i = i;
        let mut weight = 1;
        let mut k = BASE;
        let mut byte = first;

        // целое переменной длины - приращение i
        loop {
            let digit = match byte {
                b'0' ..= b'9' => byte - b'0' + 26,
                b'A' ..= b'Z' => byte - b'A',
                b'a' ..= b'z' => byte - b'a',
                _ => return Err(PunycodeError::InvalidDigit(byte)),
            } as u32;

            if digit > (u32::MAX - i) / weight {
                return Err(PunycodeError::Overflow);
            }

            i += digit * weight;

            let t = threshold(k, bias);

            if digit < t {
                break;
            }

            if weight > u32::MAX / (BASE - t) {
                return Err(PunycodeError::Overflow);
            }

            weight *= BASE - t;
            k += BASE;

            byte = match iter.next() {
                Some(&byte) => byte,
                None => return Err(PunycodeError::UnexpectedEnd),
            };
        }

        let length = output.len() as u32;
        bias = adapt(i - previous_i, length + 1, previous_i == 0);

        if i / (length + 1) > u32::MAX - code_point {
            return Err(PunycodeError::Overflow);
        }

        code_point += i / (length + 1);
        i %= length + 1;

        if char::from_u32(code_point).is_none() {
            return Err(PunycodeError::InvalidCodePoint(code_point));
        }

        output.insert(i as usize, code_point);
        i += 1;
    }

    Ok(output)
}

/// кодирование кодпоинтов в punycode (без префикса ACE), цифры - в нижнем регистре
pub fn encode(input: &[u32]) -> Result<String, PunycodeError>
{
    if let Some(&code) = input.iter().find(|&&code| char::from_u32(code).is_none()) {
        return Err(PunycodeError::InvalidCodePoint(code));
    }

    // базовые кодпоинты записываются как есть
    let mut output: String = input
        .iter()
        .filter(|&&code| code < INITIAL_N)
        .map(|&code| code as u8 as char)
        .collect();

    let basic_length = output.len() as u32;

    if basic_length > 0 {
        output.push(DELIMITER as char);
    }

    let mut code_point = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_length;
    let input_length = input.len() as u32;

    while processed < input_length {
        // все кодпоинты меньше code_point уже обработаны, ищем следующий
        let min_code_point = match input.iter().copied().filter(|&code| code >= code_point).min() {
            Some(code) => code,
            None => break,
        };

        if min_code_point - code_point > (u32::MAX - delta) / (processed + 1) {
            return Err(PunycodeError::Overflow);
        }

        delta += (min_code_point - code_point) * (processed + 1);
        code_point = min_code_point;

        for &code in input {
            if code < code_point {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }

            if code == code_point {
                // дельта как целое переменной длины
                let mut q = delta;
                let mut k = BASE;

                loop {
                    let t = threshold(k, bias);

                    if q < t {
                        break;
                    }

                    let value = t + ((q - t) % (BASE - t));
                    output.push(value_to_digit(value));

                    q = (q - t) / (BASE - t);
                    k += BASE;
                }

                output.push(value_to_digit(q));

                bias = adapt(delta, processed + 1, processed == basic_length);
                delta = 0;
                processed += 1;
            }
        }

        delta += 1;
        code_point += 1;
    }

    Ok(output)
}

/// 0..=25 -> a..z, 26..=35 -> 0..9
#[inline(always)]
fn value_to_digit(value: u32) -> char
{
    match value {
        0 ..= 25 => (b'a' + value as u8) as char,
        _ => (b'0' + (value - 26) as u8) as char,
    }
}
