use crate::error::IdnaError;

/// UTF-8 -> кодпоинты
pub fn utf8_to_code_points(input: &[u8]) -> Result<Vec<u32>, IdnaError>
{
    let source = core::str::from_utf8(input).map_err(|_| IdnaError::InvalidUtf8)?;

    Ok(str_to_code_points(source))
}

#[inline]
pub fn str_to_code_points(source: &str) -> Vec<u32>
{
    source.chars().map(u32::from).collect()
}

/// UTF-16 -> кодпоинты, непарные суррогаты - ошибка
pub fn utf16_to_code_points(input: &[u16]) -> Result<Vec<u32>, IdnaError>
{
    char::decode_utf16(input.iter().copied())
        .map(|result| result.map(u32::from).map_err(|_| IdnaError::InvalidUtf16))
        .collect()
}

/// кодпоинты -> строка. суррогаты и значения за пределами Unicode в UTF-8 не кодируются
pub fn code_points_to_string(codes: &[u32]) -> Result<String, IdnaError>
{
    codes
        .iter()
        .map(|&code| char::from_u32(code).ok_or(IdnaError::InvalidUtf8))
        .collect()
}

/// кодпоинты -> UTF-16
pub fn code_points_to_utf16(codes: &[u32]) -> Result<Vec<u16>, IdnaError>
{
    let mut output = Vec::with_capacity(codes.len());
    let mut units = [0; 2];

    for &code in codes {
        let symbol = char::from_u32(code).ok_or(IdnaError::InvalidUtf16)?;
        output.extend_from_slice(symbol.encode_utf16(&mut units));
    }

    Ok(output)
}

/// все кодпоинты - ASCII
#[inline]
pub fn is_ascii(codes: &[u32]) -> bool
{
    codes.iter().all(|&code| code < 0x80)
}
