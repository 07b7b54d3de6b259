use log::debug;
use log::trace;

use crate::bidi::apply_bidi_rules;
use crate::buffer::DomainBuffer;
use crate::buffer::Label;
use crate::buffer::MAX_DOMAIN_SIZE;
use crate::buffer::MAX_LABEL_SIZE;
use crate::codec::is_ascii;
use crate::config::Config;
use crate::error::CapacityError;
use crate::error::DomainError;
use crate::error::IdnaError;
use crate::error::ProtocolError;
use crate::normalization::is_normalized;
use crate::normalization::normalize;
use crate::properties::UnicodeProperties;
use crate::protocol::idna2008_protocol;
use crate::protocol::HYPHEN;
use crate::punycode;

/// префикс ACE
pub const ACE_PREFIX: &str = "xn--";

/// разделители меток: FULL STOP, IDEOGRAPHIC FULL STOP, FULLWIDTH FULL STOP, HALFWIDTH IDEOGRAPHIC FULL STOP
pub const LABEL_DELIMITERS: [u32; 4] = [0x2E, 0x3002, 0xFF0E, 0xFF61];

/// максимальная длина метки DNS
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

const FULL_STOP: u32 = 0x2E;

#[inline(always)]
pub fn is_label_delimiter(code: u32) -> bool
{
    LABEL_DELIMITERS.contains(&code)
}

/// части домена между разделителями, включая пустые
pub fn split_labels(domain: &[u32]) -> impl Iterator<Item = &[u32]>
{
    domain.split(|&code| is_label_delimiter(code))
}

/// результат ToASCII для метки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiLabel
{
    /// метка в ASCII (с префиксом ACE, если в метке были не-ASCII кодпоинты)
    pub output: String,
    /// нормализованная метка, из которой получен результат
    pub normalized: Label,
}

/// результат ToUnicode: при ошибке output содержит исходный ввод
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToUnicode<T, E = IdnaError>
{
    pub output: Vec<T>,
    pub status: Result<(), E>,
}

impl<T, E> ToUnicode<T, E>
{
    pub fn failed(input: &[T], error: E) -> Self
    where
        T: Clone,
    {
        Self {
            output: input.to_vec(),
            status: Err(error),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool
    {
        self.status.is_ok()
    }

    pub fn into_result(self) -> Result<Vec<T>, E>
    {
        let output = self.output;
        self.status.map(|_| output)
    }
}

/// ToASCII для метки
///
/// проверки STD3 и префикса ACE, нормализация (только при не-ASCII кодпоинтах), протокол IDNA2008,
/// кодирование punycode. длина результата - от 1 до 63 символов
pub fn to_ascii_label<P>(properties: &P, config: &Config, label: &[u32]) -> Result<AsciiLabel, IdnaError>
where
    P: UnicodeProperties + ?Sized,
{
    if label.is_empty() {
        return Err(IdnaError::EmptyInput);
    }

    if label.len() > MAX_LABEL_SIZE {
        return Err(CapacityError { capacity: MAX_LABEL_SIZE }.into());
    }

    if config.use_std3_ascii_rules {
        assert_std3_rules(label)?;
    }

    if has_ace_prefix(label) {
        return Err(IdnaError::AlreadyEncoded);
    }

    let normalized = match is_ascii(label) || !config.registration_protocol {
        true => Label::from_slice(label)?,
        false => normalize(properties, label)?,
    };

    if config.registration_protocol {
        idna2008_protocol(properties, &normalized)?;
    }

    let output: String = match is_ascii(&normalized) {
        true => normalized.iter().map(|&code| code as u8 as char).collect(),
        false => format!("{}{}", ACE_PREFIX, punycode::encode(&normalized)?),
    };

    if output.is_empty() || output.len() > MAX_DNS_LABEL_LENGTH {
        return Err(IdnaError::InvalidDnsLength(output.len()));
    }

    trace!("ToASCII: {} code points -> {:?}", label.len(), output);

    Ok(AsciiLabel { output, normalized })
}

/// ToUnicode для метки. ошибка любого шага возвращает исходную метку
pub fn to_unicode_label<P>(properties: &P, config: &Config, label: &[u32]) -> ToUnicode<u32>
where
    P: UnicodeProperties + ?Sized,
{
    match decode_label(properties, config, label) {
        Ok(decoded) => {
            trace!("ToUnicode: {} code points -> {} code points", label.len(), decoded.len());

            ToUnicode {
                output: decoded.to_vec(),
                status: Ok(()),
            }
        }
        Err(error) => ToUnicode::failed(label, error),
    }
}

/// шаги ToUnicode
///
///  - ASCII-метка с префиксом ACE декодируется, результат проверяется обратным ToASCII (RFC 3490, шаг 5)
///  - прочие метки берутся как есть
///  - для протокола регистрации: протокол IDNA2008 и проверка нормализованной формы
fn decode_label<P>(properties: &P, config: &Config, label: &[u32]) -> Result<Label, IdnaError>
where
    P: UnicodeProperties + ?Sized,
{
    if label.is_empty() {
        return Err(IdnaError::EmptyInput);
    }

    if label.len() > MAX_LABEL_SIZE {
        return Err(CapacityError { capacity: MAX_LABEL_SIZE }.into());
    }

    let decoded = match is_ascii(label) && has_ace_prefix(label) {
        true => {
            let encoded: Vec<u8> = label[ACE_PREFIX.len() ..]
                .iter()
                .map(|&code| code as u8)
                .collect();

            let decoded = Label::from_slice(&punycode::decode(&encoded)?)?;
            let ascii = to_ascii_label(properties, config, &decoded)?;

            if !eq_ignore_ascii_case(&ascii.output, label) {
                return Err(IdnaError::RoundTripMismatch);
            }

            decoded
        }
        false => Label::from_slice(label)?,
    };

    if config.registration_protocol {
        idna2008_protocol(properties, &decoded)?;

        if !is_normalized(properties, &decoded)? {
            return Err(ProtocolError::NotNormalized.into());
        }
    }

    Ok(decoded)
}

/// ToASCII для домена
///
/// пустые метки пропускаются, каждый разделитель в результате - '.'. после преобразования всех меток
/// правила Bidi применяются один раз ко всему нормализованному домену
pub fn domain_to_ascii<P>(properties: &P, config: &Config, domain: &[u32]) -> Result<String, DomainError>
where
    P: UnicodeProperties + ?Sized,
{
    assert_domain_size(domain)?;

    let mut output = String::with_capacity(domain.len());
    let mut normalized = DomainBuffer::new();
    let mut offset = 0;

    for (index, label) in split_labels(domain).enumerate() {
        if !label.is_empty() {
            let ascii = to_ascii_label(properties, config, label).map_err(|error| {
                debug!("ToASCII rejected label {}: {}", index, error);
                DomainError::new(index, error)
            })?;

            output.push_str(&ascii.output);
            normalized
                .extend_from_slice(&ascii.normalized)
                .map_err(|error| DomainError::new(index, error))?;
        }

        offset += label.len();

        if offset < domain.len() {
            output.push('.');
            normalized
                .push(FULL_STOP)
                .map_err(|error| DomainError::new(index, error))?;

            offset += 1;
        }
    }

    if config.registration_protocol {
        apply_bidi_rules(properties, &normalized).map_err(|error| {
            debug!("ToASCII rejected domain: {}", error);
            error
        })?;
    }

    Ok(output)
}

/// ToUnicode для домена
///
/// метка, которую не удалось преобразовать, остается как есть. в статус попадает только ошибка
/// нормализованной формы (или любая ошибка метки при strict_to_unicode), затем - результат правил Bidi.
/// разделители сохраняются как есть
pub fn domain_to_unicode<P>(properties: &P, config: &Config, domain: &[u32]) -> ToUnicode<u32, DomainError>
where
    P: UnicodeProperties + ?Sized,
{
    if let Err(error) = assert_domain_size(domain) {
        return ToUnicode::failed(domain, error);
    }

    let mut output = Vec::with_capacity(domain.len());
    let mut status = Ok(());
    let mut offset = 0;

    for (index, label) in split_labels(domain).enumerate() {
        if !label.is_empty() {
            match decode_label(properties, config, label) {
                Ok(decoded) => output.extend_from_slice(&decoded),
                Err(error) => {
                    debug!("ToUnicode kept label {} as is: {}", index, error);

                    let surfaced = config.strict_to_unicode
                        || error == IdnaError::Protocol(ProtocolError::NotNormalized);

                    if surfaced && status.is_ok() {
                        status = Err(DomainError::new(index, error));
                    }

                    output.extend_from_slice(label);
                }
            }
        }

        offset += label.len();

        if let Some(&delimiter) = domain.get(offset) {
            output.push(delimiter);
            offset += 1;
        }
    }

    if status.is_ok() && config.registration_protocol {
        status = apply_bidi_rules(properties, &output);
    }

    ToUnicode { output, status }
}

/// правила STD3: только буквы, цифры и дефис, дефис не в начале и не в конце
fn assert_std3_rules(label: &[u32]) -> Result<(), IdnaError>
{
    if let Some(&code) = label.iter().find(|&&code| is_non_ldh(code)) {
        return Err(IdnaError::Std3NonLdh(code));
    }

    match label.first() == Some(&HYPHEN) || label.last() == Some(&HYPHEN) {
        true => Err(IdnaError::Std3Hyphen),
        false => Ok(()),
    }
}

/// ASCII-кодпоинт, не являющийся буквой, цифрой или дефисом
#[inline(always)]
fn is_non_ldh(code: u32) -> bool
{
    matches!(code, 0 ..= 0x2C | 0x2E ..= 0x2F | 0x3A ..= 0x40 | 0x5B ..= 0x60 | 0x7B ..= 0x7F)
}

/// метка начинается с "xn--" в любом регистре
fn has_ace_prefix(label: &[u32]) -> bool
{
    label.len() >= ACE_PREFIX.len()
        && ACE_PREFIX
            .bytes()
            .zip(label)
            .all(|(prefix, &code)| code < 0x80 && (code as u8).to_ascii_lowercase() == prefix)
}

/// сравнение ASCII-строки и ASCII-метки без учета регистра
fn eq_ignore_ascii_case(output: &str, label: &[u32]) -> bool
{
    output.len() == label.len()
        && output
            .bytes()
            .zip(label)
            .all(|(byte, &code)| code < 0x80 && (code as u8).eq_ignore_ascii_case(&byte))
}

fn assert_domain_size(domain: &[u32]) -> Result<(), DomainError>
{
    if domain.is_empty() {
        return Err(DomainError::new(0, IdnaError::EmptyInput));
    }

    match domain.len() > MAX_DOMAIN_SIZE {
        true => Err(DomainError::new(0, CapacityError { capacity: MAX_DOMAIN_SIZE })),
        false => Ok(()),
    }
}
