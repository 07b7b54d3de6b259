#[macro_use]
extern crate lazy_static;

pub use bidi::apply_bidi_rules;
pub use bidi::assert_bidi_compliance;
pub use bidi::is_bidi_domain;
pub use buffer::CodepointBuffer;
pub use buffer::DomainBuffer;
pub use buffer::Label;
pub use buffer::MAX_DOMAIN_SIZE;
pub use buffer::MAX_LABEL_SIZE;
pub use config::Config;
pub use contextual::execute_contextual_rules;
pub use domain::AsciiLabel;
pub use domain::ToUnicode;
pub use domain::ACE_PREFIX;
pub use domain::LABEL_DELIMITERS;
pub use domain::MAX_DNS_LABEL_LENGTH;
pub use error::*;
pub use normalization::is_normalized;
pub use normalization::normalize;
pub use properties::IcuProperties;
pub use properties::UnicodeProperties;
pub use protocol::idna2008_protocol;

pub mod codec;
pub mod contextual;
pub mod domain;
pub mod properties;
pub mod punycode;

mod bidi;
mod buffer;
mod config;
mod error;
mod normalization;
mod protocol;

/// преобразования IDNA2008 для меток и доменов
///
/// входные данные - UTF-8 (&str или байты) и UTF-16, внутри все шаги работают с 32-битными кодпоинтами.
/// ToASCII возвращает ошибку первого неудачного шага, ToUnicode при ошибке возвращает исходный ввод
pub struct Idna<P = IcuProperties>
{
    config: Config,
    properties: P,
}

impl Idna<IcuProperties>
{
    /// свойства Unicode из данных ICU4X
    pub fn new(config: Config) -> Self
    {
        Self::with_properties(config, IcuProperties::new())
    }
}

impl Default for Idna<IcuProperties>
{
    fn default() -> Self
    {
        Self::new(Config::default())
    }
}

impl<P: UnicodeProperties> Idna<P>
{
    pub fn with_properties(config: Config, properties: P) -> Self
    {
        Self { config, properties }
    }

    #[inline]
    pub fn config(&self) -> &Config
    {
        &self.config
    }

    #[inline]
    pub fn properties(&self) -> &P
    {
        &self.properties
    }

    /// ToASCII для метки
    pub fn to_ascii_label(&self, label: &str) -> Result<String, IdnaError>
    {
        self.to_ascii_label_normalized(label).map(|ascii| ascii.output)
    }

    /// ToASCII для метки, вместе с нормализованной формой
    pub fn to_ascii_label_normalized(&self, label: &str) -> Result<AsciiLabel, IdnaError>
    {
        domain::to_ascii_label(&self.properties, &self.config, &codec::str_to_code_points(label))
    }

    /// ToASCII для метки в UTF-16
    pub fn to_ascii_label16(&self, label: &[u16]) -> Result<String, IdnaError>
    {
        let codes = codec::utf16_to_code_points(label)?;

        domain::to_ascii_label(&self.properties, &self.config, &codes).map(|ascii| ascii.output)
    }

    /// ToUnicode для метки в UTF-8
    pub fn to_unicode_label8(&self, label: &[u8]) -> ToUnicode<u8>
    {
        match codec::utf8_to_code_points(label) {
            Ok(codes) => transcode(
                domain::to_unicode_label(&self.properties, &self.config, &codes),
                label,
                utf8_bytes,
                |error| error,
            ),
            Err(error) => ToUnicode::failed(label, error),
        }
    }

    /// ToUnicode для метки в UTF-16
    pub fn to_unicode_label16(&self, label: &[u16]) -> ToUnicode<u16>
    {
        match codec::utf16_to_code_points(label) {
            Ok(codes) => transcode(
                domain::to_unicode_label(&self.properties, &self.config, &codes),
                label,
                codec::code_points_to_utf16,
                |error| error,
            ),
            Err(error) => ToUnicode::failed(label, error),
        }
    }

    /// ToASCII для домена
    pub fn domain_to_ascii(&self, domain: &str) -> Result<String, DomainError>
    {
        domain::domain_to_ascii(&self.properties, &self.config, &codec::str_to_code_points(domain))
    }

    /// ToASCII для домена в UTF-16
    pub fn domain_to_ascii16(&self, domain: &[u16]) -> Result<String, DomainError>
    {
        let codes = codec::utf16_to_code_points(domain).map_err(|error| DomainError::new(0, error))?;

        domain::domain_to_ascii(&self.properties, &self.config, &codes)
    }

    /// ToUnicode для домена в UTF-8
    pub fn domain_to_unicode8(&self, domain: &[u8]) -> ToUnicode<u8, DomainError>
    {
        match codec::utf8_to_code_points(domain) {
            Ok(codes) => transcode(
                domain::domain_to_unicode(&self.properties, &self.config, &codes),
                domain,
                utf8_bytes,
                |error| DomainError::new(0, error),
            ),
            Err(error) => ToUnicode::failed(domain, DomainError::new(0, error)),
        }
    }

    /// ToUnicode для домена в UTF-16
    pub fn domain_to_unicode16(&self, domain: &[u16]) -> ToUnicode<u16, DomainError>
    {
        match codec::utf16_to_code_points(domain) {
            Ok(codes) => transcode(
                domain::domain_to_unicode(&self.properties, &self.config, &codes),
                domain,
                codec::code_points_to_utf16,
                |error| DomainError::new(0, error),
            ),
            Err(error) => ToUnicode::failed(domain, DomainError::new(0, error)),
        }
    }

    /// NFKC
    pub fn normalize(&self, input: &str) -> Result<String, IdnaError>
    {
        let normalized = normalize(&self.properties, &codec::str_to_code_points(input))?;

        codec::code_points_to_string(&normalized)
    }

    /// правила Bidi для метки
    pub fn assert_bidi_compliance(&self, label: &str) -> Result<(), BidiError>
    {
        assert_bidi_compliance(&self.properties, &codec::str_to_code_points(label))
    }

    /// протокол IDNA2008 для метки
    pub fn idna2008_protocol(&self, label: &str) -> Result<(), ProtocolError>
    {
        idna2008_protocol(&self.properties, &codec::str_to_code_points(label))
    }
}

/// перекодировать результат ToUnicode из кодпоинтов. при ошибке возвращается исходный ввод
fn transcode<T, E>(
    result: ToUnicode<u32, E>,
    input: &[T],
    encode: impl Fn(&[u32]) -> Result<Vec<T>, IdnaError>,
    wrap: impl Fn(IdnaError) -> E,
) -> ToUnicode<T, E>
where
    T: Clone,
{
    match encode(&result.output) {
        Ok(output) => ToUnicode {
            output,
            status: result.status,
        },
        Err(error) => ToUnicode::failed(input, wrap(error)),
    }
}

#[inline]
fn utf8_bytes(codes: &[u32]) -> Result<Vec<u8>, IdnaError>
{
    codec::code_points_to_string(codes).map(String::into_bytes)
}

#[cfg(test)]
mod tests
{
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_between_threads()
    {
        assert_send_sync::<Idna>();

        let idna = Arc::new(Idna::default());

        let handles: Vec<_> = (0 .. 4)
            .map(|_| {
                let idna = Arc::clone(&idna);
                thread::spawn(move || idna.domain_to_ascii("b\u{FC}cher.de"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok("xn--bcher-kva.de".to_owned()));
        }
    }
}
