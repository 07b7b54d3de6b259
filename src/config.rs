/// настройки преобразований меток и доменов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config
{
    /// правила STD3 для ASCII: только буквы, цифры и дефис, дефис не на краях метки
    pub use_std3_ascii_rules: bool,
    /// протокол регистрации: нормализация, протокол IDNA2008 и правила Bidi.
    /// при false (разрешение имен) выполняется только транскодирование
    pub registration_protocol: bool,
    /// ToUnicode домена возвращает ошибку любой метки, а не только ошибку нормализованной формы
    pub strict_to_unicode: bool,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            use_std3_ascii_rules: cfg!(feature = "std3"),
            registration_protocol: true,
            strict_to_unicode: false,
        }
    }
}

impl Config
{
    pub fn with_std3_ascii_rules(mut self, value: bool) -> Self
    {
        self.use_std3_ascii_rules = value;
        self
    }

    pub fn with_registration_protocol(mut self, value: bool) -> Self
    {
        self.registration_protocol = value;
        self
    }

    pub fn with_strict_to_unicode(mut self, value: bool) -> Self
    {
        self.strict_to_unicode = value;
        self
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn setters()
    {
        let config = Config::default()
            .with_std3_ascii_rules(false)
            .with_strict_to_unicode(true);

        assert!(!config.use_std3_ascii_rules);
        assert!(config.registration_protocol);
        assert!(config.strict_to_unicode);
        assert!(!config.with_registration_protocol(false).registration_protocol);
    }
}
