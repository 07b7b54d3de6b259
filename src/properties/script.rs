use icu_properties::Script as IcuScript;

/// письменность кодпоинта - только те, что участвуют в контекстных правилах
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Script
{
    Greek,
    Hebrew,
    Hiragana,
    Katakana,
    Han,
    Other,
}

impl Script
{
    /// японская письменность - условие правила KATAKANA MIDDLE DOT
    #[inline]
    pub fn is_japanese(&self) -> bool
    {
        matches!(self, Self::Hiragana | Self::Katakana | Self::Han)
    }
}

impl From<IcuScript> for Script
{
    fn from(value: IcuScript) -> Self
    {
        match value {
            IcuScript::Greek => Self::Greek,
            IcuScript::Hebrew => Self::Hebrew,
            IcuScript::Hiragana => Self::Hiragana,
            IcuScript::Katakana => Self::Katakana,
            IcuScript::Han => Self::Han,
            _ => Self::Other,
        }
    }
}
