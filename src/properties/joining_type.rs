use icu_properties::JoiningType as IcuJoiningType;

/// производный тип соединения (DerivedJoiningType.txt)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum JoiningType
{
    /// U - не соединяется
    NonJoining,
    /// C - вызывает соединение (например, ZWJ, татвиль)
    JoinCausing,
    /// D - соединяется с обеих сторон
    DualJoining,
    /// L - соединяется только слева
    LeftJoining,
    /// R - соединяется только справа
    RightJoining,
    /// T - прозрачный
    Transparent,
}

impl JoiningType
{
    /// буква, которой тип записывается в строку для сопоставления с шаблоном правила ZWNJ
    #[inline]
    pub fn letter(&self) -> char
    {
        match self {
            Self::NonJoining => 'U',
            Self::JoinCausing => 'C',
            Self::DualJoining => 'D',
            Self::LeftJoining => 'L',
            Self::RightJoining => 'R',
            Self::Transparent => 'T',
        }
    }
}

impl From<IcuJoiningType> for JoiningType
{
    fn from(value: IcuJoiningType) -> Self
    {
        match value {
            IcuJoiningType::JoinCausing => Self::JoinCausing,
            IcuJoiningType::DualJoining => Self::DualJoining,
            IcuJoiningType::LeftJoining => Self::LeftJoining,
            IcuJoiningType::RightJoining => Self::RightJoining,
            IcuJoiningType::Transparent => Self::Transparent,
            _ => Self::NonJoining,
        }
    }
}
