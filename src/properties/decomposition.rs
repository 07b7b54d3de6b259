/// декомпозиция кодпоинта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition
{
    /// декомпозиция
    pub codes: Vec<u32>,
    /// тип декомпозиции
    pub kind: DecompositionKind,
}

/// тип декомпозиции
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecompositionKind
{
    /// каноническая декомпозиция - один шаг, результат может снова раскладываться
    Canonical,
    /// декомпозиция совместимости (с тегом в UnicodeData.txt) - записана полностью
    Compatibility,
}

impl Decomposition
{
    #[inline]
    pub fn canonical(codes: Vec<u32>) -> Self
    {
        Self {
            codes,
            kind: DecompositionKind::Canonical,
        }
    }

    #[inline]
    pub fn compatibility(codes: Vec<u32>) -> Self
    {
        Self {
            codes,
            kind: DecompositionKind::Compatibility,
        }
    }

    #[inline]
    pub fn is_compatibility(&self) -> bool
    {
        self.kind == DecompositionKind::Compatibility
    }
}
