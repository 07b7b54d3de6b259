use core::ops::Deref;
use core::ops::DerefMut;

use arrayvec::ArrayVec;

use crate::error::CapacityError;

/// максимальный размер метки в кодпоинтах (рабочий буфер, до проверки длины для DNS)
pub const MAX_LABEL_SIZE: usize = 256;
/// максимальный размер домена в кодпоинтах
pub const MAX_DOMAIN_SIZE: usize = 1024;

/// буфер кодпоинтов метки
pub type Label = CodepointBuffer<MAX_LABEL_SIZE>;
/// буфер кодпоинтов домена (метки вместе с разделителями)
pub type DomainBuffer = CodepointBuffer<MAX_DOMAIN_SIZE>;

/// буфер кодпоинтов фиксированной емкости
/// переполнение - ошибка CapacityError, данные никогда не обрезаются
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodepointBuffer<const N: usize>
{
    codes: ArrayVec<u32, N>,
}

impl<const N: usize> CodepointBuffer<N>
{
    pub fn new() -> Self
    {
        Self {
            codes: ArrayVec::new(),
        }
    }

    /// скопировать кодпоинты в новый буфер
    pub fn from_slice(codes: &[u32]) -> Result<Self, CapacityError>
    {
        let mut buffer = Self::new();
        buffer.extend_from_slice(codes)?;

        Ok(buffer)
    }

    #[inline(always)]
    pub fn push(&mut self, code: u32) -> Result<(), CapacityError>
    {
        self.codes
            .try_push(code)
            .map_err(|_| CapacityError { capacity: N })
    }

    /// вставить кодпоинт в позицию index, сдвинув последующие вправо
    #[inline(always)]
    pub fn insert(&mut self, index: usize, code: u32) -> Result<(), CapacityError>
    {
        self.codes
            .try_insert(index, code)
            .map_err(|_| CapacityError { capacity: N })
    }

    pub fn extend_from_slice(&mut self, codes: &[u32]) -> Result<(), CapacityError>
    {
        self.codes
            .try_extend_from_slice(codes)
            .map_err(|_| CapacityError { capacity: N })
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<u32>
    {
        self.codes.pop()
    }

    #[inline(always)]
    pub fn truncate(&mut self, len: usize)
    {
        self.codes.truncate(len);
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u32]
    {
        self.codes.as_slice()
    }
}

impl<const N: usize> Deref for CodepointBuffer<N>
{
    type Target = [u32];

    #[inline(always)]
    fn deref(&self) -> &[u32]
    {
        self.codes.as_slice()
    }
}

impl<const N: usize> DerefMut for CodepointBuffer<N>
{
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [u32]
    {
        self.codes.as_mut_slice()
    }
}

impl<const N: usize> AsRef<[u32]> for CodepointBuffer<N>
{
    fn as_ref(&self) -> &[u32]
    {
        self.codes.as_slice()
    }
}
