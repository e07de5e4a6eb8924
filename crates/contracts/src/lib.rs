//! DTO, которыми фронтенд обменивается с REST backend.
//!
//! Группировка повторяет фронтенд: `domain` (агрегаты), `projections`
//! (отчёты и прогнозы), `usecases` (операции с побочными эффектами).

pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
