//! Query-string DTOs

pub mod progress_dto;
