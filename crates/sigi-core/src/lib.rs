//! # sigi-core
//!
//! Core types and validation rules for SIGI (Sistema de Gestión de Grupos
//! de Investigación).
//!
//! This crate provides the foundational types shared across the workspace:
//! - Entity structs for all domain objects (grupos, semilleros,
//!   investigadores, entregables)
//! - Status and type enums with string round-tripping for SQL storage
//! - The semillero staffing validation rules (`NuevoSemillero::validar`)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
