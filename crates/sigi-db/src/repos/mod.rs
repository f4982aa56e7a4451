//! Repository methods, one module per entity.
//!
//! Each module contributes `impl SigiService` blocks plus a private
//! `row_to_*` parser. SQL lives next to the methods that issue it.

mod entregable;
mod grupo;
mod investigador;
mod semillero;
