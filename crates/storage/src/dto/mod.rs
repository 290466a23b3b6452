pub mod progreso;
pub mod rutina;
pub mod sesion;
pub mod stats;
pub mod usuario;
