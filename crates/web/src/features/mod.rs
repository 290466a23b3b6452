pub mod auth;
pub mod progreso;
pub mod rutinas;
pub mod sesiones;
pub mod stats;
pub mod usuarios;
