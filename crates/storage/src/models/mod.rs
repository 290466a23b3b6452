mod progreso;
mod rutina;
mod serie;
mod sesion;
mod usuario;

pub use progreso::Progreso;
pub use rutina::Rutina;
pub use serie::Serie;
pub use sesion::Sesion;
pub use usuario::Usuario;
