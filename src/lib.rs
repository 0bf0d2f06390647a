
pub mod bezier;
pub mod quadrature;

pub mod geo;
pub use self::geo::*;

mod consts;
pub use self::consts::*;
