//! Mathematical primitives for the planetary-science helpers.

pub mod legendre;
pub mod partition;
pub mod quadrature;
