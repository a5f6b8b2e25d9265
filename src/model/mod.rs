//! Pure data structures shared by the cart, the service clients, and the
//! listing glue.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
