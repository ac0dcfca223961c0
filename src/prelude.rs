pub use crate::{compare::*, error::*, tree::*};
