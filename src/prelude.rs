pub use crate::float::JassFloat;
pub use crate::rng::{ConstantTable, JassPrng, REAL_EPSILON};
pub use crate::serialize::{Deserialize, Serialize, Snapshot};
pub use crate::{PrngError, PrngResult};
