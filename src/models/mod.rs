pub mod field;
pub mod loaders;
pub mod order;
pub mod run_result;
pub mod target;

pub use field::Field;
pub use loaders::{load_roster, parse_roster};
pub use order::{Book, Cart, CartItem, CaseOutcome, CustomerForm, FormValue, OrderPayload};
pub use run_result::RunResult;
pub use target::{Roster, Target};
