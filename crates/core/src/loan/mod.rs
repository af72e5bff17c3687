//! Opening loan records derived from snapshot data.
//!
//! # Modules
//!
//! - `directory` - Member directory lookup contract
//! - `ids` - Injected loan ID generation
//! - `opening` - Opening loan recorder

pub mod directory;
pub mod ids;
pub mod opening;

pub use directory::{Member, MemberDirectory, StaticMemberDirectory};
pub use ids::{LoanIdSource, RandomLoanIds, SequentialLoanIds};
pub use opening::{LoanOpeningRecorder, LoanOpeningRow, LoanRecord, LoanStatus};
