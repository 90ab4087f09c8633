pub mod case;
pub mod leave_balance;
pub mod leave_request;
