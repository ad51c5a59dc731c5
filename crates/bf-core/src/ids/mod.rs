//! ID type wrappers for type safety.

pub mod init_ticket;
pub mod session_id;

pub use init_ticket::InitTicket;
pub use session_id::StartupSessionId;
