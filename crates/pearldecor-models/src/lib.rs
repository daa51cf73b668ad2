//! # Pearl Decor Models
//!
//! Domain records and request/response DTOs for the Pearl Decor API.
//!
//! # Modules
//!
//! - [`users`]: User accounts, registration and login payloads
//! - [`clients`]: Client profiles
//! - [`employees`]: Employee profiles for admin accounts
//! - [`notes`]: Notes admins attach to clients
//! - [`contracts`]: Contracts with clients
//! - [`feedback`]: Feedback left by clients
//! - [`meetings`]: Scheduled meetings
//! - [`reports`]: The aggregated per-client report
//!
//! Rows map to their table with `sqlx::FromRow`. Listing endpoints return
//! narrower views of the rows (`NoteEntry`, `FeedbackEntry`, ...) so the wire
//! format stays independent of the table layout.

pub mod clients;
pub mod contracts;
pub mod employees;
pub mod feedback;
pub mod meetings;
pub mod notes;
pub mod reports;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use clients::{ClientDetails, ClientProfile};
pub use contracts::{Contract, ContractSummary, CreateContractDto};
pub use employees::EmployeeDetails;
pub use feedback::{CreateFeedbackDto, Feedback, FeedbackEntry, FeedbackList, FeedbackSummary};
pub use meetings::{CreateMeetingDto, Meeting, MeetingSummary};
pub use notes::{CreateNoteDto, Note, NoteEntry, NoteList};
pub use reports::ClientReport;
pub use users::{LoginRequest, LoginResponse, MessageResponse, NewUser, RegisterRequest, User};
