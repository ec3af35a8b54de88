//! Form state holders. Each form keeps its field values, runs validation
//! on submit and hands back a plain draft record when everything checks
//! out. Field edits go through a closed enum per entity so there is no
//! stringly-typed field dispatch; editing a field clears only that
//! field's error.

pub mod company;
pub mod contact;
pub mod contact_log;
pub mod template;
