use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Caller is not on the administrative allow-list.
    ///
    /// Handled by the update service, which answers with a fixed denial message and
    /// performs no side effects.
    #[error("User {user_id} is not allowed to run administrative commands")]
    AccessDenied {
        /// Discord user ID of the caller
        user_id: u64,
    },
}
